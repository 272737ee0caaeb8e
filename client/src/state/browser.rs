//! Read-only browsing state: the collection and one active index.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use crate::net::api::ApiError;
use crate::net::types::Star;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowserState {
    pub stars: Vec<Star>,
    pub active_index: usize,
    pub loading: bool,
}

impl BrowserState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Store the fetched list and select its first entry.
    pub fn finish_load(&mut self, result: Result<Vec<Star>, ApiError>) {
        self.loading = false;
        match result {
            Ok(stars) => {
                self.stars = stars;
                self.active_index = 0;
            }
            Err(e) => leptos::logging::error!("Error fetching stars: {e}"),
        }
    }

    /// Any index is accepted; out-of-range simply selects nothing.
    pub fn select(&mut self, index: usize) {
        self.active_index = index;
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Star> {
        self.stars.get(self.active_index)
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        index == self.active_index
    }
}
