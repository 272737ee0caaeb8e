//! Async orchestration of star REST calls against the manager state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call these with the `HttpStarApi` and their state signal; tests
//! drive them with a recording mock and a `RefCell`. Each action borrows the
//! state only before and after the await point.

#[cfg(test)]
#[path = "star_actions_test.rs"]
mod star_actions_test;

use std::cell::RefCell;

use leptos::prelude::*;

use crate::net::api::StarApi;
use crate::net::types::StarId;
use crate::state::stars::StarsState;

/// Short-lived mutable access to the manager state.
pub trait StarsStore {
    fn with_state(&self, f: impl FnOnce(&mut StarsState));
}

impl StarsStore for RwSignal<StarsState> {
    fn with_state(&self, f: impl FnOnce(&mut StarsState)) {
        self.update(f);
    }
}

impl StarsStore for RefCell<StarsState> {
    fn with_state(&self, f: impl FnOnce(&mut StarsState)) {
        f(&mut self.borrow_mut());
    }
}

/// Fetch the full collection into the working set.
pub async fn load_stars<A: StarApi, S: StarsStore>(api: &A, store: &S) {
    store.with_state(StarsState::begin_load);
    let result = api.list_stars().await;
    store.with_state(|s| s.finish_load(result));
}

/// Submit the create draft; appends the created record on success.
pub async fn create_star<A: StarApi, S: StarsStore>(api: &A, store: &S, image: Option<A::File>) {
    let mut request = None;
    store.with_state(|s| request = s.prepare_create(image));
    let Some(payload) = request else {
        return;
    };
    let result = api.create_star(payload).await;
    store.with_state(|s| s.finish_create(result));
}

/// Submit the edit draft; replaces the record by id on success.
pub async fn update_star<A: StarApi, S: StarsStore>(api: &A, store: &S, image: Option<A::File>) {
    let mut request = None;
    store.with_state(|s| request = s.prepare_update(image));
    let Some((id, payload)) = request else {
        return;
    };
    let result = api.update_star(id, payload).await;
    store.with_state(|s| s.finish_update(id, result));
}

/// Delete one record; removes it from the working set on success.
pub async fn delete_star<A: StarApi, S: StarsStore>(api: &A, store: &S, id: StarId) {
    let mut allowed = false;
    store.with_state(|s| allowed = s.prepare_delete());
    if !allowed {
        return;
    }
    let result = api.delete_star(id).await;
    store.with_state(|s| s.finish_delete(id, result));
}
