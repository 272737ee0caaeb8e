//! Working set and editor state for the star manager.
//!
//! DESIGN
//! ======
//! Every REST round trip is split into a synchronous `prepare_*` step (local
//! validation, pending guard, payload) and a synchronous `finish_*` step that
//! applies the server's answer. The async call in between never holds a
//! borrow of this state, so the same transitions drive the Leptos signal and
//! plain test fixtures.
//!
//! A rejected call never changes `items`: the error is logged and a generic
//! message is kept for display.

#[cfg(test)]
#[path = "stars_test.rs"]
mod stars_test;

use crate::net::api::{ApiError, StarPayload};
use crate::net::types::{Star, StarId};
use crate::state::star_form::{DraftError, StarDraft};

pub const LOAD_FAILED: &str = "The stars could not be loaded.";
pub const CREATE_FAILED: &str = "The star could not be created. Please try again.";
pub const UPDATE_FAILED: &str = "The star could not be updated. Please try again.";
pub const DELETE_FAILED: &str = "The star could not be deleted. Please try again.";

/// Which editor panel a form control belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormTarget {
    Create,
    Edit,
}

impl FormTarget {
    /// Prefix keeping input ids unique when both panels exist in the DOM.
    #[must_use]
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Edit => "edit",
        }
    }
}

/// Manager state: the working set plus both editor panels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StarsState {
    /// Locally cached copy of the collection.
    pub items: Vec<Star>,
    pub loading: bool,
    /// A mutating request is in flight; further submissions are refused.
    pub pending: bool,
    pub show_create: bool,
    pub create_form: StarDraft,
    /// Edit panel is visible while this is `Some`.
    pub editing: Option<StarDraft>,
    pub error: Option<String>,
}

impl StarsState {
    #[must_use]
    pub fn with_items(items: Vec<Star>) -> Self {
        Self { items, ..Self::default() }
    }

    // =========================================================================
    // LOAD
    // =========================================================================

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Replace the working set with a fresh list.
    pub fn finish_load(&mut self, result: Result<Vec<Star>, ApiError>) {
        self.loading = false;
        match result {
            Ok(stars) => {
                self.items = stars;
                self.error = None;
            }
            Err(e) => {
                leptos::logging::error!("There was an error fetching the stars: {e}");
                self.error = Some(LOAD_FAILED.to_owned());
            }
        }
    }

    // =========================================================================
    // FORM TRANSITIONS
    // =========================================================================

    /// Show an empty create panel, closing any edit in progress.
    pub fn open_create(&mut self) {
        self.create_form = StarDraft::default();
        self.editing = None;
        self.show_create = true;
        self.error = None;
    }

    /// Open the edit panel for a record.
    pub fn begin_edit(&mut self, star: &Star) {
        self.editing = Some(StarDraft::from_star(star));
        self.show_create = false;
        self.error = None;
    }

    /// Close both panels and clear their drafts.
    pub fn reset_form(&mut self) {
        self.create_form = StarDraft::default();
        self.editing = None;
        self.show_create = false;
        self.error = None;
    }

    /// Draft that receives file selections: the edit draft when editing.
    pub fn active_draft_mut(&mut self) -> Option<&mut StarDraft> {
        if self.editing.is_some() {
            return self.editing.as_mut();
        }
        self.show_create.then_some(&mut self.create_form)
    }

    /// Draft behind a panel, if that panel is open.
    #[must_use]
    pub fn draft(&self, target: FormTarget) -> Option<&StarDraft> {
        match target {
            FormTarget::Create => self.show_create.then_some(&self.create_form),
            FormTarget::Edit => self.editing.as_ref(),
        }
    }

    pub fn draft_mut(&mut self, target: FormTarget) -> Option<&mut StarDraft> {
        match target {
            FormTarget::Create => self.show_create.then_some(&mut self.create_form),
            FormTarget::Edit => self.editing.as_mut(),
        }
    }

    fn reject(&mut self, err: &DraftError) {
        self.error = Some(err.to_string());
    }

    // =========================================================================
    // CREATE
    // =========================================================================

    /// Validate the create draft and mark the request pending.
    ///
    /// Returns `None` (and sends nothing) while another request is pending or
    /// when validation fails.
    pub fn prepare_create<F>(&mut self, image: Option<F>) -> Option<StarPayload<F>> {
        if self.pending {
            return None;
        }
        match self.create_form.create_payload(image) {
            Ok(payload) => {
                self.pending = true;
                self.error = None;
                Some(payload)
            }
            Err(e) => {
                self.reject(&e);
                None
            }
        }
    }

    /// Append the created record and close the form.
    pub fn finish_create(&mut self, result: Result<Star, ApiError>) {
        self.pending = false;
        match result {
            Ok(star) => {
                self.items.push(star);
                self.reset_form();
            }
            Err(e) => {
                leptos::logging::error!("There was an error creating the star: {e}");
                self.error = Some(CREATE_FAILED.to_owned());
            }
        }
    }

    // =========================================================================
    // UPDATE
    // =========================================================================

    /// Validate the edit draft and mark the request pending.
    pub fn prepare_update<F>(&mut self, image: Option<F>) -> Option<(StarId, StarPayload<F>)> {
        if self.pending {
            return None;
        }
        let draft = self.editing.as_ref()?;
        match draft.update_payload(image) {
            Ok(request) => {
                self.pending = true;
                self.error = None;
                Some(request)
            }
            Err(e) => {
                self.reject(&e);
                None
            }
        }
    }

    /// Replace the record with the server's version and close the form.
    pub fn finish_update(&mut self, id: StarId, result: Result<Star, ApiError>) {
        self.pending = false;
        match result {
            Ok(updated) => {
                if let Some(star) = self.items.iter_mut().find(|star| star.id == id) {
                    *star = updated;
                }
                self.reset_form();
            }
            Err(e) => {
                leptos::logging::error!("There was an error updating the star {id}: {e}");
                self.error = Some(UPDATE_FAILED.to_owned());
            }
        }
    }

    // =========================================================================
    // DELETE
    // =========================================================================

    /// Mark a delete pending. Returns `false` while another request is in flight.
    pub fn prepare_delete(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        self.error = None;
        true
    }

    /// Drop exactly the record with `id`.
    pub fn finish_delete(&mut self, id: StarId, result: Result<(), ApiError>) {
        self.pending = false;
        match result {
            Ok(()) => {
                self.items.retain(|star| star.id != id);
                if self.editing.as_ref().and_then(|d| d.id) == Some(id) {
                    self.reset_form();
                }
            }
            Err(e) => {
                leptos::logging::error!("There was an error deleting the star {id}: {e}");
                self.error = Some(DELETE_FAILED.to_owned());
            }
        }
    }
}
