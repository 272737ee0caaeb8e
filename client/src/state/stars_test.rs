use super::*;

// =============================================================
// Helpers
// =============================================================

fn star(id: StarId, name: &str, first_name: &str) -> Star {
    Star {
        id,
        name: name.to_owned(),
        first_name: first_name.to_owned(),
        description: format!("{first_name} {name} bio"),
        image: Some(format!("https://cdn.example.com/{id}.png")),
    }
}

fn seeded() -> StarsState {
    StarsState::with_items(vec![star(1, "Doe", "Jane"), star(2, "Roe", "Rick"), star(3, "Poe", "Edgar")])
}

fn fill_create(state: &mut StarsState) {
    state.open_create();
    state.create_form.name = "Moe".to_owned();
    state.create_form.first_name = "Mia".to_owned();
    state.create_form.description = "New".to_owned();
}

// =============================================================
// Load
// =============================================================

#[test]
fn finish_load_replaces_working_set() {
    let mut state = seeded();
    state.begin_load();
    assert!(state.loading);
    state.finish_load(Ok(vec![star(9, "Zed", "Zoe")]));
    assert!(!state.loading);
    assert_eq!(state.items, vec![star(9, "Zed", "Zoe")]);
}

#[test]
fn failed_load_keeps_items_and_reports() {
    let mut state = seeded();
    let before = state.items.clone();
    state.begin_load();
    state.finish_load(Err(ApiError::Status { status: 500 }));
    assert_eq!(state.items, before);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(LOAD_FAILED));
}

// =============================================================
// Form transitions
// =============================================================

#[test]
fn open_create_closes_edit_panel() {
    let mut state = seeded();
    state.begin_edit(&star(1, "Doe", "Jane"));
    state.open_create();
    assert!(state.show_create);
    assert!(state.editing.is_none());
    assert_eq!(state.create_form, StarDraft::default());
}

#[test]
fn begin_edit_closes_create_panel() {
    let mut state = seeded();
    state.open_create();
    state.begin_edit(&star(2, "Roe", "Rick"));
    assert!(!state.show_create);
    assert_eq!(state.editing.as_ref().and_then(|d| d.id), Some(2));
}

#[test]
fn reset_form_clears_both_panels() {
    let mut state = seeded();
    fill_create(&mut state);
    state.error = Some("boom".to_owned());
    state.reset_form();
    assert!(!state.show_create);
    assert!(state.editing.is_none());
    assert_eq!(state.create_form, StarDraft::default());
    assert!(state.error.is_none());
}

#[test]
fn active_draft_prefers_edit_then_create() {
    let mut state = seeded();
    assert!(state.active_draft_mut().is_none());
    state.open_create();
    if let Some(draft) = state.active_draft_mut() {
        draft.staged_image = Some("a.png".to_owned());
    }
    assert_eq!(state.create_form.staged_image.as_deref(), Some("a.png"));
    state.begin_edit(&star(1, "Doe", "Jane"));
    if let Some(draft) = state.active_draft_mut() {
        draft.staged_image = Some("b.png".to_owned());
    }
    assert_eq!(state.editing.as_ref().and_then(|d| d.staged_image.as_deref()), Some("b.png"));
}

// =============================================================
// Create
// =============================================================

#[test]
fn successful_create_appends_exactly_one_record_and_clears_form() {
    let mut state = seeded();
    fill_create(&mut state);
    let payload = state.prepare_create::<&str>(None).unwrap();
    assert_eq!(payload.field("name"), Some("Moe"));
    assert!(state.pending);

    state.finish_create(Ok(star(4, "Moe", "Mia")));
    assert_eq!(state.items.len(), 4);
    assert_eq!(state.items.last(), Some(&star(4, "Moe", "Mia")));
    assert!(!state.pending);
    assert!(!state.show_create);
    assert_eq!(state.create_form, StarDraft::default());
}

#[test]
fn failed_create_leaves_items_identical_and_keeps_form() {
    let mut state = seeded();
    fill_create(&mut state);
    let before = state.items.clone();
    let _ = state.prepare_create::<&str>(None).unwrap();
    state.finish_create(Err(ApiError::Status { status: 422 }));
    assert_eq!(state.items, before);
    assert!(state.show_create);
    assert_eq!(state.create_form.name, "Moe");
    assert_eq!(state.error.as_deref(), Some(CREATE_FAILED));
    assert!(!state.pending);
}

#[test]
fn invalid_create_draft_is_rejected_locally() {
    let mut state = seeded();
    state.open_create();
    assert!(state.prepare_create::<&str>(None).is_none());
    assert!(!state.pending);
    assert_eq!(state.error.as_deref(), Some("The name field is required."));
}

#[test]
fn pending_request_blocks_second_submission() {
    let mut state = seeded();
    fill_create(&mut state);
    assert!(state.prepare_create::<&str>(None).is_some());
    assert!(state.prepare_create::<&str>(None).is_none());
    assert!(!state.prepare_delete());
}

// =============================================================
// Update
// =============================================================

#[test]
fn successful_update_replaces_only_matching_record() {
    let mut state = seeded();
    state.begin_edit(&star(2, "Roe", "Rick"));
    if let Some(draft) = state.editing.as_mut() {
        draft.description = "Updated".to_owned();
    }
    let (id, payload) = state.prepare_update::<&str>(None).unwrap();
    assert_eq!(id, 2);
    assert_eq!(payload.field("description"), Some("Updated"));

    let mut updated = star(2, "Roe", "Rick");
    updated.description = "Updated".to_owned();
    state.finish_update(2, Ok(updated.clone()));

    assert_eq!(state.items, vec![star(1, "Doe", "Jane"), updated, star(3, "Poe", "Edgar")]);
    assert!(state.editing.is_none());
}

#[test]
fn update_without_edit_panel_sends_nothing() {
    let mut state = seeded();
    assert!(state.prepare_update::<&str>(None).is_none());
    assert!(!state.pending);
}

#[test]
fn failed_update_leaves_items_identical() {
    let mut state = seeded();
    let before = state.items.clone();
    state.begin_edit(&star(1, "Doe", "Jane"));
    let _ = state.prepare_update::<&str>(None).unwrap();
    state.finish_update(1, Err(ApiError::Request("offline".to_owned())));
    assert_eq!(state.items, before);
    assert!(state.editing.is_some());
    assert_eq!(state.error.as_deref(), Some(UPDATE_FAILED));
}

// =============================================================
// Delete
// =============================================================

#[test]
fn successful_delete_removes_only_matching_record() {
    let mut state = seeded();
    assert!(state.prepare_delete());
    state.finish_delete(2, Ok(()));
    assert_eq!(state.items, vec![star(1, "Doe", "Jane"), star(3, "Poe", "Edgar")]);
    assert!(!state.pending);
}

#[test]
fn deleting_the_record_being_edited_closes_the_editor() {
    let mut state = seeded();
    state.begin_edit(&star(3, "Poe", "Edgar"));
    assert!(state.prepare_delete());
    state.finish_delete(3, Ok(()));
    assert!(state.editing.is_none());
}

#[test]
fn failed_delete_leaves_items_identical() {
    let mut state = seeded();
    let before = state.items.clone();
    assert!(state.prepare_delete());
    state.finish_delete(1, Err(ApiError::Status { status: 403 }));
    assert_eq!(state.items, before);
    assert_eq!(state.error.as_deref(), Some(DELETE_FAILED));
}

#[test]
fn drafts_are_only_reachable_while_their_panel_is_open() {
    let mut state = seeded();
    assert!(state.draft(FormTarget::Create).is_none());
    assert!(state.draft(FormTarget::Edit).is_none());

    state.open_create();
    if let Some(draft) = state.draft_mut(FormTarget::Create) {
        draft.name = "Moe".to_owned();
    }
    assert_eq!(state.draft(FormTarget::Create).map(|d| d.name.as_str()), Some("Moe"));

    state.begin_edit(&star(1, "Doe", "Jane"));
    assert!(state.draft(FormTarget::Create).is_none());
    assert_eq!(state.draft(FormTarget::Edit).and_then(|d| d.id), Some(1));
    assert_eq!(FormTarget::Edit.id_prefix(), "edit");
}
