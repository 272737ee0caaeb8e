//! Star collection manager: table of records with create and edit panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosted by the dashboard. State lives in a local `RwSignal<StarsState>`;
//! every REST round trip goes through `util::star_actions` with the browser
//! `HttpStarApi`. The staged image file is kept beside the state in a
//! local-only `StoredValue` because browser files are not `Send`.

#[cfg(test)]
#[path = "stars_table_test.rs"]
mod stars_table_test;

use leptos::prelude::*;

use crate::components::input_error::InputError;
use crate::components::input_label::InputLabel;
use crate::components::secondary_button::SecondaryButton;
use crate::net::api::StagedFile;
use crate::state::star_form::DraftField;
use crate::state::stars::{FormTarget, StarsState};
use crate::util::sanitize::safe_image_src;

#[cfg(feature = "hydrate")]
use crate::net::api::HttpStarApi;
#[cfg(feature = "hydrate")]
use crate::util::star_actions::{create_star, delete_star, load_stars, update_star};

type StagedSlot = StoredValue<Option<StagedFile>, LocalStorage>;

const INPUT_CLASSES: &str = "mt-1 block w-full rounded-md border-gray-300 shadow-sm \
                             focus:border-indigo-500 focus:ring-indigo-500";
const PRIMARY_BUTTON_CLASSES: &str = "inline-flex items-center px-4 py-2 bg-gray-800 border border-transparent \
                                      rounded-md font-semibold text-xs text-white uppercase tracking-widest \
                                      hover:bg-gray-700 disabled:opacity-25 transition ease-in-out duration-150";

const EDIT_BUTTON_CLASSES: &str = "text-indigo-600 hover:text-indigo-900 me-3 disabled:opacity-25";
const DELETE_BUTTON_CLASSES: &str = "text-red-600 hover:text-red-900 disabled:opacity-25";

/// DOM id of a form control, unique per panel.
pub fn input_id(target: FormTarget, key: &str) -> String {
    format!("{}-{key}", target.id_prefix())
}

/// Forget the staged file once neither panel is open.
#[cfg(feature = "hydrate")]
fn clear_staged_when_closed(state: RwSignal<StarsState>, staged: StagedSlot) {
    if state.with_untracked(|s| !s.show_create && s.editing.is_none()) {
        staged.set_value(None);
    }
}

/// Manager view for the dashboard.
#[component]
pub fn StarsTable() -> impl IntoView {
    let state = RwSignal::new(StarsState::default());
    let staged: StagedSlot = StoredValue::new_local(None);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        load_stars(&HttpStarApi, &state).await;
    });

    let pending = Signal::derive(move || Some(state.with(|s| s.pending)));

    let on_new = move |_| {
        staged.set_value(None);
        state.update(StarsState::open_create);
    };

    let on_cancel = Callback::new(move |()| {
        staged.set_value(None);
        state.update(StarsState::reset_form);
    });

    let on_submit_create = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let image = staged.get_value();
            leptos::task::spawn_local(async move {
                create_star(&HttpStarApi, &state, image).await;
                clear_staged_when_closed(state, staged);
            });
        }
    });

    let on_submit_update = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let image = staged.get_value();
            leptos::task::spawn_local(async move {
                update_star(&HttpStarApi, &state, image).await;
                clear_staged_when_closed(state, staged);
            });
        }
    });

    let on_delete = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            delete_star(&HttpStarApi, &state, id).await;
            clear_staged_when_closed(state, staged);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let rows = move || {
        state
            .get()
            .items
            .into_iter()
            .map(|star| {
                let id = star.id;
                let src = star.image.as_deref().map(safe_image_src);
                let display_name = star.display_name();
                let description = star.description.clone();
                view! {
                    <tr class="border-b border-gray-100">
                        <td class="px-4 py-2">
                            {src.map(|src| view! { <img src=src alt="" class="h-12 w-12 rounded object-cover"/> })}
                        </td>
                        <td class="px-4 py-2 font-medium text-gray-900">{display_name}</td>
                        <td class="px-4 py-2 text-sm text-gray-600">{description}</td>
                        <td class="px-4 py-2 text-right whitespace-nowrap">
                            <button
                                type="button"
                                class=EDIT_BUTTON_CLASSES
                                disabled=move || state.with(|s| s.pending)
                                on:click=move |_| {
                                    staged.set_value(None);
                                    state.update(|s| s.begin_edit(&star));
                                }
                            >
                                "Edit"
                            </button>
                            <button
                                type="button"
                                class=DELETE_BUTTON_CLASSES
                                disabled=move || state.with(|s| s.pending)
                                on:click=move |_| on_delete.run(id)
                            >
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="bg-white shadow-sm sm:rounded-lg p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-lg font-medium text-gray-900">"Stars"</h2>
                <button type="button" class=PRIMARY_BUTTON_CLASSES disabled=move || state.with(|s| s.pending) on:click=on_new>
                    "New star"
                </button>
            </div>

            <InputError message=Signal::derive(move || state.with(|s| s.error.clone())) class="mb-4"/>

            <Show when=move || state.with(|s| s.show_create)>
                <StarForm
                    state=state
                    staged=staged
                    target=FormTarget::Create
                    title="Create a star"
                    submit_label="Create"
                    pending=pending
                    on_submit=on_submit_create
                    on_cancel=on_cancel
                />
            </Show>

            <Show when=move || state.with(|s| s.editing.is_some())>
                <StarForm
                    state=state
                    staged=staged
                    target=FormTarget::Edit
                    title="Edit star"
                    submit_label="Save"
                    pending=pending
                    on_submit=on_submit_update
                    on_cancel=on_cancel
                />
            </Show>

            <Show
                when=move || !state.with(|s| s.loading)
                fallback=move || view! { <p class="text-sm text-gray-500">"Loading stars..."</p> }
            >
                <table class="min-w-full text-left">
                    <thead>
                        <tr class="border-b border-gray-200 text-xs uppercase text-gray-500">
                            <th class="px-4 py-2">"Image"</th>
                            <th class="px-4 py-2">"Name"</th>
                            <th class="px-4 py-2">"Description"</th>
                            <th class="px-4 py-2"></th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </Show>
        </div>
    }
}

/// Create or edit panel bound to one draft.
#[component]
fn StarForm(
    state: RwSignal<StarsState>,
    staged: StagedSlot,
    target: FormTarget,
    title: &'static str,
    submit_label: &'static str,
    pending: Signal<Option<bool>>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let image_id = input_id(target, "image");
    let preview = move || state.with(|s| s.draft(target).and_then(|d| d.preview_src()));
    let staged_name = move || state.with(|s| s.draft(target).and_then(|d| d.staged_image.clone()));

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let file = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let name = file.as_ref().map(web_sys::File::name);
            staged.set_value(file);
            state.update(|s| {
                if let Some(draft) = s.draft_mut(target) {
                    draft.staged_image = name;
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, staged);
        }
    };

    view! {
        <form
            class="mb-6 space-y-4 rounded-md border border-gray-200 p-4"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <h3 class="font-medium text-gray-900">{title}</h3>
            <DraftInput state=state target=target field=DraftField::Name label="Name"/>
            <DraftInput state=state target=target field=DraftField::FirstName label="First name"/>
            <DraftInput state=state target=target field=DraftField::Description label="Description" multiline=true/>

            <div>
                <InputLabel for_=image_id.clone() value="Image"/>
                {move || preview().map(|src| view! { <img src=src alt="" class="mt-1 h-20 w-20 rounded object-cover"/> })}
                <input id=image_id.clone() type="file" accept="image/*" class="mt-1 block text-sm" on:change=on_file/>
                {move || staged_name().map(|name| view! { <p class="mt-1 text-xs text-gray-500">{name}</p> })}
            </div>

            <div class="flex items-center gap-3">
                <button type="submit" class=PRIMARY_BUTTON_CLASSES disabled=move || pending.get().unwrap_or(false)>
                    {submit_label}
                </button>
                <SecondaryButton disabled=pending on_click=on_cancel>
                    "Cancel"
                </SecondaryButton>
            </div>
        </form>
    }
}

/// Labelled text input or textarea writing into one draft field.
#[component]
fn DraftInput(
    state: RwSignal<StarsState>,
    target: FormTarget,
    field: DraftField,
    label: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let id = input_id(target, field.key());
    let value = move || state.with(|s| s.draft(target).map(|d| d.field(field).to_owned()).unwrap_or_default());
    let on_input = move |ev: leptos::ev::Event| {
        let next = event_target_value(&ev);
        state.update(|s| {
            if let Some(draft) = s.draft_mut(target) {
                draft.set_field(field, next);
            }
        });
    };

    let control = if multiline {
        view! { <textarea id=id.clone() rows="4" class=INPUT_CLASSES prop:value=value on:input=on_input></textarea> }
            .into_any()
    } else {
        view! { <input id=id.clone() type="text" class=INPUT_CLASSES prop:value=value on:input=on_input/> }.into_any()
    };

    view! {
        <div>
            <InputLabel for_=id value=label/>
            {control}
        </div>
    }
}
