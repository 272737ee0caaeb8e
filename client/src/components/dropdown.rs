//! Dropdown menu: trigger, floating panel, and styled links.
//!
//! DESIGN
//! ======
//! `Dropdown` owns a single open/closed signal and shares it with its parts
//! through context, so triggers and panels can be nested anywhere beneath it.
//! Panel visibility is driven entirely by that signal.

#[cfg(test)]
#[path = "dropdown_test.rs"]
mod dropdown_test;

use leptos::prelude::*;

use crate::util::classes::join_classes;

pub const DEFAULT_WIDTH: &str = "48";
pub const DEFAULT_CONTENT_CLASSES: &str = "py-1 bg-white";

const LINK_CLASSES: &str = "block w-full px-4 py-2 text-start text-sm leading-5 text-gray-700 hover:bg-gray-100 \
                            focus:outline-none focus:bg-gray-100 transition duration-150 ease-in-out";

/// Shared open state for one dropdown.
#[derive(Clone, Copy, Debug)]
pub struct DropdownContext {
    pub open: RwSignal<bool>,
}

impl DropdownContext {
    /// Closed dropdown state. Must be created under a reactive owner.
    #[must_use]
    pub fn new() -> Self {
        Self { open: RwSignal::new(false) }
    }

    pub fn is_open(&self) -> bool {
        self.open.get_untracked()
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    /// Toggle from a trigger key press; other keys are ignored.
    pub fn handle_trigger_key(&self, key: &str) {
        if trigger_key_toggles(key) {
            self.toggle();
        }
    }

    /// Close from a key press inside the panel; other keys are ignored.
    pub fn handle_panel_key(&self, key: &str) {
        if panel_key_closes(key) {
            self.close();
        }
    }
}

impl Default for DropdownContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Which edge of the trigger the panel lines up with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    Left,
    #[default]
    Right,
}

pub fn alignment_classes(align: Align) -> &'static str {
    match align {
        Align::Left => "ltr:origin-top-left rtl:origin-top-right start-0",
        Align::Right => "ltr:origin-top-right rtl:origin-top-left end-0",
    }
}

/// Only the `"48"` width has a utility class; anything else leaves sizing to the caller.
pub fn width_classes(width: &str) -> &'static str {
    if width == DEFAULT_WIDTH { "w-48" } else { "" }
}

pub fn panel_classes(align: Align, width: &str) -> String {
    join_classes(&["absolute z-50 mt-2 rounded-md shadow-lg", alignment_classes(align), width_classes(width)])
}

pub fn link_classes(extra: &str) -> String {
    join_classes(&[LINK_CLASSES, extra])
}

/// Keys that toggle the trigger.
pub fn trigger_key_toggles(key: &str) -> bool {
    key == "Enter"
}

/// Keys that close an open panel.
pub fn panel_key_closes(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Root wrapper providing the open/closed state.
#[component]
pub fn Dropdown(children: Children) -> impl IntoView {
    provide_context(DropdownContext::new());

    view! { <div class="relative">{children()}</div> }
}

/// Clickable area that opens and closes the panel.
#[component]
pub fn DropdownTrigger(children: Children) -> impl IntoView {
    let ctx = expect_context::<DropdownContext>();

    view! {
        <div
            role="button"
            tabindex="0"
            class="cursor-pointer"
            aria-haspopup="true"
            aria-expanded=move || if ctx.open.get() { "true" } else { "false" }
            on:click=move |_| ctx.toggle()
            on:keydown=move |ev: leptos::ev::KeyboardEvent| ctx.handle_trigger_key(&ev.key())
        >
            {children()}
        </div>
    }
}

/// Floating panel, rendered only while the dropdown is open.
///
/// Any click inside stops bubbling and closes the panel.
#[component]
pub fn DropdownContent(
    #[prop(optional)] align: Align,
    #[prop(into, default = DEFAULT_WIDTH.to_owned())] width: String,
    #[prop(into, default = DEFAULT_CONTENT_CLASSES.to_owned())] content_classes: String,
    children: ChildrenFn,
) -> impl IntoView {
    let ctx = expect_context::<DropdownContext>();
    let outer = panel_classes(align, &width);
    let inner = join_classes(&["rounded-md ring-1 ring-black ring-opacity-5", &content_classes]);

    view! {
        <Show when=move || ctx.open.get()>
            <div
                role="dialog"
                class=outer.clone()
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    ctx.close();
                }
                on:keydown=move |ev: leptos::ev::KeyboardEvent| ctx.handle_panel_key(&ev.key())
            >
                <div class=inner.clone()>{children()}</div>
            </div>
        </Show>
    }
}

/// Menu entry rendered as a full-width anchor.
#[component]
pub fn DropdownLink(
    #[prop(into)] href: String,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <a href=href class=link_classes(&class)>{children()}</a> }
}
