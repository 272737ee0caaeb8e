//! Neutral outline button used for cancel and low-emphasis actions.

#[cfg(test)]
#[path = "secondary_button_test.rs"]
mod secondary_button_test;

use leptos::prelude::*;

use crate::util::classes::join_classes;

const BASE_CLASSES: &str = "inline-flex items-center px-4 py-2 bg-white border border-gray-300 rounded-md \
                            font-semibold text-xs text-gray-700 uppercase tracking-widest shadow-sm \
                            hover:bg-gray-50 focus:outline-none focus:ring-2 focus:ring-indigo-500 \
                            focus:ring-offset-2 disabled:opacity-25 transition ease-in-out duration-150";

pub fn secondary_button_classes(disabled: bool, extra: &str) -> String {
    join_classes(&[BASE_CLASSES, if disabled { "opacity-25" } else { "" }, extra])
}

#[component]
pub fn SecondaryButton(
    #[prop(into, default = "button".to_owned())] button_type: String,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] disabled: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let is_disabled = move || disabled.get().unwrap_or(false);

    view! {
        <button
            type=button_type
            class=move || secondary_button_classes(is_disabled(), &class)
            disabled=is_disabled
            on:click=move |_| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
