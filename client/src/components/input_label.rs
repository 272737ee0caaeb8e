//! Form label with consistent typography.

#[cfg(test)]
#[path = "input_label_test.rs"]
mod input_label_test;

use leptos::prelude::*;

use crate::util::classes::join_classes;

const BASE_CLASSES: &str = "block font-medium text-sm text-gray-700";

pub fn input_label_classes(extra: &str) -> String {
    join_classes(&[BASE_CLASSES, extra])
}

/// `<label>` bound to a control id. Shows `value` when set, otherwise the children.
#[component]
pub fn InputLabel(
    #[prop(into)] for_: String,
    #[prop(into, optional)] value: String,
    #[prop(into, optional)] class: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let content = if value.is_empty() {
        children.map(|children| children())
    } else {
        Some(value.into_any())
    };

    view! {
        <label for=for_ class=input_label_classes(&class)>
            {content}
        </label>
    }
}
