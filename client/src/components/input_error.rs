//! Validation message shown beneath a field.

use leptos::prelude::*;

use crate::util::classes::join_classes;

/// Renders nothing while the message is absent or empty.
#[component]
pub fn InputError(
    #[prop(into, optional)] message: MaybeProp<String>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let class = join_classes(&["text-sm text-red-600", &class]);
    let text = move || message.get().filter(|m| !m.is_empty());

    view! {
        <Show when=move || text().is_some()>
            <p class=class.clone() role="alert">
                {move || text().unwrap_or_default()}
            </p>
        </Show>
    }
}
