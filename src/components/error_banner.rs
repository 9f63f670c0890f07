//! Error Banner
//!
//! Inline message for the last failed action of a page or modal.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-banner" role="alert">
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
