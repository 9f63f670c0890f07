//! Servings Stepper
//!
//! +/- control bound to a `ServingCounter`. Never goes below one serving.

use leptos::prelude::*;
use meal_domain::servings::ServingCounter;

#[component]
pub fn ServingsStepper(
    counter: ReadSignal<ServingCounter>,
    set_counter: WriteSignal<ServingCounter>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    view! {
        <div class="servings-stepper">
            {label.map(|label| view! { <span class="stepper-label">{label}</span> })}
            <button
                type="button"
                class="stepper-btn"
                disabled=move || counter.get().current() <= 1
                on:click=move |_| set_counter.update(|c| c.decrement())
            >
                "−"
            </button>
            <span class="stepper-value">{move || counter.get().current()}</span>
            <button
                type="button"
                class="stepper-btn"
                on:click=move |_| set_counter.update(|c| c.increment())
            >
                "+"
            </button>
            <Show when=move || counter.get().is_adjusted()>
                <button
                    type="button"
                    class="stepper-reset"
                    title=move || format!("Back to {} servings", counter.get().base())
                    on:click=move |_| set_counter.update(|c| c.reset())
                >
                    "↺"
                </button>
            </Show>
        </div>
    }
}
