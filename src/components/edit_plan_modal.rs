//! Edit Plan Modal
//!
//! Details of a planned meal: change the servings with a live preview of the
//! scaled ingredients, remove the plan, or save someone else's recipe.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::info;
use meal_domain::models::DailyPlan;
use meal_domain::servings::ServingCounter;

use crate::api;
use crate::components::delete_confirm_button::DeleteConfirmButton;
use crate::components::error_banner::ErrorBanner;
use crate::components::ingredient_list::IngredientList;
use crate::components::servings_stepper::ServingsStepper;
use crate::context::use_auth;
use crate::markdown::render_instructions;

#[component]
pub fn EditPlanModal(
    plan: DailyPlan,
    #[prop(into)] on_close: Callback<()>,
    /// (plan id, new target servings)
    #[prop(into)]
    on_update: Callback<(u32, u32)>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let auth = use_auth();
    let plan_id = plan.id;
    let planned_servings = plan.target_servings;
    let base = plan.meal_details.as_ref().map(|m| m.base_servings).unwrap_or(1);
    let (counter, set_counter) = signal(ServingCounter::with_current(base, planned_servings));
    let (importing, set_importing) = signal(false);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let username = auth.username().unwrap_or_default();
    let title = plan.title();
    let slot_label = plan.meal_slot.label();

    let body = match plan.meal_details.clone().filter(|_| !plan.is_eating_out) {
        Some(meal) => {
            let meal_id = meal.id;
            let owner = if meal.is_owned_by(&username) {
                "By you".to_string()
            } else {
                format!("By {}", meal.owner_name.clone().unwrap_or_else(|| "someone else".into()))
            };
            let can_import = meal.can_import(&username);
            let image = meal.image.clone();
            let instructions = meal.instructions.clone().filter(|text| !text.trim().is_empty());

            let import = move |_| {
                set_importing.set(true);
                spawn_local(async move {
                    match api::import_meal(meal_id).await {
                        Ok(()) => {
                            info!("[PLANNER] Saved recipe {meal_id} to the library");
                            set_notice.set(Some("Recipe saved to your library!".into()));
                        }
                        Err(e) => {
                            auth.handle_error(&e);
                            set_error.set(Some(e.to_string()));
                        }
                    }
                    set_importing.set(false);
                });
            };

            view! {
                {image.map(|src| view! { <img class="modal-hero" src=src alt=title.clone()/> })}
                <p class="plan-owner">{owner}</p>
                <ServingsStepper counter=counter set_counter=set_counter label="Servings to cook"/>
                <h4>"Ingredients needed"</h4>
                <IngredientList meal=meal servings=Signal::derive(move || counter.get().current())/>
                {instructions.map(|text| {
                    view! { <div class="instructions" inner_html=render_instructions(&text)></div> }
                })}
                <div class="modal-actions">
                    <Show when=move || can_import && notice.get().is_none()>
                        <button
                            type="button"
                            class="btn-secondary"
                            disabled=move || importing.get()
                            on:click=import
                        >
                            {move || if importing.get() { "Saving..." } else { "Save to my recipes" }}
                        </button>
                    </Show>
                    <button
                        type="button"
                        class="btn-primary"
                        disabled=move || counter.get().current() == planned_servings
                        on:click=move |_| on_update.run((plan_id, counter.get_untracked().current()))
                    >
                        "Update servings"
                    </button>
                </div>
            }
            .into_any()
        }
        None => view! {
            <p class="eating-out-note">"Enjoy your meal at " <strong>{title.clone()}</strong> "."</p>
        }
        .into_any(),
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal edit-plan" on:click=|ev| ev.stop_propagation()>
                <header class="modal-header">
                    <div>
                        <h3>{title.clone()}</h3>
                        <p class="modal-subtitle">{slot_label}</p>
                    </div>
                    <button type="button" class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                </header>
                <ErrorBanner error=error/>
                <Show when=move || notice.get().is_some()>
                    <div class="notice">{move || notice.get().unwrap_or_default()}</div>
                </Show>
                {body}
                <footer class="modal-footer">
                    <DeleteConfirmButton
                        button_class="btn-danger"
                        label="Remove from plan"
                        prompt="Remove this meal?"
                        on_confirm=move |_| on_delete.run(plan_id)
                    />
                </footer>
            </div>
        </div>
    }
}
