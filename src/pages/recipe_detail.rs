//! Recipe Detail Page
//!
//! A recipe with the serving calculator. Owners can edit or delete it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use log::{info, warn};
use meal_domain::models::Meal;
use meal_domain::servings::ServingCounter;

use crate::api;
use crate::components::{DeleteConfirmButton, ErrorBanner, IngredientList, ServingsStepper};
use crate::context::use_auth;
use crate::markdown::render_instructions;
use crate::pages::route_id;

#[component]
pub fn RecipeDetailPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let id = route_id();
    let (meal, set_meal) = signal::<Option<Meal>>(None);
    let (counter, set_counter) = signal(ServingCounter::new(1));
    let (error, set_error) = signal::<Option<String>>(None);

    let back = navigate.clone();
    Effect::new(move |_| {
        let Some(id) = id.get() else {
            back("/recipes", Default::default());
            return;
        };
        let back = back.clone();
        spawn_local(async move {
            match api::get_meal(id).await {
                Ok(loaded) => {
                    set_counter.set(ServingCounter::new(loaded.base_servings));
                    set_meal.set(Some(loaded));
                }
                Err(e) => {
                    warn!("[RECIPE] Could not load recipe {id}: {e}");
                    auth.handle_error(&e);
                    back("/recipes", Default::default());
                }
            }
        });
    });

    let delete = move |meal_id: u32| {
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::delete_meal(meal_id).await {
                Ok(()) => {
                    info!("[RECIPE] Deleted recipe {meal_id}");
                    navigate("/recipes", Default::default());
                }
                Err(e) => {
                    auth.handle_error(&e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="recipe-detail">
            <A href="/recipes">"← Back to the cookbook"</A>
            <ErrorBanner error=error/>
            {move || match meal.get() {
                None => view! { <p class="loading">"Looking through the cookbook..."</p> }.into_any(),
                Some(meal) => {
                    let is_owner = auth.username().is_some_and(|u| meal.is_owned_by(&u));
                    let meal_id = meal.id;
                    let delete = delete.clone();
                    view! {
                        {match meal.image.clone() {
                            Some(src) => view! { <img class="recipe-hero" src=src alt=meal.name.clone()/> }.into_any(),
                            None => view! { <div class="recipe-hero placeholder">"🍳 No image"</div> }.into_any(),
                        }}
                        <header class="recipe-header">
                            <h1>{meal.name.clone()}</h1>
                            <ServingsStepper counter=counter set_counter=set_counter label="Servings"/>
                            <Show when=move || counter.get().is_adjusted()>
                                <span class="adjusted-badge">
                                    {move || format!("Adjusted from {}", counter.get().base())}
                                </span>
                            </Show>
                            <Show when=move || is_owner>
                                <div class="owner-actions">
                                    <A href=format!("/recipes/edit/{meal_id}")>"Edit"</A>
                                    <DeleteConfirmButton
                                        button_class="btn-danger"
                                        prompt="Delete this recipe?"
                                        on_confirm={
                                            let delete = delete.clone();
                                            move |_| delete(meal_id)
                                        }
                                    />
                                </div>
                            </Show>
                        </header>
                        <section class="recipe-ingredients">
                            <h2>"Ingredients"</h2>
                            <IngredientList meal=meal.clone() servings=Signal::derive(move || counter.get().current())/>
                        </section>
                        <section class="recipe-instructions">
                            <h2>"Preparation"</h2>
                            {match meal.instructions.clone().filter(|text| !text.trim().is_empty()) {
                                Some(text) => view! { <div class="instructions" inner_html=render_instructions(&text)></div> }.into_any(),
                                None => view! { <p class="empty-state">"No steps written for this recipe yet."</p> }.into_any(),
                            }}
                        </section>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
