//! Recipe Selector Modal
//!
//! Fills an empty planner cell: pick one of the recipes at a chosen serving
//! count, or note that the meal is eaten out.

use chrono::Datelike;
use leptos::prelude::*;
use leptos::task::spawn_local;
use meal_domain::calendar::weekday_short;
use meal_domain::models::Meal;
use meal_domain::plan::{PlanDraft, SlotTarget, DEFAULT_PLAN_SERVINGS};
use meal_domain::search::filter_by_name;
use meal_domain::servings::ServingCounter;

use crate::api;
use crate::components::error_banner::ErrorBanner;
use crate::components::servings_stepper::ServingsStepper;
use crate::context::use_auth;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SelectorTab {
    Recipes,
    EatingOut,
}

#[component]
pub fn RecipeSelectorModal(
    target: SlotTarget,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_save: Callback<PlanDraft>,
) -> impl IntoView {
    let auth = use_auth();
    let (tab, set_tab) = signal(SelectorTab::Recipes);
    let (meals, set_meals) = signal(Vec::<Meal>::new());
    let (search, set_search) = signal(String::new());
    let (counter, set_counter) = signal(ServingCounter::new(DEFAULT_PLAN_SERVINGS));
    let (place, set_place) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_meals().await {
                Ok(loaded) => set_meals.set(loaded),
                Err(e) => {
                    auth.handle_error(&e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    });

    let filtered = move || {
        let query = search.get();
        meals.with(|all| filter_by_name(all, &query).into_iter().cloned().collect::<Vec<_>>())
    };

    let save_eating_out = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = PlanDraft::EatingOut { custom_name: place.get() };
        match draft.validate() {
            Ok(()) => on_save.run(draft),
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    let heading = format!(
        "{} · {} {}",
        target.slot.label(),
        weekday_short(target.date.weekday()),
        target.date.format("%d/%m")
    );

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal recipe-selector" on:click=|ev| ev.stop_propagation()>
                <header class="modal-header">
                    <h3>{heading}</h3>
                    <button type="button" class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                </header>

                <div class="tabs">
                    <button
                        type="button"
                        class="tab"
                        class:active=move || tab.get() == SelectorTab::Recipes
                        on:click=move |_| set_tab.set(SelectorTab::Recipes)
                    >
                        "Recipes"
                    </button>
                    <button
                        type="button"
                        class="tab"
                        class:active=move || tab.get() == SelectorTab::EatingOut
                        on:click=move |_| set_tab.set(SelectorTab::EatingOut)
                    >
                        "Eating out"
                    </button>
                </div>

                <ErrorBanner error=error/>

                <Show when=move || tab.get() == SelectorTab::Recipes>
                    <div class="selector-filters">
                        <input
                            type="text"
                            class="search-input"
                            placeholder="Search recipe..."
                            autofocus
                            prop:value=move || search.get()
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                        />
                        <ServingsStepper counter=counter set_counter=set_counter label="Servings"/>
                    </div>
                    <ul class="selector-results">
                        <For
                            each=filtered
                            key=|meal| meal.id
                            children=move |meal| {
                                let id = meal.id;
                                view! {
                                    <li class="selector-result">
                                        <button
                                            type="button"
                                            on:click=move |_| {
                                                on_save.run(PlanDraft::Recipe {
                                                    meal: id,
                                                    target_servings: counter.get_untracked().current(),
                                                })
                                            }
                                        >
                                            <span class="result-name">{meal.name}</span>
                                            <span class="result-servings">
                                                {format!("base {} serv.", meal.base_servings)}
                                            </span>
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                    <Show when=move || filtered().is_empty()>
                        <p class="empty-state">"No recipes match your search."</p>
                    </Show>
                </Show>

                <Show when=move || tab.get() == SelectorTab::EatingOut>
                    <form class="eating-out-form" on:submit=save_eating_out>
                        <label>
                            "Where?"
                            <input
                                type="text"
                                placeholder="Restaurant, friends, work..."
                                prop:value=move || place.get()
                                on:input=move |ev| set_place.set(event_target_value(&ev))
                            />
                        </label>
                        <button type="submit" class="btn-primary">"Save"</button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
