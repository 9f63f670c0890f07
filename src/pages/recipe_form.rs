//! Recipe Form Pages
//!
//! Create and edit share one form over a `RecipeDraft`. Existing recipes
//! keep their image unless a new one is picked.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use log::info;
use meal_domain::models::{Ingredient, MealType};
use meal_domain::recipe_draft::{IngredientRow, RecipeDraft};
use meal_domain::units::{normalize_unit, UNITS};

use crate::api;
use crate::components::{ErrorBanner, ImagePicker, IngredientSelect};
use crate::context::use_auth;
use crate::pages::route_id;

/// One ingredient row of the form
#[component]
fn IngredientRowEditor(
    index: usize,
    draft: ReadSignal<RecipeDraft>,
    set_draft: WriteSignal<RecipeDraft>,
    ingredients: ReadSignal<Vec<Ingredient>>,
    set_ingredients: WriteSignal<Vec<Ingredient>>,
) -> impl IntoView {
    let row_value = move |read: fn(&IngredientRow) -> String| {
        draft.with(|d| d.rows.get(index).map(read).unwrap_or_default())
    };

    view! {
        <div class="ingredient-row">
            <IngredientSelect
                ingredients=ingredients
                set_ingredients=set_ingredients
                selected=Signal::derive(move || draft.with(|d| d.rows.get(index).and_then(|r| r.ingredient_id)))
                on_select={move |id: Option<u32>| {
                    set_draft.update(|d| {
                        if let Some(row) = d.rows.get_mut(index) {
                            row.ingredient_id = id;
                        }
                    })
                }}
            />
            <input
                type="text"
                inputmode="decimal"
                class="quantity-input"
                placeholder="Qty"
                prop:value=move || row_value(|r| r.quantity.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_draft.update(|d| {
                        if let Some(row) = d.rows.get_mut(index) {
                            row.quantity = value;
                        }
                    })
                }
            />
            <select
                class="unit-select"
                prop:value=move || row_value(|r| normalize_unit(&r.unit))
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_draft.update(|d| {
                        if let Some(row) = d.rows.get_mut(index) {
                            row.unit = value;
                        }
                    })
                }
            >
                {UNITS
                    .iter()
                    .map(|unit| view! { <option value=unit.value>{unit.label}</option> })
                    .collect_view()}
            </select>
            <button
                type="button"
                class="row-remove"
                title="Remove ingredient"
                on:click=move |_| set_draft.update(|d| d.remove_row(index))
            >
                "×"
            </button>
        </div>
    }
}

#[component]
fn RecipeForm(#[prop(into)] meal_id: Signal<Option<u32>>) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (draft, set_draft) = signal(RecipeDraft::default());
    let (saved_image, set_saved_image) = signal::<Option<String>>(None);
    let (ingredients, set_ingredients) = signal(Vec::<Ingredient>::new());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let row_count = Memo::new(move |_| draft.with(|d| d.rows.len()));

    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_ingredients().await {
                Ok(loaded) => set_ingredients.set(loaded),
                Err(e) => {
                    auth.handle_error(&e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    });

    Effect::new(move |_| {
        let Some(id) = meal_id.get() else { return };
        spawn_local(async move {
            match api::get_meal(id).await {
                Ok(meal) => {
                    set_draft.set(RecipeDraft::from_meal(&meal));
                    set_saved_image.set(meal.image);
                }
                Err(e) => {
                    auth.handle_error(&e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let payload = match draft.get_untracked().to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_saving.set(true);
        let editing = meal_id.get_untracked();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = match editing {
                Some(id) => api::update_meal(id, &payload).await,
                None => api::create_meal(&payload).await,
            };
            set_saving.set(false);
            match result {
                Ok(meal) => {
                    info!("[RECIPE] Saved recipe {} ({})", meal.id, meal.name);
                    navigate(&format!("/recipes/{}", meal.id), Default::default());
                }
                Err(e) => {
                    auth.handle_error(&e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let cancel_href = move || match meal_id.get() {
        Some(id) => format!("/recipes/{id}"),
        None => "/recipes".to_string(),
    };

    view! {
        <form class="recipe-form" on:submit=on_submit>
            <h1>{move || if meal_id.get().is_some() { "Edit recipe" } else { "New recipe" }}</h1>
            <ErrorBanner error=error/>

            <label>
                "Name"
                <input
                    type="text"
                    required
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_draft.update(|d| d.name = value);
                    }
                />
            </label>

            <div class="form-row">
                <label>
                    "Base servings"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || draft.with(|d| d.base_servings.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.base_servings = value);
                        }
                    />
                </label>
                <label>
                    "Type"
                    <select
                        prop:value=move || match draft.with(|d| d.meal_type) {
                            MealType::Home => "HOME",
                            MealType::Out => "OUT",
                        }
                        on:change=move |ev| {
                            let meal_type = if event_target_value(&ev) == "OUT" { MealType::Out } else { MealType::Home };
                            set_draft.update(|d| d.meal_type = meal_type);
                        }
                    >
                        <option value="HOME">"Home cooked"</option>
                        <option value="OUT">"Takeaway"</option>
                    </select>
                </label>
            </div>

            <ImagePicker
                preview=Signal::derive(move || draft.with(|d| d.image.clone()).or_else(|| saved_image.get()))
                on_pick=move |data_url: String| set_draft.update(|d| d.image = Some(data_url))
            />

            <fieldset class="ingredient-rows">
                <legend>"Ingredients"</legend>
                {move || {
                    (0..row_count.get())
                        .map(|index| {
                            view! {
                                <IngredientRowEditor
                                    index=index
                                    draft=draft
                                    set_draft=set_draft
                                    ingredients=ingredients
                                    set_ingredients=set_ingredients
                                />
                            }
                        })
                        .collect_view()
                }}
                <button type="button" class="btn-secondary" on:click=move |_| set_draft.update(|d| d.add_row())>
                    "+ Add ingredient"
                </button>
            </fieldset>

            <label>
                "Preparation"
                <textarea
                    rows="8"
                    placeholder="1. Chop the onion..."
                    prop:value=move || draft.with(|d| d.instructions.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_draft.update(|d| d.instructions = value);
                    }
                ></textarea>
            </label>

            <div class="form-actions">
                <A href=cancel_href>"Cancel"</A>
                <button type="submit" class="btn-primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save recipe" }}
                </button>
            </div>
        </form>
    }
}

#[component]
pub fn CreateRecipePage() -> impl IntoView {
    view! { <RecipeForm meal_id=Signal::derive(|| None)/> }
}

#[component]
pub fn EditRecipePage() -> impl IntoView {
    let id = route_id();
    view! { <RecipeForm meal_id=id/> }
}
