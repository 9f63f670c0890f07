//! Ingredient List
//!
//! A recipe's ingredient lines scaled to the selected servings.

use leptos::prelude::*;
use meal_domain::models::Meal;
use meal_domain::scaling::scale_meal;

#[component]
pub fn IngredientList(meal: Meal, #[prop(into)] servings: Signal<u32>) -> impl IntoView {
    if meal.ingredients.is_empty() {
        return view! { <p class="ingredient-list-empty">"No ingredients listed."</p> }.into_any();
    }

    view! {
        <ul class="ingredient-list">
            {move || {
                scale_meal(&meal, servings.get())
                    .into_iter()
                    .map(|line| {
                        view! {
                            <li class="ingredient-line" class:unscalable=!line.scalable>
                                <span class="ingredient-name">{line.name}</span>
                                <span class="ingredient-amount">
                                    <strong>{line.quantity}</strong>
                                    " "
                                    {line.unit}
                                </span>
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
    .into_any()
}
