//! Recipes Page
//!
//! The user's cookbook with client-side search.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use meal_domain::models::{Meal, MealType};
use meal_domain::search::filter_by_name;

use crate::api;
use crate::components::ErrorBanner;
use crate::context::use_auth;

#[component]
fn RecipeCard(meal: Meal) -> impl IntoView {
    let href = format!("/recipes/{}", meal.id);
    let eating_out = meal.meal_type == MealType::Out;

    view! {
        <A href=href>
            <article class="recipe-card">
                {match meal.image {
                    Some(src) => view! { <img class="recipe-thumb" src=src alt=meal.name.clone()/> }.into_any(),
                    None => view! { <div class="recipe-thumb placeholder">"🍳"</div> }.into_any(),
                }}
                <h3 class="recipe-name">{meal.name.clone()}</h3>
                <p class="recipe-meta">
                    {format!("{} servings", meal.base_servings)}
                    {eating_out.then(|| view! { <span class="tag">"Takeaway"</span> })}
                </p>
                {meal.owner_name.map(|owner| view! { <p class="recipe-owner">{format!("by {owner}")}</p> })}
            </article>
        </A>
    }
}

#[component]
pub fn RecipesPage() -> impl IntoView {
    let auth = use_auth();
    let (meals, set_meals) = signal(Vec::<Meal>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
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
            set_loading.set(false);
        });
    });

    let filtered = move || {
        let query = search.get();
        meals.with(|all| filter_by_name(all, &query).into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="recipes-page">
            <header class="page-header">
                <h1>"My recipes"</h1>
                <A href="/recipes/new">
                    <span class="btn-primary">"+ New recipe"</span>
                </A>
            </header>
            <input
                type="search"
                class="search-input"
                placeholder="Search recipes..."
                prop:value=move || search.get()
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />
            <ErrorBanner error=error/>
            <Show when=move || loading.get()>
                <p class="loading">"Loading recipes..."</p>
            </Show>
            <div class="recipe-grid">
                <For each=filtered key=|meal| meal.id children=|meal| view! { <RecipeCard meal=meal/> }/>
            </div>
            <Show when=move || !loading.get() && filtered().is_empty()>
                <p class="empty-state">
                    {move || {
                        if meals.with(Vec::is_empty) {
                            "No recipes yet. Create your first one!"
                        } else {
                            "No recipes match your search."
                        }
                    }}
                </p>
            </Show>
        </div>
    }
}
