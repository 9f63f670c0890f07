//! Ingredient Select Component
//!
//! Search-as-you-type picker over the known ingredients. Typing a name that
//! does not exist yet offers to create it on the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::info;
use meal_domain::models::Ingredient;
use meal_domain::search::{filter_by_name, is_new_name};

use crate::api;

const MAX_SUGGESTIONS: usize = 6;

/// Id the input was last filled from, and the name to fill in now.
///
/// A selection fills the input once; later catalogue changes leave the
/// text alone.
fn sync_name(synced: Option<u32>, selected: Option<u32>, all: &[Ingredient]) -> (Option<u32>, Option<String>) {
    if selected == synced {
        return (synced, None);
    }
    match selected.and_then(|id| all.iter().find(|i| i.id == id)) {
        Some(ingredient) => (Some(ingredient.id), Some(ingredient.name.clone())),
        None => (None, None),
    }
}

/// Ingredient picker with suggestions
///
/// Props:
/// - ingredients: every known ingredient, extended when one gets created
/// - selected: ingredient id currently chosen in the row
/// - on_select: called with the id of the picked or created ingredient, or
///   `None` once the text is edited away from the chosen name
#[component]
pub fn IngredientSelect(
    ingredients: ReadSignal<Vec<Ingredient>>,
    set_ingredients: WriteSignal<Vec<Ingredient>>,
    #[prop(into)] selected: Signal<Option<u32>>,
    #[prop(into)] on_select: Callback<Option<u32>>,
) -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (open, set_open) = signal(false);
    let (highlighted, set_highlighted) = signal(0usize);
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Show the chosen ingredient's name once both are known
    Effect::new(move |synced: Option<Option<u32>>| {
        let current = selected.get();
        let (synced, name) = ingredients.with(|all| sync_name(synced.flatten(), current, all));
        if let Some(name) = name {
            set_query.set(name);
        }
        synced
    });

    let suggestions = move || {
        let q = query.get();
        if q.trim().is_empty() {
            return Vec::new();
        }
        ingredients.with(|all| {
            filter_by_name(all, &q)
                .into_iter()
                .take(MAX_SUGGESTIONS)
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let can_create = move || ingredients.with(|all| is_new_name(all, &query.get()));

    let choose = move |ingredient: Ingredient| {
        set_query.set(ingredient.name.clone());
        set_open.set(false);
        set_highlighted.set(0);
        on_select.run(Some(ingredient.id));
    };

    let create = move || {
        let name = query.get_untracked().trim().to_string();
        if name.is_empty() || busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::create_ingredient(&name).await {
                Ok(ingredient) => {
                    info!("[INGREDIENT] Created {} ({})", ingredient.name, ingredient.id);
                    set_error.set(None);
                    set_ingredients.update(|all| all.push(ingredient.clone()));
                    choose(ingredient);
                }
                Err(e) => set_error.set(Some(format!("Could not create ingredient: {e}"))),
            }
            set_busy.set(false);
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let sugg = suggestions();
        let total = sugg.len() + usize::from(can_create());

        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                set_open.set(true);
                let sel = highlighted.get();
                if sel + 1 < total {
                    set_highlighted.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                let sel = highlighted.get();
                if sel > 0 {
                    set_highlighted.set(sel - 1);
                }
            }
            "Enter" | "Tab" if open.get() && total > 0 => {
                ev.prevent_default();
                let sel = highlighted.get();
                if let Some(ingredient) = sugg.get(sel) {
                    choose(ingredient.clone());
                } else if can_create() {
                    create();
                }
            }
            "Escape" => set_open.set(false),
            _ => {}
        }
    };

    view! {
        <div class="ingredient-select">
            <input
                type="text"
                class="ingredient-input"
                placeholder="Search or type to create..."
                disabled=move || busy.get()
                prop:value=move || query.get()
                on:input=move |ev| {
                    set_query.set(event_target_value(&ev));
                    if selected.get_untracked().is_some() {
                        on_select.run(None);
                    }
                    set_highlighted.set(0);
                    set_open.set(true);
                }
                on:focus=move |_| set_open.set(true)
                on:blur=move |_| set_open.set(false)
                on:keydown=on_keydown
            />
            <Show when=move || open.get() && (!suggestions().is_empty() || can_create())>
                <ul class="ingredient-suggestions">
                    {move || {
                        suggestions()
                            .into_iter()
                            .enumerate()
                            .map(|(idx, ingredient)| {
                                let name = ingredient.name.clone();
                                view! {
                                    <li
                                        class="suggestion"
                                        class:highlighted=move || highlighted.get() == idx
                                        on:mousedown=move |ev| {
                                            // keep focus so blur does not close the list first
                                            ev.prevent_default();
                                            choose(ingredient.clone());
                                        }
                                    >
                                        {name}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                    <Show when=can_create>
                        <li
                            class="suggestion create"
                            class:highlighted=move || highlighted.get() == suggestions().len()
                            on:mousedown=move |ev| {
                                ev.prevent_default();
                                create();
                            }
                        >
                            {move || format!("Create \"{}\"", query.get().trim())}
                        </li>
                    </Show>
                </ul>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="field-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> Vec<Ingredient> {
        vec![
            Ingredient { id: 1, name: "Arroz".into() },
            Ingredient { id: 2, name: "Azúcar".into() },
        ]
    }

    #[test]
    fn test_sync_name_fills_once_per_selection() {
        let mut all = catalogue();
        assert_eq!(sync_name(None, Some(2), &all), (Some(2), Some("Azúcar".into())));

        // another row adds to the catalogue
        all.push(Ingredient { id: 3, name: "Sal".into() });
        assert_eq!(sync_name(Some(2), Some(2), &all), (Some(2), None));

        assert_eq!(sync_name(Some(2), Some(1), &all), (Some(1), Some("Arroz".into())));
    }

    #[test]
    fn test_sync_name_waits_for_catalogue() {
        assert_eq!(sync_name(None, Some(2), &[]), (None, None));
        assert_eq!(sync_name(None, Some(2), &catalogue()), (Some(2), Some("Azúcar".into())));
    }

    #[test]
    fn test_cleared_selection_keeps_typed_text() {
        assert_eq!(sync_name(Some(2), None, &catalogue()), (None, None));
    }
}
