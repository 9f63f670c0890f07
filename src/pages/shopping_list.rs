//! Shopping List Page
//!
//! Aggregates the ingredients of every planned meal in a date range.
//! Purchased marks are kept in the page only.

use leptos::prelude::*;
use leptos::task::spawn_local;
use meal_domain::calendar::{format_api_date, parse_api_date, Week};
use meal_domain::models::ShoppingList;
use meal_domain::shopping::ShoppingRange;

use crate::api;
use crate::components::ErrorBanner;
use crate::context::use_auth;

#[component]
pub fn ShoppingListPage() -> impl IntoView {
    let auth = use_auth();
    let (range, set_range) = signal(ShoppingRange::for_week(Week::containing(chrono::Local::now().date_naive())));
    let (list, set_list) = signal::<Option<ShoppingList>>(None);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let generate = move |_| {
        let Some(group) = auth.active_group.get_untracked().map(|g| g.id) else {
            set_error.set(Some("Select a group first".into()));
            return;
        };
        let request = match range.get_untracked().request(group) {
            Ok(request) => request,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::generate_shopping_list(&request).await {
                Ok(generated) => {
                    set_error.set(None);
                    set_list.set(Some(generated));
                }
                Err(e) => {
                    auth.handle_error(&e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    let items = move || list.with(|l| l.as_ref().map(|l| l.items.clone()).unwrap_or_default());
    let progress = move || list.with(|l| l.as_ref().map(ShoppingList::progress).unwrap_or((0, 0)));

    view! {
        <div class="shopping-page">
            <header class="page-header">
                <h1>"Shopping list"</h1>
                <p class="page-subtitle">"Everything your planned meals need for the chosen days."</p>
            </header>

            <div class="range-toolbar">
                <label>
                    "From"
                    <input
                        type="date"
                        prop:value=move || format_api_date(range.get().start)
                        on:change=move |ev| {
                            if let Some(date) = parse_api_date(&event_target_value(&ev)) {
                                set_range.update(|r| r.start = date);
                            }
                        }
                    />
                </label>
                <label>
                    "To"
                    <input
                        type="date"
                        prop:value=move || format_api_date(range.get().end)
                        on:change=move |ev| {
                            if let Some(date) = parse_api_date(&event_target_value(&ev)) {
                                set_range.update(|r| r.end = date);
                            }
                        }
                    />
                </label>
                <button type="button" class="btn-primary" disabled=move || loading.get() on:click=generate>
                    {move || if loading.get() { "Generating..." } else { "Generate list" }}
                </button>
            </div>

            <ErrorBanner error=error/>

            <Show when=move || list.with(Option::is_some)>
                <section class="shopping-results">
                    <h2>
                        "Products "
                        <span class="count">{move || {
                            let (purchased, total) = progress();
                            format!("{purchased}/{total}")
                        }}</span>
                    </h2>
                    <Show when=move || list.with(|l| l.as_ref().is_some_and(ShoppingList::is_complete))>
                        <p class="notice">"All done! 🎉"</p>
                    </Show>
                    <Show when=move || items().is_empty()>
                        <p class="empty-state">"Nothing planned in these days."</p>
                    </Show>
                    <ul class="shopping-items">
                        <For
                            each=items
                            key=|item| (item.id, item.is_purchased)
                            children=move |item| {
                                let id = item.id;
                                view! {
                                    <li class="shopping-item" class:purchased=item.is_purchased>
                                        <label>
                                            <input
                                                type="checkbox"
                                                prop:checked=item.is_purchased
                                                on:change=move |_| {
                                                    set_list.update(|l| {
                                                        if let Some(l) = l {
                                                            l.toggle_purchased(id);
                                                        }
                                                    })
                                                }
                                            />
                                            <span class="item-name">{item.name.clone()}</span>
                                            <span class="item-amount">{item.amount_label()}</span>
                                        </label>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </section>
            </Show>
        </div>
    }
}
