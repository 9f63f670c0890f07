//! Layout
//!
//! Navigation shell around every page that needs a session. Visitors
//! without one are sent to the login page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Outlet, Redirect, A};
use log::info;
use meal_domain::groups::resolve_active_group;

use crate::api;
use crate::context::use_auth;

#[component]
pub fn Layout() -> impl IntoView {
    let auth = use_auth();

    // Refresh the active group, or pick the first one when none is stored
    Effect::new(move |_| {
        if !auth.is_authenticated() {
            return;
        }
        let stored = auth.active_group.get_untracked();
        spawn_local(async move {
            match api::list_groups().await {
                Ok(groups) => {
                    if let Some(group) = resolve_active_group(&groups, stored.as_ref()) {
                        if stored.as_ref() != Some(&group) {
                            info!("[LAYOUT] Active group is now {} ({})", group.name, group.id);
                            auth.select_group(group);
                        }
                    }
                }
                Err(e) => auth.handle_error(&e),
            }
        });
    });

    view! {
        <Show when=move || auth.is_authenticated() fallback=|| view! { <Redirect path="/login"/> }>
            <div class="app-layout">
                <nav class="main-nav">
                    <span class="brand">"🍲 Meal Planner"</span>
                    <A href="/">"Planner"</A>
                    <A href="/recipes">"Recipes"</A>
                    <A href="/shopping-list">"Shopping list"</A>
                    <A href="/groups">"Groups"</A>
                    <A href="/profile">"Profile"</A>
                    <span class="nav-spacer"></span>
                    <A href="/groups">
                        <span class="active-group">
                            {move || {
                                auth.active_group.get().map(|g| g.name).unwrap_or_else(|| "No group".into())
                            }}
                        </span>
                    </A>
                    <span class="nav-user">{move || auth.username().unwrap_or_default()}</span>
                    <button type="button" class="logout-btn" on:click=move |_| auth.logout()>
                        "Log out"
                    </button>
                </nav>
                <main class="page">
                    <Outlet/>
                </main>
            </div>
        </Show>
    }
}
