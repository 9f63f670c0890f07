//! Planner Page
//!
//! The active group's week. Owns the planner store and the two modals.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use log::info;
use meal_domain::plan::PlanDraft;
use reactive_stores::Store;

use crate::api;
use crate::components::{EditPlanModal, ErrorBanner, RecipeSelectorModal, WeeklyPlanner};
use crate::context::use_auth;
use crate::store::{
    store_refresh, store_remove_plan, store_update_plan, PlannerState, PlannerStateStoreFields, PlannerStore,
};

#[component]
pub fn PlannerPage() -> impl IntoView {
    let auth = use_auth();
    let store: PlannerStore = Store::new(PlannerState::new(chrono::Local::now().date_naive()));
    provide_context(store);

    let (error, set_error) = signal::<Option<String>>(None);

    // Load plans when the week, the group or the version changes
    Effect::new(move |_| {
        let week = store.week().get();
        let _ = store.version().get();
        let Some(group) = auth.active_group_id() else {
            store.plans().set(Vec::new());
            return;
        };

        store.loading().set(true);
        spawn_local(async move {
            match api::list_plans(week, group).await {
                Ok(plans) => {
                    info!("[PLANNER] Loaded {} plans for {}", plans.len(), week.label());
                    store.plans().set(plans);
                    set_error.set(None);
                }
                Err(e) => {
                    auth.handle_error(&e);
                    set_error.set(Some(e.to_string()));
                }
            }
            store.loading().set(false);
        });
    });

    let save_plan = move |draft: PlanDraft| {
        let Some(target) = store.adding().get_untracked() else { return };
        let Some(group) = auth.active_group.get_untracked().map(|g| g.id) else {
            set_error.set(Some("Select a group before planning meals".into()));
            return;
        };
        let payload = match draft.to_payload(target.date, target.slot, group) {
            Ok(payload) => payload,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        spawn_local(async move {
            match api::create_plan(&payload).await {
                Ok(plan) => {
                    info!("[PLANNER] Planned {} on {}", plan.id, plan.date);
                    store.adding().set(None);
                    // the list endpoint returns meal details, refetch for them
                    store_refresh(&store);
                }
                Err(e) => {
                    auth.handle_error(&e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let update_plan = move |(plan_id, servings): (u32, u32)| {
        spawn_local(async move {
            match api::update_plan_servings(plan_id, servings).await {
                Ok(mut updated) => {
                    if updated.meal_details.is_none() {
                        updated.meal_details = store
                            .plans()
                            .with_untracked(|plans| plans.iter().find(|p| p.id == plan_id).and_then(|p| p.meal_details.clone()));
                    }
                    store_update_plan(&store, updated);
                    store.editing().set(None);
                }
                Err(e) => {
                    auth.handle_error(&e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let delete_plan = move |plan_id: u32| {
        spawn_local(async move {
            match api::delete_plan(plan_id).await {
                Ok(()) => {
                    store_remove_plan(&store, plan_id);
                    store.editing().set(None);
                }
                Err(e) => {
                    auth.handle_error(&e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="planner-page">
            <ErrorBanner error=error/>
            <Show
                when=move || auth.active_group.get().is_some()
                fallback=|| {
                    view! {
                        <div class="empty-state">
                            <p>"Join or create a group to start planning."</p>
                            <A href="/groups">"Go to groups"</A>
                        </div>
                    }
                }
            >
                <WeeklyPlanner/>
            </Show>

            {move || {
                store.adding().get().map(|target| {
                    view! {
                        <RecipeSelectorModal
                            target=target
                            on_close=move |_| store.adding().set(None)
                            on_save=save_plan
                        />
                    }
                })
            }}
            {move || {
                store.editing().get().map(|plan| {
                    view! {
                        <EditPlanModal
                            plan=plan
                            on_close=move |_| store.editing().set(None)
                            on_update=update_plan
                            on_delete=delete_plan
                        />
                    }
                })
            }}
        </div>
    }
}
