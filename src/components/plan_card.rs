//! Plan Card
//!
//! One planned meal inside a planner cell. Clicking opens the edit modal.

use leptos::prelude::*;
use meal_domain::models::DailyPlan;

use crate::store::{use_planner_store, PlannerStateStoreFields};

#[component]
pub fn PlanCard(plan: DailyPlan) -> impl IntoView {
    let store = use_planner_store();
    let title = plan.title();
    let servings = plan.target_servings;
    let eating_out = plan.is_eating_out;
    let open = move |_| store.editing().set(Some(plan.clone()));

    if eating_out {
        view! {
            <div class="plan-card eating-out" on:click=open>
                <span class="plan-badge">"🏪 Eating out"</span>
                <p class="plan-title">{title}</p>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="plan-card" on:click=open>
                <p class="plan-title">{title}</p>
                <span class="plan-servings">{format!("{servings} serv.")}</span>
            </div>
        }
        .into_any()
    }
}
