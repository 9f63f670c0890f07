//! Weekly Planner Grid
//!
//! Seven days by four meal slots. Narrow screens show only the focused day,
//! picked from the day strip above the grid.

use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;
use meal_domain::calendar::weekday_short;
use meal_domain::models::MealSlot;
use meal_domain::plan::{plans_for_slot, SlotTarget};

use crate::components::plan_card::PlanCard;
use crate::store::{store_go_to_today, store_shift_week, use_planner_store, PlannerStateStoreFields};

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[component]
fn PlannerCell(date: NaiveDate, slot: MealSlot) -> impl IntoView {
    let store = use_planner_store();
    let plans = move || store.plans().with(|plans| plans_for_slot(plans, date, slot));

    view! {
        <div class="planner-cell" class:focused=move || store.focused_day().get() == date>
            <For
                each=plans
                key=|plan| (plan.id, plan.target_servings)
                children=|plan| view! { <PlanCard plan=plan/> }
            />
            <button
                type="button"
                class="add-plan"
                title=format!("Add {}", slot.label())
                on:click=move |_| store.adding().set(Some(SlotTarget { date, slot }))
            >
                "+"
            </button>
        </div>
    }
}

#[component]
pub fn WeeklyPlanner() -> impl IntoView {
    let store = use_planner_store();
    let days = move || store.week().get().days();

    view! {
        <div class="weekly-planner">
            <header class="planner-header">
                <h2 class="week-label">{move || store.week().get().label()}</h2>
                <div class="week-nav">
                    <button type="button" on:click=move |_| store_shift_week(&store, false)>"‹"</button>
                    <button type="button" class="week-today" on:click=move |_| store_go_to_today(&store, today())>
                        "Today"
                    </button>
                    <button type="button" on:click=move |_| store_shift_week(&store, true)>"›"</button>
                </div>
            </header>

            <div class="day-strip">
                {move || {
                    days()
                        .into_iter()
                        .map(|day| {
                            view! {
                                <button
                                    type="button"
                                    class="day-chip"
                                    class:selected=move || store.focused_day().get() == day
                                    class:today=day == today()
                                    on:click=move |_| store.focused_day().set(day)
                                >
                                    <span class="day-name">{weekday_short(day.weekday())}</span>
                                    <span class="day-number">{day.day()}</span>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <Show when=move || store.loading().get()>
                <p class="loading">"Loading week..."</p>
            </Show>

            <div class="planner-grid">
                <div class="grid-corner"></div>
                {move || {
                    days()
                        .into_iter()
                        .map(|day| {
                            view! {
                                <div
                                    class="day-header"
                                    class:today=day == today()
                                    class:focused=move || store.focused_day().get() == day
                                >
                                    {format!("{} {}", weekday_short(day.weekday()), day.day())}
                                </div>
                            }
                        })
                        .collect_view()
                }}
                {MealSlot::ALL
                    .into_iter()
                    .map(|slot| {
                        view! {
                            <div class="slot-label">{slot.icon()} " " {slot.label()}</div>
                            {move || {
                                days()
                                    .into_iter()
                                    .map(|date| PlannerCell(PlannerCellProps::builder().date(date).slot(slot).build()))
                                    .collect_view()
                            }}
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
