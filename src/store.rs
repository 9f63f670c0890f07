//! Planner State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity on the weekly grid.

use chrono::NaiveDate;
use leptos::prelude::*;
use meal_domain::calendar::Week;
use meal_domain::models::DailyPlan;
use meal_domain::plan::SlotTarget;
use reactive_stores::Store;

/// Weekly planner state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct PlannerState {
    /// Week shown in the grid
    pub week: Week,
    /// Plans of the active group for that week
    pub plans: Vec<DailyPlan>,
    pub loading: bool,
    /// Cell the recipe selector is filling
    pub adding: Option<SlotTarget>,
    /// Plan open in the edit modal
    pub editing: Option<DailyPlan>,
    /// Day shown on narrow screens
    pub focused_day: NaiveDate,
    /// Increment to refetch the week
    pub version: u32,
}

impl PlannerState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            week: Week::containing(today),
            plans: Vec::new(),
            loading: false,
            adding: None,
            editing: None,
            focused_day: today,
            version: 0,
        }
    }
}

/// Type alias for the store
pub type PlannerStore = Store<PlannerState>;

/// Get the planner store from context
pub fn use_planner_store() -> PlannerStore {
    expect_context::<PlannerStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Update a plan in the store by ID
pub fn store_update_plan(store: &PlannerStore, updated: DailyPlan) {
    if let Some(plan) = store.plans().write().iter_mut().find(|p| p.id == updated.id) {
        *plan = updated;
    }
}

/// Remove a plan from the store by ID
pub fn store_remove_plan(store: &PlannerStore, plan_id: u32) {
    store.plans().write().retain(|p| p.id != plan_id);
}

/// Move the grid one week and keep the focused day inside it
pub fn store_shift_week(store: &PlannerStore, forward: bool) {
    let week = store.week().get_untracked();
    let week = if forward { week.next() } else { week.previous() };
    store.week().set(week);
    store.focused_day().set(week.start());
}

pub fn store_go_to_today(store: &PlannerStore, today: NaiveDate) {
    store.week().set(Week::containing(today));
    store.focused_day().set(today);
}

pub fn store_refresh(store: &PlannerStore) {
    *store.version().write() += 1;
}
