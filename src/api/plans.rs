//! Daily Plan Endpoints

use meal_domain::calendar::{format_api_date, Week};
use meal_domain::models::DailyPlan;
use meal_domain::plan::{PlanPayload, PlanServingsUpdate};

use super::{delete, get_with_query, patch, post, ApiResult};

/// Plans of one group within a week
pub async fn list_plans(week: Week, group: u32) -> ApiResult<Vec<DailyPlan>> {
    let query = [
        ("start_date", format_api_date(week.start())),
        ("end_date", format_api_date(week.end())),
        ("group", group.to_string()),
    ];
    get_with_query("plans/", &query).await
}

pub async fn create_plan(payload: &PlanPayload) -> ApiResult<DailyPlan> {
    post("plans/", payload).await
}

pub async fn update_plan_servings(id: u32, target_servings: u32) -> ApiResult<DailyPlan> {
    patch(&format!("plans/{id}/"), &PlanServingsUpdate { target_servings }).await
}

pub async fn delete_plan(id: u32) -> ApiResult<()> {
    delete(&format!("plans/{id}/")).await
}
