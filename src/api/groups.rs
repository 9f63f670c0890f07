//! Planning Group Endpoints

use meal_domain::groups::{AddMember, NewGroup};
use meal_domain::models::PlanningGroup;

use super::{get, post, ApiResult};

pub async fn list_groups() -> ApiResult<Vec<PlanningGroup>> {
    get("groups/").await
}

pub async fn create_group(group: &NewGroup) -> ApiResult<PlanningGroup> {
    post("groups/", group).await
}

pub async fn add_member(group_id: u32, member: &AddMember) -> ApiResult<serde_json::Value> {
    post(&format!("groups/{group_id}/add_member/"), member).await
}
