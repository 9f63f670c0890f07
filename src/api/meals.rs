//! Meal Endpoints

use log::info;
use meal_domain::models::Meal;
use meal_domain::recipe_draft::RecipePayload;
use serde_json::json;

use super::{delete, get, post, post_action, put, ApiResult};

pub async fn list_meals() -> ApiResult<Vec<Meal>> {
    get("meals/").await
}

pub async fn get_meal(id: u32) -> ApiResult<Meal> {
    get(&format!("meals/{id}/")).await
}

pub async fn create_meal(payload: &RecipePayload) -> ApiResult<Meal> {
    let meal: Meal = post("meals/", payload).await?;
    info!("[API] Created recipe {} ({})", meal.id, meal.name);
    Ok(meal)
}

pub async fn update_meal(id: u32, payload: &RecipePayload) -> ApiResult<Meal> {
    put(&format!("meals/{id}/"), payload).await
}

pub async fn delete_meal(id: u32) -> ApiResult<()> {
    delete(&format!("meals/{id}/")).await
}

/// Copy another member's recipe into the user's own collection.
/// The response body is not used.
pub async fn import_meal(id: u32) -> ApiResult<()> {
    post_action(&format!("meals/{id}/import_recipe/"), &json!({})).await?;
    info!("[API] Imported recipe {id}");
    Ok(())
}
