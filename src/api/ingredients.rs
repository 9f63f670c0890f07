//! Ingredient Endpoints

use meal_domain::models::Ingredient;
use serde::Serialize;

use super::{get, post, ApiResult};

#[derive(Serialize)]
struct CreateIngredientArgs<'a> {
    name: &'a str,
}

pub async fn list_ingredients() -> ApiResult<Vec<Ingredient>> {
    get("ingredients/").await
}

pub async fn create_ingredient(name: &str) -> ApiResult<Ingredient> {
    post("ingredients/", &CreateIngredientArgs { name: name.trim() }).await
}
