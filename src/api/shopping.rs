//! Shopping List Endpoints

use log::info;
use meal_domain::models::ShoppingList;
use meal_domain::shopping::GenerateRequest;

use super::{post, ApiResult};

pub async fn generate_shopping_list(request: &GenerateRequest) -> ApiResult<ShoppingList> {
    let list: ShoppingList = post("shopping-lists/generate/", request).await?;
    info!("[API] Shopping list {} with {} items", list.id, list.items.len());
    Ok(list)
}
