//! Pages
//!
//! One component per route.

mod groups;
mod login;
mod planner;
mod profile;
mod recipe_detail;
mod recipe_form;
mod recipes;
mod register;
mod shopping_list;

pub use groups::GroupsPage;
pub use login::LoginPage;
pub use planner::PlannerPage;
pub use profile::ProfilePage;
pub use recipe_detail::RecipeDetailPage;
pub use recipe_form::{CreateRecipePage, EditRecipePage};
pub use recipes::RecipesPage;
pub use register::RegisterPage;
pub use shopping_list::ShoppingListPage;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Numeric `:id` segment of the current route
fn route_id() -> Memo<Option<u32>> {
    let params = use_params_map();
    Memo::new(move |_| params.read().get("id").and_then(|id| id.parse().ok()))
}
