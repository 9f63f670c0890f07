//! UI Components
//!
//! Reusable Leptos components shared by the pages.

mod delete_confirm_button;
mod edit_plan_modal;
mod error_banner;
mod image_picker;
mod ingredient_list;
mod ingredient_select;
mod layout;
mod plan_card;
mod recipe_selector_modal;
mod servings_stepper;
mod weekly_planner;

pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_plan_modal::EditPlanModal;
pub use error_banner::ErrorBanner;
pub use image_picker::ImagePicker;
pub use ingredient_list::IngredientList;
pub use ingredient_select::IngredientSelect;
pub use layout::Layout;
pub use recipe_selector_modal::RecipeSelectorModal;
pub use servings_stepper::ServingsStepper;
pub use weekly_planner::WeeklyPlanner;
