//! Backend Models
//!
//! Data structures matching the JSON resources of the planner API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Catalogue ingredient (global or private to a user)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: u32,
    pub name: String,
}

/// Quantity of an ingredient line as the backend sends it.
///
/// Usually a number, but free-text amounts such as "to taste" are kept as
/// written and never scaled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Amount(f64),
    Text(String),
}

impl Quantity {
    /// Numeric value, if the quantity holds (or spells) a finite number
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Quantity::Amount(v) => *v,
            Quantity::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::Amount(value)
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        Quantity::Text(value.to_string())
    }
}

/// One ingredient row of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, alias = "ingredient")]
    pub ingredient_id: Option<u32>,
    #[serde(default)]
    pub ingredient_name: String,
    #[serde(default)]
    pub quantity: Option<Quantity>,
    #[serde(default)]
    pub unit: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MealType {
    #[default]
    #[serde(rename = "HOME")]
    Home,
    #[serde(rename = "OUT")]
    Out,
}

/// A recipe ("meal" on the backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub meal_type: MealType,
    pub base_servings: u32,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub is_saved_by_user: bool,
    #[serde(default)]
    pub group: Option<u32>,
}

impl Meal {
    pub fn is_owned_by(&self, username: &str) -> bool {
        self.owner_name.as_deref() == Some(username)
    }

    /// Shown in a plan but neither the user's own recipe nor already saved
    pub fn can_import(&self, username: &str) -> bool {
        !self.is_owned_by(username) && !self.is_saved_by_user
    }
}

/// Time of day a plan belongs to, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MealSlot {
    Breakfast,
    #[default]
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snack => "Other",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "☀",
            MealSlot::Lunch => "🔥",
            MealSlot::Dinner => "🌙",
            MealSlot::Snack => "✨",
        }
    }
}

/// A meal assigned to a date and slot for a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    pub id: u32,
    pub date: NaiveDate,
    pub group: u32,
    #[serde(default)]
    pub meal: Option<u32>,
    #[serde(default)]
    pub meal_details: Option<Meal>,
    pub target_servings: u32,
    #[serde(default)]
    pub meal_slot: MealSlot,
    #[serde(default)]
    pub is_eating_out: bool,
    #[serde(default)]
    pub custom_name: Option<String>,
}

impl DailyPlan {
    /// Title shown on the planner card
    pub fn title(&self) -> String {
        if self.is_eating_out {
            return self.custom_name.clone().unwrap_or_default();
        }
        self.meal_details
            .as_ref()
            .map(|m| m.name.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub id: u32,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub is_purchased: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub group: u32,
    #[serde(default)]
    pub items: Vec<ShoppingListItem>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Household sharing one meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningGroup {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub members: Vec<u32>,
    #[serde(default)]
    pub members_names: Vec<String>,
    #[serde(default)]
    pub planning_config: serde_json::Value,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<u32>,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Access/refresh pair returned by `token/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_accepts_number_or_text() {
        let line: RecipeIngredient = serde_json::from_str(
            r#"{"id": 1, "ingredient_name": "Salt", "quantity": "to taste", "unit": "pizca"}"#,
        )
        .unwrap();
        assert_eq!(line.quantity, Some(Quantity::Text("to taste".into())));

        let line: RecipeIngredient = serde_json::from_str(
            r#"{"id": 2, "ingredient": 7, "ingredient_name": "Rice", "quantity": 250.0, "unit": "gramos"}"#,
        )
        .unwrap();
        assert_eq!(line.quantity, Some(Quantity::Amount(250.0)));
        assert_eq!(line.ingredient_id, Some(7));
    }

    #[test]
    fn test_quantity_as_number() {
        assert_eq!(Quantity::from("  1.5 ").as_number(), Some(1.5));
        assert_eq!(Quantity::from("").as_number(), None);
        assert_eq!(Quantity::from("a pinch").as_number(), None);
        assert_eq!(Quantity::Amount(f64::NAN).as_number(), None);
    }

    #[test]
    fn test_plan_decodes_slot_and_date() {
        let plan: DailyPlan = serde_json::from_str(
            r#"{"id": 3, "date": "2026-10-12", "group": 1, "meal": null,
                "target_servings": 1, "meal_slot": "DINNER",
                "is_eating_out": true, "custom_name": "Taqueria"}"#,
        )
        .unwrap();
        assert_eq!(plan.meal_slot, MealSlot::Dinner);
        assert_eq!(plan.date, NaiveDate::from_ymd_opt(2026, 10, 12).unwrap());
        assert_eq!(plan.title(), "Taqueria");
    }

    #[test]
    fn test_can_import() {
        let mut meal = Meal {
            id: 1,
            name: "Paella".into(),
            meal_type: MealType::Home,
            base_servings: 4,
            ingredients: vec![],
            instructions: None,
            image: None,
            owner_name: Some("ana".into()),
            is_saved_by_user: false,
            group: None,
        };
        assert!(!meal.can_import("ana"));
        assert!(meal.can_import("luis"));
        meal.is_saved_by_user = true;
        assert!(!meal.can_import("luis"));
    }
}
