//! Recipe Drafts
//!
//! Form state of the create/edit recipe pages and its conversion into the
//! body the backend expects.

use log::warn;
use serde::Serialize;

use crate::error::{DomainError, DomainResult};
use crate::models::{Meal, MealType, Quantity};
use crate::servings::parse_servings;
use crate::units::normalize_unit;

/// Unit preselected for a new ingredient row
pub const NEW_ROW_UNIT: &str = "g";

/// One editable ingredient row
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientRow {
    pub ingredient_id: Option<u32>,
    pub quantity: String,
    pub unit: String,
}

impl Default for IngredientRow {
    fn default() -> Self {
        Self {
            ingredient_id: None,
            quantity: String::new(),
            unit: NEW_ROW_UNIT.to_string(),
        }
    }
}

impl IngredientRow {
    /// Rows without an ingredient or a quantity are dropped on submit
    pub fn is_complete(&self) -> bool {
        self.ingredient_id.is_some() && !self.quantity.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    pub name: String,
    pub base_servings: String,
    pub meal_type: MealType,
    pub instructions: String,
    /// Newly chosen image as a data URL; `None` keeps the current one
    pub image: Option<String>,
    pub rows: Vec<IngredientRow>,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            base_servings: "4".to_string(),
            meal_type: MealType::Home,
            instructions: String::new(),
            image: None,
            rows: vec![IngredientRow::default()],
        }
    }
}

/// Body of `POST meals/` and `PUT meals/{id}/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientPayload {
    pub ingredient_id: u32,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipePayload {
    pub name: String,
    pub base_servings: u32,
    pub meal_type: MealType,
    pub ingredients: Vec<IngredientPayload>,
    pub instructions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl RecipeDraft {
    /// Draft pre-filled from an existing recipe
    pub fn from_meal(meal: &Meal) -> Self {
        let rows = meal
            .ingredients
            .iter()
            .map(|line| IngredientRow {
                ingredient_id: line.ingredient_id,
                quantity: match &line.quantity {
                    Some(Quantity::Amount(v)) => v.to_string(),
                    Some(Quantity::Text(t)) => t.clone(),
                    None => String::new(),
                },
                unit: line.unit.clone(),
            })
            .collect();

        Self {
            name: meal.name.clone(),
            base_servings: meal.base_servings.to_string(),
            meal_type: meal.meal_type,
            instructions: meal.instructions.clone().unwrap_or_default(),
            image: None,
            rows,
        }
    }

    pub fn add_row(&mut self) {
        self.rows.push(IngredientRow::default());
    }

    pub fn remove_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    /// Validate and build the request body
    pub fn to_payload(&self) -> DomainResult<RecipePayload> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name", "a recipe needs a name"));
        }

        let base_servings = parse_servings(&self.base_servings)?;

        let mut ingredients = Vec::new();
        for row in self.rows.iter().filter(|r| r.is_complete()) {
            let Some(ingredient_id) = row.ingredient_id else { continue };
            let quantity = match Quantity::from(row.quantity.as_str()).as_number() {
                Some(q) if q > 0.0 => q,
                _ => {
                    return Err(DomainError::validation(
                        "ingredients",
                        format!("{:?} is not a valid quantity", row.quantity),
                    ))
                }
            };
            ingredients.push(IngredientPayload {
                ingredient_id,
                quantity,
                unit: normalize_unit(&row.unit),
            });
        }

        if ingredients.is_empty() {
            warn!("[RECIPE] Draft {name:?} has no complete ingredient rows");
            return Err(DomainError::validation("ingredients", "add at least one ingredient"));
        }

        Ok(RecipePayload {
            name: name.to_string(),
            base_servings,
            meal_type: self.meal_type,
            ingredients,
            instructions: self.instructions.clone(),
            image: self.image.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeIngredient;

    fn row(id: Option<u32>, quantity: &str, unit: &str) -> IngredientRow {
        IngredientRow {
            ingredient_id: id,
            quantity: quantity.to_string(),
            unit: unit.to_string(),
        }
    }

    #[test]
    fn test_incomplete_rows_are_dropped() {
        let draft = RecipeDraft {
            name: " Gazpacho ".into(),
            base_servings: "4".into(),
            rows: vec![row(Some(1), "500", "g"), row(None, "2", "u"), row(Some(3), "", "ml")],
            ..Default::default()
        };
        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.name, "Gazpacho");
        assert_eq!(payload.ingredients.len(), 1);
        assert_eq!(payload.ingredients[0].unit, "gramos");
        assert_eq!(payload.ingredients[0].quantity, 500.0);
    }

    #[test]
    fn test_requires_one_ingredient() {
        let draft = RecipeDraft {
            name: "Water".into(),
            ..Default::default()
        };
        assert!(matches!(
            draft.to_payload(),
            Err(DomainError::Validation { field: "ingredients", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_servings_and_name() {
        let mut draft = RecipeDraft {
            name: "Soup".into(),
            base_servings: "0".into(),
            rows: vec![row(Some(1), "1", "l")],
            ..Default::default()
        };
        assert!(matches!(draft.to_payload(), Err(DomainError::InvalidServings(_))));

        draft.base_servings = "2".into();
        draft.name = "  ".into();
        assert!(matches!(draft.to_payload(), Err(DomainError::Validation { field: "name", .. })));
    }

    #[test]
    fn test_image_only_sent_when_chosen() {
        let mut draft = RecipeDraft {
            name: "Toast".into(),
            rows: vec![row(Some(4), "2", "ud")],
            ..Default::default()
        };
        let json = serde_json::to_value(draft.to_payload().unwrap()).unwrap();
        assert!(json.get("image").is_none());
        assert_eq!(json["meal_type"], "HOME");

        draft.image = Some("data:image/png;base64,AAAA".into());
        let json = serde_json::to_value(draft.to_payload().unwrap()).unwrap();
        assert_eq!(json["image"], "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_from_meal_and_rows() {
        let meal = Meal {
            id: 9,
            name: "Pisto".into(),
            meal_type: MealType::Home,
            base_servings: 3,
            ingredients: vec![RecipeIngredient {
                id: Some(1),
                ingredient_id: Some(5),
                ingredient_name: "Zucchini".into(),
                quantity: Some(Quantity::Amount(2.0)),
                unit: "unidades".into(),
            }],
            instructions: Some("Chop.".into()),
            image: Some("/media/meals/pisto.jpg".into()),
            owner_name: None,
            is_saved_by_user: false,
            group: None,
        };
        let mut draft = RecipeDraft::from_meal(&meal);
        assert_eq!(draft.base_servings, "3");
        assert_eq!(draft.rows[0].quantity, "2");
        assert_eq!(draft.image, None);

        draft.add_row();
        assert_eq!(draft.rows.len(), 2);
        assert_eq!(draft.rows[1].unit, NEW_ROW_UNIT);
        draft.remove_row(0);
        draft.remove_row(7);
        assert_eq!(draft.rows.len(), 1);
    }
}
