//! Serving Scaler
//!
//! Adjusts ingredient quantities from a recipe's base servings to the
//! servings the user wants to cook for. Results are rounded to two decimals
//! and displayed without trailing zeros (`5.00` shows as `5`).
//!
//! Free-text quantities ("to taste", empty strings) are not an error: they
//! pass through unchanged and are rendered as written.

use log::warn;

use crate::error::{DomainError, DomainResult};
use crate::models::{Meal, Quantity};

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    // no fractional digits left to round at this magnitude
    if !value.is_finite() || value.abs() >= 1e15 {
        return value;
    }
    let rounded = (value * 100.0).round() / 100.0;
    // avoid displaying "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// `base_quantity * (target_servings / base_servings)`, rounded to 2 decimals.
///
/// A recipe without base servings is rejected instead of producing
/// infinity; so is a target of zero servings. Results that do not fit in
/// an `f64` are rejected as well.
pub fn scale(base_quantity: f64, base_servings: u32, target_servings: u32) -> DomainResult<f64> {
    if base_servings == 0 {
        return Err(DomainError::InvalidRecipe);
    }
    if target_servings == 0 {
        return Err(DomainError::InvalidServings(target_servings.to_string()));
    }
    let ratio = f64::from(target_servings) / f64::from(base_servings);
    let scaled = round2(base_quantity * ratio);
    if !scaled.is_finite() {
        return Err(DomainError::validation(
            "quantity",
            format!("{base_quantity} cannot be scaled to {target_servings} servings"),
        ));
    }
    Ok(scaled)
}

/// Scale a backend quantity. Non-numeric quantities come back unchanged.
pub fn scale_quantity(
    quantity: &Quantity,
    base_servings: u32,
    target_servings: u32,
) -> DomainResult<Quantity> {
    match quantity.as_number() {
        Some(value) => scale(value, base_servings, target_servings).map(Quantity::Amount),
        None => Ok(quantity.clone()),
    }
}

/// Display form of a number: two decimals at most, no trailing zeros
pub fn format_quantity(value: f64) -> String {
    format!("{}", round2(value))
}

/// Text shown next to the unit label for one ingredient line.
///
/// Missing quantities render empty. A recipe with zero base servings shows
/// the unscaled amount.
pub fn display_quantity(quantity: Option<&Quantity>, base_servings: u32, target_servings: u32) -> String {
    let Some(quantity) = quantity else {
        return String::new();
    };
    match scale_quantity(quantity, base_servings, target_servings) {
        Ok(Quantity::Amount(value)) => format_quantity(value),
        Ok(Quantity::Text(text)) => text,
        Err(e) => {
            warn!("[SCALE] {e}, showing unscaled quantity");
            match quantity {
                Quantity::Amount(value) => format_quantity(*value),
                Quantity::Text(text) => text.clone(),
            }
        }
    }
}

/// One ingredient line ready for display at a target serving count
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledLine {
    pub name: String,
    pub quantity: String,
    pub unit: String,
    /// False for free-text or missing quantities
    pub scalable: bool,
}

/// Every ingredient line of `meal`, in recipe order, scaled to `target_servings`
pub fn scale_meal(meal: &Meal, target_servings: u32) -> Vec<ScaledLine> {
    meal.ingredients
        .iter()
        .map(|line| ScaledLine {
            name: line.ingredient_name.clone(),
            quantity: display_quantity(line.quantity.as_ref(), meal.base_servings, target_servings),
            unit: line.unit.clone(),
            scalable: line.quantity.as_ref().and_then(Quantity::as_number).is_some(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealType, RecipeIngredient};

    #[test]
    fn test_scale_examples() {
        assert_eq!(scale(100.0, 4, 2).unwrap(), 50.0);
        assert_eq!(scale(250.0, 4, 6).unwrap(), 375.0);
        assert_eq!(scale(1.0, 3, 2).unwrap(), 0.67);
    }

    #[test]
    fn test_zero_base_servings_is_rejected() {
        assert_eq!(scale(100.0, 0, 2), Err(DomainError::InvalidRecipe));
        assert!(matches!(scale(100.0, 4, 0), Err(DomainError::InvalidServings(_))));
    }

    #[test]
    fn test_overflowing_quantity_is_rejected() {
        assert!(matches!(scale(1e307, 1, 100), Err(DomainError::Validation { field: "quantity", .. })));
        assert!(scale(f64::NAN, 2, 4).is_err());
        assert_eq!(scale(1e306, 2, 2).unwrap(), 1e306);
    }

    #[test]
    fn test_text_quantity_passes_through() {
        let text = Quantity::from("to taste");
        assert_eq!(scale_quantity(&text, 4, 8).unwrap(), text);

        let empty = Quantity::from("");
        assert_eq!(scale_quantity(&empty, 4, 8).unwrap(), empty);
        assert_eq!(display_quantity(Some(&empty), 4, 8), "");
    }

    #[test]
    fn test_numeric_text_is_scaled() {
        let q = Quantity::from("200");
        assert_eq!(scale_quantity(&q, 2, 3).unwrap(), Quantity::Amount(300.0));
    }

    #[test]
    fn test_format_drops_trailing_zeros() {
        assert_eq!(format_quantity(5.0), "5");
        assert_eq!(format_quantity(0.5), "0.5");
        assert_eq!(format_quantity(2.0 / 3.0), "0.67");
        assert_eq!(format_quantity(-0.001), "0");
    }

    #[test]
    fn test_display_falls_back_for_broken_recipe() {
        let q = Quantity::Amount(120.0);
        assert_eq!(display_quantity(Some(&q), 0, 3), "120");
        assert_eq!(display_quantity(None, 4, 3), "");
    }

    #[test]
    fn test_scale_meal_keeps_order() {
        let meal = Meal {
            id: 1,
            name: "Lentils".into(),
            meal_type: MealType::Home,
            base_servings: 2,
            ingredients: vec![
                RecipeIngredient {
                    id: Some(1),
                    ingredient_id: Some(10),
                    ingredient_name: "Lentils".into(),
                    quantity: Some(Quantity::Amount(150.0)),
                    unit: "gramos".into(),
                },
                RecipeIngredient {
                    id: Some(2),
                    ingredient_id: Some(11),
                    ingredient_name: "Salt".into(),
                    quantity: Some(Quantity::from("to taste")),
                    unit: "pizca".into(),
                },
            ],
            instructions: None,
            image: None,
            owner_name: None,
            is_saved_by_user: false,
            group: None,
        };

        let lines = scale_meal(&meal, 5);
        assert_eq!(lines[0].quantity, "375");
        assert!(lines[0].scalable);
        assert_eq!(lines[1].quantity, "to taste");
        assert!(!lines[1].scalable);
    }
}
