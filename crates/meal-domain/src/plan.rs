//! Plan Drafts
//!
//! What the recipe selector produces for a planner cell, and helpers to lay
//! loaded plans out on the weekly grid.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{DomainError, DomainResult};
use crate::models::{DailyPlan, MealSlot};

/// Servings preselected in the recipe selector
pub const DEFAULT_PLAN_SERVINGS: u32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum PlanDraft {
    Recipe { meal: u32, target_servings: u32 },
    EatingOut { custom_name: String },
}

/// Body of `POST plans/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanPayload {
    pub date: NaiveDate,
    pub meal_slot: MealSlot,
    pub group: u32,
    pub meal: Option<u32>,
    pub target_servings: u32,
    pub is_eating_out: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
}

/// Body of `PATCH plans/{id}/`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanServingsUpdate {
    pub target_servings: u32,
}

impl PlanDraft {
    pub fn validate(&self) -> DomainResult<()> {
        match self {
            PlanDraft::Recipe { target_servings, .. } if *target_servings == 0 => {
                Err(DomainError::InvalidServings(target_servings.to_string()))
            }
            PlanDraft::EatingOut { custom_name } if custom_name.trim().is_empty() => Err(
                DomainError::validation("custom_name", "say where you are eating out"),
            ),
            _ => Ok(()),
        }
    }

    pub fn to_payload(&self, date: NaiveDate, meal_slot: MealSlot, group: u32) -> DomainResult<PlanPayload> {
        self.validate()?;
        let payload = match self {
            PlanDraft::Recipe { meal, target_servings } => PlanPayload {
                date,
                meal_slot,
                group,
                meal: Some(*meal),
                target_servings: *target_servings,
                is_eating_out: false,
                custom_name: None,
            },
            PlanDraft::EatingOut { custom_name } => PlanPayload {
                date,
                meal_slot,
                group,
                meal: None,
                target_servings: 1,
                is_eating_out: true,
                custom_name: Some(custom_name.trim().to_string()),
            },
        };
        Ok(payload)
    }
}

/// Plans that belong to one cell of the weekly grid
pub fn plans_for_slot(plans: &[DailyPlan], date: NaiveDate, slot: MealSlot) -> Vec<DailyPlan> {
    plans
        .iter()
        .filter(|p| p.date == date && p.meal_slot == slot)
        .cloned()
        .collect()
}

/// Which cell the selector modal is filling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTarget {
    pub date: NaiveDate,
    pub slot: MealSlot,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn plan(id: u32, day: u32, slot: MealSlot) -> DailyPlan {
        DailyPlan {
            id,
            date: date(day),
            group: 1,
            meal: Some(1),
            meal_details: None,
            target_servings: 2,
            meal_slot: slot,
            is_eating_out: false,
            custom_name: None,
        }
    }

    #[test]
    fn test_eating_out_payload() {
        let draft = PlanDraft::EatingOut { custom_name: " Bar Pepe ".into() };
        let payload = draft.to_payload(date(13), MealSlot::Dinner, 4).unwrap();
        assert_eq!(payload.meal, None);
        assert_eq!(payload.target_servings, 1);
        assert!(payload.is_eating_out);
        assert_eq!(payload.custom_name.as_deref(), Some("Bar Pepe"));

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["date"], "2026-10-13");
        assert_eq!(json["meal_slot"], "DINNER");
    }

    #[test]
    fn test_invalid_drafts() {
        assert!(PlanDraft::EatingOut { custom_name: "  ".into() }.validate().is_err());
        assert!(PlanDraft::Recipe { meal: 1, target_servings: 0 }.validate().is_err());
        assert!(PlanDraft::Recipe { meal: 1, target_servings: 3 }.validate().is_ok());
    }

    #[test]
    fn test_recipe_payload_omits_custom_name() {
        let draft = PlanDraft::Recipe { meal: 8, target_servings: 3 };
        let json = serde_json::to_value(draft.to_payload(date(14), MealSlot::Lunch, 2).unwrap()).unwrap();
        assert_eq!(json["meal"], 8);
        assert_eq!(json["is_eating_out"], false);
        assert!(json.get("custom_name").is_none());
    }

    #[test]
    fn test_plans_for_slot() {
        let plans = vec![
            plan(1, 12, MealSlot::Lunch),
            plan(2, 12, MealSlot::Dinner),
            plan(3, 13, MealSlot::Lunch),
            plan(4, 12, MealSlot::Lunch),
        ];
        let ids: Vec<u32> = plans_for_slot(&plans, date(12), MealSlot::Lunch).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert!(plans_for_slot(&plans, date(14), MealSlot::Lunch).is_empty());
    }
}
