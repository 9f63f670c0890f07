//! Shopping List
//!
//! Date range of a generate request and local bookkeeping of purchased items.

use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use crate::calendar::Week;
use crate::error::{DomainError, DomainResult};
use crate::models::{ShoppingList, ShoppingListItem};
use crate::scaling::format_quantity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShoppingRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Body of `POST shopping-lists/generate/`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub group: u32,
}

impl ShoppingRange {
    /// Monday to Sunday of `week`
    pub fn for_week(week: Week) -> Self {
        Self {
            start: week.start(),
            end: week.end(),
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.start > self.end {
            return Err(DomainError::InvalidRange {
                start: self.start.to_string(),
                end: self.end.to_string(),
            });
        }
        Ok(())
    }

    pub fn request(&self, group: u32) -> DomainResult<GenerateRequest> {
        self.validate()?;
        debug!("[SHOPPING] Generating {} .. {} for group {group}", self.start, self.end);
        Ok(GenerateRequest {
            start_date: self.start,
            end_date: self.end,
            group,
        })
    }
}

impl ShoppingList {
    /// Flip the purchased mark of one item; returns false for unknown ids
    pub fn toggle_purchased(&mut self, item_id: u32) -> bool {
        match self.items.iter_mut().find(|item| item.id == item_id) {
            Some(item) => {
                item.is_purchased = !item.is_purchased;
                true
            }
            None => false,
        }
    }

    /// (purchased, total)
    pub fn progress(&self) -> (usize, usize) {
        let purchased = self.items.iter().filter(|item| item.is_purchased).count();
        (purchased, self.items.len())
    }

    pub fn is_complete(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| item.is_purchased)
    }
}

impl ShoppingListItem {
    /// "375 gramos"
    pub fn amount_label(&self) -> String {
        format!("{} {}", format_quantity(self.quantity), self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    fn list() -> ShoppingList {
        ShoppingList {
            id: 1,
            start_date: date(10, 12),
            end_date: date(10, 18),
            group: 2,
            items: vec![
                ShoppingListItem { id: 1, name: "Rice".into(), quantity: 375.0, unit: "gramos".into(), is_purchased: false },
                ShoppingListItem { id: 2, name: "Milk".into(), quantity: 1.5, unit: "litros".into(), is_purchased: false },
            ],
            created_at: None,
        }
    }

    #[test]
    fn test_week_range_request() {
        let range = ShoppingRange::for_week(Week::containing(date(10, 14)));
        let request = range.request(2).unwrap();
        let json = serde_json::to_value(request).unwrap();
        assert_eq!(json["start_date"], "2026-10-12");
        assert_eq!(json["end_date"], "2026-10-18");
        assert_eq!(json["group"], 2);
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let range = ShoppingRange { start: date(10, 20), end: date(10, 18) };
        assert!(matches!(range.request(1), Err(DomainError::InvalidRange { .. })));
        let same_day = ShoppingRange { start: date(10, 18), end: date(10, 18) };
        assert!(same_day.validate().is_ok());
    }

    #[test]
    fn test_toggle_and_progress() {
        let mut list = list();
        assert_eq!(list.progress(), (0, 2));
        assert!(list.toggle_purchased(2));
        assert_eq!(list.progress(), (1, 2));
        assert!(!list.is_complete());
        assert!(list.toggle_purchased(1));
        assert!(list.is_complete());
        assert!(list.toggle_purchased(1));
        assert_eq!(list.progress(), (1, 2));
        assert!(!list.toggle_purchased(99));
    }

    #[test]
    fn test_amount_label() {
        assert_eq!(list().items[0].amount_label(), "375 gramos");
        assert_eq!(list().items[1].amount_label(), "1.5 litros");
    }
}
