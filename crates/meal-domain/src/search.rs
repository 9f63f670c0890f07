//! Search
//!
//! Client-side filtering of already loaded lists.

use crate::models::{Ingredient, Meal};

/// Anything listed by name
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Meal {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Ingredient {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Case-insensitive substring match; a blank query matches everything
pub fn matches_query(name: &str, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Items whose name matches `query`, in their original order
pub fn filter_by_name<'a, T: Named>(items: &'a [T], query: &str) -> Vec<&'a T> {
    items.iter().filter(|item| matches_query(item.name(), query)).collect()
}

/// True when no item is named exactly `name` (ignoring case), so it can be created
pub fn is_new_name<T: Named>(items: &[T], name: &str) -> bool {
    let name = name.trim().to_lowercase();
    !name.is_empty() && !items.iter().any(|item| item.name().to_lowercase() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(id: u32, name: &str) -> Ingredient {
        Ingredient { id, name: name.to_string() }
    }

    #[test]
    fn test_matches_query() {
        assert!(matches_query("Tortilla de patatas", "PATA"));
        assert!(matches_query("Tortilla", "  "));
        assert!(!matches_query("Gazpacho", "paella"));
    }

    #[test]
    fn test_filter_keeps_order() {
        let items = vec![ingredient(1, "Tomato"), ingredient(2, "Potato"), ingredient(3, "Rice")];
        let found: Vec<u32> = filter_by_name(&items, "ato").iter().map(|i| i.id).collect();
        assert_eq!(found, vec![1, 2]);
    }

    #[test]
    fn test_is_new_name() {
        let items = vec![ingredient(1, "Salt")];
        assert!(!is_new_name(&items, "salt"));
        assert!(is_new_name(&items, "Pepper"));
        assert!(!is_new_name(&items, " "));

        let items = vec![ingredient(2, "Azúcar"), ingredient(3, "Ñame")];
        assert!(!is_new_name(&items, "AZÚCAR"));
        assert!(!is_new_name(&items, "ñame"));
        assert!(is_new_name(&items, "Azafrán"));
    }
}
