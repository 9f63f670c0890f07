//! Units
//!
//! Canonical unit names stored with recipe ingredients, plus the short
//! aliases people type.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub value: &'static str,
    pub label: &'static str,
    pub aliases: &'static [&'static str],
}

pub const UNITS: &[Unit] = &[
    Unit { value: "gramos", label: "gramos", aliases: &["g", "gr"] },
    Unit { value: "kilogramos", label: "kilogramos", aliases: &["kg"] },
    Unit { value: "mililitros", label: "mililitros", aliases: &["ml"] },
    Unit { value: "litros", label: "litros", aliases: &["l"] },
    Unit { value: "unidades", label: "unidades", aliases: &["u", "unds", "ud"] },
    Unit { value: "cucharada", label: "cucharada", aliases: &["tbsp", "cda.", "cda"] },
    Unit { value: "cucharadita", label: "cucharadita", aliases: &["tsp", "cdta.", "cdta"] },
    Unit { value: "pizca", label: "pizca", aliases: &[] },
];

pub const DEFAULT_UNIT: &str = "gramos";

/// Canonical value for `unit`; unknown units are kept as typed
pub fn normalize_unit(unit: &str) -> String {
    let lower = unit.trim().to_lowercase();
    if lower.is_empty() {
        return DEFAULT_UNIT.to_string();
    }
    UNITS
        .iter()
        .find(|u| u.value == lower || u.aliases.contains(&lower.as_str()))
        .map(|u| u.value.to_string())
        .unwrap_or_else(|| unit.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_map_to_canonical() {
        assert_eq!(normalize_unit("g"), "gramos");
        assert_eq!(normalize_unit(" KG "), "kilogramos");
        assert_eq!(normalize_unit("cda."), "cucharada");
        assert_eq!(normalize_unit("Tsp"), "cucharadita");
        assert_eq!(normalize_unit("litros"), "litros");
    }

    #[test]
    fn test_empty_defaults_to_grams() {
        assert_eq!(normalize_unit(""), "gramos");
        assert_eq!(normalize_unit("   "), "gramos");
    }

    #[test]
    fn test_unknown_is_kept() {
        assert_eq!(normalize_unit("Cup"), "Cup");
    }
}
