//! Serving Counter
//!
//! The user-adjustable target serving count behind every +/- stepper.

use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServingCounter {
    base: u32,
    current: u32,
}

impl ServingCounter {
    /// Starts at the base servings (never below 1)
    pub fn new(base: u32) -> Self {
        let base = base.max(1);
        Self { base, current: base }
    }

    /// Counter for a recipe calibrated for `base`, currently showing `current`
    pub fn with_current(base: u32, current: u32) -> Self {
        Self {
            base: base.max(1),
            current: current.max(1),
        }
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn increment(&mut self) {
        self.current = self.current.saturating_add(1);
    }

    /// Decrease by one, stopping at 1
    pub fn decrement(&mut self) {
        if self.current > 1 {
            self.current -= 1;
        }
    }

    pub fn set(&mut self, value: u32) {
        self.current = value.max(1);
    }

    pub fn reset(&mut self) {
        self.current = self.base;
    }

    pub fn is_adjusted(&self) -> bool {
        self.current != self.base
    }
}

/// Parse a servings text input; whole numbers of at least 1 only
pub fn parse_servings(input: &str) -> DomainResult<u32> {
    match input.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(DomainError::InvalidServings(input.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrement_stops_at_one() {
        let mut counter = ServingCounter::new(2);
        counter.decrement();
        counter.decrement();
        counter.decrement();
        assert_eq!(counter.current(), 1);
        assert!(counter.is_adjusted());
    }

    #[test]
    fn test_increment_and_reset() {
        let mut counter = ServingCounter::new(4);
        assert!(!counter.is_adjusted());
        counter.increment();
        assert_eq!(counter.current(), 5);
        counter.reset();
        assert_eq!(counter.current(), 4);
    }

    #[test]
    fn test_zero_base_is_clamped() {
        let counter = ServingCounter::new(0);
        assert_eq!(counter.base(), 1);
        assert_eq!(ServingCounter::with_current(3, 0).current(), 1);
    }

    #[test]
    fn test_parse_servings() {
        assert_eq!(parse_servings(" 6 "), Ok(6));
        assert!(parse_servings("0").is_err());
        assert!(parse_servings("-2").is_err());
        assert!(parse_servings("two").is_err());
    }
}
