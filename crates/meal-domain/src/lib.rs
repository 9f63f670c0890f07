//! Meal Planner Domain
//!
//! Rules the web client applies on its own, independent of the browser:
//! serving scaling, week ranges, unit names, search, form drafts and the
//! session token bookkeeping. Also the serde models of backend resources.

pub mod calendar;
pub mod error;
pub mod groups;
pub mod models;
pub mod plan;
pub mod recipe_draft;
pub mod scaling;
pub mod search;
pub mod servings;
pub mod session;
pub mod shopping;
pub mod units;

pub use error::{DomainError, DomainResult};
