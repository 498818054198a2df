//! Larder Core - Shared library for meal planning
//!
//! This crate provides the core functionality behind the Larder front ends:
//! - Recipes and the recipe catalog
//! - The date-keyed meal plan and its persistence
//! - Grocery list, ingredient highlighting, and step playback
//! - The companion remote link

pub mod companion;
pub mod config;
pub mod constants;
pub mod error;
pub mod grocery;
pub mod ingredient;
pub mod paths;
pub mod picker;
pub mod plan;
pub mod playback;
pub mod recipe;
pub mod storage;

// Re-exports for convenience
pub use companion::{CompanionLink, CompanionMessage, LinkState};
pub use config::LarderConfig;
pub use error::{LarderError, LarderResult};
pub use plan::{Calendar, MealPlan, PlanStore, SlotPlanRepository};
pub use recipe::{Recipe, RecipeCatalog};
pub use storage::{Database, Preferences};
