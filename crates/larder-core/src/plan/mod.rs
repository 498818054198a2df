//! Meal planning
//!
//! A date-keyed plan of recipes, persisted as one JSON blob:
//! - `Calendar` decides where days start and how they are stored
//! - `MealPlan` holds one recipe list per day
//! - `PlanRepository` loads and saves the whole plan at once
//! - `PlanStore` caches the plan for the planning view and saves on every add

mod calendar;
mod meal_plan;
mod repository;
mod store;

pub use calendar::Calendar;
pub use meal_plan::MealPlan;
pub use repository::{PlanRepository, SlotPlanRepository};
pub use store::PlanStore;
