//! The planning view's in-memory owner of the meal plan

use chrono::{DateTime, TimeZone};
use tracing::info;

use super::{calendar::Calendar, meal_plan::MealPlan, repository::PlanRepository};
use crate::recipe::Recipe;

/// Cached meal plan plus the repository it is written back to
///
/// The plan is read from the repository once, at activation. Every mutation
/// then writes the whole plan back; the in-memory copy stays authoritative
/// even when that write fails.
pub struct PlanStore<R: PlanRepository> {
    repository: R,
    plan: MealPlan<R::Tz>,
}

impl<R: PlanRepository> PlanStore<R> {
    /// Load the saved plan and take ownership of it
    pub fn activate(repository: R) -> Self {
        let plan = repository.load();
        info!("Meal plan activated with {} planned day(s)", plan.len());
        Self { repository, plan }
    }

    /// Append `recipe` to the day containing `day` and persist
    pub fn add<T: TimeZone>(&mut self, recipe: Recipe, day: &DateTime<T>) {
        info!("Planning {:?} on {}", recipe.title, self.calendar().storage_key(day));
        self.plan.add(day, recipe);
        self.repository.save(&self.plan);
    }

    pub fn plan(&self) -> &MealPlan<R::Tz> {
        &self.plan
    }

    pub fn calendar(&self) -> &Calendar<R::Tz> {
        self.plan.calendar()
    }

    pub fn recipes_for<T: TimeZone>(&self, day: &DateTime<T>) -> &[Recipe] {
        self.plan.recipes_for(day)
    }

    /// Day keys for the planner listing, starting with the day of `today`
    pub fn upcoming_days<T: TimeZone>(
        &self,
        today: &DateTime<T>,
        count: u32,
    ) -> Vec<DateTime<R::Tz>> {
        self.calendar().days_from(today, count)
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}
