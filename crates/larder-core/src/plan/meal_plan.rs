//! The date-keyed meal plan

use chrono::{DateTime, TimeZone};
use std::collections::BTreeMap;

use super::calendar::Calendar;
use crate::recipe::Recipe;

/// Planned recipes per day
///
/// Every key is a start-of-day instant in the plan's calendar, so two
/// instants on the same local day always share one list.
#[derive(Debug, Clone)]
pub struct MealPlan<Tz: TimeZone> {
    calendar: Calendar<Tz>,
    days: BTreeMap<DateTime<Tz>, Vec<Recipe>>,
}

impl<Tz: TimeZone> MealPlan<Tz> {
    /// Create an empty plan
    pub fn new(calendar: Calendar<Tz>) -> Self {
        Self {
            calendar,
            days: BTreeMap::new(),
        }
    }

    pub fn calendar(&self) -> &Calendar<Tz> {
        &self.calendar
    }

    /// Append a recipe to the day containing `day`
    pub fn add<T: TimeZone>(&mut self, day: &DateTime<T>, recipe: Recipe) {
        let key = self.calendar.start_of_day(day);
        self.days.entry(key).or_default().push(recipe);
    }

    /// Replace the whole list for the day containing `day`
    pub fn set_recipes<T: TimeZone>(&mut self, day: &DateTime<T>, recipes: Vec<Recipe>) {
        let key = self.calendar.start_of_day(day);
        self.days.insert(key, recipes);
    }

    /// Recipes planned for the day containing `day`, in insertion order
    pub fn recipes_for<T: TimeZone>(&self, day: &DateTime<T>) -> &[Recipe] {
        let key = self.calendar.start_of_day(day);
        self.days.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Day keys with a list, earliest first
    pub fn days(&self) -> impl Iterator<Item = &DateTime<Tz>> {
        self.days.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DateTime<Tz>, &[Recipe])> {
        self.days.iter().map(|(day, recipes)| (day, recipes.as_slice()))
    }

    /// Number of days with a list
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl<Tz: TimeZone> PartialEq for MealPlan<Tz> {
    fn eq(&self, other: &Self) -> bool {
        self.days == other.days
    }
}
