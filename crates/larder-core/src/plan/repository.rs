//! Meal plan persistence
//!
//! The plan is stored as one JSON object in one key-value slot:
//! `{"YYYY-MM-DD": [Recipe, ...], ...}` with UTC dates as keys. It is always
//! read and written whole.

use chrono::TimeZone;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use super::{calendar::Calendar, meal_plan::MealPlan};
use crate::constants::plan::STORAGE_KEY;
use crate::recipe::Recipe;
use crate::storage::KeyValueSlot;

/// Full-snapshot access to the persisted meal plan
pub trait PlanRepository {
    type Tz: TimeZone;

    /// Read the stored plan. Absent or unreadable data is an empty plan.
    fn load(&self) -> MealPlan<Self::Tz>;

    /// Overwrite the stored plan. Failures are logged and dropped.
    fn save(&self, plan: &MealPlan<Self::Tz>);
}

/// Plan repository backed by a single key-value slot
pub struct SlotPlanRepository<S, Tz: TimeZone> {
    slot: S,
    calendar: Calendar<Tz>,
    key: String,
}

impl<S: KeyValueSlot, Tz: TimeZone> SlotPlanRepository<S, Tz> {
    /// Repository over the standard meal plan slot
    pub fn new(slot: S, calendar: Calendar<Tz>) -> Self {
        Self::with_key(slot, calendar, STORAGE_KEY)
    }

    /// Repository over a custom slot key
    pub fn with_key(slot: S, calendar: Calendar<Tz>, key: impl Into<String>) -> Self {
        Self {
            slot,
            calendar,
            key: key.into(),
        }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }
}

impl<S: KeyValueSlot, Tz: TimeZone> PlanRepository for SlotPlanRepository<S, Tz> {
    type Tz = Tz;

    fn load(&self) -> MealPlan<Tz> {
        let mut plan = MealPlan::new(self.calendar.clone());

        let Some(blob) = self.slot.get(&self.key) else {
            debug!("No saved meal plan under {}", self.key);
            return plan;
        };

        let stored: BTreeMap<String, Vec<Recipe>> = match serde_json::from_str(&blob) {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Ignoring unreadable meal plan under {}: {}", self.key, e);
                return plan;
            }
        };

        for (key, recipes) in stored {
            match self.calendar.parse_storage_key(&key) {
                Some(day) => plan.set_recipes(&day, recipes),
                None => warn!("Skipping meal plan entry with invalid day key {:?}", key),
            }
        }

        debug!("Loaded meal plan with {} day(s)", plan.len());
        plan
    }

    fn save(&self, plan: &MealPlan<Tz>) {
        let stored: BTreeMap<String, &[Recipe]> = plan
            .iter()
            .map(|(day, recipes)| (plan.calendar().storage_key(day), recipes))
            .collect();

        let json = match serde_json::to_string(&stored) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to encode meal plan: {}", e);
                return;
            }
        };

        if let Err(e) = self.slot.set(&self.key, &json) {
            warn!("Failed to save meal plan under {}: {}", self.key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Database, MemorySlot, Preferences};
    use anyhow::Result;
    use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
    use tempfile::TempDir;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn recipe(title: &str) -> Recipe {
        Recipe::new(
            title,
            format!("{}-image", title),
            vec!["1 cup flour".into()],
            vec!["Mix.".into()],
        )
    }

    /// Slot whose writes always fail
    struct ReadOnlySlot;

    impl KeyValueSlot for ReadOnlySlot {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            anyhow::bail!("read-only")
        }
    }

    #[test]
    fn test_empty_slot_loads_empty_plan() {
        let repo = SlotPlanRepository::new(MemorySlot::new(), Calendar::new(Utc));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_undecodable_blob_loads_empty_plan() {
        let slot = MemorySlot::new();
        slot.set(STORAGE_KEY, "{\"2025-11-18\": 42}").unwrap();

        let repo = SlotPlanRepository::new(slot, Calendar::new(Utc));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_round_trip() {
        let calendar = Calendar::new(Utc);
        let repo = SlotPlanRepository::new(MemorySlot::new(), calendar.clone());

        let mut plan = MealPlan::new(calendar);
        plan.add(&utc("2025-11-18T08:00:00Z"), recipe("Granola"));
        plan.add(&utc("2025-11-18T19:00:00Z"), recipe("Chicken"));
        plan.add(&utc("2025-11-21T12:00:00Z"), recipe("Soup"));

        repo.save(&plan);
        let loaded = repo.load();

        assert_eq!(loaded, plan);
        for (day, recipes) in loaded.iter() {
            assert_eq!(*day, loaded.calendar().start_of_day(day));
            let original = plan.recipes_for(day);
            let titles: Vec<_> = recipes.iter().map(|r| r.title.as_str()).collect();
            let expected: Vec<_> = original.iter().map(|r| r.title.as_str()).collect();
            assert_eq!(titles, expected);
        }
    }

    #[test]
    fn test_stored_shape() {
        let calendar = Calendar::new(Utc);
        let repo = SlotPlanRepository::new(MemorySlot::new(), calendar.clone());

        let granola = recipe("Granola");
        let mut plan = MealPlan::new(calendar);
        plan.add(&utc("2025-11-18T08:00:00Z"), granola.clone());
        plan.add(&utc("2025-11-18T09:00:00Z"), recipe("Toast"));
        repo.save(&plan);

        let blob = repo.slot().get(STORAGE_KEY).unwrap();
        let json: serde_json::Value = serde_json::from_str(&blob).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 1, "same-day entries must share one key");
        let day = object["2025-11-18"].as_array().unwrap();
        assert_eq!(day.len(), 2);
        assert_eq!(day[0]["id"], granola.id.to_string());
        assert_eq!(day[0]["imageName"], "Granola-image");
        assert_eq!(day[1]["title"], "Toast");
    }

    #[test]
    fn test_externally_authored_blob_without_ids() {
        let slot = MemorySlot::new();
        slot.set(
            STORAGE_KEY,
            r#"{"2025-11-18":[{"title":"Soup","imageName":"soup","ingredients":["2 carrots"],"steps":["Simmer."]}]}"#,
        )
        .unwrap();

        let repo = SlotPlanRepository::new(slot, Calendar::new(Utc));
        let plan = repo.load();

        let recipes = plan.recipes_for(&utc("2025-11-18T10:00:00Z"));
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Soup");
        assert!(!recipes[0].id.is_nil());
    }

    #[test]
    fn test_null_id_does_not_drop_other_days() {
        let slot = MemorySlot::new();
        slot.set(
            STORAGE_KEY,
            concat!(
                r#"{"2025-11-18":[{"id":null,"title":"Soup","imageName":"soup","ingredients":[],"steps":[]}],"#,
                r#""2025-11-19":[{"title":"Pie","imageName":"pie","ingredients":[],"steps":[]}]}"#,
            ),
        )
        .unwrap();

        let plan = SlotPlanRepository::new(slot, Calendar::new(Utc)).load();

        assert_eq!(plan.len(), 2);
        let soup = &plan.recipes_for(&utc("2025-11-18T00:00:00Z"))[0];
        assert_eq!(soup.title, "Soup");
        assert!(!soup.id.is_nil());
        assert_eq!(plan.recipes_for(&utc("2025-11-19T00:00:00Z"))[0].title, "Pie");
    }

    #[test]
    fn test_invalid_day_keys_are_skipped() {
        let slot = MemorySlot::new();
        slot.set(
            STORAGE_KEY,
            r#"{"tomorrow":[],"2025-11-19":[{"title":"Pie","imageName":"pie","ingredients":[],"steps":[]}]}"#,
        )
        .unwrap();

        let plan = SlotPlanRepository::new(slot, Calendar::new(Utc)).load();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.recipes_for(&utc("2025-11-19T00:00:00Z"))[0].title, "Pie");
    }

    #[test]
    fn test_write_failure_is_silent() {
        let calendar = Calendar::new(Utc);
        let repo = SlotPlanRepository::new(ReadOnlySlot, calendar.clone());

        let mut plan = MealPlan::new(calendar);
        plan.add(&utc("2025-11-18T08:00:00Z"), recipe("Granola"));
        repo.save(&plan);

        assert!(repo.load().is_empty());
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_reload_moves_entries_a_day_earlier_east_of_utc() {
        let calendar = Calendar::new(FixedOffset::east_opt(10 * 3600).unwrap());
        let repo = SlotPlanRepository::new(MemorySlot::new(), calendar.clone());
        let day = calendar.day(NaiveDate::from_ymd_opt(2025, 3, 11).unwrap());

        let mut plan = MealPlan::new(calendar.clone());
        plan.add(&day, recipe("Granola"));
        repo.save(&plan);

        let loaded = repo.load();
        let previous = calendar.day(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert!(loaded.recipes_for(&day).is_empty());
        assert_eq!(loaded.recipes_for(&previous)[0].title, "Granola");
    }

    #[test]
    fn test_reload_moves_entries_a_day_earlier_west_of_utc() {
        let calendar = Calendar::new(FixedOffset::west_opt(5 * 3600).unwrap());
        let repo = SlotPlanRepository::new(MemorySlot::new(), calendar.clone());
        let day = calendar.day(NaiveDate::from_ymd_opt(2025, 3, 11).unwrap());

        let mut plan = MealPlan::new(calendar.clone());
        plan.add(&day, recipe("Granola"));
        repo.save(&plan);

        let blob = repo.slot().get(STORAGE_KEY).unwrap();
        assert!(blob.contains("\"2025-03-11\""));

        let loaded = repo.load();
        let previous = calendar.day(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert!(loaded.recipes_for(&day).is_empty());
        assert_eq!(loaded.recipes_for(&previous)[0].title, "Granola");
    }

    #[test]
    fn test_colliding_storage_keys_keep_later_day() {
        // London's 23-hour spring-forward day ends before UTC midnight, so
        // both local days start on the same UTC date
        let calendar = Calendar::new(chrono_tz::Europe::London);
        let repo = SlotPlanRepository::new(MemorySlot::new(), calendar.clone());
        let shortened = calendar.day(NaiveDate::from_ymd_opt(2025, 3, 30).unwrap());
        let next = calendar.day(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
        assert_eq!(calendar.storage_key(&shortened), "2025-03-30");
        assert_eq!(calendar.storage_key(&next), "2025-03-30");

        let mut plan = MealPlan::new(calendar.clone());
        plan.add(&shortened, recipe("Granola"));
        plan.add(&next, recipe("Soup"));
        repo.save(&plan);

        let blob = repo.slot().get(STORAGE_KEY).unwrap();
        let json: serde_json::Value = serde_json::from_str(&blob).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["2025-03-30"].as_array().unwrap().len(), 1);
        assert_eq!(object["2025-03-30"][0]["title"], "Soup");

        let loaded = repo.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.recipes_for(&shortened)[0].title, "Soup");
    }

    #[test]
    fn test_sqlite_backed_round_trip() {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("larder.db");
        let calendar = Calendar::new(Utc);

        let mut plan = MealPlan::new(calendar.clone());
        plan.add(&utc("2025-11-18T08:00:00Z"), recipe("Granola"));
        {
            let prefs = Preferences::new(Database::new(&db_path).unwrap());
            SlotPlanRepository::new(prefs, calendar.clone()).save(&plan);
        }

        let prefs = Preferences::new(Database::new(&db_path).unwrap());
        let loaded = SlotPlanRepository::new(&prefs, calendar).load();
        assert_eq!(loaded, plan);
        assert!(prefs.get(STORAGE_KEY).is_some());
    }
}
