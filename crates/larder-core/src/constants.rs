//! Application constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

/// Meal plan persistence
pub mod plan {
    /// Key of the single slot holding the serialized meal plan
    pub const STORAGE_KEY: &str = "mealPlan.savedRecipes";

    /// Storage key date format (UTC calendar day)
    pub const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d";

    /// Number of days shown by the planner, starting today
    pub const DEFAULT_UPCOMING_DAYS: u32 = 30;
}

/// Companion remote link
pub mod companion {
    /// Wire tag of the only command the remote sends
    pub const NEXT_STEP_ACTION: &str = "nextStep";
}

/// Ingredient highlighting
pub mod ingredient {
    /// Characters treated as part of a quantity besides Unicode numerics
    pub const NUMERIC_HIGHLIGHT_CHARS: &[char] =
        &['/', '.', '½', '⅓', '⅔', '¼', '¾', '⅛', '⅜', '⅝', '⅞'];
}

/// Filesystem layout
pub mod fs {
    /// Config directory name
    pub const CONFIG_DIR_NAME: &str = ".larder";

    /// SQLite database file name
    pub const DATABASE_FILE_NAME: &str = "larder.db";

    /// Config file name
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Recipe catalog file name
    pub const CATALOG_FILE_NAME: &str = "recipes.json";
}
