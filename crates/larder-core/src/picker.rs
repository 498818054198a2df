//! Recipe list behaviour
//!
//! The recipe list either browses (selecting opens the recipe) or picks
//! (selecting hands the recipe to whoever opened the list, e.g. the planner
//! adding a recipe to a day).

use std::fmt;

use crate::recipe::Recipe;

/// What selecting a recipe in the list does
pub enum RecipeListMode<'a> {
    /// Open the selected recipe
    Browse,
    /// Hand the selected recipe to a callback
    Pick(Box<dyn FnMut(&Recipe) + 'a>),
}

/// Result of a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Front end should navigate to this recipe
    Navigate(Recipe),
    /// The pick callback consumed the recipe
    Picked,
}

impl<'a> RecipeListMode<'a> {
    /// Pick mode with the given callback
    pub fn pick(on_select: impl FnMut(&Recipe) + 'a) -> Self {
        RecipeListMode::Pick(Box::new(on_select))
    }

    pub fn select(&mut self, recipe: &Recipe) -> Selection {
        match self {
            RecipeListMode::Browse => Selection::Navigate(recipe.clone()),
            RecipeListMode::Pick(on_select) => {
                on_select(recipe);
                Selection::Picked
            }
        }
    }

    /// Whether the list offers a dismiss control (only when picking)
    pub fn shows_dismiss(&self) -> bool {
        matches!(self, RecipeListMode::Pick(_))
    }
}

impl fmt::Debug for RecipeListMode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeListMode::Browse => write!(f, "Browse"),
            RecipeListMode::Pick(_) => write!(f, "Pick(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> Recipe {
        Recipe::new("Granola", "granola", vec![], vec![])
    }

    #[test]
    fn test_browse_navigates() {
        let recipe = recipe();
        let mut mode = RecipeListMode::Browse;

        assert_eq!(mode.select(&recipe), Selection::Navigate(recipe.clone()));
        assert!(!mode.shows_dismiss());
    }

    #[test]
    fn test_pick_invokes_callback() {
        let recipe = recipe();
        let mut picked = Vec::new();

        {
            let mut mode = RecipeListMode::pick(|r: &Recipe| picked.push(r.id));
            assert!(mode.shows_dismiss());
            assert_eq!(mode.select(&recipe), Selection::Picked);
        }

        assert_eq!(picked, vec![recipe.id]);
    }
}
