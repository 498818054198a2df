//! Recipes and the recipe catalog

use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::Path;
use uuid::Uuid;

use crate::error::{LarderError, LarderResult};

/// A recipe
///
/// Identity is the `id`: two recipes with the same id are equal and hash the
/// same regardless of their content. Decoding tolerates a missing or null
/// `id` and assigns a fresh one, so externally authored JSON can omit it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default = "Uuid::new_v4", deserialize_with = "id_or_fresh")]
    pub id: Uuid,
    pub title: String,
    pub image_name: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

fn id_or_fresh<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Uuid, D::Error> {
    Ok(Option::<Uuid>::deserialize(deserializer)?.unwrap_or_else(Uuid::new_v4))
}

impl Recipe {
    /// Create a recipe with a freshly generated id
    pub fn new(
        title: impl Into<String>,
        image_name: impl Into<String>,
        ingredients: Vec<String>,
        steps: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            image_name: image_name.into(),
            ingredients,
            steps,
        }
    }
}

impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Recipe {}

impl Hash for Recipe {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Ordered collection of recipes available for browsing and planning
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Load a catalog from a JSON array of recipes
    ///
    /// A missing file is an empty catalog.
    pub fn load_from_path(path: &Path) -> LarderResult<Self> {
        if !path.exists() {
            tracing::debug!("No recipe catalog at {:?}", path);
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a catalog from JSON text
    pub fn from_json(json: &str) -> LarderResult<Self> {
        let recipes: Vec<Recipe> =
            serde_json::from_str(json).map_err(|e| LarderError::Catalog(e.to_string()))?;
        Ok(Self { recipes })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Find a recipe by exact id or case-insensitive title
    pub fn find(&self, query: &str) -> Option<&Recipe> {
        let query = query.trim();
        if let Ok(id) = Uuid::parse_str(query) {
            if let Some(recipe) = self.recipes.iter().find(|r| r.id == id) {
                return Some(recipe);
            }
        }
        let query = query.to_lowercase();
        self.recipes
            .iter()
            .find(|r| r.title.to_lowercase() == query)
    }
}
