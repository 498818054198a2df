//! Grocery list
//!
//! Lives for the session only; nothing here is persisted.

use uuid::Uuid;

/// A grocery list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroceryItem {
    pub id: Uuid,
    pub name: String,
    pub completed: bool,
}

/// Ordered grocery list
#[derive(Debug, Clone, Default)]
pub struct GroceryList {
    items: Vec<GroceryItem>,
}

impl GroceryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item; blank names are rejected
    pub fn add(&mut self, name: &str) -> Option<Uuid> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = Uuid::new_v4();
        self.items.push(GroceryItem {
            id,
            name: name.to_string(),
            completed: false,
        });
        Some(id)
    }

    /// Flip an item's completed flag; false if no such item
    pub fn toggle(&mut self, id: Uuid) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Remove an item; false if no such item
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    pub fn get(&self, id: Uuid) -> Option<&GroceryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
