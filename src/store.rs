// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory recipe repository keyed by recipe id.

use std::collections::BTreeMap;

use crate::error::{messages, ApiError};
use crate::models::Recipe;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("recipe {0} not found")]
    NotFound(i32),
    #[error("recipe {0} already exists")]
    AlreadyExists(i32),
    #[error("recipe store is full ({0} recipes)")]
    CapacityExceeded(usize),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::warn!(error = %err, "Recipe store operation failed");
        match err {
            StoreError::NotFound(_) => ApiError::not_found(messages::RECIPE_NOT_FOUND),
            StoreError::AlreadyExists(_) => ApiError::conflict(messages::RESOURCE_CONFLICT),
            StoreError::CapacityExceeded(_) => ApiError::creation_failed(),
        }
    }
}

pub struct RecipeStore {
    recipes: BTreeMap<i32, Recipe>,
    capacity: usize,
}

impl RecipeStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            recipes: BTreeMap::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn contains(&self, id: i32) -> bool {
        self.recipes.contains_key(&id)
    }

    pub fn get(&self, id: i32) -> Result<Recipe, StoreError> {
        self.recipes.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// All recipes, ordered by id.
    pub fn list(&self) -> Vec<Recipe> {
        self.recipes.values().cloned().collect()
    }

    pub fn insert(&mut self, recipe: Recipe) -> Result<Recipe, StoreError> {
        if self.contains(recipe.id) {
            return Err(StoreError::AlreadyExists(recipe.id));
        }
        if self.recipes.len() >= self.capacity {
            return Err(StoreError::CapacityExceeded(self.capacity));
        }
        self.recipes.insert(recipe.id, recipe.clone());
        Ok(recipe)
    }

    /// Replace an existing recipe. The original creation time is kept.
    pub fn update(&mut self, mut recipe: Recipe) -> Result<Recipe, StoreError> {
        let existing = self
            .recipes
            .get_mut(&recipe.id)
            .ok_or(StoreError::NotFound(recipe.id))?;
        recipe.creation_date_time = existing.creation_date_time.clone();
        *existing = recipe.clone();
        Ok(recipe)
    }

    pub fn delete(&mut self, id: i32) -> Result<Recipe, StoreError> {
        self.recipes.remove(&id).ok_or(StoreError::NotFound(id))
    }
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::with_capacity(crate::config::DEFAULT_STORE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn recipe(id: i32, name: &str) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            recipe_type: "veg".to_string(),
            serving_capacity: 2,
            creation_date_time: "01-01-2026 10:00:00".to_string(),
            ingredients_list: Vec::new(),
            instructions: None,
        }
    }

    #[test]
    fn insert_then_get() {
        let mut store = RecipeStore::default();
        store.insert(recipe(1, "Soup")).unwrap();

        assert_eq!(store.get(1).unwrap().name, "Soup");
        assert_eq!(store.get(2), Err(StoreError::NotFound(2)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_insert_conflicts() {
        let mut store = RecipeStore::default();
        store.insert(recipe(1, "Soup")).unwrap();

        assert_eq!(
            store.insert(recipe(1, "Other")),
            Err(StoreError::AlreadyExists(1))
        );
        assert_eq!(store.get(1).unwrap().name, "Soup");
    }

    #[test]
    fn capacity_limit_rejects_new_recipes() {
        let mut store = RecipeStore::with_capacity(1);
        store.insert(recipe(1, "Soup")).unwrap();

        assert_eq!(
            store.insert(recipe(2, "Stew")),
            Err(StoreError::CapacityExceeded(1))
        );
    }

    #[test]
    fn update_keeps_creation_time() {
        let mut store = RecipeStore::default();
        store.insert(recipe(1, "Soup")).unwrap();

        let mut changed = recipe(1, "Tomato Soup");
        changed.creation_date_time = "02-02-2026 11:00:00".to_string();
        let updated = store.update(changed).unwrap();

        assert_eq!(updated.name, "Tomato Soup");
        assert_eq!(updated.creation_date_time, "01-01-2026 10:00:00");
        assert_eq!(store.get(1).unwrap(), updated);
        assert_eq!(store.update(recipe(9, "x")), Err(StoreError::NotFound(9)));
    }

    #[test]
    fn list_is_ordered_and_delete_removes() {
        let mut store = RecipeStore::default();
        store.insert(recipe(3, "C")).unwrap();
        store.insert(recipe(1, "A")).unwrap();
        store.insert(recipe(2, "B")).unwrap();

        let ids: Vec<i32> = store.list().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        store.delete(2).unwrap();
        assert!(!store.contains(2));
        assert_eq!(store.delete(2), Err(StoreError::NotFound(2)));
    }

    #[test]
    fn store_errors_map_to_api_statuses() {
        assert_eq!(ApiError::from(StoreError::NotFound(1)).status, StatusCode::NOT_FOUND);
        assert_eq!(ApiError::from(StoreError::AlreadyExists(1)).status, StatusCode::CONFLICT);
        assert_eq!(
            ApiError::from(StoreError::CapacityExceeded(1)).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
