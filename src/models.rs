// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! This module defines the request and response data structures used by
//! the REST API. Field names are camelCase on the wire.
//!
//! ## Model Categories
//!
//! - **Credentials**: login request and response
//! - **Recipes**: the stored resource and the request body that creates or
//!   replaces one

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{messages, ApiError};

/// Format of [`Recipe::creation_date_time`].
pub const CREATION_DATE_TIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

// =============================================================================
// Credentials
// =============================================================================

/// Login credentials.
///
/// Also the success response of `POST /api/authenticate`, where `password`
/// carries the issued token instead of the submitted secret.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserCredentials {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

// =============================================================================
// Recipe Models
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
}

/// A stored recipe.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Client-chosen identifier, unique within the store.
    pub id: i32,
    pub name: String,
    /// Recipe category (e.g. vegetarian).
    #[serde(rename = "type")]
    pub recipe_type: String,
    /// Number of people the recipe serves.
    pub serving_capacity: u32,
    /// Set by the server when the recipe is first stored (`dd-MM-yyyy HH:mm:ss`, UTC).
    pub creation_date_time: String,
    #[serde(default)]
    pub ingredients_list: Vec<Ingredient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// Body of `POST /api/recipe` and `PUT /api/recipe`.
///
/// `id`, `name`, `type` and `servingCapacity` are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub recipe_type: Option<String>,
    #[serde(default)]
    pub serving_capacity: Option<u32>,
    #[serde(default)]
    pub ingredients_list: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Option<String>,
}

impl RecipeRequest {
    /// Validate required fields and stamp the creation time.
    pub fn into_recipe(self, created_at: DateTime<Utc>) -> Result<Recipe, ApiError> {
        let (Some(id), Some(name), Some(recipe_type), Some(serving_capacity)) =
            (self.id, self.name, self.recipe_type, self.serving_capacity)
        else {
            tracing::warn!("One of the required recipe fields is missing");
            return Err(ApiError::bad_request(messages::BAD_REQUEST));
        };

        Ok(Recipe {
            id,
            name,
            recipe_type,
            serving_capacity,
            creation_date_time: format_creation_time(created_at),
            ingredients_list: self.ingredients_list,
            instructions: self.instructions,
        })
    }
}

pub fn format_creation_time(at: DateTime<Utc>) -> String {
    at.format(CREATION_DATE_TIME_FORMAT).to_string()
}
