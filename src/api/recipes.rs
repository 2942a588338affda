// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Recipe CRUD endpoints.
//!
//! Every handler takes [`Auth`] first, so the token is fully verified before
//! the body is read or the store is touched.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use chrono::Utc;

use super::json_body;
use crate::{
    auth::Auth,
    error::{messages, ApiError},
    models::{Recipe, RecipeRequest},
    state::AppState,
};

/// Body returned by a successful delete.
pub const RECIPE_DELETED: &str = "Requested recipe deleted from DB";

fn recipe_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, ApiError> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Recipe id rejected");
        ApiError::bad_request(messages::BAD_REQUEST)
    })
}

#[utoipa::path(
    post,
    path = "/api/recipe",
    request_body = RecipeRequest,
    tag = "Recipes",
    security(("bearer" = [])),
    responses(
        (status = 201, body = Recipe),
        (status = 400, description = "Missing required field", body = crate::error::ErrorBody),
        (status = 401, description = "Token invalid or expired", body = crate::error::ErrorBody),
        (status = 403, description = "Missing header or malformed token", body = crate::error::ErrorBody),
        (status = 409, description = "Recipe id already used", body = crate::error::ErrorBody),
        (status = 500, description = "Recipe could not be stored", body = crate::error::ErrorBody),
    )
)]
pub async fn create_recipe(
    Auth(user): Auth,
    State(state): State<AppState>,
    payload: Result<Json<RecipeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    tracing::info!(user = %user.user_name, "Processing request to create new recipe");
    let recipe = json_body(payload)?.into_recipe(Utc::now())?;

    let saved = state.store.write().await.insert(recipe)?;

    tracing::info!(recipe_id = saved.id, "Saved new recipe");
    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    get,
    path = "/api/recipe/{id}",
    params(("id" = i32, Path, description = "Recipe identifier")),
    tag = "Recipes",
    security(("bearer" = [])),
    responses(
        (status = 200, body = Recipe),
        (status = 401, description = "Token invalid or expired", body = crate::error::ErrorBody),
        (status = 403, description = "Missing header or malformed token", body = crate::error::ErrorBody),
        (status = 404, description = "Unknown recipe", body = crate::error::ErrorBody),
    )
)]
pub async fn get_recipe(
    Auth(user): Auth,
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Recipe>, ApiError> {
    let id = recipe_id(id)?;
    tracing::info!(user = %user.user_name, recipe_id = id, "Processing request to get recipe");

    let recipe = state.store.read().await.get(id)?;
    Ok(Json(recipe))
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "Recipes",
    security(("bearer" = [])),
    responses(
        (status = 200, body = [Recipe]),
        (status = 401, description = "Token invalid or expired", body = crate::error::ErrorBody),
        (status = 403, description = "Missing header or malformed token", body = crate::error::ErrorBody),
        (status = 404, description = "No recipes stored", body = crate::error::ErrorBody),
    )
)]
pub async fn list_recipes(
    Auth(user): Auth,
    State(state): State<AppState>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    tracing::info!(user = %user.user_name, "Processing request to get all recipes");

    let recipes = state.store.read().await.list();
    if recipes.is_empty() {
        return Err(ApiError::not_found(messages::RECIPES_NOT_FOUND));
    }

    tracing::info!(count = recipes.len(), "Recipes retrieved");
    Ok(Json(recipes))
}

#[utoipa::path(
    put,
    path = "/api/recipe",
    request_body = RecipeRequest,
    tag = "Recipes",
    security(("bearer" = [])),
    responses(
        (status = 200, body = Recipe),
        (status = 400, description = "Missing required field", body = crate::error::ErrorBody),
        (status = 401, description = "Token invalid or expired", body = crate::error::ErrorBody),
        (status = 403, description = "Missing header or malformed token", body = crate::error::ErrorBody),
        (status = 404, description = "Unknown recipe", body = crate::error::ErrorBody),
    )
)]
pub async fn modify_recipe(
    Auth(user): Auth,
    State(state): State<AppState>,
    payload: Result<Json<RecipeRequest>, JsonRejection>,
) -> Result<Json<Recipe>, ApiError> {
    tracing::info!(user = %user.user_name, "Processing request to modify existing recipe");
    let recipe = json_body(payload)?.into_recipe(Utc::now())?;

    let modified = state.store.write().await.update(recipe)?;

    tracing::info!(recipe_id = modified.id, "Modified existing recipe");
    Ok(Json(modified))
}

#[utoipa::path(
    delete,
    path = "/api/recipe/{id}",
    params(("id" = i32, Path, description = "Recipe identifier")),
    tag = "Recipes",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Recipe deleted", body = String),
        (status = 401, description = "Token invalid or expired", body = crate::error::ErrorBody),
        (status = 403, description = "Missing header or malformed token", body = crate::error::ErrorBody),
        (status = 404, description = "Unknown recipe", body = crate::error::ErrorBody),
    )
)]
pub async fn delete_recipe(
    Auth(user): Auth,
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let id = recipe_id(id)?;
    tracing::info!(user = %user.user_name, recipe_id = id, "Processing request to delete recipe");

    state.store.write().await.delete(id)?;

    tracing::info!(recipe_id = id, "Recipe deleted");
    Ok((StatusCode::OK, RECIPE_DELETED))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        auth::{AuthenticatedUser, Role},
        models::Ingredient,
    };

    fn user() -> Auth {
        Auth(AuthenticatedUser {
            user_name: "abnamro".into(),
            role: Role::User,
            expires_at: 0,
        })
    }

    fn request(id: i32, name: &str) -> RecipeRequest {
        RecipeRequest {
            id: Some(id),
            name: Some(name.into()),
            recipe_type: Some("veg".into()),
            serving_capacity: Some(4),
            ingredients_list: vec![Ingredient {
                name: "tomato".into(),
                quantity: Some("3".into()),
            }],
            instructions: Some("Simmer".into()),
        }
    }

    #[tokio::test]
    async fn create_recipe_success() {
        let state = AppState::for_tests();

        let (status, Json(recipe)) =
            create_recipe(user(), State(state.clone()), Ok(Json(request(7, "Soup"))))
                .await
                .expect("recipe creation succeeds");

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(recipe.id, 7);
        assert_eq!(state.store.read().await.get(7).unwrap(), recipe);
    }

    #[tokio::test]
    async fn create_recipe_conflicts_on_duplicate_id() {
        let state = AppState::for_tests();
        create_recipe(user(), State(state.clone()), Ok(Json(request(7, "Soup"))))
            .await
            .unwrap();

        let err = create_recipe(user(), State(state), Ok(Json(request(7, "Stew"))))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(err.message, messages::RESOURCE_CONFLICT);
    }

    #[tokio::test]
    async fn create_recipe_fails_when_store_is_full() {
        let state = AppState::new(
            crate::store::RecipeStore::with_capacity(0),
            (*AppState::for_tests().auth).clone(),
        );

        let err = create_recipe(user(), State(state), Ok(Json(request(1, "Soup"))))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, messages::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn list_recipes_empty_is_not_found() {
        let err = list_recipes(user(), State(AppState::for_tests()))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, messages::RECIPES_NOT_FOUND);
    }

    #[tokio::test]
    async fn modify_and_delete_recipe() {
        let state = AppState::for_tests();
        create_recipe(user(), State(state.clone()), Ok(Json(request(3, "Soup"))))
            .await
            .unwrap();

        let Json(modified) = modify_recipe(user(), State(state.clone()), Ok(Json(request(3, "Stew"))))
            .await
            .expect("modify succeeds");
        assert_eq!(modified.name, "Stew");

        let (status, body) = delete_recipe(user(), State(state.clone()), Ok(Path(3)))
            .await
            .expect("delete succeeds");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, RECIPE_DELETED);
        assert!(state.store.read().await.is_empty());
    }

    #[tokio::test]
    async fn modify_unknown_recipe_is_not_found() {
        let err = modify_recipe(user(), State(AppState::for_tests()), Ok(Json(request(999, "Unknown"))))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, messages::RECIPE_NOT_FOUND);
    }
}
