// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    middleware,
    routing::{any, get, post},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::request_gate,
    error::{messages, panic_response, ApiError, ErrorBody},
    models::{Ingredient, Recipe, RecipeRequest, UserCredentials},
    state::AppState,
};

pub mod authenticate;
pub mod health;
pub mod recipes;

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/authenticate", post(authenticate::authenticate))
        .route(
            "/recipe",
            post(recipes::create_recipe).put(recipes::modify_recipe),
        )
        .route(
            "/recipe/{id}",
            get(recipes::get_recipe).delete(recipes::delete_recipe),
        )
        .route("/recipes", get(recipes::list_recipes))
        .method_not_allowed_fallback(method_not_allowed);

    Router::new()
        .route("/", get(health::service_info))
        .route("/error", any(health::error_page))
        .route("/health", get(health::health))
        .nest("/api", api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), request_gate))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::not_found("Requested resource not found")
}

async fn method_not_allowed() -> ApiError {
    ApiError::new(
        StatusCode::METHOD_NOT_ALLOWED,
        "Request method is not supported for this resource",
    )
}

/// Unwrap a JSON body, answering `400` with the uniform error body when it
/// is missing, malformed or of the wrong shape.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Request body rejected");
        ApiError::bad_request(messages::BAD_REQUEST)
    })
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::service_info,
        health::health,
        authenticate::authenticate,
        recipes::create_recipe,
        recipes::get_recipe,
        recipes::list_recipes,
        recipes::modify_recipe,
        recipes::delete_recipe
    ),
    components(
        schemas(
            UserCredentials,
            Recipe,
            RecipeRequest,
            Ingredient,
            ErrorBody,
            health::ServiceInfo,
            health::HealthResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service status"),
        (name = "Authentication", description = "Token issuance"),
        (name = "Recipes", description = "Recipe management")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
