use std::time::Duration;

use async_graphql::{ObjectType, Schema, SubscriptionType};
use axum::{
    extract::{Request, State},
    http::{
        header::{HeaderValue, CONTENT_TYPE},
        Method, StatusCode,
    },
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::error::AppError;
use crate::state::AppState;
use infra::repos::StudentRepo;

/// Build the Axum router with health endpoint and GraphQL.
/// Generic over the schema roots so the roots stay in the `gql` module.
pub fn build_router<Q, M, S>(state: AppState, schema: Schema<Q, M, S>) -> Router
where
    Q: ObjectType + Send + Sync + 'static,
    M: ObjectType + Send + Sync + 'static,
    S: SubscriptionType + Send + Sync + 'static,
{
    Router::new()
        // Simple liveness check; also proves the registry lock is healthy.
        .route("/health", get(health))
        .route(
            "/graphql",
            post(move |req| graphql_handler(req, schema)),
        )
        // App state (in-memory registry)
        .with_state(state)
        // Useful default middlewares
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer({
            let allowed_origins = std::env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000,http://localhost:3001".to_string());

            let origins: Vec<HeaderValue> = allowed_origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE])
        })
}

/// GraphQL handler: deserialize the request body, execute it against the
/// schema, return the JSON response.
async fn graphql_handler<Q, M, S>(req: Request, schema: Schema<Q, M, S>) -> Result<Response, AppError>
where
    Q: ObjectType + Send + Sync + 'static,
    M: ObjectType + Send + Sync + 'static,
    S: SubscriptionType + Send + Sync + 'static,
{
    let (_parts, body) = req.into_parts();
    let body_bytes = axum::body::to_bytes(body, 2 * 1024 * 1024)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to read request body: {}", e)))?;

    let gql_request: async_graphql::Request = serde_json::from_slice(&body_bytes)
        .map_err(|e| AppError::BadRequest(format!("Invalid GraphQL request: {}", e)))?;

    let gql_response = schema.execute(gql_request).await;

    Ok(Json(gql_response).into_response())
}

/// Liveness + quick registry probe.
async fn health(State(state): State<AppState>) -> &'static str {
    let _students = StudentRepo::new(state.store.clone()).list();
    "ok"
}
