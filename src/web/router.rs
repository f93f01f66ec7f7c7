//! Router configuration for Web API.

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    change_password, delete_contact, health, list_contacts, login, ping, register, reply,
    submit_contact, AppState,
};
use super::middleware::create_cors_layer;

/// Create the main router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    // Public routes
    let admin_public_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login));

    // Session-required routes; each handler takes a BearerToken
    let admin_protected_routes = Router::new()
        .route("/contacts", get(list_contacts))
        .route("/reply/:id", post(reply))
        .route("/contact/:id", delete(delete_contact))
        .route("/password", post(change_password));

    let admin_routes = Router::new()
        .merge(admin_public_routes)
        .merge(admin_protected_routes);

    let api_routes = Router::new()
        .route("/contact", post(submit_contact))
        .nest("/admin", admin_routes);

    Router::new()
        .route("/", get(health))
        .route("/ping", get(ping))
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}
