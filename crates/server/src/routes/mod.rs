//! HTTP route handlers for the portfolio API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /api/health            - Liveness check
//! GET  /api/health/ready      - Readiness check (database probe)
//!
//! # Public
//! GET  /api/portfolio         - Current portfolio document
//!
//! # Admin (bearer token)
//! POST /api/admin/login       - Exchange the admin password for a token
//! GET  /api/admin/portfolio   - Current document
//! PUT  /api/admin/portfolio   - Full-document replace
//! POST /api/admin/upload      - Relay a data URL to Cloudinary
//! ```

pub mod auth;
pub mod portfolio;
pub mod upload;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route(
            "/portfolio",
            get(portfolio::show_admin).put(portfolio::replace),
        )
        .route("/upload", post(upload::upload))
}

/// Create all routes for the portfolio API.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Public read
        .route("/api/portfolio", get(portfolio::show))
        // Admin surface
        .nest("/api/admin", admin_routes())
}
