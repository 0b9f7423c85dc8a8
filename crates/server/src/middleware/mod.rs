//! HTTP middleware for the portfolio server.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. CORS (public read API is consumed cross-origin)
//! 4. Body limit (data-URL uploads are large)
//!
//! Admin authentication is an extractor, not a layer: protected handlers
//! take [`RequireAdmin`] as an argument.

pub mod auth;

pub use auth::RequireAdmin;
