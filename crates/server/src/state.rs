//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ServerConfig;
use crate::services::cloudinary::{CloudinaryClient, CloudinaryError};
use crate::services::token::TokenService;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the database pool and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    pool: PgPool,
    tokens: TokenService,
    media: Option<CloudinaryClient>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The token service and the optional Cloudinary client are built here
    /// from configuration; nothing else reads secrets after startup.
    ///
    /// # Errors
    ///
    /// Returns an error if the Cloudinary HTTP client fails to build.
    pub fn new(config: ServerConfig, pool: PgPool) -> Result<Self, CloudinaryError> {
        let tokens = TokenService::new(config.token_secret.clone());
        let media = config
            .media
            .as_ref()
            .map(CloudinaryClient::new)
            .transpose()?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                tokens,
                media,
            }),
        })
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the token service.
    #[must_use]
    pub fn tokens(&self) -> &TokenService {
        &self.inner.tokens
    }

    /// Get the Cloudinary client, if media uploads are configured.
    #[must_use]
    pub fn media(&self) -> Option<&CloudinaryClient> {
        self.inner.media.as_ref()
    }
}
