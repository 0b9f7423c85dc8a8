//! Portfolio repository.
//!
//! The store holds exactly one document, kept as JSONB in a single-row
//! table. `get_or_create` materializes the starter document with an upsert,
//! so two concurrent first requests cannot create duplicates; the primary
//! key makes the singleton a hard invariant.

use chrono::Utc;
use sqlx::PgPool;
use sqlx::types::Json;

use folio_core::Portfolio;

use super::RepositoryError;

/// Repository for the single portfolio document.
pub struct PortfolioRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PortfolioRepository<'a> {
    /// Create a new portfolio repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the document, creating it with starter content if absent.
    ///
    /// The insert-then-read upsert is safe under concurrent cold starts:
    /// whichever request wins the insert, both read the same row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails, or
    /// `RepositoryError::DataCorruption` if the stored document no longer
    /// matches the model.
    pub async fn get_or_create(&self) -> Result<Portfolio, RepositoryError> {
        let starter = Portfolio::starter();

        sqlx::query(
            r"
            INSERT INTO portfolio (id, document, updated_at)
            VALUES (TRUE, $1, $2)
            ON CONFLICT (id) DO NOTHING
            ",
        )
        .bind(Json(&starter))
        .bind(starter.updated_at)
        .execute(self.pool)
        .await?;

        self.get().await
    }

    /// Replace the document wholesale and stamp `updatedAt`.
    ///
    /// Returns the document exactly as saved. Upserts so a PUT before any
    /// GET also materializes the row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn replace(&self, mut document: Portfolio) -> Result<Portfolio, RepositoryError> {
        document.updated_at = Utc::now();

        sqlx::query(
            r"
            INSERT INTO portfolio (id, document, updated_at)
            VALUES (TRUE, $1, $2)
            ON CONFLICT (id) DO UPDATE
            SET document = EXCLUDED.document,
                updated_at = EXCLUDED.updated_at
            ",
        )
        .bind(Json(&document))
        .bind(document.updated_at)
        .execute(self.pool)
        .await?;

        Ok(document)
    }

    /// Read the stored document.
    async fn get(&self) -> Result<Portfolio, RepositoryError> {
        let (Json(value),): (Json<serde_json::Value>,) =
            sqlx::query_as("SELECT document FROM portfolio WHERE id = TRUE")
                .fetch_one(self.pool)
                .await?;

        serde_json::from_value(value).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid portfolio document: {e}"))
        })
    }
}
