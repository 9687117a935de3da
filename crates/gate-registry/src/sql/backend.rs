//! SQL registry backend implementation.

use async_trait::async_trait;
use sqlx::any::{AnyPoolOptions, AnyRow};
use sqlx::{AnyPool, Row};
use tracing::debug;

use crate::client::Client;
use crate::error::RegistryError;
use crate::traits::ClientRegistry;

use super::config::SqlRegistryConfig;
use super::queries;

/// Database type enum for query selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    /// PostgreSQL database.
    PostgreSQL,
    /// MySQL/MariaDB database.
    MySQL,
    /// SQLite database.
    SQLite,
}

impl DatabaseType {
    /// Detect database type from URL.
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Some(Self::PostgreSQL)
        } else if url.starts_with("mysql://") || url.starts_with("mariadb://") {
            Some(Self::MySQL)
        } else if url.starts_with("sqlite:") {
            Some(Self::SQLite)
        } else {
            None
        }
    }
}

/// SQL-backed client registry.
///
/// Supports PostgreSQL, MySQL, and SQLite through SQLx.
pub struct SqlRegistry {
    pool: AnyPool,
    db_type: DatabaseType,
}

impl SqlRegistry {
    /// Connect to the database and create the registry.
    pub async fn connect(config: SqlRegistryConfig) -> Result<Self, RegistryError> {
        // Install database drivers for the "any" pool
        sqlx::any::install_default_drivers();

        let db_type = DatabaseType::from_url(&config.database_url)
            .ok_or_else(|| RegistryError::backend("unsupported database URL scheme"))?;

        let pool = AnyPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .max_lifetime(config.max_lifetime)
            .idle_timeout(config.idle_timeout)
            .connect(&config.database_url)
            .await?;

        Ok(Self { pool, db_type })
    }

    /// Parse a client row from AnyRow.
    fn parse_client_row(row: AnyRow) -> Result<Client, RegistryError> {
        Ok(Client {
            id: row.try_get("id").unwrap_or(0),
            chat_id: row.try_get("chat_id").unwrap_or(0),
            username: row.try_get("username")?,
            sub_id: row.try_get("sub_id").unwrap_or_default(),
            credential: row.try_get("client_id")?,
            expire: row.try_get("expire").unwrap_or(0),
            max_conns: row.try_get("max_conns").unwrap_or(0),
        })
    }

    /// Get the connection pool (for advanced usage and tests).
    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    /// Get database type.
    pub fn database_type(&self) -> DatabaseType {
        self.db_type
    }
}

#[async_trait]
impl ClientRegistry for SqlRegistry {
    async fn find_by_credential(&self, credential: &str) -> Result<Client, RegistryError> {
        debug!("looking up client by credential");

        let query = match self.db_type {
            DatabaseType::PostgreSQL => queries::FIND_BY_CREDENTIAL_PG,
            DatabaseType::MySQL | DatabaseType::SQLite => queries::FIND_BY_CREDENTIAL_MYSQL,
        };

        let row = sqlx::query(query)
            .bind(credential)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RegistryError::NotFound)?;

        Self::parse_client_row(row)
    }
}

// Debug implementation (don't leak connection details)
impl std::fmt::Debug for SqlRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlRegistry")
            .field("db_type", &self.db_type)
            .finish_non_exhaustive()
    }
}
