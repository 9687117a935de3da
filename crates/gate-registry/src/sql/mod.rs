//! SQL client registry backend.
//!
//! Looks up clients in a SQL database (PostgreSQL, MySQL, SQLite) through
//! the SQLx `Any` driver. The registry is strictly read-only; rows are
//! created and updated by the external provisioning process.
//!
//! # Database Schema
//!
//! ```sql
//! CREATE TABLE users (
//!     id SERIAL PRIMARY KEY,
//!     chat_id BIGINT NOT NULL DEFAULT 0,
//!     username VARCHAR(255) NOT NULL,
//!     sub_id VARCHAR(255) NOT NULL DEFAULT '',
//!     client_id VARCHAR(255) NOT NULL UNIQUE,  -- the credential
//!     expire BIGINT NOT NULL DEFAULT 0,        -- unix seconds
//!     max_conns BIGINT NOT NULL DEFAULT 0      -- <= 0 = unlimited
//! );
//!
//! CREATE UNIQUE INDEX idx_users_client_id ON users(client_id);
//! ```
//!
//! # Example
//!
//! ```ignore
//! use gate_registry::{SqlRegistry, SqlRegistryConfig};
//! use std::time::Duration;
//!
//! let registry = SqlRegistry::connect(
//!     SqlRegistryConfig::new("postgres://gate:pw@localhost/gate")
//!         .max_connections(20)
//!         .connect_timeout(Duration::from_secs(10)),
//! ).await?;
//! ```

mod backend;
mod config;
mod queries;

#[cfg(test)]
mod tests;

pub use backend::{DatabaseType, SqlRegistry};
pub use config::SqlRegistryConfig;
