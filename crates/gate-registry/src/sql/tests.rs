//! Tests for the SQL registry backend.

use crate::sql::{DatabaseType, SqlRegistry, SqlRegistryConfig};
use crate::{ClientRegistry, RegistryError};

/// Create test database schema.
async fn create_schema(registry: &SqlRegistry) {
    let create_table = r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            chat_id INTEGER NOT NULL DEFAULT 0,
            username TEXT NOT NULL,
            sub_id TEXT NOT NULL DEFAULT '',
            client_id TEXT NOT NULL UNIQUE,
            expire INTEGER NOT NULL DEFAULT 0,
            max_conns INTEGER NOT NULL DEFAULT 0
        )
    "#;

    sqlx::query(create_table)
        .execute(registry.pool())
        .await
        .expect("Failed to create table");
}

/// Insert a test client.
async fn insert_client(
    registry: &SqlRegistry,
    credential: &str,
    username: &str,
    expire: i64,
    max_conns: i64,
) {
    let insert = r#"
        INSERT INTO users (chat_id, username, sub_id, client_id, expire, max_conns)
        VALUES (?, ?, ?, ?, ?, ?)
    "#;

    sqlx::query(insert)
        .bind(42_i64)
        .bind(username)
        .bind("sub-1")
        .bind(credential)
        .bind(expire)
        .bind(max_conns)
        .execute(registry.pool())
        .await
        .expect("Failed to insert client");
}

/// Create a test SqlRegistry with in-memory SQLite.
async fn setup_test_db() -> SqlRegistry {
    let config = SqlRegistryConfig::new("sqlite::memory:").max_connections(1);
    SqlRegistry::connect(config).await.expect("Failed to connect")
}

#[tokio::test]
async fn test_database_type_detection() {
    assert_eq!(
        DatabaseType::from_url("postgres://localhost/db"),
        Some(DatabaseType::PostgreSQL)
    );
    assert_eq!(
        DatabaseType::from_url("postgresql://localhost/db"),
        Some(DatabaseType::PostgreSQL)
    );
    assert_eq!(
        DatabaseType::from_url("mysql://localhost/db"),
        Some(DatabaseType::MySQL)
    );
    assert_eq!(
        DatabaseType::from_url("sqlite::memory:"),
        Some(DatabaseType::SQLite)
    );
    assert_eq!(DatabaseType::from_url("invalid://localhost"), None);
}

#[tokio::test]
async fn test_connect_sqlite() {
    let registry = setup_test_db().await;
    assert_eq!(registry.database_type(), DatabaseType::SQLite);
}

#[tokio::test]
async fn test_find_by_credential() {
    let registry = setup_test_db().await;
    create_schema(&registry).await;
    insert_client(&registry, "ewq321fds654fsd", "alice", 1999999999, 2).await;

    let client = registry
        .find_by_credential("ewq321fds654fsd")
        .await
        .unwrap();
    assert_eq!(client.username, "alice");
    assert_eq!(client.credential, "ewq321fds654fsd");
    assert_eq!(client.chat_id, 42);
    assert_eq!(client.sub_id, "sub-1");
    assert_eq!(client.expire, 1999999999);
    assert_eq!(client.max_conns, 2);
}

#[tokio::test]
async fn test_unknown_credential_is_not_found() {
    let registry = setup_test_db().await;
    create_schema(&registry).await;
    insert_client(&registry, "abc", "alice", 0, 0).await;

    let result = registry.find_by_credential("does-not-exist").await;
    assert!(matches!(result, Err(RegistryError::NotFound)));
}

#[tokio::test]
async fn test_credential_match_is_case_sensitive() {
    let registry = setup_test_db().await;
    create_schema(&registry).await;
    insert_client(&registry, "AbC123", "alice", 0, 0).await;

    let result = registry.find_by_credential("abc123").await;
    assert!(matches!(result, Err(RegistryError::NotFound)));
}

#[tokio::test]
async fn test_not_found_on_empty_table() {
    let registry = setup_test_db().await;
    create_schema(&registry).await;

    let result = registry.find_by_credential("anything").await;
    assert!(matches!(result, Err(RegistryError::NotFound)));
}
