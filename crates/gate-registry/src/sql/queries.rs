//! SQL queries for different databases.

/// Query to find a client by credential (PostgreSQL).
pub const FIND_BY_CREDENTIAL_PG: &str = r#"
SELECT id, chat_id, username, sub_id, client_id, expire, max_conns
FROM users
WHERE client_id = $1
"#;

/// Query to find a client by credential (MySQL/SQLite).
pub const FIND_BY_CREDENTIAL_MYSQL: &str = r#"
SELECT id, chat_id, username, sub_id, client_id, expire, max_conns
FROM users
WHERE client_id = ?
"#;
