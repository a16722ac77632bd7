//! Database Engine Trait and Core Types
//!
//! This module defines the connection abstraction every handler talks to.
//! Each engine (`MySQL`, `SQLite`) implements the [`Database`] trait.
//!
//! # Owned Connection
//! Unlike a connect-per-call design, a [`Database`] value *is* the open
//! connection. It is created once at startup, borrowed mutably for each
//! statement and consumed by [`Database::close`].
//!
//! # Engine Isolation
//! Each engine implementation is completely independent. The only shared
//! pieces are the parameter type ([`SqlValue`]) and the result type
//! ([`QueryResult`]); statements use `?` placeholders in both dialects.

use std::path::PathBuf;

use crate::error::Result;

#[cfg(feature = "mysql")]
pub mod mysql;

#[cfg(feature = "sqlite")]
pub mod sqlite;

/// Supported database engine types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    /// `MySQL` database (includes `MariaDB`)
    MySQL,
    /// `SQLite` database
    SQLite,
}

impl DatabaseType {
    /// Get the engine name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MySQL => "mysql",
            Self::SQLite => "sqlite",
        }
    }

    /// Product name used in operator-facing messages
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::MySQL => "MySQL",
            Self::SQLite => "SQLite",
        }
    }
}

impl std::fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Connection configuration for database engines
///
/// Fields are engine-specific (e.g., `file` only applies to `SQLite`).
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Database engine type
    pub engine: DatabaseType,

    /// Hostname (for mysql)
    pub host: Option<String>,

    /// Port number (for mysql)
    pub port: Option<u16>,

    /// Username (for mysql)
    pub user: Option<String>,

    /// Password (for mysql)
    /// WARNING: Sensitive data, do not log or include in error messages
    pub password: Option<String>,

    /// Database name (for mysql)
    pub database: Option<String>,

    /// Database file path (for sqlite)
    pub file: Option<PathBuf>,
}

impl ConnectionConfig {
    /// Create a new `MySQL` connection config
    #[must_use]
    pub const fn mysql(
        host: String,
        port: u16,
        user: String,
        password: String,
        database: String,
    ) -> Self {
        Self {
            engine: DatabaseType::MySQL,
            host: Some(host),
            port: Some(port),
            user: Some(user),
            password: Some(password),
            database: Some(database),
            file: None,
        }
    }

    /// Create a new `SQLite` connection config
    #[must_use]
    pub const fn sqlite(file: PathBuf) -> Self {
        Self {
            engine: DatabaseType::SQLite,
            host: None,
            port: None,
            user: None,
            password: None,
            database: None,
            file: Some(file),
        }
    }

    /// Connection target without the password, safe for log output
    #[must_use]
    pub fn redacted(&self) -> String {
        match self.engine {
            DatabaseType::MySQL => format!(
                "mysql://{}@{}:{}/{}",
                self.user.as_deref().unwrap_or("?"),
                self.host.as_deref().unwrap_or("?"),
                self.port.map_or_else(|| "?".to_string(), |p| p.to_string()),
                self.database.as_deref().unwrap_or("?"),
            ),
            DatabaseType::SQLite => format!(
                "sqlite://{}",
                self.file.as_ref().map_or_else(|| "?".into(), |f| f.display().to_string())
            ),
        }
    }
}

/// A positional statement parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Query execution result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    /// Column names in result set, in store order
    pub columns: Vec<String>,

    /// Result rows; each row holds one value per entry in `columns`
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl QueryResult {
    /// Index of a column by name
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Database connection trait
///
/// A value implementing this trait owns exactly one open connection.
/// Statements are issued one at a time; nothing is pooled or retried.
pub trait Database {
    /// Engine behind this connection
    fn engine(&self) -> DatabaseType;

    /// Run a statement that returns rows
    fn query(
        &mut self,
        sql: &str,
        params: &[SqlValue],
    ) -> impl std::future::Future<Output = Result<QueryResult>> + Send;

    /// Run a statement that modifies rows, returning the affected row count
    fn execute(
        &mut self,
        sql: &str,
        params: &[SqlValue],
    ) -> impl std::future::Future<Output = Result<u64>> + Send;

    /// Close the connection
    fn close(self) -> impl std::future::Future<Output = Result<()>> + Send
    where
        Self: Sized;
}
