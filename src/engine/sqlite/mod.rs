//! `SQLite` Database Engine Implementation
//!
//! This module implements the [`Database`] trait for `SQLite` databases.
//! It backs the handler test-suite and lets the menu run against a local file
//! without a MySQL server.
//!
//! # Implementation Notes
//! - Uses `rusqlite` (synchronous driver, no async needed)
//! - File-based connections (`/path/to/db.sqlite`) and in-memory connections (`:memory:`)
//! - Foreign keys are switched on at open time so references are enforced like InnoDB
//! - BLOB data is Base64-encoded for display safety

use rusqlite::{params_from_iter, Connection, OpenFlags, Row};

use crate::engine::{ConnectionConfig, Database, DatabaseType, QueryResult, SqlValue};
use crate::error::{Result, TrackerError};

/// `SQLite` connection owned by the application
pub struct SqliteEngine {
    conn: Connection,
}

impl SqliteEngine {
    /// Open (or create) the database file named by the config
    pub fn connect(config: &ConnectionConfig) -> Result<Self> {
        // Validate config is for SQLite
        if config.engine != DatabaseType::SQLite {
            return Err(TrackerError::invalid_input(format!(
                "Expected SQLite engine, got {}",
                config.engine
            )));
        }

        let file_path = config
            .file
            .as_ref()
            .ok_or_else(|| TrackerError::invalid_input("SQLite requires 'file' parameter"))?;

        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE;
        let conn = Connection::open_with_flags(file_path, flags).map_err(|e| {
            TrackerError::connection_failed(format!("Failed to open SQLite database: {e}"))
        })?;

        Self::from_connection(conn)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| {
            TrackerError::connection_failed(format!("Failed to open SQLite database: {e}"))
        })?;

        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", true).map_err(|e| {
            TrackerError::engine_error("sqlite", format!("Failed to enable foreign keys: {e}"))
        })?;

        Ok(Self { conn })
    }

    /// Run a batch of `;`-separated statements (schema setup, seeding)
    pub fn execute_batch(&mut self, sql: &str) -> Result<()> {
        self.conn
            .execute_batch(sql)
            .map_err(|e| TrackerError::query_failed(format!("Failed to execute batch: {e}")))
    }
}

impl Database for SqliteEngine {
    fn engine(&self) -> DatabaseType {
        DatabaseType::SQLite
    }

    async fn query(&mut self, sql: &str, params: &[SqlValue]) -> Result<QueryResult> {
        tracing::debug!(sql, params = params.len(), "sqlite query");

        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| TrackerError::query_failed(format!("Failed to prepare query: {e}")))?;

        let columns: Vec<String> = stmt.column_names().iter().map(|s| (*s).to_string()).collect();
        let column_count = columns.len();

        let mut rows = stmt
            .query(params_from_iter(params.iter().map(to_sqlite_value)))
            .map_err(|e| TrackerError::query_failed(format!("Failed to execute query: {e}")))?;

        let mut rows_data = Vec::new();
        while let Some(row) = rows
            .next()
            .map_err(|e| TrackerError::query_failed(format!("Failed to fetch row: {e}")))?
        {
            rows_data.push(row_to_json(row, column_count)?);
        }

        Ok(QueryResult { columns, rows: rows_data })
    }

    async fn execute(&mut self, sql: &str, params: &[SqlValue]) -> Result<u64> {
        tracing::debug!(sql, params = params.len(), "sqlite execute");

        let changed = self
            .conn
            .execute(sql, params_from_iter(params.iter().map(to_sqlite_value)))
            .map_err(|e| TrackerError::query_failed(format!("Failed to execute statement: {e}")))?;

        Ok(changed as u64)
    }

    async fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| {
            TrackerError::connection_failed(format!("Failed to close SQLite database: {e}"))
        })
    }
}

fn to_sqlite_value(value: &SqlValue) -> rusqlite::types::Value {
    use rusqlite::types::Value;

    match value {
        SqlValue::Null => Value::Null,
        SqlValue::Int(i) => Value::Integer(*i),
        SqlValue::Float(f) => Value::Real(*f),
        SqlValue::Text(s) => Value::Text(s.clone()),
    }
}

/// Convert a `SQLite` row to a vector of JSON values in column order
fn row_to_json(row: &Row, column_count: usize) -> Result<Vec<serde_json::Value>> {
    (0..column_count)
        .map(|idx| {
            sqlite_value_to_json(row, idx).map_err(|e| {
                TrackerError::query_failed(format!("Failed to read column {idx}: {e}"))
            })
        })
        .collect()
}

/// Convert `SQLite` value to JSON value
fn sqlite_value_to_json(
    row: &Row,
    idx: usize,
) -> std::result::Result<serde_json::Value, rusqlite::Error> {
    use rusqlite::types::ValueRef;

    let value_ref = row.get_ref(idx)?;

    Ok(match value_ref {
        ValueRef::Null => serde_json::Value::Null,
        ValueRef::Integer(i) => serde_json::Value::Number(i.into()),
        ValueRef::Real(f) => serde_json::Number::from_f64(f)
            .map_or(serde_json::Value::Null, serde_json::Value::Number), // NaN/Infinity as null
        ValueRef::Text(s) => {
            let text = std::str::from_utf8(s).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    idx,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?;
            serde_json::Value::String(text.to_string())
        }
        ValueRef::Blob(b) => {
            use base64::Engine;
            serde_json::Value::String(base64::engine::general_purpose::STANDARD.encode(b))
        }
    })
}
