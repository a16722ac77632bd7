//! MySQL Database Engine Implementation
//!
//! This module implements the [`Database`] trait for MySQL databases (including MariaDB).
//!
//! # Implementation Notes
//! - Uses `mysql_async` (async driver, requires tokio runtime)
//! - One connection is opened by [`MySqlEngine::connect`] and kept until [`Database::close`]
//! - All statements go through the binary protocol with positional `?` parameters
//! - DECIMAL columns arrive as text and are rendered as such
//! - Non-UTF-8 bytes are Base64-encoded for display safety

use mysql_async::{prelude::*, Conn, OptsBuilder, Params, Row, Value};

use crate::engine::{ConnectionConfig, Database, DatabaseType, QueryResult, SqlValue};
use crate::error::{Result, TrackerError};

/// MySQL connection owned by the application
pub struct MySqlEngine {
    conn: Conn,
}

impl MySqlEngine {
    /// Open a connection using the provided config
    pub async fn connect(config: &ConnectionConfig) -> Result<Self> {
        // Validate config is for MySQL
        if config.engine != DatabaseType::MySQL {
            return Err(TrackerError::invalid_input(format!(
                "Expected MySQL engine, got {}",
                config.engine
            )));
        }

        let opts = build_mysql_opts(config)?;

        let conn = Conn::new(opts).await.map_err(|e| {
            TrackerError::connection_failed(format!("Failed to connect to MySQL: {e}"))
        })?;

        tracing::debug!(db = %config.redacted(), "mysql connection established");

        Ok(Self { conn })
    }
}

impl Database for MySqlEngine {
    fn engine(&self) -> DatabaseType {
        DatabaseType::MySQL
    }

    async fn query(&mut self, sql: &str, params: &[SqlValue]) -> Result<QueryResult> {
        tracing::debug!(sql, params = params.len(), "mysql query");

        let mut result = self
            .conn
            .exec_iter(sql, to_params(params))
            .await
            .map_err(|e| TrackerError::query_failed(format!("Failed to execute query: {e}")))?;

        // Column metadata is available even when the result set is empty
        let columns: Vec<String> =
            result.columns_ref().iter().map(|col| col.name_str().to_string()).collect();

        let rows: Vec<Row> = result
            .collect()
            .await
            .map_err(|e| TrackerError::query_failed(format!("Failed to fetch rows: {e}")))?;

        let mut rows_data = Vec::with_capacity(rows.len());
        for row in &rows {
            rows_data.push(row_to_json(row)?);
        }

        Ok(QueryResult { columns, rows: rows_data })
    }

    async fn execute(&mut self, sql: &str, params: &[SqlValue]) -> Result<u64> {
        tracing::debug!(sql, params = params.len(), "mysql execute");

        self.conn
            .exec_drop(sql, to_params(params))
            .await
            .map_err(|e| TrackerError::query_failed(format!("Failed to execute statement: {e}")))?;

        Ok(self.conn.affected_rows())
    }

    async fn close(self) -> Result<()> {
        self.conn.disconnect().await.map_err(|e| {
            TrackerError::connection_failed(format!("Failed to disconnect from MySQL: {e}"))
        })
    }
}

/// Build MySQL connection options from ConnectionConfig
fn build_mysql_opts(config: &ConnectionConfig) -> Result<OptsBuilder> {
    let host = config
        .host
        .as_ref()
        .ok_or_else(|| TrackerError::invalid_input("MySQL requires 'host' parameter"))?;

    let port = config
        .port
        .ok_or_else(|| TrackerError::invalid_input("MySQL requires 'port' parameter"))?;

    let user = config
        .user
        .as_ref()
        .ok_or_else(|| TrackerError::invalid_input("MySQL requires 'user' parameter"))?;

    let password = config
        .password
        .as_ref()
        .ok_or_else(|| TrackerError::invalid_input("MySQL requires 'password' parameter"))?;

    let database = config
        .database
        .as_ref()
        .ok_or_else(|| TrackerError::invalid_input("MySQL requires 'database' parameter"))?;

    let opts = OptsBuilder::default()
        .ip_or_hostname(host)
        .tcp_port(port)
        .user(Some(user))
        .pass(Some(password))
        .db_name(Some(database));

    Ok(opts)
}

/// Convert positional parameters to the driver's representation
fn to_params(params: &[SqlValue]) -> Params {
    if params.is_empty() {
        return Params::Empty;
    }

    Params::Positional(params.iter().map(to_mysql_value).collect())
}

fn to_mysql_value(value: &SqlValue) -> Value {
    match value {
        SqlValue::Null => Value::NULL,
        SqlValue::Int(i) => Value::Int(*i),
        SqlValue::Float(f) => Value::Double(*f),
        SqlValue::Text(s) => Value::Bytes(s.as_bytes().to_vec()),
    }
}

/// Convert a MySQL row to a vector of JSON values in column order
fn row_to_json(row: &Row) -> Result<Vec<serde_json::Value>> {
    (0..row.len()).map(|idx| mysql_value_to_json(row, idx)).collect()
}

/// Convert MySQL value to JSON value
fn mysql_value_to_json(row: &Row, idx: usize) -> Result<serde_json::Value> {
    let value = row.as_ref(idx).ok_or_else(|| {
        TrackerError::engine_error("mysql", format!("Failed to get value at index {idx}"))
    })?;

    Ok(value_to_json(value))
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::NULL => serde_json::Value::Null,

        Value::Bytes(bytes) => {
            if let Ok(s) = std::str::from_utf8(bytes) {
                serde_json::Value::String(s.to_string())
            } else {
                use base64::Engine;
                let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
                serde_json::Value::String(encoded)
            }
        }

        Value::Int(i) => serde_json::Value::Number((*i).into()),

        Value::UInt(u) => serde_json::json!(*u),

        // NaN/Infinity become null
        Value::Float(f) => serde_json::Number::from_f64(f64::from(*f))
            .map_or(serde_json::Value::Null, serde_json::Value::Number),

        Value::Double(d) => serde_json::Number::from_f64(*d)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),

        Value::Date(year, month, day, hour, minute, second, micro) => {
            serde_json::Value::String(format!(
                "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}.{micro:06}"
            ))
        }

        Value::Time(is_negative, days, hours, minutes, seconds, microseconds) => {
            let sign = if *is_negative { "-" } else { "" };
            let total_hours = days * 24 + u32::from(*hours);
            serde_json::Value::String(format!(
                "{sign}{total_hours}:{minutes:02}:{seconds:02}.{microseconds:06}"
            ))
        }
    }
}
