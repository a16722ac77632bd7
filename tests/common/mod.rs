//! Shared fixtures for handler tests: a seeded SQLite company database,
//! an engine that records every statement and an engine that always fails.

#![allow(dead_code)]

use staffdesk::engine::sqlite::SqliteEngine;
use staffdesk::{App, Database, DatabaseType, QueryResult, ScriptedPrompter, SqlValue, TrackerError};

pub const SCHEMA: &str = "
    CREATE TABLE departments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(30) NOT NULL
    );
    CREATE TABLE roles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title VARCHAR(30) NOT NULL,
        salary DECIMAL NOT NULL,
        department_id INTEGER NOT NULL REFERENCES departments(id)
    );
    CREATE TABLE employees (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name VARCHAR(30) NOT NULL,
        last_name VARCHAR(30) NOT NULL,
        role_id INTEGER NOT NULL REFERENCES roles(id),
        manager_id INTEGER REFERENCES employees(id)
    );
";

pub const SEED: &str = "
    INSERT INTO departments (name) VALUES ('Sales'), ('Engineering');
    INSERT INTO roles (title, salary, department_id) VALUES
        ('Sales Lead', 100000, 1),
        ('Software Engineer', 120000, 2);
    INSERT INTO employees (first_name, last_name, role_id, manager_id) VALUES
        ('Ada', 'Lovelace', 2, NULL),
        ('Grace', 'Hopper', 1, 1);
";

/// In-memory database with the company schema and no rows
pub fn empty_db() -> SqliteEngine {
    let mut engine = SqliteEngine::open_in_memory().expect("open in-memory database");
    engine.execute_batch(SCHEMA).expect("create schema");
    engine
}

/// In-memory database with two departments, two roles and two employees
pub fn seeded_db() -> SqliteEngine {
    let mut engine = empty_db();
    engine.execute_batch(SEED).expect("seed data");
    engine
}

pub type TestApp<D> = App<D, ScriptedPrompter, Vec<u8>>;

pub fn app_with<D: Database>(db: D, prompter: ScriptedPrompter) -> TestApp<D> {
    App::new(db, prompter, Vec::new())
}

pub fn output_of<D: Database>(app: &TestApp<D>) -> String {
    String::from_utf8(app.output().clone()).expect("utf-8 output")
}

/// Wraps a SQLite engine and records every statement it is given
pub struct RecordingEngine {
    inner: SqliteEngine,
    pub statements: Vec<String>,
}

impl RecordingEngine {
    pub fn new(inner: SqliteEngine) -> Self {
        Self { inner, statements: Vec::new() }
    }
}

impl Database for RecordingEngine {
    fn engine(&self) -> DatabaseType {
        self.inner.engine()
    }

    async fn query(&mut self, sql: &str, params: &[SqlValue]) -> staffdesk::Result<QueryResult> {
        self.statements.push(sql.to_string());
        self.inner.query(sql, params).await
    }

    async fn execute(&mut self, sql: &str, params: &[SqlValue]) -> staffdesk::Result<u64> {
        self.statements.push(sql.to_string());
        self.inner.execute(sql, params).await
    }

    async fn close(self) -> staffdesk::Result<()> {
        self.inner.close().await
    }
}

/// Every statement fails, as if the server went away
#[derive(Default)]
pub struct FailingEngine {
    pub attempts: usize,
}

impl Database for FailingEngine {
    fn engine(&self) -> DatabaseType {
        DatabaseType::MySQL
    }

    async fn query(&mut self, _sql: &str, _params: &[SqlValue]) -> staffdesk::Result<QueryResult> {
        self.attempts += 1;
        Err(TrackerError::query_failed("Lost connection to MySQL server during query"))
    }

    async fn execute(&mut self, _sql: &str, _params: &[SqlValue]) -> staffdesk::Result<u64> {
        self.attempts += 1;
        Err(TrackerError::query_failed("Lost connection to MySQL server during query"))
    }

    async fn close(self) -> staffdesk::Result<()> {
        Err(TrackerError::connection_failed("Connection already closed"))
    }
}

/// Fetch a single row by id as JSON values
pub async fn row_by_id<D: Database>(db: &mut D, table: &str, id: i64) -> Vec<serde_json::Value> {
    let result = db
        .query(&format!("SELECT * FROM {table} WHERE id = ?"), &[SqlValue::from(id)])
        .await
        .expect("row query");
    result.rows.into_iter().next().expect("row exists")
}
