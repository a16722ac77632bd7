//! staffdesk - interactive menu over a departments/roles/employees database
//!
//! staffdesk opens one database connection, shows a fixed menu of seven
//! actions and runs the chosen action's statement, printing result tables or
//! one-line confirmations until the operator leaves.
//!
//! # Module Organization
//! - [`error`] - Error type and result alias
//! - [`engine`] - Database connection trait and engine implementations
//! - [`config`] - Hardcoded connection target and log defaults
//! - [`logging`] - Tracing subscriber setup
//! - [`menu`] - Menu actions, labels and failure policies
//! - [`app`] - Application context, menu loop and handlers
//! - [`prompt`] - Operator prompts (terminal and scripted)
//! - [`model`] - Select-list choices built from live queries
//! - [`queries`] - The fixed SQL statements
//! - [`render`] - Result tables
//! - [`salary`] - Salary input parsing

pub mod app;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod menu;
pub mod model;
pub mod prompt;
pub mod queries;
pub mod render;
pub mod salary;

pub use app::{App, ExitReason, Flow};
pub use config::AppConfig;
pub use engine::{ConnectionConfig, Database, DatabaseType, QueryResult, SqlValue};
pub use error::{Result, TrackerError};
pub use menu::{FailurePolicy, MenuAction};
pub use prompt::{Answer, Prompter, ScriptedPrompter, TerminalPrompter};
