//! Select-list entries built from live query results.
//!
//! Choices are rebuilt from the store every time a handler needs them and
//! are dropped when the handler returns.

use crate::engine::QueryResult;
use crate::error::{Result, TrackerError};
use crate::render::format_cell;

/// Label shown for "no manager" in the manager list
pub const NO_MANAGER_LABEL: &str = "None";

/// One selectable row: what the operator sees and the id that gets stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub id: i64,
}

impl Choice {
    /// Build choices from a result with an `id` column and a label column.
    ///
    /// Used for departments (`name`) and roles (`title`).
    pub fn from_rows(result: &QueryResult, label_column: &str) -> Result<Vec<Self>> {
        let id_idx = required_column(result, "id")?;
        let label_idx = required_column(result, label_column)?;

        result
            .rows
            .iter()
            .map(|row| Ok(Self { id: id_at(row, id_idx)?, label: text_at(row, label_idx) }))
            .collect()
    }

    /// Build employee choices labelled `first last`
    pub fn from_employee_rows(result: &QueryResult) -> Result<Vec<Self>> {
        let id_idx = required_column(result, "id")?;
        let first_idx = required_column(result, "first_name")?;
        let last_idx = required_column(result, "last_name")?;

        result
            .rows
            .iter()
            .map(|row| {
                Ok(Self {
                    id: id_at(row, id_idx)?,
                    label: format!("{} {}", text_at(row, first_idx), text_at(row, last_idx)),
                })
            })
            .collect()
    }
}

/// Manager list: `None` first, then every employee.
///
/// Index 0 maps to a null manager reference.
#[must_use]
pub fn manager_choices(employees: &[Choice]) -> Vec<Option<&Choice>> {
    std::iter::once(None).chain(employees.iter().map(Some)).collect()
}

/// Labels for a manager list built by [`manager_choices`]
#[must_use]
pub fn manager_labels(managers: &[Option<&Choice>]) -> Vec<String> {
    managers
        .iter()
        .map(|m| m.map_or_else(|| NO_MANAGER_LABEL.to_string(), |c| c.label.clone()))
        .collect()
}

/// Labels of a choice list, in order
#[must_use]
pub fn labels(choices: &[Choice]) -> Vec<String> {
    choices.iter().map(|c| c.label.clone()).collect()
}

fn required_column(result: &QueryResult, name: &str) -> Result<usize> {
    result.column_index(name).ok_or_else(|| {
        TrackerError::invalid_input(format!("Result set is missing column '{name}'"))
    })
}

fn id_at(row: &[serde_json::Value], idx: usize) -> Result<i64> {
    let value = row.get(idx).unwrap_or(&serde_json::Value::Null);
    let id = match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    };
    id.ok_or_else(|| TrackerError::invalid_input(format!("Expected an integer id, got {value}")))
}

fn text_at(row: &[serde_json::Value], idx: usize) -> String {
    row.get(idx).map(format_cell).unwrap_or_default()
}
