//! Salary input parsing
//!
//! Operators type salaries the way they read them (`$60,000`, `85,500.50`).
//! Every character other than an ASCII digit or `.` is discarded and the rest
//! is parsed as a decimal number. Input that leaves nothing parseable, carries
//! a minus sign ahead of its digits, or overflows to infinity is rejected
//! instead of being coerced to a placeholder value.

use crate::error::{Result, TrackerError};

fn invalid(input: &str) -> TrackerError {
    TrackerError::invalid_input(format!("'{}' is not a valid salary", input.trim()))
}

/// Parse operator-entered salary text into a number.
pub fn parse_salary(input: &str) -> Result<f64> {
    let first_digit = input.find(|c: char| c.is_ascii_digit()).ok_or_else(|| invalid(input))?;
    if input[..first_digit].contains('-') {
        return Err(invalid(input));
    }

    let digits: String = input.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();

    match digits.parse::<f64>() {
        Ok(salary) if salary.is_finite() => Ok(salary),
        _ => Err(invalid(input)),
    }
}
