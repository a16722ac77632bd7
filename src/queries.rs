//! The fixed statements issued by the menu handlers.
//!
//! All parameters are positional `?` placeholders, accepted by both the
//! MySQL and SQLite engines.

pub const VIEW_DEPARTMENTS: &str = "SELECT * FROM departments";
pub const VIEW_ROLES: &str = "SELECT * FROM roles";
pub const VIEW_EMPLOYEES: &str = "SELECT * FROM employees";

pub const DEPARTMENT_CHOICES: &str = "SELECT id, name FROM departments";
pub const ROLE_CHOICES: &str = "SELECT id, title FROM roles";
pub const EMPLOYEE_CHOICES: &str = "SELECT id, first_name, last_name FROM employees";

pub const INSERT_DEPARTMENT: &str = "INSERT INTO departments (name) VALUES (?)";
pub const INSERT_ROLE: &str = "INSERT INTO roles (title, salary, department_id) VALUES (?, ?, ?)";
pub const INSERT_EMPLOYEE: &str =
    "INSERT INTO employees (first_name, last_name, role_id, manager_id) VALUES (?, ?, ?, ?)";

pub const UPDATE_EMPLOYEE_ROLE: &str = "UPDATE employees SET role_id = ? WHERE id = ?";
