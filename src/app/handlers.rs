//! One handler per menu action. Each handler queries fresh data, prompts,
//! issues its single statement and reports the outcome.

use std::io::Write;

use super::App;
use crate::engine::{Database, SqlValue};
use crate::error::{Result, TrackerError};
use crate::model::{labels, manager_choices, manager_labels, Choice};
use crate::prompt::Prompter;
use crate::queries;
use crate::render::render_table;
use crate::salary::parse_salary;

impl<D, P, W> App<D, P, W>
where
    D: Database,
    P: Prompter,
    W: Write,
{
    pub(super) async fn view_departments(&mut self) -> Result<()> {
        self.view_table(queries::VIEW_DEPARTMENTS).await
    }

    pub(super) async fn view_roles(&mut self) -> Result<()> {
        self.view_table(queries::VIEW_ROLES).await
    }

    pub(super) async fn view_employees(&mut self) -> Result<()> {
        self.view_table(queries::VIEW_EMPLOYEES).await
    }

    pub(super) async fn add_department(&mut self) -> Result<()> {
        let name = self.prompter.input("Enter the name of the department")?;

        self.db.execute(queries::INSERT_DEPARTMENT, &[SqlValue::from(name)]).await?;

        writeln!(self.out, "Department added successfully!")?;
        Ok(())
    }

    pub(super) async fn add_role(&mut self) -> Result<()> {
        let departments = self.db.query(queries::DEPARTMENT_CHOICES, &[]).await?;
        let departments = Choice::from_rows(&departments, "name")?;

        let title = self.prompter.input("Enter the title of the role")?;
        let salary = self.prompt_salary()?;
        let department_id = self.choose("Select the department for the role", &departments)?;

        self.db
            .execute(
                queries::INSERT_ROLE,
                &[SqlValue::from(title), SqlValue::from(salary), SqlValue::from(department_id)],
            )
            .await?;

        writeln!(self.out, "Role added successfully!")?;
        Ok(())
    }

    pub(super) async fn add_employee(&mut self) -> Result<()> {
        let roles = self.db.query(queries::ROLE_CHOICES, &[]).await?;
        let roles = Choice::from_rows(&roles, "title")?;
        let employees = self.db.query(queries::EMPLOYEE_CHOICES, &[]).await?;
        let employees = Choice::from_employee_rows(&employees)?;

        let first_name = self.prompter.input("Enter the first name of the employee")?;
        let last_name = self.prompter.input("Enter the last name of the employee")?;
        let role_id = self.choose("Select the role for the employee", &roles)?;

        let managers = manager_choices(&employees);
        let picked = self
            .prompter
            .select("Select the manager for the employee", &manager_labels(&managers))?;
        let manager_id = managers
            .get(picked)
            .ok_or_else(|| {
                TrackerError::invalid_input(format!("Manager selection {picked} is out of range"))
            })?
            .map(|m| m.id);

        self.db
            .execute(
                queries::INSERT_EMPLOYEE,
                &[
                    SqlValue::from(first_name),
                    SqlValue::from(last_name),
                    SqlValue::from(role_id),
                    SqlValue::from(manager_id),
                ],
            )
            .await?;

        writeln!(self.out, "Employee added successfully!")?;
        Ok(())
    }

    pub(super) async fn update_employee_role(&mut self) -> Result<()> {
        let employees = self.db.query(queries::EMPLOYEE_CHOICES, &[]).await?;
        let employees = Choice::from_employee_rows(&employees)?;
        let roles = self.db.query(queries::ROLE_CHOICES, &[]).await?;
        let roles = Choice::from_rows(&roles, "title")?;

        let employee_id = self.choose("Select the employee to update", &employees)?;
        let role_id = self.choose("Select the new role for the employee", &roles)?;

        self.db
            .execute(
                queries::UPDATE_EMPLOYEE_ROLE,
                &[SqlValue::from(role_id), SqlValue::from(employee_id)],
            )
            .await?;

        writeln!(self.out, "Employee role updated successfully!")?;
        Ok(())
    }

    async fn view_table(&mut self, sql: &str) -> Result<()> {
        let result = self.db.query(sql, &[]).await?;
        write!(self.out, "{}", render_table(&result))?;
        Ok(())
    }

    /// Ask until the answer parses as a salary
    fn prompt_salary(&mut self) -> Result<f64> {
        loop {
            let raw = self.prompter.input("Enter the salary for the role")?;
            match parse_salary(&raw) {
                Ok(salary) => return Ok(salary),
                Err(TrackerError::InvalidInput(reason)) => writeln!(self.out, "{reason}")?,
                Err(err) => return Err(err),
            }
        }
    }

    /// Single-select over a live list; returns the chosen id
    fn choose(&mut self, message: &str, choices: &[Choice]) -> Result<i64> {
        if choices.is_empty() {
            return Err(TrackerError::invalid_input(format!("Nothing to choose from: {message}")));
        }

        let picked = self.prompter.select(message, &labels(choices))?;
        choices.get(picked).map(|c| c.id).ok_or_else(|| {
            TrackerError::invalid_input(format!("Selection {picked} is out of range"))
        })
    }
}
