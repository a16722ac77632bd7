//! Application context and menu loop
//!
//! [`App`] owns the single database connection, the prompt source and the
//! output stream. Handlers borrow it for one operation at a time; the menu
//! loop is a plain `loop` that reads a choice, dispatches it and repeats.

use std::io::Write;

use crate::engine::Database;
use crate::error::TrackerError;
use crate::menu::{menu_labels, FailurePolicy, MenuAction, MENU_PROMPT};
use crate::prompt::Prompter;

mod handlers;

/// What the loop does after one dispatch
#[derive(Debug)]
pub enum Flow {
    /// Show the menu again
    Continue,
    /// Leave the loop
    Exit(ExitReason),
}

/// Why the menu loop ended
#[derive(Debug)]
pub enum ExitReason {
    /// A choice outside the menu was resolved
    UserExit,
    /// A fatal failure in the menu prompt or a fatal handler
    Fatal(TrackerError),
}

impl ExitReason {
    /// Process exit status for this reason
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::UserExit => 0,
            Self::Fatal(_) => 1,
        }
    }
}

/// Application context shared by every handler
pub struct App<D, P, W> {
    db: D,
    prompter: P,
    out: W,
}

impl<D, P, W> App<D, P, W>
where
    D: Database,
    P: Prompter,
    W: Write,
{
    pub fn new(db: D, prompter: P, out: W) -> Self {
        Self { db, prompter, out }
    }

    /// Run the menu until the operator exits or a fatal failure occurs
    pub async fn run(&mut self) -> ExitReason {
        loop {
            if let Flow::Exit(reason) = self.step().await {
                return reason;
            }
        }
    }

    /// Show the menu once and dispatch the answer
    pub async fn step(&mut self) -> Flow {
        let labels = menu_labels();
        let choice = match self.prompter.select(MENU_PROMPT, &labels) {
            Ok(idx) => idx,
            Err(err) => {
                tracing::error!(code = err.error_code(), "menu prompt failed: {err}");
                return Flow::Exit(ExitReason::Fatal(err));
            }
        };

        // Out-of-range indexes fall through to the exit path
        let label = labels.get(choice).map_or("", String::as_str);
        self.dispatch_label(label).await
    }

    /// Dispatch a resolved menu label.
    ///
    /// Labels that name no action print `Invalid choice` and end the loop.
    pub async fn dispatch_label(&mut self, label: &str) -> Flow {
        match MenuAction::from_label(label) {
            Some(action) => self.dispatch(action).await,
            None => {
                if let Err(err) = writeln!(self.out, "Invalid choice") {
                    tracing::warn!("could not write to output: {err}");
                }
                Flow::Exit(ExitReason::UserExit)
            }
        }
    }

    /// Run the handler for one action and apply its failure policy
    pub async fn dispatch(&mut self, action: MenuAction) -> Flow {
        tracing::debug!(handler = action.handler_name(), "dispatching");

        let result = match action {
            MenuAction::ViewDepartments => self.view_departments().await,
            MenuAction::ViewRoles => self.view_roles().await,
            MenuAction::ViewEmployees => self.view_employees().await,
            MenuAction::AddDepartment => self.add_department().await,
            MenuAction::AddRole => self.add_role().await,
            MenuAction::AddEmployee => self.add_employee().await,
            MenuAction::UpdateEmployeeRole => self.update_employee_role().await,
        };

        let Err(err) = result else {
            return Flow::Continue;
        };

        tracing::error!(
            handler = action.handler_name(),
            code = err.error_code(),
            "{action} failed: {err}"
        );

        match action.failure_policy() {
            FailurePolicy::Recoverable => Flow::Continue,
            FailurePolicy::Fatal => Flow::Exit(ExitReason::Fatal(err)),
        }
    }

    /// Close the connection. Failures are logged, never raised.
    pub async fn shutdown(self) -> W {
        let Self { db, mut out, .. } = self;
        let engine = db.engine();

        match db.close().await {
            Ok(()) => {
                tracing::info!(engine = %engine, "connection closed");
                if let Err(err) = writeln!(out, "{} connection closed.", engine.display_name()) {
                    tracing::warn!("could not write to output: {err}");
                }
            }
            Err(err) => {
                tracing::error!(
                    code = err.error_code(),
                    "error closing {} connection: {err}",
                    engine.display_name()
                );
            }
        }

        out
    }

    pub fn database_mut(&mut self) -> &mut D {
        &mut self.db
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn output(&self) -> &W {
        &self.out
    }
}
