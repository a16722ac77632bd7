//! The main menu: seven fixed actions and what a failure in each one means.

/// Prompt shown above the action list
pub const MENU_PROMPT: &str = "What would you like to do?";

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
}

/// What happens to the process when an action's handler fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log and return to the menu
    Recoverable,
    /// Log and exit with status 1
    Fatal,
}

impl MenuAction {
    /// All actions in menu order
    pub const ALL: [Self; 7] = [
        Self::ViewDepartments,
        Self::ViewRoles,
        Self::ViewEmployees,
        Self::AddDepartment,
        Self::AddRole,
        Self::AddEmployee,
        Self::UpdateEmployeeRole,
    ];

    /// Menu label, exactly as shown to the operator
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ViewDepartments => "View all departments",
            Self::ViewRoles => "View all roles",
            Self::ViewEmployees => "View all employees",
            Self::AddDepartment => "Add a department",
            Self::AddRole => "Add a role",
            Self::AddEmployee => "Add an employee",
            Self::UpdateEmployeeRole => "Update an employee role",
        }
    }

    /// Resolve a label back to its action; labels are case-sensitive
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.label() == label)
    }

    /// Handler name used in log events
    #[must_use]
    pub const fn handler_name(&self) -> &'static str {
        match self {
            Self::ViewDepartments => "view_departments",
            Self::ViewRoles => "view_roles",
            Self::ViewEmployees => "view_employees",
            Self::AddDepartment => "add_department",
            Self::AddRole => "add_role",
            Self::AddEmployee => "add_employee",
            Self::UpdateEmployeeRole => "update_employee_role",
        }
    }

    /// Failure handling for this action.
    ///
    /// Adding a department or a role terminates the process on failure;
    /// every other action returns to the menu.
    #[must_use]
    pub const fn failure_policy(&self) -> FailurePolicy {
        match self {
            Self::AddDepartment | Self::AddRole => FailurePolicy::Fatal,
            Self::ViewDepartments
            | Self::ViewRoles
            | Self::ViewEmployees
            | Self::AddEmployee
            | Self::UpdateEmployeeRole => FailurePolicy::Recoverable,
        }
    }
}

impl std::fmt::Display for MenuAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Menu labels in display order
#[must_use]
pub fn menu_labels() -> Vec<String> {
    MenuAction::ALL.iter().map(|a| a.label().to_string()).collect()
}
