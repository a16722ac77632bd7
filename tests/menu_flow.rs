//! Menu Loop Tests
//!
//! These tests drive the menu loop end to end with scripted answers and check:
//! - Each menu label reaches exactly one handler
//! - The exit path is taken only for labels outside the menu
//! - Recoverable failures return to the menu
//! - Fatal failures end the loop with exit status 1

#![cfg(feature = "sqlite")]

mod common;

use common::{app_with, output_of, seeded_db, FailingEngine, RecordingEngine};
use pretty_assertions::assert_eq;
use staffdesk::menu::MENU_PROMPT;
use staffdesk::queries;
use staffdesk::{Answer, ExitReason, Flow, MenuAction, ScriptedPrompter};

// ============================================================================
// Dispatch
// ============================================================================

fn script_for(action: MenuAction) -> Vec<Answer> {
    match action {
        MenuAction::ViewDepartments | MenuAction::ViewRoles | MenuAction::ViewEmployees => {
            Vec::new()
        }
        MenuAction::AddDepartment => vec![Answer::text("Legal")],
        MenuAction::AddRole => {
            vec![Answer::text("Clerk"), Answer::text("50000"), Answer::Select(0)]
        }
        MenuAction::AddEmployee => vec![
            Answer::text("Alan"),
            Answer::text("Turing"),
            Answer::Select(0),
            Answer::Select(0),
        ],
        MenuAction::UpdateEmployeeRole => vec![Answer::Select(0), Answer::Select(1)],
    }
}

fn expected_statements(action: MenuAction) -> Vec<&'static str> {
    match action {
        MenuAction::ViewDepartments => vec![queries::VIEW_DEPARTMENTS],
        MenuAction::ViewRoles => vec![queries::VIEW_ROLES],
        MenuAction::ViewEmployees => vec![queries::VIEW_EMPLOYEES],
        MenuAction::AddDepartment => vec![queries::INSERT_DEPARTMENT],
        MenuAction::AddRole => vec![queries::DEPARTMENT_CHOICES, queries::INSERT_ROLE],
        MenuAction::AddEmployee => {
            vec![queries::ROLE_CHOICES, queries::EMPLOYEE_CHOICES, queries::INSERT_EMPLOYEE]
        }
        MenuAction::UpdateEmployeeRole => {
            vec![queries::EMPLOYEE_CHOICES, queries::ROLE_CHOICES, queries::UPDATE_EMPLOYEE_ROLE]
        }
    }
}

#[tokio::test]
async fn test_each_label_runs_exactly_its_handler() {
    for action in MenuAction::ALL {
        let prompter = ScriptedPrompter::new(script_for(action));
        let mut app = app_with(RecordingEngine::new(seeded_db()), prompter);

        let flow = app.dispatch_label(action.label()).await;
        assert!(matches!(flow, Flow::Continue), "{action} should return to the menu");

        assert_eq!(app.database_mut().statements, expected_statements(action), "{action}");
        assert_eq!(app.prompter().remaining(), 0, "{action} left answers unused");
    }
}

#[tokio::test]
async fn test_menu_offers_seven_actions() {
    let prompter = ScriptedPrompter::new([Answer::Select(0)]);
    let mut app = app_with(seeded_db(), prompter);

    let flow = app.step().await;
    assert!(matches!(flow, Flow::Continue));

    let menu = &app.prompter().asked()[0];
    assert_eq!(menu.message, MENU_PROMPT);
    assert_eq!(
        menu.items,
        vec![
            "View all departments",
            "View all roles",
            "View all employees",
            "Add a department",
            "Add a role",
            "Add an employee",
            "Update an employee role",
        ]
    );
}

// ============================================================================
// Exit path
// ============================================================================

#[tokio::test]
async fn test_invalid_choice_exits_cleanly() {
    let mut app = app_with(RecordingEngine::new(seeded_db()), ScriptedPrompter::default());

    let flow = app.dispatch_label("Quit").await;
    match flow {
        Flow::Exit(reason) => assert_eq!(reason.exit_code(), 0),
        Flow::Continue => panic!("unknown label must end the loop"),
    }

    assert_eq!(output_of(&app), "Invalid choice\n");
    assert!(app.database_mut().statements.is_empty());
}

#[tokio::test]
async fn test_run_loops_until_exit() {
    let prompter = ScriptedPrompter::new([
        Answer::Select(0),
        Answer::Select(3),
        Answer::text("Legal"),
        Answer::Select(99),
    ]);
    let mut app = app_with(seeded_db(), prompter);

    let reason = app.run().await;
    assert!(matches!(reason, ExitReason::UserExit));

    let output = output_of(&app);
    assert!(output.contains("│ Engineering │"));
    assert!(output.contains("Department added successfully!\n"));
    assert!(output.ends_with("Invalid choice\n"));

    let out = app.shutdown().await;
    let out = String::from_utf8(out).unwrap();
    assert!(out.ends_with("Invalid choice\nSQLite connection closed.\n"));
}

#[tokio::test]
async fn test_menu_prompt_failure_is_fatal() {
    let mut app = app_with(seeded_db(), ScriptedPrompter::default());

    let reason = app.run().await;
    assert_eq!(reason.exit_code(), 1);
    match reason {
        ExitReason::Fatal(err) => assert_eq!(err.error_code(), "PROMPT_FAILED"),
        ExitReason::UserExit => panic!("expected a fatal exit"),
    }
}

// ============================================================================
// Failure policies
// ============================================================================

#[tokio::test]
async fn test_recoverable_failures_return_to_menu() {
    for action in [
        MenuAction::ViewDepartments,
        MenuAction::ViewRoles,
        MenuAction::ViewEmployees,
        MenuAction::AddEmployee,
        MenuAction::UpdateEmployeeRole,
    ] {
        let mut app = app_with(FailingEngine::default(), ScriptedPrompter::default());

        let flow = app.dispatch(action).await;
        assert!(matches!(flow, Flow::Continue), "{action} failure should be recoverable");
        assert_eq!(app.database_mut().attempts, 1, "{action} must not retry");
        assert!(output_of(&app).is_empty());
    }
}

#[tokio::test]
async fn test_add_department_failure_is_fatal() {
    let prompter = ScriptedPrompter::new([Answer::text("Legal")]);
    let mut app = app_with(FailingEngine::default(), prompter);

    match app.dispatch(MenuAction::AddDepartment).await {
        Flow::Exit(reason) => {
            assert_eq!(reason.exit_code(), 1);
            assert!(matches!(reason, ExitReason::Fatal(ref e) if e.error_code() == "QUERY_FAILED"));
        }
        Flow::Continue => panic!("add department failure must be fatal"),
    }
    assert!(!output_of(&app).contains("Department added successfully!"));
}

#[tokio::test]
async fn test_add_role_failure_is_fatal() {
    let mut app = app_with(FailingEngine::default(), ScriptedPrompter::default());

    match app.dispatch(MenuAction::AddRole).await {
        Flow::Exit(reason) => assert_eq!(reason.exit_code(), 1),
        Flow::Continue => panic!("add role failure must be fatal"),
    }
}

#[tokio::test]
async fn test_run_survives_recoverable_failure() {
    let prompter = ScriptedPrompter::new([Answer::Select(1), Answer::Select(6), Answer::Select(7)]);
    let mut app = app_with(FailingEngine::default(), prompter);

    let reason = app.run().await;
    assert_eq!(reason.exit_code(), 0);
    assert_eq!(output_of(&app), "Invalid choice\n");
}

#[tokio::test]
async fn test_run_stops_on_fatal_failure() {
    let prompter =
        ScriptedPrompter::new([Answer::Select(3), Answer::text("Legal"), Answer::Select(0)]);
    let mut app = app_with(FailingEngine::default(), prompter);

    let reason = app.run().await;
    assert_eq!(reason.exit_code(), 1);
    // The menu is not shown again after the fatal failure
    assert_eq!(app.prompter().remaining(), 1);
}

#[tokio::test]
async fn test_shutdown_swallows_close_failure() {
    let app = app_with(FailingEngine::default(), ScriptedPrompter::default());

    let out = app.shutdown().await;
    assert!(out.is_empty());
}
