//! staffdesk CLI entry point
//!
//! Connects to the company database, runs the menu loop and exits with
//! status 0 when the operator leaves, or 1 on a fatal failure.
//! Tables and confirmations go to stdout. Logs go to stderr.

use staffdesk::engine::mysql::MySqlEngine;
use staffdesk::{App, AppConfig, TerminalPrompter};

#[tokio::main]
async fn main() {
    let config = AppConfig::default();

    if let Err(err) = staffdesk::logging::init_tracing(&config.log_filter) {
        eprintln!("Warning: could not initialise logging: {err}");
    }

    let engine = match MySqlEngine::connect(&config.connection).await {
        Ok(engine) => engine,
        Err(err) => {
            tracing::error!(
                db = %config.connection.redacted(),
                code = err.error_code(),
                "Error connecting to MySQL: {err}"
            );
            std::process::exit(1);
        }
    };

    tracing::info!(db = %config.connection.redacted(), "connected");
    println!("Connected to MySQL database");

    let mut app = App::new(engine, TerminalPrompter, std::io::stdout());
    let reason = app.run().await;
    app.shutdown().await;

    std::process::exit(reason.exit_code());
}
