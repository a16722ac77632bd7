//! Configuration
//!
//! staffdesk reads no configuration files and no command-line arguments.
//! The connection target is fixed at build time; the only runtime knob is
//! `RUST_LOG`, which [`crate::logging`] consults for the log filter.

use crate::engine::ConnectionConfig;

/// Database host
pub const DB_HOST: &str = "localhost";

/// Database port
pub const DB_PORT: u16 = 3306;

/// Database user
pub const DB_USER: &str = "root";

/// Database password
pub const DB_PASSWORD: &str = "password";

/// Database (schema) name
pub const DB_NAME: &str = "company_db";

/// Log filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Everything the binary needs to start
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Target database
    pub connection: ConnectionConfig,

    /// Fallback log filter directive
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            connection: ConnectionConfig::mysql(
                DB_HOST.to_string(),
                DB_PORT,
                DB_USER.to_string(),
                DB_PASSWORD.to_string(),
                DB_NAME.to_string(),
            ),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DatabaseType;

    #[test]
    fn test_default_targets_company_db() {
        let config = AppConfig::default();

        assert_eq!(config.connection.engine, DatabaseType::MySQL);
        assert_eq!(config.connection.host.as_deref(), Some("localhost"));
        assert_eq!(config.connection.port, Some(3306));
        assert_eq!(config.connection.user.as_deref(), Some("root"));
        assert_eq!(config.connection.database.as_deref(), Some("company_db"));
        assert_eq!(config.log_filter, "info");
    }
}
