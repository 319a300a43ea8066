//! Application configuration management.

use serde::Deserialize;
use uuid::Uuid;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Ledger configuration.
    #[serde(default)]
    pub ledger: LedgerConfig,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Ledger configuration.
///
/// When the resource layer auto-creates an invoice from an accepted order,
/// it posts against these configured accounts. An implicit "first account
/// with a matching normal side" query is deliberately not offered.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LedgerConfig {
    /// Default receivable (debit-side) account for auto-created invoices.
    #[serde(default)]
    pub default_receivable_account: Option<Uuid>,
    /// Default payable (credit-side) account for auto-created invoices.
    #[serde(default)]
    pub default_payable_account: Option<Uuid>,
}

impl LedgerConfig {
    /// Returns the configured (receivable, payable) account pair for
    /// auto-created invoices. Either side may be absent, in which case the
    /// corresponding invoice leg is left unlinked.
    #[must_use]
    pub const fn invoice_accounts(&self) -> (Option<Uuid>, Option<Uuid>) {
        (self.default_receivable_account, self.default_payable_account)
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LEDGERKIT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_env() {
        temp_env::with_vars(
            [("LEDGERKIT__DATABASE__URL", Some("postgres://localhost/lk"))],
            || {
                let config = AppConfig::load().expect("config should load from env");
                assert_eq!(config.database.url, "postgres://localhost/lk");
                assert_eq!(config.database.max_connections, 10);
                assert_eq!(config.database.min_connections, 1);
            },
        );
    }

    #[test]
    fn test_ledger_defaults_absent() {
        let ledger = LedgerConfig::default();
        assert_eq!(ledger.invoice_accounts(), (None, None));
    }

    #[test]
    fn test_ledger_invoice_accounts() {
        let receivable = Uuid::new_v4();
        let payable = Uuid::new_v4();
        let ledger = LedgerConfig {
            default_receivable_account: Some(receivable),
            default_payable_account: Some(payable),
        };
        assert_eq!(
            ledger.invoice_accounts(),
            (Some(receivable), Some(payable))
        );
    }
}
