use std::env;
use std::path::Path;

use anyhow::Context;
use chrono::format::{Item, StrftimeItems};
use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::utils::formatting::SummaryStyle;

pub const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y";

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub summary_style: SummaryStyle,
    pub date_format: String,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads `path` into the process environment before reading the config.
    pub fn from_env_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        dotenv::from_path(path)
            .with_context(|| format!("Failed to load env file {}", path.display()))?;
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let summary_style = match lookup("CART_SUMMARY_STYLE") {
            Some(value) => SummaryStyle::from_str(&value, true)
                .map_err(|_| anyhow::anyhow!("CART_SUMMARY_STYLE must be 'plain' or 'table', got '{}'", value))?,
            None => SummaryStyle::default(),
        };

        let config = Config {
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "warn".to_string()),
            summary_style,
            date_format: lookup("CART_DATE_FORMAT")
                .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string()),
            environment: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        EnvFilter::try_new(&self.log_level)
            .map_err(|e| anyhow::anyhow!("LOG_LEVEL '{}' is not a valid filter: {}", self.log_level, e))?;

        if self.date_format.trim().is_empty() {
            return Err(anyhow::anyhow!("CART_DATE_FORMAT must not be empty"));
        }

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(anyhow::anyhow!(
                "CART_DATE_FORMAT '{}' is not a valid strftime format",
                self.date_format
            ));
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
