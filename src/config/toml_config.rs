use crate::core::{DEFAULT_FRAC_DECIMALS, MAX_FRAC_DECIMALS, MAX_HMS_DECIMALS};
use crate::utils::error::{Result, TidyError};
use crate::utils::validation::{validate_one_of, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TidyConfig {
    pub duration: DurationConfig,
    pub fraction: FractionConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DurationConfig {
    pub decimals: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FractionConfig {
    pub decimals: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl TidyConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TidyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(decimals) = self.duration.decimals {
            validate_range("duration.decimals", decimals, 0, MAX_HMS_DECIMALS)?;
        }

        if let Some(decimals) = self.fraction.decimals {
            validate_range("fraction.decimals", decimals, 0, MAX_FRAC_DECIMALS)?;
        }

        if let Some(logging) = &self.logging {
            if let Some(level) = &logging.level {
                validate_one_of("logging.level", level, &LOG_LEVELS)?;
            }
            if let Some(format) = &logging.format {
                validate_one_of("logging.format", format, &LOG_FORMATS)?;
            }
        }

        Ok(())
    }

    /// Seconds decimals for `hms`, 0 unless configured.
    pub fn duration_decimals(&self) -> u32 {
        self.duration.decimals.unwrap_or(0)
    }

    pub fn fraction_decimals(&self) -> u32 {
        self.fraction.decimals.unwrap_or(DEFAULT_FRAC_DECIMALS)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .is_some_and(|format| format.eq_ignore_ascii_case("json"))
    }
}

impl Validate for TidyConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
