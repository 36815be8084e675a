use crate::core::registration::DEFAULT_MIN_PHONE_DIGITS;
use crate::domain::model::{GeoPoint, DEFAULT_FALLBACK_LOCATION};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub location: LocationConfig,
    pub directory: DirectoryConfig,
    pub registration: RegistrationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub fallback_latitude: f64,
    pub fallback_longitude: f64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            fallback_latitude: DEFAULT_FALLBACK_LOCATION.latitude,
            fallback_longitude: DEFAULT_FALLBACK_LOCATION.longitude,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub data_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    pub min_phone_digits: usize,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            min_phone_digits: DEFAULT_MIN_PHONE_DIGITS,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub json: bool,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern is valid"))
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DirectoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DirectoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_latitude("location.fallback_latitude", self.location.fallback_latitude)?;
        validation::validate_longitude(
            "location.fallback_longitude",
            self.location.fallback_longitude,
        )?;

        if let Some(path) = &self.directory.data_file {
            validation::validate_path("directory.data_file", path)?;
        }

        validation::validate_positive_number(
            "registration.min_phone_digits",
            self.registration.min_phone_digits,
            1,
        )?;

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn fallback_location(&self) -> GeoPoint {
        GeoPoint::new(
            self.location.fallback_latitude,
            self.location.fallback_longitude,
        )
    }

    fn data_file(&self) -> Option<&str> {
        self.directory.data_file.as_deref()
    }

    fn min_phone_digits(&self) -> usize {
        self.registration.min_phone_digits
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
