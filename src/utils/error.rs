use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown category: {id}")]
    UnknownCategory { id: String },

    #[error("Artisan not found: {id}")]
    ArtisanNotFound { id: String },

    #[error("{name} is currently busy")]
    ArtisanUnavailable { name: String },

    #[error("Location permission denied")]
    LocationPermissionDenied,

    #[error("Location unavailable: {message}")]
    LocationUnavailable { message: String },

    #[error("Missing required fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("Invalid phone number '{phone}': {digits} digits, at least {min_digits} required")]
    InvalidPhone {
        phone: String,
        digits: usize,
        min_digits: usize,
    },

    #[error("Invalid years of experience: '{value}'")]
    InvalidExperience { value: String },

    #[error("Dial failed: {message}")]
    DialError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    Location,
    Lookup,
    Io,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DirectoryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DirectoryError::IoError(_) => ErrorCategory::Io,
            DirectoryError::SerializationError(_) | DirectoryError::CsvError(_) => {
                ErrorCategory::Serialization
            }
            DirectoryError::ConfigValidationError { .. }
            | DirectoryError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DirectoryError::MissingFields { .. }
            | DirectoryError::InvalidPhone { .. }
            | DirectoryError::InvalidExperience { .. } => ErrorCategory::Validation,
            DirectoryError::LocationPermissionDenied | DirectoryError::LocationUnavailable { .. } => {
                ErrorCategory::Location
            }
            DirectoryError::UnknownCategory { .. }
            | DirectoryError::ArtisanNotFound { .. }
            | DirectoryError::ArtisanUnavailable { .. }
            | DirectoryError::DialError { .. } => ErrorCategory::Lookup,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Location => ErrorSeverity::Low,
            ErrorCategory::Validation | ErrorCategory::Lookup => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Serialization => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DirectoryError::IoError(_) => {
                "Check that the file exists and is readable".to_string()
            }
            DirectoryError::SerializationError(_) => {
                "Check that the data file holds a JSON array of artisan records".to_string()
            }
            DirectoryError::CsvError(_) => "Try another output format".to_string(),
            DirectoryError::ConfigValidationError { .. }
            | DirectoryError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line flags".to_string()
            }
            DirectoryError::UnknownCategory { .. } => format!(
                "Use one of: {}",
                crate::domain::model::Category::ALL
                    .iter()
                    .map(|c| c.id())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            DirectoryError::ArtisanNotFound { .. } => {
                "Run `nearby <category>` to see valid artisan ids".to_string()
            }
            DirectoryError::ArtisanUnavailable { .. } => {
                "You can still call to schedule for later".to_string()
            }
            DirectoryError::LocationPermissionDenied
            | DirectoryError::LocationUnavailable { .. } => {
                "Pass --lat and --lon to rank from your own position".to_string()
            }
            DirectoryError::MissingFields { .. } => {
                "Please fill in all required fields".to_string()
            }
            DirectoryError::InvalidPhone { .. } => {
                "Please enter a valid phone number, e.g. +233244123456".to_string()
            }
            DirectoryError::InvalidExperience { .. } => {
                "Please enter a valid number of years".to_string()
            }
            DirectoryError::DialError { .. } => {
                "Dial the number manually from the profile".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DirectoryError::MissingFields { fields } => {
                format!("Missing Information: {}", fields.join(", "))
            }
            DirectoryError::InvalidPhone { phone, .. } => {
                format!("Invalid Phone: '{}' is not a valid phone number", phone)
            }
            DirectoryError::InvalidExperience { value } => {
                format!("Invalid Experience: '{}' is not a valid number of years", value)
            }
            DirectoryError::LocationPermissionDenied => {
                "Location Permission: access to location was denied".to_string()
            }
            DirectoryError::ArtisanUnavailable { name } => {
                format!("{} is currently busy and cannot take job requests", name)
            }
            other => other.to_string(),
        }
    }

    /// Name of the form or config field this error points at, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            DirectoryError::ConfigValidationError { field, .. }
            | DirectoryError::InvalidConfigValueError { field, .. } => Some(field.as_str()),
            DirectoryError::MissingFields { fields } => fields.first().map(String::as_str),
            DirectoryError::InvalidPhone { .. } => Some("phone"),
            DirectoryError::InvalidExperience { .. } => Some("experience"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_name_the_field() {
        let err = DirectoryError::InvalidPhone {
            phone: "12345".to_string(),
            digits: 5,
            min_digits: 10,
        };
        assert_eq!(err.field(), Some("phone"));
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.user_friendly_message().contains("Invalid Phone"));

        let err = DirectoryError::MissingFields {
            fields: vec!["name".to_string(), "category".to_string()],
        };
        assert_eq!(err.to_string(), "Missing required fields: name, category");
        assert_eq!(err.field(), Some("name"));
    }

    #[test]
    fn test_severity_follows_category() {
        assert_eq!(
            DirectoryError::LocationPermissionDenied.severity(),
            ErrorSeverity::Low
        );
        assert_eq!(
            DirectoryError::ArtisanNotFound { id: "9".to_string() }.severity(),
            ErrorSeverity::Medium
        );
        assert_eq!(
            DirectoryError::IoError(std::io::Error::other("gone")).severity(),
            ErrorSeverity::Critical
        );
    }

    #[test]
    fn test_unknown_category_suggests_valid_ids() {
        let err = DirectoryError::UnknownCategory {
            id: "roofer".to_string(),
        };
        let suggestion = err.recovery_suggestion();
        assert!(suggestion.contains("plumber"));
        assert!(suggestion.contains("mechanic"));
    }
}
