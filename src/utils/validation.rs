use crate::utils::error::{DirectoryError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN fails both comparisons, so reject it explicitly
    #[allow(clippy::eq_op)]
    let is_nan = value != value;
    if is_nan || value < min || value > max {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_latitude(field_name: &str, value: f64) -> Result<()> {
    validate_range(field_name, value, -90.0, 90.0)
}

pub fn validate_longitude(field_name: &str, value: f64) -> Result<()> {
    validate_range(field_name, value, -180.0, 180.0)
}

/// Number of ASCII digits in a free-text phone number.
pub fn count_digits(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_digit()).count()
}
