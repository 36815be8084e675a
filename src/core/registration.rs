use crate::domain::model::{ArtisanCandidate, Registration, RegistrationForm};
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::count_digits;
use chrono::Utc;

pub const DEFAULT_MIN_PHONE_DIGITS: usize = 10;

/// Checks a registration form and builds the candidate profile.
///
/// Rules run in order and stop at the first failure:
/// required fields, phone digit count, then years of experience.
/// Nothing is stored or sent anywhere.
pub fn register(form: &RegistrationForm, min_phone_digits: usize) -> Result<Registration> {
    let candidate = validate_form(form, min_phone_digits)?;
    let message = format!(
        "Welcome, {}! You are now registered as a {}.",
        candidate.name, candidate.category
    );
    tracing::info!(
        "Accepted registration for {} ({})",
        candidate.name,
        candidate.category.id()
    );

    Ok(Registration {
        candidate,
        submitted_at: Utc::now(),
        message,
    })
}

pub fn validate_form(form: &RegistrationForm, min_phone_digits: usize) -> Result<ArtisanCandidate> {
    let mut missing = Vec::new();
    if form.name.trim().is_empty() {
        missing.push("name".to_string());
    }
    if form.phone.trim().is_empty() {
        missing.push("phone".to_string());
    }
    if form.category.is_none() {
        missing.push("category".to_string());
    }
    if form.experience.trim().is_empty() {
        missing.push("experience".to_string());
    }

    let category = match form.category {
        Some(category) if missing.is_empty() => category,
        _ => return Err(DirectoryError::MissingFields { fields: missing }),
    };

    let phone = form.phone.trim();
    let digits = count_digits(phone);
    if digits < min_phone_digits {
        return Err(DirectoryError::InvalidPhone {
            phone: phone.to_string(),
            digits,
            min_digits: min_phone_digits,
        });
    }

    let experience = form
        .experience
        .trim()
        .parse::<u32>()
        .map_err(|_| DirectoryError::InvalidExperience {
            value: form.experience.clone(),
        })?;

    Ok(ArtisanCandidate {
        name: form.name.trim().to_string(),
        phone: phone.to_string(),
        category,
        experience,
        bio: form.bio.trim().to_string(),
        available: true,
    })
}
