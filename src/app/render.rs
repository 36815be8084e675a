use crate::core::directory::NearbyResult;
use crate::core::location::LocationSource;
use crate::domain::model::{
    Artisan, AvailabilityUpdate, Category, JobRequestReceipt, Registration,
};
use crate::utils::error::{DirectoryError, Result};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Serialize)]
struct ArtisanRow<'a> {
    id: &'a str,
    name: &'a str,
    category: &'static str,
    phone: &'a str,
    experience: u32,
    rating: f32,
    review_count: u32,
    address: &'a str,
    latitude: f64,
    longitude: f64,
    available: bool,
    distance_km: Option<f64>,
}

impl<'a> ArtisanRow<'a> {
    fn new(artisan: &'a Artisan, distance_km: Option<f64>) -> Self {
        Self {
            id: &artisan.id,
            name: &artisan.name,
            category: artisan.category.id(),
            phone: &artisan.phone,
            experience: artisan.experience,
            rating: artisan.rating,
            review_count: artisan.review_count,
            address: &artisan.location.address,
            latitude: artisan.location.latitude,
            longitude: artisan.location.longitude,
            available: artisan.available,
            distance_km,
        }
    }
}

#[derive(Debug, Serialize)]
struct CategoryRow {
    id: &'static str,
    name: &'static str,
    icon: &'static str,
}

#[derive(Debug, Serialize)]
struct RegistrationRow<'a> {
    name: &'a str,
    phone: &'a str,
    category: &'static str,
    experience: u32,
    bio: &'a str,
    submitted_at: String,
    message: &'a str,
}

fn to_csv<T: Serialize>(rows: impl IntoIterator<Item = T>) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| DirectoryError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| DirectoryError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// "plumber" -> "plumbers"; the raw id is used for unknown categories.
fn plural(name: &str, count: usize) -> String {
    if count == 1 {
        name.to_lowercase()
    } else {
        format!("{}s", name.to_lowercase())
    }
}

pub fn format_distance(distance_km: f64) -> String {
    format!("{:.1} km", distance_km)
}

pub fn render_categories(categories: &[Category], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(
            &categories
                .iter()
                .map(|c| CategoryRow {
                    id: c.id(),
                    name: c.display_name(),
                    icon: c.icon(),
                })
                .collect::<Vec<_>>(),
        ),
        OutputFormat::Csv => to_csv(categories.iter().map(|c| CategoryRow {
            id: c.id(),
            name: c.display_name(),
            icon: c.icon(),
        })),
        OutputFormat::Text => {
            let mut out = String::from("Select Artisan Category\n");
            for category in categories {
                let _ = writeln!(
                    out,
                    "  {} {:<12} ({})",
                    category.icon(),
                    category.display_name(),
                    category.id()
                );
            }
            Ok(out)
        }
    }
}

pub fn render_nearby(result: &NearbyResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(result),
        OutputFormat::Csv => to_csv(
            result
                .artisans
                .iter()
                .map(|r| ArtisanRow::new(&r.artisan, Some(r.distance_km))),
        ),
        OutputFormat::Text => {
            let (icon, name) = match result.category {
                Some(category) => (category.icon(), category.display_name().to_string()),
                None => ("❓", result.category_id.clone()),
            };

            let mut out = String::new();
            if let LocationSource::Fallback { reason } = &result.location.source {
                let _ = writeln!(
                    out,
                    "⚠️  {}. Showing distances from {}.",
                    reason, result.location.point
                );
            }
            let _ = writeln!(out, "{} {}s Near You", icon, name);

            if result.artisans.is_empty() {
                let _ = writeln!(out, "No {} found in your area", plural(&name, 0));
                return Ok(out);
            }

            let _ = writeln!(
                out,
                "Found {} {}",
                result.artisans.len(),
                plural(&name, result.artisans.len())
            );
            for ranked in &result.artisans {
                let artisan = &ranked.artisan;
                let _ = writeln!(out);
                let _ = writeln!(out, "[{}] {}", artisan.id, artisan.name);
                let _ = writeln!(out, "    📍 {}", artisan.location.address);
                let _ = writeln!(
                    out,
                    "    ⭐ {} ({} reviews)",
                    artisan.rating, artisan.review_count
                );
                let _ = writeln!(
                    out,
                    "    Experience: {} years | Distance: {} | Status: {}",
                    artisan.experience,
                    format_distance(ranked.distance_km),
                    artisan.status_label()
                );
            }
            Ok(out)
        }
    }
}

pub fn render_profile(artisan: &Artisan, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(artisan),
        OutputFormat::Csv => to_csv([ArtisanRow::new(artisan, None)]),
        OutputFormat::Text => {
            let mut out = String::new();
            let _ = writeln!(out, "({}) {}", artisan.initial(), artisan.name);
            let _ = writeln!(
                out,
                "{} {}",
                artisan.category.icon(),
                artisan.category.display_name().to_uppercase()
            );
            let _ = writeln!(
                out,
                "⭐ {} ({} reviews)",
                artisan.rating, artisan.review_count
            );
            let badge = if artisan.available {
                "✓ Available"
            } else {
                "● Busy"
            };
            let _ = writeln!(out, "{}", badge);
            let _ = writeln!(out);
            let _ = writeln!(out, "Location:   {}", artisan.location.address);
            let _ = writeln!(out, "Experience: {} years", artisan.experience);
            let _ = writeln!(out, "Phone:      {}", artisan.phone);
            if !artisan.bio.is_empty() {
                let _ = writeln!(out);
                let _ = writeln!(out, "About");
                let _ = writeln!(out, "  {}", artisan.bio);
            }
            let _ = writeln!(out);
            if artisan.portfolio.is_empty() {
                let _ = writeln!(out, "Portfolio: no photos yet");
            } else {
                let _ = writeln!(out, "Portfolio: {} photos", artisan.portfolio.len());
            }
            if !artisan.available {
                let _ = writeln!(
                    out,
                    "This artisan is currently busy. You can still call to schedule for later."
                );
            }
            Ok(out)
        }
    }
}

pub fn render_registration(registration: &Registration, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(registration),
        OutputFormat::Csv => {
            let candidate = &registration.candidate;
            to_csv([RegistrationRow {
                name: &candidate.name,
                phone: &candidate.phone,
                category: candidate.category.id(),
                experience: candidate.experience,
                bio: &candidate.bio,
                submitted_at: registration.submitted_at.to_rfc3339(),
                message: &registration.message,
            }])
        }
        OutputFormat::Text => Ok(format!(
            "Registration Successful!\n{}\n",
            registration.message
        )),
    }
}

pub fn render_availability(update: &AvailabilityUpdate, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(update),
        OutputFormat::Csv => to_csv([ArtisanRow::new(&update.artisan, None)]),
        OutputFormat::Text => Ok(format!(
            "Status Updated\n{} ({})\n",
            update.message, update.artisan.name
        )),
    }
}

pub fn render_job_request(receipt: &JobRequestReceipt, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(receipt),
        OutputFormat::Csv => to_csv([receipt]),
        OutputFormat::Text => Ok(format!("Job Request\n{}\n", receipt.message)),
    }
}
