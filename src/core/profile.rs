use crate::domain::model::{Artisan, AvailabilityUpdate, JobRequestReceipt};
use crate::domain::ports::Dialer;
use crate::utils::error::{DirectoryError, Result};
use chrono::Utc;
use url::Url;

/// Flips the availability flag on a caller-owned profile.
pub fn toggle_availability(artisan: Artisan) -> AvailabilityUpdate {
    let available = !artisan.available;
    set_availability(artisan, available)
}

pub fn set_availability(mut artisan: Artisan, available: bool) -> AvailabilityUpdate {
    artisan.available = available;
    let message = format!("You are now marked as {}", artisan.status_label());
    tracing::info!("{} availability set to {}", artisan.name, available);
    AvailabilityUpdate { artisan, message }
}

/// `tel:` link for the stored number. Spaces are dropped; dialability is not checked.
pub fn tel_uri(phone: &str) -> Result<Url> {
    let number: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    if number.is_empty() {
        return Err(DirectoryError::DialError {
            message: "no phone number on file".to_string(),
        });
    }
    Url::parse(&format!("tel:{}", number)).map_err(|e| DirectoryError::DialError {
        message: format!("cannot build tel link for '{}': {}", phone, e),
    })
}

/// Places a call regardless of availability; busy artisans can still be
/// called to schedule later work.
pub async fn call_artisan<D: Dialer + ?Sized>(artisan: &Artisan, dialer: &D) -> Result<Url> {
    let uri = tel_uri(&artisan.phone)?;
    tracing::info!("Calling {} at {}", artisan.name, uri);
    dialer.dial(uri.as_str()).await?;
    Ok(uri)
}

/// Simulated job request. Refused while the artisan is busy.
pub fn send_job_request(artisan: &Artisan) -> Result<JobRequestReceipt> {
    if !artisan.available {
        return Err(DirectoryError::ArtisanUnavailable {
            name: artisan.name.clone(),
        });
    }

    tracing::info!("Job request recorded for {} (not delivered)", artisan.name);
    Ok(JobRequestReceipt {
        artisan_id: artisan.id.clone(),
        artisan_name: artisan.name.clone(),
        sent_at: Utc::now(),
        message: format!("Job request for {} noted. Delivery to artisans is not available yet.", artisan.name),
    })
}
