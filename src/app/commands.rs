use crate::adapters::location::{DeniedLocationProvider, ManualLocationProvider};
use crate::app::render::{self, OutputFormat};
use crate::config::cli::Command;
use crate::core::directory::DirectoryService;
use crate::core::profile::{call_artisan, send_job_request, set_availability, toggle_availability};
use crate::core::registration::register;
use crate::domain::model::{GeoPoint, RegistrationForm};
use crate::domain::ports::{ArtisanRepository, Dialer};
use crate::utils::error::Result;

/// Runs one CLI command against a directory and returns the rendered output.
pub struct App<R: ArtisanRepository, D: Dialer> {
    service: DirectoryService<R>,
    dialer: D,
    min_phone_digits: usize,
    format: OutputFormat,
}

impl<R: ArtisanRepository, D: Dialer> App<R, D> {
    pub fn new(
        service: DirectoryService<R>,
        dialer: D,
        min_phone_digits: usize,
        format: OutputFormat,
    ) -> Self {
        Self {
            service,
            dialer,
            min_phone_digits,
            format,
        }
    }

    pub async fn run(&self, command: &Command) -> Result<String> {
        match command {
            Command::Categories => render::render_categories(self.service.categories(), self.format),

            Command::Nearby {
                category,
                lat,
                lon,
                no_location,
            } => {
                let result = if *no_location {
                    self.service.nearby(category, &DeniedLocationProvider).await?
                } else {
                    let point = lat.zip(*lon).map(|(lat, lon)| GeoPoint::new(lat, lon));
                    self.service
                        .nearby(category, &ManualLocationProvider::new(point))
                        .await?
                };
                tracing::info!(
                    "Found {} artisans for '{}'",
                    result.artisans.len(),
                    category
                );
                render::render_nearby(&result, self.format)
            }

            Command::Show { id } => {
                let artisan = self.service.profile(id)?;
                render::render_profile(&artisan, self.format)
            }

            Command::Call { id } => {
                let artisan = self.service.profile(id)?;
                let uri = call_artisan(&artisan, &self.dialer).await?;
                Ok(format!("Calling {} ({})\n", artisan.name, uri))
            }

            Command::Request { id } => {
                let artisan = self.service.profile(id)?;
                let receipt = send_job_request(&artisan)?;
                render::render_job_request(&receipt, self.format)
            }

            Command::Register {
                name,
                phone,
                category,
                experience,
                bio,
            } => {
                let form = RegistrationForm {
                    name: name.clone(),
                    phone: phone.clone(),
                    category: *category,
                    experience: experience.clone(),
                    bio: bio.clone(),
                };
                let registration = register(&form, self.min_phone_digits)?;
                render::render_registration(&registration, self.format)
            }

            Command::Availability { id, set } => {
                let artisan = self.service.profile(id)?;
                let update = match set {
                    Some(available) => set_availability(artisan, *available),
                    None => toggle_availability(artisan),
                };
                render::render_availability(&update, self.format)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::directory::StaticDirectory;
    use crate::domain::model::{Category, DEFAULT_FALLBACK_LOCATION};
    use crate::utils::error::DirectoryError;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingDialer {
        dialed: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Dialer for RecordingDialer {
        async fn dial(&self, uri: &str) -> Result<()> {
            self.dialed.lock().unwrap().push(uri.to_string());
            Ok(())
        }
    }

    fn app(dialer: RecordingDialer) -> App<StaticDirectory, RecordingDialer> {
        App::new(
            DirectoryService::new(StaticDirectory::new(), DEFAULT_FALLBACK_LOCATION),
            dialer,
            10,
            OutputFormat::Text,
        )
    }

    #[tokio::test]
    async fn test_nearby_without_location_falls_back() {
        let out = app(RecordingDialer::default())
            .run(&Command::Nearby {
                category: "plumber".to_string(),
                lat: None,
                lon: None,
                no_location: true,
            })
            .await
            .unwrap();
        assert!(out.contains("Found 2 plumbers"));
        assert!(out.contains("Location Permission"));
    }

    #[tokio::test]
    async fn test_call_dials_stored_number() {
        let dialer = RecordingDialer::default();
        let out = app(dialer.clone())
            .run(&Command::Call { id: "8".to_string() })
            .await
            .unwrap();
        assert!(out.contains("Efua Mensah"));
        assert_eq!(*dialer.dialed.lock().unwrap(), vec!["tel:+233244890123".to_string()]);
    }

    #[tokio::test]
    async fn test_request_to_busy_artisan_fails() {
        let err = app(RecordingDialer::default())
            .run(&Command::Request { id: "3".to_string() })
            .await
            .unwrap_err();
        assert!(matches!(err, DirectoryError::ArtisanUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_register_rejects_short_phone() {
        let err = app(RecordingDialer::default())
            .run(&Command::Register {
                name: "Yaa".to_string(),
                phone: "12345".to_string(),
                category: Some(Category::Painter),
                experience: "2".to_string(),
                bio: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidPhone { .. }));
    }

    #[tokio::test]
    async fn test_availability_toggle() {
        let out = app(RecordingDialer::default())
            .run(&Command::Availability {
                id: "3".to_string(),
                set: None,
            })
            .await
            .unwrap();
        assert!(out.contains("You are now marked as Available"));
    }
}
