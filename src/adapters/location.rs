use crate::domain::model::GeoPoint;
use crate::domain::ports::LocationProvider;
use crate::utils::error::{DirectoryError, Result};
use async_trait::async_trait;

/// Position typed in by the user. Reports "unavailable" when none was given.
#[derive(Debug, Clone, Default)]
pub struct ManualLocationProvider {
    point: Option<GeoPoint>,
}

impl ManualLocationProvider {
    pub fn new(point: Option<GeoPoint>) -> Self {
        Self { point }
    }
}

#[async_trait]
impl LocationProvider for ManualLocationProvider {
    async fn current_location(&self) -> Result<GeoPoint> {
        self.point.ok_or_else(|| DirectoryError::LocationUnavailable {
            message: "no coordinates supplied".to_string(),
        })
    }
}

/// Stands in for a user who withheld location permission.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedLocationProvider;

#[async_trait]
impl LocationProvider for DeniedLocationProvider {
    async fn current_location(&self) -> Result<GeoPoint> {
        Err(DirectoryError::LocationPermissionDenied)
    }
}
