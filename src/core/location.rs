use crate::domain::model::GeoPoint;
use crate::domain::ports::LocationProvider;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LocationSource {
    Device,
    Fallback { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLocation {
    pub point: GeoPoint,
    pub source: LocationSource,
}

impl ResolvedLocation {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, LocationSource::Fallback { .. })
    }
}

/// Asks the provider for a position and falls back to `fallback` on denial or
/// failure. Never fails.
pub async fn resolve_location<L: LocationProvider + ?Sized>(
    provider: &L,
    fallback: GeoPoint,
) -> ResolvedLocation {
    match provider.current_location().await {
        Ok(point) => {
            tracing::debug!("Using device location {}", point);
            ResolvedLocation {
                point,
                source: LocationSource::Device,
            }
        }
        Err(e) => {
            tracing::warn!("{}; using fallback location {}", e, fallback);
            ResolvedLocation {
                point: fallback,
                source: LocationSource::Fallback {
                    reason: e.user_friendly_message(),
                },
            }
        }
    }
}
