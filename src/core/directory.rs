use crate::core::location::{resolve_location, ResolvedLocation};
use crate::core::ranking::rank_by_category_id;
use crate::domain::model::{Artisan, Category, GeoPoint, RankedArtisan};
use crate::domain::ports::{ArtisanRepository, LocationProvider};
use crate::utils::error::{DirectoryError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct NearbyResult {
    pub category_id: String,
    pub category: Option<Category>,
    pub location: ResolvedLocation,
    pub artisans: Vec<RankedArtisan>,
}

/// Front door used by the CLI: repository lookups plus proximity ranking.
pub struct DirectoryService<R: ArtisanRepository> {
    repository: R,
    fallback: GeoPoint,
}

impl<R: ArtisanRepository> DirectoryService<R> {
    pub fn new(repository: R, fallback: GeoPoint) -> Self {
        Self {
            repository,
            fallback,
        }
    }

    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    /// Ranks the category from an already-resolved point.
    pub fn nearby_from(&self, category_id: &str, origin: GeoPoint) -> Result<Vec<RankedArtisan>> {
        let records = match Category::from_id(category_id) {
            Some(category) => self.repository.list_by_category(category)?,
            None => Vec::new(),
        };
        let ranked = rank_by_category_id(&records, category_id, origin);
        tracing::debug!(
            "Ranked {} artisans for '{}' from {}",
            ranked.len(),
            category_id,
            origin
        );
        Ok(ranked)
    }

    /// Resolves the requester's position (falling back when needed), then ranks.
    pub async fn nearby<L: LocationProvider + ?Sized>(
        &self,
        category_id: &str,
        provider: &L,
    ) -> Result<NearbyResult> {
        let location = resolve_location(provider, self.fallback).await;
        let artisans = self.nearby_from(category_id, location.point)?;

        Ok(NearbyResult {
            category_id: category_id.to_string(),
            category: Category::from_id(category_id),
            location,
            artisans,
        })
    }

    pub fn profile(&self, id: &str) -> Result<Artisan> {
        self.repository
            .find_by_id(id)?
            .ok_or_else(|| DirectoryError::ArtisanNotFound { id: id.to_string() })
    }
}
