use crate::domain::model::{Artisan, Category, GeoPoint};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only artisan store.
pub trait ArtisanRepository: Send + Sync {
    fn list_all(&self) -> Result<Vec<Artisan>>;

    fn list_by_category(&self, category: Category) -> Result<Vec<Artisan>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|artisan| artisan.category == category)
            .collect())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Artisan>> {
        Ok(self.list_all()?.into_iter().find(|artisan| artisan.id == id))
    }
}

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_location(&self) -> Result<GeoPoint>;
}

#[async_trait]
pub trait Dialer: Send + Sync {
    /// Hands a `tel:` URI to whatever places the call.
    async fn dial(&self, uri: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn fallback_location(&self) -> GeoPoint;
    fn data_file(&self) -> Option<&str>;
    fn min_phone_digits(&self) -> usize;
}
