pub mod directory;
pub mod geo;
pub mod location;
pub mod profile;
pub mod ranking;
pub mod registration;

pub use crate::domain::model::{Artisan, Category, GeoPoint, RankedArtisan};
pub use crate::domain::ports::{ArtisanRepository, ConfigProvider, Dialer, LocationProvider};
pub use crate::utils::error::Result;
