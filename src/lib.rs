pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::TomlConfig;
pub use core::directory::DirectoryService;
pub use core::geo::haversine_km;
pub use core::ranking::{rank_by_category_id, rank_by_proximity};
pub use domain::model::{Artisan, Category, GeoPoint, RankedArtisan};
pub use utils::error::{DirectoryError, Result};
