use crate::utils::error::DirectoryError;
use crate::utils::validation::{self, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trade classifications. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mason,
    Carpenter,
    Plumber,
    Painter,
    Electrician,
    Welder,
    Tiler,
    Mechanic,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Mason,
        Category::Carpenter,
        Category::Plumber,
        Category::Painter,
        Category::Electrician,
        Category::Welder,
        Category::Tiler,
        Category::Mechanic,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Category::Mason => "mason",
            Category::Carpenter => "carpenter",
            Category::Plumber => "plumber",
            Category::Painter => "painter",
            Category::Electrician => "electrician",
            Category::Welder => "welder",
            Category::Tiler => "tiler",
            Category::Mechanic => "mechanic",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Mason => "Mason",
            Category::Carpenter => "Carpenter",
            Category::Plumber => "Plumber",
            Category::Painter => "Painter",
            Category::Electrician => "Electrician",
            Category::Welder => "Welder",
            Category::Tiler => "Tiler",
            Category::Mechanic => "Mechanic",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Mason => "🧱",
            Category::Carpenter => "🪚",
            Category::Plumber => "🔧",
            Category::Painter => "🎨",
            Category::Electrician => "⚡",
            Category::Welder => "🔥",
            Category::Tiler => "🏗️",
            Category::Mechanic => "🔩",
        }
    }

    /// Exact id lookup used by the ranking entry point: anything else is `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.id() == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = DirectoryError;

    /// Command line input: surrounding whitespace and case are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(&s.trim().to_ascii_lowercase())
            .ok_or_else(|| DirectoryError::UnknownCategory { id: s.to_string() })
    }
}

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

/// Accra centre, used whenever the device position cannot be obtained.
pub const DEFAULT_FALLBACK_LOCATION: GeoPoint = GeoPoint::new(5.6037, -0.1870);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

impl Location {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artisan {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub phone: String,
    pub experience: u32,
    pub rating: f32,
    pub review_count: u32,
    pub location: Location,
    pub available: bool,
    #[serde(default)]
    pub profile_photo: Option<String>,
    #[serde(default)]
    pub portfolio: Vec<String>,
    #[serde(default)]
    pub bio: String,
}

impl Artisan {
    pub fn status_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Busy"
        }
    }

    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    /// Range checks for a loaded record, reporting fields under `prefix`
    /// (e.g. `artisans[3].location.latitude`).
    pub fn validate_as(&self, prefix: &str) -> crate::utils::error::Result<()> {
        validation::validate_latitude(
            &format!("{}.location.latitude", prefix),
            self.location.latitude,
        )?;
        validation::validate_longitude(
            &format!("{}.location.longitude", prefix),
            self.location.longitude,
        )?;
        validation::validate_range(&format!("{}.rating", prefix), self.rating, 0.0, 5.0)?;
        Ok(())
    }
}

impl Validate for Artisan {
    fn validate(&self) -> crate::utils::error::Result<()> {
        self.validate_as("artisan")
    }
}

/// An artisan together with its distance from the query point. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedArtisan {
    #[serde(flatten)]
    pub artisan: Artisan,
    pub distance_km: f64,
}

/// Raw registration input as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub phone: String,
    pub category: Option<Category>,
    pub experience: String,
    #[serde(default)]
    pub bio: String,
}

/// Candidate profile produced from an accepted form. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtisanCandidate {
    pub name: String,
    pub phone: String,
    pub category: Category,
    pub experience: u32,
    pub bio: String,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub candidate: ArtisanCandidate,
    pub submitted_at: DateTime<Utc>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilityUpdate {
    pub artisan: Artisan,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobRequestReceipt {
    pub artisan_id: String,
    pub artisan_name: String,
    pub sent_at: DateTime<Utc>,
    pub message: String,
}
