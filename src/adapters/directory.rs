use crate::domain::model::Artisan;
use crate::domain::ports::ArtisanRepository;
use crate::domain::sample_data::sample_artisans;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// The built-in sample set.
#[derive(Debug, Clone)]
pub struct StaticDirectory {
    artisans: Vec<Artisan>,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self {
            artisans: sample_artisans(),
        }
    }
}

impl Default for StaticDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtisanRepository for StaticDirectory {
    fn list_all(&self) -> Result<Vec<Artisan>> {
        Ok(self.artisans.clone())
    }
}

/// Artisans loaded once from a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileDirectory {
    artisans: Vec<Artisan>,
}

impl JsonFileDirectory {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path.as_ref())?;
        let directory = Self::from_slice(&data)?;
        tracing::info!(
            "Loaded {} artisans from {}",
            directory.artisans.len(),
            path.as_ref().display()
        );
        Ok(directory)
    }

    /// Parses a JSON array of artisans and range-checks every record.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        let artisans: Vec<Artisan> = serde_json::from_slice(data)?;
        for (index, artisan) in artisans.iter().enumerate() {
            artisan.validate_as(&format!("artisans[{}]", index))?;
        }
        Ok(Self { artisans })
    }
}

impl ArtisanRepository for JsonFileDirectory {
    fn list_all(&self) -> Result<Vec<Artisan>> {
        Ok(self.artisans.clone())
    }
}

/// Either source, picked at start-up from configuration.
#[derive(Debug, Clone)]
pub enum AnyDirectory {
    Static(StaticDirectory),
    JsonFile(JsonFileDirectory),
}

impl AnyDirectory {
    pub fn open(data_file: Option<&str>) -> Result<Self> {
        match data_file {
            Some(path) => Ok(AnyDirectory::JsonFile(JsonFileDirectory::from_file(path)?)),
            None => Ok(AnyDirectory::Static(StaticDirectory::new())),
        }
    }
}

impl ArtisanRepository for AnyDirectory {
    fn list_all(&self) -> Result<Vec<Artisan>> {
        match self {
            AnyDirectory::Static(d) => d.list_all(),
            AnyDirectory::JsonFile(d) => d.list_all(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Category;
    use crate::utils::error::DirectoryError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_static_directory_list_by_category() {
        let directory = StaticDirectory::new();
        let plumbers = directory.list_by_category(Category::Plumber).unwrap();
        let names: Vec<_> = plumbers.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Kwame Mensah", "Efua Mensah"]);
        assert!(directory.find_by_id("8").unwrap().is_some());
        assert!(directory.find_by_id("0").unwrap().is_none());
    }

    #[test]
    fn test_json_directory_from_file() {
        let json = serde_json::to_vec(&sample_artisans()[..2]).unwrap();
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(&json).unwrap();

        let directory = JsonFileDirectory::from_file(temp_file.path()).unwrap();

        assert_eq!(directory.list_all().unwrap().len(), 2);
        assert_eq!(
            directory.list_by_category(Category::Electrician).unwrap()[0].name,
            "Akosua Boateng"
        );
    }

    #[test]
    fn test_json_directory_rejects_bad_data() {
        let err = JsonFileDirectory::from_slice(br#"{"not": "an array"}"#).unwrap_err();
        assert!(matches!(err, DirectoryError::SerializationError(_)));
    }

    #[test]
    fn test_json_directory_rejects_out_of_range_records() {
        let mut artisans = sample_artisans();
        artisans[1].location.latitude = 500.0;
        let json = serde_json::to_vec(&artisans).unwrap();
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(&json).unwrap();

        let err = JsonFileDirectory::from_file(temp_file.path()).unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidConfigValueError { .. }));
        assert_eq!(err.field(), Some("artisans[1].location.latitude"));

        let mut artisans = sample_artisans();
        artisans[4].rating = 42.0;
        let json = serde_json::to_vec(&artisans).unwrap();
        let err = JsonFileDirectory::from_slice(&json).unwrap_err();
        assert_eq!(err.field(), Some("artisans[4].rating"));
    }

    #[test]
    fn test_any_directory_defaults_to_samples() {
        let directory = AnyDirectory::open(None).unwrap();
        assert_eq!(directory.list_all().unwrap().len(), 8);
        assert!(matches!(
            AnyDirectory::open(Some("/definitely/not/here.json")),
            Err(DirectoryError::IoError(_))
        ));
    }
}
