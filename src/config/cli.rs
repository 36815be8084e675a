use crate::app::render::OutputFormat;
use crate::config::toml_config::TomlConfig;
use crate::domain::model::Category;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "workman-gh")]
#[command(about = "Find skilled artisans near you in Ghana")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// JSON file with artisan records, replacing the built-in sample set
    #[arg(long, global = true)]
    pub data_file: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List artisan categories
    Categories,

    /// List artisans of a category, nearest first
    Nearby {
        /// Category id, e.g. plumber
        category: String,

        #[arg(long, allow_hyphen_values = true, requires = "lon")]
        lat: Option<f64>,

        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lon: Option<f64>,

        /// Behave as if location permission was denied
        #[arg(long, conflicts_with_all = ["lat", "lon"])]
        no_location: bool,
    },

    /// Show an artisan profile
    Show { id: String },

    /// Call an artisan
    Call { id: String },

    /// Send a job request to an artisan
    Request { id: String },

    /// Register as an artisan
    Register {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "", allow_hyphen_values = true)]
        phone: String,

        #[arg(long)]
        category: Option<Category>,

        #[arg(long, default_value = "", allow_hyphen_values = true)]
        experience: String,

        #[arg(long, default_value = "")]
        bio: String,
    },

    /// Toggle (or set) an artisan's availability for this session
    Availability {
        id: String,

        #[arg(long)]
        set: Option<bool>,
    },
}

impl CliConfig {
    /// File configuration (or defaults) with command line overrides applied.
    pub fn load_settings(&self) -> Result<TomlConfig> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(data_file) = &self.data_file {
            settings.directory.data_file = Some(data_file.clone());
        }
        if self.json_logs {
            settings.logging.json = true;
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        if let Command::Nearby {
            lat: Some(lat),
            lon: Some(lon),
            ..
        } = &self.command
        {
            validation::validate_latitude("lat", *lat)?;
            validation::validate_longitude("lon", *lon)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ConfigProvider;

    #[test]
    fn test_parse_nearby_with_negative_longitude() {
        let cli = CliConfig::try_parse_from([
            "workman-gh",
            "nearby",
            "plumber",
            "--lat",
            "5.6037",
            "--lon",
            "-0.1870",
        ])
        .unwrap();
        assert!(cli.validate().is_ok());

        match cli.command {
            Command::Nearby { category, lat, lon, no_location } => {
                assert_eq!(category, "plumber");
                assert_eq!(lat, Some(5.6037));
                assert_eq!(lon, Some(-0.1870));
                assert!(!no_location);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        let cli = CliConfig::try_parse_from([
            "workman-gh", "nearby", "mason", "--lat", "91", "--lon", "0",
        ])
        .unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_register_parses_category() {
        let cli = CliConfig::try_parse_from([
            "workman-gh",
            "register",
            "--name",
            "Ama",
            "--phone",
            "0244123456",
            "--category",
            "tiler",
            "--experience",
            "3",
        ])
        .unwrap();

        match cli.command {
            Command::Register { category, .. } => assert_eq!(category, Some(Category::Tiler)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_data_file_override() {
        let cli = CliConfig::try_parse_from([
            "workman-gh",
            "--data-file",
            "artisans.json",
            "categories",
        ])
        .unwrap();
        let settings = cli.load_settings().unwrap();
        assert_eq!(settings.data_file(), Some("artisans.json"));
    }

    #[test]
    fn test_load_settings_reads_config_file_then_overrides() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[directory]\ndata_file = \"from_file.json\"\n\n[registration]\nmin_phone_digits = 9"
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = CliConfig::try_parse_from(["workman-gh", "-c", path.as_str(), "categories"])
            .unwrap();
        let settings = cli.load_settings().unwrap();
        assert_eq!(settings.data_file(), Some("from_file.json"));
        assert_eq!(settings.min_phone_digits(), 9);

        let cli = CliConfig::try_parse_from([
            "workman-gh",
            "-c",
            path.as_str(),
            "--data-file",
            "override.json",
            "categories",
        ])
        .unwrap();
        assert_eq!(cli.load_settings().unwrap().data_file(), Some("override.json"));
    }

    #[test]
    fn test_register_category_ignores_case() {
        let cli = CliConfig::try_parse_from([
            "workman-gh", "register", "--name", "Ama", "--phone", "0244123456", "--category",
            "Painter", "--experience", "3",
        ])
        .unwrap();
        match cli.command {
            Command::Register { category, .. } => assert_eq!(category, Some(Category::Painter)),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
