use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::{error, info};
use wall_grid::{CELL_SIZE, GRID_SIZE, GridError, GridGeometry};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
const ENV_PREFIX: &str = "WALL_EDITOR";
const DEFAULT_WINDOW_TITLE: &str = "Wall Editor (Bottom Origin)";

/// Start-up settings for the editor. Fixed for the lifetime of the window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EditorSettings {
    pub grid_size: i32,
    pub cell_size: i32,
    pub window_title: String,
}

impl EditorSettings {
    /// Validated grid geometry for these settings.
    pub fn geometry(&self) -> Result<GridGeometry, GridError> {
        GridGeometry::new(self.grid_size, self.cell_size)
    }
}

fn builder_with_defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    Config::builder()
        .set_default("grid_size", i64::from(GRID_SIZE))?
        .set_default("cell_size", i64::from(CELL_SIZE))?
        .set_default("window_title", DEFAULT_WINDOW_TITLE)
}

/// `WALL_EDITOR_<KEY>` overrides, e.g. `WALL_EDITOR_GRID_SIZE=40` sets `grid_size`.
fn env_overrides() -> Environment {
    Environment::with_prefix(ENV_PREFIX).try_parsing(true)
}

/// Loads settings from the defaults, `config/default.toml` (if present) and
/// `WALL_EDITOR_*` environment variables, in increasing priority.
pub fn load_settings() -> Result<EditorSettings, ConfigError> {
    info!("Attempting to load configuration from {}", DEFAULT_CONFIG_PATH);

    let settings = builder_with_defaults()?
        .add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(false))
        .add_source(env_overrides())
        .build()
        .and_then(|config| config.try_deserialize::<EditorSettings>());

    match settings {
        Ok(settings) => {
            info!("Successfully loaded configuration: {:?}", settings);
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

/// Parses settings from a TOML document layered over the defaults.
#[cfg(test)]
fn settings_from_toml(toml: &str) -> Result<EditorSettings, ConfigError> {
    builder_with_defaults()?
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = settings_from_toml("").unwrap();
        assert_eq!(settings.grid_size, 30);
        assert_eq!(settings.cell_size, 20);
        assert_eq!(settings.window_title, "Wall Editor (Bottom Origin)");
        assert_eq!(settings.geometry().unwrap(), GridGeometry::default());
    }

    #[test]
    fn test_file_overrides() {
        let settings = settings_from_toml("grid_size = 12\ncell_size = 32\n").unwrap();
        let geometry = settings.geometry().unwrap();
        assert_eq!(geometry.grid_size(), 12);
        assert_eq!(geometry.cell_size(), 32);
        assert_eq!(geometry.extent(), 384);
    }

    #[test]
    fn test_invalid_geometry_is_rejected() {
        let settings = settings_from_toml("cell_size = 0").unwrap();
        assert!(matches!(settings.geometry(), Err(GridError::InvalidDimensions(_))));
    }

    #[test]
    fn test_environment_overrides_file() {
        let vars = config::Map::from([
            ("WALL_EDITOR_GRID_SIZE".to_string(), "40".to_string()),
            ("WALL_EDITOR_CELL_SIZE".to_string(), "15".to_string()),
            ("OTHER_TOOL_GRID_SIZE".to_string(), "7".to_string()),
        ]);
        let settings: EditorSettings = builder_with_defaults()
            .unwrap()
            .add_source(File::from_str("grid_size = 12\ncell_size = 32\n", FileFormat::Toml))
            .add_source(env_overrides().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.grid_size, 40);
        assert_eq!(settings.cell_size, 15);
        assert_eq!(settings.window_title, "Wall Editor (Bottom Origin)");
        let geometry = settings.geometry().unwrap();
        assert_eq!(geometry.grid_size(), 40);
        assert_eq!(geometry.cell_size(), 15);
        assert_eq!(geometry.extent(), 600);
    }

    #[test]
    fn test_wrong_type_fails_to_load() {
        assert!(settings_from_toml("grid_size = \"big\"").is_err());
    }
}
