use crate::core::format::{DEFAULT_NONE_LABEL, MaterialStyle};
use crate::errors::{AppError, AppResult};
use crate::models::catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Sheet address: a CSV path, a `.sqlite` path or `sqlite://<path>`.
    #[serde(default = "default_sheet")]
    pub sheet: String,
    /// SQLite file holding the internal `log` table.
    #[serde(default = "default_journal")]
    pub journal: String,
    #[serde(default = "default_none_label")]
    pub none_label: String,
    #[serde(default)]
    pub material_style: MaterialStyle,
    #[serde(default = "default_true")]
    pub require_technician: bool,
    #[serde(default)]
    pub require_material: bool,
    #[serde(default)]
    pub conflict_check: bool,
    #[serde(default = "default_history_rows")]
    pub history_rows: usize,
    #[serde(default)]
    pub catalog: Catalog,
}

/// Top-level keys expected in the configuration file.
pub const CONFIG_KEYS: [&str; 9] = [
    "sheet",
    "journal",
    "none_label",
    "material_style",
    "require_technician",
    "require_material",
    "conflict_check",
    "history_rows",
    "catalog",
];

fn default_sheet() -> String {
    Config::sheet_file().to_string_lossy().to_string()
}
fn default_journal() -> String {
    Config::journal_file().to_string_lossy().to_string()
}
fn default_none_label() -> String {
    DEFAULT_NONE_LABEL.to_string()
}
fn default_true() -> bool {
    true
}
fn default_history_rows() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet: default_sheet(),
            journal: default_journal(),
            none_label: default_none_label(),
            material_style: MaterialStyle::default(),
            require_technician: default_true(),
            require_material: false,
            conflict_check: false,
            history_rows: default_history_rows(),
            catalog: Catalog::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("jobcard")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".jobcard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("jobcard.conf")
    }

    /// Default location of the CSV sheet
    pub fn sheet_file() -> PathBuf {
        Self::config_dir().join("jobcards.csv")
    }

    /// Default location of the journal database
    pub fn journal_file() -> PathBuf {
        Self::config_dir().join("journal.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// The catalog is validated in both cases.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let cfg = if path.exists() {
            Self::from_file(&path)?
        } else {
            Config::default()
        };

        cfg.catalog.validate()?;
        Ok(Self {
            sheet: Self::resolve_sheet(&cfg.sheet),
            ..cfg
        })
    }

    /// Sheet address as used by every command: an absolute or `~` path is
    /// kept, a relative one lives in the config dir. The `sqlite://` prefix
    /// is preserved.
    pub fn resolve_sheet(address: &str) -> String {
        let (prefix, path) = match address.strip_prefix("sqlite://") {
            Some(rest) => ("sqlite://", rest),
            None => ("", address),
        };

        if path.starts_with('~') || Path::new(path).is_absolute() {
            return address.to_string();
        }

        format!("{prefix}{}", Self::config_dir().join(path).display())
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Keys of [`CONFIG_KEYS`] missing from the file at `path`.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        let map = value
            .as_mapping()
            .ok_or_else(|| AppError::Config("configuration root is not a mapping".into()))?;

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize the config file and return the resulting configuration.
    ///
    /// `custom_sheet` is resolved with [`Config::resolve_sheet`].
    /// In test mode the config file is not written.
    pub fn init_all(custom_sheet: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Config::default();

        if let Some(name) = custom_sheet {
            config.sheet = Self::resolve_sheet(name);
        }

        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
        }

        Ok(config)
    }
}
