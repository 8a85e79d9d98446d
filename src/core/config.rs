use serde::Deserialize;
use std::path::Path;

/// How the CLI re-cases converted output.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Casing {
    #[default]
    Keep,
    Upper,
    Lower,
}

impl Casing {
    pub fn apply(&self, text: String) -> String {
        match self {
            Casing::Keep => text,
            Casing::Upper => text.to_uppercase(),
            Casing::Lower => text.to_lowercase(),
        }
    }
}

/// Global settings for convert-d.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Input format used when `--from` is not given
    pub default_input: String,
    /// Output format used when `--to` is not given
    pub default_output: String,
    /// Strip `\r` and `\n` from input before converting
    pub ignore_line_breaks: bool,
    pub casing: Casing,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_input: "text".to_string(),
            default_output: "hex".to_string(),
            ignore_line_breaks: false,
            casing: Casing::Keep,
        }
    }
}

/// Keys present in one configuration file. Absent keys leave the
/// current value alone when merged.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct SettingsOverride {
    #[serde(default)]
    pub default_input: Option<String>,
    #[serde(default)]
    pub default_output: Option<String>,
    #[serde(default)]
    pub ignore_line_breaks: Option<bool>,
    #[serde(default)]
    pub casing: Option<Casing>,
}

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    settings: SettingsOverride,
}

impl Settings {
    /// Parses the `[settings]` table of a TOML document.
    pub fn from_toml(content: &str) -> Result<SettingsOverride, toml::de::Error> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.settings)
    }

    /// Loads the built-in settings bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../defaults.toml");
        let mut settings = Self::default();
        settings.merge(Self::from_toml(content)?);
        Ok(settings)
    }

    /// Loads overrides from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<SettingsOverride, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads settings with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in defaults (from library)
    /// 2. `~/.config/convert-d/config.toml` (user overrides)
    /// 3. `./convert-d.toml` (project-local overrides)
    ///
    /// Later files override keys they set. A file that fails to load is
    /// skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("convert-d").join("config.toml");
            settings.merge_optional(&user_config_path);
        }

        settings.merge_optional(Path::new("convert-d.toml"));

        Ok(settings)
    }

    /// Loads the built-in defaults overridden by exactly one file. Unlike
    /// the standard locations, a missing or broken file is an error.
    pub fn load_with_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings = Self::load_default()?;
        let overrides = Self::load_from_file(path)
            .map_err(|e| format!("Failed to load config from {:?}: {}", path, e))?;
        settings.merge(overrides);
        Ok(settings)
    }

    fn merge_optional(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(overrides) => {
                log::debug!("loaded config overrides from {:?}", path);
                self.merge(overrides);
            }
            Err(e) => {
                log::warn!("Failed to load config from {:?}: {}", path, e);
            }
        }
    }

    /// Applies every key set in `other`.
    pub fn merge(&mut self, other: SettingsOverride) {
        if let Some(input) = other.default_input {
            self.default_input = input;
        }
        if let Some(output) = other.default_output {
            self.default_output = output;
        }
        if let Some(ignore) = other.ignore_line_breaks {
            self.ignore_line_breaks = ignore;
        }
        if let Some(casing) = other.casing {
            self.casing = casing;
        }
    }
}
