//! On-disk configuration.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{LinkError, LinkResult};
use crate::options::Options;
use crate::render::ButtonSet;

fn default_include_description() -> bool {
    true
}

fn is_true(b: &bool) -> bool {
    *b
}

/// Configuration at ~/.config/outlook-buttons/config.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonsConfig {
    #[serde(default = "default_include_description", skip_serializing_if = "is_true")]
    pub include_description: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_word_limit: Option<usize>,

    /// IANA name of the site timezone, e.g. "America/New_York"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(default)]
    pub buttons: ButtonSet,
}

impl Default for ButtonsConfig {
    fn default() -> Self {
        ButtonsConfig {
            include_description: true,
            description_word_limit: None,
            timezone: None,
            buttons: ButtonSet::default(),
        }
    }
}

impl ButtonsConfig {
    pub fn config_path() -> LinkResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| LinkError::Config("Could not determine config directory".into()))?
            .join("outlook-buttons");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, falling back to defaults if the file is missing.
    pub fn load() -> LinkResult<Self> {
        Self::load_or_default(&Self::config_path()?)
    }

    pub fn load_or_default(path: &Path) -> LinkResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    pub fn load_from(path: &Path) -> LinkResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LinkError::Config(format!("Could not read config file {}: {e}", path.display()))
        })?;

        toml::from_str(&contents).map_err(|e| {
            LinkError::Config(format!("Could not parse config file {}: {e}", path.display()))
        })
    }

    /// Save to ~/.config/outlook-buttons/config.toml
    pub fn save(&self) -> LinkResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> LinkResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| LinkError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LinkError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| LinkError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Builder options described by this config.
    pub fn options(&self) -> LinkResult<Options> {
        let timezone = self.timezone.as_deref().map(parse_timezone).transpose()?;

        Ok(Options {
            include_description: self.include_description,
            description_word_limit: self.description_word_limit,
            timezone,
        })
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> LinkResult<()> {
        let contents = "\
# outlook-buttons configuration

# Send the event description as the message body:
# include_description = true

# Cut the description to this many words:
# description_word_limit = 50

# Site timezone; times with an offset are shown in this zone:
# timezone = \"America/New_York\"

[buttons]
# live = true
# office = true
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LinkError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| LinkError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

pub fn parse_timezone(name: &str) -> LinkResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| LinkError::UnknownTimezone(name.to_string()))
}
