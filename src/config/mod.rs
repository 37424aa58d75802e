//! @acp:module "Configuration"
//! @acp:summary "Project configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PlanError, Result};
use crate::planner::{Goal, OutputFormat, Tone};

fn default_config_schema() -> String {
    "https://pageplan.dev/schemas/v1/config.schema.json".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

/// @acp:summary "Project configuration (.pageplan.json)"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// JSON Schema URL for validation
    #[serde(rename = "$schema", default = "default_config_schema")]
    pub schema: String,

    #[serde(default = "default_version")]
    pub version: String,

    /// Project catalog merged over the built-in catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Profile values used when the command line leaves them out
    #[serde(default)]
    pub defaults: ProfileDefaults,

    /// Section ids disabled in every category
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled_sections: Vec<String>,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: default_config_schema(),
            version: default_version(),
            catalog: None,
            defaults: ProfileDefaults::default(),
            disabled_sections: Vec::new(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a .pageplan.json file"
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| PlanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| PlanError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config if the file exists; a missing file means defaults
    pub fn load_if_present<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Project catalog path, resolved against the config file's directory
    pub fn catalog_path(&self, config_path: &Path) -> Option<PathBuf> {
        let catalog = self.catalog.as_ref()?;
        if catalog.is_absolute() {
            return Some(catalog.clone());
        }
        let base = config_path.parent().unwrap_or_else(|| Path::new(""));
        Some(base.join(catalog))
    }
}

/// @acp:summary "Fallback profile values"
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<Goal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience_label: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format name: json, markdown or text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl OutputConfig {
    pub fn format(&self) -> Result<OutputFormat> {
        match self.format {
            Some(ref name) => name.parse(),
            None => Ok(OutputFormat::default()),
        }
    }
}
