use std::fs;
use std::path::{Component, Path};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

pub const CONFIG_FILE: &str = "stitch.yaml";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory holding the shared fragments (navbar, sidebar, wave).
    pub components_dir: String,
    /// Directory holding per-page content sources; also receives the
    /// legacy flat mirror when it exists.
    pub pages_dir: String,
    /// Where the clean-URL tree is written. Unset means in place at the
    /// project root, next to the sources.
    pub output_dir: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, JsonValue>,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&raw)
            .with_context(|| format!("{}: invalid YAML", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    pub fn validate(&self, origin: &Path) -> Result<()> {
        validate_dir_value("components_dir", &self.components_dir, origin)?;
        validate_dir_value("pages_dir", &self.pages_dir, origin)?;
        if let Some(output_dir) = self.output_dir.as_deref() {
            validate_dir_value("output_dir", output_dir, origin)?;
        }
        Ok(())
    }

    /// True when the clean-URL tree is written somewhere other than the
    /// project root itself.
    pub fn writes_out_of_tree(&self) -> bool {
        match self.output_dir.as_deref() {
            None | Some(".") => false,
            Some(_) => true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            components_dir: "components".to_string(),
            pages_dir: "pages".to_string(),
            output_dir: None,
            extra: serde_json::Map::new(),
        }
    }
}

fn validate_dir_value(key: &str, value: &str, origin: &Path) -> Result<()> {
    if value.trim().is_empty() {
        bail!("{}: {} must not be empty", origin.display(), key);
    }
    let path = Path::new(value);
    if path.is_absolute() {
        bail!(
            "{}: {} must be relative to the project root",
            origin.display(),
            key
        );
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        bail!(
            "{}: {} must not point outside the project root",
            origin.display(),
            key
        );
    }
    Ok(())
}
