use std::path::{Path, PathBuf};

use digiwise_scoring::config::{RiskThresholds, ScoringConfig};
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const DEFAULT_CATALOG: &str = "digital_wellness";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigiwiseConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Built-in catalog scored when no catalog file is given.
    #[serde(default = "default_catalog")]
    pub catalog_id: String,
    #[serde(default)]
    pub scoring: ScoringConfig,
    /// Tera template used instead of the built-in text report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_template: Option<PathBuf>,
}

impl Default for DigiwiseConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            catalog_id: default_catalog(),
            scoring: ScoringConfig::default(),
            report_template: None,
        }
    }
}

fn default_catalog() -> String {
    DEFAULT_CATALOG.to_string()
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("digiwise"))
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config at `path`, or the default location when `None`.
///
/// A missing file at the default location means default settings; a
/// missing explicitly requested file is an error.
pub fn load_config(path: Option<&Path>) -> eyre::Result<DigiwiseConfig> {
    match path {
        Some(path) => load_config_from(path),
        None => {
            let path = default_config_path()?;
            if path.exists() {
                load_config_from(&path)
            } else {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(DigiwiseConfig::default())
            }
        }
    }
}

pub fn load_config_from(path: &Path) -> eyre::Result<DigiwiseConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    let config = parse_config(&contents)?;
    tracing::debug!(path = %path.display(), version = config.config_version, "config loaded");
    Ok(config)
}

/// Parse, migrate and validate a config document.
pub fn parse_config(contents: &str) -> eyre::Result<DigiwiseConfig> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: DigiwiseConfig = serde_json::from_value(migrated)?;
    config.scoring.validate()?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update DigiWise."
        ));
    }

    // v0 → v1: top-level `weights` and flat `boundaries` move under `scoring`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

        let mut scoring = serde_json::Map::new();
        if let Some(weights) = obj.remove("weights") {
            scoring.insert("weights".to_string(), weights);
        }
        if let Some(boundaries) = obj.remove("boundaries") {
            let boundaries: Vec<u8> = serde_json::from_value(boundaries)?;
            let thresholds = RiskThresholds::from_boundaries(&boundaries)?;
            scoring.insert("thresholds".to_string(), serde_json::to_value(thresholds)?);
        }
        if !scoring.is_empty() {
            obj.insert("scoring".to_string(), serde_json::Value::Object(scoring));
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (moved weights and boundaries under scoring)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &DigiwiseConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
