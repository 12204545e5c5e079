//! Engine configuration (stored in ~/.config/mathrec/config.toml)

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MathrecError, Result};
use crate::similarity::Metric;
use crate::text::Normalizer;

const CONFIG_DIR: &str = "mathrec";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "MATHREC_CONFIG_DIR";

/// Tunables for recommendation and clustering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Similarity metric name
    pub metric: String,

    /// Weight a term must exceed to count for the Jaccard metric
    pub jaccard_threshold: f64,

    /// Number of recommendations returned
    pub top_n: usize,

    /// Recommendations must score strictly above this
    pub min_similarity: f64,

    /// Default threshold for clustering
    pub cluster_threshold: f64,

    /// Extra whole-word aliases, applied after the built-in dictionary
    pub term_aliases: BTreeMap<String, String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            metric: Metric::Cosine.to_string(),
            jaccard_threshold: 0.0,
            top_n: 3,
            min_similarity: 0.1,
            cluster_threshold: 0.7,
            term_aliases: BTreeMap::new(),
        }
    }
}

impl EngineConfig {
    /// Default config location, honoring `MATHREC_CONFIG_DIR`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    MathrecError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from the default location; a missing file yields defaults
    pub fn discover() -> Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            MathrecError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| MathrecError::Other(format!("failed to serialize config: {}", e)))?;

        fs::write(path, content).map_err(|e| {
            MathrecError::Other(format!(
                "failed to write config to {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.metric()?;
        if !(-1.0..=1.0).contains(&self.min_similarity) {
            crate::bail_invalid!("min_similarity", self.min_similarity);
        }
        if !self.jaccard_threshold.is_finite() {
            crate::bail_invalid!("jaccard_threshold", self.jaccard_threshold);
        }
        if !self.cluster_threshold.is_finite() {
            crate::bail_invalid!("cluster_threshold", self.cluster_threshold);
        }
        Ok(())
    }

    /// Parsed metric; Jaccard picks up `jaccard_threshold`
    pub fn metric(&self) -> Result<Metric> {
        match self.metric.parse::<Metric>()? {
            Metric::Jaccard { .. } => Ok(Metric::Jaccard {
                threshold: self.jaccard_threshold,
            }),
            metric => Ok(metric),
        }
    }

    /// Normalizer with the configured aliases appended
    pub fn normalizer(&self) -> Result<Normalizer> {
        if self.term_aliases.is_empty() {
            return Ok(Normalizer::builtin().clone());
        }
        Normalizer::with_aliases(&self.term_aliases)
    }
}
