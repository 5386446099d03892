use crate::cli::output::OutputFormat;
use crate::error::{FinderError, Result};
use directories::ProjectDirs;
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".classfinder.toml";

#[derive(Debug, Clone)]
pub struct Config {
    /// Regexes over the qualified name; matching classes are skipped
    pub exclude_patterns: Vec<String>,

    /// Candidate count from which matching runs on the rayon pool
    pub parallel_threshold: usize,

    pub format: OutputFormat,

    pub color: bool,
}

/// One config file. Only the keys present in the file are set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub exclude_patterns: Vec<String>,
    pub parallel_threshold: Option<usize>,
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| FinderError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        toml::from_str(&contents).map_err(|source| FinderError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exclude_patterns: Vec::new(),
            parallel_threshold: 4096,
            format: OutputFormat::default(),
            color: true,
        }
    }
}

impl Config {
    /// Load configuration with priority: explicit file > local config > global config > defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut paths = Vec::new();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                paths.push(global_path);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            paths.push(local_path);
        }

        if let Some(path) = explicit {
            paths.push(path.to_path_buf());
        }

        Self::load_layers(&paths)
    }

    /// Apply config files in order, later files win
    pub fn load_layers(paths: &[PathBuf]) -> Result<Self> {
        paths.iter().try_fold(Self::default(), |config, path| {
            Ok(config.merge(ConfigLayer::from_file(path)?))
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::default().merge(ConfigLayer::from_file(path)?))
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        // Exclusions accumulate, every other key set in the layer overrides
        self.exclude_patterns.extend(layer.exclude_patterns);
        if let Some(threshold) = layer.parallel_threshold {
            self.parallel_threshold = threshold;
        }
        if let Some(format) = layer.format {
            self.format = format;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        self
    }

    /// Compile the exclude patterns, skipping the ones that don't parse
    pub fn exclude_regexes(&self) -> Vec<Regex> {
        self.exclude_patterns
            .iter()
            .filter_map(|pattern| match Regex::new(pattern) {
                Ok(re) => Some(re),
                Err(e) => {
                    tracing::warn!(pattern = %pattern, error = %e, "invalid exclude pattern, skipping");
                    None
                }
            })
            .collect()
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "classfinder").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
