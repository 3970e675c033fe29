use std::ffi::OsStr;
use std::fs::read_to_string;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::errors::{GuidelineConfigError, GuidelineConfigResult};

///
/// Thresholds used to judge whether a sequence is easy to synthesize.
///
/// Every field has a default, so a config file only needs to list the
/// values it changes.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SynthesisGuidelines {
    pub min_length: usize,
    pub gc_min: f64,
    pub gc_max: f64,
    pub max_gc_variation: f64,
    pub gc_window: usize,
    pub repeat_min_length: usize,
    pub homopolymer_min_length: usize,
    pub max_homopolymer_examples: usize,
}

impl Default for SynthesisGuidelines {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            gc_min: DEFAULT_GC_MIN,
            gc_max: DEFAULT_GC_MAX,
            max_gc_variation: DEFAULT_MAX_GC_VARIATION,
            gc_window: DEFAULT_GC_WINDOW,
            repeat_min_length: DEFAULT_REPEAT_MIN_LENGTH,
            homopolymer_min_length: DEFAULT_HOMOPOLYMER_MIN_LENGTH,
            max_homopolymer_examples: DEFAULT_MAX_HOMOPOLYMER_EXAMPLES,
        }
    }
}

#[derive(Debug)]
pub enum GuidelineInputFileType {
    Toml,
    Yaml,
    Json,
}

impl GuidelineInputFileType {
    ///
    /// Determine the type of the guideline config file based on its extension.
    /// # Arguments
    /// * `path` - A reference to a `Path` object representing the file path.
    ///
    pub fn from_path(path: &Path) -> GuidelineConfigResult<Self> {
        match path.extension().and_then(OsStr::to_str) {
            Some("toml") => Ok(GuidelineInputFileType::Toml),
            Some("yaml") | Some("yml") => Ok(GuidelineInputFileType::Yaml),
            Some("json") => Ok(GuidelineInputFileType::Json),
            _ => Err(GuidelineConfigError::InvalidFileType),
        }
    }
}

impl SynthesisGuidelines {
    ///
    /// Check that the thresholds describe a usable configuration.
    ///
    pub fn validate(&self) -> GuidelineConfigResult<()> {
        for (name, value) in [
            ("gc_min", self.gc_min),
            ("gc_max", self.gc_max),
            ("max_gc_variation", self.max_gc_variation),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(GuidelineConfigError::InvalidThreshold(format!(
                    "{} ({}) must be a percentage between 0 and 100",
                    name, value
                )));
            }
        }
        if self.gc_min > self.gc_max {
            return Err(GuidelineConfigError::InvalidThreshold(format!(
                "gc_min ({}) is greater than gc_max ({})",
                self.gc_min, self.gc_max
            )));
        }
        if self.gc_window == 0 {
            return Err(GuidelineConfigError::InvalidThreshold(
                "gc_window must be at least 1".to_string(),
            ));
        }
        if self.repeat_min_length == 0 {
            return Err(GuidelineConfigError::InvalidThreshold(
                "repeat_min_length must be at least 1".to_string(),
            ));
        }
        if self.homopolymer_min_length == 0 {
            return Err(GuidelineConfigError::InvalidThreshold(
                "homopolymer_min_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl TryFrom<&Path> for SynthesisGuidelines {
    type Error = GuidelineConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let file_type = GuidelineInputFileType::from_path(path)?;
        let content = read_to_string(path)?;

        let guidelines: SynthesisGuidelines = match file_type {
            GuidelineInputFileType::Toml => toml::from_str(&content)?,
            GuidelineInputFileType::Yaml => serde_yaml::from_str(&content)?,
            GuidelineInputFileType::Json => serde_json::from_str(&content)?,
        };
        guidelines.validate()?;

        info!("Loaded synthesis guidelines from {}", path.display());
        Ok(guidelines)
    }
}
