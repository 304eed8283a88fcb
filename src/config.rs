//! Preset configuration.
//!
//! An optional `morph.toml` defines reusable bundles of directives. The file
//! is read as written: unknown keys are rejected, and every preset is
//! validated with the same rules as the builder calls it stands for. A
//! missing file is the same as an empty one.
//!
//! ## Configuration Options
//!
//! ```toml
//! # Applied to every URL before any preset or CLI flag.
//! [defaults]
//! format = "webp"
//!
//! [presets.thumb]
//! auto_orient = true
//! resize = [200, 0]      # [width, height], 0 = proportional
//! strip = true
//!
//! [presets.hero]
//! format = "jpeg"
//! quality = 85           # 1-100, rendered for jpeg only
//! blur = [2, 1]          # [radius, sigma]
//! sharpen = true
//! ```
//!
//! Presets are sparse: omitted keys leave the builder unchanged. Boolean
//! keys can only switch a directive on.

use crate::directive::{Blur, ImageFormat, Quality, Resize};
use crate::error::DirectiveError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "morph.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error in '{section}': {source}")]
    Validation {
        section: String,
        source: DirectiveError,
    },
    #[error("Unknown preset '{0}'")]
    UnknownPreset(String),
}

/// A named bundle of directives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Preset {
    pub auto_orient: bool,
    /// `[width, height]`.
    pub resize: Option<[i64; 2]>,
    pub format: Option<ImageFormat>,
    pub quality: Option<i64>,
    pub strip: bool,
    /// `[radius, sigma]`.
    pub blur: Option<[i64; 2]>,
    pub sharpen: bool,
}

impl Preset {
    /// Check every value with the builder's rules without touching a builder.
    pub fn validate(&self) -> Result<(), DirectiveError> {
        if let Some([width, height]) = self.resize {
            Resize::try_new(width, height)?;
        }
        if let Some(quality) = self.quality {
            Quality::try_new(quality)?;
        }
        if let Some([radius, sigma]) = self.blur {
            Blur::try_new(radius, sigma)?;
        }
        Ok(())
    }
}

/// Contents of `morph.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MorphConfig {
    /// Applied to every URL before presets and explicit options.
    pub defaults: Preset,
    /// Named presets, selectable with `--preset`.
    pub presets: BTreeMap<String, Preset>,
}

impl MorphConfig {
    /// Validate the defaults and every preset.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.defaults
            .validate()
            .map_err(|source| ConfigError::Validation {
                section: "defaults".into(),
                source,
            })?;
        for (name, preset) in &self.presets {
            preset.validate().map_err(|source| ConfigError::Validation {
                section: format!("presets.{name}"),
                source,
            })?;
        }
        Ok(())
    }

    pub fn preset(&self, name: &str) -> Result<&Preset, ConfigError> {
        self.presets
            .get(name)
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Load config from `path`, falling back to an empty config when it is absent.
///
/// Unknown keys are rejected, and every preset is validated before it is
/// returned.
pub fn load_config(path: &Path) -> Result<MorphConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using empty config");
        return Ok(MorphConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: MorphConfig = toml::from_str(&content)?;
    config.validate()?;
    tracing::debug!(
        path = %path.display(),
        presets = config.presets.len(),
        "loaded config file"
    );
    Ok(config)
}

/// Returns a fully-commented stock `morph.toml`.
///
/// Used by the `gen-config` CLI command. Every example is commented out, so
/// the file parses to [`MorphConfig::default`].
pub fn stock_config_toml() -> &'static str {
    r##"# Morph Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Unknown keys will cause an error.
#
# Directive keys (usable in [defaults] and in every [presets.NAME]):
#   auto_orient = true        rotate by EXIF orientation
#   resize = [W, H]           fit inside WxH; 0 on one side = proportional
#   format = "webp"           gif | jpeg | png | webp (default webp)
#   quality = 85              1-100, only rendered for jpeg
#   strip = true              remove embedded metadata
#   blur = [radius, sigma]    radius 1-360, sigma > 0; ignored for gif
#   sharpen = true
#
# Order of application: [defaults], then --preset, then explicit CLI flags.

# ---------------------------------------------------------------------------
# Defaults applied to every URL
# ---------------------------------------------------------------------------
[defaults]
# format = "webp"

# ---------------------------------------------------------------------------
# Named presets, selected with --preset NAME
# ---------------------------------------------------------------------------
[presets]
# [presets.thumb]
# auto_orient = true
# resize = [200, 0]
# strip = true
#
# [presets.hero]
# format = "jpeg"
# quality = 85
# sharpen = true
"##
}
