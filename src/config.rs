use std::path::Path;
use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Main configuration for the Video-Dreamifier
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default filter parameters, overridden by command-line flags
    pub defaults: FilterDefaults,

    /// Output encoding profile
    pub encoder: EncoderProfile,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.defaults.validate()?;
        self.encoder.validate()?;
        Ok(())
    }
}

/// Filter parameters used when the matching flag is not given
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterDefaults {
    /// Slowdown factor (4.0 = quarter speed)
    pub slow: f64,

    /// Gaussian blur sigma
    pub blur: f64,

    /// Output width in pixels, height follows the aspect ratio
    pub width: u32,
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            slow: 4.0,
            blur: 12.0,
            width: 854,
        }
    }
}

impl FilterDefaults {
    fn validate(&self) -> Result<()> {
        validate_slow("defaults.slow", self.slow)?;
        validate_blur("defaults.blur", self.blur)?;
        validate_width("defaults.width", self.width)?;
        Ok(())
    }
}

/// Encoder binary and the fixed output flags passed to it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EncoderProfile {
    /// Executable name or path, looked up on PATH when bare
    pub program: String,

    /// Value for `-c:v`
    pub video_codec: String,

    /// Value for `-b:v`
    pub bitrate: String,

    /// Value for `-pix_fmt`
    pub pixel_format: String,
}

impl Default for EncoderProfile {
    fn default() -> Self {
        Self {
            program: "ffmpeg".to_string(),
            video_codec: "libvpx-vp9".to_string(),
            bitrate: "800k".to_string(),
            pixel_format: "yuv420p".to_string(),
        }
    }
}

impl EncoderProfile {
    fn validate(&self) -> Result<()> {
        let fields = [
            ("encoder.program", &self.program),
            ("encoder.video_codec", &self.video_codec),
            ("encoder.bitrate", &self.bitrate),
            ("encoder.pixel_format", &self.pixel_format),
        ];

        for (key, value) in fields {
            if value.trim().is_empty() {
                return Err(invalid(key, value));
            }
        }

        Ok(())
    }
}

pub(crate) fn validate_slow(key: &str, slow: f64) -> Result<()> {
    if !slow.is_finite() || slow <= 0.0 {
        return Err(invalid(key, slow));
    }
    Ok(())
}

pub(crate) fn validate_blur(key: &str, blur: f64) -> Result<()> {
    if !blur.is_finite() || blur < 0.0 {
        return Err(invalid(key, blur));
    }
    Ok(())
}

pub(crate) fn validate_width(key: &str, width: u32) -> Result<()> {
    if width == 0 {
        return Err(invalid(key, width));
    }
    Ok(())
}

fn invalid(key: &str, value: impl ToString) -> crate::error::DreamifierError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
    .into()
}
