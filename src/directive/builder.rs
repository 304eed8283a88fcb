//! The directive builder.
//!
//! [`Morph`] collects directives for one source image and renders them as a
//! URL. Validating calls check their arguments immediately and return a
//! [`Result`]; a rejected call leaves the builder exactly as it was.
//!
//! ```
//! # use morph::{ImageFormat, Morph};
//! # fn main() -> Result<(), morph::DirectiveError> {
//! let url = Morph::new("http://x.com/a.jpg")?
//!     .auto_orient()
//!     .resize(200, 0)?
//!     .format(ImageFormat::Webp)
//!     .to_url();
//! assert_eq!(url, "http://x.com/a.jpg?imageMogr2/auto-orient/thumbnail/200x9999>/format/webp/");
//! # Ok(())
//! # }
//! ```
//!
//! `Morph` is plain owned data, so it is `Send + Sync`, but it has no
//! internal locking: callers sharing one builder between threads must
//! synchronize writes themselves.

use super::params::{Blur, ImageFormat, Quality, Resize};
use super::render::{Directives, render_suffix};
use crate::config::Preset;
use crate::error::{DirectiveError, Result};
use std::fmt;

/// Builder for an imageMogr2 URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morph {
    base_url: String,
    directives: Directives,
}

impl Morph {
    /// Start a builder for `base_url`. Fails if the URL is empty.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            tracing::debug!("rejected empty base url");
            return Err(DirectiveError::invalid("image url must not be blank"));
        }
        Ok(Self {
            base_url,
            directives: Directives::default(),
        })
    }

    /// Rotate according to the source image's EXIF orientation.
    pub fn auto_orient(&mut self) -> &mut Self {
        self.directives.auto_orient = true;
        self
    }

    /// Scale down to fit `width x height`. A zero side scales proportionally.
    pub fn resize(&mut self, width: i64, height: i64) -> Result<&mut Self> {
        let resize = Resize::try_new(width, height).inspect_err(|err| {
            tracing::debug!(width, height, %err, "rejected resize");
        })?;
        self.directives.resize = Some(resize);
        Ok(self)
    }

    pub fn format(&mut self, format: ImageFormat) -> &mut Self {
        self.directives.format = format;
        self
    }

    /// JPEG quality. Accepted for any format but only rendered for JPEG.
    pub fn quality(&mut self, quality: i64) -> Result<&mut Self> {
        let quality = Quality::try_new(quality).inspect_err(|err| {
            tracing::debug!(quality, %err, "rejected quality");
        })?;
        self.directives.quality = Some(quality);
        Ok(self)
    }

    /// Remove embedded metadata (EXIF, color profiles).
    pub fn strip(&mut self) -> &mut Self {
        self.directives.strip = true;
        self
    }

    /// Gaussian blur. Not rendered when the output format is GIF.
    pub fn blur(&mut self, radius: i64, sigma: i64) -> Result<&mut Self> {
        let blur = Blur::try_new(radius, sigma).inspect_err(|err| {
            tracing::debug!(radius, sigma, %err, "rejected blur");
        })?;
        self.directives.blur = Some(blur);
        Ok(self)
    }

    pub fn sharpen(&mut self) -> &mut Self {
        self.directives.sharpen = true;
        self
    }

    /// Apply every option a preset sets.
    ///
    /// All-or-nothing: if any preset value is invalid, the builder keeps the
    /// state it had before the call.
    pub fn apply_preset(&mut self, preset: &Preset) -> Result<&mut Self> {
        let mut staged = self.clone();
        if preset.auto_orient {
            staged.auto_orient();
        }
        if let Some([width, height]) = preset.resize {
            staged.resize(width, height)?;
        }
        if let Some(format) = preset.format {
            staged.format(format);
        }
        if let Some(quality) = preset.quality {
            staged.quality(quality)?;
        }
        if preset.strip {
            staged.strip();
        }
        if let Some([radius, sigma]) = preset.blur {
            staged.blur(radius, sigma)?;
        }
        if preset.sharpen {
            staged.sharpen();
        }
        self.directives = staged.directives;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn directives(&self) -> &Directives {
        &self.directives
    }

    /// Render only the `?imageMogr2/...` suffix.
    pub fn suffix(&self) -> String {
        render_suffix(&self.directives)
    }

    /// Render the base URL followed by the suffix.
    pub fn to_url(&self) -> String {
        format!("{}{}", self.base_url, self.suffix())
    }
}

impl fmt::Display for Morph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base_url, self.suffix())
    }
}
