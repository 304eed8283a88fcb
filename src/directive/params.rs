//! Parameter types for imageMogr2 directives.
//!
//! These types describe *what* the remote service should do. Each numeric
//! type can only be built through a `try_new` constructor that enforces its
//! accepted range, so a value that exists is always renderable. The
//! [`builder`](super::builder) stores them; the [`render`](super::render)
//! module turns them into text.
//!
//! ## Types
//!
//! - [`ImageFormat`] — Output format (gif, jpeg, png, webp). Defaults to webp.
//! - [`Quality`] — JPEG encoding quality, 1–100.
//! - [`Resize`] — Thumbnail bounding box. Zero on one axis means "scale proportionally".
//! - [`Blur`] — Gaussian blur radius (1–360) and sigma (> 0).
//!
//! Constructors take `i64` so negative inputs are representable and rejected
//! with [`DirectiveError::InvalidArgument`] rather than failing to type-check.

use crate::error::{DirectiveError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Gif,
    Jpeg,
    Png,
    #[default]
    Webp,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 4] = [Self::Gif, Self::Jpeg, Self::Png, Self::Webp];

    /// Lowercase name as it appears in the `format/` directive.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gif => "gif",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Webp => "webp",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = DirectiveError;

    /// Case-insensitive; `jpg` is accepted as an alias for `jpeg`.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "gif" => Ok(Self::Gif),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "webp" => Ok(Self::Webp),
            _ => Err(DirectiveError::invalid(format!(
                "unknown image format '{s}' (expected gif, jpeg, png or webp)"
            ))),
        }
    }
}

/// JPEG encoding quality (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Quality(u32);

impl Quality {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 100;

    pub fn try_new(value: i64) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DirectiveError::invalid(format!(
                "quality must be within [1, 100], got {value}"
            )));
        }
        Ok(Self(value as u32))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

/// Thumbnail bounding box.
///
/// - both sides positive: fit inside `width x height`, keeping aspect ratio
/// - `width == 0`: height is fixed, width scales proportionally
/// - `height == 0`: width is fixed, height scales proportionally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resize {
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl Resize {
    pub fn try_new(width: i64, height: i64) -> Result<Self> {
        if width < 0 {
            return Err(DirectiveError::invalid(format!(
                "width must be a positive number or 0, got {width}"
            )));
        }
        if height < 0 {
            return Err(DirectiveError::invalid(format!(
                "height must be a positive number or 0, got {height}"
            )));
        }
        if width == 0 && height == 0 {
            return Err(DirectiveError::invalid(
                "at least one of width and height must be positive",
            ));
        }
        Ok(Self {
            width: to_u32("width", width)?,
            height: to_u32("height", height)?,
        })
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn height(self) -> u32 {
        self.height
    }
}

/// Gaussian blur parameters.
///
/// - `radius`: blur radius in pixels, 1-360
/// - `sigma`: standard deviation of the distribution, must be greater than 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Blur {
    pub(crate) radius: u32,
    pub(crate) sigma: u32,
}

impl Blur {
    pub const MAX_RADIUS: i64 = 360;

    pub fn try_new(radius: i64, sigma: i64) -> Result<Self> {
        if !(1..=Self::MAX_RADIUS).contains(&radius) {
            return Err(DirectiveError::invalid(format!(
                "blur radius must be within [1, 360], got {radius}"
            )));
        }
        if sigma <= 0 {
            return Err(DirectiveError::invalid(format!(
                "blur sigma must be greater than 0, got {sigma}"
            )));
        }
        Ok(Self {
            radius: radius as u32,
            sigma: to_u32("blur sigma", sigma)?,
        })
    }

    pub fn radius(self) -> u32 {
        self.radius
    }

    pub fn sigma(self) -> u32 {
        self.sigma
    }
}

fn to_u32(name: &str, value: i64) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| DirectiveError::invalid(format!("{name} is too large, got {value}")))
}
