//! Pure calculation functions for thumbnail dimensions.
//!
//! All functions here are pure and testable without a builder.

use super::params::Resize;

/// Placeholder for an unconstrained axis. The service fits the image inside
/// the box, so a side this large never limits the result.
pub const SENTINEL_DIMENSION: u32 = 9999;

/// Resolve a [`Resize`] into the box sent to the `thumbnail/` directive.
///
/// # Examples
/// ```
/// # use morph::directive::{Resize, thumbnail_box};
/// // Fixed width, proportional height
/// assert_eq!(thumbnail_box(Resize::try_new(200, 0).unwrap()), (200, 9999));
///
/// // Fit inside 300x200
/// assert_eq!(thumbnail_box(Resize::try_new(300, 200).unwrap()), (300, 200));
/// ```
pub fn thumbnail_box(resize: Resize) -> (u32, u32) {
    match (resize.width(), resize.height()) {
        (0, h) => (SENTINEL_DIMENSION, h),
        (w, 0) => (w, SENTINEL_DIMENSION),
        (w, h) => (w, h),
    }
}

/// Format the thumbnail box as `<W>x<H>`.
pub fn dimension_expr(resize: Resize) -> String {
    let (w, h) = thumbnail_box(resize);
    format!("{w}x{h}")
}
