//! imageMogr2 directive model.
//!
//! | Directive | Token | Rendered when |
//! |---|---|---|
//! | **Auto-orient** | `auto-orient/` | enabled |
//! | **Thumbnail** | `thumbnail/<W>x<H>>/` | resize set |
//! | **Format** | `format/<fmt>/` | always |
//! | **Strip** | `strip/` | enabled |
//! | **Blur** | `blur/<r>x<s>/` | set and format is not GIF |
//! | **Quality** | `quality<N>/` | set and format is JPEG |
//! | **Sharpen** | `sharpen` | enabled |
//!
//! The module is split into:
//! - **Parameters**: validated value types for each directive
//! - **Calculations**: pure thumbnail box math
//! - **Render**: state to suffix, in fixed order
//! - **Builder**: [`Morph`], the fluent front end

pub mod builder;
mod calculations;
mod params;
pub mod render;

pub use builder::Morph;
pub use calculations::{SENTINEL_DIMENSION, dimension_expr, thumbnail_box};
pub use params::{Blur, ImageFormat, Quality, Resize};
pub use render::{Directives, render_suffix};
