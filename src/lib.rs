//! # Morph
//!
//! Builds `imageMogr2` query suffixes: the transformation instructions an
//! image CDN reads from the URL of the image it serves. Directives are
//! configured through a fluent builder and rendered into one canonical,
//! byte-stable string appended to the source URL.
//!
//! ```text
//! http://x.com/a.jpg?imageMogr2/auto-orient/thumbnail/200x9999>/format/webp/
//! └── base url ────┘└── suffix ──────────────────────────────────────────┘
//! ```
//!
//! Nothing here performs I/O against the image or the service. The crate
//! only assembles text; whether the server honours it is outside its reach.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`directive`] | Directive value types, suffix rendering, and the [`Morph`] builder |
//! | [`error`] | [`DirectiveError`], the single `InvalidArgument` failure |
//! | [`config`] | `morph.toml` presets: loading, merging, validation |
//! | [`output`] | CLI output formatting (explain, presets, JSON) |
//!
//! # Design Decisions
//!
//! ## Validate Eagerly, Render Infallibly
//!
//! Every numeric directive is a validated newtype ([`Quality`], [`Resize`],
//! [`Blur`]) that can only be built through `try_new`. A rejected call leaves
//! the builder unchanged, and [`Morph::to_url`] returns a plain `String`.
//!
//! ## Fixed Output Order
//!
//! The suffix order is part of the service contract, not of the call order.
//! `sharpen()` followed by `auto_orient()` still renders `auto-orient/` first.
//!
//! ## Format-Dependent Directives
//!
//! Blur is silently dropped for GIF output, and quality is rendered only for
//! JPEG. Both are accepted at configuration time regardless of format, since
//! the format may be chosen later in the chain.

pub mod config;
pub mod directive;
pub mod error;
pub mod output;

pub use config::{MorphConfig, Preset};
pub use directive::{Blur, ImageFormat, Morph, Quality, Resize};
pub use error::DirectiveError;
