//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! ## Explain
//!
//! ```text
//! http://x.com/a.gif
//!     auto-orient/             rotate by EXIF orientation
//!     format/gif/              output format gif
//!     sharpen                  sharpen
//!     (blur 10x5 not rendered: gif output)
//! ```
//!
//! ## Presets
//!
//! ```text
//! hero    ?imageMogr2/format/jpeg/quality85/sharpen
//! thumb   ?imageMogr2/auto-orient/thumbnail/200x9999>/format/webp/strip/
//! ```

use crate::config::MorphConfig;
use crate::directive::render::{self, Directive, Step};
use crate::directive::Morph;
use crate::error::DirectiveError;

const INDENT: &str = "    ";

/// Human description of one directive.
fn describe(directive: Directive) -> String {
    match directive {
        Directive::AutoOrient => "rotate by EXIF orientation".to_string(),
        Directive::Thumbnail(resize) => match (resize.width(), resize.height()) {
            (0, h) => format!("height {h}, width proportional"),
            (w, 0) => format!("width {w}, height proportional"),
            (w, h) => format!("fit inside {w}x{h}"),
        },
        Directive::Format(format) => format!("output format {format}"),
        Directive::Strip => "remove metadata".to_string(),
        Directive::Blur(blur) => format!(
            "gaussian blur, radius {} sigma {}",
            blur.radius(),
            blur.sigma()
        ),
        Directive::Quality(quality) => format!("jpeg quality {}", quality.value()),
        Directive::Sharpen => "sharpen".to_string(),
    }
}

/// Short label used in notes for directives the output format drops.
fn label(directive: Directive) -> String {
    match directive {
        Directive::Blur(blur) => format!("blur {}x{}", blur.radius(), blur.sigma()),
        Directive::Quality(quality) => format!("quality {}", quality.value()),
        other => other.segment().trim_end_matches('/').to_string(),
    }
}

/// One line per rendered directive, plus notes for suppressed ones.
pub fn format_explain(morph: &Morph) -> Vec<String> {
    let d = morph.directives();
    let (rendered, dropped): (Vec<Step>, Vec<Step>) =
        render::plan(d).into_iter().partition(|s| s.rendered);

    let mut lines = vec![morph.base_url().to_string()];
    for step in rendered {
        lines.push(format!(
            "{INDENT}{:<24} {}",
            step.directive.segment(),
            describe(step.directive)
        ));
    }
    for step in dropped {
        lines.push(format!(
            "{INDENT}({} not rendered: {} output)",
            label(step.directive),
            d.format
        ));
    }
    lines
}

pub fn print_explain(morph: &Morph) {
    for line in format_explain(morph) {
        println!("{}", line);
    }
}

/// One line per preset: name and the suffix it renders on its own.
pub fn format_presets(config: &MorphConfig) -> Result<Vec<String>, DirectiveError> {
    if config.presets.is_empty() {
        return Ok(vec!["No presets configured".to_string()]);
    }
    let width = config.presets.keys().map(String::len).max().unwrap_or(0);
    let mut lines = Vec::new();
    for (name, preset) in &config.presets {
        let mut morph = Morph::new("<url>")?;
        morph.apply_preset(preset)?;
        lines.push(format!("{name:<width$}  {}", morph.suffix()));
    }
    Ok(lines)
}

pub fn print_presets(config: &MorphConfig) -> Result<(), DirectiveError> {
    for line in format_presets(config)? {
        println!("{}", line);
    }
    Ok(())
}

/// JSON view of a builder: base URL, directive state, and final URL.
pub fn format_json(morph: &Morph) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "base_url": morph.base_url(),
        "directives": morph.directives(),
        "url": morph.to_url(),
    }))
}
