//! Suffix generation.
//!
//! The suffix is `?imageMogr2/` followed by the active directives in a fixed
//! order, independent of the order they were configured in:
//!
//! ```text
//! ?imageMogr2/ [auto-orient/] [thumbnail/<W>x<H>>/] format/<fmt>/
//!              [strip/] [blur/<r>x<s>/] [quality<N>/] [sharpen]
//! ```
//!
//! Two directives depend on the output format:
//! - `blur/` is dropped for GIF output (the service does not blur GIFs).
//! - `quality<N>/` is only emitted for JPEG output.
//!
//! `sharpen` never carries a trailing slash; it is always last.

use super::calculations::dimension_expr;
use super::params::{Blur, ImageFormat, Quality, Resize};
use serde::Serialize;

pub const NAMESPACE: &str = "?imageMogr2/";
pub const AUTO_ORIENT: &str = "auto-orient";
pub const THUMBNAIL: &str = "thumbnail";
pub const FORMAT: &str = "format";
pub const STRIP: &str = "strip";
pub const BLUR: &str = "blur";
pub const QUALITY: &str = "quality";
pub const SHARPEN: &str = "sharpen";

/// Accumulated directive state, without the base URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Directives {
    pub auto_orient: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize: Option<Resize>,
    pub strip: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<Blur>,
    pub sharpen: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<Quality>,
    pub format: ImageFormat,
}

/// One configured directive, carrying the values it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    AutoOrient,
    Thumbnail(Resize),
    Format(ImageFormat),
    Strip,
    Blur(Blur),
    Quality(Quality),
    Sharpen,
}

impl Directive {
    /// Text of this directive in the suffix.
    pub fn segment(self) -> String {
        match self {
            Self::AutoOrient => format!("{AUTO_ORIENT}/"),
            Self::Thumbnail(resize) => format!("{THUMBNAIL}/{}>/", dimension_expr(resize)),
            Self::Format(format) => format!("{FORMAT}/{format}/"),
            Self::Strip => format!("{STRIP}/"),
            Self::Blur(blur) => format!("{BLUR}/{}x{}/", blur.radius(), blur.sigma()),
            Self::Quality(quality) => format!("{QUALITY}{}/", quality.value()),
            Self::Sharpen => SHARPEN.to_string(),
        }
    }
}

/// A configured directive and whether the output format lets it render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub directive: Directive,
    pub rendered: bool,
}

/// Every configured directive in output order, each marked with whether it
/// is rendered. This is the only place the format-dependent rules live.
pub fn plan(d: &Directives) -> Vec<Step> {
    let step = |directive, rendered| Step {
        directive,
        rendered,
    };
    let mut out = Vec::new();

    if d.auto_orient {
        out.push(step(Directive::AutoOrient, true));
    }
    if let Some(resize) = d.resize {
        out.push(step(Directive::Thumbnail(resize), true));
    }
    out.push(step(Directive::Format(d.format), true));
    if d.strip {
        out.push(step(Directive::Strip, true));
    }
    if let Some(blur) = d.blur {
        out.push(step(Directive::Blur(blur), d.format != ImageFormat::Gif));
    }
    if let Some(quality) = d.quality {
        out.push(step(Directive::Quality(quality), d.format == ImageFormat::Jpeg));
    }
    if d.sharpen {
        out.push(step(Directive::Sharpen, true));
    }

    out
}

/// Render each emitted directive as its own segment, in output order.
///
/// Concatenating the segments after [`NAMESPACE`] yields the suffix.
pub fn segments(d: &Directives) -> Vec<String> {
    plan(d)
        .into_iter()
        .filter(|s| s.rendered)
        .map(|s| s.directive.segment())
        .collect()
}

/// Render the full suffix, namespace marker included.
pub fn render_suffix(d: &Directives) -> String {
    let suffix = segments(d).into_iter().fold(NAMESPACE.to_string(), |mut acc, s| {
        acc.push_str(&s);
        acc
    });
    tracing::trace!(%suffix, "rendered directive suffix");
    suffix
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blur(r: i64, s: i64) -> Option<Blur> {
        Some(Blur::try_new(r, s).unwrap())
    }

    #[test]
    fn defaults_render_format_only() {
        assert_eq!(render_suffix(&Directives::default()), "?imageMogr2/format/webp/");
    }

    #[test]
    fn every_directive_in_fixed_order() {
        let d = Directives {
            auto_orient: true,
            resize: Some(Resize::try_new(300, 200).unwrap()),
            strip: true,
            blur: blur(3, 2),
            sharpen: true,
            quality: Some(Quality::try_new(75).unwrap()),
            format: ImageFormat::Jpeg,
        };
        assert_eq!(
            render_suffix(&d),
            "?imageMogr2/auto-orient/thumbnail/300x200>/format/jpeg/strip/blur/3x2/quality75/sharpen"
        );
    }

    #[test]
    fn gif_drops_blur() {
        let d = Directives {
            blur: blur(10, 5),
            format: ImageFormat::Gif,
            ..Directives::default()
        };
        assert_eq!(render_suffix(&d), "?imageMogr2/format/gif/");
    }

    #[test]
    fn blur_kept_for_non_gif_formats() {
        for format in [ImageFormat::Jpeg, ImageFormat::Png, ImageFormat::Webp] {
            let d = Directives {
                blur: blur(10, 5),
                format,
                ..Directives::default()
            };
            assert!(render_suffix(&d).contains("/blur/10x5/"), "{format}");
        }
    }

    #[test]
    fn quality_only_for_jpeg() {
        let quality = Some(Quality::try_new(80).unwrap());
        for format in [ImageFormat::Gif, ImageFormat::Png, ImageFormat::Webp] {
            let d = Directives {
                quality,
                format,
                ..Directives::default()
            };
            assert!(!render_suffix(&d).contains("quality"), "{format}");
        }
        let d = Directives {
            quality,
            format: ImageFormat::Jpeg,
            ..Directives::default()
        };
        assert_eq!(render_suffix(&d), "?imageMogr2/format/jpeg/quality80/");
    }

    #[test]
    fn jpeg_without_quality_omits_segment() {
        let d = Directives {
            format: ImageFormat::Jpeg,
            ..Directives::default()
        };
        assert_eq!(render_suffix(&d), "?imageMogr2/format/jpeg/");
    }

    #[test]
    fn sharpen_has_no_trailing_slash() {
        let d = Directives {
            sharpen: true,
            ..Directives::default()
        };
        assert!(render_suffix(&d).ends_with("/sharpen"));
    }

    #[test]
    fn plan_marks_format_suppressed_directives() {
        let d = Directives {
            blur: blur(10, 5),
            quality: Some(Quality::try_new(80).unwrap()),
            format: ImageFormat::Gif,
            ..Directives::default()
        };
        let steps = plan(&d);
        assert_eq!(
            steps,
            vec![
                Step {
                    directive: Directive::Format(ImageFormat::Gif),
                    rendered: true
                },
                Step {
                    directive: Directive::Blur(Blur::try_new(10, 5).unwrap()),
                    rendered: false
                },
                Step {
                    directive: Directive::Quality(Quality::try_new(80).unwrap()),
                    rendered: false
                },
            ]
        );
    }

    #[test]
    fn segments_are_rendered_plan_steps() {
        let d = Directives {
            auto_orient: true,
            blur: blur(2, 1),
            quality: Some(Quality::try_new(60).unwrap()),
            format: ImageFormat::Png,
            sharpen: true,
            ..Directives::default()
        };
        let from_plan: Vec<String> = plan(&d)
            .into_iter()
            .filter(|s| s.rendered)
            .map(|s| s.directive.segment())
            .collect();
        assert_eq!(segments(&d), from_plan);
        assert_eq!(
            segments(&d),
            vec!["auto-orient/", "format/png/", "blur/2x1/", "sharpen"]
        );
    }

    #[test]
    fn segments_concatenate_to_suffix() {
        let d = Directives {
            auto_orient: true,
            strip: true,
            ..Directives::default()
        };
        let segs = segments(&d);
        assert_eq!(segs, vec!["auto-orient/", "format/webp/", "strip/"]);
        assert_eq!(format!("{NAMESPACE}{}", segs.concat()), render_suffix(&d));
    }
}
