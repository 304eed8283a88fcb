use clap::{Parser, Subcommand};
use morph::{ImageFormat, Morph, MorphConfig, config, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Directive flags shared by `url` and `explain`.
#[derive(clap::Args, Clone)]
struct DirectiveArgs {
    /// Source image URL
    base_url: String,

    /// Apply a preset from the config file before the flags below
    #[arg(long)]
    preset: Option<String>,

    /// Rotate by EXIF orientation
    #[arg(long)]
    auto_orient: bool,

    /// Fit inside WxH; 0 on one side scales proportionally (e.g. 200x0)
    #[arg(long, value_name = "WxH", value_parser = parse_pair, allow_hyphen_values = true)]
    resize: Option<(i64, i64)>,

    /// Output format: gif, jpeg, png or webp
    #[arg(long, value_parser = parse_format)]
    format: Option<ImageFormat>,

    /// JPEG quality, 1-100 (ignored for other formats)
    #[arg(long, allow_hyphen_values = true)]
    quality: Option<i64>,

    /// Remove embedded metadata
    #[arg(long)]
    strip: bool,

    /// Gaussian blur as RADIUSxSIGMA (ignored for gif)
    #[arg(long, value_name = "RxS", value_parser = parse_pair, allow_hyphen_values = true)]
    blur: Option<(i64, i64)>,

    /// Sharpen the output
    #[arg(long)]
    sharpen: bool,
}

#[derive(Parser)]
#[command(name = "morph")]
#[command(about = "Build imageMogr2 image-transformation URLs")]
#[command(long_about = "\
Build imageMogr2 image-transformation URLs

Directives are always rendered in the same order, whatever the order of the
flags:

  ?imageMogr2/auto-orient/thumbnail/<W>x<H>>/format/<fmt>/strip/
              blur/<r>x<s>/quality<N>/sharpen

Blur is dropped for gif output; quality is only rendered for jpeg.

Settings are applied in this order: [defaults] from the config file, then
--preset, then explicit flags. Run 'morph gen-config' for a documented
morph.toml.")]
#[command(version)]
struct Cli {
    /// Preset config file
    #[arg(long, default_value = config::CONFIG_FILE, global = true)]
    config: PathBuf,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the transformed image URL
    Url {
        #[command(flatten)]
        directives: DirectiveArgs,
        /// Print base URL, directive state and URL as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show each rendered directive and what it does
    Explain(DirectiveArgs),
    /// List presets from the config file
    Presets,
    /// Print a stock morph.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Url { directives, json } => {
            let config = config::load_config(&cli.config)?;
            let morph = build(&config, &directives)?;
            if json {
                println!("{}", output::format_json(&morph)?);
            } else {
                println!("{}", morph.to_url());
            }
        }
        Command::Explain(directives) => {
            let config = config::load_config(&cli.config)?;
            let morph = build(&config, &directives)?;
            output::print_explain(&morph);
        }
        Command::Presets => {
            let config = config::load_config(&cli.config)?;
            output::print_presets(&config)?;
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Install the stderr log subscriber. `--verbose` forces debug level,
/// otherwise `RUST_LOG` decides and falls back to warnings only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config defaults, then the preset, then explicit flags.
fn build(config: &MorphConfig, args: &DirectiveArgs) -> Result<Morph, Box<dyn std::error::Error>> {
    let mut morph = Morph::new(args.base_url.as_str())?;
    morph.apply_preset(&config.defaults)?;
    if let Some(name) = &args.preset {
        morph.apply_preset(config.preset(name)?)?;
    }

    if args.auto_orient {
        morph.auto_orient();
    }
    if let Some((width, height)) = args.resize {
        morph.resize(width, height)?;
    }
    if let Some(format) = args.format {
        morph.format(format);
    }
    if let Some(quality) = args.quality {
        morph.quality(quality)?;
    }
    if args.strip {
        morph.strip();
    }
    if let Some((radius, sigma)) = args.blur {
        morph.blur(radius, sigma)?;
    }
    if args.sharpen {
        morph.sharpen();
    }
    Ok(morph)
}

/// Parse `AxB` into two integers.
fn parse_pair(s: &str) -> Result<(i64, i64), String> {
    let (a, b) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected <A>x<B>, got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<i64>()
            .map_err(|e| format!("invalid number '{v}' in '{s}': {e}"))
    };
    Ok((parse(a)?, parse(b)?))
}

fn parse_format(s: &str) -> Result<ImageFormat, String> {
    s.parse().map_err(|e: morph::DirectiveError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pair_accepts_both_separators() {
        assert_eq!(parse_pair("200x0"), Ok((200, 0)));
        assert_eq!(parse_pair("10X5"), Ok((10, 5)));
    }

    #[test]
    fn parse_pair_keeps_negative_values_for_validation() {
        assert_eq!(parse_pair("-1x5"), Ok((-1, 5)));
    }

    #[test]
    fn parse_pair_rejects_malformed() {
        assert!(parse_pair("200").is_err());
        assert!(parse_pair("ax5").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn build_applies_defaults_then_preset_then_flags() {
        let config: MorphConfig = toml::from_str(
            r#"
[defaults]
strip = true

[presets.hero]
format = "png"
quality = 70
"#,
        )
        .unwrap();
        let cli = Cli::parse_from([
            "morph", "url", "http://x.com/a.jpg", "--preset", "hero", "--format", "jpeg",
        ]);
        let Command::Url { directives, .. } = cli.command else {
            panic!("expected url command");
        };
        let morph = build(&config, &directives).unwrap();
        assert_eq!(
            morph.to_url(),
            "http://x.com/a.jpg?imageMogr2/format/jpeg/strip/quality70/"
        );
    }

    #[test]
    fn build_rejects_invalid_flag_value() {
        let cli = Cli::parse_from(["morph", "url", "http://x.com/a.jpg", "--resize", "0x0"]);
        let Command::Url { directives, .. } = cli.command else {
            panic!("expected url command");
        };
        assert!(build(&MorphConfig::default(), &directives).is_err());
    }
}
