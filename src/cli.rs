// SPDX-License-Identifier: MIT
//
// Command-line options and the run configuration derived from them.

use std::time::Duration;

use clap::Parser;
use dw_glyph::Style;

/// Full-screen block-art digital clock. Press `q` to quit.
#[derive(Parser, Debug)]
#[command(name = "dwatch", version, about)]
pub struct Cli {
    /// Clock face: 1 (block), 2 (hash), 3 (segment), or the face's name
    #[arg(short, long, default_value = "1")]
    pub style: Style,

    /// Milliseconds to sleep between clock checks
    #[arg(
        short,
        long,
        value_name = "MS",
        default_value_t = Config::DEFAULT_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(10..=1000),
    )]
    pub interval: u64,

    /// Print every clock face with a sample and exit
    #[arg(long)]
    pub list_styles: bool,
}

/// Settings the run loop needs, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub style: Style,
    /// Sleep between iterations. Bounds both CPU use and quit latency.
    pub interval: Duration,
}

impl Config {
    pub const DEFAULT_INTERVAL_MS: u64 = 500;
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: Style::default(),
            interval: Duration::from_millis(Self::DEFAULT_INTERVAL_MS),
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            style: cli.style,
            interval: Duration::from_millis(cli.interval),
        }
    }
}

/// Every face, labelled and rendered with a sample time.
pub fn style_listing() -> String {
    let mut out = String::new();
    for style in Style::ALL {
        out.push_str(&format!("{}  {}\n", style.id(), style.name()));
        // The sample only uses the clock alphabet, which every face covers.
        if let Ok(sample) = style.apply("12:34:56") {
            out.push_str(&format!("{sample}\n\n"));
        }
    }
    out
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("dwatch").chain(args.iter().copied()))
    }

    // ── Defaults ────────────────────────────────────────────────────

    #[test]
    fn defaults() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.style, Style::Block);
        assert_eq!(cli.interval, 500);
        assert!(!cli.list_styles);
        assert_eq!(Config::from(&cli), Config::default());
    }

    // ── Style ───────────────────────────────────────────────────────

    #[test]
    fn style_by_id() {
        assert_eq!(parse(&["--style", "2"]).unwrap().style, Style::Hash);
        assert_eq!(parse(&["-s", "3"]).unwrap().style, Style::Segment);
    }

    #[test]
    fn style_by_name() {
        assert_eq!(parse(&["--style", "segment"]).unwrap().style, Style::Segment);
    }

    #[test]
    fn invalid_style_is_rejected_at_parse_time() {
        for bad in ["0", "4", "300", "fancy"] {
            let err = parse(&["--style", bad]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation, "accepted {bad:?}");
        }
    }

    // ── Interval ────────────────────────────────────────────────────

    #[test]
    fn interval_in_range() {
        let cli = parse(&["-i", "250"]).unwrap();
        assert_eq!(Config::from(&cli).interval, Duration::from_millis(250));
    }

    #[test]
    fn interval_out_of_range() {
        assert!(parse(&["--interval", "5"]).is_err());
        assert!(parse(&["--interval", "5000"]).is_err());
        assert!(parse(&["--interval", "soon"]).is_err());
    }

    // ── Misc ────────────────────────────────────────────────────────

    #[test]
    fn list_styles_flag() {
        assert!(parse(&["--list-styles"]).unwrap().list_styles);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert_eq!(
            parse(&["--timezone", "UTC"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn listing_names_every_style() {
        let listing = style_listing();
        for style in Style::ALL {
            assert!(listing.contains(&format!("{}  {}", style.id(), style.name())));
        }
        assert!(listing.contains("|_|"), "segment sample should be rendered");
    }
}
