// SPDX-License-Identifier: MIT
//
// dwatch: a full-screen block-art digital clock.
//
// This is the binary that wires the crates together:
//
//   dw-glyph → glyph catalogs and the text styler
//   dw-term  → terminal control, framed output, key polling, signal flags
//
// Each tick flows through:
//
//   clock::now → "HH:MM:SS" → dw_glyph::style → compare with memo
//     → (changed) center → clear + write rows + present
//
// Logging goes to stderr and is off below `warn` unless `RUST_LOG` says
// otherwise. While the clock owns the screen, redirect stderr
// (`dwatch 2>dwatch.log`) to keep log lines out of the frame.

mod app;
mod cli;
mod clock;
mod error;
mod render;

use std::io;
use std::process;

use clap::Parser;
use dw_term::terminal::{self, Terminal};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Config};
use crate::error::Error;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}

fn run(config: &Config) -> Result<(), Error> {
    if !terminal::is_tty() {
        return Err(Error::NotATerminal);
    }
    let mut term = Terminal::new()?;
    app::run(&mut term, config)
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    if cli.list_styles {
        print!("{}", cli::style_listing());
        return;
    }

    if let Err(e) = run(&Config::from(&cli)) {
        error!(error = %e, "dwatch stopped");
        eprintln!("dwatch: {e}");
        process::exit(1);
    }
}
