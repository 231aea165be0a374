// SPDX-License-Identifier: MIT
//
// Top-level error type. Everything that can stop the clock funnels into
// `Error` so `main` has one place to report it.

use std::io;

use dw_glyph::StyleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Styling failed. Only reachable through a glyph table defect, since
    /// the clock only ever styles its own `HH:MM:SS` output.
    #[error(transparent)]
    Style(#[from] StyleError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("dwatch needs an interactive terminal (stdin and stdout must be a TTY)")]
    NotATerminal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_error_is_transparent() {
        let err = Error::from(StyleError::UnsupportedChar {
            ch: 'z',
            style: "segment",
        });
        assert_eq!(err.to_string(), "style `segment` has no glyph for 'z'");
    }

    #[test]
    fn io_error_is_wrapped() {
        let err = Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        assert_eq!(err.to_string(), "terminal I/O failed: gone");
    }
}
