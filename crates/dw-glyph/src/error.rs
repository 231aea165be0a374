//! Errors raised while selecting a style or styling text.

use thiserror::Error;

/// Failure to resolve a style or a glyph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The requested style id or name does not exist.
    ///
    /// This is a configuration error: it is raised while parsing startup
    /// options, never from inside the render loop.
    #[error("unknown style `{0}` (expected 1, 2, 3 or one of: block, hash, segment)")]
    UnknownStyle(String),

    /// The input contains a character the catalog has no glyph for.
    #[error("style `{style}` has no glyph for {ch:?}")]
    UnsupportedChar {
        /// The offending character.
        ch: char,
        /// Name of the catalog that was asked.
        style: &'static str,
    },
}
