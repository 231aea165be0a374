//! Glyphs, catalogs, and the style selector.
//!
//! A [`Catalog`] maps every character a clock string can contain (the ten
//! digits and `:`) to a fixed-height [`Glyph`]. A [`Style`] is the
//! user-facing selector; it resolves once, at startup, to a
//! `&'static Catalog` so the render path never branches on the style again.

use std::fmt;
use std::str::FromStr;

use unicode_width::UnicodeWidthStr;

use crate::builtin;
use crate::error::StyleError;

/// Characters produced by `HH:MM:SS` formatting, in lookup-table order.
pub const CLOCK_ALPHABET: [char; 11] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':'];

// ─── Glyph ──────────────────────────────────────────────────────────────────

/// Block-art representation of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: &'static [&'static str],
}

impl Glyph {
    /// Wrap a static row table.
    #[must_use]
    pub const fn new(rows: &'static [&'static str]) -> Self {
        Self { rows }
    }

    /// All rows, top to bottom.
    #[inline]
    #[must_use]
    pub const fn rows(self) -> &'static [&'static str] {
        self.rows
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn height(self) -> usize {
        self.rows.len()
    }

    /// Row `r`, or `""` past the bottom.
    #[inline]
    #[must_use]
    pub fn row(self, r: usize) -> &'static str {
        self.rows.get(r).copied().unwrap_or("")
    }

    /// Display width in terminal columns (widest row).
    #[must_use]
    pub fn width(self) -> usize {
        self.rows.iter().map(|row| row.width()).max().unwrap_or(0)
    }
}

// ─── Catalog ────────────────────────────────────────────────────────────────

/// A complete clock face: one glyph per supported character.
#[derive(Debug)]
pub struct Catalog {
    name: &'static str,
    height: usize,
    spacing: usize,
    digits: [Glyph; 10],
    colon: Glyph,
}

impl Catalog {
    /// Build a catalog from its glyph tables.
    ///
    /// `height` must equal the row count of every glyph and `spacing` is the
    /// number of blank columns inserted between adjacent glyphs.
    #[must_use]
    pub const fn new(
        name: &'static str,
        height: usize,
        spacing: usize,
        digits: [Glyph; 10],
        colon: Glyph,
    ) -> Self {
        Self {
            name,
            height,
            spacing,
            digits,
            colon,
        }
    }

    /// Catalog name, as used on the command line.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Height `H` shared by every glyph.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Blank columns between adjacent glyphs.
    #[inline]
    #[must_use]
    pub const fn spacing(&self) -> usize {
        self.spacing
    }

    /// Glyph for `ch`, or `None` if the catalog does not cover it.
    #[must_use]
    pub fn lookup(&self, ch: char) -> Option<Glyph> {
        match ch {
            ':' => Some(self.colon),
            _ => ch
                .to_digit(10)
                .and_then(|d| self.digits.get(d as usize))
                .copied(),
        }
    }

    /// Every `(char, glyph)` pair in the catalog.
    pub fn glyphs(&self) -> impl Iterator<Item = (char, Glyph)> + '_ {
        CLOCK_ALPHABET
            .iter()
            .filter_map(|&ch| self.lookup(ch).map(|g| (ch, g)))
    }
}

// ─── Style ──────────────────────────────────────────────────────────────────

/// User-selectable clock face.
///
/// Numeric ids (`1`, `2`, `3`) are the stable command-line spelling; names
/// are accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// Solid full-block digits, 5 rows.
    #[default]
    Block,
    /// The same shapes drawn with `#`, for terminals without box glyphs.
    Hash,
    /// Seven-segment digits, 3 rows.
    Segment,
}

impl Style {
    /// Every style, in id order.
    pub const ALL: [Self; 3] = [Self::Block, Self::Hash, Self::Segment];

    /// Numeric id used on the command line.
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Block => 1,
            Self::Hash => 2,
            Self::Segment => 3,
        }
    }

    /// Lowercase style name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.catalog().name()
    }

    /// Resolve a numeric id.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownStyle`] for any id outside `1..=3`.
    pub fn from_id(id: u8) -> Result<Self, StyleError> {
        Self::ALL
            .into_iter()
            .find(|s| s.id() == id)
            .ok_or_else(|| StyleError::UnknownStyle(id.to_string()))
    }

    /// The glyph table behind this style.
    #[must_use]
    pub const fn catalog(self) -> &'static Catalog {
        match self {
            Self::Block => &builtin::BLOCK,
            Self::Hash => &builtin::HASH,
            Self::Segment => &builtin::SEGMENT,
        }
    }

    /// Style `text` with this face's catalog.
    ///
    /// # Errors
    ///
    /// See [`crate::styler::style`].
    pub fn apply(self, text: &str) -> Result<crate::StyledText, StyleError> {
        crate::styler::style(text, self.catalog())
    }
}

impl FromStr for Style {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u8>() {
            return Self::from_id(id);
        }
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| StyleError::UnknownStyle(s.to_owned()))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
