//! Text styling: compose per-character glyphs into one block of rows.
//!
//! Styling is a pure function of `(text, catalog)`. Row `r` of the output is
//! row `r` of every input character's glyph, left to right, with
//! [`Catalog::spacing`] blank columns between neighbours. The result always
//! has exactly [`Catalog::height`] rows, even for empty input.

use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::catalog::{Catalog, Glyph};
use crate::error::StyleError;

// ─── StyledText ─────────────────────────────────────────────────────────────

/// Composed block-art rows for one string.
///
/// Equality is structural, which is what the render loop's change
/// detection relies on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledText {
    rows: Vec<String>,
}

impl StyledText {
    /// The composed rows, top to bottom.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Bounding-box width in terminal columns (widest row).
    ///
    /// Measured in display columns, not bytes: a `█` is three bytes of
    /// UTF-8 but one cell on screen.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.iter().map(|row| row.width()).max().unwrap_or(0)
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

// ─── style ──────────────────────────────────────────────────────────────────

/// Render `text` with the glyphs of `catalog`.
///
/// Input is walked by `char`, so multi-byte characters are looked up whole
/// (and rejected whole if unsupported).
///
/// # Errors
///
/// Returns [`StyleError::UnsupportedChar`] for the first character without a
/// glyph. Unsupported characters are never skipped or rendered blank.
pub fn style(text: &str, catalog: &Catalog) -> Result<StyledText, StyleError> {
    let glyphs = text
        .chars()
        .map(|ch| {
            catalog.lookup(ch).ok_or(StyleError::UnsupportedChar {
                ch,
                style: catalog.name(),
            })
        })
        .collect::<Result<Vec<Glyph>, _>>()?;

    let gap = " ".repeat(catalog.spacing());
    let rows = (0..catalog.height())
        .map(|r| {
            let mut line = String::new();
            for (i, glyph) in glyphs.iter().enumerate() {
                if i > 0 {
                    line.push_str(&gap);
                }
                line.push_str(glyph.row(r));
            }
            line
        })
        .collect();

    Ok(StyledText { rows })
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Style;
    use pretty_assertions::assert_eq;

    // ── Composition ───────────────────────────────────────────────────

    #[test]
    fn segment_renders_known_digits() {
        let out = style("12:30", Style::Segment.catalog()).unwrap();
        assert_eq!(
            out.rows(),
            [
                "     _     _   _ ",
                "  |  _| ·  _| | |",
                "  | |_  ·  _| |_|",
            ]
        );
    }

    #[test]
    fn display_joins_rows_with_newlines() {
        let out = style("1", Style::Segment.catalog()).unwrap();
        assert_eq!(out.to_string(), "   \n  |\n  |");
    }

    #[test]
    fn single_char_is_its_glyph() {
        let cat = Style::Block.catalog();
        let out = style("8", cat).unwrap();
        let glyph = cat.lookup('8').unwrap();
        assert_eq!(out.rows(), glyph.rows());
    }

    #[test]
    fn empty_input_keeps_height() {
        for s in Style::ALL {
            let out = style("", s.catalog()).unwrap();
            assert_eq!(out.height(), s.catalog().height());
            assert_eq!(out.width(), 0);
        }
    }

    // ── Properties ────────────────────────────────────────────────────

    #[test]
    fn styling_is_deterministic() {
        for s in Style::ALL {
            let a = style("01:02:03", s.catalog()).unwrap();
            let b = style("01:02:03", s.catalog()).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn height_is_constant_per_style() {
        let inputs = ["00:00:00", "23:59:59", "12:34:56", "9", ":", "1111"];
        for s in Style::ALL {
            for text in inputs {
                let out = style(text, s.catalog()).unwrap();
                assert_eq!(out.height(), s.catalog().height(), "{s} on {text:?}");
            }
        }
    }

    #[test]
    fn width_is_sum_of_glyphs_plus_separators() {
        for s in Style::ALL {
            let cat = s.catalog();
            for text in ["01:02:03", "18:47:09", "5", "::"] {
                let glyph_sum: usize = text.chars().map(|c| cat.lookup(c).unwrap().width()).sum();
                let expected = glyph_sum + cat.spacing() * (text.chars().count() - 1);

                let out = style(text, cat).unwrap();
                assert_eq!(out.width(), expected, "{s} on {text:?}");
                for row in out.rows() {
                    assert_eq!(row.width(), expected, "{s} on {text:?}: ragged row {row:?}");
                }
            }
        }
    }

    #[test]
    fn width_counts_columns_not_bytes() {
        let out = style("0", Style::Block.catalog()).unwrap();
        assert_eq!(out.width(), 6);
        assert!(out.rows()[0].len() > 6);
    }

    #[test]
    fn changed_seconds_change_output() {
        let cat = Style::Block.catalog();
        let a = style("01:02:03", cat).unwrap();
        let b = style("01:02:04", cat).unwrap();
        assert_ne!(a, b);
        assert!(a.rows().iter().zip(b.rows()).any(|(x, y)| x != y));
    }

    // ── Errors ────────────────────────────────────────────────────────

    #[test]
    fn unsupported_letter_fails() {
        let err = style("12:3a", Style::Block.catalog()).unwrap_err();
        assert_eq!(
            err,
            StyleError::UnsupportedChar {
                ch: 'a',
                style: "block"
            }
        );
    }

    #[test]
    fn unsupported_multibyte_char_fails_whole() {
        let err = style("1é", Style::Hash.catalog()).unwrap_err();
        assert_eq!(
            err,
            StyleError::UnsupportedChar {
                ch: 'é',
                style: "hash"
            }
        );
    }

    #[test]
    fn first_unsupported_char_is_reported() {
        let err = style("x1y", Style::Segment.catalog()).unwrap_err();
        assert!(matches!(err, StyleError::UnsupportedChar { ch: 'x', .. }));
    }

    #[test]
    fn apply_matches_style() {
        assert_eq!(
            Style::Hash.apply("10:00").unwrap(),
            style("10:00", Style::Hash.catalog()).unwrap()
        );
    }
}
