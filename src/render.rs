// SPDX-License-Identifier: MIT
//
// Render loop core: style, compare, center, paint.
//
// Each tick styles the current time string and compares the result with the
// last frame that actually reached the screen (the memo). Equal frames cost
// nothing: no size query, no clear, no write. A different frame is centered
// against the screen's current size, painted as clear + one write per row +
// a single present, and only then becomes the new memo. If painting fails
// the memo is left alone, so the next tick tries the full frame again
// instead of believing it is already on screen.
//
// Centering halves the screen and the text separately and rounds both down,
// so odd sizes can leave the text one cell off true center. That is
// accepted; the origin never goes negative and never pushes text that fits
// off the screen.

use dw_glyph::{style, Catalog, StyledText};
use dw_term::{Screen, Size};
use tracing::debug;

use crate::error::Error;

// ─── Centering ──────────────────────────────────────────────────────────────

/// Top-left screen position of a block of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub row: u16,
    pub col: u16,
}

/// Origin that centers a `height × width` block on a screen of `size`.
///
/// `row = rows/2 - height/2`, `col = cols/2 - width/2`, integer division.
/// Content larger than the screen pins to 0 and is clipped by the screen.
#[must_use]
pub fn center(size: Size, height: usize, width: usize) -> Origin {
    let h = u16::try_from(height).unwrap_or(u16::MAX);
    let w = u16::try_from(width).unwrap_or(u16::MAX);
    Origin {
        row: (size.rows / 2).saturating_sub(h / 2),
        col: (size.cols / 2).saturating_sub(w / 2),
    }
}

// ─── RenderLoop ─────────────────────────────────────────────────────────────

/// Outcome of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// The styled text changed and was repainted.
    Painted,
    /// The styled text matched the memo; the screen was not touched.
    Skipped,
}

/// Change-detecting renderer for one clock face.
pub struct RenderLoop {
    catalog: &'static Catalog,
    memo: Option<StyledText>,
    paints: u64,
}

impl RenderLoop {
    /// A renderer with an empty memo, so the first tick always paints.
    #[must_use]
    pub const fn new(catalog: &'static Catalog) -> Self {
        Self {
            catalog,
            memo: None,
            paints: 0,
        }
    }

    /// Style `text` and repaint `screen` if the result differs from the
    /// last painted frame.
    ///
    /// # Errors
    ///
    /// Propagates styling failures and any screen I/O error. On error the
    /// memo is unchanged.
    pub fn tick(&mut self, screen: &mut impl Screen, text: &str) -> Result<Frame, Error> {
        let styled = style(text, self.catalog)?;

        if self.memo.as_ref() == Some(&styled) {
            return Ok(Frame::Skipped);
        }

        paint(screen, &styled)?;
        debug!(text, paints = self.paints + 1, "repainted");

        self.memo = Some(styled);
        self.paints += 1;
        Ok(Frame::Painted)
    }

    /// Forget the memo so the next tick repaints even if the text is the
    /// same. Used after a resize, when the old frame is mispositioned.
    pub fn invalidate(&mut self) {
        self.memo = None;
    }

    /// The last frame that reached the screen.
    #[must_use]
    pub const fn memo(&self) -> Option<&StyledText> {
        self.memo.as_ref()
    }

    /// Number of repaints so far.
    #[must_use]
    pub const fn paint_count(&self) -> u64 {
        self.paints
    }
}

/// Clear, write every row at its centered position, present once.
fn paint(screen: &mut impl Screen, styled: &StyledText) -> std::io::Result<()> {
    let origin = center(screen.size(), styled.height(), styled.width());

    screen.clear()?;
    for (i, row) in styled.rows().iter().enumerate() {
        let offset = u16::try_from(i).unwrap_or(u16::MAX);
        screen.write_at(origin.row.saturating_add(offset), origin.col, row)?;
    }
    screen.present()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
