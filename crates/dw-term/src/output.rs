// SPDX-License-Identifier: MIT
//
// Output buffering.
//
// Every byte of a frame (clear, cursor moves, glyph rows) is accumulated in
// an `OutputBuffer` and handed to the terminal in one `write()` followed by
// one flush. The terminal never sees half a frame from us, and a frame costs
// one syscall instead of one per row.

use std::io::{self, Write};

use unicode_width::UnicodeWidthChar;

// ─── OutputBuffer ────────────────────────────────────────────────────────────

/// A byte buffer that collects one frame of ANSI output.
pub struct OutputBuffer {
    buf: Vec<u8>,
}

/// A clock frame is a few hundred bytes; 4 KB never reallocates.
const DEFAULT_CAPACITY: usize = 4096;

impl OutputBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(DEFAULT_CAPACITY),
        }
    }

    /// Number of bytes accumulated.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the buffer is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The accumulated bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Append `text`, dropping whatever would extend past `max_cols`
    /// display columns.
    ///
    /// Returns the number of columns written. Without this, an over-wide row
    /// wraps onto the next line and corrupts the rows below it.
    pub fn write_clipped(&mut self, text: &str, max_cols: usize) -> usize {
        let mut used = 0;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > max_cols {
                break;
            }
            let mut enc = [0u8; 4];
            self.buf.extend_from_slice(ch.encode_utf8(&mut enc).as_bytes());
            used += w;
        }
        used
    }

    /// Discard the contents, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Write everything to stdout in one call, flush, and clear.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn flush_stdout(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.flush_to(&mut stdout)
    }

    /// Write everything to `w` in one call, flush, and clear.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails. The buffer is cleared
    /// either way so a failed frame is never replayed into the next one.
    pub fn flush_to(&mut self, w: &mut impl Write) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let result = w.write_all(&self.buf).and_then(|()| w.flush());
        self.buf.clear();
        result
    }
}

impl Write for OutputBuffer {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        // No-op: real flushing goes through flush_stdout() / flush_to().
        Ok(())
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
