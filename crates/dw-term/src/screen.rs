// SPDX-License-Identifier: MIT
//
// The `Screen` trait: the whole terminal surface the clock renders to.
//
// A frame is built with `clear` and any number of `write_at` calls, and only
// becomes visible on `present`. The real implementation buffers the frame
// in memory and emits it as one synchronized-output write, so a partially
// painted frame is never on screen.

use std::io;

use crate::ansi;
use crate::input::KeyEvent;
use crate::terminal::{Size, Terminal};

/// A paintable, pollable terminal surface.
pub trait Screen {
    /// Current dimensions. Cheap; implementations cache and refresh on
    /// resize.
    fn size(&self) -> Size;

    /// Start a frame with a blank screen.
    ///
    /// # Errors
    ///
    /// Implementation-defined I/O failure.
    fn clear(&mut self) -> io::Result<()>;

    /// Place `text` with its first column at `(row, col)`.
    ///
    /// Text falling outside the screen is clipped.
    ///
    /// # Errors
    ///
    /// Implementation-defined I/O failure.
    fn write_at(&mut self, row: u16, col: u16, text: &str) -> io::Result<()>;

    /// Make everything since the last `present` visible at once.
    ///
    /// # Errors
    ///
    /// Implementation-defined I/O failure.
    fn present(&mut self) -> io::Result<()>;

    /// The next key press, if one is waiting. Never blocks.
    ///
    /// # Errors
    ///
    /// Implementation-defined I/O failure.
    fn read_key(&mut self) -> io::Result<Option<KeyEvent>>;
}

impl Terminal {
    fn open_frame(&mut self) -> io::Result<()> {
        if !self.frame_open {
            ansi::begin_sync(&mut self.frame)?;
            self.frame_open = true;
        }
        Ok(())
    }
}

impl Screen for Terminal {
    fn size(&self) -> Size {
        Terminal::size(self)
    }

    fn clear(&mut self) -> io::Result<()> {
        self.open_frame()?;
        ansi::clear_screen(&mut self.frame)
    }

    fn write_at(&mut self, row: u16, col: u16, text: &str) -> io::Result<()> {
        let size = Terminal::size(self);
        if row >= size.rows || col >= size.cols {
            return Ok(());
        }
        self.open_frame()?;
        ansi::move_to(&mut self.frame, row, col)?;
        self.frame.write_clipped(text, usize::from(size.cols - col));
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        if !self.frame_open {
            return Ok(());
        }
        ansi::end_sync(&mut self.frame)?;
        self.frame_open = false;
        self.frame.flush_stdout()
    }

    fn read_key(&mut self) -> io::Result<Option<KeyEvent>> {
        self.poll_key()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
