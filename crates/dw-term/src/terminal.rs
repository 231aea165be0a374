// SPDX-License-Identifier: MIT
//
// Terminal control: cbreak mode, alternate screen, and RAII cleanup.
//
// Safety: This module uses `unsafe` for termios (tcgetattr, tcsetattr),
// ioctl (TIOCGWINSZ), isatty, and a raw fd write in the panic hook. These
// are the POSIX interfaces for terminal control; each block is minimal.
#![allow(unsafe_code)]
//
// The clock needs less than a full raw mode: echo and canonical line
// editing go, but ISIG stays on so Ctrl+C still arrives as SIGINT and goes
// through the same shutdown path as an external interrupt. Reads are made
// non-blocking (VMIN=0, VTIME=0) so a key poll can never stall a tick.
//
// Cleanup is guaranteed three ways: `leave()` on the normal path, `Drop` on
// early returns and errors, and a panic hook that writes a pre-built restore
// sequence straight to fd 1 (bypassing the stdout lock, which the panicking
// frame may be holding).

use std::io::{self, Write};
use std::sync::{Mutex, Once};

use crate::ansi;
use crate::input::KeyEvent;
use crate::output::OutputBuffer;
use crate::reader::KeyReader;

// ─── Size ───────────────────────────────────────────────────────────────────

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Number of columns.
    pub cols: u16,
    /// Number of rows.
    pub rows: u16,
}

impl Size {
    /// Size used when the OS cannot tell us (pipes, some CI runners).
    pub const FALLBACK: Self = Self { cols: 80, rows: 24 };
}

// ─── Terminal Queries ───────────────────────────────────────────────────────

/// Query the current terminal size via `ioctl(TIOCGWINSZ)`.
///
/// Returns `None` if stdout is not a terminal or the query fails.
#[cfg(unix)]
#[must_use]
pub fn get_size() -> Option<Size> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };

    if result == 0 && ws.ws_col > 0 && ws.ws_row > 0 {
        Some(Size {
            cols: ws.ws_col,
            rows: ws.ws_row,
        })
    } else {
        None
    }
}

#[cfg(not(unix))]
#[must_use]
pub fn get_size() -> Option<Size> {
    None
}

/// Whether both stdin and stdout are connected to a terminal.
#[cfg(unix)]
#[must_use]
pub fn is_tty() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) != 0 && libc::isatty(libc::STDOUT_FILENO) != 0 }
}

#[cfg(not(unix))]
#[must_use]
pub fn is_tty() -> bool {
    false
}

// ─── Panic-Safe Terminal Restore ────────────────────────────────────────────

/// Copy of the original termios for the panic hook, which cannot reach the
/// `Terminal` that owns the primary copy.
#[cfg(unix)]
static TERMIOS_BACKUP: Mutex<Option<libc::termios>> = Mutex::new(None);

#[cfg(unix)]
fn restore_termios_from_backup() {
    if let Ok(guard) = TERMIOS_BACKUP.lock() {
        if let Some(ref original) = *guard {
            unsafe {
                let _ = libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, original);
            }
        }
    }
}

/// End synchronized output, reset SGR, show cursor, leave the alternate
/// screen. The alternate-screen exit comes last so the shell's content
/// reappears clean.
#[rustfmt::skip]
const EMERGENCY_RESTORE: &[u8] = b"\
    \x1b[?2026l\
    \x1b[0m\
    \x1b[?25h\
    \x1b[?1049l";

static PANIC_HOOK_INSTALLED: Once = Once::new();

/// Restore the terminal before the default panic message is printed.
fn install_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let original = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            emergency_restore();

            #[cfg(unix)]
            restore_termios_from_backup();

            original(info);
        }));
    });
}

fn emergency_restore() {
    #[cfg(unix)]
    unsafe {
        let _ = libc::write(
            libc::STDOUT_FILENO,
            EMERGENCY_RESTORE.as_ptr().cast::<libc::c_void>(),
            EMERGENCY_RESTORE.len(),
        );
    }

    #[cfg(not(unix))]
    {
        let _ = io::stdout().write_all(EMERGENCY_RESTORE);
        let _ = io::stdout().flush();
    }
}

// ─── Terminal ───────────────────────────────────────────────────────────────

/// Terminal handle with RAII cleanup.
///
/// Owns the frame buffer and key queue used by its [`Screen`] impl.
/// Dropping an active handle restores the terminal.
///
/// # Example
///
/// ```no_run
/// use dw_term::screen::Screen;
/// use dw_term::terminal::Terminal;
///
/// let mut term = Terminal::new()?;
/// term.enter()?;
/// term.clear()?;
/// term.write_at(0, 0, "12:00")?;
/// term.present()?;
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// [`Screen`]: crate::screen::Screen
pub struct Terminal {
    #[cfg(unix)]
    original_termios: Option<libc::termios>,

    /// Cached size, refreshed by [`refresh_size`](Self::refresh_size).
    size: Size,

    /// Whether cbreak mode and the alternate screen are in effect.
    active: bool,

    /// Pending output for the frame being built.
    pub(crate) frame: OutputBuffer,

    /// Whether `frame` has been opened with a sync-begin sequence.
    pub(crate) frame_open: bool,

    pub(crate) keys: KeyReader,
}

impl Terminal {
    /// Create a handle and query the current size.
    ///
    /// Does not touch terminal modes; call [`enter`](Self::enter) for that.
    /// Falls back to 80×24 when the size cannot be determined.
    ///
    /// # Errors
    ///
    /// Currently infallible; returns `Result` so platform setup can fail
    /// without an API change.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            #[cfg(unix)]
            original_termios: None,
            size: get_size().unwrap_or(Size::FALLBACK),
            active: false,
            frame: OutputBuffer::new(),
            frame_open: false,
            keys: KeyReader::new(),
        })
    }

    /// Cached terminal size.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Re-query the size from the OS and cache it.
    ///
    /// Call after a resize notification. Keeps the previous size if the
    /// query fails.
    pub fn refresh_size(&mut self) -> Size {
        if let Some(s) = get_size() {
            self.size = s;
        }
        self.size
    }

    /// Whether the terminal is in clock mode.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Enter clock mode: cbreak input, alternate screen, hidden cursor,
    /// cleared screen. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if termios or terminal output fails.
    pub fn enter(&mut self) -> io::Result<()> {
        if self.active {
            return Ok(());
        }

        install_panic_hook();
        self.enable_cbreak()?;

        let mut lock = io::stdout().lock();
        ansi::enter_alt_screen(&mut lock)?;
        ansi::cursor_hide(&mut lock)?;
        ansi::clear_screen(&mut lock)?;
        lock.flush()?;

        self.active = true;
        Ok(())
    }

    /// Leave clock mode and restore the terminal. Idempotent.
    ///
    /// Any half-built frame is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal output or termios restore fails.
    pub fn leave(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }

        self.frame.clear();
        self.frame_open = false;

        let mut lock = io::stdout().lock();
        ansi::end_sync(&mut lock)?;
        ansi::reset(&mut lock)?;
        ansi::cursor_show(&mut lock)?;
        ansi::exit_alt_screen(&mut lock)?;
        lock.flush()?;
        drop(lock);

        self.disable_cbreak()?;
        self.active = false;
        Ok(())
    }

    /// Next pending key press, without blocking.
    ///
    /// # Errors
    ///
    /// Returns an error if reading stdin fails.
    pub fn poll_key(&mut self) -> io::Result<Option<KeyEvent>> {
        self.keys.next_key()
    }

    // ── cbreak (termios) ────────────────────────────────────────────

    #[cfg(unix)]
    fn enable_cbreak(&mut self) -> io::Result<()> {
        if !is_tty() {
            return Ok(());
        }

        let fd = libc::STDIN_FILENO;

        unsafe {
            let mut termios: libc::termios = std::mem::zeroed();
            if libc::tcgetattr(fd, &raw mut termios) != 0 {
                return Err(io::Error::last_os_error());
            }

            self.original_termios = Some(termios);
            if let Ok(mut guard) = TERMIOS_BACKUP.lock() {
                *guard = Some(termios);
            }

            // No echo, no line buffering. ISIG stays set: Ctrl+C -> SIGINT.
            termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::IEXTEN);
            termios.c_iflag &= !(libc::ICRNL | libc::IXON);

            // Non-blocking reads: return immediately with what is there.
            termios.c_cc[libc::VMIN] = 0;
            termios.c_cc[libc::VTIME] = 0;

            if libc::tcsetattr(fd, libc::TCSAFLUSH, &raw const termios) != 0 {
                return Err(io::Error::last_os_error());
            }
        }

        Ok(())
    }

    #[cfg(not(unix))]
    fn enable_cbreak(&mut self) -> io::Result<()> {
        Ok(())
    }

    #[cfg(unix)]
    fn disable_cbreak(&mut self) -> io::Result<()> {
        if let Some(ref original) = self.original_termios {
            unsafe {
                if libc::tcsetattr(libc::STDIN_FILENO, libc::TCSAFLUSH, original) != 0 {
                    return Err(io::Error::last_os_error());
                }
            }

            if let Ok(mut guard) = TERMIOS_BACKUP.lock() {
                *guard = None;
            }
            self.original_termios = None;
        }

        Ok(())
    }

    #[cfg(not(unix))]
    fn disable_cbreak(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if self.active {
            let _ = self.leave();
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Size ──────────────────────────────────────────────────────────

    #[test]
    fn fallback_size() {
        assert_eq!(Size::FALLBACK, Size { cols: 80, rows: 24 });
    }

    #[test]
    fn size_is_copy_and_eq() {
        let a = Size { cols: 120, rows: 40 };
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, Size::FALLBACK);
    }

    // ── Queries ───────────────────────────────────────────────────────

    #[test]
    fn queries_do_not_panic() {
        let _ = get_size();
        let _ = is_tty();
    }

    // ── Emergency restore ─────────────────────────────────────────────

    #[test]
    fn emergency_restore_exits_alt_screen_last() {
        let s = std::str::from_utf8(EMERGENCY_RESTORE).unwrap();
        assert!(s.ends_with("\x1b[?1049l"));
    }

    #[test]
    fn emergency_restore_shows_cursor_and_ends_sync() {
        let s = std::str::from_utf8(EMERGENCY_RESTORE).unwrap();
        assert!(s.contains("\x1b[?25h"), "must show cursor");
        assert!(s.contains("\x1b[?2026l"), "must end sync output");
        assert!(s.contains("\x1b[0m"), "must reset attributes");
    }

    // ── Terminal ──────────────────────────────────────────────────────

    #[test]
    fn new_is_inactive_with_nonzero_size() {
        let term = Terminal::new().unwrap();
        assert!(!term.is_active());
        assert!(term.size().cols > 0);
        assert!(term.size().rows > 0);
    }

    #[test]
    fn enter_leave_cycle_is_idempotent() {
        let mut term = Terminal::new().unwrap();
        term.leave().unwrap();
        term.enter().unwrap();
        term.enter().unwrap();
        assert!(term.is_active());
        term.leave().unwrap();
        term.leave().unwrap();
        assert!(!term.is_active());
    }

    #[test]
    fn drop_after_enter_restores() {
        let mut term = Terminal::new().unwrap();
        term.enter().unwrap();
        drop(term);
    }

    #[test]
    fn refresh_size_updates_cache() {
        let mut term = Terminal::new().unwrap();
        let s = term.refresh_size();
        assert_eq!(s, term.size());
    }
}
