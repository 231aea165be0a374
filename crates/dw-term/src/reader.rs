// SPDX-License-Identifier: MIT
#![allow(unsafe_code)]
//
// Non-blocking key reader.
//
// The clock loop asks for at most one key per iteration and must never
// block doing so. `KeyReader` polls stdin with a zero timeout; if bytes
// are ready it reads one chunk, parses it, and queues the resulting keys.
// Keys typed faster than the loop consumes them wait in the queue instead
// of being dropped, so `a` followed quickly by `q` still quits.

use std::collections::VecDeque;
use std::io;

use crate::input::{parse_keys, KeyEvent};

/// Sized for keyboard input: a key is 1-6 bytes, a burst rarely more.
const READ_BUF_SIZE: usize = 256;

/// Queue of parsed keys fed from stdin on demand.
#[derive(Debug, Default)]
pub struct KeyReader {
    queue: VecDeque<KeyEvent>,
}

impl KeyReader {
    /// Create an empty reader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the next key, reading stdin only if the queue is empty.
    ///
    /// Returns `Ok(None)` when no input is waiting.
    ///
    /// # Errors
    ///
    /// Returns an error if `poll(2)` or `read(2)` fails for a reason other
    /// than an interrupted call.
    pub fn next_key(&mut self) -> io::Result<Option<KeyEvent>> {
        if self.queue.is_empty() {
            let mut buf = [0u8; READ_BUF_SIZE];
            let n = read_ready(&mut buf)?;
            self.feed(&buf[..n]);
        }
        Ok(self.queue.pop_front())
    }

    /// Parse `bytes` and queue the keys they contain.
    pub fn feed(&mut self, bytes: &[u8]) {
        self.queue.extend(parse_keys(bytes));
    }

    /// Number of queued keys.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

/// Read whatever stdin has ready right now, without waiting.
///
/// Returns 0 if nothing is ready, stdin is at EOF, or stdin is not a
/// terminal (tests, pipes).
#[cfg(unix)]
fn read_ready(buf: &mut [u8]) -> io::Result<usize> {
    if !crate::terminal::is_tty() {
        return Ok(0);
    }

    let ready = unsafe {
        let mut pfd = libc::pollfd {
            fd: libc::STDIN_FILENO,
            events: libc::POLLIN,
            revents: 0,
        };
        libc::poll(&raw mut pfd, 1, 0)
    };

    if ready < 0 {
        return interrupted_or_err();
    }
    if ready == 0 {
        return Ok(0);
    }

    let n = unsafe { libc::read(libc::STDIN_FILENO, buf.as_mut_ptr().cast(), buf.len()) };
    if n < 0 {
        return interrupted_or_err();
    }

    #[allow(clippy::cast_sign_loss)] // n >= 0 checked above.
    Ok(n as usize)
}

/// EINTR (a signal landed mid-call) just means "no input this time".
#[cfg(unix)]
fn interrupted_or_err() -> io::Result<usize> {
    let err = io::Error::last_os_error();
    if err.kind() == io::ErrorKind::Interrupted {
        Ok(0)
    } else {
        Err(err)
    }
}

#[cfg(not(unix))]
fn read_ready(_buf: &mut [u8]) -> io::Result<usize> {
    Ok(0)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
