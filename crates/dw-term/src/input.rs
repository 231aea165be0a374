// SPDX-License-Identifier: MIT
//
// Keyboard input parsing.
//
// Turns one chunk of raw stdin bytes into key events. The clock only ever
// acts on a handful of keys, but it still has to consume whole escape
// sequences: an arrow key arrives as `ESC [ A`, and reading that as three
// separate keys would turn a stray arrow press into a literal `A`.
//
// The parser is stateless. Input is read once per tick with a
// non-blocking poll, so a sequence split across two reads is possible but
// harmless: the tail is discarded as unrecognized bytes.

use bitflags::bitflags;

// ─── Event Types ────────────────────────────────────────────────────────────

/// A key press with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Which key was pressed.
    pub code: KeyCode,
    /// Active modifier keys.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press without modifiers.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
        }
    }

    /// Ctrl + `ch`.
    #[must_use]
    pub const fn ctrl(ch: char) -> Self {
        Self {
            code: KeyCode::Char(ch),
            modifiers: Modifiers::CTRL,
        }
    }
}

/// Identity of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// A printable Unicode character.
    Char(char),
    Enter,
    Tab,
    Backspace,
    Escape,
    Up,
    Down,
    Left,
    Right,
}

bitflags! {
    /// Keyboard modifier flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0000_0001;
        const ALT   = 0b0000_0010;
        const CTRL  = 0b0000_0100;
    }
}

// ─── Parsing ────────────────────────────────────────────────────────────────

/// Parse every complete key in `data`.
///
/// Unrecognized or truncated sequences are skipped.
#[must_use]
pub fn parse_keys(data: &[u8]) -> Vec<KeyEvent> {
    let mut events = Vec::new();
    let mut pos = 0;

    while pos < data.len() {
        let (event, consumed) = parse_one(&data[pos..]);
        if let Some(event) = event {
            events.push(event);
        }
        pos += consumed.max(1);
    }

    events
}

/// Parse a single key from the front of `buf`.
///
/// Returns the key (if any) and how many bytes it occupied.
fn parse_one(buf: &[u8]) -> (Option<KeyEvent>, usize) {
    match buf[0] {
        0x1B => parse_escape(buf),
        0x00 => (Some(KeyEvent::ctrl('@')), 1),
        0x08 | 0x7F => (Some(KeyEvent::plain(KeyCode::Backspace)), 1),
        0x09 => (Some(KeyEvent::plain(KeyCode::Tab)), 1),
        0x0A | 0x0D => (Some(KeyEvent::plain(KeyCode::Enter)), 1),
        b @ 0x01..=0x1A => (Some(KeyEvent::ctrl(char::from(b + b'a' - 1))), 1),
        b @ 0x20..=0x7E => (Some(KeyEvent::plain(KeyCode::Char(char::from(b)))), 1),
        0xC0..=0xFF => parse_utf8(buf),
        _ => (None, 1),
    }
}

fn parse_escape(buf: &[u8]) -> (Option<KeyEvent>, usize) {
    match buf.get(1) {
        None => (Some(KeyEvent::plain(KeyCode::Escape)), 1),
        Some(b'[') => parse_csi(buf),
        // SS3: ESC O <final>, used by some terminals for arrows and F1-F4.
        Some(b'O') => match buf.get(2) {
            Some(&fin) => (arrow(fin), 3),
            None => (None, 2),
        },
        Some(&b @ 0x20..=0x7E) => (
            Some(KeyEvent {
                code: KeyCode::Char(char::from(b)),
                modifiers: Modifiers::ALT,
            }),
            2,
        ),
        Some(_) => (Some(KeyEvent::plain(KeyCode::Escape)), 1),
    }
}

/// `ESC [ <params> <final>`: consume through the final byte (0x40..=0x7E).
fn parse_csi(buf: &[u8]) -> (Option<KeyEvent>, usize) {
    let Some(offset) = buf[2..].iter().position(|b| (0x40..=0x7E).contains(b)) else {
        return (None, buf.len());
    };
    let end = 2 + offset;
    let params = &buf[2..end];

    let event = arrow(buf[end]).map(|mut key| {
        key.modifiers = decode_modifiers(params);
        key
    });
    (event, end + 1)
}

fn arrow(fin: u8) -> Option<KeyEvent> {
    let code = match fin {
        b'A' => KeyCode::Up,
        b'B' => KeyCode::Down,
        b'C' => KeyCode::Right,
        b'D' => KeyCode::Left,
        _ => return None,
    };
    Some(KeyEvent::plain(code))
}

/// xterm modifier parameter: `1;<1 + bitmask>`.
fn decode_modifiers(params: &[u8]) -> Modifiers {
    let Some(raw) = params.split(|&b| b == b';').nth(1) else {
        return Modifiers::empty();
    };
    let value = std::str::from_utf8(raw)
        .ok()
        .and_then(|s| s.parse::<u8>().ok())
        .unwrap_or(1);
    Modifiers::from_bits_truncate(value.saturating_sub(1))
}

fn parse_utf8(buf: &[u8]) -> (Option<KeyEvent>, usize) {
    let expected = match buf[0] {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => return (None, 1),
    };
    if buf.len() < expected {
        return (None, buf.len());
    }
    std::str::from_utf8(&buf[..expected])
        .ok()
        .and_then(|s| s.chars().next())
        .map_or((None, 1), |ch| {
            (Some(KeyEvent::plain(KeyCode::Char(ch))), expected)
        })
}

// ─── Tests ───────────────────────────────────────────────────────────────────
