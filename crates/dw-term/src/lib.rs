// SPDX-License-Identifier: MIT
//
// dw-term: Terminal layer for dwatch.
//
// Direct terminal control over ANSI escape sequences and termios, sized for
// a full-screen clock: cbreak input that leaves Ctrl+C as a signal, frames
// buffered in memory and shown with one synchronized write, a non-blocking
// key poll, and async-signal-safe resize/interrupt flags.
//
// The clock core only sees the `Screen` trait; everything else here is the
// machinery behind its one real implementation, `Terminal`.

pub mod ansi;
pub mod input;
pub mod output;
pub mod reader;
pub mod screen;
pub mod signal;
pub mod terminal;

pub use input::{KeyCode, KeyEvent, Modifiers};
pub use screen::Screen;
pub use terminal::{Size, Terminal};
