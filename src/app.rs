// SPDX-License-Identifier: MIT
//
// The clock loop: one cooperative, single-threaded heartbeat.
//
// Each iteration:
//
//   1. consume the interrupt and resize flags (edge-triggered, coalesced)
//   2. poll for at most one key, without blocking
//   3. sample the clock and let the renderer repaint if the text changed
//   4. sleep for the configured interval
//
// The sleep is the only suspension point. Shutdown is cooperative: a quit
// key or SIGINT/SIGTERM is noticed at the top of the next iteration, so
// latency is bounded by the interval.
//
// A resize re-reads the terminal size and drops the render memo, so the
// current time is repainted at the new center straight away instead of
// sitting mispositioned until the next second ticks over.

use std::thread;

use dw_term::{signal, KeyCode, KeyEvent, Modifiers, Screen, Terminal};
use tracing::{debug, info};

use crate::cli::Config;
use crate::clock;
use crate::error::Error;
use crate::render::RenderLoop;

// ─── Action ─────────────────────────────────────────────────────────────────

/// What the loop does after an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

/// Map a key press to an action. `q`, `Q`, and Ctrl+C quit.
#[must_use]
pub fn key_action(key: &KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q' | 'Q'), m) if m.is_empty() => Action::Quit,
        (KeyCode::Char('c'), m) if m == Modifiers::CTRL => Action::Quit,
        _ => Action::Continue,
    }
}

// ─── Iteration ──────────────────────────────────────────────────────────────

/// Signals observed since the previous iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Signals {
    pub interrupted: bool,
    pub resized: bool,
}

impl Signals {
    /// Consume the process-wide signal flags.
    fn take() -> Self {
        Self {
            interrupted: signal::take_interrupt(),
            resized: signal::take_resize(),
        }
    }
}

/// One pass of the loop body, minus the sleep.
///
/// `now` is the formatted time to display.
///
/// # Errors
///
/// Propagates screen I/O and styling errors; the caller stops the loop.
pub fn iterate(
    render: &mut RenderLoop,
    screen: &mut impl Screen,
    signals: Signals,
    now: &str,
) -> Result<Action, Error> {
    if signals.interrupted {
        info!("interrupt received");
        return Ok(Action::Quit);
    }
    if signals.resized {
        render.invalidate();
    }

    if let Some(key) = screen.read_key()? {
        if key_action(&key) == Action::Quit {
            info!(?key, "quit key pressed");
            return Ok(Action::Quit);
        }
    }

    render.tick(screen, now)?;
    Ok(Action::Continue)
}

// ─── Run ────────────────────────────────────────────────────────────────────

/// Take over the terminal and show the clock until asked to stop.
///
/// The terminal is restored on every exit path. If both the loop and the
/// restore fail, the restore error is the one reported.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or restored, or if
/// any iteration fails.
pub fn run(term: &mut Terminal, config: &Config) -> Result<(), Error> {
    term.enter()?;
    signal::install();
    info!(style = %config.style, interval = ?config.interval, "clock started");

    let mut render = RenderLoop::new(config.style.catalog());
    let result = run_inner(term, &mut render, config);

    term.leave()?;
    info!(paints = render.paint_count(), "clock stopped");

    result
}

fn run_inner(term: &mut Terminal, render: &mut RenderLoop, config: &Config) -> Result<(), Error> {
    loop {
        let signals = Signals::take();
        if signals.resized {
            let size = term.refresh_size();
            debug!(cols = size.cols, rows = size.rows, "terminal resized");
        }

        if iterate(render, term, signals, &clock::now())? == Action::Quit {
            return Ok(());
        }

        thread::sleep(config.interval);
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::{Call, RecordingScreen};
    use crate::render::Frame;
    use dw_glyph::Style;

    fn press(c: char) -> KeyEvent {
        KeyEvent::plain(KeyCode::Char(c))
    }

    fn renderer() -> RenderLoop {
        RenderLoop::new(Style::Segment.catalog())
    }

    // ── Keys ─────────────────────────────────────────────────────────

    #[test]
    fn q_quits() {
        assert_eq!(key_action(&press('q')), Action::Quit);
        assert_eq!(key_action(&press('Q')), Action::Quit);
    }

    #[test]
    fn ctrl_c_quits() {
        assert_eq!(key_action(&KeyEvent::ctrl('c')), Action::Quit);
    }

    #[test]
    fn other_keys_are_ignored() {
        for key in [
            press('a'),
            press(' '),
            press('1'),
            KeyEvent::plain(KeyCode::Escape),
            KeyEvent::plain(KeyCode::Up),
            KeyEvent::ctrl('q'),
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: Modifiers::ALT,
            },
        ] {
            assert_eq!(key_action(&key), Action::Continue, "{key:?}");
        }
    }

    // ── Iteration ────────────────────────────────────────────────────

    #[test]
    fn quiet_iteration_paints_once() {
        let mut screen = RecordingScreen::new(80, 24);
        let mut render = renderer();

        let a = iterate(&mut render, &mut screen, Signals::default(), "12:00:00").unwrap();
        let b = iterate(&mut render, &mut screen, Signals::default(), "12:00:00").unwrap();

        assert_eq!((a, b), (Action::Continue, Action::Continue));
        assert_eq!(render.paint_count(), 1);
        assert_eq!(screen.count(&Call::Present), 1);
    }

    #[test]
    fn interrupt_stops_before_any_output() {
        let mut screen = RecordingScreen::new(80, 24);
        let mut render = renderer();
        let signals = Signals {
            interrupted: true,
            resized: false,
        };

        assert_eq!(
            iterate(&mut render, &mut screen, signals, "12:00:00").unwrap(),
            Action::Quit
        );
        assert!(screen.calls.is_empty());
    }

    #[test]
    fn quit_key_stops_before_painting() {
        let mut screen = RecordingScreen::new(80, 24);
        screen.keys.push_back(press('q'));
        let mut render = renderer();

        assert_eq!(
            iterate(&mut render, &mut screen, Signals::default(), "12:00:00").unwrap(),
            Action::Quit
        );
        assert_eq!(render.paint_count(), 0);
    }

    #[test]
    fn one_key_per_iteration() {
        let mut screen = RecordingScreen::new(80, 24);
        screen.keys.extend([press('x'), press('q')]);
        let mut render = renderer();

        let first = iterate(&mut render, &mut screen, Signals::default(), "12:00:00").unwrap();
        assert_eq!(first, Action::Continue);
        let second = iterate(&mut render, &mut screen, Signals::default(), "12:00:00").unwrap();
        assert_eq!(second, Action::Quit);
    }

    #[test]
    fn resize_repaints_unchanged_time() {
        let mut screen = RecordingScreen::new(80, 24);
        let mut render = renderer();
        iterate(&mut render, &mut screen, Signals::default(), "12:00:00").unwrap();

        screen.size = dw_term::Size { cols: 40, rows: 12 };
        let signals = Signals {
            interrupted: false,
            resized: true,
        };
        iterate(&mut render, &mut screen, signals, "12:00:00").unwrap();

        assert_eq!(render.paint_count(), 2);
        assert_eq!(screen.count(&Call::Clear), 2);
    }

    #[test]
    fn without_resize_unchanged_time_is_skipped() {
        let mut screen = RecordingScreen::new(80, 24);
        let mut render = renderer();
        iterate(&mut render, &mut screen, Signals::default(), "12:00:00").unwrap();
        assert_eq!(render.tick(&mut screen, "12:00:00").unwrap(), Frame::Skipped);
    }

    #[test]
    fn screen_errors_propagate() {
        let mut screen = RecordingScreen::new(80, 24);
        screen.fail_present = true;
        let mut render = renderer();

        let err = iterate(&mut render, &mut screen, Signals::default(), "12:00:00").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
