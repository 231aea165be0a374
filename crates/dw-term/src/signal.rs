// SPDX-License-Identifier: MIT
#![allow(unsafe_code)]
//
// Signal flags: resize and interrupt, polled once per loop iteration.
//
// The handlers do nothing but store `true` into an `AtomicBool`, one of the
// few things that is async-signal-safe. The loop consumes a flag with
// `swap(false)`, so any number of signals between two polls collapse into
// one pending notification.
//
// SIGINT and SIGTERM share the interrupt flag: both mean "stop after this
// iteration and restore the terminal". Handling them ourselves (instead of
// the default action of killing the process) is what guarantees the
// terminal is put back.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

/// Set by the SIGWINCH handler.
static RESIZED: AtomicBool = AtomicBool::new(false);

/// Set by the SIGINT / SIGTERM handler.
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

static INSTALLED: Once = Once::new();

/// Install the resize and interrupt handlers (once per process).
pub fn install() {
    INSTALLED.call_once(install_handlers);
}

/// Consume a pending resize notification.
#[must_use]
pub fn take_resize() -> bool {
    RESIZED.swap(false, Ordering::Relaxed)
}

/// Consume a pending interrupt request.
#[must_use]
pub fn take_interrupt() -> bool {
    INTERRUPTED.swap(false, Ordering::Relaxed)
}

/// Raise the resize flag as if SIGWINCH had arrived.
pub fn notify_resize() {
    RESIZED.store(true, Ordering::Relaxed);
}

/// Raise the interrupt flag as if SIGINT had arrived.
pub fn notify_interrupt() {
    INTERRUPTED.store(true, Ordering::Relaxed);
}

#[cfg(unix)]
fn install_handlers() {
    unsafe {
        set_handler(libc::SIGWINCH, on_resize as *const () as usize);
        set_handler(libc::SIGINT, on_interrupt as *const () as usize);
        set_handler(libc::SIGTERM, on_interrupt as *const () as usize);
    }
}

/// # Safety
///
/// `handler` must be the address of an `extern "C" fn(c_int)` that is
/// async-signal-safe.
#[cfg(unix)]
unsafe fn set_handler(sig: libc::c_int, handler: usize) {
    unsafe {
        let mut sa: libc::sigaction = std::mem::zeroed();
        sa.sa_sigaction = handler;
        sa.sa_flags = libc::SA_RESTART;
        libc::sigemptyset(&raw mut sa.sa_mask);
        libc::sigaction(sig, &raw const sa, std::ptr::null_mut());
    }
}

#[cfg(unix)]
extern "C" fn on_resize(_sig: libc::c_int) {
    RESIZED.store(true, Ordering::Relaxed);
}

#[cfg(unix)]
extern "C" fn on_interrupt(_sig: libc::c_int) {
    INTERRUPTED.store(true, Ordering::Relaxed);
}

#[cfg(not(unix))]
fn install_handlers() {}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // The flags are process-global, so one test drives the whole sequence
    // instead of several tests racing on the same statics.
    #[test]
    fn flags_are_edge_triggered_and_coalesce() {
        let _ = take_resize();
        let _ = take_interrupt();

        assert!(!take_resize());
        assert!(!take_interrupt());

        notify_resize();
        notify_resize();
        notify_resize();
        assert!(take_resize());
        assert!(!take_resize(), "three notifications collapse into one");

        notify_interrupt();
        assert!(!take_resize(), "flags are independent");
        assert!(take_interrupt());
        assert!(!take_interrupt());

        // A real SIGWINCH goes through the installed handler, not the
        // default action, and is delivered before raise() returns.
        #[cfg(unix)]
        {
            install();
            unsafe {
                libc::raise(libc::SIGWINCH);
            }
            assert!(take_resize());
        }
    }

    #[test]
    fn install_is_idempotent() {
        install();
        install();
    }
}
