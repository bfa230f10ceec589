//! Interrupt-to-main-loop synchronisation primitives.
//!
//! Two kinds of producers run asynchronously to the control loop:
//!
//! - **Button edges** set one of two [`InterruptFlags`] bits.  Each bit is
//!   single-producer/single-consumer with "latest edge wins" semantics: a
//!   second press before consumption is coalesced, not queued.  The
//!   Button task is the only consumer and clears each flag exactly once,
//!   at the moment it acts on it.
//! - **The timer tick** pulses a [`TickSignal`].  The main loop performs
//!   exactly one blocking wait per iteration, runs one scheduler pass,
//!   and waits again.  The signal coalesces like the flags do: a tick
//!   raised while a pass is still running yields exactly one more pass.
//!
//! ```text
//! ┌─────────────┐  set_left/set_right   ┌──────────────┐
//! │ Button ISR  │──────────────────────▶│InterruptFlags│──▶ Button task
//! └─────────────┘                       └──────────────┘   (take_* once)
//! ┌─────────────┐        signal         ┌──────────────┐
//! │ Timer ISR   │──────────────────────▶│  TickSignal  │──▶ Main loop
//! └─────────────┘                       └──────────────┘   (wait per pass)
//! ```
//!
//! Producers only store a flag and return; no task logic runs in
//! interrupt context.

use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

// ── Button-edge flags ─────────────────────────────────────────

/// Which button produced an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEdge {
    /// Left button — lowers the set-point.
    Left,
    /// Right button — raises the set-point.
    Right,
}

/// The two button-edge flags.
///
/// Lock-free: safe to set from interrupt context.  The consume side uses
/// an atomic swap, so the test-and-clear pair can never lose an edge or
/// observe one twice regardless of the platform's word size.
pub struct InterruptFlags {
    left: AtomicBool,
    right: AtomicBool,
}

impl InterruptFlags {
    pub const fn new() -> Self {
        Self {
            left: AtomicBool::new(false),
            right: AtomicBool::new(false),
        }
    }

    /// Record a falling edge.  Producer side — call from the ISR.
    pub fn set(&self, edge: ButtonEdge) {
        match edge {
            ButtonEdge::Left => self.left.store(true, Ordering::Release),
            ButtonEdge::Right => self.right.store(true, Ordering::Release),
        }
    }

    /// Non-destructive read of the left flag.  Used by the Button task's
    /// next-state phase, which must not clear anything.
    pub fn left_pending(&self) -> bool {
        self.left.load(Ordering::Acquire)
    }

    /// Non-destructive read of the right flag.
    pub fn right_pending(&self) -> bool {
        self.right.load(Ordering::Acquire)
    }

    /// Consume the left flag.  Returns whether it was set.  Single
    /// consumer: only the Button task's entry action calls this.
    pub fn take_left(&self) -> bool {
        self.left.swap(false, Ordering::AcqRel)
    }

    /// Consume the right flag.
    pub fn take_right(&self) -> bool {
        self.right.swap(false, Ordering::AcqRel)
    }
}

impl Default for InterruptFlags {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tick signal ───────────────────────────────────────────────

/// Blocking, coalescing tick notification.
///
/// Replaces a busy-wait on a tick flag: the consumer parks on a condition
/// variable instead of spinning, while keeping the same contract — each
/// `wait` returns once per raised tick, and ticks raised before the
/// consumer arrives are coalesced into one.
pub struct TickSignal {
    ready: Mutex<bool>,
    cv: Condvar,
}

impl TickSignal {
    pub const fn new() -> Self {
        Self {
            ready: Mutex::new(false),
            cv: Condvar::new(),
        }
    }

    /// Raise the tick.  Producer side — call from the timer callback.
    pub fn signal(&self) {
        let mut ready = lock_ignore_poison(&self.ready);
        *ready = true;
        self.cv.notify_one();
    }

    /// Block until the tick is raised, then clear it.  Single consumer:
    /// the main loop calls this exactly once per iteration.
    pub fn wait(&self) {
        let mut ready = lock_ignore_poison(&self.ready);
        while !*ready {
            ready = self
                .cv
                .wait(ready)
                .unwrap_or_else(PoisonError::into_inner);
        }
        *ready = false;
    }
}

impl Default for TickSignal {
    fn default() -> Self {
        Self::new()
    }
}

// The guarded value is a single bool with no invariants that a panicking
// holder could break, so poisoning is ignored rather than propagated.
fn lock_ignore_poison<'a>(m: &'a Mutex<bool>) -> MutexGuard<'a, bool> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}
