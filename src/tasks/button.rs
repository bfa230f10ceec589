//! Button-check task: polls the edge flags and nudges the set-point.
//!
//! ```text
//!          ┌────────[right flag]───▶ Increment ──┐
//! Start ─▶ Check                                 ├──▶ Check
//!          └────────[left flag]────▶ Decrement ──┘
//! ```
//!
//! Phase one reads the flags without clearing them; phase two clears the
//! consumed flag exactly once, at the moment the entry action runs.
//! That split is what makes lost-flag and double-consumption races
//! impossible under the single-consumer rule: a flag raised between the
//! two phases is simply seen on the next firing.
//!
//! The right button wins when both flags are pending; the left edge
//! stays latched and is consumed one firing later.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::flags::InterruptFlags;

use super::context::ControlContext;

/// Button-check task states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Start,
    /// Waiting for an edge flag.
    Check,
    /// Consuming a right edge: raise the set-point.
    Increment,
    /// Consuming a left edge: lower the set-point.
    Decrement,
}

pub(crate) fn tick(
    state: ButtonState,
    ctx: &mut ControlContext,
    flags: &InterruptFlags,
    sink: &mut impl EventSink,
) -> ButtonState {
    // Phase one: next state from current state and the pending flags.
    let next = match state {
        ButtonState::Start => ButtonState::Check,
        ButtonState::Check => {
            if flags.right_pending() {
                ButtonState::Increment
            } else if flags.left_pending() {
                ButtonState::Decrement
            } else {
                ButtonState::Check
            }
        }
        ButtonState::Increment | ButtonState::Decrement => ButtonState::Check,
    };

    // Phase two: entry actions.  Each flag is cleared exactly once, here.
    match next {
        ButtonState::Increment => {
            flags.take_right();
            if ctx.shared.set_point < ctx.config.set_point_max {
                let from = ctx.shared.set_point;
                ctx.shared.set_point += 1;
                info!("set-point raised to {}", ctx.shared.set_point);
                sink.emit(&AppEvent::SetPointChanged {
                    from,
                    to: ctx.shared.set_point,
                });
            }
        }
        ButtonState::Decrement => {
            flags.take_left();
            if ctx.shared.set_point > ctx.config.set_point_min {
                let from = ctx.shared.set_point;
                ctx.shared.set_point -= 1;
                info!("set-point lowered to {}", ctx.shared.set_point);
                sink.emit(&AppEvent::SetPointChanged {
                    from,
                    to: ctx.shared.set_point,
                });
            }
        }
        ButtonState::Start | ButtonState::Check => {}
    }

    next
}
