//! Fixed-period timer resource and the system that drives it.

use crate::event::Event;
use crate::intention::Intention;
use crate::system::System;

/// Name of the system returned by [`tick_system`].
pub const TICK_SYSTEM: &str = "tick";

/// Accumulates frame time and fires once per elapsed period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    period_ms: u32,
    elapsed_ms: u32,
}

impl Timer {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            elapsed_ms: 0,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Add `delta_ms`; returns the advanced timer and whether it fired.
    ///
    /// Fires at most once per call. The carried remainder is capped below one
    /// period, so a long stall produces one tick rather than a burst.
    pub fn advance(self, delta_ms: u32) -> (Self, bool) {
        if self.period_ms == 0 {
            return (self, false);
        }
        let elapsed = self.elapsed_ms.saturating_add(delta_ms);
        if elapsed < self.period_ms {
            return (
                Self {
                    elapsed_ms: elapsed,
                    ..self
                },
                false,
            );
        }
        let remainder = (elapsed - self.period_ms).min(self.period_ms - 1);
        (
            Self {
                elapsed_ms: remainder,
                ..self
            },
            true,
        )
    }
}

/// Advance the [`Timer`] resource by the frame delta and emit [`Event::Tick`] when it fires.
pub fn tick_system() -> System {
    System::new(TICK_SYSTEM, |world| {
        let (timer, fired) = world.resource::<Timer>()?.advance(world.delta_ms());
        let intention = Intention::new().set_resource(timer);
        Ok(if fired {
            intention.emit(Event::Tick)
        } else {
            intention
        })
    })
}
