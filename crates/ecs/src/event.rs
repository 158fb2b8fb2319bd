//! Per-frame events.

use tui_snake_types::Control;

/// A transient signal, visible only during the frame it was emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// The game timer elapsed one period.
    Tick,
    /// The head reached the food cell.
    Dinner,
    /// A decoded player control, in arrival order.
    Control(Control),
}

/// Payload-free discriminant of [`Event`], used for gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Tick,
    Dinner,
    Control,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Tick => EventKind::Tick,
            Event::Dinner => EventKind::Dinner,
            Event::Control(_) => EventKind::Control,
        }
    }
}
