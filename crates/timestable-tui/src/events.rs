//! UI events fed to the reducer.

use crossterm::event::Event;

/// Everything the reducer reacts to, in arrival order.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Periodic heartbeat; advances the frame-rate counter.
    Tick,
    /// Raw crossterm input (keys, mouse, resize).
    Terminal(Event),
}
