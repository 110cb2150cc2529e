//! Pointer input shared between the host's event handlers and the tick.

use core::cell::Cell;

use crate::float::Float;
use crate::vec::Vec2;

/// Snapshot of the pointer as seen by one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerState<F: Float> {
    pub position: Vec2<F>,
    pub active: bool,
}

impl<F: Float> PointerState<F> {
    pub fn new(x: F, y: F, active: bool) -> Self {
        PointerState { position: Vec2::new(x, y), active }
    }

    /// No pointer over the curtain.
    pub fn inactive() -> Self {
        Self::default()
    }
}

/// Latest-value cell for pointer updates.
///
/// Event handlers write as often as events arrive; the simulation reads one
/// snapshot at the start of each tick. Later writes replace earlier ones.
#[derive(Debug, Default)]
pub struct PointerCell<F: Float> {
    state: Cell<PointerState<F>>,
}

impl<F: Float> PointerCell<F> {
    pub fn new() -> Self {
        PointerCell { state: Cell::new(PointerState::default()) }
    }

    pub fn set(&self, state: PointerState<F>) {
        self.state.set(state);
    }

    /// Pointer moved; keeps the current active flag.
    pub fn move_to(&self, x: F, y: F) {
        let mut state = self.state.get();
        state.position = Vec2::new(x, y);
        self.state.set(state);
    }

    pub fn set_active(&self, active: bool) {
        let mut state = self.state.get();
        state.active = active;
        self.state.set(state);
    }

    pub fn snapshot(&self) -> PointerState<F> {
        self.state.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_writer_wins() {
        let cell = PointerCell::<f32>::new();
        cell.move_to(1.0, 2.0);
        cell.set_active(true);
        cell.move_to(30.0, 40.0);
        assert_eq!(cell.snapshot(), PointerState::new(30.0, 40.0, true));
    }

    #[test]
    fn release_keeps_position() {
        let cell = PointerCell::<f64>::new();
        cell.set(PointerState::new(5.0, 6.0, true));
        cell.set_active(false);
        let snap = cell.snapshot();
        assert!(!snap.active);
        assert_eq!(snap.position, Vec2::new(5.0, 6.0));
    }
}
