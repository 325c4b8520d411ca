//! Method selection toggling for checkbox-style front ends.
//!
//! A selection is one of 256 bitsets. `toggle` flips bits with xor, so it is
//! its own inverse and toggles of different methods commute. The state lives
//! with the caller; sharing one selection between threads needs the caller's
//! own locking since a read-xor-write is not atomic.

use serde::{Deserialize, Serialize};

use crate::method::CalculationMethod;

/// True when `method` overlaps `current` in at least one bit.
pub fn is_selected(current: CalculationMethod, method: CalculationMethod) -> bool {
    current.intersects(method)
}

/// `current` with every bit of `method` flipped.
pub fn toggle(current: CalculationMethod, method: CalculationMethod) -> CalculationMethod {
    current ^ method
}

/// Caller-owned current selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    current: CalculationMethod,
}

impl Selection {
    pub fn new(current: CalculationMethod) -> Self {
        Self { current }
    }

    pub fn current(&self) -> CalculationMethod {
        self.current
    }

    pub fn is_selected(&self, method: CalculationMethod) -> bool {
        is_selected(self.current, method)
    }

    /// Flip `method` and return the new state.
    pub fn toggle(&mut self, method: CalculationMethod) -> CalculationMethod {
        self.current = toggle(self.current, method);
        self.current
    }

    /// Selected single methods in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = CalculationMethod> {
        self.current.iter_methods()
    }

    pub fn clear(&mut self) {
        self.current = CalculationMethod::empty();
    }
}

impl From<CalculationMethod> for Selection {
    fn from(current: CalculationMethod) -> Self {
        Selection::new(current)
    }
}
