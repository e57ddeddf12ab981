//! Single-shot selection state.
//!
//! `Unanswered -> Answered` on the first submit; later submits are ignored
//! until `reset` returns to `Unanswered`.

use serde::{Deserialize, Serialize};

use crate::geometry::PercentPoint;

/// The recorded click of a question instance.
///
/// A `Selection` only exists while it is active; `reset` drops it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub point: PercentPoint,
    /// Index into the geometry model, `None` when every hotspot was missed.
    pub matched_hotspot: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum State {
    #[default]
    Unanswered,
    Answered(Selection),
}

/// Holds at most one selection and enforces first-click-wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionMachine {
    state: State,
}

impl SelectionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the selection unless one is already active.
    ///
    /// Returns the new selection, or `None` when the call was ignored.
    pub fn submit(
        &mut self,
        point: PercentPoint,
        matched_hotspot: Option<usize>,
    ) -> Option<&Selection> {
        if let State::Answered(_) = self.state {
            return None;
        }

        self.state = State::Answered(Selection {
            point,
            matched_hotspot,
        });
        self.current()
    }

    /// Drops the stored selection. A no-op when unanswered.
    pub fn reset(&mut self) {
        self.state = State::Unanswered;
    }

    pub fn is_answered(&self) -> bool {
        matches!(self.state, State::Answered(_))
    }

    pub fn current(&self) -> Option<&Selection> {
        match &self.state {
            State::Answered(selection) => Some(selection),
            State::Unanswered => None,
        }
    }
}
