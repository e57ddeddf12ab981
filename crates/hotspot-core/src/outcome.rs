//! Answer evaluation.

use serde::{Deserialize, Serialize};

use crate::geometry::{GeometryModel, PercentPoint};

/// Maximum score of the question.
pub const MAX_SCORE: u32 = 1;

/// Result category of a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Correct,
    Incorrect,
    /// The click missed every hotspot.
    NoneSelected,
}

/// Matched hotspot and binary score for a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub matched_hotspot: Option<usize>,
    pub kind: OutcomeKind,
    pub score: u32,
}

impl Outcome {
    pub fn is_correct(&self) -> bool {
        self.kind == OutcomeKind::Correct
    }
}

/// Evaluates `point` against the hotspots. First match in configuration
/// order wins.
pub fn evaluate(point: PercentPoint, geometry: &GeometryModel) -> Outcome {
    let matched_hotspot = geometry.hit_test(point);
    let kind = match matched_hotspot.and_then(|index| geometry.get(index)) {
        Some(hotspot) if hotspot.is_correct() => OutcomeKind::Correct,
        Some(_) => OutcomeKind::Incorrect,
        None => OutcomeKind::NoneSelected,
    };
    let score = if kind == OutcomeKind::Correct {
        MAX_SCORE
    } else {
        0
    };

    Outcome {
        matched_hotspot,
        kind,
        score,
    }
}
