//! Shot outcomes and crate-level errors.

use thiserror::Error;

use crate::position::CellPosition;

/// Outcome class of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotKind {
    Miss,
    Hit,
    Kill,
}

/// A resolved shot: the target, its outcome, and every other cell whose
/// damaged flag flipped as a side effect. Created fresh per shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotResult {
    pub target: CellPosition,
    pub kind: ShotKind,
    pub affected_cells: Vec<CellPosition>,
}

impl ShotResult {
    pub fn miss(target: CellPosition) -> Self {
        Self {
            target,
            kind: ShotKind::Miss,
            affected_cells: Vec::new(),
        }
    }

    pub fn hit(target: CellPosition, affected_cells: Vec<CellPosition>) -> Self {
        Self {
            target,
            kind: ShotKind::Hit,
            affected_cells,
        }
    }

    pub fn kill(target: CellPosition, affected_cells: Vec<CellPosition>) -> Self {
        Self {
            target,
            kind: ShotKind::Kill,
            affected_cells,
        }
    }
}

/// Fatal construction and generation failures. Recoverable gameplay failures
/// (invalid placements, repeated shots, incomplete builds) are signalled with
/// `bool`/`Option` returns instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("field dimensions and ship counts must be positive")]
    InvalidRules,
    #[error("both players must play by the same rules")]
    MismatchedRules,
    #[error("no full-fleet placement satisfies the constraints")]
    GenerationFailed,
}
