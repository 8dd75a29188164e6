//! A player's partial view of the opponent's field.

use core::ops::{Index, IndexMut};

use crate::grid::{Grid, Size};
use crate::position::CellPosition;

/// Per-cell observations accumulated over a game: `None` unexplored,
/// `Some(false)` known empty, `Some(true)` known ship cell.
///
/// Owned by one player; written only by the controller as shots resolve.
/// Players read it to choose targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldKnowledge {
    cells: Grid<Option<bool>>,
}

impl FieldKnowledge {
    pub fn new(size: Size) -> Self {
        Self {
            cells: Grid::new(size, None),
        }
    }

    pub fn size(&self) -> Size {
        self.cells.size()
    }

    pub fn contains(&self, position: CellPosition) -> bool {
        self.cells.contains(position)
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = CellPosition> {
        self.cells.positions()
    }

    /// Positions not resolved yet.
    pub fn unknown_positions(&self) -> impl Iterator<Item = CellPosition> + '_ {
        self.cells.positions().filter(|&p| self.cells[p].is_none())
    }

    /// The observation grid, for rendering.
    pub fn grid(&self) -> &Grid<Option<bool>> {
        &self.cells
    }
}

impl Index<CellPosition> for FieldKnowledge {
    type Output = Option<bool>;

    fn index(&self, position: CellPosition) -> &Option<bool> {
        &self.cells[position]
    }
}

impl IndexMut<CellPosition> for FieldKnowledge {
    fn index_mut(&mut self, position: CellPosition) -> &mut Option<bool> {
        &mut self.cells[position]
    }
}
