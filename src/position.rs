//! Grid coordinates and their neighbourhood queries.

use core::ops::{Add, Mul};

const EDGE_DELTAS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
const VERTEX_DELTAS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, 1), (1, -1)];

/// A (row, column) coordinate. Positions are plain values and may lie outside
/// any particular field; the containers that use them check bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPosition {
    pub row: i32,
    pub column: i32,
}

impl CellPosition {
    /// One step to the right, for walking horizontal runs.
    pub const DELTA_RIGHT: CellPosition = CellPosition::new(0, 1);
    /// One step down, for walking vertical runs.
    pub const DELTA_DOWN: CellPosition = CellPosition::new(1, 0);

    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// The 4 orthogonally adjacent cells.
    pub fn by_edge_neighbours(self) -> impl Iterator<Item = CellPosition> {
        EDGE_DELTAS
            .iter()
            .map(move |&(dr, dc)| CellPosition::new(self.row + dr, self.column + dc))
    }

    /// The 4 diagonally adjacent cells.
    pub fn by_vertex_neighbours(self) -> impl Iterator<Item = CellPosition> {
        VERTEX_DELTAS
            .iter()
            .map(move |&(dr, dc)| CellPosition::new(self.row + dr, self.column + dc))
    }

    /// All 8 surrounding cells.
    pub fn all_neighbours(self) -> impl Iterator<Item = CellPosition> {
        self.by_edge_neighbours().chain(self.by_vertex_neighbours())
    }
}

impl Add for CellPosition {
    type Output = CellPosition;

    fn add(self, other: CellPosition) -> CellPosition {
        CellPosition::new(self.row + other.row, self.column + other.column)
    }
}

impl Mul<i32> for CellPosition {
    type Output = CellPosition;

    fn mul(self, factor: i32) -> CellPosition {
        CellPosition::new(self.row * factor, self.column * factor)
    }
}
