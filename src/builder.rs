//! Constraint-checked, incremental ship placement.

use std::collections::VecDeque;

use rand::Rng;

use crate::common::GameError;
use crate::field::GameField;
use crate::generator;
use crate::grid::{Grid, Size};
use crate::position::CellPosition;
use crate::rules::{GameRules, ShipCounts, ShipType};

fn run_class(length: usize) -> ShipType {
    ShipType::from_length(length).expect("occupied runs always form ships of a defined class")
}

/// Mutable placement state from which a [`GameField`] is built.
///
/// Occupied cells always form straight, diagonally separated runs of 1 to 4
/// cells: the add/remove checks maintain that invariant, so every component
/// found by the connectivity searches is a well-formed ship.
pub struct FieldBuilder {
    rules: GameRules,
    cells: Grid<bool>,
    ships_left: ShipCounts,
}

impl FieldBuilder {
    pub fn new(rules: GameRules) -> Self {
        Self {
            rules,
            cells: Grid::new(rules.field_size(), false),
            ships_left: rules.ships_count(),
        }
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn size(&self) -> Size {
        self.cells.size()
    }

    pub fn contains(&self, position: CellPosition) -> bool {
        self.cells.contains(position)
    }

    pub fn is_occupied(&self, position: CellPosition) -> bool {
        self.cells.contains(position) && self.cells[position]
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = CellPosition> {
        self.cells.positions()
    }

    /// The occupancy grid, for rendering placement UIs.
    pub fn grid(&self) -> &Grid<bool> {
        &self.cells
    }

    /// Requested-minus-placed count per class. Entries go negative when the
    /// editor places more ships of a class than the rules ask for; that state
    /// is reported as-is, and [`FieldBuilder::build`] only accepts all-zero.
    pub fn ships_left(&self) -> ShipCounts {
        self.ships_left
    }

    /// Places a single ship cell. Fails without mutating when the target is
    /// off the field, occupied, diagonally adjacent to another ship, or would
    /// join neighbouring runs into a length no ship class has.
    pub fn try_add_ship_cell(&mut self, target: CellPosition) -> bool {
        if !self.cells.contains(target) || self.cells[target] {
            return false;
        }
        if target.by_vertex_neighbours().any(|n| self.is_occupied(n)) {
            return false;
        }

        let joined: Vec<usize> = target
            .by_edge_neighbours()
            .filter(|&n| self.is_occupied(n))
            .map(|n| self.connected_run(n).len())
            .collect();
        let new_kind = match ShipType::from_length(joined.iter().sum::<usize>() + 1) {
            Some(kind) => kind,
            None => return false,
        };

        for &length in &joined {
            self.ships_left[run_class(length)] += 1;
        }
        self.ships_left[new_kind] -= 1;
        self.cells[target] = true;
        true
    }

    /// Removes a single ship cell, splitting its run. Fails when the target
    /// is off the field or not occupied.
    pub fn try_remove_ship_cell(&mut self, target: CellPosition) -> bool {
        if !self.is_occupied(target) {
            return false;
        }
        self.cells[target] = false;

        let fragments: Vec<usize> = target
            .by_edge_neighbours()
            .filter(|&n| self.is_occupied(n))
            .map(|n| self.connected_run(n).len())
            .collect();

        self.ships_left[run_class(fragments.iter().sum::<usize>() + 1)] += 1;
        for &length in &fragments {
            self.ships_left[run_class(length)] -= 1;
        }
        true
    }

    /// Places `kind.length()` consecutive cells from `start`, stepping down
    /// when `vertical` and right otherwise. Atomic: when any cell is
    /// rejected, the cells already placed by this call are removed again.
    pub fn try_add_full_ship(&mut self, kind: ShipType, start: CellPosition, vertical: bool) -> bool {
        let delta = Self::step(vertical);
        for index in 0..kind.length() {
            if !self.try_add_ship_cell(start + delta * index as i32) {
                for placed in (0..index).rev() {
                    self.try_remove_ship_cell(start + delta * placed as i32);
                }
                return false;
            }
        }
        true
    }

    /// Inverse of [`FieldBuilder::try_add_full_ship`], with the same
    /// all-or-nothing behaviour.
    pub fn try_remove_full_ship(
        &mut self,
        kind: ShipType,
        start: CellPosition,
        vertical: bool,
    ) -> bool {
        let delta = Self::step(vertical);
        for index in 0..kind.length() {
            if !self.try_remove_ship_cell(start + delta * index as i32) {
                for removed in (0..index).rev() {
                    self.try_add_ship_cell(start + delta * removed as i32);
                }
                return false;
            }
        }
        true
    }

    /// Pure pre-check used by the generator: the whole ship must fit on
    /// unoccupied cells allowed by `can_use`, with no occupied cell anywhere
    /// in its 8-neighbourhood. Stricter than what
    /// [`FieldBuilder::try_add_ship_cell`] accepts, which keeps the
    /// backtracking search away from doomed branches.
    pub fn can_be_added_safely(
        &self,
        kind: ShipType,
        start: CellPosition,
        vertical: bool,
        can_use: impl Fn(CellPosition) -> bool,
    ) -> bool {
        let delta = Self::step(vertical);
        (0..kind.length()).all(|index| {
            let position = start + delta * index as i32;
            self.cells.contains(position)
                && !self.cells[position]
                && can_use(position)
                && position.all_neighbours().all(|n| !self.is_occupied(n))
        })
    }

    /// Builds the immutable field once every counter is exactly zero;
    /// otherwise returns `None` and the builder keeps its state for further
    /// editing. Each maximal run of occupied cells becomes one ship, pieces
    /// ordered along the run.
    pub fn build(&self) -> Option<GameField> {
        if !self.ships_left.all_zero() {
            return None;
        }

        let mut seen = Grid::new(self.size(), false);
        let mut runs = Vec::new();
        for position in self.cells.positions() {
            if self.cells[position] && !seen[position] {
                let mut run = self.connected_run(position);
                run.sort();
                for &cell in &run {
                    seen[cell] = true;
                }
                runs.push(run);
            }
        }
        Some(GameField::assemble(self.rules, runs))
    }

    /// Removes every placed cell, restoring the full quota.
    pub fn clear(&mut self) {
        self.cells = Grid::new(self.size(), false);
        self.ships_left = self.rules.ships_count();
    }

    /// Fills the remaining fleet at random and builds the field. The
    /// unconstrained top-level case is always satisfiable on sane rules, so
    /// exhaustion surfaces as a hard [`GameError::GenerationFailed`].
    pub fn generate_random_field<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<GameField, GameError> {
        generator::generate(self, rng, |_| true).ok_or(GameError::GenerationFailed)
    }

    /// Every occupied cell edge-connected to `start`, `start` included.
    /// Runs never exceed 4 cells, so the linear membership scan is fine.
    fn connected_run(&self, start: CellPosition) -> Vec<CellPosition> {
        let mut visited = vec![start];
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            for next in current.by_edge_neighbours() {
                if self.is_occupied(next) && !visited.contains(&next) {
                    visited.push(next);
                    queue.push_back(next);
                }
            }
        }
        visited
    }

    fn step(vertical: bool) -> CellPosition {
        if vertical {
            CellPosition::DELTA_DOWN
        } else {
            CellPosition::DELTA_RIGHT
        }
    }
}
