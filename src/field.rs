//! The immutable-after-build playable field and its shot resolution.

use core::fmt;
use core::ops::Index;

use crate::common::ShotResult;
use crate::grid::{Grid, Size};
use crate::position::CellPosition;
use crate::rules::{GameRules, ShipCounts, ShipType};

/// What occupies a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    /// Index into the owning field's ship arena.
    Ship(usize),
}

/// One cell of a playable field. The damaged flag flips to `true` at most
/// once; re-shooting a damaged cell resolves to no result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    pub damaged: bool,
}

impl Cell {
    pub fn is_ship(&self) -> bool {
        matches!(self.kind, CellKind::Ship(_))
    }
}

/// A placed ship: its class and the cells it occupies, in run order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    kind: ShipType,
    pieces: Vec<CellPosition>,
    hits: usize,
}

impl Ship {
    pub fn kind(&self) -> ShipType {
        self.kind
    }

    pub fn pieces(&self) -> &[CellPosition] {
        &self.pieces
    }

    /// Undamaged pieces remaining.
    pub fn health(&self) -> usize {
        self.kind.length() - self.hits
    }

    pub fn killed(&self) -> bool {
        self.health() == 0
    }
}

/// A playable field. Built once by [`FieldBuilder::build`] and mutated only
/// through [`GameField::shoot`].
///
/// [`FieldBuilder::build`]: crate::builder::FieldBuilder::build
#[derive(Debug, Clone)]
pub struct GameField {
    rules: GameRules,
    cells: Grid<Cell>,
    ships: Vec<Ship>,
    survived_ships: ShipCounts,
}

impl GameField {
    /// Assembles a field from validated ship runs. The builder guarantees
    /// every run is a straight, diagonally separated line of 1 to 4 cells.
    pub(crate) fn assemble(rules: GameRules, runs: Vec<Vec<CellPosition>>) -> Self {
        let empty = Cell {
            kind: CellKind::Empty,
            damaged: false,
        };
        let mut cells = Grid::new(rules.field_size(), empty);
        let mut ships = Vec::with_capacity(runs.len());
        for pieces in runs {
            let kind = ShipType::from_length(pieces.len())
                .expect("builder runs always form ships of a defined class");
            for &position in &pieces {
                cells[position].kind = CellKind::Ship(ships.len());
            }
            ships.push(Ship {
                kind,
                pieces,
                hits: 0,
            });
        }
        Self {
            rules,
            cells,
            ships,
            survived_ships: rules.ships_count(),
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

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = CellPosition> {
        self.cells.positions()
    }

    /// The cell grid, for rendering.
    pub fn grid(&self) -> &Grid<Cell> {
        &self.cells
    }

    /// Live piece count per class; an entry drops by one exactly when a ship
    /// of that class dies.
    pub fn survived_ships(&self) -> ShipCounts {
        self.survived_ships
    }

    pub fn ship_at(&self, position: CellPosition) -> Option<&Ship> {
        match self.cells.get(position)?.kind {
            CellKind::Ship(index) => self.ships.get(index),
            CellKind::Empty => None,
        }
    }

    /// Resolves a shot at `target`. Returns `None` when the target is off the
    /// field or already damaged; the field is unchanged in that case and the
    /// caller must not consume a turn.
    ///
    /// A hit on a surviving ship also damages the target's diagonal
    /// neighbours (no ship can occupy them); a kill damages the full
    /// 8-neighbourhood of every piece. Only cells newly damaged by this call
    /// are reported as affected.
    pub fn shoot(&mut self, target: CellPosition) -> Option<ShotResult> {
        if !self.cells.contains(target) || self.cells[target].damaged {
            return None;
        }
        self.cells[target].damaged = true;

        let ship_index = match self.cells[target].kind {
            CellKind::Empty => return Some(ShotResult::miss(target)),
            CellKind::Ship(index) => index,
        };

        self.ships[ship_index].hits += 1;
        if self.ships[ship_index].killed() {
            self.survived_ships[self.ships[ship_index].kind] -= 1;
            let pieces = self.ships[ship_index].pieces.clone();
            let affected =
                self.damage_all(pieces.iter().flat_map(|piece| piece.all_neighbours()));
            Some(ShotResult::kill(target, affected))
        } else {
            let affected = self.damage_all(target.by_vertex_neighbours());
            Some(ShotResult::hit(target, affected))
        }
    }

    /// Damages every in-field, not-yet-damaged target and reports the cells
    /// that actually changed. Duplicates collapse because the first visit
    /// already flips the flag.
    fn damage_all(&mut self, targets: impl Iterator<Item = CellPosition>) -> Vec<CellPosition> {
        let mut affected = Vec::new();
        for position in targets {
            if self.cells.contains(position) && !self.cells[position].damaged {
                self.cells[position].damaged = true;
                affected.push(position);
            }
        }
        affected
    }
}

impl Index<CellPosition> for GameField {
    type Output = Cell;

    fn index(&self, position: CellPosition) -> &Cell {
        &self.cells[position]
    }
}

impl PartialEq for GameField {
    /// Fields compare by size, per-cell damage and per-cell occupancy kind.
    /// Ship identity is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size()
            && self.positions().all(|position| {
                let (ours, theirs) = (&self.cells[position], &other.cells[position]);
                ours.damaged == theirs.damaged && ours.is_ship() == theirs.is_ship()
            })
    }
}

impl Eq for GameField {}

impl fmt::Display for GameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size().height {
            for column in 0..self.size().width {
                let cell = &self.cells[CellPosition::new(row, column)];
                let symbol = match (cell.is_ship(), cell.damaged) {
                    (true, true) => 'X',
                    (true, false) => 'S',
                    (false, true) => 'o',
                    (false, false) => '.',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
