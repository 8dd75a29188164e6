//! Ship classes and the immutable game configuration.

use core::ops::{Index, IndexMut};

use crate::common::GameError;
use crate::grid::Size;

/// Ship classes; the discriminant doubles as the ship's length in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShipType {
    Submarine = 1,
    Destroyer = 2,
    Cruiser = 3,
    Battleship = 4,
}

impl ShipType {
    /// Every class, in ascending length order.
    pub const ALL: [ShipType; 4] = [
        ShipType::Submarine,
        ShipType::Destroyer,
        ShipType::Cruiser,
        ShipType::Battleship,
    ];

    pub const fn length(self) -> usize {
        self as usize
    }

    /// Maps a run length back to its class. Lengths outside `1..=4`, including
    /// the zero of an empty run, have no class and can never be placed.
    pub fn from_length(length: usize) -> Option<ShipType> {
        match length {
            1 => Some(ShipType::Submarine),
            2 => Some(ShipType::Destroyer),
            3 => Some(ShipType::Cruiser),
            4 => Some(ShipType::Battleship),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShipType::Submarine => "Submarine",
            ShipType::Destroyer => "Destroyer",
            ShipType::Cruiser => "Cruiser",
            ShipType::Battleship => "Battleship",
        }
    }
}

/// Per-class signed counters. Every class always has an entry, so lookups
/// never miss; negative values are meaningful for the builder, which tracks
/// over-placement during interactive editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShipCounts([i32; 4]);

impl ShipCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShipType, i32)> + '_ {
        ShipType::ALL.into_iter().map(move |kind| (kind, self[kind]))
    }

    /// Sum over all classes.
    pub fn total(&self) -> i32 {
        self.0.iter().sum()
    }

    pub fn all_zero(&self) -> bool {
        self.0.iter().all(|&count| count == 0)
    }
}

impl Index<ShipType> for ShipCounts {
    type Output = i32;

    fn index(&self, kind: ShipType) -> &i32 {
        &self.0[kind.length() - 1]
    }
}

impl IndexMut<ShipType> for ShipCounts {
    fn index_mut(&mut self, kind: ShipType) -> &mut i32 {
        &mut self.0[kind.length() - 1]
    }
}

/// Immutable game configuration: field dimensions plus the required number of
/// ships of each class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    field_size: Size,
    ships_count: ShipCounts,
}

impl GameRules {
    /// Rejects non-positive dimensions and negative ship counts; no partial
    /// rules value is ever produced.
    pub fn new(field_size: Size, ships_count: ShipCounts) -> Result<Self, GameError> {
        if field_size.height < 1 || field_size.width < 1 {
            return Err(GameError::InvalidRules);
        }
        if ships_count.iter().any(|(_, count)| count < 0) {
            return Err(GameError::InvalidRules);
        }
        Ok(Self {
            field_size,
            ships_count,
        })
    }

    pub fn field_size(&self) -> Size {
        self.field_size
    }

    pub fn ships_count(&self) -> ShipCounts {
        self.ships_count
    }
}

impl Default for GameRules {
    /// The standard fleet on a 10×10 field: one battleship, two cruisers,
    /// three destroyers and four submarines.
    fn default() -> Self {
        let mut ships_count = ShipCounts::new();
        for kind in ShipType::ALL {
            ships_count[kind] = 5 - kind.length() as i32;
        }
        Self {
            field_size: Size::new(10, 10),
            ships_count,
        }
    }
}
