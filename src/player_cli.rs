//! Interactive player that reads targets from stdin.

use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::field::GameField;
use crate::knowledge::FieldKnowledge;
use crate::player::Player;
use crate::player_ai::smart_target;
use crate::position::CellPosition;
use crate::ui::{coord_to_string, parse_coord};

/// Human player on a terminal. Accepting the prompt's default delegates the
/// choice to the same simulation the AI uses.
pub struct ConsolePlayer {
    field: GameField,
    knowledge: FieldKnowledge,
}

impl ConsolePlayer {
    pub fn new(field: GameField) -> Self {
        let knowledge = FieldKnowledge::new(field.size());
        Self { field, knowledge }
    }
}

impl Player for ConsolePlayer {
    fn self_field(&self) -> &GameField {
        &self.field
    }

    fn self_field_mut(&mut self) -> &mut GameField {
        &mut self.field
    }

    fn knowledge(&self) -> &FieldKnowledge {
        &self.knowledge
    }

    fn knowledge_mut(&mut self) -> &mut FieldKnowledge {
        &mut self.knowledge
    }

    fn next_target(&mut self, rng: &mut SmallRng) -> CellPosition {
        let suggested = smart_target(self.field.rules(), &self.knowledge, rng);
        loop {
            print!("Enter target [{}]: ", coord_to_string(suggested));
            let _ = io::stdout().flush();
            let mut line = String::new();
            if io::stdin().read_line(&mut line).is_err() {
                return suggested;
            }
            let line = line.trim();
            if line.is_empty() {
                return suggested;
            }
            match parse_coord(line) {
                Some(position) if self.knowledge.contains(position) => return position,
                Some(_) => println!("That cell is off the field"),
                None => println!("Invalid coordinate, use e.g. B4"),
            }
        }
    }
}
