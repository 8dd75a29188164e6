//! The player abstraction shared by the AI and interactive front-ends.

use rand::rngs::SmallRng;

use crate::field::GameField;
use crate::knowledge::FieldKnowledge;
use crate::position::CellPosition;

/// A game participant. Each player owns its field and its accumulated view of
/// the opponent's field; the controller resolves targets and records what the
/// shot revealed.
pub trait Player {
    fn self_field(&self) -> &GameField;
    fn self_field_mut(&mut self) -> &mut GameField;
    fn knowledge(&self) -> &FieldKnowledge;
    fn knowledge_mut(&mut self) -> &mut FieldKnowledge;

    /// Picks the next cell to shoot at on the opponent's field. Implementors
    /// only read their own knowledge; the RNG keeps target choice replayable
    /// under a fixed seed.
    fn next_target(&mut self, rng: &mut SmallRng) -> CellPosition;
}
