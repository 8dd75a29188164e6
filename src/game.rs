//! Turn alternation and shot dispatch between two players.

use log::debug;

use crate::common::{GameError, ShotKind, ShotResult};
use crate::player::Player;
use crate::position::CellPosition;
use crate::rules::GameRules;

/// Mediates one game between two players. Constructed in progress, finished
/// once either fleet has no surviving pieces; a finished game ignores all
/// further shots.
pub struct GameController {
    rules: GameRules,
    first_player: Box<dyn Player>,
    second_player: Box<dyn Player>,
    first_player_turns: bool,
    game_finished: bool,
}

impl GameController {
    /// Both players must play by identical rules.
    pub fn new(
        first_player: Box<dyn Player>,
        second_player: Box<dyn Player>,
    ) -> Result<Self, GameError> {
        if first_player.self_field().rules() != second_player.self_field().rules() {
            return Err(GameError::MismatchedRules);
        }
        let rules = *first_player.self_field().rules();
        Ok(Self {
            rules,
            first_player,
            second_player,
            first_player_turns: true,
            game_finished: false,
        })
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn first_player(&self) -> &dyn Player {
        self.first_player.as_ref()
    }

    pub fn second_player(&self) -> &dyn Player {
        self.second_player.as_ref()
    }

    pub fn current_player(&self) -> &dyn Player {
        if self.first_player_turns {
            self.first_player.as_ref()
        } else {
            self.second_player.as_ref()
        }
    }

    pub fn current_player_mut(&mut self) -> &mut dyn Player {
        if self.first_player_turns {
            self.first_player.as_mut()
        } else {
            self.second_player.as_mut()
        }
    }

    pub fn first_player_turns(&self) -> bool {
        self.first_player_turns
    }

    pub fn game_finished(&self) -> bool {
        self.game_finished
    }

    /// Resolves the current player's shot at `target`.
    ///
    /// Returns `None`, leaving turn and knowledge untouched, when the game is
    /// already over or the target is invalid or previously resolved. After a
    /// valid shot the shooter's knowledge records the target (hit unless
    /// Miss) and every affected cell (miss); a miss passes the turn, hits and
    /// kills grant another one.
    pub fn shoot(&mut self, target: CellPosition) -> Option<ShotResult> {
        if self.game_finished {
            return None;
        }

        let (current, opponent) = if self.first_player_turns {
            (&mut self.first_player, &mut self.second_player)
        } else {
            (&mut self.second_player, &mut self.first_player)
        };

        let result = opponent.self_field_mut().shoot(target)?;

        if opponent.self_field().survived_ships().total() == 0 {
            debug!("fleet destroyed, game over");
            self.game_finished = true;
        }

        let knowledge = current.knowledge_mut();
        for &cell in &result.affected_cells {
            knowledge[cell] = Some(false);
        }
        knowledge[result.target] = Some(result.kind != ShotKind::Miss);

        if !self.game_finished && result.kind == ShotKind::Miss {
            self.first_player_turns = !self.first_player_turns;
        }
        Some(result)
    }
}
