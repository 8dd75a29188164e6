mod builder;
mod common;
mod field;
mod game;
pub mod generator;
mod grid;
mod knowledge;
mod logging;
mod player;
mod player_ai;
mod player_cli;
mod position;
mod rules;
pub mod ui;

pub use builder::*;
pub use common::*;
pub use field::*;
pub use game::*;
pub use grid::*;
pub use knowledge::*;
pub use logging::init_logging;
pub use player::*;
pub use player_ai::{RandomPlayer, SmartPlayer, SmartestPlayer};
pub use player_cli::*;
pub use position::*;
pub use rules::*;
