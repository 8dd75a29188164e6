//! AI opponents: uniform random, single-simulation, and repeated-sampling.

use std::collections::{HashMap, VecDeque};

use log::trace;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

use crate::builder::FieldBuilder;
use crate::field::GameField;
use crate::generator;
use crate::knowledge::FieldKnowledge;
use crate::player::Player;
use crate::position::CellPosition;
use crate::rules::{GameRules, ShipType};

/// Shoots uniformly at random among unexplored cells.
pub struct RandomPlayer {
    field: GameField,
    knowledge: FieldKnowledge,
}

impl RandomPlayer {
    pub fn new(field: GameField) -> Self {
        let knowledge = FieldKnowledge::new(field.size());
        Self { field, knowledge }
    }
}

impl Player for RandomPlayer {
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
        let unknown: Vec<CellPosition> = self.knowledge.unknown_positions().collect();
        *unknown
            .choose(rng)
            .expect("a finished game requests no more targets")
    }
}

/// Infers ship locations by simulating one random opponent field consistent
/// with everything observed so far, then shooting where that simulation puts
/// a ship.
pub struct SmartPlayer {
    field: GameField,
    knowledge: FieldKnowledge,
}

impl SmartPlayer {
    pub fn new(field: GameField) -> Self {
        let knowledge = FieldKnowledge::new(field.size());
        Self { field, knowledge }
    }
}

impl Player for SmartPlayer {
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
        smart_target(self.field.rules(), &self.knowledge, rng)
    }
}

/// Monte-Carlo refinement of [`SmartPlayer`]: samples its single-simulation
/// choice many times and shoots the most frequently suggested cell.
pub struct SmartestPlayer {
    field: GameField,
    knowledge: FieldKnowledge,
    samples: usize,
}

impl SmartestPlayer {
    const DEFAULT_SAMPLES: usize = 60;

    pub fn new(field: GameField) -> Self {
        Self::with_samples(field, Self::DEFAULT_SAMPLES)
    }

    pub fn with_samples(field: GameField, samples: usize) -> Self {
        let knowledge = FieldKnowledge::new(field.size());
        Self {
            field,
            knowledge,
            samples: samples.max(1),
        }
    }
}

impl Player for SmartestPlayer {
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
        let mut votes: HashMap<CellPosition, usize> = HashMap::new();
        for _ in 0..self.samples {
            let target = smart_target(self.field.rules(), &self.knowledge, rng);
            *votes.entry(target).or_insert(0) += 1;
        }
        votes
            .into_iter()
            .map(|(position, count)| (count, position))
            .max()
            .map(|(_, position)| position)
            .expect("at least one sample was taken")
    }
}

/// Single-simulation target choice shared by [`SmartPlayer`] and
/// [`SmartestPlayer`].
pub(crate) fn smart_target(
    rules: &GameRules,
    knowledge: &FieldKnowledge,
    rng: &mut SmallRng,
) -> CellPosition {
    let prediction = generate_prediction(rules, knowledge, rng)
        .expect("opponent knowledge always admits a consistent field");
    assert!(
        prediction_matches(&prediction, knowledge),
        "simulated field contradicts recorded observations"
    );

    let damaged_ship = find_damaged_ship(knowledge);
    if !damaged_ship.is_empty() {
        trace!("finishing off damaged ship at {:?}", damaged_ship[0]);
        let targets: Vec<CellPosition> = damaged_ship
            .iter()
            .flat_map(|&cell| cell.by_edge_neighbours())
            .filter(|&n| {
                knowledge.contains(n) && knowledge[n].is_none() && prediction.ship_at(n).is_some()
            })
            .collect();
        return *targets
            .choose(rng)
            .expect("a live damaged ship always has an open continuation");
    }

    // No wounded ship to chase: shoot where the simulation put a ship,
    // preferring bigger predicted ships and then cells with more unexplored
    // diagonal surroundings.
    let candidates: Vec<(usize, usize, CellPosition)> = prediction
        .positions()
        .filter(|&position| prediction[position].is_ship() && knowledge[position].is_none())
        .map(|position| {
            let length = prediction
                .ship_at(position)
                .map_or(0, |ship| ship.kind().length());
            let open_corners = position
                .by_vertex_neighbours()
                .filter(|&n| knowledge.contains(n) && knowledge[n].is_none())
                .count();
            (length, open_corners, position)
        })
        .collect();
    let best = candidates
        .iter()
        .map(|&(length, open_corners, _)| (length, open_corners))
        .max()
        .expect("an unfinished game always leaves unexplored ship cells");
    let pool: Vec<CellPosition> = candidates
        .iter()
        .filter(|&&(length, open_corners, _)| (length, open_corners) == best)
        .map(|&(_, _, position)| position)
        .collect();
    *pool.choose(rng).expect("the best score is held by some cell")
}

/// Simulates one full opponent field consistent with `knowledge`: known hits
/// are re-placed as ship cells, known misses never host simulated ships, and
/// a wounded ship is extended through every plausible continuation until the
/// rest of the fleet can be completed around it.
fn generate_prediction(
    rules: &GameRules,
    knowledge: &FieldKnowledge,
    rng: &mut SmallRng,
) -> Option<GameField> {
    let mut builder = FieldBuilder::new(*rules);
    for position in knowledge.positions() {
        if knowledge[position] == Some(true) {
            builder.try_add_ship_cell(position);
        }
    }

    let can_use = |position: CellPosition| knowledge[position] != Some(false);
    let damaged_ship = find_damaged_ship(knowledge);
    if damaged_ship.is_empty() {
        return generator::generate(&mut builder, rng, can_use);
    }

    // The wounded ship's final length is unknown. Try every covering
    // placement, longest class first, until one admits a complete field.
    for &cell in &damaged_ship {
        builder.try_remove_ship_cell(cell);
    }
    for kind in ShipType::ALL.into_iter().rev() {
        if builder.ships_left()[kind] <= 0 {
            continue;
        }
        for vertical in [true, false] {
            for start in continuations(&builder, &damaged_ship, kind, vertical, &can_use) {
                if !builder.try_add_full_ship(kind, start, vertical) {
                    continue;
                }
                if let Some(prediction) = generator::generate(&mut builder, rng, can_use) {
                    return Some(prediction);
                }
                builder.try_remove_full_ship(kind, start, vertical);
            }
        }
    }
    None
}

/// Candidate placements of `kind` that would fully cover the damaged
/// fragment, scanning along the fragment's row or column.
fn continuations(
    builder: &FieldBuilder,
    fragment: &[CellPosition],
    kind: ShipType,
    vertical: bool,
    can_use: &impl Fn(CellPosition) -> bool,
) -> Vec<CellPosition> {
    let top_left = *fragment
        .iter()
        .min()
        .expect("continuations are only sought for a non-empty fragment");
    let delta = if vertical {
        CellPosition::DELTA_DOWN
    } else {
        CellPosition::DELTA_RIGHT
    };

    let mut found = Vec::new();
    let mut start = if vertical {
        CellPosition::new(0, top_left.column)
    } else {
        CellPosition::new(top_left.row, 0)
    };
    while builder.contains(start) {
        if builder.can_be_added_safely(kind, start, vertical, can_use) {
            let cells: Vec<CellPosition> =
                (0..kind.length()).map(|i| start + delta * i as i32).collect();
            if fragment.iter().all(|cell| cells.contains(cell)) {
                found.push(start);
            }
        }
        start = start + delta;
    }
    found
}

/// The known-hit cells of a ship that is damaged but provably not sunk yet:
/// the edge-connected group of hits around the first hit that still touches
/// an unexplored cell. Empty when every recorded hit belongs to a resolved
/// ship (a kill marks the whole neighbourhood, so sunk ships never qualify).
fn find_damaged_ship(knowledge: &FieldKnowledge) -> Vec<CellPosition> {
    let seed = knowledge.positions().find(|&position| {
        knowledge[position] == Some(true)
            && position
                .all_neighbours()
                .any(|n| knowledge.contains(n) && knowledge[n].is_none())
    });
    match seed {
        Some(seed) => connected_hits(knowledge, seed),
        None => Vec::new(),
    }
}

/// Every known-hit cell edge-connected to `start`, `start` included.
fn connected_hits(knowledge: &FieldKnowledge, start: CellPosition) -> Vec<CellPosition> {
    let mut visited = vec![start];
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        for next in current.by_edge_neighbours() {
            if knowledge.contains(next)
                && knowledge[next] == Some(true)
                && !visited.contains(&next)
            {
                visited.push(next);
                queue.push_back(next);
            }
        }
    }
    visited
}

/// Every resolved cell must agree with the simulation on whether it holds a
/// ship.
fn prediction_matches(prediction: &GameField, knowledge: &FieldKnowledge) -> bool {
    knowledge.positions().all(|position| match knowledge[position] {
        Some(known_ship) => prediction[position].is_ship() == known_ship,
        None => true,
    })
}
