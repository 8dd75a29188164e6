//! Backtracking placement of a builder's remaining fleet.

use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::builder::FieldBuilder;
use crate::field::GameField;
use crate::grid::positions_of;
use crate::position::CellPosition;
use crate::rules::ShipType;

/// Completes `builder`'s remaining fleet at random and builds the field.
///
/// Only cells allowed by `can_use` may host new ship cells. Candidate
/// placements are pre-filtered with `can_be_added_safely` and tried in
/// shuffled order, largest ship first; the search backtracks through every
/// branch before giving up. On success the builder holds the generated fleet;
/// on exhaustion it is restored to its exact pre-call state and `None` is
/// returned.
///
/// Worst case exponential in the number of remaining ships. Fine for a
/// standard fleet on a 10×10 field, but callers handing in adversarial
/// `can_use` predicates must bound the latency themselves.
pub fn generate<R: Rng + ?Sized>(
    builder: &mut FieldBuilder,
    rng: &mut R,
    can_use: impl Fn(CellPosition) -> bool,
) -> Option<GameField> {
    // An over-placed builder can never reach the all-zero build state, so
    // refuse it before mutating anything.
    if builder.ships_left().iter().any(|(_, count)| count < 0) {
        return None;
    }

    let mut remaining: Vec<ShipType> = builder
        .ships_left()
        .iter()
        .flat_map(|(kind, count)| (0..count.max(0)).map(move |_| kind))
        .collect();
    remaining.sort();

    if place_remaining(builder, &mut remaining, rng, &can_use) {
        builder.build()
    } else {
        trace!("field generation exhausted every branch");
        None
    }
}

/// Places the ship popped off `remaining`'s tail (its largest entry), then
/// recurses on the rest. Restores both the builder and `remaining` on
/// failure, so callers can try their next candidate.
fn place_remaining<R: Rng + ?Sized>(
    builder: &mut FieldBuilder,
    remaining: &mut Vec<ShipType>,
    rng: &mut R,
    can_use: &impl Fn(CellPosition) -> bool,
) -> bool {
    let ship = match remaining.pop() {
        Some(ship) => ship,
        None => return true,
    };

    let mut candidates: Vec<(CellPosition, bool)> = positions_of(builder.size())
        .flat_map(|position| [(position, true), (position, false)])
        .filter(|&(start, vertical)| builder.can_be_added_safely(ship, start, vertical, can_use))
        .collect();
    candidates.shuffle(rng);

    for (start, vertical) in candidates {
        let placed = with_ship_placed(builder, ship, start, vertical, |builder| {
            place_remaining(builder, remaining, rng, can_use)
        });
        if placed {
            return true;
        }
    }

    remaining.push(ship);
    false
}

/// Runs `attempt` with the ship placed, removing it again unless `attempt`
/// succeeds. The builder is unchanged whenever this returns `false`.
fn with_ship_placed(
    builder: &mut FieldBuilder,
    ship: ShipType,
    start: CellPosition,
    vertical: bool,
    attempt: impl FnOnce(&mut FieldBuilder) -> bool,
) -> bool {
    if !builder.try_add_full_ship(ship, start, vertical) {
        return false;
    }
    if attempt(builder) {
        true
    } else {
        builder.try_remove_full_ship(ship, start, vertical);
        false
    }
}
