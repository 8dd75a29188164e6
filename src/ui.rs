//! Text rendering of grids, fields and knowledge views.

use crate::field::{Cell, GameField};
use crate::grid::Grid;
use crate::knowledge::FieldKnowledge;
use crate::position::CellPosition;

/// Renders any grid through a caller-supplied cell-to-symbol mapping, with
/// column letters and 1-based row numbers in the margins.
pub fn render_grid<T>(grid: &Grid<T>, symbol: impl Fn(&T) -> char) -> String {
    let size = grid.size();
    let mut out = String::new();

    out.push_str("   ");
    for column in 0..size.width {
        out.push(' ');
        out.push((b'A' + column as u8) as char);
    }
    out.push('\n');

    for row in 0..size.height {
        out.push_str(&format!("{:2} ", row + 1));
        for column in 0..size.width {
            out.push(' ');
            out.push(symbol(&grid[CellPosition::new(row, column)]));
        }
        out.push('\n');
    }
    out
}

/// Symbol mapping for a player's own field, ships revealed.
pub fn own_cell_symbol(cell: &Cell) -> char {
    match (cell.is_ship(), cell.damaged) {
        (true, true) => 'X',
        (true, false) => 'S',
        (false, true) => 'o',
        (false, false) => '.',
    }
}

/// Symbol mapping for an opponent view.
pub fn knowledge_symbol(observation: &Option<bool>) -> char {
    match observation {
        Some(true) => 'X',
        Some(false) => 'o',
        None => '.',
    }
}

/// A player's own field with ships revealed.
pub fn render_own_field(field: &GameField) -> String {
    render_grid(field.grid(), own_cell_symbol)
}

/// What a player knows about the opponent.
pub fn render_knowledge(knowledge: &FieldKnowledge) -> String {
    render_grid(knowledge.grid(), knowledge_symbol)
}

/// Formats a position the way players type them, e.g. `B4`.
pub fn coord_to_string(position: CellPosition) -> String {
    let column = (b'A' + position.column as u8) as char;
    format!("{}{}", column, position.row + 1)
}

/// Parses a `B4`-style coordinate: column letter then 1-based row number.
pub fn parse_coord(input: &str) -> Option<CellPosition> {
    let mut chars = input.chars();
    let column_char = chars.next()?.to_ascii_uppercase();
    if !column_char.is_ascii_uppercase() {
        return None;
    }
    let column = (column_char as u8 - b'A') as i32;
    let row: i32 = chars.as_str().trim().parse().ok()?;
    if row < 1 {
        return None;
    }
    Some(CellPosition::new(row - 1, column))
}
