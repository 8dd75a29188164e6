use seabattle::{CellPosition, FieldBuilder, GameRules, ShipCounts, ShipType, Size};

fn custom_rules(size: Size, counts: &[(ShipType, i32)]) -> GameRules {
    let mut ships_count = ShipCounts::new();
    for &(kind, count) in counts {
        ships_count[kind] = count;
    }
    GameRules::new(size, ships_count).unwrap()
}

#[test]
fn test_single_cell_debits_a_submarine() {
    let mut builder = FieldBuilder::new(GameRules::default());
    assert!(builder.try_add_ship_cell(CellPosition::new(1, 3)));
    assert!(builder.is_occupied(CellPosition::new(1, 3)));
    assert_eq!(builder.ships_left()[ShipType::Submarine], 3);
}

#[test]
fn test_growing_a_run_upgrades_its_class() {
    let mut builder = FieldBuilder::new(GameRules::default());
    let cells = [
        CellPosition::new(1, 2),
        CellPosition::new(2, 2),
        CellPosition::new(3, 2),
        CellPosition::new(4, 2),
        CellPosition::new(1, 5),
        CellPosition::new(1, 6),
        CellPosition::new(9, 0),
        CellPosition::new(9, 9),
        CellPosition::new(6, 4),
        CellPosition::new(6, 5),
    ];
    for cell in cells {
        assert!(builder.try_add_ship_cell(cell), "failed to add {cell:?}");
    }

    let left = builder.ships_left();
    assert_eq!(left[ShipType::Battleship], 0);
    assert_eq!(left[ShipType::Cruiser], 2);
    assert_eq!(left[ShipType::Destroyer], 1);
    assert_eq!(left[ShipType::Submarine], 2);
}

#[test]
fn test_bridging_two_runs_counts_both() {
    let mut builder = FieldBuilder::new(GameRules::default());
    assert!(builder.try_add_ship_cell(CellPosition::new(0, 0)));
    assert!(builder.try_add_ship_cell(CellPosition::new(0, 2)));
    // joining the two submarines produces one cruiser
    assert!(builder.try_add_ship_cell(CellPosition::new(0, 1)));

    let left = builder.ships_left();
    assert_eq!(left[ShipType::Submarine], 4);
    assert_eq!(left[ShipType::Cruiser], 1);
}

#[test]
fn test_diagonal_adjacency_is_rejected() {
    let mut builder = FieldBuilder::new(GameRules::default());
    assert!(builder.try_add_ship_cell(CellPosition::new(4, 4)));
    for diagonal in CellPosition::new(4, 4).by_vertex_neighbours() {
        assert!(!builder.try_add_ship_cell(diagonal), "{diagonal:?} accepted");
    }
    assert_eq!(builder.ships_left()[ShipType::Submarine], 3);
}

#[test]
fn test_overlong_run_is_rejected() {
    let mut builder = FieldBuilder::new(GameRules::default());
    assert!(builder.try_add_full_ship(ShipType::Battleship, CellPosition::new(0, 0), false));
    // a fifth cell would form a run longer than any ship class
    assert!(!builder.try_add_ship_cell(CellPosition::new(0, 4)));
    assert!(!builder.is_occupied(CellPosition::new(0, 4)));
    assert_eq!(builder.ships_left()[ShipType::Battleship], 0);
}

#[test]
fn test_out_of_field_and_occupied_cells_are_rejected() {
    let mut builder = FieldBuilder::new(GameRules::default());
    assert!(!builder.try_add_ship_cell(CellPosition::new(-1, 0)));
    assert!(!builder.try_add_ship_cell(CellPosition::new(0, 10)));
    assert!(builder.try_add_ship_cell(CellPosition::new(0, 0)));
    assert!(!builder.try_add_ship_cell(CellPosition::new(0, 0)));
    assert!(!builder.try_remove_ship_cell(CellPosition::new(5, 5)));
    assert!(!builder.try_remove_ship_cell(CellPosition::new(0, -1)));
}

#[test]
fn test_full_ship_placement() {
    let mut builder = FieldBuilder::new(GameRules::default());
    assert!(builder.try_add_full_ship(ShipType::Battleship, CellPosition::new(4, 3), false));
    for column in 3..=6 {
        assert!(builder.is_occupied(CellPosition::new(4, column)));
    }
    assert_eq!(builder.ships_left()[ShipType::Battleship], 0);
    assert_eq!(builder.ships_left()[ShipType::Submarine], 4);
}

#[test]
fn test_failed_full_ship_placement_rolls_back() {
    let mut builder = FieldBuilder::new(GameRules::default());
    assert!(builder.try_add_ship_cell(CellPosition::new(1, 2)));
    let before = builder.ships_left();

    // second cell would touch (1, 2) diagonally
    assert!(!builder.try_add_full_ship(ShipType::Battleship, CellPosition::new(0, 0), false));

    assert_eq!(builder.ships_left(), before);
    for column in 0..4 {
        assert!(!builder.is_occupied(CellPosition::new(0, column)));
    }
}

#[test]
fn test_removing_a_middle_cell_splits_the_run() {
    let mut builder = FieldBuilder::new(GameRules::default());
    assert!(builder.try_add_full_ship(ShipType::Cruiser, CellPosition::new(2, 2), true));
    assert!(builder.try_remove_ship_cell(CellPosition::new(3, 2)));

    let left = builder.ships_left();
    assert_eq!(left[ShipType::Cruiser], 2);
    assert_eq!(left[ShipType::Submarine], 2);
    assert!(builder.is_occupied(CellPosition::new(2, 2)));
    assert!(!builder.is_occupied(CellPosition::new(3, 2)));
    assert!(builder.is_occupied(CellPosition::new(4, 2)));
}

#[test]
fn test_add_then_remove_restores_the_initial_state() {
    let mut builder = FieldBuilder::new(GameRules::default());
    let ships = [
        (ShipType::Battleship, CellPosition::new(0, 0), true),
        (ShipType::Cruiser, CellPosition::new(0, 2), false),
        (ShipType::Destroyer, CellPosition::new(9, 8), false),
        (ShipType::Submarine, CellPosition::new(5, 5), true),
    ];
    for &(kind, start, vertical) in &ships {
        assert!(builder.try_add_full_ship(kind, start, vertical));
    }
    for &(kind, start, vertical) in ships.iter().rev() {
        assert!(builder.try_remove_full_ship(kind, start, vertical));
    }

    assert_eq!(builder.ships_left(), GameRules::default().ships_count());
    assert!(builder.positions().all(|p| !builder.is_occupied(p)));
}

#[test]
fn test_can_be_added_safely() {
    let mut builder = FieldBuilder::new(GameRules::default());
    assert!(builder.try_add_ship_cell(CellPosition::new(2, 2)));

    assert!(builder.can_be_added_safely(ShipType::Battleship, CellPosition::new(0, 3), false, |_| true));
    // would sit next to the occupied cell
    assert!(!builder.can_be_added_safely(ShipType::Battleship, CellPosition::new(1, 1), false, |_| true));
    // overlap
    assert!(!builder.can_be_added_safely(ShipType::Submarine, CellPosition::new(2, 2), false, |_| true));
    // sticks out of the field
    assert!(!builder.can_be_added_safely(ShipType::Battleship, CellPosition::new(0, 8), false, |_| true));
    // the predicate vetoes one of the cells
    assert!(!builder.can_be_added_safely(
        ShipType::Battleship,
        CellPosition::new(0, 3),
        false,
        |p| p != CellPosition::new(0, 4)
    ));
}

#[test]
fn test_build_requires_the_exact_fleet() {
    let rules = custom_rules(Size::new(3, 3), &[(ShipType::Submarine, 1)]);
    let mut builder = FieldBuilder::new(rules);
    assert!(builder.build().is_none());

    assert!(builder.try_add_ship_cell(CellPosition::new(1, 1)));
    let field = builder.build().expect("fleet is complete");
    assert_eq!(field.survived_ships(), rules.ships_count());
    assert!(field[CellPosition::new(1, 1)].is_ship());
}

#[test]
fn test_over_placement_goes_negative_and_blocks_build() {
    let rules = custom_rules(Size::new(5, 5), &[(ShipType::Submarine, 1)]);
    let mut builder = FieldBuilder::new(rules);
    assert!(builder.try_add_ship_cell(CellPosition::new(0, 0)));
    assert!(builder.try_add_ship_cell(CellPosition::new(4, 4)));

    assert_eq!(builder.ships_left()[ShipType::Submarine], -1);
    assert!(builder.build().is_none());

    assert!(builder.try_remove_ship_cell(CellPosition::new(4, 4)));
    assert!(builder.build().is_some());
}

#[test]
fn test_clear_restores_the_quota() {
    let mut builder = FieldBuilder::new(GameRules::default());
    assert!(builder.try_add_full_ship(ShipType::Battleship, CellPosition::new(0, 0), false));
    assert!(builder.try_add_full_ship(ShipType::Destroyer, CellPosition::new(5, 5), true));

    builder.clear();
    assert_eq!(builder.ships_left(), GameRules::default().ships_count());
    assert!(builder.positions().all(|p| !builder.is_occupied(p)));
}

#[test]
fn test_built_ships_are_ordered_along_the_run() {
    let rules = custom_rules(Size::new(6, 6), &[(ShipType::Cruiser, 1)]);
    let mut builder = FieldBuilder::new(rules);
    assert!(builder.try_add_full_ship(ShipType::Cruiser, CellPosition::new(1, 2), false));

    let field = builder.build().unwrap();
    let ship = field.ship_at(CellPosition::new(1, 3)).unwrap();
    assert_eq!(ship.kind(), ShipType::Cruiser);
    assert_eq!(
        ship.pieces(),
        [
            CellPosition::new(1, 2),
            CellPosition::new(1, 3),
            CellPosition::new(1, 4)
        ]
    );
}
