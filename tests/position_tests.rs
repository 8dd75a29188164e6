use std::collections::HashSet;

use seabattle::CellPosition;

#[test]
fn test_neighbour_counts() {
    let position = CellPosition::new(3, 7);
    assert_eq!(position.all_neighbours().count(), 8);
    assert_eq!(position.by_edge_neighbours().count(), 4);
    assert_eq!(position.by_vertex_neighbours().count(), 4);
}

#[test]
fn test_neighbour_sets_partition_the_surroundings() {
    let position = CellPosition::new(0, 0);
    let all: HashSet<_> = position.all_neighbours().collect();
    let edge: HashSet<_> = position.by_edge_neighbours().collect();
    let vertex: HashSet<_> = position.by_vertex_neighbours().collect();

    assert!(edge.is_disjoint(&vertex));
    assert_eq!(edge.union(&vertex).copied().collect::<HashSet<_>>(), all);
    assert!(!all.contains(&position));
}

#[test]
fn test_edge_neighbours_are_orthogonal() {
    let position = CellPosition::new(5, 5);
    for neighbour in position.by_edge_neighbours() {
        let dr = (neighbour.row - position.row).abs();
        let dc = (neighbour.column - position.column).abs();
        assert_eq!(dr + dc, 1);
    }
    for neighbour in position.by_vertex_neighbours() {
        let dr = (neighbour.row - position.row).abs();
        let dc = (neighbour.column - position.column).abs();
        assert_eq!((dr, dc), (1, 1));
    }
}

#[test]
fn test_arithmetic() {
    let position = CellPosition::new(2, 3);
    assert_eq!(
        position + CellPosition::DELTA_DOWN,
        CellPosition::new(3, 3)
    );
    assert_eq!(
        position + CellPosition::DELTA_RIGHT * 4,
        CellPosition::new(2, 7)
    );
    assert_eq!(CellPosition::new(1, 2) * 3, CellPosition::new(3, 6));
}

#[test]
fn test_ordering_is_row_major() {
    assert!(CellPosition::new(0, 9) < CellPosition::new(1, 0));
    assert!(CellPosition::new(4, 3) < CellPosition::new(4, 4));
}
