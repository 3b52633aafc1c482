use seabattle::{Orientation, Ship};
use proptest::prelude::*;

#[test]
fn test_horizontal_cells() {
    let ship = Ship::new(3, Orientation::Horizontal, (2, 1));
    assert_eq!(ship.occupied_cells(), &[(2, 1), (2, 2), (2, 3)]);
    assert_eq!(ship.anchor(), (2, 1));
    assert_eq!(ship.length(), 3);
}

#[test]
fn test_vertical_cells_and_contains() {
    let ship = Ship::new(4, Orientation::Vertical, (0, 0));
    assert_eq!(ship.occupied_cells(), &[(0, 0), (1, 0), (2, 0), (3, 0)]);
    for &(r, c) in ship.occupied_cells() {
        assert!(ship.contains(r, c));
    }
    assert!(!ship.contains(4, 0));
    assert!(!ship.contains(0, 1));
}

#[test]
fn test_ring_bounds_clip_at_edges() {
    let ship = Ship::new(3, Orientation::Horizontal, (0, 0));
    let (rows, cols) = ship.ring_bounds(6);
    assert_eq!(rows, 0..=1);
    assert_eq!(cols, 0..=3);

    let ship = Ship::new(2, Orientation::Vertical, (4, 5));
    let (rows, cols) = ship.ring_bounds(6);
    assert_eq!(rows, 3..=5);
    assert_eq!(cols, 4..=5);
}

proptest! {
    #[test]
    fn cells_are_contiguous_and_axis_aligned(
        length in 1usize..8,
        vertical in any::<bool>(),
        row in 0usize..10,
        col in 0usize..10,
    ) {
        let orientation = if vertical { Orientation::Vertical } else { Orientation::Horizontal };
        let ship = Ship::new(length, orientation, (row, col));
        let cells = ship.occupied_cells();
        prop_assert_eq!(cells.len(), length);
        prop_assert_eq!(cells[0], (row, col));
        for (i, &(r, c)) in cells.iter().enumerate() {
            if vertical {
                prop_assert_eq!((r, c), (row + i, col));
            } else {
                prop_assert_eq!((r, c), (row, col + i));
            }
        }
    }
}
