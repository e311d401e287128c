use tictactoe::{BitGrid, BitGridError};

#[test]
fn test_try_new_sizes() {
    // Success for a grid that fits
    let ok = BitGrid::<u16, 3>::try_new();
    assert!(ok.is_ok());

    // Failure when the grid is too large for the backing integer
    let err = BitGrid::<u8, 3>::try_new();
    assert!(matches!(err, Err(BitGridError::SizeTooLarge { .. })));
}

#[test]
fn test_get_set_bounds() {
    let mut grid = BitGrid::<u16, 3>::new();
    assert!(grid.is_empty());

    grid.set(4).unwrap();
    assert!(grid.get(4).unwrap());
    assert!(!grid.get(0).unwrap());
    assert_eq!(grid.count_ones(), 1);

    assert!(matches!(
        grid.get(9),
        Err(BitGridError::CellOutOfBounds { cell: 9, cells: 9 })
    ));
    assert!(matches!(
        grid.set(42),
        Err(BitGridError::CellOutOfBounds { .. })
    ));
}

#[test]
fn test_from_cells_and_iter() {
    let grid = BitGrid::<u16, 3>::from_cells([2, 4, 6]).unwrap();
    let cells: Vec<_> = grid.iter_set_cells().collect();
    assert_eq!(cells, vec![2, 4, 6]);
}

#[test]
fn test_contains_masks() {
    let held = BitGrid::<u16, 3>::from_cells([0, 1, 2, 4]).unwrap();
    let top_row = BitGrid::<u16, 3>::from_cells([0, 1, 2]).unwrap();
    let left_col = BitGrid::<u16, 3>::from_cells([0, 3, 6]).unwrap();

    assert!(held.contains(top_row));
    assert!(!held.contains(left_col));
    assert_eq!((held & top_row).count_ones(), 3);
    assert_eq!((held | left_col).count_ones(), 6);
}

#[test]
fn test_full_and_clear() {
    let mut grid = BitGrid::<u16, 3>::from_cells(0..9).unwrap();
    assert!(grid.is_full());
    assert_eq!(grid.count_ones(), 9);

    grid.clear_all();
    assert!(grid.is_empty());
    assert!(!grid.is_full());
}
