use othello::{BitBoard, BitBoardError, BB8x8};

#[test]
fn test_get_set_clear() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());

    bb.clear(1, 1).unwrap();
    assert!(!bb.get(1, 1).unwrap());

    bb.set(2, 3).unwrap();
    assert!(bb.get(2, 3).unwrap());
    assert_eq!(bb.count_ones(), 1);
}

#[test]
fn test_out_of_bounds_fails_closed() {
    let mut bb = BB8x8::new();
    assert_eq!(
        bb.set(8, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 8, col: 0 })
    );
    assert_eq!(
        bb.get(0, 8),
        Err(BitBoardError::IndexOutOfBounds { row: 0, col: 8 })
    );
    assert!(bb.is_empty());
}

#[test]
fn test_from_iter_and_iter() {
    let bb = BitBoard::<u16, 4>::from_iter([(3, 3), (0, 1)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
}

#[test]
fn test_not_stays_on_board() {
    // 3x3 uses 9 of the 16 bits; the complement must not leak past them.
    let empty = BitBoard::<u16, 3>::new();
    assert_eq!((!empty).count_ones(), 9);
    assert_eq!((!BB8x8::new()).count_ones(), 64);
}

#[test]
fn test_row_major_layout() {
    let bb = BB8x8::from_iter([(0, 0), (7, 7), (1, 0)]).unwrap();
    assert_eq!(bb.into_raw(), 1 | (1 << 8) | (1 << 63));
}
