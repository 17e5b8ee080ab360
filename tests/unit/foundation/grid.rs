use super::*;

#[test]
fn from_raw_rejects_zero_dimensions() {
    assert!(matches!(
        GrayGrid::from_raw(0, 4, vec![]),
        Err(ExtrudeError::Shape(_))
    ));
    assert!(matches!(
        GrayGrid::from_raw(4, 0, vec![]),
        Err(ExtrudeError::Shape(_))
    ));
    assert!(matches!(
        GrayGrid::filled(0, 0, 7),
        Err(ExtrudeError::Shape(_))
    ));
}

#[test]
fn from_raw_rejects_length_mismatch() {
    let err = GrayGrid::from_raw(3, 2, vec![0; 5]).unwrap_err();
    assert!(err.to_string().contains("expected 3x2 = 6"));
}

#[test]
fn get_and_row_are_row_major() {
    let g = GrayGrid::from_raw(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(g.get(0, 0), Some(1));
    assert_eq!(g.get(2, 0), Some(3));
    assert_eq!(g.get(0, 1), Some(4));
    assert_eq!(g.get(3, 0), None);
    assert_eq!(g.get(0, 2), None);
    assert_eq!(g.row(1), &[4, 5, 6]);
    assert_eq!(g.dimensions(), (3, 2));
    assert_eq!(g.len(), 6);
}

#[test]
fn inverted_is_a_copy() {
    let g = GrayGrid::from_raw(2, 1, vec![0, 200]).unwrap();
    let inv = g.inverted();
    assert_eq!(inv.as_raw(), &[255, 55]);
    assert_eq!(g.as_raw(), &[0, 200]);
}

#[test]
fn reflected_swaps_opposite_corners() {
    let g = GrayGrid::from_raw(2, 2, vec![1, 2, 3, 4]).unwrap();
    let r = g.reflected();
    assert_eq!(r.as_raw(), &[4, 3, 2, 1]);
    assert_eq!(r.reflected(), g);
}
