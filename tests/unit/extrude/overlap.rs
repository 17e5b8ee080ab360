use super::*;

#[test]
fn zero_shift_covers_everything() {
    assert_eq!(
        Overlap::for_shift(5, 4, 0, 0),
        Some(Overlap {
            src_x: 0,
            src_y: 0,
            dst_x: 0,
            dst_y: 0,
            width: 5,
            height: 4,
        })
    );
}

#[test]
fn all_sign_combinations() {
    let pos_pos = Overlap::for_shift(10, 8, 3, 2).unwrap();
    assert_eq!((pos_pos.src_x, pos_pos.dst_x, pos_pos.width), (0, 3, 7));
    assert_eq!((pos_pos.src_y, pos_pos.dst_y, pos_pos.height), (0, 2, 6));

    let neg_neg = Overlap::for_shift(10, 8, -3, -2).unwrap();
    assert_eq!((neg_neg.src_x, neg_neg.dst_x, neg_neg.width), (3, 0, 7));
    assert_eq!((neg_neg.src_y, neg_neg.dst_y, neg_neg.height), (2, 0, 6));

    let pos_neg = Overlap::for_shift(10, 8, 3, -2).unwrap();
    assert_eq!((pos_neg.src_x, pos_neg.dst_x), (0, 3));
    assert_eq!((pos_neg.src_y, pos_neg.dst_y), (2, 0));

    let neg_pos = Overlap::for_shift(10, 8, -3, 2).unwrap();
    assert_eq!((neg_pos.src_x, neg_pos.dst_x), (3, 0));
    assert_eq!((neg_pos.src_y, neg_pos.dst_y), (0, 2));
}

#[test]
fn shift_at_or_past_extent_is_empty() {
    assert_eq!(Overlap::for_shift(4, 4, 4, 0), None);
    assert_eq!(Overlap::for_shift(4, 4, 0, -4), None);
    assert_eq!(Overlap::for_shift(4, 4, -100, 1), None);
    assert!(Overlap::for_shift(4, 4, 3, -3).is_some());
}

#[test]
fn rows_within_clips_destination_band() {
    let o = Overlap::for_shift(6, 10, 0, 3).unwrap();
    // dst rows 3..10, src rows 0..7
    let band = o.rows_within(0, 5).unwrap();
    assert_eq!((band.src_y, band.dst_y, band.height), (0, 3, 2));

    let band = o.rows_within(5, 8).unwrap();
    assert_eq!((band.src_y, band.dst_y, band.height), (2, 5, 3));

    assert_eq!(o.rows_within(0, 3), None);
    assert_eq!(o.rows_within(10, 12), None);
}
