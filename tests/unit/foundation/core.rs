use super::*;

#[test]
fn frame_rejects_empty_dimensions() {
    assert!(Frame::new(0, 5).is_err());
    assert!(Frame::new(5, 0).is_err());
    let f = Frame::new(4, 2).unwrap();
    assert_eq!(f.cells(), 8);
}

#[test]
fn frame_index_of_is_row_major_and_bounded() {
    let f = Frame::new(4, 2).unwrap();
    assert_eq!(f.index_of(CellPos::new(1, 2)), Some(6));
    assert_eq!(f.index_of(CellPos::new(0, 4)), None);
    assert_eq!(f.index_of(CellPos::new(2, 0)), None);
}

#[test]
fn centered_offset_moves_short_content_to_middle() {
    // 10 content rows in a 50-row frame start 20 rows down.
    assert_eq!(Offset::centered(0, 0, 50, 10), Offset::new(0, 20));
    // Full-height content needs no shift.
    assert_eq!(Offset::centered(3, 0, 50, 50), Offset::new(3, 0));
    // Halves round up.
    assert_eq!(Offset::centered(0, 0, 5, 4), Offset::new(0, 1));
    assert_eq!(Offset::centered(0, -1, 5, 4), Offset::new(0, 0));
    assert_eq!(Offset::centered(0, -2, 5, 4), Offset::new(0, -1));
}

#[test]
fn clamp_to_matches_positioning_range() {
    let f = Frame::new(16, 50).unwrap();
    assert_eq!(Offset::new(40, -40).clamp_to(f), Offset::new(16, -25));
    assert_eq!(Offset::new(-3, 7).clamp_to(f), Offset::new(-3, 7));
    assert!(Offset::ZERO.is_zero());
}

#[test]
fn centered_slider_clamps_before_centering() {
    let f = Frame::new(16, 50).unwrap();
    // Slider extremes move 10 content rows to the bottom and past the top edge.
    assert_eq!(Offset::from_centered_slider(0, 25, f, 10), Offset::new(0, 45));
    assert_eq!(Offset::from_centered_slider(0, -25, f, 10), Offset::new(0, -5));
    // Out-of-range slider values saturate at the extremes.
    assert_eq!(Offset::from_centered_slider(40, 99, f, 10), Offset::new(16, 45));
    assert_eq!(Offset::from_centered_slider(0, 0, f, 10), Offset::new(0, 20));
}
