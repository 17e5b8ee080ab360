use super::*;

#[test]
fn axis_directions_map_to_pixel_axes() {
    assert_eq!(Direction::from_degrees(0.0).displacement(10.0), (10, 0));
    assert_eq!(Direction::from_degrees(90.0).displacement(10.0), (0, 10));
    assert_eq!(Direction::from_degrees(180.0).displacement(10.0), (-10, 0));
    assert_eq!(Direction::from_degrees(270.0).displacement(10.0), (0, -10));
}

#[test]
fn diagonal_rounds_to_nearest() {
    // 40 * cos(45deg) = 28.28...
    assert_eq!(Direction::from_degrees(45.0).displacement(40.0), (28, 28));
    assert_eq!(Direction::from_degrees(0.0).displacement(0.0), (0, 0));
}

#[test]
fn halves_round_to_even() {
    let d = Direction {
        alpha: 1.0,
        beta: -1.0,
    };
    assert_eq!(d.displacement(2.5), (2, -2));
    assert_eq!(d.displacement(3.5), (4, -4));
}

#[test]
fn opposite_direction_negates_both_components() {
    for deg in [0.0, 17.0, 45.0, 90.0, 133.0, 200.0, 311.0] {
        for dist in [0.0, 1.0, 6.0, 13.0, 40.0] {
            let (x, y) = Direction::from_degrees(deg).displacement(dist);
            let (rx, ry) = Direction::from_degrees(deg + 180.0).displacement(dist);
            assert_eq!((rx, ry), (-x, -y), "deg={deg} dist={dist}");
        }
    }
}

#[test]
fn opposite_direction_is_bitwise_negation() {
    for tenth in 0..3600 {
        let deg = f64::from(tenth) * 0.1;
        let fwd = Direction::from_degrees(deg);
        let back = Direction::from_degrees(deg + 180.0);
        assert_eq!(back.alpha, -fwd.alpha, "deg={deg}");
        assert_eq!(back.beta, -fwd.beta, "deg={deg}");
    }
}

#[test]
fn thirty_degrees_and_its_opposite_agree_at_one_pixel() {
    // sin(30deg) evaluates just under 0.5
    let (x, y) = Direction::from_degrees(30.0).displacement(1.0);
    let (rx, ry) = Direction::from_degrees(210.0).displacement(1.0);
    assert_eq!((rx, ry), (-x, -y));
    assert_eq!(Direction::from_degrees(-150.0), Direction::from_degrees(210.0));
}

#[test]
fn negative_and_wrapped_angles_resolve_like_their_reduction() {
    assert_eq!(Direction::from_degrees(-90.0), Direction::from_degrees(270.0));
    assert_eq!(Direction::from_degrees(765.0), Direction::from_degrees(45.0));
    assert_eq!(Direction::from_degrees(359.9999999999999).displacement(5.0), (5, 0));
}
