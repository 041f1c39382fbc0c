/// Tests for distance and duration queries on a movement path
/// These pin down the timing a tank controller schedules ticks from

use approx::assert_relative_eq;
use glam::DVec2;
use tankoid::movement::{GridPlace, MovementPath, NO_SPEED_CORRECTION};

fn place(x: f64, y: f64) -> GridPlace {
    GridPlace::new(x, y)
}

#[test]
fn test_distance_is_symmetric() {
    let places = [
        place(0.0, 0.0),
        place(3.0, 4.0),
        place(-12.5, 7.25),
        place(640.0, -480.0),
        place(0.001, 1e6),
    ];

    for a in &places {
        for b in &places {
            let forward = MovementPath::new(a, b, 0.0, 1.0, 1.0);
            let backward = MovementPath::new(b, a, 0.0, 1.0, 1.0);

            assert_eq!(
                forward.distance(),
                backward.distance(),
                "distance {:?} -> {:?} differs from the way back",
                a,
                b
            );
            assert!(forward.distance() >= 0.0);
        }

        let stay = MovementPath::new(a, a, 45.0, 1.0, 1.0);
        assert_eq!(stay.distance(), 0.0);
    }
}

#[test]
fn test_distance_axis_aligned() {
    let path = MovementPath::new(place(0.0, 0.0), place(3.0, 4.0), 0.0, 1.0, 1.0);
    assert_eq!(path.distance(), 5.0);

    let path = MovementPath::new(place(-2.0, 7.0), place(-2.0, -3.0), 0.0, 1.0, 1.0);
    assert_eq!(path.distance(), 10.0);
}

#[test]
fn test_glam_points_as_places() {
    let path = MovementPath::new(DVec2::new(1.0, 1.0), DVec2::new(4.0, 5.0), 0.0, 2.0, 90.0);

    assert_eq!(path.distance(), 5.0);
    assert_relative_eq!(path.movement_duration(), 2500.0);
    assert_eq!(*path.starting_place(), DVec2::new(1.0, 1.0));
}

#[test]
fn test_movement_duration_scales_with_speed() {
    let slow = MovementPath::new(place(0.0, 0.0), place(30.0, 40.0), 0.0, 5.0, 90.0);
    let fast = MovementPath::new(place(0.0, 0.0), place(30.0, 40.0), 0.0, 10.0, 90.0);

    // 50 units at 5 units/s
    assert_relative_eq!(slow.movement_duration(), 10_000.0);
    assert_relative_eq!(fast.movement_duration(), slow.movement_duration() / 2.0);
}

#[test]
fn test_rotation_duration_scales_with_speed() {
    // Facing right, destination straight up on screen: 90 degree turn
    let slow = MovementPath::new(place(0.0, 0.0), place(0.0, -10.0), 0.0, 1.0, 45.0);
    let fast = MovementPath::new(place(0.0, 0.0), place(0.0, -10.0), 0.0, 1.0, 90.0);

    assert_relative_eq!(slow.rotation_duration(), 2000.0);
    assert_relative_eq!(fast.rotation_duration(), 1000.0);

    // Clockwise turns take as long as counter-clockwise ones
    let clockwise = MovementPath::new(place(0.0, 0.0), place(0.0, 10.0), 0.0, 1.0, 90.0);
    assert_relative_eq!(clockwise.rotation_duration(), fast.rotation_duration());
}

#[test]
fn test_no_correction_matches_uncorrected() {
    let paths = [
        MovementPath::new(place(0.0, 0.0), place(3.0, 4.0), 0.0, 7.0, 33.0),
        MovementPath::new(place(10.0, -3.0), place(-8.5, 2.25), -120.0, 0.3, 270.0),
        MovementPath::new(place(1e4, 1e4), place(-1e4, 3.0), 179.0, 123.456, 0.1),
    ];

    for path in &paths {
        assert_eq!(
            path.movement_duration_with(NO_SPEED_CORRECTION),
            path.movement_duration(),
            "movement correction of 100% changed the duration for {}",
            path
        );
        assert_eq!(
            path.rotation_duration_with(NO_SPEED_CORRECTION),
            path.rotation_duration(),
            "rotation correction of 100% changed the duration for {}",
            path
        );
    }
}

#[test]
fn test_correction_scales_movement_and_rotation_alike() {
    let path = MovementPath::new(place(0.0, 0.0), place(0.0, -20.0), 0.0, 10.0, 90.0);

    for correction in [25.0, 50.0, 80.0, 150.0, 200.0, 400.0] {
        let movement_ratio = path.movement_duration_with(correction) / path.movement_duration();
        let rotation_ratio = path.rotation_duration_with(correction) / path.rotation_duration();

        println!(
            "correction {}%: movement x{:.3}, rotation x{:.3}",
            correction, movement_ratio, rotation_ratio
        );

        // Faster than 100% must mean shorter, for both
        assert_relative_eq!(movement_ratio, 100.0 / correction, epsilon = 1e-12);
        assert_relative_eq!(rotation_ratio, 100.0 / correction, epsilon = 1e-12);
    }
}

#[test]
fn test_zero_correction_is_infinite() {
    let path = MovementPath::new(place(0.0, 0.0), place(5.0, 5.0), 0.0, 10.0, 90.0);

    assert!(path.movement_duration_with(0.0).is_infinite());
    assert!(path.rotation_duration_with(0.0).is_infinite());
}

#[test]
fn test_accessors_return_construction_values() {
    let start = place(1.0, 2.0);
    let destination = place(3.0, 4.0);
    let path = MovementPath::new(&start, &destination, -45.0, 12.5, 60.0);

    assert_eq!(**path.starting_place(), start);
    assert_eq!(**path.destination_place(), destination);
    assert_eq!(path.starting_angle(), -45.0);
    assert_eq!(path.movement_speed(), 12.5);
    assert_eq!(path.rotation_speed(), 60.0);
}

#[test]
fn test_summary_format() {
    let path = MovementPath::new(place(10.0, 10.0), place(13.0, 14.0), 90.0, 1.0, 1.0);

    // Heading -53.13, facing 90: turn -143.13
    assert_eq!(
        path.to_string(),
        "From: (10, 10), to: (13, 14), distance: 5, rotation angle: -143.13"
    );

    let path = MovementPath::new(place(0.5, 0.25), place(1.0, 1.0), 0.0, 1.0, 1.0);
    assert_eq!(
        path.to_string(),
        "From: (0.5, 0.25), to: (1, 1), distance: 0.9, rotation angle: -56.31"
    );
}
