use crate::ride::{Driver, Location, Rider, RiderStatus, manhattan_distance};
use crate::sim::SimError;

#[test]
fn manhattan_distance_sums_axis_deltas() {
    assert_eq!(manhattan_distance(Location::new(2, 2), Location::new(5, 6)), 7);
    assert_eq!(manhattan_distance(Location::new(5, 6), Location::new(2, 2)), 7);
    assert_eq!(manhattan_distance(Location::new(-1, 3), Location::new(1, -3)), 8);
}

#[test]
fn location_parses_and_displays_row_col() {
    let loc: Location = "5,6".parse().expect("parse");
    assert_eq!(loc, Location::new(5, 6));
    assert_eq!(loc.to_string(), "(5,6)");
    assert!("5".parse::<Location>().is_err());
    assert!("a,6".parse::<Location>().is_err());
}

#[test]
fn travel_time_rounds_half_to_even() {
    let d = Driver::new("Tom", Location::new(5, 6), 2).expect("driver");
    assert_eq!(d.travel_time(Location::new(2, 2)), 4); // 7 / 2 = 3.5
    assert_eq!(d.travel_time(Location::new(5, 4)), 1);
    assert_eq!(d.travel_time(Location::new(5, 1)), 2); // 5 / 2 = 2.5
    assert_eq!(d.travel_time(Location::new(5, 6)), 0);
}

#[test]
fn driver_with_zero_speed_is_rejected() {
    let err = Driver::new("Tom", Location::new(0, 0), 0).expect_err("zero speed");
    assert!(matches!(err, SimError::InvalidSpeed { .. }));
}

#[test]
fn driver_drive_and_ride_toggle_idle_and_move() {
    let mut d = Driver::new("Tom", Location::new(5, 6), 2).expect("driver");
    assert!(d.is_idle());

    assert_eq!(d.start_drive(Location::new(5, 4)), 1);
    assert!(!d.is_idle());
    d.end_drive(Location::new(5, 4));
    assert!(d.is_idle());
    assert_eq!(d.location, Location::new(5, 4));

    assert_eq!(d.start_ride(Location::new(1, 4)), 2);
    assert!(!d.is_idle());
    d.end_ride(Location::new(1, 4));
    assert!(d.is_idle());
    assert_eq!(d.location, Location::new(1, 4));
}

#[test]
fn driver_equality_covers_id_location_and_speed() {
    let a = Driver::new("Tom", Location::new(5, 6), 2).expect("driver");
    let b = Driver::new("Tom", Location::new(2, 2), 6).expect("driver");
    let c = Driver::new("Carl", Location::new(5, 6), 2).expect("driver");
    let d = Driver::new("Tom", Location::new(5, 6), 2).expect("driver");
    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_eq!(a, d);
}

#[test]
fn rider_transitions_only_from_waiting() {
    let mut r = Rider::new("Jorge", Location::new(1, 1), Location::new(1, 2), 14);
    assert_eq!(r.status(), RiderStatus::Waiting);
    r.satisfy().expect("waiting -> satisfied");
    assert_eq!(r.status(), RiderStatus::Satisfied);

    let err = r.cancel().expect_err("satisfied rider cannot cancel");
    assert!(matches!(
        err,
        SimError::InvalidRiderTransition {
            from: RiderStatus::Satisfied,
            to: RiderStatus::Cancelled,
            ..
        }
    ));

    let mut r = Rider::new("James", Location::new(2, 3), Location::new(4, 4), 5);
    r.cancel().expect("waiting -> cancelled");
    assert_eq!(r.status(), RiderStatus::Cancelled);
    assert!(r.satisfy().is_err());
}

#[test]
fn manhattan_distance_saturates_at_coordinate_extremes() {
    let a = Location::new(i64::MIN, i64::MIN);
    let b = Location::new(i64::MAX, i64::MAX);
    assert_eq!(manhattan_distance(a, b), u64::MAX);
    assert_eq!(
        manhattan_distance(Location::new(i64::MIN, 0), Location::new(i64::MAX, 0)),
        u64::MAX
    );
}
