use crate::ride::{ActivityCategory as Cat, ActivityDescription as Desc, Location, Monitor};
use crate::sim::{SimError, SimTime};

fn loc(row: i64, col: i64) -> Location {
    Location::new(row, col)
}

#[test]
fn report_matches_hand_computed_statistics() {
    let mut m = Monitor::new();
    m.notify(SimTime(0), Cat::Rider, Desc::Request, "R", loc(2, 2));
    m.notify(SimTime(5), Cat::Rider, Desc::Cancel, "R", loc(2, 2));
    m.notify(SimTime(0), Cat::Driver, Desc::Pickup, "D", loc(2, 2));
    m.notify(SimTime(2), Cat::Driver, Desc::Dropoff, "D", loc(4, 4));
    m.notify(SimTime(3), Cat::Driver, Desc::Pickup, "D", loc(4, 5));
    m.notify(SimTime(6), Cat::Driver, Desc::Dropoff, "D", loc(8, 7));

    let report = m.report().expect("report");
    assert_eq!(report.rider_wait_time, 5.0);
    assert_eq!(report.driver_total_distance, 11.0);
    assert_eq!(report.driver_ride_distance, 10.0);
}

#[test]
fn unresolved_riders_are_excluded_from_wait_time() {
    let mut m = Monitor::new();
    m.notify(SimTime(0), Cat::Rider, Desc::Request, "a", loc(0, 0));
    m.notify(SimTime(4), Cat::Rider, Desc::Pickup, "a", loc(0, 0));
    m.notify(SimTime(1), Cat::Rider, Desc::Request, "b", loc(0, 0));
    m.notify(SimTime(2), Cat::Rider, Desc::Request, "c", loc(0, 0));
    m.notify(SimTime(10), Cat::Rider, Desc::Cancel, "c", loc(0, 0));

    assert_eq!(m.average_wait_time().expect("wait"), 6.0);
}

#[test]
fn wait_time_is_undefined_without_resolved_riders() {
    let mut m = Monitor::new();
    m.notify(SimTime(0), Cat::Rider, Desc::Request, "a", loc(0, 0));
    m.notify(SimTime(0), Cat::Driver, Desc::Request, "d", loc(0, 0));

    let err = m.average_wait_time().expect_err("no resolved rider");
    assert!(matches!(
        err,
        SimError::UndefinedStatistic {
            statistic: "rider_wait_time"
        }
    ));
    assert!(m.report().is_err());
}

#[test]
fn distances_are_undefined_without_drivers() {
    let m = Monitor::new();
    assert!(matches!(
        m.average_total_distance(),
        Err(SimError::UndefinedStatistic { .. })
    ));
    assert!(matches!(
        m.average_ride_distance(),
        Err(SimError::UndefinedStatistic { .. })
    ));
}

#[test]
fn single_activity_driver_counts_toward_average_with_zero() {
    let mut m = Monitor::new();
    m.notify(SimTime(0), Cat::Driver, Desc::Request, "idle", loc(9, 9));
    m.notify(SimTime(0), Cat::Driver, Desc::Pickup, "busy", loc(0, 0));
    m.notify(SimTime(4), Cat::Driver, Desc::Dropoff, "busy", loc(2, 2));

    assert_eq!(m.average_total_distance().expect("total"), 2.0);
    assert_eq!(m.average_ride_distance().expect("ride"), 2.0);
}

#[test]
fn ride_distance_only_counts_legs_ending_in_dropoff() {
    let mut m = Monitor::new();
    m.notify(SimTime(0), Cat::Driver, Desc::Request, "D", loc(0, 0));
    m.notify(SimTime(3), Cat::Driver, Desc::Pickup, "D", loc(3, 0));
    m.notify(SimTime(5), Cat::Driver, Desc::Dropoff, "D", loc(3, 4));
    m.notify(SimTime(5), Cat::Driver, Desc::Request, "D", loc(3, 4));

    assert_eq!(m.average_total_distance().expect("total"), 7.0);
    assert_eq!(m.average_ride_distance().expect("ride"), 4.0);
}

#[test]
fn dropoff_as_first_driver_activity_is_rejected() {
    let mut m = Monitor::new();
    m.notify(SimTime(2), Cat::Driver, Desc::Dropoff, "D", loc(4, 4));
    m.notify(SimTime(3), Cat::Driver, Desc::Pickup, "D", loc(4, 5));

    let err = m.average_ride_distance().expect_err("malformed log");
    match err {
        SimError::StructuralLogViolation { driver } => assert_eq!(driver, "D"),
        other => panic!("unexpected error: {other:?}"),
    }
    // 总距离不依赖 pickup/dropoff 结构
    assert_eq!(m.average_total_distance().expect("total"), 1.0);
}

#[test]
fn notify_keeps_duplicate_timestamps_and_separates_categories() {
    let mut m = Monitor::new();
    m.notify(SimTime(17), Cat::Driver, Desc::Dropoff, "X", loc(6, 6));
    m.notify(SimTime(17), Cat::Driver, Desc::Request, "X", loc(6, 6));
    m.notify(SimTime(1), Cat::Rider, Desc::Request, "X", loc(1, 1));

    assert_eq!(m.activities(Cat::Driver, "X").len(), 2);
    assert_eq!(m.activities(Cat::Rider, "X").len(), 1);
    assert!(m.activities(Cat::Rider, "nobody").is_empty());
    assert_eq!(m.actor_count(Cat::Driver), 1);
    assert_eq!(m.actor_count(Cat::Rider), 1);
    assert_eq!(m.to_string(), "Monitor (1 drivers, 1 riders)");
}
