use crate::ride::{EventFormat, EventSpec, Location, parse_json, parse_text, rank};
use crate::sim::{SimError, SimTime, Simulation};
use std::path::Path;

const SMALL: &str = "
# 乘客先到，司机后到
1 RiderRequest Dan 1,1 6,6 15

10 DriverRequest Arnold 3,3 2
";

#[test]
fn text_events_parse_skipping_blanks_and_comments() {
    let events = parse_text(SMALL).expect("parse");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].at(), SimTime(1));
    assert_eq!(events[0].rank(), rank::RIDER_REQUEST);
    assert_eq!(events[1].to_string(), "10 -- Arnold: Request a rider");

    let report = Simulation::new().run(events).expect("run");
    assert_eq!(report.rider_wait_time, 11.0);
    assert_eq!(report.driver_total_distance, 14.0);
    assert_eq!(report.driver_ride_distance, 10.0);
}

#[test]
fn text_errors_carry_line_numbers() {
    let raw = "1 RiderRequest Dan 1,1 6,6 15\n\n5 Teleport Dan 1,1\n";
    match parse_text(raw) {
        Err(SimError::Parse { line, message }) => {
            assert_eq!(line, 3);
            assert!(message.contains("Teleport"), "message: {message}");
        }
        Err(other) => panic!("unexpected error: {other:?}"),
        Ok(_) => panic!("expected parse error"),
    }

    assert!(matches!(
        parse_text("x RiderRequest Dan 1,1 6,6 15"),
        Err(SimError::Parse { line: 1, .. })
    ));
    assert!(matches!(
        parse_text("1 DriverRequest Arnold 3;3 2"),
        Err(SimError::Parse { line: 1, .. })
    ));
}

#[test]
fn zero_speed_driver_is_rejected_while_loading() {
    assert!(matches!(
        parse_text("1 DriverRequest Arnold 3,3 0"),
        Err(SimError::InvalidSpeed { .. })
    ));
}

#[test]
fn json_events_parse_with_kind_tag() {
    let raw = r#"
    [
        { "kind": "rider_request", "at": 1, "id": "Dan",
          "origin": { "row": 1, "column": 1 }, "destination": { "row": 6, "column": 6 },
          "patience": 15 },
        { "kind": "driver_request", "at": 10, "id": "Arnold",
          "location": { "row": 3, "column": 3 }, "speed": 2 }
    ]
    "#;
    let specs: Vec<EventSpec> = serde_json::from_str(raw).expect("parse specs");
    match &specs[1] {
        EventSpec::DriverRequest {
            location, speed, ..
        } => {
            assert_eq!(*location, Location::new(3, 3));
            assert_eq!(*speed, 2);
        }
        other => panic!("expected driver_request, got {other:?}"),
    }

    let events = parse_json(raw).expect("parse");
    let report = Simulation::new().run(events).expect("run");
    assert_eq!(report.rider_wait_time, 11.0);
}

#[test]
fn json_with_unknown_kind_is_rejected() {
    let raw = r#"[ { "kind": "teleport", "at": 1 } ]"#;
    assert!(matches!(parse_json(raw), Err(SimError::Json(_))));
}

#[test]
fn format_is_inferred_from_extension() {
    assert_eq!(EventFormat::from_path(Path::new("e.json")), EventFormat::Json);
    assert_eq!(EventFormat::from_path(Path::new("e.JSON")), EventFormat::Json);
    assert_eq!(EventFormat::from_path(Path::new("events.txt")), EventFormat::Text);
    assert_eq!(EventFormat::from_path(Path::new("events")), EventFormat::Text);
}

#[test]
fn format_parses_from_command_line_names() {
    use clap::ValueEnum;
    assert_eq!(EventFormat::from_str("json", false), Ok(EventFormat::Json));
    assert_eq!(EventFormat::from_str("text", false), Ok(EventFormat::Text));
    assert!(EventFormat::from_str("yaml", false).is_err());
}
