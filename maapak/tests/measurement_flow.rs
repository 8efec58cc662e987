//! End-to-end measuring sessions driven through the event loop

use approx::assert_relative_eq;
use maapak::config::AppConfig;
use maapak::core::{CaptureState, compute_length, compute_tilt};
use maapak::events::{EventLoop, SessionEvent, create_event_channel};
use maapak::sensors::{ReplaySource, SampleSource, SensorSubscription, SimulatedOrientation};
use maapak::session::DisplaySnapshot;
use maapak::{DistancePolicy, MeasurementSession, StandoffDistance, TiltAngle};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn meters(m: i64) -> StandoffDistance {
    StandoffDistance::new(m).unwrap()
}

/// Recording line for a device aimed at `deg`
fn recording_line(deg: f64) -> String {
    let s = SimulatedOrientation::ideal_sample(deg);
    serde_json::to_string(&s).unwrap()
}

fn run_events(session: MeasurementSession, events: Vec<SessionEvent>) -> (MeasurementSession, Vec<DisplaySnapshot>) {
    let (tx, rx) = create_event_channel();
    for event in events {
        tx.send(event).unwrap();
    }
    tx.send(SessionEvent::Shutdown).unwrap();

    let mut event_loop = EventLoop::new(session, rx);
    let mut shown: Vec<DisplaySnapshot> = Vec::new();
    event_loop.run(&mut shown).unwrap();
    (event_loop.into_session(), shown)
}

#[test]
fn test_replayed_pair_measures_tree() {
    // Top of a tree at +40°, its base at -8°, from 6 m
    let mut file = NamedTempFile::new().unwrap();
    for deg in [85.0, 60.0, 40.0, 20.0, -8.0] {
        writeln!(file, "{}", recording_line(deg)).unwrap();
    }

    let mut source = ReplaySource::open(file.path()).unwrap();
    let mut events = Vec::new();
    while let Some(sample) = source.read().unwrap() {
        events.push(SessionEvent::Sample(sample));
        let tilt = compute_tilt(&sample).rounded();
        if tilt == 40 || tilt == -8 {
            events.push(SessionEvent::Capture);
        }
    }
    assert_eq!(source.samples_read(), 5);

    let session = MeasurementSession::new(meters(6), DistancePolicy::Frozen);
    let (session, shown) = run_events(session, events);

    let expected = 6.0 * 40f64.to_radians().tan() + 6.0 * 8f64.to_radians().tan();
    let length = session.length_estimate().unwrap();
    assert_relative_eq!(length.meters(), expected, epsilon = 0.0005);

    let last = shown.last().unwrap();
    assert_eq!(last.captured_deg, vec![40, -8]);
    assert_eq!(last.live_tilt_deg, -8);
    assert_eq!(
        last.to_string(),
        format!("tilt -8° | distance 6 meters | captured [40°, -8°] | length {}", length)
    );
}

#[test]
fn test_repeated_pairs_slide_window() {
    let sample = |deg: f64| SessionEvent::Sample(SimulatedOrientation::ideal_sample(deg));
    let events = vec![
        sample(30.0),
        SessionEvent::Capture,
        sample(-30.0),
        SessionEvent::Capture,
        sample(10.0),
        SessionEvent::Capture,
    ];

    let (session, shown) = run_events(MeasurementSession::default(), events);
    assert_eq!(session.state(), CaptureState::OneCaptured);
    assert!(session.length_estimate().is_none());

    // The pair was visible before the third capture replaced it
    assert!(shown.iter().any(|s| s.length.map(|l| l.meters()) == Some(5.774)));
    let last = shown.last().unwrap();
    assert_eq!(last.captured_deg, vec![10]);
    assert!(last.length.is_none());
}

#[test]
fn test_distance_change_policies() {
    let sample = |deg: f64| SessionEvent::Sample(SimulatedOrientation::ideal_sample(deg));
    let events = vec![
        sample(30.0),
        SessionEvent::Capture,
        sample(-30.0),
        SessionEvent::Capture,
        SessionEvent::SelectDistance(meters(10)),
    ];

    let frozen = MeasurementSession::new(meters(5), DistancePolicy::Frozen);
    let (frozen, _) = run_events(frozen, events.clone());
    assert_eq!(frozen.length_estimate().map(|l| l.meters()), Some(5.774));

    let live = MeasurementSession::new(meters(5), DistancePolicy::Live);
    let (live, _) = run_events(live, events);
    assert_eq!(live.length_estimate().map(|l| l.meters()), Some(11.547));
}

#[test]
fn test_mock_subscription_feeds_live_tilt() {
    let config = AppConfig::from_toml_str("[sensor.mock]\ninitial_aim_deg = 25.0\n").unwrap();
    let sim = SimulatedOrientation::new(&config.sensor.mock);

    let (tx, rx) = create_event_channel();
    let subscription =
        SensorSubscription::spawn(Box::new(sim), Duration::from_millis(1), tx.clone()).unwrap();

    let first = rx.recv_timeout(Duration::from_secs(1)).unwrap();
    drop(subscription);

    let mut session = MeasurementSession::default();
    match first {
        SessionEvent::Sample(sample) => session.update_sample(sample),
        other => panic!("expected a sample, got {:?}", other),
    }
    let outcome = session.capture();
    assert_eq!(outcome.angle.rounded(), 25);
    assert_eq!(outcome.state, CaptureState::OneCaptured);
}

#[test]
fn test_config_file_round_trip() {
    let file = NamedTempFile::new().unwrap();
    let mut config = AppConfig::default();
    config.measurement.default_distance_m = 3;
    config.measurement.distance_policy = DistancePolicy::Live;
    config.to_file(file.path()).unwrap();

    let loaded = AppConfig::load(file.path()).unwrap();
    assert_eq!(loaded.measurement.distance().unwrap(), meters(3));
    assert_eq!(loaded.measurement.distance_policy, DistancePolicy::Live);
    assert_eq!(loaded.sensor.update_interval_ms, 100);
}

#[test]
fn test_testable_properties() {
    let flat = compute_tilt(&maapak::OrientationSample::new(0.3, 0.0, 1.0));
    assert_relative_eq!(flat.degrees(), 90.0, epsilon = 1e-12);

    let deg = TiltAngle::from_degrees;
    assert_eq!(compute_length(deg(30.0), deg(-30.0), meters(5)).meters(), 5.774);
    assert_eq!(compute_length(deg(0.0), deg(0.0), meters(1)).meters(), 0.0);
}
