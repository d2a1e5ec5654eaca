//! Integration tests: ControlService → policy → relay → publisher, over
//! mock port adapters.

use aquamon::adapters::query::StatusReport;
use aquamon::app::events::AppEvent;
use aquamon::app::ports::{ActuatorPort, EventSink, SensorPort, TelemetrySink};
use aquamon::app::service::ControlService;
use aquamon::config::SystemConfig;
use aquamon::publisher::{TEMPERATURE_PATH, TURBIDITY_PATH};
use aquamon::sensors::{Reading, SensorSnapshot};

// ── Mock implementations ──────────────────────────────────────

struct MockHw {
    temperature: Reading,
    turbidity: Reading,
    level_cm: Reading,
    pump_calls: Vec<bool>,
}

impl MockHw {
    fn new() -> Self {
        Self {
            temperature: Reading::valid(22.0),
            turbidity: Reading::valid(2.5),
            level_cm: Reading::valid(5.0),
            pump_calls: Vec::new(),
        }
    }
}

impl SensorPort for MockHw {
    fn acquire_all(&mut self) -> SensorSnapshot {
        SensorSnapshot {
            temperature: self.temperature,
            turbidity: self.turbidity,
            level_cm: self.level_cm,
        }
    }
}

impl ActuatorPort for MockHw {
    fn set_pump(&mut self, on: bool) {
        self.pump_calls.push(on);
    }
}

struct RecordingSink {
    writes: Vec<(&'static str, f32)>,
}

impl RecordingSink {
    fn new() -> Self {
        Self { writes: Vec::new() }
    }
}

impl TelemetrySink for RecordingSink {
    fn write(&mut self, path: &'static str, value: f32) {
        self.writes.push((path, value));
    }
}

struct EventLog {
    events: Vec<AppEvent>,
}

impl EventLog {
    fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, e: &AppEvent) {
        self.events.push(e.clone());
    }
}

const SEC: u64 = 1_000_000;

fn make_service() -> (ControlService, MockHw, RecordingSink, EventLog) {
    let config = SystemConfig::default();
    let mut service = ControlService::new(&config);
    let hw = MockHw::new();
    let telemetry = RecordingSink::new();
    let mut events = EventLog::new();
    service.start(&mut events);
    (service, hw, telemetry, events)
}

// ── Water low: pump on, snapshot JSON, no level in the sink ──

#[test]
fn water_low_turns_pump_on_and_level_stays_local() {
    let (mut service, mut hw, mut telemetry, mut events) = make_service();
    hw.level_cm = Reading::valid(15.0); // threshold is 10 cm

    service.tick(0, &mut hw, &mut telemetry, &mut events);

    assert_eq!(hw.pump_calls, vec![true]);
    assert!(service.pump_on());

    let json = StatusReport::from_snapshot(service.snapshot())
        .to_json()
        .unwrap();
    assert!(json.contains(r#""water_level_cm":15.0"#), "json was {json}");

    // The publish window fired on the first cycle, but only the two
    // eligible quantities reached the sink.
    assert!(telemetry
        .writes
        .iter()
        .all(|(path, _)| *path == TEMPERATURE_PATH || *path == TURBIDITY_PATH));
    assert!(!telemetry.writes.iter().any(|(_, v)| *v == 15.0));
}

// ── Water sufficient: pump off ───────────────────────────────

#[test]
fn water_sufficient_keeps_pump_off() {
    let (mut service, mut hw, mut telemetry, mut events) = make_service();
    hw.level_cm = Reading::valid(5.0);

    service.tick(0, &mut hw, &mut telemetry, &mut events);

    assert_eq!(hw.pump_calls, vec![false]);
    assert!(!service.pump_on());
}

// ── Invalid level: fail-safe off, cycle completes ────────────

#[test]
fn invalid_level_fails_safe_and_cycle_completes() {
    let (mut service, mut hw, mut telemetry, mut events) = make_service();
    hw.level_cm = Reading::invalid();

    service.tick(0, &mut hw, &mut telemetry, &mut events);

    assert_eq!(hw.pump_calls, vec![false]);
    // The cycle still published the valid quantities and emitted events.
    assert_eq!(telemetry.writes.len(), 2);
    assert!(events
        .events
        .iter()
        .any(|e| matches!(e, AppEvent::Cycle(_))));
    // And the snapshot serializes the unknown level as null.
    let json = StatusReport::from_snapshot(service.snapshot())
        .to_json()
        .unwrap();
    assert!(json.contains(r#""water_level_cm":null"#), "json was {json}");
}

// ── Level never reaches the sink, over a long run ────────────

#[test]
fn level_never_forwarded_over_many_cycles() {
    let (mut service, mut hw, mut telemetry, mut events) = make_service();

    for cycle in 0..200u64 {
        // Wander the level across the threshold to exercise both pump states.
        let level = 2.0 + (cycle % 20) as f32;
        hw.level_cm = Reading::valid(level);
        hw.temperature = Reading::valid(20.0 + (cycle % 5) as f32);
        hw.turbidity = Reading::valid(1.0 + (cycle % 3) as f32);
        service.tick(cycle * 2 * SEC, &mut hw, &mut telemetry, &mut events);
    }

    assert!(!telemetry.writes.is_empty());
    for (path, _) in &telemetry.writes {
        assert!(
            *path == TEMPERATURE_PATH || *path == TURBIDITY_PATH,
            "unexpected sink path {path}"
        );
    }
}

// ── Publish cadence is the window, not the loop ──────────────

#[test]
fn publish_rate_is_decoupled_from_cycle_rate() {
    let (mut service, mut hw, mut telemetry, mut events) = make_service();

    // 10 cycles at 2 s spacing (t = 0..18 s) with a 10 s window:
    // fires at t=0 and t=10, nothing else.
    for cycle in 0..10u64 {
        service.tick(cycle * 2 * SEC, &mut hw, &mut telemetry, &mut events);
    }

    let fires = events
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::Published { .. }))
        .count();
    assert_eq!(fires, 2, "10 s window over 18 s → two fires");
    assert_eq!(telemetry.writes.len(), 4);
}

// ── Pump edge events ─────────────────────────────────────────

#[test]
fn pump_changes_emit_events_only_on_edges() {
    let (mut service, mut hw, mut telemetry, mut events) = make_service();

    hw.level_cm = Reading::valid(15.0);
    service.tick(0, &mut hw, &mut telemetry, &mut events);
    service.tick(2 * SEC, &mut hw, &mut telemetry, &mut events);
    hw.level_cm = Reading::valid(5.0);
    service.tick(4 * SEC, &mut hw, &mut telemetry, &mut events);

    let edges: Vec<bool> = events
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::PumpChanged { on } => Some(*on),
            _ => None,
        })
        .collect();
    assert_eq!(edges, vec![true, false]);
    // Relay is still driven on every cycle.
    assert_eq!(hw.pump_calls, vec![true, true, false]);
}
