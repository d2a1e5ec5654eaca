//! Control service — the hexagonal core.
//!
//! [`ControlService`] owns the snapshot cache, the pump policy, and the
//! publication scheduler.  It exposes a clean, hardware-agnostic API.
//! All I/O flows through port traits injected at call sites, making the
//! entire service testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────────┐ ──▶ EventSink
//!                 │       ControlService        │
//! ActuatorPort ◀──│  policy · snapshot · pub    │──▶ TelemetrySink
//!                 └────────────────────────────┘
//! ```

use log::info;

use crate::config::SystemConfig;
use crate::control::threshold::ThresholdPolicy;
use crate::publisher::{PublishOutcome, Publisher};
use crate::sensors::SensorSnapshot;

use super::events::{AppEvent, CycleData};
use super::ports::{ActuatorPort, EventSink, SensorPort, TelemetrySink};

// ───────────────────────────────────────────────────────────────
// ControlService
// ───────────────────────────────────────────────────────────────

/// Orchestrates one sample–decide–actuate–publish cycle at a time.
pub struct ControlService {
    policy: ThresholdPolicy,
    publisher: Publisher,
    /// Latest reading per quantity.  Single writer (this service);
    /// the query collaborator reads it between cycles.
    snapshot: SensorSnapshot,
    pump_on: bool,
    cycle_count: u64,
}

impl ControlService {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            policy: ThresholdPolicy::new(config.level_threshold_cm),
            publisher: Publisher::new(config.publish_interval_secs),
            snapshot: SensorSnapshot::default(),
            pump_on: false,
            cycle_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!("ControlService started");
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full control cycle: acquire → decide → actuate →
    /// snapshot → publish.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`] — this avoids a double mutable borrow while
    /// keeping the port boundary explicit.  No step is skipped on an
    /// invalid reading: the policy fails safe and the publisher gates
    /// per quantity, but the cycle always completes.
    pub fn tick(
        &mut self,
        now_us: u64,
        hw: &mut (impl SensorPort + ActuatorPort),
        telemetry: &mut impl TelemetrySink,
        sink: &mut impl EventSink,
    ) {
        self.cycle_count += 1;

        // 1. One measurement per transducer via SensorPort.
        self.snapshot = hw.acquire_all();

        // 2. Pump decision from the level reading alone.
        let command = self.policy.decide(self.snapshot.level_cm);

        // 3. Drive the relay every cycle, not just on change.
        let on = command.is_on();
        hw.set_pump(on);
        if on != self.pump_on {
            self.pump_on = on;
            sink.emit(&AppEvent::PumpChanged { on });
        }

        // 4. Forward eligible readings, rate-limited.  The level reading
        //    is not an input here — it never reaches the remote store.
        let outcome = self.publisher.maybe_publish(
            now_us,
            self.snapshot.temperature,
            self.snapshot.turbidity,
            telemetry,
        );
        if let PublishOutcome::Published { paths } = outcome {
            sink.emit(&AppEvent::Published { sent: paths.len() });
        }

        // 5. Per-cycle diagnostics.
        sink.emit(&AppEvent::Cycle(CycleData {
            snapshot: self.snapshot,
            pump_on: self.pump_on,
        }));
    }

    // ── Queries ───────────────────────────────────────────────

    /// Read-only view of the latest readings, for the query collaborator.
    pub fn snapshot(&self) -> &SensorSnapshot {
        &self.snapshot
    }

    pub fn pump_on(&self) -> bool {
        self.pump_on
    }

    /// Total control cycles executed since startup.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }
}
