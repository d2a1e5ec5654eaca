//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the AquaMon system:
//! per-cycle orchestration of acquisition, the pump policy, the snapshot
//! cache, and the publication scheduler.  All interaction with hardware
//! and the outside world happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
