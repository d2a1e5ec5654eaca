//! Control policies for the pump actuator.

pub mod threshold;
