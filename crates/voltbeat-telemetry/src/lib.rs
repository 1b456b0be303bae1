//! Telemetry domain types for the voltbeat firmware.
//!
//! - `report` - the JSON payload delivered to the collection endpoint
//! - `sensor` - simulated supply-voltage sampling

#![no_std]

pub mod report;
pub mod sensor;

pub use report::{PayloadError, VoltageReport, REPORT_JSON_SIZE};
pub use sensor::{volts_from_raw, VOLTS_MAX, VOLTS_MIN};
