//! High-level operations.
//!
//! This module contains the implementation of Viaduct commands.

pub mod doctor;
pub mod emit;

pub use doctor::{doctor, format_report, CheckResult, DoctorReport};
pub use emit::{write_json, ResolvedConfig};
