//! Domain logic for the Pawstay boarding service.
//!
//! This crate has zero internal dependencies so the availability rules,
//! status machines, and input scrubbing can be used by the API server,
//! repository layer, and any future CLI tooling alike.

pub mod availability;
pub mod error;
pub mod reservation;
pub mod sanitize;
pub mod schedule;
pub mod types;
pub mod validate;
