//! Data access for the surfscore engine.
//!
//! Responsibilities:
//! - Implement [`surfscore_core::ObservationSource`] against live marine
//!   forecast services.
//! - Encapsulate the wire formats of those services.
//!
//! Boundaries:
//! - Do not encode scoring rules (live in `surfscore-scorer`).
//! - Keep blocking I/O off async executors; prefer async-capable clients.
//!
//! Invariants:
//! - Thread-safe by default where feasible.
//! - No global mutable state.

#![forbid(unsafe_code)]

pub mod marine;
