//! Shared test harness modules for the surfscore CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

mod helpers;
mod score_unit;
