//! Test helpers shared across crates.
//!
//! This crate provides placeholder normalisation for behavioural step
//! definitions and message assertions that report failures as
//! [`anyhow::Error`] values instead of panicking.

pub mod assert;
pub mod text;
