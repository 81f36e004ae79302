//! Test helpers shared across crates.
//!
//! This crate provides a scoped panic-hook silencer for tests that panic on
//! purpose, and a `figment::Jail` runner for policy loading tests.

pub mod figment;
pub mod panic_hook;
