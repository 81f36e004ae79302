//! Demo application for the `attempt` crate.
//!
//! Runs one of a handful of sample operations through an [`attempt::Attempter`],
//! prints the resulting outcome as JSON, and re-raises a captured failure at
//! the end of the control flow.

pub mod cli;
pub mod error;
pub mod operations;
pub mod report;
