//! Round robin betting calculator.
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod engine;
pub mod export;
pub mod strategy;
pub mod types;
