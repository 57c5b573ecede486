//! SleepTotals library - per-day sleep duration aggregation
//!
//! This module exports internal components for integration testing.

pub mod aggregate;
pub mod alert;
pub mod cli;
pub mod config;
pub mod day;
pub mod interval;
pub mod report;
pub mod source;
