//! Employee attendance tracking with regular and overtime hours.
//!
//! This crate records daily attendance for employees, splits each worked day
//! into regular and overtime hours against a configurable end-of-workday
//! boundary and daily cap, aggregates records into reports and dashboards,
//! and exports reports on a schedule.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod store;
pub mod tracker;
