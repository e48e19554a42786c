//! # Shiftlog - Personal work-shift logging
//!
//! A command-line utility for recording daily work metrics and viewing
//! monthly statistics.
//!
//! ## Features
//!
//! - **Daily Entries**: Record hours worked, kilometers driven, pickups and
//!   deliveries, one entry per calendar day
//! - **Date Validation**: Rejects malformed, future and duplicate dates
//! - **Monthly Storage**: One human-readable JSON file per month
//! - **Statistics**: Totals and per-entry averages with a detail table
//! - **Non-Working Days**: A zero-hours entry logs a day off with one input
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftlog::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::run()
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod store;
