//! Server-rendered admin console for a CV matching platform.
//!
//! Every screen is a thin client of the platform's HTTP API: candidates and
//! job offers are listed, edited and deleted through it, candidates are
//! matched against offers, and aggregate statistics are charted.

pub mod cli;
pub mod core;
pub mod screens;
pub mod types;
pub mod utils;
pub mod web;

pub use web::{build_rocket, start_web_server, ConsoleState};
