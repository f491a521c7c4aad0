//! Rankedle: a daily music-guessing game backend for a Discord community.
//!
//! The crate is organized in layers:
//! - [`data`]: SeaORM repositories over the game tables
//! - [`service`]: the game state machine, stat aggregation, asset pipeline,
//!   waveform/cover rendering and the Discord gateway
//! - [`scheduler`]: the midnight rollover job
//! - [`model`]: scoring tables, glyphs and the DTOs services return

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
