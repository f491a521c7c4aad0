//! Domain models and DTOs shared between the data and service layers.

pub mod catalog;
pub mod rankedle;
