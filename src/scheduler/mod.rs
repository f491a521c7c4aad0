//! Background job scheduling.

pub mod daily;
