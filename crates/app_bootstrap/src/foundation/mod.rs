//! Foundation module - timing utilities shared by the startup sequence

pub mod time;
