//! Configuration models shared across the binaries.

pub mod config;
