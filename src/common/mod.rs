//! Shared infrastructure

pub mod logging;
