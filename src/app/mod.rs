//! Application layer: CLI and startup flow

pub mod cli;
pub mod startup;
