pub mod app;
pub mod common;
pub mod git;
pub mod stamp;

include!(concat!(env!("OUT_DIR"), "/version.rs"));
