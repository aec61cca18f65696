//! Version Stamper Unit Tests
//!
//! Rendering and write-decision tests against synthetic metadata; no real
//! repository involved. End-to-end coverage lives in `tests/`.

mod helpers;
mod types;
