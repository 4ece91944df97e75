//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `sowing.rs` - Seed pickup, targeting and ring walking
//! - `capture.rs` - Capture chains
//! - `status.rs` - End-of-game detection
//! - `search.rs` - Search behaviour on small positions
//! - `proptest.rs` - Property-based tests

mod capture;
mod status;
