//! Workspace umbrella for `wayfarer-core`; hosts the demos.
//!
//! ```text
//! cargo run --example basic_usage
//! cargo run --example error_handling
//! cargo run --example region_browse
//! ```
pub use wayfarer_core::*;
