//! wayfarer-cli
//! ============
//!
//! Command-line front end for the `wayfarer-core` country discovery client.
//!
//! This crate primarily provides a binary (`wayfarer-cli`). The library
//! target only exists so that docs.rs renders this overview. See the README
//! for full usage examples.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install wayfarer-cli
//! wayfarer-cli --help
//! wayfarer-cli search japan
//! wayfarer-cli region europe --sort population-desc
//! wayfarer-cli featured
//! wayfarer-cli favourites add Iceland
//! ```
//!
//! For programmatic access (validation, request supersession, result
//! reconciliation) use the [`wayfarer-core`] crate directly.
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// No API here; the binary is the deliverable.
