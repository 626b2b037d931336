//! Shared test fixtures for ResultForge crates.
//!
//! This crate provides schemas and result file builders for testing.
//! It does NOT depend on `resultforge-reader` to avoid circular dependencies.
//!
//! - [`schemas`] - Problem schemas used across the test suites
//! - [`files`] - Builders for result file text and temporary files
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! resultforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use resultforge_test::files::ResultFileText;
//! use resultforge_test::schemas;
//! ```

pub mod files;
pub mod schemas;

pub use files::ResultFileText;
