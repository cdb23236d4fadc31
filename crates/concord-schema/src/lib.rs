//! # concord-schema
//!
//! JSON Schema registry for Concord documents.
//!
//! Document types are defined in `concord-core` with `#[derive(JsonSchema)]`.
//! This crate collects their schemas under stable names, validates JSON values
//! against them, and backs the `concord schema` command.

pub mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
