//! # concord-core
//!
//! Core types, identifier normalization, and error types for Concord.
//!
//! This crate provides the foundational types shared across all Concord crates:
//! - Source/target schema documents (tables, columns, keys, indexes)
//! - ORM model types produced by `concord-orm`
//! - Type mapping records
//! - Audit issues, table status rows, and the final audit report
//! - Severity, component, and mapping status enums
//! - The identifier normalizer used for every cross-system name comparison
//! - Input error types

pub mod enums;
pub mod errors;
pub mod mapping;
pub mod naming;
pub mod orm;
pub mod report;
pub mod schema;
