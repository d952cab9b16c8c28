//! Domain model for the gardi document backend.
//!
//! This crate provides the two persisted document kinds -- [`Schema`] and
//! [`Instance`] -- plus the structured fields they carry: variable
//! definitions, computed properties, composable modules and features, and
//! visualization trees. The storage layer never interprets these shapes; it
//! round-trips them as opaque JSON. Everything here is pure data + serde.
//!
//! # Key Types
//!
//! - [`DocumentId`] — opaque unique identifier for a stored document
//! - [`Schema`] — a reusable sheet definition owned by a user namespace
//! - [`Instance`] — a filled-in sheet created from a schema
//! - [`Variable`] / [`Property`] — typed inputs and computed display values
//! - [`Module`] / [`Feature`] — composable bundles of variables and properties
//! - [`Visualization`] — recursive layout tree for rendering an instance

pub mod id;
pub mod instance;
pub mod schema;
pub mod visualization;

pub use id::DocumentId;
pub use instance::Instance;
pub use schema::{
    Feature, Field, Initialization, InitializationStep, Module, Property, PropertyFormat, Schema,
    Variable,
};
pub use visualization::{Visualization, VisualizationKind};
