//! # Validation Layer
//!
//! Two stages, always in the same order:
//!
//! - [`schema`]: declarative per-entity field constraints over an untyped
//!   payload. Rejections are the malformed-input class.
//! - [`policy`]: semantic rules on validated values (e.g. minimum age).
//!   Rejections here are the authorization class: the request was well-formed
//!   but is not permitted.
//!
//! A payload that fails its schema never reaches a policy rule.

pub mod policy;
pub mod schema;

pub use schema::{ConstraintCode, FieldKind, FieldSpec, Schema, Violation, Violations};
