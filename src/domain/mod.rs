//! # Domain Module
//!
//! Business logic for the banking service: the user and account services and
//! their models and error types.
//!
//! The services here are the only entry points other components call. Each
//! operation validates its raw input against a declarative schema, applies
//! the policy rules that depend on validated values, and only then delegates
//! to the storage layer. No state is held between calls.

pub mod account_service;
pub mod errors;
pub mod models;
pub mod user_service;

pub use account_service::AccountService;
pub use user_service::UserService;
