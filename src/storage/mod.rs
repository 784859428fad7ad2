//! # Storage Module
//!
//! The repository abstraction the service gate delegates to, plus an
//! in-memory reference backend.
//!
//! The gate only ever talks to [`traits::UserStorage`] and
//! [`traits::AccountStorage`]; any backend implementing them can be plugged
//! in without touching the domain layer.

pub mod memory;
pub mod traits;

pub use memory::{AccountRepository, MemoryStore, UserRepository};
