//! # In-Memory Storage
//!
//! Reference backend holding all records in a mutex-guarded store. It proves
//! the domain layer storage-agnostic and backs the service tests; a real
//! deployment would implement the same traits over a database.

pub mod account_repository;
pub mod store;
pub mod user_repository;

pub use account_repository::AccountRepository;
pub use store::MemoryStore;
pub use user_repository::UserRepository;
