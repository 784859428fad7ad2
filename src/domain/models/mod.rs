//! Domain models for the banking service.

pub mod account;
pub mod user;

pub use account::{Account, NewAccount};
pub use user::{NewUser, User};
