use anyhow::{anyhow, Result};
use std::sync::{Mutex, MutexGuard};

use crate::domain::models::account::Account;
use crate::domain::models::user::User;

/// Tables and id counters shared by the in-memory repositories.
#[derive(Debug)]
pub(super) struct Tables {
    pub users: Vec<User>,
    pub accounts: Vec<Account>,
    pub next_user_id: i64,
    pub next_account_id: i64,
}

/// Shared connection analogue for the in-memory backend. Cheap to clone via
/// `Arc`; serializes access to the tables with a single mutex.
#[derive(Debug)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            tables: Mutex::new(Tables {
                users: Vec::new(),
                accounts: Vec::new(),
                next_user_id: 1,
                next_account_id: 1,
            }),
        }
    }

    pub(super) fn lock(&self) -> Result<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
