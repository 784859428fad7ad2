use anyhow::Result;
use log::debug;
use std::sync::Arc;

use super::store::MemoryStore;
use crate::domain::models::user::{NewUser, User};
use crate::storage::traits::UserStorage;

/// In-memory user repository.
#[derive(Clone)]
pub struct UserRepository {
    store: Arc<MemoryStore>,
}

impl UserRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

impl UserStorage for UserRepository {
    fn create_user(&self, new_user: &NewUser) -> Result<User> {
        let mut tables = self.store.lock()?;
        let user = User {
            id: tables.next_user_id,
            name: new_user.name.clone(),
            birthday: new_user.birthday,
        };
        tables.next_user_id += 1;
        tables.users.push(user.clone());
        debug!("Stored user {} with ID {}", user.name, user.id);
        Ok(user)
    }
}
