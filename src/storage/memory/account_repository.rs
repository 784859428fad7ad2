use anyhow::Result;
use log::debug;
use std::sync::Arc;

use super::store::MemoryStore;
use crate::domain::models::account::{Account, NewAccount};
use crate::storage::traits::AccountStorage;

/// In-memory account repository. Listing returns accounts in insertion
/// (ascending id) order.
#[derive(Clone)]
pub struct AccountRepository {
    store: Arc<MemoryStore>,
}

impl AccountRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

impl AccountStorage for AccountRepository {
    fn create_account(&self, new_account: &NewAccount) -> Result<Account> {
        let mut tables = self.store.lock()?;
        let account = Account {
            id: tables.next_account_id,
            user_id: new_account.user_id,
            balance: new_account.balance,
            currency: new_account.currency.clone(),
        };
        tables.next_account_id += 1;
        tables.accounts.push(account.clone());
        debug!("Stored account {} for user {}", account.id, account.user_id);
        Ok(account)
    }

    fn accounts_by_user(&self, user_id: i64) -> Result<Vec<Account>> {
        let tables = self.store.lock()?;
        Ok(tables
            .accounts
            .iter()
            .filter(|account| account.user_id == user_id)
            .cloned()
            .collect())
    }

    fn delete_account(&self, user_id: i64, account_id: i64) -> Result<bool> {
        let mut tables = self.store.lock()?;
        let position = tables
            .accounts
            .iter()
            .position(|account| account.id == account_id && account.user_id == user_id);
        match position {
            Some(position) => {
                tables.accounts.remove(position);
                debug!("Deleted account {} for user {}", account_id, user_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
