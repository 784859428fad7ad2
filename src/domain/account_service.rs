use log::{debug, info, warn};
use serde_json::Value;
use std::sync::Arc;

use crate::domain::errors::ServiceError;
use crate::domain::models::account::{Account, NewAccount};
use crate::storage::traits::AccountStorage;
use crate::validation::schema::{self, FieldSpec, Schema, Violations};

/// Required length of a currency code, per ISO 4217 convention.
const CURRENCY_CODE_LEN: usize = 3;

/// Service gating account creation, listing, and deletion.
///
/// Balances are validated at creation and never mutated here; transfer and
/// transaction logic live outside this subsystem.
#[derive(Clone)]
pub struct AccountService {
    account_repository: Arc<dyn AccountStorage>,
}

impl AccountService {
    pub fn new(account_repository: Arc<dyn AccountStorage>) -> Self {
        Self { account_repository }
    }

    fn schema() -> Schema {
        Schema::new()
            .field("userId", FieldSpec::integer().positive())
            .field("balance", FieldSpec::number().non_negative())
            .field("currency", FieldSpec::text().length(CURRENCY_CODE_LEN))
    }

    /// Create an account from a raw candidate payload.
    pub fn create_account(&self, candidate: &Value) -> Result<Account, ServiceError> {
        let new_account: NewAccount =
            Self::schema().validate_into(candidate).map_err(|violations| {
                warn!("create_account rejected: {}", violations);
                ServiceError::InvalidRequest(violations)
            })?;

        let account = self.account_repository.create_account(&new_account)?;
        info!(
            "Created account {} for user {} ({} {})",
            account.id, account.user_id, account.balance, account.currency
        );
        Ok(account)
    }

    /// List the accounts owned by `user_id`, in repository order.
    pub fn list_accounts(&self, user_id: &Value) -> Result<Vec<Account>, ServiceError> {
        let user_id = schema::positive_id("userId", user_id).map_err(|violations| {
            warn!("list_accounts rejected: {}", violations);
            ServiceError::InvalidRequest(violations)
        })?;

        let accounts = self.account_repository.accounts_by_user(user_id)?;
        debug!("Found {} accounts for user {}", accounts.len(), user_id);
        Ok(accounts)
    }

    /// Delete `account_id` on behalf of `user_id`.
    ///
    /// Both ids must be positive integers; zero, negative, and fractional
    /// values are rejected before the repository is reached. An account that
    /// is absent or not owned by `user_id` is a forbidden failure, not a
    /// generic one.
    pub fn delete_account(
        &self,
        user_id: &Value,
        account_id: &Value,
    ) -> Result<bool, ServiceError> {
        let user_id = schema::positive_id("userId", user_id);
        let account_id = schema::positive_id("accountId", account_id);
        let (user_id, account_id) = match (user_id, account_id) {
            (Ok(user_id), Ok(account_id)) => (user_id, account_id),
            (user_id, account_id) => {
                let mut violations = Violations::empty();
                if let Err(mistakes) = user_id {
                    violations.extend(mistakes);
                }
                if let Err(mistakes) = account_id {
                    violations.extend(mistakes);
                }
                warn!("delete_account rejected: {}", violations);
                return Err(ServiceError::InvalidRequest(violations));
            }
        };

        let deleted = self.account_repository.delete_account(user_id, account_id)?;
        if !deleted {
            warn!(
                "delete_account refused: account {} not found for user {}",
                account_id, user_id
            );
            return Err(ServiceError::Forbidden(format!(
                "account {} not found or not owned by user {}",
                account_id, user_id
            )));
        }

        info!("Deleted account {} for user {}", account_id, user_id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::{AccountRepository, MemoryStore};
    use crate::validation::ConstraintCode;
    use serde_json::json;

    fn setup_test() -> AccountService {
        let store = Arc::new(MemoryStore::new());
        AccountService::new(Arc::new(AccountRepository::new(store)))
    }

    /// Storage double asserting the gate never delegates.
    struct UnreachableStorage;

    impl AccountStorage for UnreachableStorage {
        fn create_account(&self, _: &NewAccount) -> anyhow::Result<Account> {
            unreachable!("repository must not be reached")
        }
        fn accounts_by_user(&self, _: i64) -> anyhow::Result<Vec<Account>> {
            unreachable!("repository must not be reached")
        }
        fn delete_account(&self, _: i64, _: i64) -> anyhow::Result<bool> {
            unreachable!("repository must not be reached")
        }
    }

    #[test]
    fn test_create_account_with_valid_payload() {
        let service = setup_test();

        let account = service
            .create_account(&json!({ "userId": 1, "balance": 100, "currency": "EUR" }))
            .unwrap();

        assert!(account.id > 0);
        assert_eq!(account.user_id, 1);
        assert_eq!(account.balance, 100.0);
        assert_eq!(account.currency, "EUR");
    }

    #[test]
    fn test_create_account_with_negative_balance_is_invalid_request() {
        let service = setup_test();

        let error = service
            .create_account(&json!({ "userId": 1, "balance": -100, "currency": "EUR" }))
            .unwrap_err();

        assert!(error.is_invalid_request());
        assert!(error
            .violations()
            .unwrap()
            .contains("balance", ConstraintCode::NonNegative));
    }

    #[test]
    fn test_create_account_with_four_letter_currency_is_invalid_request() {
        let service = setup_test();

        let error = service
            .create_account(&json!({ "userId": 1, "balance": 100, "currency": "EURO" }))
            .unwrap_err();

        assert!(error.is_invalid_request());
        assert!(error
            .violations()
            .unwrap()
            .contains("currency", ConstraintCode::Length));
    }

    #[test]
    fn test_create_account_with_missing_field_is_invalid_request() {
        let service = setup_test();

        let error = service
            .create_account(&json!({ "userId": 1, "currency": "EUR" }))
            .unwrap_err();

        assert!(error.is_invalid_request());
    }

    #[test]
    fn test_list_accounts_returns_owned_accounts() {
        let service = setup_test();
        service
            .create_account(&json!({ "userId": 1, "balance": 100, "currency": "EUR" }))
            .unwrap();
        service
            .create_account(&json!({ "userId": 1, "balance": 200, "currency": "USD" }))
            .unwrap();
        service
            .create_account(&json!({ "userId": 2, "balance": 50, "currency": "GBP" }))
            .unwrap();

        let accounts = service.list_accounts(&json!(1)).unwrap();

        assert_eq!(accounts.len(), 2);
        for account in &accounts {
            assert_eq!(account.user_id, 1);
            assert!(account.id > 0);
        }
        assert_eq!(accounts[0].currency, "EUR");
        assert_eq!(accounts[1].currency, "USD");
    }

    #[test]
    fn test_list_accounts_is_idempotent() {
        let service = setup_test();
        service
            .create_account(&json!({ "userId": 1, "balance": 100, "currency": "EUR" }))
            .unwrap();

        let first = service.list_accounts(&json!(1)).unwrap();
        let second = service.list_accounts(&json!(1)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_list_accounts_for_unknown_user_is_empty() {
        let service = setup_test();
        assert!(service.list_accounts(&json!(99)).unwrap().is_empty());
    }

    #[test]
    fn test_list_accounts_with_invalid_user_id_is_invalid_request() {
        let service = AccountService::new(Arc::new(UnreachableStorage));

        assert!(service.list_accounts(&json!(0)).unwrap_err().is_invalid_request());
        assert!(service.list_accounts(&json!(-1)).unwrap_err().is_invalid_request());
        assert!(service.list_accounts(&json!("1")).unwrap_err().is_invalid_request());
    }

    #[test]
    fn test_delete_account_with_valid_ids() {
        let service = setup_test();
        let account = service
            .create_account(&json!({ "userId": 1, "balance": 100, "currency": "EUR" }))
            .unwrap();

        let deleted = service
            .delete_account(&json!(1), &json!(account.id))
            .unwrap();

        assert!(deleted);
        assert!(service.list_accounts(&json!(1)).unwrap().is_empty());
    }

    #[test]
    fn test_delete_account_never_reaches_repository_on_invalid_ids() {
        let service = AccountService::new(Arc::new(UnreachableStorage));

        for (user_id, account_id) in [
            (json!(-1), json!(1)),
            (json!(1), json!(-1)),
            (json!(0), json!(1)),
            (json!(1), json!(0)),
            (json!(1), json!(1.5)),
            (json!(1.5), json!(1)),
            (json!("1"), json!(1)),
        ] {
            let error = service.delete_account(&user_id, &account_id).unwrap_err();
            assert!(error.is_invalid_request());
        }
    }

    #[test]
    fn test_delete_account_reports_violations_for_both_ids() {
        let service = AccountService::new(Arc::new(UnreachableStorage));

        let error = service.delete_account(&json!(0), &json!(2.5)).unwrap_err();
        let violations = error.violations().unwrap();
        assert!(violations.contains("userId", ConstraintCode::Positive));
        assert!(violations.contains("accountId", ConstraintCode::Integer));
    }

    #[test]
    fn test_delete_account_not_owned_is_forbidden() {
        let service = setup_test();
        service
            .create_account(&json!({ "userId": 1, "balance": 100, "currency": "EUR" }))
            .unwrap();

        let error = service.delete_account(&json!(1), &json!(999)).unwrap_err();

        assert!(error.is_forbidden());
        assert!(!error.is_invalid_request());
    }
}
