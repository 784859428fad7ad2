use chrono::Utc;
use log::{info, warn};
use serde_json::Value;
use std::sync::Arc;

use crate::domain::errors::ServiceError;
use crate::domain::models::user::{NewUser, User};
use crate::storage::traits::UserStorage;
use crate::validation::policy;
use crate::validation::schema::{FieldSpec, Schema};

/// Service gating user creation behind schema validation and the minimum-age
/// policy rule.
#[derive(Clone)]
pub struct UserService {
    user_repository: Arc<dyn UserStorage>,
}

impl UserService {
    pub fn new(user_repository: Arc<dyn UserStorage>) -> Self {
        Self { user_repository }
    }

    fn schema() -> Schema {
        Schema::new()
            .field("name", FieldSpec::text().min_length(2))
            .field("birthday", FieldSpec::date())
    }

    /// Create a user from a raw candidate payload.
    ///
    /// Schema first, minimum-age policy second; delegates to the repository
    /// only when both pass. A schema failure is invalid-request; an under-age
    /// candidate is forbidden, never invalid-request.
    pub fn create_user(&self, candidate: &Value) -> Result<User, ServiceError> {
        let new_user: NewUser = Self::schema().validate_into(candidate).map_err(|violations| {
            warn!("create_user rejected: {}", violations);
            ServiceError::InvalidRequest(violations)
        })?;

        let today = Utc::now().date_naive();
        policy::check_minimum_age(new_user.birthday, today).map_err(|reason| {
            warn!("create_user not permitted: {}", reason);
            ServiceError::Forbidden(reason)
        })?;

        let user = self.user_repository.create_user(&new_user)?;
        info!("Created user: {} with ID: {}", user.name, user.id);
        Ok(user)
    }
}
