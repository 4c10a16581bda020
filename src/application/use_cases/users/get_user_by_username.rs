//! Get User By Username Use Case
//!
//! Looks a user up by username, e.g. to verify credentials. Not routed over HTTP.

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::User;
use crate::shared::errors::UseCaseError;

/// Use case for getting a user by username
pub struct GetUserByUsernameUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl GetUserByUsernameUseCase {
    /// Create a new GetUserByUsernameUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, username: &str) -> Result<Option<User>, UseCaseError> {
        tracing::debug!(username, "Getting user by username");

        let user = self.user_repository.find_by_username(username).await?;

        tracing::debug!(username, found = user.is_some(), "User lookup finished");
        Ok(user)
    }
}
