//! Get Users Use Case
//!
//! Retrieves every stored user.

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::User;
use crate::shared::errors::UseCaseError;

/// Use case for listing all users
pub struct GetUsersUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl GetUsersUseCase {
    /// Create a new GetUsersUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<User>, UseCaseError> {
        tracing::debug!("Getting all users");

        let users = self.user_repository.find_all().await?;

        tracing::debug!(count = users.len(), "Found users");
        Ok(users)
    }
}
