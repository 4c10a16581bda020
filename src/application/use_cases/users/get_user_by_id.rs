//! Get User By ID Use Case
//!
//! Retrieves a single user by its ID. A missing user is not an error.

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{User, UserId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a user by ID
pub struct GetUserByIdUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl GetUserByIdUseCase {
    /// Create a new GetUserByIdUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: UserId) -> Result<Option<User>, UseCaseError> {
        tracing::debug!(user_id = %id, "Getting user by ID");

        let user = self.user_repository.find_by_id(id).await?;

        tracing::debug!(user_id = %id, found = user.is_some(), "User lookup finished");
        Ok(user)
    }
}
