//! Delete User Use Case
//!
//! Hard deletes a user by ID. Deleting a missing user succeeds.

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a user
pub struct DeleteUserUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    /// Create a new DeleteUserUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: UserId) -> Result<(), UseCaseError> {
        tracing::info!(user_id = %id, "Deleting user");

        let removed = self.user_repository.delete_by_id(id).await?;

        if removed == 0 {
            tracing::debug!(user_id = %id, "No user to delete");
        } else {
            tracing::info!(user_id = %id, "User deleted successfully");
        }
        Ok(())
    }
}
