//! Create User Use Case
//!
//! Hashes the submitted password and persists a new user.

use std::sync::Arc;

use zeroize::Zeroizing;

use crate::domain::gateways::UserRepository;
use crate::domain::models::password::PasswordHash;
use crate::domain::models::user::{CreateUserData, NewUser, User};
use crate::shared::errors::{DomainError, UseCaseError};

/// Use case for creating a new user
pub struct CreateUserUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl CreateUserUseCase {
    /// Create a new CreateUserUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// Username uniqueness is left to the storage schema; a constraint violation
    /// surfaces as a repository error.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the password cannot be hashed.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateUserData) -> Result<User, UseCaseError> {
        tracing::info!(username = %data.username, "Creating new user");

        let password = Zeroizing::new(data.password.clone());
        let password = tokio::task::spawn_blocking(move || PasswordHash::hash(&password))
            .await
            .map_err(|e| DomainError::PasswordHash(e.to_string()))??;

        let new_user = NewUser {
            username: data.username.clone(),
            password,
        };
        let created = self.user_repository.insert(&new_user).await?;

        tracing::info!(user_id = %created.id(), "User created successfully");
        Ok(created)
    }
}
