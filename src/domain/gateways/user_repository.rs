//! User Repository Gateway
//!
//! Abstract trait defining the contract for user persistence operations.

use async_trait::async_trait;

use crate::domain::models::user::{NewUser, User, UserId};
use crate::shared::errors::RepositoryError;

/// Repository trait for User persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; storage assigns the ID
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError>;

    /// All users in storage order (ascending ID)
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// Find a user by its ID
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// Find the first user with the given username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// Delete a user by ID, returning the number of rows removed (0 or 1)
    async fn delete_by_id(&self, id: UserId) -> Result<u64, RepositoryError>;
}
