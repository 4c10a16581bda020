//! User Domain Model
//!
//! Represents a registered user of the API.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::password::PasswordHash;

/// Newtype wrapper for the storage-assigned User ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    /// Wrap an existing numeric identifier
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying integer
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl TryFrom<&str> for UserId {
    type Error = std::num::ParseIntError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(value.trim().parse()?))
    }
}

/// Data required to create a new User; the plain-text password is wiped on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CreateUserData {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for CreateUserData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserData")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// A user that has not been persisted yet; the ID is assigned by storage on insert.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: PasswordHash,
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: String,
    password: PasswordHash,
}

impl User {
    /// Restore a User from persisted data
    #[must_use]
    pub fn restore(id: UserId, username: String, password: PasswordHash) -> Self {
        Self { id, username, password }
    }

    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &PasswordHash {
        &self.password
    }
}
