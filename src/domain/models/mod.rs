//! Domain Models
//!
//! Pure domain entities and value objects.

pub mod password;
pub mod user;

pub use password::PasswordHash;
pub use user::{CreateUserData, NewUser, User, UserId};
