//! Domain Layer
//!
//! Contains the core domain models and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::user_repository::UserRepository;
pub use models::password::PasswordHash;
pub use models::user::{CreateUserData, NewUser, User, UserId};
