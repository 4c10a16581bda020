//! User DTOs
//!
//! Data transfer objects for user API endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::models::user::{CreateUserData, User};

/// DTO for creating a new user
///
/// Fields are optional at the serde level so that a missing field is reported by
/// validation together with every other failing field.
#[derive(Clone, Deserialize, Validate, ToSchema, Default)]
pub struct CreateUserDto {
    #[validate(
        required(message = "username is required"),
        length(min = 1, message = "username should not be empty")
    )]
    #[schema(example = "username#1")]
    pub username: Option<String>,

    #[validate(
        required(message = "password is required"),
        length(min = 1, message = "password should not be empty")
    )]
    #[schema(example = "password #1")]
    pub password: Option<String>,
}

impl From<CreateUserDto> for CreateUserData {
    fn from(dto: CreateUserDto) -> Self {
        Self {
            username: dto.username.unwrap_or_default(),
            password: dto.password.unwrap_or_default(),
        }
    }
}

/// User response DTO; the password hash is never serialized
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponseDto {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "username#1")]
    pub username: String,
}

impl From<&User> for UserResponseDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().value(),
            username: user.username().to_string(),
        }
    }
}

impl From<User> for UserResponseDto {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}
