//! User Use Cases
//!
//! Operations of the user resource.

mod create_user;
mod delete_user;
mod get_user_by_id;
mod get_user_by_username;
mod get_users;

pub use create_user::CreateUserUseCase;
pub use delete_user::DeleteUserUseCase;
pub use get_user_by_id::GetUserByIdUseCase;
pub use get_user_by_username::GetUserByUsernameUseCase;
pub use get_users::GetUsersUseCase;
