//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod test_module;
pub mod users;

pub use test_module::TestModuleService;
pub use users::{
    CreateUserUseCase, DeleteUserUseCase, GetUserByIdUseCase, GetUserByUsernameUseCase, GetUsersUseCase,
};
