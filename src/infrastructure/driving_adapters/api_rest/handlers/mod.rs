//! HTTP Handlers

pub mod test_module;
pub mod users;
