//! Megamind API
//!
//! A Rust-based CRUD microservice for managing users, following
//! Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
