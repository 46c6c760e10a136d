pub mod api;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::CrudError;
pub use crate::core::models::user::User;
pub use crate::core::services::UserService;
pub use infrastructure::storage::{UserStorage, in_memory::InMemoryStorage, sqlite::SqliteStorage};

#[cfg(test)]
mod tests;
