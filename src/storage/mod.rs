//! Key-value persistence the repository reads and writes through.

pub mod json_backend;
pub mod memory;

use uuid::Uuid;

use crate::errors::Result;

/// Key holding the serialized collection of all registered users.
pub const USERS_KEY: &str = "users";
/// Key holding the serialized signed-in user, absent when logged out.
pub const CURRENT_USER_KEY: &str = "current_user";

/// Key holding one user's serialized financial record.
pub fn financial_data_key(user_id: Uuid) -> String {
    format!("financial_data:{user_id}")
}

/// Abstraction over persistence backends. Values are JSON documents; a missing
/// key reads back as `None`. Writers are last-writer-wins: nothing here
/// coordinates concurrent processes sharing a store.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;
