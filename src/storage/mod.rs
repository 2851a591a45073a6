use crate::error::AppResult;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Small persistent key-value surface behind the session gate
///
/// Mirrors the browser local-storage contract: string keys, string values,
/// absent keys read as `None`. The session gate is the only writer; nothing
/// else in the crate touches persistence.
pub trait LocalStore: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}
