// System Layer
pub mod store;

#[cfg(test)]
pub use store::MemoryStore;
pub use store::{FileStore, KeyValueStore, PreferenceStore, UnavailableStore};
