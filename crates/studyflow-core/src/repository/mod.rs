//! Repository Layer
//!
//! Durable key-value storage abstractions and the JSON slot built on them.

mod traits;
mod memory;
mod slot;


pub use traits::KeyValueStore;
pub use memory::{MemoryStore, ReadOnlyStore};
pub use slot::StorageSlot;
