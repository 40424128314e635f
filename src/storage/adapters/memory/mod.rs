//! In-memory blob storage adapter.

mod store;

pub use store::InMemoryBlobStore;
