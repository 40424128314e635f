//! In-memory identity adapter.

mod provider;

pub use provider::{InMemoryIdentityProvider, MIN_PASSWORD_CHARS, ProviderProfile};
