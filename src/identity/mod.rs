//! User identity, delegated to an external identity provider.
//!
//! - Domain types in [`domain`]
//! - Port contract in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
