//! File storage for chat attachments, delegated to an external blob store.

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
