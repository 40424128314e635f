//! Adapter implementations for blob storage ports.

pub mod memory;
