//! Eisenhower task board.
//!
//! This module holds the task record, the pure ordering engine that keeps
//! each quadrant ranked across adds, moves, and drag reorders, and the port
//! through which task documents reach external persistence. It follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Pure board transforms in [`ordering`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ordering;
pub mod ports;

#[cfg(test)]
mod tests;
