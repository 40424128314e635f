//! Step definitions for board ordering scenarios.

pub mod world;

mod given;
mod then;
mod when;
