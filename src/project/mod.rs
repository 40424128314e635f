//! Project workspaces: the aggregate that owns a board and its team.
//!
//! This module follows the same hexagonal layout as the task board:
//!
//! - `domain`: the [`domain::Project`] aggregate with members, calendar
//!   events, and chat
//! - `ports`: the whole-document [`ports::ProjectRepository`] contract
//! - `adapters`: in-memory repository
//! - `services`: [`services::ProjectWorkspace`] application state and the
//!   fire-and-forget [`services::PersistenceDispatcher`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
