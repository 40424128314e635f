//! Taskmatrix: an Eisenhower-matrix task board for small teams.
//!
//! The board sorts tasks into four quadrants by urgency and importance.
//! Users add and edit tasks, drag them between quadrants, and reorder them
//! within a quadrant. The core is a set of pure transforms over the task list
//! plus an explicit application state that mirrors every change to external
//! stores without blocking the caller.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//!
//! # Modules
//!
//! - [`task`]: Task record, quadrants, and the ordering engine
//! - [`project`]: Project aggregate, workspace state, and persistence queue
//! - [`identity`]: Signed-in user identity
//! - [`storage`]: Blob storage for chat attachments
//! - [`pomodoro`]: Focus timer state machine
//! - [`config`]: JSON application configuration
//! - [`logging`]: Tracing subscriber bootstrap

pub mod config;
pub mod identity;
pub mod logging;
pub mod pomodoro;
pub mod project;
pub mod storage;
pub mod task;
