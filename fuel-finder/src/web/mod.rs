//! Web layer for the fuel station finder.
//!
//! Exposes the published search state over HTTP and accepts the user
//! actions that change it.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, Orchestrator};
