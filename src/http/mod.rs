//! Axum-based HTTP server.
//!
//! This module provides the REST API surface: routing, shared state, request
//! handlers, DTOs, and error mapping. Outcome classes stay distinct all the
//! way to the wire: validation failures are 400, missing hearings 404,
//! schedule conflicts 409 (with the colliding hearings in the body), and
//! backend failures 500.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, AppError};
pub use router::create_router;
pub use state::AppState;
