//! # Docket Rust Backend
//!
//! Courtroom hearing scheduling engine.
//!
//! This crate provides a Rust backend for scheduling judicial hearings. It answers
//! two questions reliably: which time slots remain free for a new hearing of a
//! given duration, and whether a proposed hearing collides with an existing one
//! for the same court. The backend exposes a REST API via Axum.
//!
//! ## Features
//!
//! - **Free-slot search**: working windows per business day, buffered occupancy,
//!   sweep-line interval merging, subtraction, and grid-aligned slot slicing
//! - **Conflict detection**: half-open interval overlap against existing hearings
//! - **Hearing management**: create/update/delete with conflict checks serialized
//!   through the repository write path
//! - **HTTP API**: RESTful endpoints for the scheduling frontend
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Domain value types (hearings, intervals, time slots)
//! - [`scheduling`]: Pure interval arithmetic, no I/O
//! - [`services`]: High-level business logic orchestrating core + repository
//! - [`db`]: Repository pattern and persistence layer
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod config;
pub mod db;
pub mod models;
pub mod scheduling;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
