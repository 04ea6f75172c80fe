//! # Connect Four
//!
//! A Connect Four engine for boards of any size, with a fixed-depth
//! adversarial move evaluator and a terminal game loop.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, directional win scan, players
//! - [`ai`] — Agent trait, the depth-bounded evaluator and the agents built on it
//! - [`session`] — Turn-by-turn game loop with random-move perturbation
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
