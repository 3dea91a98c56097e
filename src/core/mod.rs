//! Core components shared by every API module.
//!
//! - The main [`KnClient`] and its builder.
//! - The primary [`KnError`] type.
//! - Shared models ([`Period`]).

/// The main client (`KnClient`), builder, and configuration.
pub mod client;
/// The primary error type (`KnError`) for the crate.
pub mod error;
/// Shared data models used across API modules.
pub mod models;

// convenient re-exports so most code can just `use crate::core::KnClient`
pub use client::{KnClient, KnClientBuilder};
pub use error::KnError;
pub use models::Period;
