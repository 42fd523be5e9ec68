//! # Shared
//!
//! Common types and interfaces used by the role definition lookup and the
//! authorization client.

pub mod client;
pub mod config;
pub mod data;
pub mod error;
pub mod role;
pub mod schema;

// Re-exports
pub use client::*;
pub use config::*;
pub use data::*;
pub use error::*;
pub use role::*;
pub use schema::*;
