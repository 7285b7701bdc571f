//! Configuration for pmsprite
//!
//! Provides types, discovery and loading for the optional `pmsprite.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
