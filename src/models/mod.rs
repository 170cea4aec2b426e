// src/models/mod.rs

//! Domain models for the explorer.
//!
//! This module contains all data structures used throughout the
//! application, organized by their primary purpose.

mod artwork;
mod config;
mod search;

// Re-export all public types
pub use artwork::{ArtworkRecord, Department, ObjectId};
pub use config::{ApiConfig, Config, SearchConfig};
pub use search::{PageWindow, SearchFilters, SearchResult};
