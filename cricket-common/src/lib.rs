//! # Cricket Common Library
//!
//! Shared code for the cricket statistics service:
//! - Error type used across the workspace
//! - Bootstrap configuration loading
//! - Database models for players, matches and score totals

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
