//! Infrastructure layer for Learnix.
//!
//! Contains the concrete model backends behind the `ResponseGenerator` trait
//! defined in `learnix-core`, plus configuration file loading and data
//! directory resolution.

pub mod config;
pub mod llm;
