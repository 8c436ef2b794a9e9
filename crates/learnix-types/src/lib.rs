//! Shared domain types for Learnix.
//!
//! This crate contains the types used across the Learnix workspace:
//! conversation turns, generation settings, configuration, static advice
//! content, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod advice;
pub mod chat;
pub mod config;
pub mod content;
pub mod error;
pub mod llm;
