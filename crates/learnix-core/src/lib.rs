//! Conversation logic and generator abstractions for Learnix.
//!
//! This crate defines the conversation buffer, prompt assembly, the chat
//! engine that runs one interaction cycle, and the `ResponseGenerator` port
//! that model backends implement. It depends only on `learnix-types` --
//! never on `learnix-infra` or any HTTP crate.

pub mod chat;
pub mod llm;
