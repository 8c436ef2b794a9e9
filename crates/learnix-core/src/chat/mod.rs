pub mod buffer;
pub mod engine;
pub mod prompt;
pub mod session;
pub mod store;
