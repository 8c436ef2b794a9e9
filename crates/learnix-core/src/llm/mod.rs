//! Model backend abstractions for Learnix.
//!
//! - `ResponseGenerator`: RPITIT trait for concrete backends
//! - `BoxResponseGenerator`: object-safe wrapper for dynamic dispatch
//! - `truncate` / `decode`: prompt bounding and reply clean-up applied
//!   around every backend call
//! - `EchoGenerator`: offline backend that replies with its prompt

pub mod box_provider;
pub mod decode;
pub mod echo;
pub mod provider;
pub mod truncate;
