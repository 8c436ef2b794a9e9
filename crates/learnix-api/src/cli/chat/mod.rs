//! Interactive terminal chat for Learnix.
//!
//! Welcome banner, readline input, slash commands, waiting spinner, and the
//! display window after each reply. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod loop_runner;
pub mod renderer;
