// NOTE: countdown process layout
//
// The engine crate owns the state machine and never touches the terminal or
// the sound card. This crate wires it to the outside world:
// - args/config: one positional duration, logging flags, fixed bell path
// - terminal: raw-mode surface plus a detached thread feeding key presses
// - audio: blocking bell playback after the screen has been handed back
//
// Exit status: 0 after natural expiry, 1 after a quit key or any failure,
// 2 for usage errors (reported by clap).

mod args;
pub mod audio;
mod commands;
pub mod config;
pub mod logging;
pub mod terminal;

pub use args::{Cli, LogLevel};
pub use commands::run;
