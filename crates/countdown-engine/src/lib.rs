//! Countdown engine: the state machine behind the `countdown` CLI.
//!
//! The engine multiplexes three event sources (key presses, a one-second
//! ticker and a one-shot deadline) and draws the remaining time on a
//! [`RenderSurface`]. Terminal and audio backends live in the CLI crate.

pub mod alert;
pub mod duration;
pub mod engine;
pub mod error;
pub mod format;
pub mod input;
pub mod render;
pub mod signals;
pub mod surface;

pub use alert::Alert;
pub use duration::parse_duration;
pub use engine::{Countdown, CountdownConfig, Outcome, State, TICK};
pub use error::{DurationError, Error, Result};
pub use format::format_clock;
pub use input::{Command, Key};
pub use render::{Placement, Renderer};
pub use surface::{Frame, MockSurface, RenderSurface};
