//! Bordered, titled and styled text frames for character-cell terminals.
//!
//! A frame is built once from content plus [`FrameOptions`] and rendered
//! either as newline-joined rows or, when a `top`/`left` origin is given, as
//! cursor-addressed fragments that can be written anywhere on screen.

pub mod border;
pub mod config;
mod error;
pub mod frame;
pub mod padding;
pub mod style;
mod telemetry;
pub mod text;

pub use border::{Border, BorderConfig, BorderKind, BorderOption, BorderSetting, Corner, Edge};
pub use config::{FrameOptions, Titles};
pub use error::FrameError;
pub use frame::{Frame, FramePreset};
pub use padding::Padding;
pub use style::{Color, FrameStyle, Paint};
pub use telemetry::{init_tracing, tracing_log_path};
pub use text::Align;

/// Render `content` with `options` in one call.
pub fn frame<S: AsRef<str>>(content: &[S], options: FrameOptions) -> String {
    Frame::new(content, options).render()
}

/// Render `content` with a message preset.
pub fn preset<S: AsRef<str>>(kind: FramePreset, content: &[S]) -> String {
    Frame::preset(kind, content).render()
}
