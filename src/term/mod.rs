//! Terminal presentation layer.
//!
//! The engine stays pure; this module maps a [`Game`](crate::core::Game)
//! snapshot into a styled character framebuffer and flushes that to the
//! terminal. Rendering into an intermediate buffer keeps the view logic
//! unit-testable without a terminal.

pub mod fb;
pub mod renderer;
pub mod view;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use view::{GameView, Viewport};
