use tile_merge::board::{Board, Direction};

/// Presentation shell around the engine: shows boards and turns user input
/// into directions. Holds no game state of its own.
pub trait Renderer {
    type Error;

    /// Show `board`, replacing whatever was shown before.
    fn draw(&mut self, board: &Board) -> Result<(), Self::Error>;

    /// Directions requested since the last call, in order.
    fn poll_input(&mut self) -> Vec<Direction> {
        Vec::new()
    }

    /// True when the shown board was invalidated by the window system.
    fn needs_redraw(&self) -> bool {
        false
    }

    fn should_quit(&self) -> bool {
        false
    }
}

pub mod text_renderer;

#[cfg(feature = "sdl2")]
pub mod sdl_renderer;

pub use text_renderer::TextRenderer;

#[cfg(feature = "sdl2")]
pub use sdl_renderer::{SdlConfig, SdlRenderer};
