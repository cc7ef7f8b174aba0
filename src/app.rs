use crate::cli::AppConfig;
use crate::renderer::{Renderer, TextRenderer};

#[cfg(feature = "sdl2")]
use crate::renderer::{SdlConfig, SdlRenderer};

use log::{debug, info};
use rand::rngs::OsRng;
use rand::Rng;
use std::io;
use tile_merge::board::Direction;
use tile_merge::Session;

#[cfg(feature = "sdl2")]
use std::time::{Duration, Instant};

#[cfg(feature = "sdl2")]
const FRAME_TIME: Duration = Duration::from_micros(1_000_000 / 60);

pub struct GameApp {
    config: AppConfig,
}

impl GameApp {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let seed = self.config.seed.unwrap_or_else(|| OsRng.gen());

        info!("Using seed: {}", seed);

        let session = match &self.config.board {
            Some(board) => Session::new(board.clone(), seed),
            None => Session::random(self.config.size, seed),
        }
        .with_spawn(self.config.spawn);

        #[cfg(feature = "sdl2")]
        if self.config.renderer.visual {
            return self.run_visual(session);
        }

        self.run_script(session)
    }

    /// Applies the scripted moves and prints the resulting board.
    fn run_script(&self, mut session: Session) -> Result<(), Box<dyn std::error::Error>> {
        let mut renderer = TextRenderer::new(io::stdout(), self.config.renderer.json);

        for &direction in &self.config.moves {
            let outcome = session.attempt_move(direction);

            info!(
                "{:>5}: moved={} merged={}",
                direction, outcome.moved, outcome.merged
            );

            if let Some(spawned) = outcome.spawned {
                debug!("spawned {} at ({}, {})", spawned.value, spawned.row, spawned.col);
            }
        }

        renderer.draw(session.board())?;

        Self::report(&session);

        Ok(())
    }

    #[cfg(feature = "sdl2")]
    fn run_visual(&self, mut session: Session) -> Result<(), Box<dyn std::error::Error>> {
        let sdl_config = SdlConfig {
            board_size: session.board().size(),
            cell_size: self.config.renderer.cell_size,
            padding: self.config.renderer.padding,
            vsync: self.config.renderer.vsync,
            fullscreen: self.config.renderer.fullscreen,
        };

        let mut renderer = SdlRenderer::new(&sdl_config)?;

        renderer.draw(session.board())?;

        while !renderer.should_quit() {
            let frame_start = Instant::now();
            let mut dirty = renderer.needs_redraw();

            for direction in renderer.poll_input() {
                dirty |= session.attempt_move(direction).moved;
            }

            if dirty {
                renderer.draw(session.board())?;
            }

            if let Some(rest) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(rest);
            }
        }

        Self::report(&session);

        Ok(())
    }

    fn report(session: &Session) {
        let tally = Direction::ALL
            .iter()
            .map(|&direction| format!("{} {}", direction, session.moves()[direction]))
            .collect::<Vec<_>>()
            .join(", ");

        info!(
            "{} moves ({}), highest tile {}",
            session.total_moves(),
            tally,
            session.board().max_tile()
        );
    }
}
