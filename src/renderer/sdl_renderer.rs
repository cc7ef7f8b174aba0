use super::Renderer;
use tile_merge::board::{Board, Direction, Tile};

use enum_map::{enum_map, EnumMap};
use log::debug;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::{FullscreenType, Window};
use sdl2::EventPump;

const BACKGROUND: Color = Color::RGB(70, 70, 70);
const EMPTY_CELL: Color = Color::RGB(255, 255, 255);
const TEXT: Color = Color::RGB(60, 60, 60);

/// Fill colour per tile exponent: index 1 is the 2 tile, index 16 the 65536
/// tile. Larger tiles reuse the last entry.
const TILE_COLORS: [Color; 17] = [
    EMPTY_CELL,
    Color::RGB(231, 4, 255),
    Color::RGB(219, 6, 255),
    Color::RGB(207, 8, 255),
    Color::RGB(195, 10, 255),
    Color::RGB(183, 12, 255),
    Color::RGB(171, 14, 255),
    Color::RGB(159, 16, 255),
    Color::RGB(147, 18, 255),
    Color::RGB(135, 110, 255),
    Color::RGB(123, 121, 255),
    Color::RGB(111, 132, 255),
    Color::RGB(99, 143, 255),
    Color::RGB(87, 154, 255),
    Color::RGB(75, 165, 255),
    Color::RGB(63, 176, 255),
    Color::RGB(51, 187, 255),
];

/// 3x5 digit glyphs, one byte per row, bit 2 is the leftmost pixel.
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b010, 0b010, 0b010],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];
const GLYPH_WIDTH: u32 = 3;
const GLYPH_HEIGHT: u32 = 5;

fn tile_color(value: Tile) -> Color {
    let exponent = match value {
        0 => 0,
        _ => value.trailing_zeros() as usize,
    };

    TILE_COLORS[exponent.min(TILE_COLORS.len() - 1)]
}

#[derive(Debug, Clone, Copy)]
pub struct SdlConfig {
    pub board_size: usize,
    pub cell_size: u32,
    pub padding: u32,
    pub vsync: bool,
    pub fullscreen: bool,
}

impl SdlConfig {
    /// Cells plus a gap on both sides of every cell.
    pub fn window_size(&self) -> u32 {
        let cells = self.board_size as u32;

        cells * self.cell_size + (cells + 1) * self.padding
    }
}

/// Window showing the board; arrow keys or WASD produce moves.
pub struct SdlRenderer {
    canvas: Canvas<Window>,
    events: EventPump,
    bindings: EnumMap<Direction, [Keycode; 2]>,
    cell_size: u32,
    padding: u32,
    needs_redraw: bool,
    should_quit: bool,
}

impl SdlRenderer {
    pub fn new(config: &SdlConfig) -> Result<Self, String> {
        let context = sdl2::init()?;
        let video = context.video()?;
        let side = config.window_size();

        let mut window = video
            .window("Tile Merge", side, side)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        if config.fullscreen {
            window.set_fullscreen(FullscreenType::True)?;
        }

        if window.fullscreen_state() != FullscreenType::Off {
            context.mouse().show_cursor(false);
        }

        let mut builder = window.into_canvas();

        if config.vsync {
            builder = builder.present_vsync();
        }

        let canvas = builder.build().map_err(|e| e.to_string())?;
        let events = context.event_pump()?;

        Ok(Self {
            canvas,
            events,
            bindings: enum_map! {
                Direction::Up => [Keycode::Up, Keycode::W],
                Direction::Down => [Keycode::Down, Keycode::S],
                Direction::Left => [Keycode::Left, Keycode::A],
                Direction::Right => [Keycode::Right, Keycode::D],
            },
            cell_size: config.cell_size,
            padding: config.padding,
            needs_redraw: true,
            should_quit: false,
        })
    }

    fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let x = self.padding + col as u32 * (self.cell_size + self.padding);
        let y = self.padding + row as u32 * (self.cell_size + self.padding);

        Rect::new(x as i32, y as i32, self.cell_size, self.cell_size)
    }

    fn draw_number(&mut self, cell: Rect, value: Tile) -> Result<(), String> {
        let digits: Vec<usize> = value
            .to_string()
            .bytes()
            .map(|b| (b - b'0') as usize)
            .collect();

        // glyphs are one pixel apart, the text fills at most 70% of the cell
        let columns = digits.len() as u32 * (GLYPH_WIDTH + 1) - 1;
        let available = cell.width() * 7 / 10;
        let scale = (available / columns).min(available / (2 * GLYPH_HEIGHT)).max(1);

        let left = cell.x() + (cell.width().saturating_sub(columns * scale) / 2) as i32;
        let top = cell.y() + (cell.height().saturating_sub(GLYPH_HEIGHT * scale) / 2) as i32;

        self.canvas.set_draw_color(TEXT);

        for (index, &digit) in digits.iter().enumerate() {
            let glyph_left = left + (index as u32 * (GLYPH_WIDTH + 1) * scale) as i32;

            for (y, bits) in DIGITS[digit].iter().enumerate() {
                for x in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - x)) == 0 {
                        continue;
                    }

                    let pixel = Rect::new(
                        glyph_left + (x * scale) as i32,
                        top + (y as u32 * scale) as i32,
                        scale,
                        scale,
                    );

                    self.canvas.fill_rect(pixel)?;
                }
            }
        }

        Ok(())
    }
}

impl Renderer for SdlRenderer {
    type Error = String;

    fn draw(&mut self, board: &Board) -> Result<(), Self::Error> {
        self.canvas.set_draw_color(BACKGROUND);
        self.canvas.clear();

        for (row, col, value) in board {
            let rect = self.cell_rect(row, col);

            self.canvas.set_draw_color(tile_color(value));
            self.canvas.fill_rect(rect)?;

            if value != 0 {
                self.draw_number(rect, value)?;
            }
        }

        self.canvas.present();
        self.needs_redraw = false;

        Ok(())
    }

    fn poll_input(&mut self) -> Vec<Direction> {
        let mut directions = Vec::new();

        for event in self.events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => {
                    self.should_quit = true;
                }
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    let bound = self
                        .bindings
                        .iter()
                        .find(|(_, keys)| keys.contains(&keycode))
                        .map(|(direction, _)| direction);

                    if let Some(direction) = bound {
                        debug!("key {:?} -> {}", keycode, direction);
                        directions.push(direction);
                    }
                }
                Event::Window {
                    win_event: WindowEvent::Exposed,
                    ..
                } => {
                    self.needs_redraw = true;
                }
                _ => {}
            }
        }

        directions
    }

    fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_follow_tile_exponent() {
        assert_eq!(tile_color(0), EMPTY_CELL);
        assert_eq!(tile_color(2), Color::RGB(231, 4, 255));
        assert_eq!(tile_color(2048), Color::RGB(111, 132, 255));
        assert_eq!(tile_color(1 << 20), Color::RGB(51, 187, 255));
    }

    #[test]
    fn window_fits_cells_and_gaps() {
        let config = SdlConfig {
            board_size: 4,
            cell_size: 100,
            padding: 6,
            vsync: false,
            fullscreen: false,
        };

        assert_eq!(config.window_size(), 430);
    }
}
