//! JavaScript bindings for a single game session.

use wasm_bindgen::prelude::*;

use crate::board::{Board, Direction, Tile};
use crate::session::Session;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn seed_or_random(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| (js_sys::Math::random() * (u64::MAX as f64)) as u64)
}

#[wasm_bindgen]
pub struct WasmGame {
    session: Session,
}

#[wasm_bindgen]
impl WasmGame {
    /// Random starting board of `size`x`size`.
    #[wasm_bindgen(constructor)]
    pub fn new(size: usize, seed: Option<u64>) -> Result<WasmGame, JsValue> {
        init_panic_hook();

        if size < crate::board::MIN_SIZE {
            return Err(format!("board size must be at least {}", crate::board::MIN_SIZE).into());
        }

        Ok(WasmGame {
            session: Session::random(size, seed_or_random(seed)),
        })
    }

    /// Starts from a literal such as `0,0,0,2/0,4,0,2/0,0,8,0/0,0,0,2`.
    #[wasm_bindgen(js_name = fromLiteral)]
    pub fn from_literal(literal: &str, seed: Option<u64>) -> Result<WasmGame, JsValue> {
        init_panic_hook();

        let board: Board = literal.parse().map_err(|e: crate::BoardError| JsValue::from(e.to_string()))?;

        Ok(WasmGame {
            session: Session::new(board, seed_or_random(seed)),
        })
    }

    /// 0 = up, 1 = down, 2 = left, 3 = right. Returns whether the board changed.
    #[wasm_bindgen(js_name = attemptMove)]
    pub fn attempt_move(&mut self, direction: u8) -> Result<bool, JsValue> {
        let direction = *Direction::ALL
            .get(direction as usize)
            .ok_or_else(|| JsValue::from(format!("invalid direction: {}", direction)))?;

        Ok(self.session.attempt_move(direction).moved)
    }

    /// Row-major tile values.
    pub fn cells(&self) -> Vec<Tile> {
        self.session.board().cells().to_vec()
    }

    pub fn size(&self) -> usize {
        self.session.board().size()
    }

    /// Seed of this game. Passing it back to the constructor replays it.
    pub fn seed(&self) -> u64 {
        self.session.seed()
    }
}
