use std::io::Write;

use super::Renderer;
use tile_merge::board::Board;

/// Writes boards to a stream, as aligned text or as JSON rows.
pub struct TextRenderer<W: Write> {
    out: W,
    json: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    type Error = String;

    fn draw(&mut self, board: &Board) -> Result<(), Self::Error> {
        if self.json {
            let json = serde_json::to_string(board).map_err(|e| e.to_string())?;

            writeln!(self.out, "{}", json).map_err(|e| e.to_string())
        } else {
            write!(self.out, "{}", board).map_err(|e| e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_text() {
        let mut renderer = TextRenderer::new(Vec::new(), false);

        renderer.draw(&"2,0/0,4".parse().unwrap()).unwrap();

        assert_eq!(String::from_utf8(renderer.into_inner()).unwrap(), "2 .\n. 4\n");
    }

    #[test]
    fn draws_json_rows() {
        let mut renderer = TextRenderer::new(Vec::new(), true);

        renderer.draw(&"2,0/0,4".parse().unwrap()).unwrap();

        assert_eq!(String::from_utf8(renderer.into_inner()).unwrap(), "[[2,0],[0,4]]\n");
    }
}
