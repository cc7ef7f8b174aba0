use core::str::FromStr;
use structopt::clap::Shell;
use structopt::StructOpt;
use structopt_flags::QuietVerbose;
use tile_merge::board::{Board, Direction, MIN_SIZE};

fn parse_size(s: &str) -> Result<usize, String> {
    let size = s
        .parse::<usize>()
        .map_err(|_| format!("invalid size: {}", s))?;

    if size < MIN_SIZE {
        return Err(format!("size must be at least {}, got {}", MIN_SIZE, size));
    }

    Ok(size)
}

/// A sequence of moves: `lurd`, `left,up` or `l u r d`.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveScript(pub Vec<Direction>);

impl FromStr for MoveScript {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut moves = Vec::new();

        for token in s.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }

            match token.parse::<Direction>() {
                Ok(direction) => moves.push(direction),
                Err(_) => {
                    for c in token.chars() {
                        moves.push(c.to_string().parse::<Direction>()?);
                    }
                }
            }
        }

        Ok(MoveScript(moves))
    }
}

#[derive(Debug)]
pub struct RendererConfig {
    pub json: bool,
    #[cfg(feature = "sdl2")]
    pub visual: bool,
    #[cfg(feature = "sdl2")]
    pub vsync: bool,
    #[cfg(feature = "sdl2")]
    pub fullscreen: bool,
    #[cfg(feature = "sdl2")]
    pub cell_size: u32,
    #[cfg(feature = "sdl2")]
    pub padding: u32,
}

#[derive(Debug)]
pub struct AppConfig {
    pub size: usize,
    pub board: Option<Board>,
    pub seed: Option<u64>,
    pub spawn: bool,
    pub moves: Vec<Direction>,
    pub renderer: RendererConfig,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "Tile Merge",
    about = "Slide and merge numbered tiles on a square board"
)]
pub struct Opt {
    #[structopt(flatten)]
    pub verbose: QuietVerbose,

    #[structopt(
        parse(try_from_str = parse_size),
        short,
        long,
        default_value = "4",
        help = "Board size (NxN)"
    )]
    size: usize,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        help = "Start from a literal board, e.g. 0,0,0,2/0,4,0,2/0,0,8,0/0,0,0,2"
    )]
    board: Option<Board>,

    #[structopt(parse(try_from_str), long, help = "Random seed")]
    seed: Option<u64>,

    #[structopt(long, help = "Do not spawn a new tile after a move")]
    no_spawn: bool,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        help = "Apply these moves and print the result, e.g. lurd or left,up"
    )]
    moves: Option<MoveScript>,

    #[structopt(long, help = "Print boards as JSON")]
    json: bool,

    #[cfg(feature = "sdl2")]
    #[structopt(short = "V", long, help = "Open a window and play with the arrow keys")]
    visual: bool,

    #[cfg(feature = "sdl2")]
    #[structopt(long, help = "Turns on vsync")]
    vsync: bool,

    #[cfg(feature = "sdl2")]
    #[structopt(short, long, help = "Runs the application in full screen")]
    fullscreen: bool,

    #[cfg(feature = "sdl2")]
    #[structopt(long, default_value = "100", help = "Cell size in pixels")]
    cell_size: u32,

    #[cfg(feature = "sdl2")]
    #[structopt(long, default_value = "6", help = "Gap between cells in pixels")]
    padding: u32,

    #[structopt(long, possible_values= &Shell::variants(), case_insensitive = true, help = "Generate shell completions and exit")]
    pub completions: Option<Shell>,
}

impl Opt {
    pub fn to_app_config(self) -> Result<AppConfig, &'static str> {
        #[cfg(feature = "sdl2")]
        if self.visual && self.moves.is_some() {
            Err("--moves cannot be combined with --visual")?
        }

        #[cfg(feature = "sdl2")]
        if self.cell_size == 0 {
            Err("--cell-size must be positive")?
        }

        Ok(AppConfig {
            size: self.board.as_ref().map_or(self.size, Board::size),
            board: self.board,
            seed: self.seed,
            spawn: !self.no_spawn,
            moves: self.moves.map(|script| script.0).unwrap_or_default(),
            renderer: RendererConfig {
                json: self.json,
                #[cfg(feature = "sdl2")]
                visual: self.visual,
                #[cfg(feature = "sdl2")]
                vsync: self.vsync,
                #[cfg(feature = "sdl2")]
                fullscreen: self.fullscreen,
                #[cfg(feature = "sdl2")]
                cell_size: self.cell_size,
                #[cfg(feature = "sdl2")]
                padding: self.padding,
            },
        })
    }
}
