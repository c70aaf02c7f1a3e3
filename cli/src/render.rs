use serde::Serialize;
use std::fmt::Write;
use sweeper_core::{Board, BoardConfig, Coord2, EngineCell, MineLayout};

/// Plain-text board, one row per line.
///
/// `#` hidden, `F` flag, `.` empty, digits for counts, `*` mine and `X` for the
/// mine that ended the game.
pub fn render_board(board: &Board) -> String {
    let (height, width) = board.size();
    let mut out = String::with_capacity(usize::from(height) * (usize::from(width) + 1));

    for row in 0..height {
        for col in 0..width {
            out.push(cell_char(board, (row, col)));
        }
        out.push('\n');
    }
    out
}

fn cell_char(board: &Board, coords: Coord2) -> char {
    match board.cell_at(coords) {
        Some(EngineCell::Hidden) | None => '#',
        Some(EngineCell::Flagged) => 'F',
        Some(EngineCell::Revealed(0)) => '.',
        Some(EngineCell::Revealed(count)) => char::from(b'0' + count),
        Some(EngineCell::Mine) if board.triggered_mine() == Some(coords) => 'X',
        Some(EngineCell::Mine) => '*',
    }
}

/// One-line summary of the game, in the style of a status bar.
pub fn render_status(board: &Board) -> String {
    let state = if board.is_won() {
        "won"
    } else if board.is_lost() {
        "lost"
    } else if board.first_move_done() {
        "playing"
    } else {
        "ready"
    };
    let mut out = format!(
        "{} | {} | mines left {} | time {}",
        board.difficulty(),
        state,
        board.mines_left(),
        board.time_string()
    );
    if let Some(seed) = board.seed() {
        let _ = write!(out, " | seed {seed}");
    }
    out
}

/// Mine layout drawn for a first click, as printed by `sweeper layout`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LayoutDump {
    pub seed: u64,
    pub height: u8,
    pub width: u8,
    pub mines: u16,
    pub first_click: Coord2,
    pub mine_coords: Vec<Coord2>,
}

impl LayoutDump {
    pub fn new(seed: u64, first_click: Coord2, layout: &MineLayout) -> Self {
        let BoardConfig { size, mines } = layout.board_config();
        Self {
            seed,
            height: size.0,
            width: size.1,
            mines,
            first_click,
            mine_coords: layout.iter_mines().collect(),
        }
    }

    /// `*` for mines, `o` for the first click and adjacent counts elsewhere.
    pub fn render_text(&self, layout: &MineLayout) -> String {
        let mut out = String::new();
        for row in 0..self.height {
            for col in 0..self.width {
                let coords = (row, col);
                let c = if layout.contains_mine(coords) {
                    '*'
                } else if coords == self.first_click {
                    'o'
                } else {
                    match layout.adjacent_mine_count(coords) {
                        0 => '.',
                        count => char::from(b'0' + count),
                    }
                };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }
}
