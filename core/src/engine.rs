use alloc::string::String;
use alloc::vec;
use core::num::Saturating;
use core::time::Duration;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Ready -> Active (first reveal, mines get placed)
/// - Active -> Won
/// - Active -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    Ready,
    Active,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn outcome(self) -> Outcome {
        match self {
            Self::Ready | Self::Active => Outcome::InProgress,
            Self::Won => Outcome::Won,
            Self::Lost => Outcome::Lost,
        }
    }
}

/// How the game stands, as seen by a front end.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// One game session: minefield, player marks, outcome and clock.
///
/// Mines are placed lazily on the first reveal so that the first click and its
/// neighbours are always safe. Every operation ignores out-of-bounds
/// coordinates and moves made after the game ended, reporting
/// [`RevealOutcome::NoChange`] or [`MarkOutcome::NoChange`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    difficulty: Difficulty,
    config: BoardConfig,
    mine_layout: Option<MineLayout>,
    fixed_layout: bool,
    cells: Array2<EngineCell>,
    revealed_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    state: EngineState,
    triggered_mine: Option<Coord2>,
    requested_seed: Option<u64>,
    current_seed: Option<u64>,
    #[serde(skip)]
    timer: GameTimer,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

impl Board {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_seed(difficulty, None)
    }

    /// Board whose mines will be placed from `seed`, or from a random seed when `None`.
    pub fn with_seed(difficulty: Difficulty, seed: Option<u64>) -> Self {
        let config = difficulty.config();
        Self {
            difficulty,
            config,
            mine_layout: None,
            fixed_layout: false,
            cells: Array2::default(config.size.to_nd_index()),
            revealed_count: Saturating(0),
            flagged_count: Saturating(0),
            state: EngineState::Ready,
            triggered_mine: None,
            requested_seed: seed,
            current_seed: None,
            timer: GameTimer::default(),
        }
    }

    /// Board over a fixed mine layout; resets replay the same layout.
    pub fn from_layout(mine_layout: MineLayout) -> Self {
        let config = mine_layout.board_config();
        let mut board = Self::with_seed(Difficulty::Custom(config), None);
        board.mine_layout = Some(mine_layout);
        board.fixed_layout = true;
        board
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.config = difficulty.config();
        self.fixed_layout = false;
        self.reset();
    }

    /// Seed used for the next mine placement; `None` draws a random one.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.requested_seed = seed;
    }

    pub fn reset(&mut self) {
        if !self.fixed_layout {
            self.mine_layout = None;
            self.current_seed = None;
        }
        self.cells = Array2::default(self.config.size.to_nd_index());
        self.revealed_count = Saturating(0);
        self.flagged_count = Saturating(0);
        self.state = EngineState::Ready;
        self.triggered_mine = None;
        self.timer.reset();
        log::debug!("Board reset to {}", self.difficulty);
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn height(&self) -> Coord {
        self.config.height()
    }

    pub fn width(&self) -> Coord {
        self.config.width()
    }

    pub fn total_mines(&self) -> CellCount {
        self.mine_layout
            .as_ref()
            .map_or(self.config.mines, MineLayout::mine_count)
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    pub fn first_move_done(&self) -> bool {
        !self.state.is_ready()
    }

    pub fn is_won(&self) -> bool {
        matches!(self.state, EngineState::Won)
    }

    pub fn is_lost(&self) -> bool {
        matches!(self.state, EngineState::Lost)
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Seed of the current layout, or the requested seed before mines are placed.
    pub fn seed(&self) -> Option<u64> {
        self.current_seed.or(self.requested_seed)
    }

    pub fn requested_seed(&self) -> Option<u64> {
        self.requested_seed
    }

    pub fn mine_layout(&self) -> Option<&MineLayout> {
        self.mine_layout.as_ref()
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<EngineCell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.cell_at(coords).is_some_and(EngineCell::is_revealed)
    }

    pub fn is_flagged(&self, coords: Coord2) -> bool {
        self.cell_at(coords).is_some_and(EngineCell::is_flagged)
    }

    pub fn has_mine(&self, coords: Coord2) -> bool {
        self.mine_layout
            .as_ref()
            .is_some_and(|layout| layout.contains_mine(coords))
    }

    pub fn revealed_mask(&self) -> Array2<bool> {
        self.cells.map(|cell| cell.is_revealed())
    }

    pub fn flag_mask(&self) -> Array2<bool> {
        self.cells.map(|cell| cell.is_flagged())
    }

    /// All-false until the mines are placed.
    pub fn mine_mask(&self) -> Array2<bool> {
        match &self.mine_layout {
            Some(layout) => layout.mine_mask().clone(),
            None => Array2::default(self.config.size.to_nd_index()),
        }
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count.0
    }

    pub fn mines_left(&self) -> isize {
        (self.total_mines() as isize) - (self.flagged_count.0 as isize)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn timer(&self) -> &GameTimer {
        &self.timer
    }

    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }

    /// Elapsed time as `M:SS`.
    pub fn time_string(&self) -> String {
        format_elapsed(self.elapsed_secs())
    }

    /// Adjacent mines around `coords`; zero outside the board or before placement.
    pub fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        match &self.mine_layout {
            Some(layout) if in_bounds(coords, self.config.size) => {
                layout.adjacent_mine_count(coords)
            }
            _ => 0,
        }
    }

    /// Adjacent flags around `coords`; zero outside the board.
    pub fn count_adjacent_flags(&self, coords: Coord2) -> u8 {
        if !in_bounds(coords, self.config.size) {
            return 0;
        }
        let count = self
            .iter_neighbors(coords)
            .filter(|&pos| self.cells[pos.to_nd_index()].is_flagged())
            .count();
        // at most 8 neighbours
        count as u8
    }

    /// Whether every non-mine cell has been revealed.
    pub fn check_win(&self) -> bool {
        let Some(layout) = &self.mine_layout else {
            return false;
        };
        self.cells
            .indexed_iter()
            .all(|((row, col), cell)| layout.mine_mask()[(row, col)] || cell.is_revealed())
    }

    /// Places the mines away from `exclude` and returns the seed that was used.
    ///
    /// `None` draws a fresh seed, which is recorded so the layout can be replayed.
    pub fn place_mines(&mut self, exclude: Coord2, seed: Option<u64>) -> u64 {
        let seed = seed.unwrap_or_else(random_seed);
        let layout = RandomMinefieldGenerator::new(seed, exclude).generate(self.config);
        self.mine_layout = Some(layout);
        self.current_seed = Some(seed);
        seed
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        use EngineCell::*;
        use MarkOutcome::*;

        if !self.accepts_move(coords, "flag") {
            return NoChange;
        }

        match self.cells[coords.to_nd_index()] {
            Hidden => {
                self.cells[coords.to_nd_index()] = Flagged;
                self.flagged_count += 1;
                Changed
            }
            Flagged => {
                self.cells[coords.to_nd_index()] = Hidden;
                self.flagged_count -= 1;
                Changed
            }
            Revealed(_) | Mine => NoChange,
        }
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if !self.accepts_move(coords, "reveal") {
            return RevealOutcome::NoChange;
        }

        if self.state.is_ready() {
            self.start_game(coords);
        }

        match self.cells[coords.to_nd_index()] {
            EngineCell::Hidden => self.reveal_single_cell(coords),
            EngineCell::Flagged => {
                log::debug!("Flag blocks reveal at {:?}", coords);
                RevealOutcome::NoChange
            }
            _ => RevealOutcome::NoChange,
        }
    }

    /// Chord: when a revealed cell has as many adjacent flags as adjacent mines,
    /// reveal every other hidden neighbour. A wrongly placed flag loses the game.
    pub fn reveal_adjacent(&mut self, coords: Coord2) -> RevealOutcome {
        if !self.accepts_move(coords, "chord") {
            return RevealOutcome::NoChange;
        }

        let EngineCell::Revealed(count) = self.cells[coords.to_nd_index()] else {
            log::debug!("Chord at {:?} ignored, cell is not revealed", coords);
            return RevealOutcome::NoChange;
        };

        let flags = self.count_adjacent_flags(coords);
        if count != flags {
            log::debug!(
                "Chord at {:?} ignored, {} adjacent mines but {} flags",
                coords,
                count,
                flags
            );
            return RevealOutcome::NoChange;
        }

        let mut outcome = RevealOutcome::NoChange;
        for neighbor in self.iter_neighbors(coords) {
            if !matches!(self.cells[neighbor.to_nd_index()], EngineCell::Hidden) {
                continue;
            }
            outcome = outcome | self.reveal_single_cell(neighbor);
            if self.state.is_finished() {
                break;
            }
        }
        outcome
    }

    fn accepts_move(&self, coords: Coord2, action: &str) -> bool {
        if !in_bounds(coords, self.config.size) {
            log::debug!(
                "Ignoring {} at {:?}, outside the {:?} board",
                action,
                coords,
                self.config.size
            );
            return false;
        }
        if self.state.is_finished() {
            log::debug!("Ignoring {} at {:?}, game already ended", action, coords);
            return false;
        }
        true
    }

    fn start_game(&mut self, first_click: Coord2) {
        if self.mine_layout.is_none() {
            let seed = self.place_mines(first_click, self.requested_seed);
            log::debug!("First reveal at {:?}, mines placed with seed {}", first_click, seed);
        }
        self.timer.start();
        self.state = EngineState::Active;
    }

    /// Reveals a hidden cell, losing on a mine and flood-filling otherwise.
    fn reveal_single_cell(&mut self, coords: Coord2) -> RevealOutcome {
        if self.has_mine(coords) {
            self.triggered_mine = Some(coords);
            self.end_game(false);
            return RevealOutcome::HitMine;
        }

        self.flood_reveal(coords);

        if self.revealed_count.0 >= self.safe_cell_count() {
            self.end_game(true);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Worklist flood fill: zero cells open their hidden neighbours, flags stop it.
    fn flood_reveal(&mut self, start: Coord2) {
        let mut to_visit = vec![start];

        while let Some(visit_coords) = to_visit.pop() {
            if !matches!(self.cells[visit_coords.to_nd_index()], EngineCell::Hidden) {
                continue;
            }

            // only zero cells enqueue neighbours, so no mine is ever reached here
            let adjacent_mines = self.count_adjacent_mines(visit_coords);
            self.cells[visit_coords.to_nd_index()] = EngineCell::Revealed(adjacent_mines);
            self.revealed_count += 1;
            log::trace!(
                "Revealed {:?}, adjacent mines: {}",
                visit_coords,
                adjacent_mines
            );

            if adjacent_mines == 0 {
                to_visit.extend(self.iter_neighbors(visit_coords).filter(|&pos| {
                    matches!(self.cells[pos.to_nd_index()], EngineCell::Hidden)
                }));
            }
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.timer.stop();
        if won {
            self.state = EngineState::Won;
            self.triggered_mine = None;
        } else {
            self.state = EngineState::Lost;
            self.reveal_all_mines();
        }
        log::debug!(
            "Game over, {:?} after {}",
            self.state,
            format_elapsed(self.elapsed_secs())
        );
    }

    fn reveal_all_mines(&mut self) {
        let Some(layout) = &self.mine_layout else {
            return;
        };
        for coords in layout.iter_mines() {
            let cell = &mut self.cells[coords.to_nd_index()];
            if cell.is_flagged() {
                self.flagged_count -= 1;
            }
            *cell = EngineCell::Mine;
        }
    }

    fn safe_cell_count(&self) -> CellCount {
        self.mine_layout
            .as_ref()
            .map_or(self.config.safe_cells(), MineLayout::safe_cell_count)
    }

    fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.config.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(size: Coord2, mines: &[Coord2]) -> MineLayout {
        MineLayout::from_mine_coords(size, mines).unwrap()
    }

    fn fixture(size: Coord2, mines: &[Coord2]) -> Board {
        Board::from_layout(layout(size, mines))
    }

    #[test]
    fn reveal_hits_mine_and_uncovers_every_mine() {
        let mut board = fixture((3, 3), &[(0, 0), (2, 2)]);
        board.toggle_flag((2, 2));

        let outcome = board.reveal((0, 0));

        assert_eq!(outcome, RevealOutcome::HitMine);
        assert_eq!(board.outcome(), Outcome::Lost);
        assert_eq!(board.triggered_mine(), Some((0, 0)));
        assert_eq!(board.cell_at((0, 0)), Some(EngineCell::Mine));
        assert_eq!(board.cell_at((2, 2)), Some(EngineCell::Mine));
        assert_eq!(board.flagged_count(), 0);
        assert!(!board.timer().is_running());
    }

    #[test]
    fn reveal_flood_fill_opens_zero_region() {
        let mut board = fixture((3, 3), &[(2, 2)]);

        let outcome = board.reveal((0, 0));

        assert_eq!(outcome, RevealOutcome::Won);
        assert_eq!(board.cell_at((0, 0)), Some(EngineCell::Revealed(0)));
        assert_eq!(board.cell_at((1, 1)), Some(EngineCell::Revealed(1)));
        assert_eq!(board.cell_at((2, 2)), Some(EngineCell::Hidden));
        assert!(board.check_win());
        assert!(!board.timer().is_running());
    }

    #[test]
    fn flood_fill_stops_at_flags() {
        let mut board = fixture((3, 3), &[(2, 2)]);
        board.toggle_flag((0, 2));

        let outcome = board.reveal((0, 0));

        assert_eq!(outcome, RevealOutcome::Revealed);
        assert_eq!(board.cell_at((0, 2)), Some(EngineCell::Flagged));
        assert_eq!(board.revealed_count(), 7);
        assert!(!board.check_win());
    }

    #[test]
    fn revealing_twice_changes_nothing() {
        let mut board = fixture((3, 3), &[(2, 2)]);
        board.toggle_flag((0, 2));
        board.reveal((0, 0));
        let before = board.clone();

        assert_eq!(board.reveal((0, 0)), RevealOutcome::NoChange);
        assert_eq!(board.reveal((1, 1)), RevealOutcome::NoChange);
        assert_eq!(board, before);
    }

    #[test]
    fn flagged_cell_blocks_reveal() {
        let mut board = fixture((2, 2), &[(0, 0)]);
        board.toggle_flag((0, 0));

        assert_eq!(board.reveal((0, 0)), RevealOutcome::NoChange);
        assert_eq!(board.outcome(), Outcome::InProgress);
    }

    #[test]
    fn chord_reveal_uses_flagged_neighbors() {
        let mut board = fixture((3, 3), &[(0, 1), (2, 1)]);

        assert_eq!(board.reveal((1, 1)), RevealOutcome::Revealed);
        board.toggle_flag((0, 1));
        board.toggle_flag((2, 1));

        let outcome = board.reveal_adjacent((1, 1));

        assert_eq!(outcome, RevealOutcome::Won);
        assert_eq!(board.cell_at((1, 0)), Some(EngineCell::Revealed(2)));
        assert_eq!(board.cell_at((1, 2)), Some(EngineCell::Revealed(2)));
        assert_eq!(board.cell_at((0, 1)), Some(EngineCell::Flagged));
    }

    #[test]
    fn chord_with_wrong_flag_loses_and_aborts() {
        let mut board = fixture((3, 3), &[(0, 1), (2, 1)]);
        board.reveal((1, 1));
        board.toggle_flag((0, 0));
        board.toggle_flag((0, 1));

        let outcome = board.reveal_adjacent((1, 1));

        assert_eq!(outcome, RevealOutcome::HitMine);
        assert_eq!(board.triggered_mine(), Some((2, 1)));
        assert_eq!(board.cell_at((0, 0)), Some(EngineCell::Flagged));
        assert_eq!(board.cell_at((0, 1)), Some(EngineCell::Mine));
        assert_eq!(board.cell_at((2, 1)), Some(EngineCell::Mine));
        assert_eq!(board.cell_at((2, 2)), Some(EngineCell::Hidden));
    }

    #[test]
    fn chord_requires_matching_flag_count() {
        let mut board = fixture((3, 3), &[(0, 1), (2, 1)]);
        board.reveal((1, 1));
        board.toggle_flag((0, 1));

        assert_eq!(board.reveal_adjacent((1, 1)), RevealOutcome::NoChange);
        assert_eq!(board.revealed_count(), 1);
        assert_eq!(board.reveal_adjacent((0, 0)), RevealOutcome::NoChange);
    }

    #[test]
    fn flags_toggle_only_on_unrevealed_cells() {
        let mut board = fixture((3, 3), &[(0, 1), (2, 1)]);
        board.reveal((1, 1));

        assert_eq!(board.toggle_flag((1, 1)), MarkOutcome::NoChange);
        assert_eq!(board.toggle_flag((0, 0)), MarkOutcome::Changed);
        assert_eq!(board.mines_left(), 1);
        assert_eq!(board.toggle_flag((0, 0)), MarkOutcome::Changed);
        assert_eq!(board.cell_at((0, 0)), Some(EngineCell::Hidden));
        assert_eq!(board.mines_left(), 2);
    }

    #[test]
    fn out_of_bounds_moves_are_ignored() {
        let mut board = Board::with_seed(Difficulty::Easy, Some(1));

        assert_eq!(board.reveal((9, 0)), RevealOutcome::NoChange);
        assert_eq!(board.reveal_adjacent((0, 9)), RevealOutcome::NoChange);
        assert_eq!(board.toggle_flag((200, 200)), MarkOutcome::NoChange);
        assert!(!board.first_move_done());
        assert!(board.mine_layout().is_none());
        assert_eq!(board.count_adjacent_mines((9, 9)), 0);
        assert_eq!(board.count_adjacent_flags((9, 9)), 0);
        assert_eq!(board.cell_at((9, 9)), None);
    }

    #[test]
    fn moves_after_the_game_ended_are_ignored() {
        let mut board = fixture((2, 2), &[(0, 0)]);
        board.reveal((0, 0));
        let before = board.clone();

        assert_eq!(board.reveal((1, 1)), RevealOutcome::NoChange);
        assert_eq!(board.toggle_flag((1, 1)), MarkOutcome::NoChange);
        assert_eq!(board, before);
    }

    #[test]
    fn first_reveal_places_mines_away_from_the_click() {
        let mut board = Board::with_seed(Difficulty::Easy, Some(42));
        assert!(!board.check_win());

        let outcome = board.reveal((4, 4));

        assert_ne!(outcome, RevealOutcome::HitMine);
        assert!(board.first_move_done());
        assert_eq!(board.seed(), Some(42));
        assert_eq!(board.total_mines(), 10);
        for row in 3..=5 {
            for col in 3..=5 {
                assert!(!board.has_mine((row, col)));
            }
        }
        assert_eq!(board.cell_at((4, 4)), Some(EngineCell::Revealed(0)));
    }

    #[test]
    fn seed_42_easy_layout_is_stable() {
        let mut board = Board::with_seed(Difficulty::Easy, Some(42));
        assert_eq!(board.reveal((4, 4)), RevealOutcome::Revealed);

        let mines: alloc::vec::Vec<Coord2> = board.mine_layout().unwrap().iter_mines().collect();
        assert_eq!(
            mines,
            [
                (1, 2),
                (1, 5),
                (1, 7),
                (2, 0),
                (4, 6),
                (5, 0),
                (5, 1),
                (7, 4),
                (7, 6),
                (8, 7),
            ]
        );

        // `*` mine, `#` hidden, `.` empty, digits for revealed counts
        let expected = [
            "#########",
            "##*##*#*#",
            "*21111###",
            "#1...1###",
            "#21..1*##",
            "**1..1###",
            "##1112###",
            "####*#*##",
            "#######*#",
        ];
        let mine_mask = board.mine_mask();
        let revealed_mask = board.revealed_mask();
        for (row, line) in expected.iter().enumerate() {
            for (col, symbol) in line.chars().enumerate() {
                let coords = (row as Coord, col as Coord);
                assert_eq!(mine_mask[[row, col]], symbol == '*', "mine at {:?}", coords);
                assert_eq!(
                    revealed_mask[[row, col]],
                    symbol != '*' && symbol != '#',
                    "revealed at {:?}",
                    coords
                );
                if let Some(count) = symbol.to_digit(10) {
                    assert_eq!(board.cell_at(coords), Some(EngineCell::Revealed(count as u8)));
                }
            }
        }
        assert_eq!(board.revealed_count(), 23);
    }

    #[test]
    fn random_seed_is_recorded_and_forgotten_on_reset() {
        let mut board = Board::new(Difficulty::Easy);
        board.reveal((0, 0));
        let drawn = board.seed();
        assert!(drawn.is_some());

        board.reset();

        assert_eq!(board.seed(), None);
        assert!(!board.first_move_done());
        assert_eq!(board.revealed_count(), 0);
        assert_eq!(board.elapsed(), Duration::ZERO);
    }

    #[test]
    fn requested_seed_survives_reset() {
        let mut board = Board::with_seed(Difficulty::Medium, Some(9));
        board.reveal((8, 8));
        let first = board.mine_mask();

        board.reset();
        board.reveal((8, 8));

        assert_eq!(board.mine_mask(), first);
    }

    #[test]
    fn set_difficulty_resizes_and_resets() {
        let mut board = Board::with_seed(Difficulty::Easy, Some(3));
        board.reveal((0, 0));

        board.set_difficulty(Difficulty::Hard);

        assert_eq!(board.size(), (16, 30));
        assert_eq!(board.total_mines(), 99);
        assert_eq!(board.outcome(), Outcome::InProgress);
        assert!(!board.first_move_done());
        assert!(board.mine_mask().iter().all(|&mine| !mine));
    }

    #[test]
    fn fixed_layout_wins_exactly_when_every_safe_cell_is_open() {
        let mut mask: Array2<bool> = Array2::default((5, 5));
        mask[[0, 0]] = true;
        mask[[4, 4]] = true;
        let mut board = Board::from_layout(MineLayout::from_mine_mask(mask));
        assert_eq!(board.total_mines(), 2);

        for row in 0..5 {
            for col in 0..5 {
                if !board.has_mine((row, col)) {
                    board.reveal((row, col));
                }
                assert_eq!(board.check_win(), board.is_won());
            }
        }

        assert!(board.is_won());
        assert_eq!(board.revealed_count(), 23);
    }

    #[test]
    fn fixed_layout_survives_reset() {
        let mut board = fixture((2, 2), &[(0, 0)]);
        board.reveal((0, 0));

        board.reset();

        assert!(board.has_mine((0, 0)));
        assert_eq!(board.outcome(), Outcome::InProgress);
        assert_eq!(board.cell_at((0, 0)), Some(EngineCell::Hidden));
    }

    #[test]
    fn win_requires_every_safe_cell() {
        let mut board = Board::with_seed(Difficulty::Easy, Some(42));
        board.reveal((4, 4));
        let safe_cells: alloc::vec::Vec<Coord2> = (0..9)
            .flat_map(|row| (0..9).map(move |col| (row, col)))
            .filter(|&coords| !board.has_mine(coords))
            .collect();
        assert_eq!(safe_cells.len(), 71);

        for &coords in &safe_cells {
            if board.is_revealed(coords) {
                continue;
            }
            assert!(!board.check_win());
            assert_eq!(board.outcome(), Outcome::InProgress);
            board.reveal(coords);
        }

        assert!(board.check_win());
        assert!(board.is_won());
        assert_eq!(board.revealed_count(), 71);
    }

    #[test]
    fn board_snapshot_round_trips_without_the_clock() {
        let mut board = fixture((3, 3), &[(0, 0)]);
        board.toggle_flag((0, 0));
        board.reveal((2, 2));

        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.state(), board.state());
        assert_eq!(restored.revealed_mask(), board.revealed_mask());
        assert_eq!(restored.flag_mask(), board.flag_mask());
        assert_eq!(restored.mine_mask(), board.mine_mask());
        assert!(!restored.timer().is_running());
    }
}
