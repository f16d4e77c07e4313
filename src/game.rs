use std::mem;
use std::time::Duration;

use derive_more::Display;
use tracing::{debug, info, instrument, warn};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::faller::Faller;
use crate::matching::{MatchFound, MatchRule};
use crate::movement::{FallerMovement, TileMovement};
use crate::provider::{FallerProvider, RandomFallerProvider};
use crate::scoring::Scoring;

// ============================================================================
// Types
// ============================================================================

/// Identifies which player a game belongs to. Assigned by whoever builds the game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
#[display("player {_0}")]
pub struct PlayerId(pub u8);

impl Default for PlayerId {
    fn default() -> Self {
        PlayerId(1)
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum GameEvent {
    FallerSpawned { column: i32 },
    FallerMoved,
    FallerRotated,
    FallerCommitted,
    MatchCleared { points: u32 },
    Collapsed { tiles: usize },
    GameOver,
    GameRestarted,
}

/// What a single call to [`GameState::tick`] did.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TickOutcome {
    pub descended: bool,
    pub committed: bool,
    pub matches_cleared: usize,
    pub points: u64,
}

// ============================================================================
// Game
// ============================================================================

pub struct GameState {
    board: Board,
    scoring: Scoring,
    active: Option<Faller>,
    next: Faller,
    fallen: Vec<Faller>,
    match_rules: Vec<MatchRule>,
    player: PlayerId,
    config: GameConfig,
    provider: Box<dyn FallerProvider>,
    events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(player: PlayerId) -> Self {
        Self::with_provider(player, Box::new(RandomFallerProvider::new()))
    }

    pub fn with_config(player: PlayerId, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let provider: Box<dyn FallerProvider> = match config.seed {
            Some(seed) => Box::new(RandomFallerProvider::seeded(seed)),
            None => Box::new(RandomFallerProvider::new()),
        };
        let board = Board::new(config.board_width, config.board_height);
        Ok(Self::build(player, config, board, provider))
    }

    pub fn with_provider(player: PlayerId, provider: Box<dyn FallerProvider>) -> Self {
        let config = GameConfig::default();
        let board = Board::new(config.board_width, config.board_height);
        Self::build(player, config, board, provider)
    }

    /// Starts from a prepared board. The board's dimensions override the default config
    /// and are validated the same way.
    pub fn with_board(
        player: PlayerId,
        board: Board,
        provider: Box<dyn FallerProvider>,
    ) -> Result<Self, ConfigError> {
        let config = GameConfig::default().with_board_size(board.width(), board.height());
        config.validate()?;
        Ok(Self::build(player, config, board, provider))
    }

    fn build(
        player: PlayerId,
        config: GameConfig,
        board: Board,
        mut provider: Box<dyn FallerProvider>,
    ) -> Self {
        let next = provider.next_faller(board.width(), board.staged_row());
        let match_rules = MatchRule::three_fold_all()
            .map(|rule| rule.with_point_value(config.point_value))
            .to_vec();

        Self {
            board,
            scoring: Scoring::new(),
            active: None,
            next,
            fallen: Vec::new(),
            match_rules,
            player,
            config,
            provider,
            events: Vec::new(),
        }
    }

    // ------------------------------------------------------------------------
    // Faller lifecycle
    // ------------------------------------------------------------------------

    /// Promotes the next faller when none is active, otherwise commits the active one.
    #[instrument(skip(self), fields(player = %self.player))]
    pub fn cycle_fallers(&mut self) {
        match self.active.take() {
            Some(faller) => {
                info!(column = faller.column(), "faller committed to the board");
                self.fallen.push(faller);
                self.events.push(GameEvent::FallerCommitted);
                if self.gameover() {
                    info!(score = self.scoring.score(), "spawn column blocked, game over");
                    self.events.push(GameEvent::GameOver);
                }
            }
            None => {
                let upcoming = self
                    .provider
                    .next_faller(self.board.width(), self.board.staged_row());
                let faller = mem::replace(&mut self.next, upcoming);
                info!(
                    column = faller.descent_file(),
                    colors = ?faller.colors(),
                    "faller spawned"
                );
                self.events.push(GameEvent::FallerSpawned {
                    column: faller.descent_file(),
                });
                self.active = Some(faller);
            }
        }
    }

    /// True iff a faller is active and the slot under its lowest member is empty.
    pub fn faller_can_fall(&self) -> bool {
        let Some(faller) = &self.active else {
            return false;
        };
        let below = faller.lowest().position.offset(0, -1);
        if self.board.is_staged(below) {
            return true;
        }
        matches!(self.board.is_null_at(below.x, below.y), Ok(true))
    }

    /// Descends the active faller one row, or cycles fallers when it cannot fall.
    /// Returns whether the faller descended.
    #[instrument(skip(self), fields(player = %self.player))]
    pub fn drop_faller(&mut self) -> bool {
        if !self.faller_can_fall() {
            self.cycle_fallers();
            return false;
        }
        match self.active.as_mut() {
            Some(faller) => FallerMovement::Descend.perform(&mut self.board, faller),
            None => false,
        }
    }

    /// One gravity step. A commit is followed by match resolution.
    #[instrument(skip(self), fields(player = %self.player))]
    pub fn tick(&mut self) -> TickOutcome {
        if self.gameover() {
            debug!("tick ignored after game over");
            return TickOutcome::default();
        }

        let had_faller = self.active.is_some();
        let descended = self.drop_faller();
        let committed = had_faller && self.active.is_none();

        let mut outcome = TickOutcome {
            descended,
            committed,
            ..TickOutcome::default()
        };
        if committed {
            let (matches_cleared, points) = self.resolve_matches();
            outcome.matches_cleared = matches_cleared;
            outcome.points = points;
        }
        outcome
    }

    /// Clears matches and collapses the board until no match remains.
    /// Returns the number of matches cleared and the points they awarded.
    pub fn resolve_matches(&mut self) -> (usize, u64) {
        let mut cleared = 0;
        let mut points = 0;
        loop {
            let matches = self.find_matches(&self.match_rules);
            if matches.is_empty() {
                break;
            }
            cleared += matches.len();
            points += self.clear_matches(&matches);
            self.collapse_all();
        }
        (cleared, points)
    }

    // ------------------------------------------------------------------------
    // Player commands
    // ------------------------------------------------------------------------

    pub fn shift_faller_left(&mut self) -> bool {
        self.move_active(FallerMovement::ShiftLeft, GameEvent::FallerMoved)
    }

    pub fn shift_faller_right(&mut self) -> bool {
        self.move_active(FallerMovement::ShiftRight, GameEvent::FallerMoved)
    }

    pub fn rotate_faller_up(&mut self) -> bool {
        self.move_active(FallerMovement::ShuffleUp, GameEvent::FallerRotated)
    }

    pub fn rotate_faller_down(&mut self) -> bool {
        self.move_active(FallerMovement::ShuffleDown, GameEvent::FallerRotated)
    }

    fn move_active(&mut self, movement: FallerMovement, event: GameEvent) -> bool {
        let Some(faller) = self.active.as_mut() else {
            debug!(?movement, "no active faller to move");
            return false;
        };
        let moved = movement.perform(&mut self.board, faller);
        if moved {
            self.events.push(event);
        }
        moved
    }

    // ------------------------------------------------------------------------
    // Matching
    // ------------------------------------------------------------------------

    /// Runs every rule at every cell. Nothing is scanned while a faller is active.
    pub fn find_matches(&self, rules: &[MatchRule]) -> Vec<MatchFound> {
        if self.active.is_some() {
            debug!("faller still active, skipping match scan");
            return Vec::new();
        }

        let mut matches = Vec::new();
        for y in 1..=self.board.height() {
            for x in 1..=self.board.width() {
                matches.extend(rules.iter().filter_map(|rule| rule.check_match(&self.board, x, y)));
            }
        }
        matches
    }

    /// Nulls every matched slot and awards each match. Returns the points awarded.
    /// Does nothing while a faller is active.
    #[instrument(skip(self, matches), fields(player = %self.player, count = matches.len()))]
    pub fn clear_matches(&mut self, matches: &[MatchFound]) -> u64 {
        if self.active.is_some() {
            debug!("faller still active, refusing to clear matches");
            return 0;
        }

        let mut points = 0;
        for found in matches {
            for tile in &found.tiles {
                if let Err(err) = self.board.clear_slot(tile.position) {
                    warn!(%err, "matched tile was off the board");
                }
            }
            self.scoring.award_for_match(found);
            points += u64::from(found.points);
            self.events.push(GameEvent::MatchCleared {
                points: found.points,
            });
        }
        points
    }

    /// Settles every tile onto the tile or floor beneath it, lowest tiles first.
    /// Returns the number of tiles that moved. Does nothing while a faller is active.
    #[instrument(skip(self), fields(player = %self.player))]
    pub fn collapse_all(&mut self) -> usize {
        if self.active.is_some() {
            debug!("faller still active, refusing to collapse the board");
            return 0;
        }

        let mut moved = 0;
        for x in 1..=self.board.width() {
            for y in 2..=self.board.height() {
                if matches!(self.board.is_null_at(x, y), Ok(false))
                    && TileMovement::AbsoluteDescent.perform_at(&mut self.board, x, y)
                {
                    moved += 1;
                }
            }
        }
        if moved > 0 {
            debug!(tiles = moved, "board collapsed");
            self.events.push(GameEvent::Collapsed { tiles: moved });
        }
        moved
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// True iff the most recently committed faller never fully entered the board.
    pub fn gameover(&self) -> bool {
        self.fallen
            .last()
            .is_some_and(|faller| faller.has_staged_member(self.board.staged_row()))
    }

    pub fn active_faller(&self) -> Option<&Faller> {
        self.active.as_ref()
    }

    pub fn next_faller(&self) -> &Faller {
        &self.next
    }

    pub fn prev_faller(&self) -> Option<&Faller> {
        self.fallen.last()
    }

    pub fn fallen(&self) -> &[Faller] {
        &self.fallen
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn scoring(&self) -> &Scoring {
        &self.scoring
    }

    pub fn score(&self) -> u64 {
        self.scoring.score()
    }

    pub fn match_rules(&self) -> &[MatchRule] {
        &self.match_rules
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn drop_interval(&self) -> Duration {
        self.config.drop_interval()
    }

    /// Takes and clears all pending events
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    #[instrument(skip(self), fields(player = %self.player))]
    pub fn restart(&mut self) {
        self.board = Board::new(self.board.width(), self.board.height());
        self.scoring.reset();
        self.active = None;
        self.fallen.clear();
        self.next = self
            .provider
            .next_faller(self.board.width(), self.board.staged_row());
        self.events.clear();
        self.events.push(GameEvent::GameRestarted);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(PlayerId::default())
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

pub mod test_helpers {
    use super::*;
    use crate::config::{COLUMNS_BOARD_HEIGHT, COLUMNS_BOARD_WIDTH};
    use crate::tile::{Color, Tile};

    pub fn empty_board() -> Board {
        Board::new(COLUMNS_BOARD_WIDTH, COLUMNS_BOARD_HEIGHT)
    }

    pub fn board_with(tiles: &[(i32, i32, Color)]) -> Board {
        Board::with_tiles(
            COLUMNS_BOARD_WIDTH,
            COLUMNS_BOARD_HEIGHT,
            tiles.iter().map(|&(x, y, color)| Tile::new(x, y, color)),
        )
    }

    /// Stacks `colors` in column `x` from the floor up.
    pub fn fill_column(board: &mut Board, x: i32, colors: &[Color]) {
        for (y, &color) in (1..).zip(colors) {
            let _ = board.place_tile(Tile::new(x, y, color));
        }
    }

    /// True when no tile in any column sits above an empty slot.
    pub fn has_no_gaps(board: &Board) -> bool {
        (1..=board.width()).all(|x| {
            let mut seen_null = false;
            board.column(x).all(|cell| {
                if cell.is_null() {
                    seen_null = true;
                    true
                } else {
                    !seen_null
                }
            })
        })
    }
}
