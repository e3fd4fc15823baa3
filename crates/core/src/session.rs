//! Session module - the game-state engine
//!
//! A [`Session`] owns the board, the active and next pieces, scoring and the
//! gravity timer. It is driven by two inputs: discrete [`GameAction`]s and the
//! elapsed time passed to [`Session::tick`]. Renderers read a [`GameSnapshot`].
//!
//! Lifecycle of a piece: spawn -> move/rotate -> lock -> clear -> respawn.
//! Every committed move, rotation and gravity step is checked with
//! [`crate::collision::collides`] first; a rejected command is a no-op.

use log::{debug, info};

use crate::board::Board;
use crate::high_scores::HighScores;
use crate::piece::ActivePiece;
use crate::rng::PieceGenerator;
use crate::scoring::{calculate_level, gravity_interval_ms, is_tetris, line_clear_score};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{GameAction, GameStatus};

/// Outcome of the last lock, consumed by the runner.
///
/// `tetris` asks the renderer for a flash; `game_over` asks the runner to persist
/// the updated high-score ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub tetris: bool,
    pub game_over: bool,
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    active: ActivePiece,
    next: ActivePiece,
    generator: PieceGenerator,
    high_scores: HighScores,
    /// Last lock event (consumed by the runner).
    last_event: Option<LockEvent>,
    score: u32,
    lines: u32,
    level: u32,
    status: GameStatus,
    gravity_timer_ms: u32,
}

impl Session {
    /// Start a new game. The current and next pieces are created together.
    pub fn new(seed: u32, high_scores: HighScores) -> Self {
        let mut generator = PieceGenerator::new(seed);
        let active = ActivePiece::spawn(generator.next_kind());
        let next = ActivePiece::spawn(generator.next_kind());

        debug!(
            "session started: seed={seed} first={} next={}",
            active.kind.as_str(),
            next.kind.as_str()
        );

        Self {
            board: Board::new(),
            active,
            next,
            generator,
            high_scores,
            last_event: None,
            score: 0,
            lines: 0,
            level: 1,
            status: GameStatus::Running,
            gravity_timer_ms: 0,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up scenarios
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn next(&self) -> &ActivePiece {
        &self.next
    }

    /// Replace the active piece (scenario setup; no collision check)
    pub fn replace_active(&mut self, piece: ActivePiece) {
        self.active = piece;
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    pub fn gravity_timer_ms(&self) -> u32 {
        self.gravity_timer_ms
    }

    /// Current gravity interval based on level
    pub fn gravity_interval_ms(&self) -> u32 {
        gravity_interval_ms(self.level)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = Some(PieceSnapshot::from(self.active));
        out.next = Some(PieceSnapshot::from(self.next));
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.paused = self.paused();
        out.game_over = self.game_over();
        out.high_scores = *self.high_scores.scores();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a game action.
    ///
    /// Movement is ignored unless the game is running. `Restart` only takes
    /// effect after game over and keeps the session's high-score ledger.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => self.restart(),
            _ if self.status != GameStatus::Running => false,
            GameAction::Rotate => self.try_rotate(),
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
        }
    }

    /// Try to move the active piece. A blocked move changes nothing.
    pub fn try_move(&mut self, d_col: i8, d_row: i8) -> bool {
        if self.active.collides_at(&self.board, d_col, d_row) {
            return false;
        }
        self.active.translate(d_col, d_row);
        true
    }

    /// Try to rotate the active piece clockwise in place (no wall kicks)
    pub fn try_rotate(&mut self) -> bool {
        if self.active.rotation_collides(&self.board) {
            return false;
        }
        let rotated = self.active.rotated();
        self.active.set_shape(rotated);
        true
    }

    /// Flip between running and paused. Has no effect after game over.
    pub fn toggle_pause(&mut self) -> bool {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::GameOver => return false,
        };
        debug!("pause toggled: {}", self.status.as_str());
        true
    }

    /// Start over after game over, carrying the high-score ledger forward
    fn restart(&mut self) -> bool {
        if self.status != GameStatus::GameOver {
            return false;
        }
        let seed = self.generator.fork_seed();
        *self = Self::new(seed, self.high_scores);
        true
    }

    /// Advance the gravity timer.
    ///
    /// Runs at most one gravity step per call, once the accumulated time reaches
    /// the level's interval. Returns whether a step ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }

        self.gravity_timer_ms = self.gravity_timer_ms.saturating_add(elapsed_ms);
        if self.gravity_timer_ms < self.gravity_interval_ms() {
            return false;
        }

        self.gravity_step();
        true
    }

    /// Move the active piece down one row, or lock it when it cannot move
    pub fn gravity_step(&mut self) {
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        self.gravity_timer_ms = 0;
    }

    /// Lock the active piece onto the board, clear lines and spawn the next piece.
    ///
    /// A piece with any cell above the visible board ends the game without
    /// writing to the board.
    pub fn lock_piece(&mut self) {
        let piece = self.active;

        if piece.top_row() < 0 {
            info!("piece {} locked above the board", piece.kind.as_str());
            self.end_game();
            self.last_event = Some(LockEvent {
                lines_cleared: 0,
                tetris: false,
                game_over: true,
            });
            return;
        }

        for (row, col) in piece.cells() {
            self.board.set_cell(row, col, piece.color);
        }

        let cleared = self.clear_lines();

        if self.board.top_row_has_any_occupied() {
            self.end_game();
        }

        self.last_event = Some(LockEvent {
            lines_cleared: cleared as u32,
            tetris: is_tetris(cleared),
            game_over: self.game_over(),
        });

        if !self.game_over() {
            self.spawn_next();
        }
    }

    /// Clear full rows and update score, lines and level. Returns the count.
    pub fn clear_lines(&mut self) -> usize {
        let cleared = self.board.clear_full_rows().len();
        if cleared == 0 {
            return 0;
        }

        self.score += line_clear_score(cleared);
        self.lines += cleared as u32;
        self.level = self.level.max(calculate_level(self.lines));

        if is_tetris(cleared) {
            info!("tetris! score={} level={}", self.score, self.level);
        } else {
            debug!(
                "cleared {cleared} line(s): score={} lines={} level={}",
                self.score, self.lines, self.level
            );
        }

        cleared
    }

    /// Promote the preview piece and generate a new one
    fn spawn_next(&mut self) {
        self.active = self.next;
        self.next = ActivePiece::spawn(self.generator.next_kind());
    }

    fn end_game(&mut self) {
        self.status = GameStatus::GameOver;
        let entered = self.high_scores.record(self.score);
        info!(
            "game over: score={} lines={} level={} high_score={entered}",
            self.score, self.lines, self.level
        );
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1, HighScores::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::shape_def;
    use crate::types::{Color, PieceKind, GRAVITY_DELAY_MS};

    const GRAY: Color = Color::new(128, 128, 128);

    fn session_with(kind: PieceKind) -> Session {
        let mut s = Session::new(12345, HighScores::new());
        s.replace_active(ActivePiece::spawn(kind));
        s
    }

    #[test]
    fn test_new_session() {
        let s = Session::new(12345, HighScores::new());

        assert_eq!(s.status, GameStatus::Running);
        assert_eq!(s.score, 0);
        assert_eq!(s.lines, 0);
        assert_eq!(s.level, 1);
        assert_eq!(s.gravity_timer_ms, 0);
        assert_eq!((s.active.row, s.active.col), (0, 5));
        assert_eq!((s.next.row, s.next.col), (0, 5));
        assert!(s.last_event.is_none());
    }

    #[test]
    fn test_lock_promotes_next_piece() {
        let mut s = session_with(PieceKind::O);
        let next_kind = s.next.kind;

        while s.try_move(0, 1) {}
        s.lock_piece();

        assert!(!s.game_over());
        assert_eq!(s.active.kind, next_kind);
        assert_eq!(s.active.row, 0);
        assert_eq!(s.board.filled_count(), 4);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut s = session_with(PieceKind::T);

        assert!(!s.tick(GRAVITY_DELAY_MS - 1));
        assert_eq!(s.active.row, 0);
        assert!(s.tick(1));
        assert_eq!(s.active.row, 1);
        assert_eq!(s.gravity_timer_ms, 0);
    }

    #[test]
    fn test_tick_runs_one_step_for_long_frames() {
        let mut s = session_with(PieceKind::T);
        assert!(s.tick(GRAVITY_DELAY_MS * 5));
        assert_eq!(s.active.row, 1);
    }

    #[test]
    fn test_blocked_soft_drop_does_not_lock() {
        let mut s = session_with(PieceKind::O);
        while s.try_move(0, 1) {}
        let before = s.active;

        assert!(!s.apply_action(GameAction::SoftDrop));
        assert_eq!(s.active, before);
        assert_eq!(s.board.filled_count(), 0);
    }

    #[test]
    fn test_rotation_blocked_by_wall() {
        let mut s = session_with(PieceKind::I);
        s.active.shape = shape_def(PieceKind::I).shape.rotated();
        s.active.col = 9;
        s.active.row = 5;

        // Turning back to horizontal would reach columns 9..=12.
        assert!(!s.try_rotate());
        assert_eq!(s.active.shape.cols(), 1);
    }

    #[test]
    fn test_level_only_grows() {
        let mut s = session_with(PieceKind::O);
        s.lines = 9;
        s.board.fill_row(19, GRAY);
        assert_eq!(s.clear_lines(), 1);
        assert_eq!(s.lines, 10);
        assert_eq!(s.level, 2);
        assert_eq!(s.gravity_interval_ms(), GRAVITY_DELAY_MS / 2);
    }

    #[test]
    fn test_game_over_records_score() {
        let mut s = session_with(PieceKind::O);
        s.score = 42;
        s.board.set_cell(0, 0, GRAY);
        s.lock_piece();

        assert!(s.game_over());
        assert_eq!(s.high_scores.best(), 42);
        let ev = s.take_last_event().unwrap();
        assert!(ev.game_over);
        assert!(s.take_last_event().is_none());
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut s = session_with(PieceKind::O);
        assert!(!s.apply_action(GameAction::Restart));

        s.score = 7;
        s.board.set_cell(0, 0, GRAY);
        s.lock_piece();
        assert!(s.apply_action(GameAction::Restart));

        assert_eq!(s.status, GameStatus::Running);
        assert_eq!(s.score, 0);
        assert_eq!(s.board.filled_count(), 0);
        assert_eq!(s.high_scores.best(), 7);
    }

    #[test]
    fn test_pause_ignored_after_game_over() {
        let mut s = session_with(PieceKind::O);
        s.board.set_cell(0, 0, GRAY);
        s.lock_piece();
        assert!(!s.apply_action(GameAction::Pause));
        assert_eq!(s.status, GameStatus::GameOver);
    }
}
