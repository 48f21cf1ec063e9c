//! Engine module - the complete simulation state machine
//!
//! Ties together the board, the active piece, the next slot, gravity pacing,
//! line clearing, scoring and leveling. The host drives it with [`Engine::tick`]
//! at [`TICKS_PER_SECOND`](crate::types::TICKS_PER_SECOND) and forwards player
//! commands in between; both must be serialized on one owner.

use crate::board::{Board, Field};
use crate::listeners::Listeners;
use crate::pieces::{spawn_column, Shape};
use crate::rng::{PieceSource, RandomPieces};
use crate::scoring::{frames_per_row, level_for_lines, line_clear_score, ClearKind};
use crate::snapshot::GameSnapshot;
use crate::types::{Command, Event, PieceKind, FIELD_HEIGHT, FIELD_WIDTH};

/// The falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Current orientation (canonical shape after any rotations).
    pub shape: Shape,
    /// Column of the box's top-left corner; negative when left box columns are empty.
    pub x: i8,
    /// Row of the box's top-left corner.
    pub y: i8,
}

impl ActivePiece {
    /// Spawn `kind` centered on the top row.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: Shape::canonical(kind),
            x: spawn_column(FIELD_WIDTH, kind.box_size()),
            y: 0,
        }
    }

    /// Whether `shape` placed at (x, y) stays inside the field and off locked cells.
    pub fn fits(board: &Board, shape: &Shape, x: i8, y: i8) -> bool {
        shape
            .occupied()
            .all(|(dx, dy, _)| board.is_valid(x + dx, y + dy))
    }

    /// Whether some cell would hit the floor or the stack one row further down.
    pub fn is_grounded(&self, board: &Board) -> bool {
        !Self::fits(board, &self.shape, self.x, self.y + 1)
    }

    /// Leftmost field column holding an occupied cell.
    pub fn left_column(&self) -> i8 {
        self.shape
            .occupied()
            .map(|(dx, _, _)| self.x + dx)
            .min()
            .unwrap_or(self.x)
    }
}

/// Spawn counts per kind, indexed like [`PieceKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Statistics {
    counts: [u32; 7],
}

impl Statistics {
    pub fn get(&self, kind: PieceKind) -> u32 {
        self.counts[kind.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PieceKind, u32)> + '_ {
        PieceKind::ALL.iter().map(|&kind| (kind, self.get(kind)))
    }

    fn record(&mut self, kind: PieceKind) {
        self.counts[kind.index()] += 1;
    }
}

/// Complete engine state
pub struct Engine {
    board: Board,
    active: Option<ActivePiece>,
    next: PieceKind,
    source: Box<dyn PieceSource>,
    listeners: Listeners,
    running: bool,
    /// Ticks left until the next gravity step.
    frame_counter: i32,
    soft_drop: bool,
    /// Rows descended under soft drop since the last lock.
    soft_drop_rows: u32,
    score: u32,
    level: u32,
    lines: u32,
    statistics: Statistics,
}

impl Engine {
    /// Create an engine drawing uniformly from a seeded RNG
    pub fn new(seed: u32) -> Self {
        Self::with_source(RandomPieces::new(seed))
    }

    /// Create an engine fed by a custom piece source
    pub fn with_source(source: impl PieceSource + 'static) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: PieceKind::T,
            source: Box::new(source),
            listeners: Listeners::new(),
            running: false,
            frame_counter: 1,
            soft_drop: false,
            soft_drop_rows: 0,
            score: 0,
            level: 0,
            lines: 0,
            statistics: Statistics::default(),
        }
    }

    /// Call `handler` every time `event` is emitted.
    pub fn subscribe(&mut self, event: Event, handler: impl FnMut() + Send + 'static) {
        self.listeners.subscribe(event, handler);
    }

    /// Call `handler` for every emitted event.
    pub fn subscribe_all(&mut self, handler: impl FnMut(Event) + Send + 'static) {
        self.listeners.subscribe_all(handler);
    }

    pub fn listeners_mut(&mut self) -> &mut Listeners {
        &mut self.listeners
    }

    /// Reset everything and begin a new session.
    ///
    /// Calling this while running restarts from scratch.
    pub fn start(&mut self) {
        self.board.clear();
        self.score = 0;
        self.level = 0;
        self.lines = 0;
        self.soft_drop = false;
        self.soft_drop_rows = 0;
        self.frame_counter = 1;

        // The stale next value from a previous session never enters play.
        self.advance_next();
        self.spawn_piece();
        // Statistics count pieces spawned after the opening one.
        self.statistics = Statistics::default();

        self.running = true;
    }

    /// Freeze the session. The field and active piece stay queryable.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn width(&self) -> u8 {
        FIELD_WIDTH
    }

    pub fn height(&self) -> u8 {
        FIELD_HEIGHT
    }

    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    /// Bounding box of the next piece, for preview rendering.
    pub fn next_piece_shape(&self) -> Shape {
        Shape::canonical(self.next)
    }

    pub fn statistics(&self) -> Statistics {
        self.statistics
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn soft_drop(&self) -> bool {
        self.soft_drop
    }

    /// Rows soft-dropped since the last lock (not yet scored).
    pub fn soft_drop_rows(&self) -> u32 {
        self.soft_drop_rows
    }

    /// Gravity interval at the current level, in ticks.
    pub fn frames_per_row(&self) -> u32 {
        frames_per_row(self.level)
    }

    /// Empty rows above the highest locked cell; the field height when empty.
    pub fn stack_height(&self) -> u8 {
        self.board.stack_height()
    }

    /// Locked cells with the active piece drawn on top.
    pub fn field(&self) -> Field {
        let mut field = [[None; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize];
        self.write_field(&mut field);
        field
    }

    fn write_field(&self, out: &mut Field) {
        self.board.write_field(out);
        if let Some(active) = self.active {
            for (dx, dy, pixel) in active.shape.occupied() {
                let x = active.x + dx;
                let y = active.y + dy;
                if x >= 0 && x < FIELD_WIDTH as i8 && y >= 0 && y < FIELD_HEIGHT as i8 {
                    out[y as usize][x as usize] = Some(pixel);
                }
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.write_field(&mut out.field);
        out.active = self.active;
        out.next = self.next;
        out.next_shape = self.next_piece_shape();
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.statistics = self.statistics;
        out.running = self.running;
        out.stack_height = self.stack_height();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Dispatch a host command.
    ///
    /// Returns whether the command changed anything observable.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Start => {
                self.start();
                true
            }
            Command::Stop => {
                let was_running = self.running;
                self.stop();
                was_running
            }
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::Rotate => self.rotate(),
            Command::SoftDrop(on) => {
                if !self.running {
                    return false;
                }
                self.set_soft_drop(on);
                true
            }
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        if !self.running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let x = active.x + dx;
        if !ActivePiece::fits(&self.board, &active.shape, x, active.y) {
            return false;
        }

        self.active = Some(ActivePiece { x, ..active });
        self.listeners.emit(Event::Move);
        true
    }

    /// Quarter-turn the active piece in place; rejected on any collision.
    pub fn rotate(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let shape = active.shape.rotated();
        if !ActivePiece::fits(&self.board, &shape, active.x, active.y) {
            return false;
        }

        self.active = Some(ActivePiece { shape, ..active });
        self.listeners.emit(Event::Rotate);
        true
    }

    /// Hold or release soft drop; takes effect on the next tick.
    pub fn set_soft_drop(&mut self, on: bool) {
        if !self.running {
            return;
        }
        self.soft_drop = on;
    }

    /// Advance one fixed tick.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        // Soft drop drains the whole countdown, forcing a step every tick.
        self.frame_counter -= if self.soft_drop { self.frame_counter } else { 1 };

        if self.frame_counter <= 0 {
            self.gravity_step();
        }

        self.listeners.emit(Event::Frame);
    }

    /// Descend one row, or lock and move on to the next piece.
    fn gravity_step(&mut self) {
        let Some(active) = self.active else {
            return;
        };

        if !active.is_grounded(&self.board) {
            self.active = Some(ActivePiece {
                y: active.y + 1,
                ..active
            });
            if self.soft_drop {
                self.soft_drop_rows += 1;
            }
        } else {
            let inside = self.board.lock_shape(&active.shape, active.x, active.y);
            debug_assert!(inside, "locked piece must lie within the field");

            if active.y == 0 {
                self.active = None;
                self.soft_drop_rows = 0;
                self.stop();
                self.listeners.emit(Event::Final);
            } else {
                self.clear_lines();
                self.spawn_piece();
                self.listeners.emit(Event::Drop);
            }

            self.soft_drop = false;
        }

        let prev_level = self.level;
        self.level = level_for_lines(self.lines);
        if self.level != prev_level {
            self.listeners.emit(Event::LevelUp);
        }

        self.frame_counter = frames_per_row(self.level) as i32;
    }

    /// Remove full rows and score the lock.
    fn clear_lines(&mut self) {
        let rows = self.board.clear_full_rows().len();

        self.score = self.score.saturating_add(self.soft_drop_rows);
        self.soft_drop_rows = 0;

        self.score = self
            .score
            .saturating_add(line_clear_score(rows, self.level));
        match ClearKind::for_rows(rows) {
            ClearKind::None => {}
            ClearKind::Lines => self.listeners.emit(Event::Clear),
            ClearKind::Tetris => self.listeners.emit(Event::Tetris),
        }

        self.lines += rows as u32;
    }

    /// Put the queued kind into play and refill the next slot.
    fn spawn_piece(&mut self) {
        let kind = self.next;
        self.active = Some(ActivePiece::spawn(kind));
        self.statistics.record(kind);
        self.advance_next();
    }

    /// Draw a new next kind, redrawing once if it repeats the previous one.
    fn advance_next(&mut self) {
        let prev = self.next;
        self.next = self.source.draw();
        if self.next == prev {
            self.next = self.source.draw();
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(1)
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("running", &self.running)
            .field("active", &self.active)
            .field("next", &self.next)
            .field("score", &self.score)
            .field("level", &self.level)
            .field("lines", &self.lines)
            .field("frame_counter", &self.frame_counter)
            .field("soft_drop", &self.soft_drop)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}
