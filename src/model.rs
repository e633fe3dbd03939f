//! Grid model for the navigation snake.
//! Cells, directions, badges and the single-tick step function live here;
//! nothing in this module touches the browser.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridDimensions {
    pub columns: i32,
    pub rows: i32,
    /// Edge of one cell in CSS pixels.
    pub cell_size: f64,
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self {
            columns: 36,
            rows: 24,
            cell_size: 24.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

impl Direction {
    pub const STILL: Direction = Direction { dx: 0, dy: 0 };
    pub const UP: Direction = Direction { dx: 0, dy: -1 };
    pub const DOWN: Direction = Direction { dx: 0, dy: 1 };
    pub const LEFT: Direction = Direction { dx: -1, dy: 0 };
    pub const RIGHT: Direction = Direction { dx: 1, dy: 0 };

    pub fn is_still(self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// True when both vectors move and cancel each other out.
    pub fn is_reversal_of(self, other: Direction) -> bool {
        !self.is_still() && !other.is_still() && self.dx + other.dx == 0 && self.dy + other.dy == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Section,
    Link,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavTarget {
    pub key: String,
    pub label: String,
    pub icon: String,
    pub kind: TargetKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl NavTarget {
    pub fn intent(&self) -> Option<NavIntent> {
        match self.kind {
            TargetKind::Section => self.section_id.clone().map(NavIntent::Scroll),
            TargetKind::Link => self.href.clone().map(NavIntent::Open),
        }
    }

    /// Two-letter badge code derived from the key.
    pub fn code(&self) -> String {
        self.key.chars().take(2).collect::<String>().to_uppercase()
    }
}

/// What the page should do once a badge has been eaten.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavIntent {
    /// Smooth-scroll to the element with this id.
    Scroll(String),
    /// Open this URL in a new browsing context.
    Open(String),
}

/// A navigation target placed on the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Badge {
    pub target: NavTarget,
    pub x: i32,
    pub y: i32,
    pub consumed: bool,
}

impl Badge {
    pub fn cell(&self) -> Cell {
        Cell::new(self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    TopWall,
    SelfHit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Heading is still stationary.
    Idle,
    Moved,
    /// Pressed against the bottom edge; nothing moved.
    Blocked,
    Collided(Collision),
    /// Index into `Board::badges` of the badge just eaten.
    Reached(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    pub dims: GridDimensions,
    /// Head first.
    pub snake: VecDeque<Cell>,
    pub heading: Direction,
    pub pending: Direction,
    pub badges: Vec<Badge>,
}

impl Board {
    pub fn new(dims: GridDimensions) -> Self {
        let mut board = Self {
            dims,
            snake: VecDeque::new(),
            heading: Direction::STILL,
            pending: Direction::STILL,
            badges: Vec::new(),
        };
        board.center_snake();
        board
    }

    /// Column the head spawns in.
    pub fn spawn_column(dims: GridDimensions) -> i32 {
        dims.columns / 2
    }

    /// Three cells at the top centre, facing right, not moving.
    pub fn center_snake(&mut self) {
        let mid = Self::spawn_column(self.dims);
        self.snake = [Cell::new(mid, 1), Cell::new(mid - 1, 1), Cell::new(mid - 2, 1)]
            .into_iter()
            .collect();
        self.heading = Direction::STILL;
        self.pending = Direction::STILL;
    }

    pub fn head(&self) -> Option<Cell> {
        self.snake.front().copied()
    }

    /// Commits `dir` as both pending and current heading.
    pub fn commit(&mut self, dir: Direction) {
        self.heading = dir;
        self.pending = dir;
    }

    pub fn active_badge_at(&self, cell: Cell) -> Option<usize> {
        self.badges
            .iter()
            .position(|b| !b.consumed && b.cell() == cell)
    }

    /// Advances the simulation by one tick.
    pub fn step(&mut self) -> StepOutcome {
        self.heading = self.pending;
        let dir = self.heading;
        if dir.is_still() {
            return StepOutcome::Idle;
        }
        let Some(head) = self.head() else {
            return StepOutcome::Idle;
        };
        let mut next = Cell::new(head.x + dir.dx, head.y + dir.dy);

        // Top edge is lethal.
        if dir.dy == -1 && next.y < 0 {
            return StepOutcome::Collided(Collision::TopWall);
        }
        // Left/right wrap around, bottom edge holds.
        next.x = next.x.rem_euclid(self.dims.columns.max(1));
        next.y = next.y.min(self.dims.rows - 1);
        if next == head {
            return StepOutcome::Blocked;
        }

        if self.snake.contains(&next) {
            return StepOutcome::Collided(Collision::SelfHit);
        }
        self.snake.push_front(next);

        if let Some(idx) = self.active_badge_at(next) {
            // Tail is kept: eating a badge grows the snake by one.
            self.badges[idx].consumed = true;
            return StepOutcome::Reached(idx);
        }
        self.snake.pop_back();
        StepOutcome::Moved
    }
}
