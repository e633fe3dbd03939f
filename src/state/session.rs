//! Session controller: phase machine, scoring, best-score persistence and
//! the timer requests the browser shell has to carry out.

use super::clock::FixedStep;
use super::input::{Command, arbitrate};
use super::layout::layout_badges;
use super::store::{KeyValueStore, load_high_score, save_high_score};
use crate::config::GameConfig;
use crate::model::{Board, Direction, GridDimensions, NavIntent, StepOutcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    /// Seconds left before the snake starts moving.
    Countdown(u32),
    Running,
    Paused,
    GameOver,
}

/// Work the session asks its host to schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Call `countdown_tick(epoch)` once per second until stopped.
    StartCountdown { epoch: u64 },
    StopCountdown,
    /// Call `complete_exit(epoch)` after `delay_ms`.
    ScheduleExit { epoch: u64, delay_ms: i32 },
    /// Drop every outstanding timer.
    CancelTimers,
}

/// A badge has been eaten and the page is about to navigate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExitOrder {
    pub target_key: String,
    /// `None` when the target had nowhere to go; the overlay still closes.
    pub intent: Option<NavIntent>,
}

/// Snapshot for the HTML overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub best: u32,
    pub phase: Phase,
    pub exiting: bool,
}

pub struct Session {
    config: GameConfig,
    board: Board,
    phase: Phase,
    score: u32,
    high_score: u32,
    clock: FixedStep,
    /// Bumped whenever outstanding timers become stale.
    epoch: u64,
    exit: Option<ExitOrder>,
    effects: Vec<Effect>,
    store: Box<dyn KeyValueStore>,
}

impl Session {
    pub fn new(
        config: GameConfig,
        store: Box<dyn KeyValueStore>,
        dims: GridDimensions,
        reduced_motion: bool,
    ) -> Self {
        let high_score = load_high_score(&*store, &config.high_score_key);
        let clock = FixedStep::new(config.step_interval(reduced_motion), config.max_frame_ms);
        let mut session = Self {
            board: Board::new(dims),
            config,
            phase: Phase::NotStarted,
            score: 0,
            high_score,
            clock,
            epoch: 0,
            exit: None,
            effects: Vec::new(),
            store,
        };
        session.center();
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn hud(&self) -> Hud {
        Hud {
            score: self.score,
            best: self.high_score.max(self.score),
            phase: self.phase,
            exiting: self.exit.is_some(),
        }
    }

    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.clock.interval_ms = self.config.step_interval(reduced);
    }

    fn center(&mut self) {
        self.board.center_snake();
        self.board.badges = layout_badges(&self.config.targets, self.board.dims);
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            log::debug!("session {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    fn persist_high(&mut self) {
        self.high_score = self.high_score.max(self.score);
        save_high_score(&*self.store, &self.config.high_score_key, self.high_score);
    }

    /// Grid changed size. An unstarted board is rebuilt for the new grid.
    pub fn resize(&mut self, dims: GridDimensions) {
        if self.board.dims == dims {
            return;
        }
        self.board.dims = dims;
        if self.phase == Phase::NotStarted {
            self.center();
        }
    }

    pub fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::Steer(dir) => {
                self.steer(dir);
            }
            Command::StartOrToggle => {
                if self.phase == Phase::NotStarted {
                    self.start();
                } else {
                    self.toggle_pause();
                }
            }
            Command::TogglePause => self.toggle_pause(),
            Command::Restart => self.restart(),
        }
    }

    pub fn start(&mut self) {
        if self.phase != Phase::NotStarted {
            return;
        }
        self.epoch += 1;
        if self.config.countdown_secs == 0 {
            self.go(Direction::DOWN);
            return;
        }
        self.set_phase(Phase::Countdown(self.config.countdown_secs));
        self.effects.push(Effect::StartCountdown { epoch: self.epoch });
    }

    fn go(&mut self, dir: Direction) {
        self.board.commit(dir);
        self.set_phase(Phase::Running);
    }

    /// One second of countdown elapsed.
    pub fn countdown_tick(&mut self, epoch: u64) {
        if epoch != self.epoch {
            return;
        }
        let Phase::Countdown(n) = self.phase else {
            return;
        };
        let left = n.saturating_sub(1);
        if left > 0 {
            self.set_phase(Phase::Countdown(left));
            return;
        }
        self.effects.push(Effect::StopCountdown);
        let dir = if self.board.heading.is_still() {
            Direction::DOWN
        } else {
            self.board.heading
        };
        self.go(dir);
    }

    /// Submits a direction; returns whether it was accepted.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if dir.is_still() || self.exit.is_some() {
            return false;
        }
        match self.phase {
            Phase::NotStarted | Phase::GameOver => return false,
            _ => {}
        }
        let Some(dir) = arbitrate(self.board.heading, dir) else {
            return false;
        };
        self.board.pending = dir;
        match self.phase {
            Phase::Countdown(_) => {
                self.effects.push(Effect::StopCountdown);
                self.go(dir);
            }
            Phase::Paused => self.go(dir),
            _ => {}
        }
        true
    }

    pub fn toggle_pause(&mut self) {
        match self.phase {
            Phase::Running => self.set_phase(Phase::Paused),
            Phase::Paused if self.exit.is_none() => self.set_phase(Phase::Running),
            _ => {}
        }
    }

    /// Back to a fresh, unstarted board. Outstanding timers become stale.
    pub fn restart(&mut self) {
        self.epoch += 1;
        self.score = 0;
        self.exit = None;
        self.clock.reset();
        self.center();
        self.set_phase(Phase::NotStarted);
        self.effects.push(Effect::CancelTimers);
    }

    /// Animation frame at `now` (ms). Runs whatever steps are due.
    pub fn frame(&mut self, now: f64) -> u32 {
        let due = self.clock.advance(now, self.phase == Phase::Running);
        let mut ran = 0;
        for _ in 0..due {
            if self.phase != Phase::Running {
                break;
            }
            self.tick();
            ran += 1;
        }
        ran
    }

    /// One simulation step.
    pub fn tick(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        match self.board.step() {
            StepOutcome::Idle | StepOutcome::Moved | StepOutcome::Blocked => {}
            StepOutcome::Collided(kind) => {
                log::debug!("collision: {kind:?}");
                self.set_phase(Phase::GameOver);
                self.persist_high();
            }
            StepOutcome::Reached(idx) => {
                let target = self.board.badges[idx].target.clone();
                self.score += self.config.award;
                self.set_phase(Phase::Paused);
                self.persist_high();
                log::info!("reached `{}`", target.key);
                self.exit = Some(ExitOrder {
                    intent: target.intent(),
                    target_key: target.key,
                });
                self.effects.push(Effect::ScheduleExit {
                    epoch: self.epoch,
                    delay_ms: self.config.exit_delay_ms,
                });
            }
        }
    }

    /// The exit delay elapsed; hands back the navigation to perform.
    pub fn complete_exit(&mut self, epoch: u64) -> Option<ExitOrder> {
        if epoch != self.epoch {
            return None;
        }
        self.exit.take()
    }
}
