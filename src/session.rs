//! Top-level screen state machine
//!
//! ```text
//! Menu --Play--> Playing --lives depleted--> GameOver --Restart--> Playing
//!  |  \                                          |  \
//!  |   --Tutorial--> Tutorial --Dismiss--> Menu  |   --ToMenu--> Menu
//!  |                                             --Quit--> exit
//!  any --QuitSignal--> exit
//! ```
//!
//! Entering `Playing` always starts from a freshly built [`GameState`].

use serde::Serialize;

use crate::Point;
use crate::platform::HandSignalSource;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Obstacle, Rect, TickOutcome};
use crate::tuning::Tuning;

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionPhase {
    Menu,
    Tutorial,
    Playing,
    GameOver,
}

/// Discrete commands from the windowing layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Menu: start a game
    Play,
    /// Menu: open the tutorial
    Tutorial,
    /// Tutorial: back to the menu
    Dismiss,
    /// Game over: play again
    Restart,
    /// Game over: back to the menu
    ToMenu,
    /// Game over: exit the game
    Quit,
    /// Window closed (valid in every phase)
    QuitSignal,
}

/// Whether the host loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Read-only view of everything a renderer draws for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub phase: SessionPhase,
    pub player: Rect,
    pub obstacles: &'a [Obstacle],
    pub score: u64,
    pub lives: u8,
    pub difficulty: u32,
    pub first_obstacle_spawned: bool,
}

/// Owns the active game and drives phase transitions
#[derive(Debug)]
pub struct SessionController {
    phase: SessionPhase,
    tuning: Tuning,
    /// Fixed seed for every session, or random per session when unset
    seed: Option<u64>,
    game: GameState,
    events: Vec<GameEvent>,
    sessions_started: u32,
}

impl SessionController {
    pub fn new(tuning: Tuning, seed: Option<u64>) -> Self {
        let game = GameState::new(&tuning, seed.unwrap_or_default());
        Self {
            phase: SessionPhase::Menu,
            tuning,
            seed,
            game,
            events: Vec::new(),
            sessions_started: 0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.tuning.clone(), settings.seed)
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The current (or most recently finished) session
    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn sessions_started(&self) -> u32 {
        self.sessions_started
    }

    /// Apply a command; commands that don't apply to the current phase are ignored
    pub fn handle(&mut self, command: SessionCommand) -> Control {
        match (self.phase, command) {
            (_, SessionCommand::QuitSignal) | (SessionPhase::GameOver, SessionCommand::Quit) => {
                log::info!("Quit requested from {:?}", self.phase);
                return Control::Exit;
            }
            (SessionPhase::Menu, SessionCommand::Play)
            | (SessionPhase::GameOver, SessionCommand::Restart) => self.start_session(),
            (SessionPhase::Menu, SessionCommand::Tutorial) => {
                self.set_phase(SessionPhase::Tutorial)
            }
            (SessionPhase::Tutorial, SessionCommand::Dismiss)
            | (SessionPhase::GameOver, SessionCommand::ToMenu) => {
                self.set_phase(SessionPhase::Menu)
            }
            (phase, command) => {
                log::debug!("Ignoring {:?} in {:?}", command, phase);
            }
        }
        Control::Continue
    }

    /// Advance one tick with an already-polled hand signal.
    ///
    /// Only the `Playing` phase simulates; other phases ignore the tick.
    pub fn tick(&mut self, hand_signal: Option<Point>) -> SessionPhase {
        if self.phase != SessionPhase::Playing {
            return self.phase;
        }

        let outcome = self.game.advance(hand_signal);
        self.events.append(&mut self.game.take_events());

        if outcome == TickOutcome::LivesDepleted {
            let score = self.game.score;
            log::info!(
                "Session {} ended after {} ticks, final score {}",
                self.sessions_started,
                self.game.time_ticks,
                score
            );
            self.events.push(GameEvent::SessionEnded { score });
            self.set_phase(SessionPhase::GameOver);
        }
        self.phase
    }

    /// Advance one tick, polling `source` only while a game is running
    pub fn tick_with<S: HandSignalSource + ?Sized>(&mut self, source: &mut S) -> SessionPhase {
        let hand = if self.phase == SessionPhase::Playing {
            source.poll()
        } else {
            None
        };
        self.tick(hand)
    }

    /// Take all pending events, leaving the queue empty
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            player: self.game.player.sprite(&self.tuning),
            obstacles: self.game.obstacles(),
            score: self.game.score,
            lives: self.game.lives,
            difficulty: self.game.difficulty,
            first_obstacle_spawned: self.game.first_obstacle_spawned,
        }
    }

    fn start_session(&mut self) {
        let seed = self.seed.unwrap_or_else(rand::random);
        self.game = GameState::new(&self.tuning, seed);
        self.sessions_started += 1;
        log::info!("Session {} started (seed {})", self.sessions_started, seed);
        self.events.push(GameEvent::SessionStarted);
        self.set_phase(SessionPhase::Playing);
    }

    fn set_phase(&mut self, phase: SessionPhase) {
        if self.phase != phase {
            log::info!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }
}
