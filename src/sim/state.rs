//! Game state and core simulation types
//!
//! Everything needed to reproduce a run deterministically lives here.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::Aabb;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    Menu,
    /// Movement-model select screen (keys 1-4 in the cabinet shell)
    SelectingMovement,
    /// Active gameplay
    Playing,
    /// Formation cleared
    Won,
    /// Formation reached the ship or the floor
    Lost,
}

/// The four selectable alien motion models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MovementModel {
    /// Plain horizontal sweep with edge drops
    #[default]
    Linear,
    /// Descent rate proportional to current depth
    Gravity,
    /// Height slaved to an inverted parabola over the arena
    Parabolic,
    /// Steady descent with a horizontal sine wobble
    Sine,
}

impl MovementModel {
    /// Map the cabinet's 1-4 selection keys to a model
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(MovementModel::Linear),
            2 => Some(MovementModel::Gravity),
            3 => Some(MovementModel::Parabolic),
            4 => Some(MovementModel::Sine),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MovementModel::Linear => "Linear",
            MovementModel::Gravity => "Gravity",
            MovementModel::Parabolic => "Parabolic",
            MovementModel::Sine => "Sine",
        }
    }
}

/// Horizontal sweep direction of the formation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepDir {
    Left,
    Right,
}

impl SweepDir {
    /// Velocity sign along +x
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            SweepDir::Left => -1.0,
            SweepDir::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SweepDir::Left => SweepDir::Right,
            SweepDir::Right => SweepDir::Left,
        }
    }
}

/// A single alien in the formation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alien {
    /// Top-left corner of the sprite
    pub pos: Vec2,
    /// Dead aliens stop moving, colliding and rendering
    pub alive: bool,
    /// Per-alien phase offset for the sine wobble (seeded at run start)
    pub sine_phase: f32,
}

impl Alien {
    pub fn bounds(&self, sprite: f32) -> Aabb {
        Aabb::sprite(self.pos, sprite)
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    /// Top-left corner of the sprite
    pub pos: Vec2,
}

impl Ship {
    pub fn bounds(&self, sprite: f32) -> Aabb {
        Aabb::sprite(self.pos, sprite)
    }

    /// Where a freshly fired laser spawns
    pub fn muzzle(&self, tuning: &Tuning) -> Vec2 {
        self.pos + Vec2::new(tuning.muzzle_offset_x, tuning.muzzle_offset_y)
    }
}

/// A player projectile slot
///
/// Lasers are pooled: a parked (not live) laser sits at the ship muzzle
/// waiting to be fired again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Laser {
    /// Top-left corner of the bolt
    pub pos: Vec2,
    pub live: bool,
}

impl Laser {
    pub fn bounds(&self, tuning: &Tuning) -> Aabb {
        Aabb::new(self.pos, Vec2::new(tuning.laser_width, tuning.laser_height))
    }

    /// Return the laser to the pool at the ship muzzle
    pub fn park(&mut self, ship: &Ship, tuning: &Tuning) {
        self.live = false;
        self.pos = ship.muzzle(tuning);
    }
}

/// Gameplay events emitted during a tick, drained by the embedding shell
/// for sound/feedback. Not part of the deterministic state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ShotFired,
    /// Formation slot of the destroyed alien
    AlienDestroyed { slot: usize },
    /// All three shots were spent and came back
    VolleyReloaded,
    /// The sweep reversed and the formation dropped a half-row
    FormationDropped,
    Victory,
    Defeat,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Balance values this run was started with
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Selected motion model (meaningful once Playing)
    pub model: MovementModel,
    /// Current formation sweep direction
    pub sweep: SweepDir,
    /// Player ship
    pub ship: Ship,
    /// Alien formation, in fixed slot order
    pub aliens: Vec<Alien>,
    /// Laser pool
    pub lasers: Vec<Laser>,
    /// Shots left in the current volley
    pub shots_remaining: u8,
    /// Score
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events emitted this tick (drained by the shell)
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed and default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game state with explicit balance values
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng_state: RngState::new(seed),
            tuning,
            phase: GamePhase::Menu,
            model: MovementModel::default(),
            sweep: SweepDir::Right,
            ship: Ship { pos: Vec2::ZERO },
            aliens: Vec::new(),
            lasers: Vec::new(),
            shots_remaining: 0,
            score: 0,
            time_ticks: 0,
            events: Vec::new(),
        };
        state.reset_entities();
        state
    }

    /// Begin a run with the chosen motion model
    pub fn start_run(&mut self, model: MovementModel) {
        self.model = model;
        self.score = 0;
        self.time_ticks = 0;
        self.sweep = SweepDir::Right;
        self.reset_entities();
        self.phase = GamePhase::Playing;
        log::info!("run started: model={} seed={}", model.as_str(), self.seed);
    }

    /// Back to the title screen (end-screen confirm)
    pub fn reset_to_menu(&mut self) {
        self.score = 0;
        self.time_ticks = 0;
        self.sweep = SweepDir::Right;
        self.reset_entities();
        self.phase = GamePhase::Menu;
    }

    /// Respawn ship, formation and laser pool
    fn reset_entities(&mut self) {
        let t = &self.tuning;

        self.ship = Ship {
            pos: Vec2::new(
                t.arena_width / 2.0 - t.sprite_size / 2.0,
                t.ship_start_y,
            ),
        };

        // One row of aliens packed edge to edge from the left arena wall,
        // sine phases drawn from the run seed.
        let mut rng = self.rng_state.to_rng();
        self.aliens = (0..t.alien_count)
            .map(|i| Alien {
                pos: Vec2::new(i as f32 * t.sprite_size, t.formation_row_y),
                alive: true,
                sine_phase: rng.random_range(0.0..std::f32::consts::TAU),
            })
            .collect();

        self.shots_remaining = t.max_shots;
        let muzzle = self.ship.muzzle(t);
        self.lasers = (0..t.max_shots as usize)
            .map(|_| Laser {
                pos: muzzle,
                live: false,
            })
            .collect();
    }

    /// Number of aliens still alive
    pub fn aliens_remaining(&self) -> usize {
        self.aliens.iter().filter(|a| a.alive).count()
    }

    /// Number of lasers currently in flight
    pub fn live_lasers(&self) -> usize {
        self.lasers.iter().filter(|l| l.live).count()
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain the events emitted since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_state_is_on_menu() {
        let state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.aliens.len(), ALIEN_COUNT);
        assert_eq!(state.aliens_remaining(), ALIEN_COUNT);
        assert_eq!(state.shots_remaining as usize, MAX_SHOTS);
        assert_eq!(state.live_lasers(), 0);
    }

    #[test]
    fn test_formation_packed_edge_to_edge() {
        let state = GameState::new(1);
        for (i, alien) in state.aliens.iter().enumerate() {
            assert_eq!(alien.pos.x, i as f32 * SPRITE_SIZE);
            assert_eq!(alien.pos.y, FORMATION_ROW_Y);
        }
    }

    #[test]
    fn test_ship_starts_centered() {
        let state = GameState::new(7);
        assert_eq!(state.ship.pos.x, ARENA_WIDTH / 2.0 - SPRITE_SIZE / 2.0);
        assert_eq!(state.ship.pos.y, SHIP_START_Y);
    }

    #[test]
    fn test_same_seed_same_phases() {
        let a = GameState::new(99);
        let b = GameState::new(99);
        for (x, y) in a.aliens.iter().zip(b.aliens.iter()) {
            assert_eq!(x.sine_phase, y.sine_phase);
        }
    }

    #[test]
    fn test_model_from_index() {
        assert_eq!(MovementModel::from_index(1), Some(MovementModel::Linear));
        assert_eq!(MovementModel::from_index(2), Some(MovementModel::Gravity));
        assert_eq!(MovementModel::from_index(3), Some(MovementModel::Parabolic));
        assert_eq!(MovementModel::from_index(4), Some(MovementModel::Sine));
        assert_eq!(MovementModel::from_index(5), None);
        assert_eq!(MovementModel::from_index(0), None);
    }

    #[test]
    fn test_start_run_resets_score() {
        let mut state = GameState::new(3);
        state.score = 500;
        state.start_run(MovementModel::Sine);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.model, MovementModel::Sine);
        assert_eq!(state.aliens_remaining(), ALIEN_COUNT);
    }
}
