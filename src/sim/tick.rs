//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::movement::{formation_step, ship_step};
use super::state::{GameEvent, GamePhase, GameState, MovementModel};

/// Input commands for a single tick (deterministic)
///
/// `move_left`/`move_right` are held state; the rest are one-shot flags the
/// caller clears after each tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move ship left (held)
    pub move_left: bool,
    /// Move ship right (held)
    pub move_right: bool,
    /// Fire a laser (space)
    pub fire: bool,
    /// Confirm / advance menus (enter)
    pub confirm: bool,
    /// Movement-model selection (keys 1-4)
    pub select_model: Option<MovementModel>,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Menu phases don't consume time
    match state.phase {
        GamePhase::Menu => {
            if input.confirm || input.idle_mode {
                state.phase = GamePhase::SelectingMovement;
            }
            return;
        }
        GamePhase::SelectingMovement => {
            let choice = if input.idle_mode {
                // Demo runs cycle through the models by seed
                MovementModel::from_index((state.seed % 4) as u8 + 1)
            } else {
                input.select_model
            };
            if let Some(model) = choice {
                state.start_run(model);
            }
            return;
        }
        GamePhase::Won | GamePhase::Lost => {
            if input.confirm || input.idle_mode {
                state.reset_to_menu();
            }
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    // Demo autopilot rewrites the input before the usual handling: track
    // the nearest live alien's column, fire when aligned
    let mut input = input.clone();
    if input.idle_mode {
        autopilot(state, &mut input);
    }
    let input = &input;

    ship_step(state, input.move_left, input.move_right, dt);
    formation_step(state, dt);

    // --- LASER LIFECYCLE ---
    if input.fire && state.shots_remaining > 0 {
        let muzzle = state.ship.muzzle(&state.tuning);
        if let Some(laser) = state.lasers.iter_mut().find(|l| !l.live) {
            laser.pos = muzzle;
            laser.live = true;
            state.shots_remaining -= 1;
            state.push_event(GameEvent::ShotFired);
        }
    }

    let laser_speed = state.tuning.laser_speed;
    let laser_height = state.tuning.laser_height;
    for i in 0..state.lasers.len() {
        if !state.lasers[i].live {
            continue;
        }
        state.lasers[i].pos.y -= laser_speed * dt;

        // Fully above the arena: back to the pool
        if state.lasers[i].pos.y + laser_height < 0.0 {
            state.lasers[i].park(&state.ship, &state.tuning);
        }
    }

    // Volley comes back once every shot is spent and gone
    if state.shots_remaining == 0 && state.live_lasers() == 0 {
        state.shots_remaining = state.tuning.max_shots;
        state.push_event(GameEvent::VolleyReloaded);
    }

    // --- COLLISIONS ---
    let sprite = state.tuning.sprite_size;
    for li in 0..state.lasers.len() {
        if !state.lasers[li].live {
            continue;
        }
        let laser_box = state.lasers[li].bounds(&state.tuning);
        for ai in 0..state.aliens.len() {
            if !state.aliens[ai].alive {
                continue;
            }
            if laser_box.overlaps(&state.aliens[ai].bounds(sprite)) {
                state.aliens[ai].alive = false;
                state.lasers[li].park(&state.ship, &state.tuning);
                state.score += state.tuning.kill_score;
                state.push_event(GameEvent::AlienDestroyed { slot: ai });
                break; // laser is spent
            }
        }
    }

    // --- WIN/LOSE ---
    let ship_box = state.ship.bounds(sprite);
    let floor = state.tuning.arena_height;
    let invaded = state
        .aliens
        .iter()
        .any(|a| a.alive && (a.bounds(sprite).overlaps(&ship_box) || a.pos.y + sprite >= floor));

    if invaded {
        state.phase = GamePhase::Lost;
        state.push_event(GameEvent::Defeat);
        log::info!("run lost: score={} ticks={}", state.score, state.time_ticks);
    } else if state.aliens_remaining() == 0 {
        state.phase = GamePhase::Won;
        state.push_event(GameEvent::Victory);
        log::info!("run won: score={} ticks={}", state.score, state.time_ticks);
    }
}

/// Fixed-formula demo pilot: chase the nearest live alien's column and
/// shoot once roughly lined up under it.
fn autopilot(state: &GameState, input: &mut TickInput) {
    let sprite = state.tuning.sprite_size;
    let ship_center = state.ship.pos.x + sprite / 2.0;

    let target = state
        .aliens
        .iter()
        .filter(|a| a.alive)
        .map(|a| a.pos.x + sprite / 2.0)
        .min_by(|a, b| {
            (a - ship_center)
                .abs()
                .partial_cmp(&(b - ship_center).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    if let Some(target_x) = target {
        let error = target_x - ship_center;
        let deadzone = sprite / 4.0;
        input.move_left = error < -deadzone;
        input.move_right = error > deadzone;
        input.fire = error.abs() < sprite / 2.0 && state.shots_remaining > 0;
    } else {
        input.move_left = false;
        input.move_right = false;
        input.fire = false;
    }
}
