//! Formation and ship movement
//!
//! The formation sweeps horizontally as a block and drops half a sprite
//! height whenever it reaches an arena edge. On top of that sweep, the
//! selected motion model adds its own vertical (and for Sine, horizontal)
//! term. All formulas are fixed; the only per-run variation is the seeded
//! sine phase of each alien.

use super::state::{GameEvent, GameState, MovementModel};

/// Advance the alien formation by one timestep
pub fn formation_step(state: &mut GameState, dt: f32) {
    let t = state.tuning.clone();
    let right_edge = t.arena_width - t.sprite_size;

    // Edge check first: if any live alien is at the wall while sweeping
    // toward it, flip the sweep and drop the whole formation (dead slots
    // included, so a revived render layer would still line up).
    let at_edge = state.aliens.iter().any(|a| {
        a.alive
            && match state.sweep {
                super::state::SweepDir::Left => a.pos.x <= 0.0,
                super::state::SweepDir::Right => a.pos.x >= right_edge,
            }
    });

    if at_edge {
        state.sweep = state.sweep.flipped();
        for alien in &mut state.aliens {
            alien.pos.y += t.edge_drop;
        }
        state.push_event(GameEvent::FormationDropped);
    }

    let sweep_vx = t.sweep_speed * state.sweep.sign();
    let time_secs = state.time_ticks as f32 * crate::consts::SIM_DT;

    for alien in &mut state.aliens {
        if !alien.alive {
            continue;
        }

        alien.pos.x += sweep_vx * dt;

        match state.model {
            MovementModel::Linear => {}
            MovementModel::Gravity => {
                // The deeper the formation, the faster it falls.
                alien.pos.y += t.gravity_factor * alien.pos.y * dt;
            }
            MovementModel::Parabolic => {
                // Height is slaved to horizontal position: an inverted
                // parabola with its apex over the arena center.
                let middle_x = t.arena_width / 2.0 - t.sprite_size / 2.0;
                let offset = (alien.pos.x - middle_x) / t.parabola_scale;
                alien.pos.y = t.parabola_apex * t.sprite_size - offset * offset;
            }
            MovementModel::Sine => {
                // Horizontal wobble is the derivative of A*sin(wt + phi),
                // so the alien oscillates around the sweeping baseline.
                let wobble_vx = t.sine_amplitude
                    * t.sine_frequency
                    * (t.sine_frequency * time_secs + alien.sine_phase).cos();
                alien.pos.x += wobble_vx * dt;
                alien.pos.y += t.sine_descent * dt;
            }
        }
    }
}

/// Advance the player ship by one timestep
pub fn ship_step(state: &mut GameState, left: bool, right: bool, dt: f32) {
    let t = &state.tuning;
    let mut vx = 0.0;
    if left {
        vx -= t.ship_speed;
    }
    if right {
        vx += t.ship_speed;
    }

    let x = state.ship.pos.x + vx * dt;
    state.ship.pos.x = x.clamp(0.0, t.arena_width - t.sprite_size);
}
