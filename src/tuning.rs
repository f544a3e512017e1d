//! Data-driven game balance
//!
//! Every gameplay constant can be overridden from a JSON file so designers
//! can retune the cabinet without a rebuild. Defaults mirror `crate::consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors from loading or validating a tuning file
#[derive(Debug)]
pub enum TuningError {
    /// The file wasn't valid JSON for this schema
    Parse(serde_json::Error),
    /// The values parsed but don't describe a playable game
    Invalid(String),
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TuningError::Parse(err) => write!(f, "tuning parse error: {err}"),
            TuningError::Invalid(reason) => write!(f, "invalid tuning: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(err) => Some(err),
            TuningError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        TuningError::Parse(err)
    }
}

/// Gameplay balance values
///
/// Fields left out of a tuning file keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Arena dimensions
    pub arena_width: f32,
    pub arena_height: f32,
    /// Side of the square ship/alien sprites
    pub sprite_size: f32,

    /// Formation
    pub alien_count: usize,
    pub formation_row_y: f32,
    pub sweep_speed: f32,
    pub edge_drop: f32,

    /// Motion models
    pub gravity_factor: f32,
    pub parabola_scale: f32,
    pub parabola_apex: f32,
    pub sine_amplitude: f32,
    pub sine_frequency: f32,
    pub sine_descent: f32,

    /// Ship
    pub ship_speed: f32,
    pub ship_start_y: f32,

    /// Lasers
    pub max_shots: u8,
    pub laser_speed: f32,
    pub laser_width: f32,
    pub laser_height: f32,
    pub muzzle_offset_x: f32,
    pub muzzle_offset_y: f32,

    /// Scoring
    pub kill_score: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            sprite_size: SPRITE_SIZE,
            alien_count: ALIEN_COUNT,
            formation_row_y: FORMATION_ROW_Y,
            sweep_speed: SWEEP_SPEED,
            edge_drop: EDGE_DROP,
            gravity_factor: GRAVITY_FACTOR,
            parabola_scale: PARABOLA_SCALE,
            parabola_apex: PARABOLA_APEX,
            sine_amplitude: SINE_AMPLITUDE,
            sine_frequency: SINE_FREQUENCY,
            sine_descent: SINE_DESCENT,
            ship_speed: SHIP_SPEED,
            ship_start_y: SHIP_START_Y,
            max_shots: MAX_SHOTS as u8,
            laser_speed: LASER_SPEED,
            laser_width: LASER_WIDTH,
            laser_height: LASER_HEIGHT,
            muzzle_offset_x: MUZZLE_OFFSET_X,
            muzzle_offset_y: MUZZLE_OFFSET_Y,
            kill_score: KILL_SCORE,
        }
    }
}

impl Tuning {
    /// Parse and validate a tuning file
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject value combinations that can't make a playable game
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(name: &str, value: f32) -> Result<(), TuningError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(TuningError::Invalid(format!("{name} must be positive, got {value}")))
            }
        }

        positive("arena_width", self.arena_width)?;
        positive("arena_height", self.arena_height)?;
        positive("sprite_size", self.sprite_size)?;
        positive("sweep_speed", self.sweep_speed)?;
        positive("ship_speed", self.ship_speed)?;
        positive("laser_speed", self.laser_speed)?;
        positive("laser_width", self.laser_width)?;
        positive("laser_height", self.laser_height)?;
        positive("sine_frequency", self.sine_frequency)?;
        positive("parabola_scale", self.parabola_scale)?;

        if self.alien_count == 0 {
            return Err(TuningError::Invalid("alien_count must be at least 1".into()));
        }
        if self.max_shots == 0 {
            return Err(TuningError::Invalid("max_shots must be at least 1".into()));
        }
        if self.alien_count as f32 * self.sprite_size > self.arena_width {
            return Err(TuningError::Invalid(format!(
                "formation of {} sprites does not fit an arena {} wide",
                self.alien_count, self.arena_width
            )));
        }
        if !(0.0..self.arena_height).contains(&self.formation_row_y) {
            return Err(TuningError::Invalid(
                "formation_row_y must lie inside the arena".into(),
            ));
        }
        if !(0.0..self.arena_height).contains(&self.ship_start_y) {
            return Err(TuningError::Invalid(
                "ship_start_y must lie inside the arena".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_empty_file_keeps_defaults() {
        let tuning = Tuning::from_json_str("{}").unwrap();
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_partial_override() {
        let tuning = Tuning::from_json_str(r#"{"sweep_speed": 90.0, "max_shots": 5}"#).unwrap();
        assert_eq!(tuning.sweep_speed, 90.0);
        assert_eq!(tuning.max_shots, 5);
        assert_eq!(tuning.ship_speed, Tuning::default().ship_speed);
    }

    #[test]
    fn test_rejects_zero_aliens() {
        let err = Tuning::from_json_str(r#"{"alien_count": 0}"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));
    }

    #[test]
    fn test_rejects_negative_speed() {
        let err = Tuning::from_json_str(r#"{"laser_speed": -5.0}"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));
    }

    #[test]
    fn test_rejects_oversized_formation() {
        let err = Tuning::from_json_str(r#"{"alien_count": 10}"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json_str("not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }
}
