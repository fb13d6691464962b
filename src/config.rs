use std::path::PathBuf;

use thiserror::Error;

use crate::maze::Cell;

pub const DEFAULT_TILE: f32 = 35.0;
pub const DEFAULT_TICK_MS: u64 = 16;
pub const DEFAULT_RENDER_FPS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("tile size must be positive, got {0}")]
    TileSize(f32),
    #[error("HUD offset must be finite, got {0}")]
    UiOffset(f32),
    #[error("speed limits are inverted: min {min} > max {max}")]
    InvertedLimits { min: f32, max: f32 },
    #[error("minimum speed must be positive, got {0}")]
    NonPositiveSpeed(f32),
    #[error("max speed {max} reaches half a tile ({half}); centering would skip tiles")]
    SpeedTooHigh { max: f32, half: f32 },
    #[error("initial speed {speed} lies outside [{min}, {max}]")]
    InitialSpeed { speed: f32, min: f32, max: f32 },
    #[error("animation cycle must be at least one tick")]
    AnimationCycle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedLimits {
    pub min: f32,
    pub max: f32,
}

impl SpeedLimits {
    pub fn clamp(&self, speed: f32) -> f32 {
        speed.clamp(self.min, self.max)
    }
}

impl Default for SpeedLimits {
    fn default() -> Self {
        Self { min: 1.5, max: 8.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scoring {
    pub pellet: u32,
    pub power_pellet: u32,
    pub junk_food: u32,
    pub healthy_food: u32,
    pub junk_food_speed: f32,
    pub healthy_food_speed: f32,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            pellet: 10,
            power_pellet: 50,
            junk_food: 100,
            healthy_food: 50,
            junk_food_speed: -0.5,
            healthy_food_speed: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    pub tile: f32,
    /// Vertical band above the maze reserved for the HUD, in position units.
    pub ui_offset: f32,
    pub start: Cell,
    pub initial_speed: f32,
    pub limits: SpeedLimits,
    pub anim_cycle: u32,
    pub scoring: Scoring,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tile: DEFAULT_TILE,
            ui_offset: 3.0 * DEFAULT_TILE,
            start: Cell::new(1, 1),
            initial_speed: 3.0,
            limits: SpeedLimits::default(),
            anim_cycle: 30,
            scoring: Scoring::default(),
        }
    }
}

impl Tuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tile > 0.0) {
            return Err(ConfigError::TileSize(self.tile));
        }
        if !self.ui_offset.is_finite() {
            return Err(ConfigError::UiOffset(self.ui_offset));
        }
        let SpeedLimits { min, max } = self.limits;
        if !(min > 0.0) {
            return Err(ConfigError::NonPositiveSpeed(min));
        }
        if min > max {
            return Err(ConfigError::InvertedLimits { min, max });
        }
        let half = self.tile / 2.0;
        if max >= half {
            return Err(ConfigError::SpeedTooHigh { max, half });
        }
        if !(min..=max).contains(&self.initial_speed) {
            return Err(ConfigError::InitialSpeed {
                speed: self.initial_speed,
                min,
                max,
            });
        }
        if self.anim_cycle == 0 {
            return Err(ConfigError::AnimationCycle);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub tick_ms: u64,
    pub render_fps: u64,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            render_fps: DEFAULT_RENDER_FPS,
            log_file: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unparseable or zero values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let positive = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(default)
        };
        Self {
            tick_ms: positive("PACMAN_TICK_MS", DEFAULT_TICK_MS),
            render_fps: positive("PACMAN_FPS", DEFAULT_RENDER_FPS),
            log_file: lookup("PACMAN_LOG_FILE")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}
