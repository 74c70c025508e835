//! Game settings
//!
//! Read once at startup from a JSON file and passed by reference to every
//! constructor. Nothing reads configuration after the game is created.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{BlockBounce, ControlStrategy, Viewport};

/// Environment variable naming an explicit settings file
pub const SETTINGS_ENV: &str = "BREAKOUT_SETTINGS";
/// Settings file looked up in the working directory when no override is given
pub const DEFAULT_SETTINGS_FILE: &str = "breakout.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file {} could not be accessed", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Viewport / timing ===
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub fps: u32,

    // === Block grid ===
    pub cols: u32,
    pub rows: u32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    /// Who drives the paddle
    pub control: ControlStrategy,

    // === Ball ===
    pub ball_size: f32,
    pub ball_speed_offset: f32,
    /// Horizontal reflection rule on block hits
    pub block_bounce: BlockBounce,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            fps: FPS,

            cols: BLOCK_COLS,
            rows: BLOCK_ROWS,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            control: ControlStrategy::Ai,

            ball_size: BALL_SIZE,
            ball_speed_offset: BALL_SPEED_OFFSET,
            block_bounce: BlockBounce::Legacy,
        }
    }
}

impl Settings {
    /// Load settings for this process.
    ///
    /// `$BREAKOUT_SETTINGS` wins when set and must point at a readable file.
    /// Otherwise `breakout.json` is used if present, else the defaults.
    pub fn load() -> Result<Self, SettingsError> {
        if let Some(path) = std::env::var_os(SETTINGS_ENV) {
            return Self::load_from(Path::new(&path));
        }

        let path = Path::new(DEFAULT_SETTINGS_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            log::info!("No {} found, using default settings", DEFAULT_SETTINGS_FILE);
            Ok(Self::default())
        }
    }

    /// Read, parse and validate a settings file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let io_err = |source: std::io::Error| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };
        let json = serde_json::to_string_pretty(self).map_err(|e| io_err(e.into()))?;
        fs::write(path, json).map_err(io_err)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |msg: String| Err(SettingsError::Invalid(msg));

        if !(self.viewport_width > 0.0 && self.viewport_height > 0.0) {
            return invalid(format!(
                "viewport must be positive, got {}x{}",
                self.viewport_width, self.viewport_height
            ));
        }
        if self.fps == 0 {
            return invalid("fps must be at least 1".into());
        }
        if self.cols == 0 || self.rows == 0 {
            return invalid(format!(
                "block grid must be non-empty, got {}x{}",
                self.cols, self.rows
            ));
        }
        if !(self.paddle_width > 0.0 && self.paddle_height > 0.0 && self.ball_size > 0.0) {
            return invalid("paddle and ball sizes must be positive".into());
        }
        // Both clamp branches could fire otherwise
        if self.paddle_width >= self.viewport_width {
            return invalid(format!(
                "paddle width {} must be narrower than the viewport {}",
                self.paddle_width, self.viewport_width
            ));
        }
        if self.paddle_speed <= self.ball_speed_offset {
            return invalid(format!(
                "paddle speed {} must exceed the ball speed offset {}",
                self.paddle_speed, self.ball_speed_offset
            ));
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height)
    }

    /// Size of one block in the grid (fills the top third of the viewport)
    pub fn block_size(&self) -> (f32, f32) {
        (
            self.viewport_width / self.cols as f32,
            self.viewport_height / 3.0 / self.rows as f32,
        )
    }

    pub fn ball_speed(&self) -> f32 {
        self.paddle_speed - self.ball_speed_offset
    }
}
