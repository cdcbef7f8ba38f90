//! Game configuration resource.
//!
//! Window settings and gameplay tunables loaded from an INI file. Defaults
//! are safe to start with; missing keys keep them. The resource is inserted
//! into the world and handed to systems explicitly, never read as a global.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1024
//! height = 768
//! target_fps = 60
//! title = Potato Quest
//!
//! [physics]
//! speed = 400
//! gravity = 2000
//! jump_velocity = -800
//! max_charge_time = 1.0
//!
//! [player]
//! width = 32
//! height = 48
//!
//! [levels]
//! min = 1
//! max = 10
//! start = 1
//! dir = ./assets/levels
//! spawn_margin = 5
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 1024;
const DEFAULT_WINDOW_HEIGHT: u32 = 768;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TITLE: &str = "Potato Quest";
const DEFAULT_SPEED: f32 = 400.0;
const DEFAULT_GRAVITY: f32 = 2000.0;
const DEFAULT_JUMP_VELOCITY: f32 = -800.0;
const DEFAULT_MAX_CHARGE_TIME: f32 = 1.0;
const DEFAULT_PLAYER_WIDTH: u32 = 32;
const DEFAULT_PLAYER_HEIGHT: u32 = 48;
const DEFAULT_MIN_LEVEL: i32 = 1;
const DEFAULT_MAX_LEVEL: i32 = 10;
const DEFAULT_START_LEVEL: i32 = 1;
const DEFAULT_LEVELS_DIR: &str = "./assets/levels";
const DEFAULT_SPAWN_MARGIN: f32 = 5.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels; also the playfield width.
    pub window_width: u32,
    /// Window height in pixels; also the height of one level.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Window title.
    pub title: String,
    /// Horizontal walking speed in pixels per second.
    pub speed: f32,
    /// Downward acceleration in pixels per second squared.
    pub gravity: f32,
    /// Base jump impulse; negative is upward.
    pub jump_velocity: f32,
    /// Seconds of holding jump needed for a full charge.
    pub max_charge_time: f32,
    /// Player box size in pixels.
    pub player_width: u32,
    pub player_height: u32,
    /// First and last level numbers.
    pub min_level: i32,
    pub max_level: i32,
    /// Level the run starts on.
    pub start_level: i32,
    /// Directory holding `level_<n>.json` files.
    pub levels_dir: PathBuf,
    /// Distance from the screen edge where the player respawns after a transition.
    pub spawn_margin: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            title: DEFAULT_TITLE.to_string(),
            speed: DEFAULT_SPEED,
            gravity: DEFAULT_GRAVITY,
            jump_velocity: DEFAULT_JUMP_VELOCITY,
            max_charge_time: DEFAULT_MAX_CHARGE_TIME,
            player_width: DEFAULT_PLAYER_WIDTH,
            player_height: DEFAULT_PLAYER_HEIGHT,
            min_level: DEFAULT_MIN_LEVEL,
            max_level: DEFAULT_MAX_LEVEL,
            start_level: DEFAULT_START_LEVEL,
            levels_dir: PathBuf::from(DEFAULT_LEVELS_DIR),
            spawn_margin: DEFAULT_SPAWN_MARGIN,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, speed={}, gravity={}, jump={}, levels {}..={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.speed,
            self.gravity,
            self.jump_velocity,
            self.min_level,
            self.max_level
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        let uint = |section: &str, key: &str| config.getuint(section, key).ok().flatten();
        let int = |section: &str, key: &str| config.getint(section, key).ok().flatten();
        let float = |section: &str, key: &str| config.getfloat(section, key).ok().flatten();

        // [window] section
        if let Some(width) = uint("window", "width") {
            self.window_width = width as u32;
        }
        if let Some(height) = uint("window", "height") {
            self.window_height = height as u32;
        }
        if let Some(fps) = uint("window", "target_fps") {
            self.target_fps = fps as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }

        // [physics] section
        if let Some(speed) = float("physics", "speed") {
            self.speed = speed as f32;
        }
        if let Some(gravity) = float("physics", "gravity") {
            self.gravity = gravity as f32;
        }
        if let Some(jump) = float("physics", "jump_velocity") {
            self.jump_velocity = jump as f32;
        }
        if let Some(charge) = float("physics", "max_charge_time") {
            self.max_charge_time = charge as f32;
        }

        // [player] section
        if let Some(width) = uint("player", "width") {
            self.player_width = width as u32;
        }
        if let Some(height) = uint("player", "height") {
            self.player_height = height as u32;
        }

        // [levels] section
        if let Some(min) = int("levels", "min") {
            self.min_level = min as i32;
        }
        if let Some(max) = int("levels", "max") {
            self.max_level = max as i32;
        }
        if let Some(start) = int("levels", "start") {
            self.start_level = start as i32;
        }
        if let Some(dir) = config.get("levels", "dir") {
            self.levels_dir = PathBuf::from(dir);
        }
        if let Some(margin) = float("levels", "spawn_margin") {
            self.spawn_margin = margin as f32;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "title", Some(self.title.clone()));

        config.set("physics", "speed", Some(self.speed.to_string()));
        config.set("physics", "gravity", Some(self.gravity.to_string()));
        config.set("physics", "jump_velocity", Some(self.jump_velocity.to_string()));
        config.set("physics", "max_charge_time", Some(self.max_charge_time.to_string()));

        config.set("player", "width", Some(self.player_width.to_string()));
        config.set("player", "height", Some(self.player_height.to_string()));

        config.set("levels", "min", Some(self.min_level.to_string()));
        config.set("levels", "max", Some(self.max_level.to_string()));
        config.set("levels", "start", Some(self.start_level.to_string()));
        config.set(
            "levels",
            "dir",
            Some(self.levels_dir.to_string_lossy().into_owned()),
        );
        config.set("levels", "spawn_margin", Some(self.spawn_margin.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (1024, 768));
        assert_eq!(config.speed, 400.0);
        assert_eq!(config.jump_velocity, -800.0);
        assert_eq!((config.min_level, config.max_level), (1, 10));
    }

    #[test]
    fn partial_ini_keeps_other_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[physics]\ngravity = 1500\n\n[levels]\nmax = 4\ndir = /tmp/lv\n")
            .unwrap();
        assert_eq!(config.gravity, 1500.0);
        assert_eq!(config.max_level, 4);
        assert_eq!(config.levels_dir, PathBuf::from("/tmp/lv"));
        assert_eq!(config.speed, 400.0);
        assert_eq!(config.window_width, 1024);
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut config = GameConfig::with_path("/definitely/not/here/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config, GameConfig::with_path("/definitely/not/here/config.ini"));
    }

    #[test]
    fn save_then_load_restores_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");

        let mut saved = GameConfig::with_path(&path);
        saved.window_width = 640;
        saved.max_charge_time = 0.75;
        saved.start_level = 3;
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.window_width, 640);
        assert_eq!(loaded.max_charge_time, 0.75);
        assert_eq!(loaded.start_level, 3);
    }
}
