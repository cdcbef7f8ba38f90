//! Level content loading.
//!
//! A [`LevelSource`] turns a level number into [`LevelData`]: the solid tiles
//! and the rescuable friends of that level. The game reads JSON files through
//! [`JsonLevelSource`]; tests can hand an in-memory map to the loader instead.
//!
//! # File format
//!
//! `level_<n>.json`, coordinates in tile units:
//!
//! ```json
//! {
//!   "tile_size": 32,
//!   "background": [40, 60, 90],
//!   "tiles": [{ "x": 0, "y": 23, "w": 32, "h": 1 }],
//!   "rescuables": [{ "name": "butter", "x": 10, "y": 20 }]
//! }
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use bevy_ecs::prelude::Resource;
use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::rescuable::Rescuable;
use crate::components::tile::Tile;

fn one() -> u32 {
    1
}

/// Tile placement in tile units. `w`/`h` default to a single tile.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TileSpec {
    pub x: i32,
    pub y: i32,
    #[serde(default = "one")]
    pub w: u32,
    #[serde(default = "one")]
    pub h: u32,
}

/// Friend placement in tile units. `w`/`h` default to a single tile.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RescuableSpec {
    pub name: String,
    pub x: i32,
    pub y: i32,
    #[serde(default = "one")]
    pub w: u32,
    #[serde(default = "one")]
    pub h: u32,
}

/// Static content of one level as stored on disk.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelData {
    /// Size of a tile in pixels.
    pub tile_size: u32,
    /// Clear color behind the tiles.
    #[serde(default)]
    pub background: Option<[u8; 3]>,
    #[serde(default)]
    pub tiles: Vec<TileSpec>,
    #[serde(default)]
    pub rescuables: Vec<RescuableSpec>,
}

impl LevelData {
    /// Tiles in world space, in file order.
    pub fn build_tiles(&self) -> Vec<Tile> {
        let size = self.tile_size as f32;
        self.tiles
            .iter()
            .map(|t| {
                Tile::new(
                    t.x as f32 * size,
                    t.y as f32 * size,
                    t.w as f32 * size,
                    t.h as f32 * size,
                )
            })
            .collect()
    }

    /// Rescuable friends in world space, in file order.
    pub fn build_rescuables(&self) -> Vec<Rescuable> {
        let size = self.tile_size as f32;
        self.rescuables
            .iter()
            .map(|r| {
                Rescuable::new(
                    r.name.clone(),
                    r.x as f32 * size,
                    r.y as f32 * size,
                    r.w as f32 * size,
                    r.h as f32 * size,
                )
            })
            .collect()
    }
}

/// Why a level could not be loaded.
#[derive(Debug)]
pub enum LevelLoadError {
    /// The file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// The file is not valid level JSON.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The source has no content for this level number.
    Missing(i32),
}

impl fmt::Display for LevelLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelLoadError::Io { path, source } => {
                write!(f, "cannot read level file {}: {}", path.display(), source)
            }
            LevelLoadError::Parse { path, source } => {
                write!(f, "invalid level file {}: {}", path.display(), source)
            }
            LevelLoadError::Missing(number) => write!(f, "no content for level {number}"),
        }
    }
}

impl std::error::Error for LevelLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelLoadError::Io { source, .. } => Some(source),
            LevelLoadError::Parse { source, .. } => Some(source),
            LevelLoadError::Missing(_) => None,
        }
    }
}

/// Anything that can produce the static content of a numbered level.
pub trait LevelSource: Send + Sync {
    fn load_level(&self, number: i32) -> Result<LevelData, LevelLoadError>;
}

/// Reads `level_<n>.json` files from a directory.
#[derive(Debug, Clone)]
pub struct JsonLevelSource {
    pub dir: PathBuf,
}

impl JsonLevelSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file holding level `number`.
    pub fn level_path(&self, number: i32) -> PathBuf {
        self.dir.join(format!("level_{number}.json"))
    }
}

/// Parse level JSON read from `path`.
pub fn parse_level_file(path: &Path) -> Result<LevelData, LevelLoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LevelLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LevelLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl LevelSource for JsonLevelSource {
    fn load_level(&self, number: i32) -> Result<LevelData, LevelLoadError> {
        let path = self.level_path(number);
        info!("Loading level {} from {}", number, path.display());
        parse_level_file(&path)
    }
}

impl LevelSource for FxHashMap<i32, LevelData> {
    fn load_level(&self, number: i32) -> Result<LevelData, LevelLoadError> {
        self.get(&number)
            .cloned()
            .ok_or(LevelLoadError::Missing(number))
    }
}

/// Resource wrapping the active [`LevelSource`].
#[derive(Resource)]
pub struct LevelLoader {
    source: Box<dyn LevelSource>,
}

impl LevelLoader {
    pub fn new(source: impl LevelSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    pub fn source(&self) -> &dyn LevelSource {
        self.source.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "tile_size": 32,
        "background": [10, 20, 30],
        "tiles": [
            { "x": 0, "y": 23, "w": 32 },
            { "x": 5, "y": 18 }
        ],
        "rescuables": [{ "name": "butter", "x": 10, "y": 20 }]
    }"#;

    #[test]
    fn parses_and_scales_by_tile_size() {
        let data: LevelData = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(data.background, Some([10, 20, 30]));

        let tiles = data.build_tiles();
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0], Tile::new(0.0, 736.0, 1024.0, 32.0));
        assert_eq!(tiles[1], Tile::new(160.0, 576.0, 32.0, 32.0));

        let friends = data.build_rescuables();
        assert_eq!(friends.len(), 1);
        assert_eq!(friends[0], Rescuable::new("butter", 320.0, 640.0, 32.0, 32.0));
    }

    #[test]
    fn optional_sections_default_to_empty() {
        let data: LevelData = serde_json::from_str(r#"{ "tile_size": 16 }"#).unwrap();
        assert!(data.tiles.is_empty());
        assert!(data.rescuables.is_empty());
        assert_eq!(data.background, None);
    }

    #[test]
    fn json_source_reads_numbered_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("level_3.json")).unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let source = JsonLevelSource::new(dir.path());
        let data = source.load_level(3).unwrap();
        assert_eq!(data.tiles.len(), 2);
    }

    #[test]
    fn json_source_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonLevelSource::new(dir.path());
        let err = source.load_level(9).unwrap_err();
        assert!(matches!(err, LevelLoadError::Io { .. }));
        assert!(err.to_string().contains("level_9.json"));
    }

    #[test]
    fn json_source_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("level_1.json"), "{ not json").unwrap();
        let source = JsonLevelSource::new(dir.path());
        assert!(matches!(
            source.load_level(1),
            Err(LevelLoadError::Parse { .. })
        ));
    }

    #[test]
    fn in_memory_source() {
        let mut levels: FxHashMap<i32, LevelData> = FxHashMap::default();
        levels.insert(
            2,
            LevelData {
                tile_size: 32,
                background: None,
                tiles: vec![],
                rescuables: vec![],
            },
        );
        assert!(levels.load_level(2).is_ok());
        assert!(matches!(levels.load_level(3), Err(LevelLoadError::Missing(3))));
    }
}
