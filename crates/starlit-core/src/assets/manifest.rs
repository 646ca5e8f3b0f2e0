use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Asset manifest describing the atlases, named sprites, audio tracks and
/// video clips a show references. Loaded from a JSON file at runtime.
///
/// The core never touches asset bytes; a missing entry means the host shows
/// a broken placeholder, never a crash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// List of texture atlases.
    pub atlases: Vec<AtlasDescriptor>,
    /// Named sprite lookup: name → atlas index + cell coordinates.
    #[serde(default)]
    pub sprites: HashMap<String, SpriteDescriptor>,
    /// Audio assets (ambient track, voice note).
    #[serde(default)]
    pub sounds: HashMap<String, SoundDescriptor>,
    /// Video clips (backdrop loops).
    #[serde(default)]
    pub videos: HashMap<String, VideoDescriptor>,
}

/// Describes a single texture atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasDescriptor {
    /// Human-readable name (e.g., "memories").
    pub name: String,
    /// Number of columns in the atlas grid.
    pub cols: u32,
    /// Number of rows in the atlas grid.
    pub rows: u32,
    /// Relative path to the image file (e.g., "assets/memories.png").
    pub path: String,
}

/// Describes a named sprite within an atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    /// Index into the atlases array.
    pub atlas: u32,
    /// Column in the atlas grid.
    pub col: u32,
    /// Row in the atlas grid.
    pub row: u32,
    /// Number of cells this sprite spans (default: 1).
    #[serde(default = "default_span")]
    pub span: u32,
}

/// Describes an audio asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundDescriptor {
    /// Relative path to the audio file.
    pub path: String,
    /// Numeric cue ID the host binds this track to.
    #[serde(default)]
    pub cue_id: Option<u32>,
}

/// Describes a looping video clip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoDescriptor {
    /// Relative path to the video file.
    pub path: String,
}

fn default_span() -> u32 {
    1
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
