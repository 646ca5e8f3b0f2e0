pub mod chaos;
pub mod fate;
pub mod hope;
pub mod intro;
pub mod real;

// Design-space dimensions shared by every universe.
pub const WORLD_WIDTH: f32 = 800.0;
pub const WORLD_HEIGHT: f32 = 600.0;

// Atlas layout: one show atlas, four rows.
pub const ATLAS_ROW_BACKDROPS: f32 = 0.0;
pub const ATLAS_ROW_PHOTOS: f32 = 1.0;
pub const ATLAS_ROW_UI: f32 = 2.0;
pub const ATLAS_ROW_CONFETTI: f32 = 3.0;
/// Distinct confetti color cells in the confetti row.
pub const CONFETTI_COLORS: u32 = 6;

// Backdrop columns (row 0).
pub const COL_BACKDROP_NEBULA: f32 = 0.0;
pub const COL_BACKDROP_NIGHT: f32 = 1.0;
pub const COL_BACKDROP_STATIC: f32 = 2.0;
/// Poster frame shown under the host's memory-video element.
pub const COL_BACKDROP_VIDEO: f32 = 3.0;
pub const COL_BACKDROP_DAWN: f32 = 4.0;
pub const COL_BACKDROP_PAPER: f32 = 5.0;

// UI columns (row 2).
pub const COL_CARD_BACK: f32 = 0.0;
pub const COL_STAR: f32 = 1.0;
pub const COL_TOKEN: f32 = 2.0;
pub const COL_HEART: f32 = 3.0;
pub const COL_SUN: f32 = 4.0;
pub const COL_ARROW: f32 = 5.0;
pub const COL_WASH: f32 = 6.0;
pub const COL_LETTER: f32 = 7.0;
