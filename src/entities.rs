/// All game entity types — pure data, no logic.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

/// The selectable player sprites.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Skin {
    Boy,
    CatGirl,
    HornGirl,
    PinkGirl,
    Princess,
}

impl Skin {
    pub const ALL: [Skin; 5] = [
        Skin::Boy,
        Skin::CatGirl,
        Skin::HornGirl,
        Skin::PinkGirl,
        Skin::Princess,
    ];
}

/// Axis-aligned rectangle in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One pointer sample fed to the select screen each frame.
/// `click` is true only on the frame a left click arrived.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
    pub click: bool,
}

// ── Gameplay entities ─────────────────────────────────────────────────────────

/// Positions are the top-left corner of the sprite bitmap.  The bitmap has
/// large transparent padding, so collision uses the inset bounding box from
/// `compute::boundbox`, never the full rect.
#[derive(Clone, Debug)]
pub struct Player {
    pub skin: Skin,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub points: u32,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Horizontal speed in pixels per second (integer-valued).
    pub speed: f64,
}

// ── Select screen ─────────────────────────────────────────────────────────────

/// One card on the character-select screen.  Its hit region is the full
/// sprite rect, not the gameplay bounding box.
#[derive(Clone, Debug)]
pub struct SkinCard {
    pub skin: Skin,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub hovering: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire gameplay state.  Owned by the frame driver and passed by
/// reference into update/render; cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// Right edge of the playfield; enemies respawn once past it.
    pub canvas_width: f64,
}
