/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// state.  No game logic is performed; this module only translates canvas
/// pixels into terminal cells and state into crossterm commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::compute::{enemy_boundbox, player_boundbox};
use crate::entities::{Enemy, GameState, Player, Rect, Skin, SkinCard};

// ── Pixel → cell scaling ──────────────────────────────────────────────────────

/// One 101 px tile column is 10 cells wide, one 85 px tile row is 3 cells
/// tall, so the 5×6 grid fills 50×18 cells under a one-row HUD.
const COLS_PER_PX: f64 = 10.0 / 101.0;
const ROWS_PER_PX: f64 = 3.0 / 85.0;

const FIELD_TOP: i32 = 1; // row 0 is the HUD
const FIELD_COLS: i32 = 50;
const GRID_ROWS: i32 = 18;
const HINT_ROW: u16 = (FIELD_TOP + GRID_ROWS + 1) as u16;

fn cell_x(px: f64) -> i32 {
    (px * COLS_PER_PX).round() as i32
}

fn cell_y(px: f64) -> i32 {
    (px * ROWS_PER_PX).round() as i32 + FIELD_TOP
}

/// Inverse mapping for mouse events: the canvas-pixel point at the centre
/// of a terminal cell.
pub fn pointer_px(column: u16, row: u16) -> (f64, f64) {
    let px = (column as f64 + 0.5) / COLS_PER_PX;
    let py = (row as f64 - FIELD_TOP as f64 + 0.5) / ROWS_PER_PX;
    (px, py)
}

// ── Colour palette ────────────────────────────────────────────────────────────

const C_WATER: Color = Color::DarkBlue;
const C_STONE: Color = Color::DarkGrey;
const C_GRASS: Color = Color::DarkGreen;
const C_ENEMY: Color = Color::Red;
const C_HUD: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;
const C_DEBUG: Color = Color::Red;

fn skin_color(skin: Skin) -> Color {
    match skin {
        Skin::Boy => Color::White,
        Skin::CatGirl => Color::Yellow,
        Skin::HornGirl => Color::Cyan,
        Skin::PinkGirl => Color::Magenta,
        Skin::Princess => Color::Green,
    }
}

fn skin_name(skin: Skin) -> &'static str {
    match skin {
        Skin::Boy => "Boy",
        Skin::CatGirl => "Cat Girl",
        Skin::HornGirl => "Horn Girl",
        Skin::PinkGirl => "Pink Girl",
        Skin::Princess => "Princess",
    }
}

// ── Clipped text helper ───────────────────────────────────────────────────────

/// Print `text` at a cell position, skipping anything outside the grid.
/// Enemies spend part of their life off-screen left, so negative columns
/// are routine, not an error.
fn draw_clipped<W: Write>(out: &mut W, col: i32, row: i32, text: &str) -> std::io::Result<()> {
    if row < FIELD_TOP || row >= FIELD_TOP + GRID_ROWS {
        return Ok(());
    }
    for (i, ch) in text.chars().enumerate() {
        let c = col + i as i32;
        if c < 0 || c >= FIELD_COLS {
            continue;
        }
        out.queue(cursor::MoveTo(c as u16, row as u16))?;
        out.queue(Print(ch))?;
    }
    Ok(())
}

// ── Gameplay frame ────────────────────────────────────────────────────────────

/// Render one complete gameplay frame.  `debug` adds the bounding-box
/// overlay on top of every sprite.
pub fn render<W: Write>(out: &mut W, state: &GameState, debug: bool) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_background(out)?;
    draw_hud(out, state)?;

    for enemy in &state.enemies {
        draw_enemy(out, enemy)?;
    }
    draw_player(out, &state.player)?;

    if debug {
        for enemy in &state.enemies {
            draw_debug_box(out, &enemy_boundbox(enemy))?;
        }
        draw_debug_box(out, &player_boundbox(&state.player))?;
    }

    draw_hint(out, "← ↑ → ↓ / WASD : Move   B : Boxes   Q : Menu")?;

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, HINT_ROW))?;
    out.flush()?;
    Ok(())
}

/// Water row on top, three stone lanes, two grass rows.
fn draw_background<W: Write>(out: &mut W) -> std::io::Result<()> {
    for tile_row in 0..6 {
        let (color, fill) = match tile_row {
            0 => (C_WATER, "~"),
            1..=3 => (C_STONE, "."),
            _ => (C_GRASS, ","),
        };
        out.queue(style::SetForegroundColor(color))?;
        let line = fill.repeat(FIELD_COLS as usize);
        for sub in 0..3 {
            let row = FIELD_TOP + tile_row * 3 + sub;
            out.queue(cursor::MoveTo(0, row as u16))?;
            out.queue(Print(&line))?;
        }
    }
    Ok(())
}

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!("Points: {:>4}", state.player.points)))?;

    let name = skin_name(state.player.skin);
    let rx = (FIELD_COLS as u16).saturating_sub(name.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(skin_color(state.player.skin)))?;
    out.queue(Print(name))?;
    Ok(())
}

/// Sprites are anchored on their bounding box — the visible silhouette —
/// not the bitmap corner, so they sit inside their tile band.
fn draw_player<W: Write>(out: &mut W, player: &Player) -> std::io::Result<()> {
    let bb = player_boundbox(player);
    let col = cell_x(bb.x);
    let top = cell_y(bb.y) - 1;

    out.queue(style::SetForegroundColor(skin_color(player.skin)))?;
    draw_clipped(out, col, top, " o ")?;
    draw_clipped(out, col, top + 1, "/|\\")?;
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy) -> std::io::Result<()> {
    let bb = enemy_boundbox(enemy);
    let col = cell_x(bb.x);
    let top = cell_y(bb.y) - 1;

    out.queue(style::SetForegroundColor(C_ENEMY))?;
    draw_clipped(out, col, top, "(◉◉)")?;
    draw_clipped(out, col, top + 1, "/\\/\\")?;
    Ok(())
}

/// Red outline of a collision rect, scaled to cells.
fn draw_debug_box<W: Write>(out: &mut W, rect: &Rect) -> std::io::Result<()> {
    let c0 = cell_x(rect.x);
    let c1 = cell_x(rect.x + rect.width);
    let r0 = cell_y(rect.y);
    let r1 = cell_y(rect.y + rect.height);

    out.queue(style::SetForegroundColor(C_DEBUG))?;
    for c in c0..=c1 {
        draw_clipped_char(out, c, r0, '─')?;
        draw_clipped_char(out, c, r1, '─')?;
    }
    for r in r0..=r1 {
        draw_clipped_char(out, c0, r, '│')?;
        draw_clipped_char(out, c1, r, '│')?;
    }
    Ok(())
}

fn draw_clipped_char<W: Write>(out: &mut W, col: i32, row: i32, ch: char) -> std::io::Result<()> {
    if row < FIELD_TOP || row >= FIELD_TOP + GRID_ROWS || col < 0 || col >= FIELD_COLS {
        return Ok(());
    }
    out.queue(cursor::MoveTo(col as u16, row as u16))?;
    out.queue(Print(ch))?;
    Ok(())
}

fn draw_hint<W: Write>(out: &mut W, text: &str) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, HINT_ROW))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── Select screen ─────────────────────────────────────────────────────────────

/// Render the character-select screen: one framed card per skin, the
/// hovered one highlighted.
pub fn render_select<W: Write>(out: &mut W, cards: &[SkinCard]) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    out.queue(cursor::MoveTo(14, 1))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print("★  CHOOSE YOUR CHARACTER  ★"))?;

    for card in cards {
        draw_card(out, card)?;
    }

    out.queue(cursor::MoveTo(1, HINT_ROW))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Click a character to start   1-5 : quick pick   Q : quit"))?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

fn draw_card<W: Write>(out: &mut W, card: &SkinCard) -> std::io::Result<()> {
    // The frame spans the full sprite rect, matching the hit region.
    let col = cell_x(card.x) as u16;
    let top = cell_y(card.y) as u16;

    let frame_color = if card.hovering { C_HUD } else { C_HINT };
    out.queue(style::SetForegroundColor(frame_color))?;

    out.queue(cursor::MoveTo(col, top))?;
    out.queue(Print("┌────────┐"))?;
    for r in 1..=5u16 {
        out.queue(cursor::MoveTo(col, top + r))?;
        out.queue(Print("│        │"))?;
    }
    out.queue(cursor::MoveTo(col, top + 6))?;
    out.queue(Print("└────────┘"))?;

    out.queue(style::SetForegroundColor(skin_color(card.skin)))?;
    out.queue(cursor::MoveTo(col + 3, top + 2))?;
    out.queue(Print(" o "))?;
    out.queue(cursor::MoveTo(col + 3, top + 3))?;
    out.queue(Print("/|\\"))?;

    out.queue(cursor::MoveTo(col, top + 7))?;
    out.queue(style::SetForegroundColor(frame_color))?;
    out.queue(Print(format!("{:^10}", skin_name(card.skin))))?;
    Ok(())
}
