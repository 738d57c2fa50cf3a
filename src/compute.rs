/// Pure game-logic functions.
///
/// Every public function takes immutable references to the current entities
/// (and, where needed, an RNG handle) and returns brand-new values.  Side
/// effects are limited to the injected RNG and log records.

use rand::Rng;

use crate::entities::{Direction, Enemy, GameState, Player, Pointer, Rect, Skin, SkinCard};

// ── Playfield geometry ────────────────────────────────────────────────────────

/// One keyboard step, horizontal / vertical (one tile).
pub const PLAYER_STEP_X: f64 = 100.0;
pub const PLAYER_STEP_Y: f64 = 85.0;

/// All sprite bitmaps share the same dimensions.
pub const SPRITE_W: f64 = 101.0;
pub const SPRITE_H: f64 = 171.0;

/// Right edge of the canvas — the enemy respawn boundary (5 columns × 101).
pub const CANVAS_WIDTH: f64 = 505.0;

pub const NUMBER_OF_ENEMIES: usize = 3;

/// Player clamp rectangle.  The y bounds are bitmap-top values: the water
/// row sits at −42.75 and the bottom grass row at 382.25 (= 5·85 − 171/4).
pub const PLAYER_MAX_X: f64 = 400.0;
pub const PLAYER_MIN_Y: f64 = -42.75;
pub const PLAYER_MAX_Y: f64 = 382.25;

/// Reaching the water row scores a crossing.  Same value as `PLAYER_MIN_Y`;
/// kept separate because the win condition and the clamp are different rules.
pub const WIN_ROW_Y: f64 = -42.75;

/// The three paved lanes enemies travel, as bitmap-top y values
/// (row · 85 − 85/2 for rows 1..=3).
pub const LANE_YS: [f64; 3] = [42.5, 127.5, 212.5];

/// Enemy speed is a uniform integer in this range, in px/s.
const SPEED_MIN: i32 = 10;
const SPEED_MAX: i32 = 210;

/// Bitmap-top y of the select-screen card row.
pub const SELECT_ROW_Y: f64 = 303.0;

// ── Bounding boxes ────────────────────────────────────────────────────────────

/// The collision rect, inset from the full bitmap rect to approximate the
/// visible silhouette: offset (12.5% w, 65% h), size (75% w, 25% h).
pub fn boundbox(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect {
        x: x + width * 0.125,
        y: y + height * 0.65,
        width: width * 0.75,
        height: height / 4.0,
    }
}

pub fn player_boundbox(player: &Player) -> Rect {
    boundbox(player.x, player.y, player.width, player.height)
}

pub fn enemy_boundbox(enemy: &Enemy) -> Rect {
    boundbox(enemy.x, enemy.y, enemy.width, enemy.height)
}

fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// A freshly spawned enemy: off-screen left, random lane, random speed.
pub fn spawn_enemy(rng: &mut impl Rng) -> Enemy {
    let template = Enemy {
        x: 0.0,
        y: 0.0,
        width: SPRITE_W,
        height: SPRITE_H,
        speed: 0.0,
    };
    reset_random_position(&template, rng)
}

/// Build the initial game state: player on the start tile, all enemies
/// pre-spawned at random lanes and speeds.
pub fn init_state(skin: Skin, rng: &mut impl Rng) -> GameState {
    let player = reset_position(&Player {
        skin,
        x: 0.0,
        y: 0.0,
        width: SPRITE_W,
        height: SPRITE_H,
        points: 0,
    });
    let enemies = (0..NUMBER_OF_ENEMIES).map(|_| spawn_enemy(rng)).collect();
    GameState {
        player,
        enemies,
        canvas_width: CANVAS_WIDTH,
    }
}

/// The five select-screen cards, laid out side by side.
pub fn select_cards() -> Vec<SkinCard> {
    Skin::ALL
        .iter()
        .enumerate()
        .map(|(idx, &skin)| SkinCard {
            skin,
            x: idx as f64 * SPRITE_W,
            y: SELECT_ROW_Y,
            width: SPRITE_W,
            height: SPRITE_H,
            hovering: false,
        })
        .collect()
}

// ── Enemy transitions ────────────────────────────────────────────────────────

/// Move the enemy back to the left of the screen, onto a uniformly random
/// lane, with a fresh uniform integer speed in [10, 210).
pub fn reset_random_position(enemy: &Enemy, rng: &mut impl Rng) -> Enemy {
    Enemy {
        x: -enemy.width,
        y: LANE_YS[rng.gen_range(0..LANE_YS.len())],
        speed: rng.gen_range(SPEED_MIN..SPEED_MAX) as f64,
        ..enemy.clone()
    }
}

/// Advance one enemy by `delta` seconds; once it travels past the right
/// edge it respawns.  This is the enemy's sole state transition.
pub fn tick_enemy(enemy: &Enemy, delta: f64, canvas_width: f64, rng: &mut impl Rng) -> Enemy {
    let moved = Enemy {
        x: enemy.x + enemy.speed * delta,
        ..enemy.clone()
    };
    if moved.x > canvas_width {
        let fresh = reset_random_position(&moved, rng);
        log::debug!(
            "enemy left the canvas, respawned on lane y={} at {} px/s",
            fresh.y,
            fresh.speed
        );
        fresh
    } else {
        moved
    }
}

// ── Player transitions ───────────────────────────────────────────────────────

/// Back to the centre column of the bottom grass row.
pub fn reset_position(player: &Player) -> Player {
    Player {
        x: PLAYER_STEP_X * 2.0,
        y: PLAYER_STEP_Y * 5.0 - player.height / 4.0,
        ..player.clone()
    }
}

/// Score a crossing if the player stands on the water row.
///
/// The comparison is exact on purpose: the water row is only reachable in
/// whole 85 px steps, so `y` lands on the constant exactly rather than
/// approaching it.
pub fn tick_player(player: &Player) -> Player {
    if player.y == WIN_ROW_Y {
        let points = player.points + 1;
        log::info!("crossing scored, points={}", points);
        reset_position(&Player {
            points,
            ..player.clone()
        })
    } else {
        player.clone()
    }
}

/// Apply one directional step, then clamp to the playfield.
pub fn handle_input(player: &Player, input: Direction) -> Player {
    let (mut x, mut y) = (player.x, player.y);
    match input {
        Direction::Left => x -= PLAYER_STEP_X,
        Direction::Up => y -= PLAYER_STEP_Y,
        Direction::Right => x += PLAYER_STEP_X,
        Direction::Down => y += PLAYER_STEP_Y,
    }
    Player {
        x: x.clamp(0.0, PLAYER_MAX_X),
        y: y.clamp(PLAYER_MIN_Y, PLAYER_MAX_Y),
        ..player.clone()
    }
}

/// Strict-inequality AABB test between the player's and one enemy's
/// bounding boxes.  On overlap the returned player is reset with zero
/// points; otherwise it is unchanged.
pub fn bug_collision(player: &Player, enemy: &Enemy) -> (Player, bool) {
    if overlaps(&player_boundbox(player), &enemy_boundbox(enemy)) {
        log::info!(
            "bug collision at ({:.2}, {:.2}), score reset",
            player.x,
            player.y
        );
        let reset = reset_position(&Player {
            points: 0,
            ..player.clone()
        });
        (reset, true)
    } else {
        (player.clone(), false)
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the whole simulation by `delta` seconds: move every enemy,
/// win-check the player, then test collision against each enemy in order.
/// All randomness comes through `rng` so callers control determinism.
pub fn tick(state: &GameState, delta: f64, rng: &mut impl Rng) -> GameState {
    let enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .map(|e| tick_enemy(e, delta, state.canvas_width, rng))
        .collect();

    let mut player = tick_player(&state.player);
    for enemy in &enemies {
        let (after, hit) = bug_collision(&player, enemy);
        player = after;
        if hit {
            break;
        }
    }

    GameState {
        player,
        enemies,
        canvas_width: state.canvas_width,
    }
}

// ── Select screen ────────────────────────────────────────────────────────────

/// The card hit region is the full sprite rect — no silhouette inset.
pub fn card_hit_region(card: &SkinCard) -> Rect {
    Rect {
        x: card.x,
        y: card.y,
        width: card.width,
        height: card.height,
    }
}

fn contains(rect: &Rect, x: f64, y: f64) -> bool {
    x >= rect.x && x <= rect.x + rect.width && y >= rect.y && y <= rect.y + rect.height
}

/// Refresh one card against the current pointer sample.  Returns the card
/// with its hover flag set, plus `Some(skin)` when it was clicked.
pub fn update_card(card: &SkinCard, pointer: &Pointer) -> (SkinCard, Option<Skin>) {
    let hovering = contains(&card_hit_region(card), pointer.x, pointer.y);
    let picked = if hovering && pointer.click {
        Some(card.skin)
    } else {
        None
    };
    (
        SkinCard {
            hovering,
            ..card.clone()
        },
        picked,
    )
}
