use crossing_game::entities::*;

#[test]
fn entity_clone_and_eq() {
    // Enums derive PartialEq — equality comparisons must work
    assert_eq!(Direction::Left, Direction::Left);
    assert_ne!(Direction::Left, Direction::Right);
    assert_eq!(Skin::Boy, Skin::Boy);
    assert_ne!(Skin::Boy, Skin::Princess);

    // Clone must produce an equal value
    let skin = Skin::CatGirl;
    assert_eq!(skin.clone(), Skin::CatGirl);
}

#[test]
fn skin_all_lists_every_variant_once() {
    assert_eq!(Skin::ALL.len(), 5);
    for (i, a) in Skin::ALL.iter().enumerate() {
        for b in &Skin::ALL[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn pointer_default_is_idle() {
    let p = Pointer::default();
    assert_eq!(p.x, 0.0);
    assert_eq!(p.y, 0.0);
    assert!(!p.click);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        player: Player {
            skin: Skin::Boy,
            x: 200.0,
            y: 382.25,
            width: 101.0,
            height: 171.0,
            points: 0,
        },
        enemies: vec![Enemy {
            x: -101.0,
            y: 42.5,
            width: 101.0,
            height: 171.0,
            speed: 50.0,
        }],
        canvas_width: 505.0,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 0.0;
    cloned.player.points = 99;
    cloned.enemies[0].x = 400.0;
    cloned.enemies.push(Enemy {
        x: 0.0,
        y: 127.5,
        width: 101.0,
        height: 171.0,
        speed: 10.0,
    });

    assert_eq!(original.player.x, 200.0);
    assert_eq!(original.player.points, 0);
    assert_eq!(original.enemies.len(), 1);
    assert_eq!(original.enemies[0].x, -101.0);
}
