//! Built-in reference levels
//!
//! Three hand-tuned levels on a shared 1280x720 playfield. Embedders are
//! free to supply their own [`LevelGeometry`]; these exist so the crate is
//! playable out of the box and so tests have stable geometry to run against.

use std::f32::consts::PI;

use glam::Vec2;

use crate::sim::{Bounds, Coin, Enemy, LevelGeometry, Platform, PlatformKind};

/// Look up a built-in level by its 1-based index
pub fn builtin(index: u32) -> Option<LevelGeometry> {
    match index {
        1 => Some(meadow_crossing()),
        2 => Some(spike_gallery()),
        3 => Some(bell_tower()),
        _ => None,
    }
}

const LEVEL_W: f32 = 1280.0;
const LEVEL_H: f32 = 720.0;

fn bounds() -> Bounds {
    Bounds { w: LEVEL_W, h: LEVEL_H }
}

/// Side walls and ceiling shared by every level; floors differ per level
fn side_walls_and_ceiling() -> Vec<Platform> {
    vec![
        Platform::new(-20.0, 0.0, 20.0, LEVEL_H),
        Platform::new(LEVEL_W, 0.0, 20.0, LEVEL_H),
        Platform::new(0.0, -100.0, LEVEL_W, 100.0),
    ]
}

/// Evenly spaced coins along a circular arc, endpoints inclusive
fn coin_arc(center: Vec2, radius: f32, start: f32, end: f32, count: usize) -> Vec<Coin> {
    (0..count)
        .map(|i| {
            let t = start + (end - start) * i as f32 / (count - 1) as f32;
            Coin::new(center + Vec2::new(t.cos(), t.sin()) * radius)
        })
        .collect()
}

/// Level 1: flat run with three hop platforms and one guarded coin arc
fn meadow_crossing() -> LevelGeometry {
    let mut platforms = vec![
        Platform::new(0.0, 700.0, LEVEL_W, 20.0),
        Platform::new(300.0, 400.0, 100.0, 20.0),
        Platform::new(500.0, 250.0, 200.0, 20.0),
        Platform::new(800.0, 400.0, 100.0, 20.0),
    ];
    platforms.extend(side_walls_and_ceiling());

    LevelGeometry {
        platforms,
        coins: coin_arc(Vec2::new(600.0, 250.0), 150.0, PI * 0.2, PI * 0.8, 5),
        enemies: vec![Enemy::turret(Vec2::new(550.0, 230.0), 0)],
        spawn_point: Vec2::new(100.0, 620.0),
        exit_point: Vec2::new(1180.0, 620.0),
        bounds: bounds(),
    }
}

/// Level 2: spike pit crossing, the floor is mostly hazard
fn spike_gallery() -> LevelGeometry {
    let mut platforms = vec![
        Platform::new(0.0, 700.0, 300.0, 20.0),
        // End platform, marked as the exit perch for authoring tools
        Platform { kind: PlatformKind::Exit, ..Platform::new(980.0, 200.0, 300.0, 20.0) },
        Platform::new(400.0, 0.0, 40.0, 300.0),
        Platform::new(800.0, 0.0, 40.0, 400.0),
        Platform::hazard(300.0, 710.0, 980.0, 10.0),
    ];
    platforms.extend(side_walls_and_ceiling());

    LevelGeometry {
        platforms,
        coins: vec![
            Coin::new(Vec2::new(420.0, 400.0)),
            Coin::new(Vec2::new(600.0, 500.0)),
            Coin::new(Vec2::new(820.0, 500.0)),
            Coin::new(Vec2::new(1000.0, 300.0)),
        ],
        enemies: vec![
            Enemy::turret(Vec2::new(420.0, 350.0), 0),
            Enemy::turret(Vec2::new(820.0, 450.0), 60),
        ],
        spawn_point: Vec2::new(50.0, 620.0),
        exit_point: Vec2::new(1230.0, 150.0),
        bounds: bounds(),
    }
}

/// Level 3: vertical climb under a wide coin arc, exit at the top
fn bell_tower() -> LevelGeometry {
    let mut platforms = vec![
        Platform::new(0.0, 700.0, LEVEL_W, 20.0),
        Platform::new(200.0, 500.0, 100.0, 20.0),
        Platform::new(980.0, 500.0, 100.0, 20.0),
        Platform::new(400.0, 300.0, 20.0, 20.0),
        Platform::new(860.0, 300.0, 20.0, 20.0),
        Platform::new(590.0, 200.0, 100.0, 20.0),
    ];
    platforms.extend(side_walls_and_ceiling());

    let mut coins = coin_arc(Vec2::new(640.0, 500.0), 300.0, PI + 0.2, 2.0 * PI - 0.2, 7);
    coins.push(Coin::new(Vec2::new(640.0, 250.0)));

    LevelGeometry {
        platforms,
        coins,
        enemies: vec![
            Enemy::turret(Vec2::new(250.0, 480.0), 0),
            Enemy::turret(Vec2::new(1030.0, 480.0), 60),
        ],
        spawn_point: Vec2::new(640.0, 660.0),
        exit_point: Vec2::new(640.0, 100.0),
        bounds: bounds(),
    }
}
