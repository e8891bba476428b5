//! Built-in garden shown when no scene file is given.

use cube_garden_core::{
    Age, BounceBehavior, Bounds, CircularBehavior, Color, Controller, ControllerModifiers,
    Direction, Entity, EntityBuilder, GravityBehavior, KeyPhase, Movement, Position, Renderable,
    SineBehavior, Velocity, BODY_SIZE,
};
use cube_garden_system_controller::KeyMap;

use crate::garden::Garden;

const ORBIT_RADIUS: f32 = 100.0;
const PLAYER_FLOOR_OFFSET: f32 = 80.0;
const PLAYER_THRUST: f32 = 0.3;
const JUMPER_THRUST: f32 = 0.6;
const PLAYER_GRAVITY: GravityBehavior = GravityBehavior::new(0.5, 0.1);

/// Six demonstration cubes laid out for a surface of the given size.
pub(crate) fn garden(bounds: Bounds) -> Garden {
    let center_x = bounds.width / 2.0;
    let center_y = bounds.height / 2.0;
    let player_y = bounds.height - PLAYER_FLOOR_OFFSET;

    let entities = vec![
        cube(0.0, 0.0, 2.0, 2.0, Color::from_rgb(0x00, 0x80, 0x00))
            .with(Movement::new(BounceBehavior::default())),
        cube(center_x, center_y, 0.0, 0.0, Color::from_rgb(0x00, 0x00, 0xff)).with(
            Movement::new(CircularBehavior::new(center_x, center_y, ORBIT_RADIUS)),
        ),
        cube(0.0, center_y, 2.0, 0.0, Color::from_rgb(0x80, 0x00, 0x80))
            .with(Movement::new(SineBehavior::new(center_y))),
        cube(100.0, 0.0, 2.0, 0.0, Color::from_rgb(0xff, 0xa5, 0x00))
            .with(Movement::new(GravityBehavior::default())),
        // The later Movement replaces gravity: this cube drifts and bounces.
        cube(100.0, player_y, 0.0, 0.0, Color::from_rgb(0xff, 0xc0, 0xcb))
            .with(Controller::new(
                ControllerModifiers::new().with_all_directions(KeyPhase::Hold, PLAYER_THRUST),
            ))
            .with(Movement::new(PLAYER_GRAVITY))
            .with(Movement::new(BounceBehavior::new(2.0))),
        cube(400.0, player_y, 0.0, 0.0, Color::from_rgb(0xff, 0xff, 0x00))
            .with(Controller::new(
                ControllerModifiers::new()
                    .with_all_directions(KeyPhase::Hold, PLAYER_THRUST)
                    .with(KeyPhase::Hold, Direction::Up, JUMPER_THRUST),
            ))
            .with(Movement::new(PLAYER_GRAVITY)),
    ];

    Garden {
        clear_color: Color::from_rgb(0xff, 0xff, 0xff),
        keymap: KeyMap::default(),
        entities,
    }
}

fn cube(x: f32, y: f32, vx: f32, vy: f32, color: Color) -> EntityBuilder {
    Entity::builder()
        .with(Position::new(x, y))
        .with(Velocity::new(vx, vy))
        .with(Renderable::new(color, BODY_SIZE))
        .with(Age::default())
}
