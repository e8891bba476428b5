#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Movement system that advances every moving entity by its behavior.

use cube_garden_core::{System, SystemContext};

/// System invoking each entity's movement behavior once per tick.
///
/// Entities lacking Position, Velocity or Movement are left untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct MovementSystem;

impl MovementSystem {
    /// Creates the movement system.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl System for MovementSystem {
    fn name(&self) -> &'static str {
        "movement"
    }

    fn update(&mut self, context: &mut SystemContext<'_>) {
        let bounds = context.bounds;
        for entity in context.entities.iter_mut() {
            if let Some((position, velocity, movement)) = entity.motion_parts_mut() {
                movement.behavior.update(position, velocity, bounds);
            }
        }
    }
}
