#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Render system that paints every visible entity as a filled square.

use cube_garden_core::{Position, Renderable, System, SystemContext};

/// System painting each entity with Position and Renderable onto the tick's surface.
///
/// Squares are emitted in entity creation order with the top-left corner at the
/// entity position. Clearing the surface between frames is left to the driver.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderSystem;

impl RenderSystem {
    /// Creates the render system.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl System for RenderSystem {
    fn name(&self) -> &'static str {
        "render"
    }

    fn update(&mut self, context: &mut SystemContext<'_>) {
        for entity in context.entities.iter() {
            let (Some(position), Some(renderable)) =
                (entity.get::<Position>(), entity.get::<Renderable>())
            else {
                continue;
            };
            context
                .surface
                .fill_square(position.x, position.y, renderable.size, renderable.color);
        }
    }
}
