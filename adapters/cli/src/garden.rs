//! Assembles a world from a garden description and advances it once per frame.

use std::time::Duration;

use cube_garden_core::{Color, EntityBuilder, TickClock};
use cube_garden_rendering::{FrameInput, Scene};
use cube_garden_system_aging::AgingSystem;
use cube_garden_system_controller::{KeyMap, KeyboardControllerSystem};
use cube_garden_system_movement::MovementSystem;
use cube_garden_system_render::RenderSystem;
use cube_garden_world::World;

/// Everything needed to populate a world: backdrop, key bindings and entities.
#[derive(Clone, Debug)]
pub(crate) struct Garden {
    /// Colour the window is cleared to before each frame.
    pub(crate) clear_color: Color,
    /// Key bindings used by the controller system.
    pub(crate) keymap: KeyMap,
    /// Entities in creation order.
    pub(crate) entities: Vec<EntityBuilder>,
}

impl Garden {
    /// Builds a world running controller, movement, aging and render in that order.
    pub(crate) fn into_world(self) -> World {
        let mut world = World::new();
        world.add_system(KeyboardControllerSystem::new(self.keymap));
        world.add_system(MovementSystem::new());
        world.add_system(AgingSystem::new());
        world.add_system(RenderSystem::new());
        for entity in self.entities {
            let _ = world.add_entity(entity);
        }
        world
    }
}

/// Owns the world and its clock between frames.
#[derive(Debug)]
pub(crate) struct GardenDriver {
    world: World,
    clock: TickClock,
    elapsed_ms: f64,
}

impl GardenDriver {
    /// Wraps a populated world.
    pub(crate) fn new(world: World) -> Self {
        Self {
            world,
            clock: TickClock::new(),
            elapsed_ms: 0.0,
        }
    }

    /// Delivers the frame's input, then repaints the scene with one world tick.
    pub(crate) fn frame(&mut self, dt: Duration, input: FrameInput, scene: &mut Scene) {
        self.elapsed_ms += dt.as_secs_f64() * 1_000.0;
        let tick = self.clock.tick(self.elapsed_ms);

        for event in &input.events {
            self.world.ingest(event);
        }

        scene.clear();
        self.world.update(tick, input.bounds, scene);
    }
}
