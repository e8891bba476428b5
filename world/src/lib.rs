#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state and tick scheduling for the Cube Garden.
//!
//! The world owns every entity and every registered system. Each call to
//! [`World::update`] runs the systems' update pass in registration order against
//! the full entity list, then runs every system's end-of-tick cleanup. Order is
//! part of the contract: a controller registered before movement affects the
//! same tick's motion, and movement registered before rendering affects the same
//! tick's paint.

use std::fmt;

use cube_garden_core::{
    Bounds, Entity, EntityBuilder, EntityId, InputEvent, PaintSurface, System, SystemContext,
    TickState, WELCOME_BANNER,
};

/// Represents the authoritative Cube Garden world state.
pub struct World {
    banner: &'static str,
    entities: Vec<Entity>,
    systems: Vec<Box<dyn System>>,
    next_entity_id: u64,
    tick_index: u64,
}

impl World {
    /// Creates an empty world with no entities and no systems.
    #[must_use]
    pub fn new() -> Self {
        Self {
            banner: WELCOME_BANNER,
            entities: Vec::new(),
            systems: Vec::new(),
            next_entity_id: 0,
            tick_index: 0,
        }
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId::new(self.next_entity_id);
        self.next_entity_id += 1;
        id
    }

    /// Allocates an identifier, registers an empty entity and returns it for setup.
    pub fn create_entity(&mut self) -> &mut Entity {
        let id = self.allocate_id();
        log::debug!("created entity {}", id.get());
        let index = self.entities.len();
        self.entities.push(Entity::new(id));
        &mut self.entities[index]
    }

    /// Registers an entity described by the builder and returns its identifier.
    pub fn add_entity(&mut self, builder: EntityBuilder) -> EntityId {
        let id = self.allocate_id();
        let entity = builder.build(id);
        log::debug!(
            "added entity {} with {} component(s)",
            id.get(),
            entity.len()
        );
        self.entities.push(entity);
        id
    }

    /// Removes the entity and returns it. Its identifier is never handed out again.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.index_of(id)?;
        log::debug!("despawned entity {}", id.get());
        Some(self.entities.remove(index))
    }

    /// Appends a system to the update order and initialises it.
    pub fn add_system<S>(&mut self, system: S)
    where
        S: System + 'static,
    {
        let mut system: Box<dyn System> = Box::new(system);
        system.init();
        log::debug!(
            "registered system {} at position {}",
            system.name(),
            self.systems.len()
        );
        self.systems.push(system);
    }

    /// Mutable access to a live entity.
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        let index = self.index_of(id)?;
        self.entities.get_mut(index)
    }

    /// Forwards an input event to every system in registration order.
    ///
    /// Events delivered between ticks accumulate in the systems' own state and
    /// take effect on the next [`World::update`].
    pub fn ingest(&mut self, event: &InputEvent) {
        for system in &mut self.systems {
            system.handle_input(event);
        }
    }

    /// Runs one tick: every system's update in registration order, then every
    /// system's cleanup.
    pub fn update(&mut self, tick: TickState, bounds: Bounds, surface: &mut dyn PaintSurface) {
        self.tick_index = self.tick_index.saturating_add(1);

        let Self {
            entities, systems, ..
        } = self;
        for system in systems.iter_mut() {
            let mut context = SystemContext {
                entities: entities.as_mut_slice(),
                tick,
                bounds,
                surface: &mut *surface,
            };
            system.update(&mut context);
        }

        for system in systems.iter_mut() {
            system.cleanup();
        }
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities
            .binary_search_by_key(&id, Entity::id)
            .ok()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("entities", &self.entities.len())
            .field("systems", &query::system_names(self))
            .field("next_entity_id", &self.next_entity_id)
            .field("tick_index", &self.tick_index)
            .finish()
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use cube_garden_core::{Entity, EntityId};

    /// Retrieves the welcome banner that adapters may display.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Every live entity in creation order.
    #[must_use]
    pub fn entities(world: &World) -> &[Entity] {
        &world.entities
    }

    /// Looks up a live entity by identifier.
    #[must_use]
    pub fn entity(world: &World, id: EntityId) -> Option<&Entity> {
        let index = world.index_of(id)?;
        world.entities.get(index)
    }

    /// Names of the registered systems in update order.
    #[must_use]
    pub fn system_names(world: &World) -> Vec<&'static str> {
        world.systems.iter().map(|system| system.name()).collect()
    }

    /// Number of completed update passes.
    #[must_use]
    pub fn tick_index(world: &World) -> u64 {
        world.tick_index
    }
}
