use std::collections::BTreeMap;

use crate::{
    Component, ComponentData, ComponentKind, Controller, Movement, Position, Velocity,
};

/// Unique identifier allocated to an entity by its world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl EntityId {
    /// Creates a new entity identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

/// Identifier plus a bag of components keyed by their type tag.
///
/// Adding a component whose tag is already present replaces the stored one. Reads
/// never mutate the entity.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    id: EntityId,
    components: BTreeMap<ComponentKind, Component>,
}

impl Entity {
    /// Creates an empty entity carrying an identifier allocated by a world.
    #[must_use]
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            components: BTreeMap::new(),
        }
    }

    /// Starts describing an entity that a world has not allocated yet.
    #[must_use]
    pub fn builder() -> EntityBuilder {
        EntityBuilder::default()
    }

    /// Identifier of the entity.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Stores the component under its tag, replacing any previous one.
    pub fn add_component(&mut self, component: impl Into<Component>) {
        let _ = self.replace_component(component);
    }

    /// Stores the component under its tag and returns the component it displaced.
    pub fn replace_component(&mut self, component: impl Into<Component>) -> Option<Component> {
        let component = component.into();
        self.components.insert(component.kind(), component)
    }

    /// Removes and returns the component stored under the tag, if any.
    pub fn remove_component(&mut self, kind: ComponentKind) -> Option<Component> {
        self.components.remove(&kind)
    }

    /// Component stored under the tag, if any.
    #[must_use]
    pub fn component(&self, kind: ComponentKind) -> Option<&Component> {
        self.components.get(&kind)
    }

    /// Reports whether a component is stored under the tag.
    #[must_use]
    pub fn has_component(&self, kind: ComponentKind) -> bool {
        self.components.contains_key(&kind)
    }

    /// Reports whether components are stored under every listed tag.
    #[must_use]
    pub fn has_all(&self, kinds: &[ComponentKind]) -> bool {
        kinds.iter().all(|kind| self.has_component(*kind))
    }

    /// Borrows the component of type `T`, if present.
    #[must_use]
    pub fn get<T: ComponentData>(&self) -> Option<&T> {
        self.components.get(&T::KIND).and_then(T::from_component)
    }

    /// Mutably borrows the component of type `T`, if present.
    #[must_use]
    pub fn get_mut<T: ComponentData>(&mut self) -> Option<&mut T> {
        self.components
            .get_mut(&T::KIND)
            .and_then(T::from_component_mut)
    }

    /// Tags of every stored component.
    pub fn kinds(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        self.components.keys().copied()
    }

    /// Number of stored components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Reports whether the entity holds no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Borrows position, velocity and movement together when all three exist.
    #[must_use]
    pub fn motion_parts_mut(&mut self) -> Option<(&mut Position, &mut Velocity, &mut Movement)> {
        let mut position = None;
        let mut velocity = None;
        let mut movement = None;
        for component in self.components.values_mut() {
            match component {
                Component::Position(inner) => position = Some(inner),
                Component::Velocity(inner) => velocity = Some(inner),
                Component::Movement(inner) => movement = Some(inner),
                _ => {}
            }
        }
        Some((position?, velocity?, movement?))
    }

    /// Borrows velocity mutably alongside the controller when both exist.
    #[must_use]
    pub fn control_parts_mut(&mut self) -> Option<(&mut Velocity, &Controller)> {
        let mut velocity = None;
        let mut controller = None;
        for component in self.components.values_mut() {
            match component {
                Component::Velocity(inner) => velocity = Some(inner),
                Component::Controller(inner) => controller = Some(&*inner),
                _ => {}
            }
        }
        Some((velocity?, controller?))
    }
}

/// Component list for an entity that has not been registered with a world.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntityBuilder {
    components: Vec<Component>,
}

impl EntityBuilder {
    /// Appends a component; later components replace earlier ones with the same tag.
    #[must_use]
    pub fn with(mut self, component: impl Into<Component>) -> Self {
        self.components.push(component.into());
        self
    }

    /// Finishes the entity using an identifier allocated by a world.
    #[must_use]
    pub fn build(self, id: EntityId) -> Entity {
        let mut entity = Entity::new(id);
        for component in self.components {
            entity.add_component(component);
        }
        entity
    }
}
