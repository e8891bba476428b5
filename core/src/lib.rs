#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Cube Garden engine.
//!
//! This crate defines the entity/component data model, the movement behaviors
//! carried by entities, and the [`System`] lifecycle the world drives each tick.
//! Entities are identifiers plus a tag-keyed bag of [`Component`] values; systems
//! select entities by component presence and mutate component data in place. The
//! crate performs no I/O: bounds, tick timing, input events and the paint surface
//! are all handed in by the driver.

pub mod behaviors;
mod color;
mod components;
mod entity;
mod frame;
mod input;
mod system;

pub use behaviors::{
    BehaviorKind, BounceBehavior, CircularBehavior, GravityBehavior, MovementBehavior,
    SineBehavior, BODY_SIZE,
};
pub use color::{Color, ColorParseError};
pub use components::{
    Age, Component, ComponentData, ComponentKind, Controller, Movement, Position, Renderable,
    Velocity,
};
pub use entity::{Entity, EntityBuilder, EntityId};
pub use frame::{Bounds, PaintSurface, TickClock, TickState};
pub use input::{ControllerModifiers, Direction, InputEvent, KeyPhase};
pub use system::{System, SystemContext};

/// Canonical banner logged when the garden boots.
pub const WELCOME_BANNER: &str = "Welcome to the Cube Garden.";
