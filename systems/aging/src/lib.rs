#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Aging system counting ticks and elapsed milliseconds per entity.

use cube_garden_core::{Age, System, SystemContext};

/// System advancing every [`Age`] component once per tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct AgingSystem;

impl AgingSystem {
    /// Creates the aging system.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl System for AgingSystem {
    fn name(&self) -> &'static str {
        "aging"
    }

    fn update(&mut self, context: &mut SystemContext<'_>) {
        let delta_time = context.tick.delta_time;
        for entity in context.entities.iter_mut() {
            if let Some(age) = entity.get_mut::<Age>() {
                age.age = age.age.saturating_add(1);
                age.real_age += delta_time;
            }
        }
    }
}
