use crate::{Bounds, Entity, InputEvent, PaintSurface, TickState};

/// Everything a system sees during one update pass.
pub struct SystemContext<'a> {
    /// Every live entity, in creation order.
    pub entities: &'a mut [Entity],
    /// Timing of the current tick.
    pub tick: TickState,
    /// Surface dimensions for the current tick.
    pub bounds: Bounds,
    /// Paint target for systems that draw.
    pub surface: &'a mut dyn PaintSurface,
}

/// Routine run once per tick over every entity, selecting by component presence.
///
/// The world drives the lifecycle: [`System::init`] once when registered,
/// [`System::handle_input`] for every event the driver ingests,
/// [`System::update`] once per tick in registration order, then
/// [`System::cleanup`] once per tick after every system has updated.
pub trait System {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Prepares the system when it is added to a world.
    fn init(&mut self) {}

    /// Observes an input event delivered between ticks.
    fn handle_input(&mut self, _event: &InputEvent) {}

    /// Runs the system over the entities for the current tick.
    fn update(&mut self, context: &mut SystemContext<'_>);

    /// Finishes the tick after every system has updated.
    fn cleanup(&mut self) {}
}
