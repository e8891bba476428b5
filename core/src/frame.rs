use crate::Color;

/// Per-tick timing handed read-only to every system.
///
/// Both values are measured in milliseconds. Behaviors integrate by fixed per-tick
/// increments and mostly ignore `delta_time`, so motion speed follows the display
/// refresh rate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickState {
    /// Wall-clock timestamp of the tick.
    pub time: f64,
    /// Milliseconds elapsed since the previous tick.
    pub delta_time: f64,
}

impl TickState {
    /// Creates a tick state from explicit values.
    #[must_use]
    pub const fn new(time: f64, delta_time: f64) -> Self {
        Self { time, delta_time }
    }
}

/// Derives successive [`TickState`] values from a monotonic millisecond clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickClock {
    previous: Option<f64>,
}

impl TickClock {
    /// Creates a clock that has not observed any tick yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { previous: None }
    }

    /// Records a tick at `now` and returns its state.
    ///
    /// The first tick reports a zero delta. A clock that runs backwards also
    /// reports zero rather than a negative delta.
    pub fn tick(&mut self, now: f64) -> TickState {
        let delta_time = self
            .previous
            .map_or(0.0, |previous| (now - previous).max(0.0));
        self.previous = Some(now);
        TickState::new(now, delta_time)
    }
}

/// Dimensions of the drawable surface that behaviors bounce inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Width of the world in surface units.
    pub width: f32,
    /// Height of the world in surface units.
    pub height: f32,
    /// Width of the host display, used by wrapping behaviors.
    pub display_width: f32,
}

impl Bounds {
    /// Creates bounds whose display width matches the world width.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            display_width: width,
        }
    }

    /// Overrides the display width reported to wrapping behaviors.
    #[must_use]
    pub const fn with_display_width(mut self, display_width: f32) -> Self {
        self.display_width = display_width;
        self
    }
}

/// Paint target exposing the single primitive the render system needs.
pub trait PaintSurface {
    /// Fills a `size`×`size` square whose top-left corner sits at `(x, y)`.
    fn fill_square(&mut self, x: f32, y: f32, size: f32, color: Color);
}
