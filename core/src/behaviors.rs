//! Movement strategies carried by the [`Movement`](crate::Movement) component.
//!
//! Each behavior is called once per tick for the entity that owns it and mutates
//! the position and velocity it is handed. Behaviors only ever touch those two
//! values and their own private state; they never look at other entities and never
//! fail. Degenerate bounds (zero or negative extents) simply produce degenerate
//! motion.

use std::{f32::consts::TAU, fmt};

use crate::{Bounds, Position, Velocity};

/// Edge length assumed for bodies when a behavior tests collisions.
pub const BODY_SIZE: f32 = 10.0;

const DEFAULT_CIRCULAR_SPEED: f32 = 0.02;
const DEFAULT_SINE_AMPLITUDE: f32 = 100.0;
const DEFAULT_SINE_FREQUENCY: f32 = 0.005;
const DEFAULT_GRAVITY: f32 = 0.5;
const DEFAULT_GRAVITY_BOUNCE: f32 = 0.7;

/// Name of a behavior variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BehaviorKind {
    /// See [`BounceBehavior`].
    Bounce,
    /// See [`CircularBehavior`].
    Circular,
    /// See [`SineBehavior`].
    Sine,
    /// See [`GravityBehavior`].
    Gravity,
}

impl fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bounce => "bounce",
            Self::Circular => "circular",
            Self::Sine => "sine",
            Self::Gravity => "gravity",
        };
        f.write_str(name)
    }
}

/// Per-entity movement strategy.
#[derive(Clone, Debug, PartialEq)]
pub enum MovementBehavior {
    /// Straight-line motion reflecting off the bounds.
    Bounce(BounceBehavior),
    /// Orbit around a fixed center.
    Circular(CircularBehavior),
    /// Horizontal drift with a sinusoidal height, wrapping across the display.
    Sine(SineBehavior),
    /// Constant downward acceleration with damped floor and wall bounces.
    Gravity(GravityBehavior),
}

impl MovementBehavior {
    /// Advances the behavior by one tick.
    pub fn update(&mut self, position: &mut Position, velocity: &mut Velocity, bounds: Bounds) {
        match self {
            Self::Bounce(behavior) => behavior.update(position, velocity, bounds),
            Self::Circular(behavior) => behavior.update(position, velocity),
            Self::Sine(behavior) => behavior.update(position, velocity, bounds),
            Self::Gravity(behavior) => behavior.update(position, velocity, bounds),
        }
    }

    /// Variant of this behavior.
    #[must_use]
    pub const fn kind(&self) -> BehaviorKind {
        match self {
            Self::Bounce(_) => BehaviorKind::Bounce,
            Self::Circular(_) => BehaviorKind::Circular,
            Self::Sine(_) => BehaviorKind::Sine,
            Self::Gravity(_) => BehaviorKind::Gravity,
        }
    }
}

impl From<BounceBehavior> for MovementBehavior {
    fn from(behavior: BounceBehavior) -> Self {
        Self::Bounce(behavior)
    }
}

impl From<CircularBehavior> for MovementBehavior {
    fn from(behavior: CircularBehavior) -> Self {
        Self::Circular(behavior)
    }
}

impl From<SineBehavior> for MovementBehavior {
    fn from(behavior: SineBehavior) -> Self {
        Self::Sine(behavior)
    }
}

impl From<GravityBehavior> for MovementBehavior {
    fn from(behavior: GravityBehavior) -> Self {
        Self::Gravity(behavior)
    }
}

/// Integrates velocity and reflects each axis off the bounds.
///
/// A reflection loses `decay` units of speed, never dropping below zero, so a
/// decaying body eventually comes to rest against an edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BounceBehavior {
    decay: f32,
    body_size: f32,
}

impl BounceBehavior {
    /// Creates a bounce behavior losing `decay` units of speed per reflection.
    #[must_use]
    pub const fn new(decay: f32) -> Self {
        Self {
            decay,
            body_size: BODY_SIZE,
        }
    }

    /// Overrides the body size used to detect the far edges.
    #[must_use]
    pub const fn with_body_size(mut self, body_size: f32) -> Self {
        self.body_size = body_size;
        self
    }

    /// Speed lost on every reflection.
    #[must_use]
    pub const fn decay(&self) -> f32 {
        self.decay
    }

    /// Body size used to detect the far edges.
    #[must_use]
    pub const fn body_size(&self) -> f32 {
        self.body_size
    }

    fn update(&self, position: &mut Position, velocity: &mut Velocity, bounds: Bounds) {
        position.x += velocity.x;
        position.y += velocity.y;

        bounce_axis(
            &mut position.x,
            &mut velocity.x,
            bounds.width,
            self.body_size,
            self.decay,
        );
        bounce_axis(
            &mut position.y,
            &mut velocity.y,
            bounds.height,
            self.body_size,
            self.decay,
        );
    }
}

impl Default for BounceBehavior {
    fn default() -> Self {
        Self::new(0.0)
    }
}

fn bounce_axis(position: &mut f32, velocity: &mut f32, extent: f32, size: f32, decay: f32) {
    if *position + size <= extent && *position >= 0.0 {
        return;
    }

    if *position + size > extent {
        *position = extent - size;
    }
    if *position < 0.0 {
        *position = 0.0;
    }

    *velocity = if *velocity < 0.0 {
        (-*velocity - decay).max(0.0)
    } else {
        (-*velocity + decay).min(0.0)
    };
}

/// Places the body on a circle, advancing a private phase angle every tick.
///
/// The incoming velocity is ignored for positioning and overwritten with the
/// tangential velocity of the orbit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircularBehavior {
    center: Position,
    radius: f32,
    speed: f32,
    angle: f32,
}

impl CircularBehavior {
    /// Creates an orbit around `(center_x, center_y)` at the default angular speed.
    #[must_use]
    pub const fn new(center_x: f32, center_y: f32, radius: f32) -> Self {
        Self {
            center: Position::new(center_x, center_y),
            radius,
            speed: DEFAULT_CIRCULAR_SPEED,
            angle: 0.0,
        }
    }

    /// Overrides the angular speed in radians per tick.
    #[must_use]
    pub const fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Center of the orbit.
    #[must_use]
    pub const fn center(&self) -> Position {
        self.center
    }

    /// Radius of the orbit.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Angular speed in radians per tick.
    #[must_use]
    pub const fn speed(&self) -> f32 {
        self.speed
    }

    /// Current phase angle, kept within `[0, 2π)`.
    #[must_use]
    pub const fn angle(&self) -> f32 {
        self.angle
    }

    fn update(&mut self, position: &mut Position, velocity: &mut Velocity) {
        self.angle = (self.angle + self.speed).rem_euclid(TAU);
        let (sin, cos) = self.angle.sin_cos();

        position.x = self.center.x + cos * self.radius;
        position.y = self.center.y + sin * self.radius;

        velocity.x = -sin * self.speed * self.radius;
        velocity.y = cos * self.speed * self.radius;
    }
}

/// Drifts horizontally while the height follows a sine of elapsed ticks.
///
/// The height is recomputed from the tick counter every update rather than
/// integrated. Leaving the display horizontally teleports the body to the
/// opposite margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SineBehavior {
    start_y: f32,
    amplitude: f32,
    frequency: f32,
    body_size: f32,
    time: u64,
}

impl SineBehavior {
    /// Creates a sine wave centered on `start_y` with the default shape.
    #[must_use]
    pub const fn new(start_y: f32) -> Self {
        Self {
            start_y,
            amplitude: DEFAULT_SINE_AMPLITUDE,
            frequency: DEFAULT_SINE_FREQUENCY,
            body_size: BODY_SIZE,
            time: 0,
        }
    }

    /// Overrides the peak vertical displacement.
    #[must_use]
    pub const fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Overrides the angular frequency in radians per tick.
    #[must_use]
    pub const fn with_frequency(mut self, frequency: f32) -> Self {
        self.frequency = frequency;
        self
    }

    /// Overrides the wrap margin.
    #[must_use]
    pub const fn with_body_size(mut self, body_size: f32) -> Self {
        self.body_size = body_size;
        self
    }

    /// Number of ticks the behavior has been updated.
    #[must_use]
    pub const fn time(&self) -> u64 {
        self.time
    }

    fn update(&mut self, position: &mut Position, velocity: &Velocity, bounds: Bounds) {
        self.time = self.time.saturating_add(1);
        position.x += velocity.x;
        position.y = self.start_y + (self.time as f32 * self.frequency).sin() * self.amplitude;

        let margin = self.body_size;
        if position.x < -margin {
            position.x = bounds.display_width + margin;
        }
        if position.x > bounds.display_width + margin {
            position.x = -margin;
        }
    }
}

/// Accelerates downward and bounces off the floor and side walls.
///
/// Floor hits clamp the body onto the floor; wall hits only reverse the
/// horizontal velocity. Both are damped by the same `bounce` coefficient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GravityBehavior {
    gravity: f32,
    bounce: f32,
    body_size: f32,
}

impl GravityBehavior {
    /// Creates a gravity behavior with explicit acceleration and restitution.
    #[must_use]
    pub const fn new(gravity: f32, bounce: f32) -> Self {
        Self {
            gravity,
            bounce,
            body_size: BODY_SIZE,
        }
    }

    /// Overrides the body size used to detect the floor and right wall.
    #[must_use]
    pub const fn with_body_size(mut self, body_size: f32) -> Self {
        self.body_size = body_size;
        self
    }

    /// Downward acceleration added to the velocity every tick.
    #[must_use]
    pub const fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Fraction of speed kept after hitting the floor or a wall.
    #[must_use]
    pub const fn bounce(&self) -> f32 {
        self.bounce
    }

    fn update(&self, position: &mut Position, velocity: &mut Velocity, bounds: Bounds) {
        velocity.y += self.gravity;
        position.x += velocity.x;
        position.y += velocity.y;

        if position.y + self.body_size > bounds.height {
            position.y = bounds.height - self.body_size;
            velocity.y = -velocity.y * self.bounce;
        }

        if position.x + self.body_size > bounds.width || position.x < 0.0 {
            velocity.x = -velocity.x * self.bounce;
        }
    }
}

impl Default for GravityBehavior {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVITY, DEFAULT_GRAVITY_BOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn bounce_clamps_and_reflects_far_edge() {
        let mut behavior = MovementBehavior::from(BounceBehavior::new(1.0));
        let mut position = Position::new(95.0, 50.0);
        let mut velocity = Velocity::new(4.0, 0.0);

        behavior.update(&mut position, &mut velocity, Bounds::new(100.0, 100.0));

        assert_close(position.x, 100.0 - BODY_SIZE);
        assert_close(velocity.x, -3.0);
        assert_close(position.y, 50.0);
        assert_close(velocity.y, 0.0);
    }

    #[test]
    fn bounce_reflects_off_zero_and_floors_decay() {
        let mut behavior = MovementBehavior::from(BounceBehavior::new(5.0));
        let mut position = Position::new(1.0, 1.0);
        let mut velocity = Velocity::new(-3.0, -8.0);

        behavior.update(&mut position, &mut velocity, Bounds::new(100.0, 100.0));

        assert_close(position.x, 0.0);
        assert_close(position.y, 0.0);
        assert_close(velocity.x, 0.0);
        assert_close(velocity.y, 3.0);
    }

    #[test]
    fn bounce_positive_reflection_floors_at_zero() {
        let mut behavior = MovementBehavior::from(BounceBehavior::new(10.0));
        let mut position = Position::new(89.0, 10.0);
        let mut velocity = Velocity::new(2.0, 0.0);

        behavior.update(&mut position, &mut velocity, Bounds::new(100.0, 100.0));

        assert_close(position.x, 90.0);
        assert_close(velocity.x, 0.0);
    }

    #[test]
    fn bounce_handles_corner_in_one_tick() {
        let mut behavior = MovementBehavior::from(BounceBehavior::default());
        let mut position = Position::new(88.0, 88.0);
        let mut velocity = Velocity::new(5.0, 5.0);

        behavior.update(&mut position, &mut velocity, Bounds::new(100.0, 100.0));

        assert_close(position.x, 90.0);
        assert_close(position.y, 90.0);
        assert_close(velocity.x, -5.0);
        assert_close(velocity.y, -5.0);
    }

    #[test]
    fn bounce_leaves_other_axis_alone() {
        let mut behavior = MovementBehavior::from(BounceBehavior::default());
        let mut position = Position::new(50.0, 88.0);
        let mut velocity = Velocity::new(3.0, 5.0);

        behavior.update(&mut position, &mut velocity, Bounds::new(100.0, 100.0));

        assert_close(position.x, 53.0);
        assert_close(velocity.x, 3.0);
        assert_close(velocity.y, -5.0);
    }

    #[test]
    fn circular_stays_on_circle_and_overwrites_velocity() {
        let speed = 0.3;
        let radius = 25.0;
        let mut behavior = CircularBehavior::new(40.0, 60.0, radius).with_speed(speed);
        let mut position = Position::new(0.0, 0.0);
        let mut velocity = Velocity::new(99.0, -99.0);

        for _ in 0..50 {
            behavior.update(&mut position, &mut velocity);
            let dx = position.x - 40.0;
            let dy = position.y - 60.0;
            assert_close(dx.hypot(dy), radius);
        }

        let (sin, cos) = behavior.angle().sin_cos();
        assert_close(velocity.x, -sin * speed * radius);
        assert_close(velocity.y, cos * speed * radius);
    }

    #[test]
    fn circular_angle_tracks_tick_count() {
        let speed = 0.3;
        let mut behavior =
            MovementBehavior::from(CircularBehavior::new(0.0, 0.0, 10.0).with_speed(speed));
        let mut position = Position::new(0.0, 0.0);
        let mut velocity = Velocity::new(0.0, 0.0);

        for ticks in 1..=40_u32 {
            behavior.update(&mut position, &mut velocity, Bounds::new(0.0, 0.0));
            let MovementBehavior::Circular(circular) = &behavior else {
                panic!("behavior changed variant");
            };
            let expected = (ticks as f32 * speed).rem_euclid(TAU);
            assert_close(circular.angle(), expected);
            assert_close(position.x.hypot(position.y), 10.0);
        }
    }

    #[test]
    fn sine_recomputes_height_from_elapsed_ticks() {
        let mut behavior = MovementBehavior::from(
            SineBehavior::new(200.0)
                .with_amplitude(50.0)
                .with_frequency(0.5),
        );
        let mut position = Position::new(10.0, 0.0);
        let mut velocity = Velocity::new(2.0, 7.0);
        let bounds = Bounds::new(500.0, 500.0);

        behavior.update(&mut position, &mut velocity, bounds);
        assert_close(position.x, 12.0);
        assert_close(position.y, 200.0 + 0.5_f32.sin() * 50.0);

        behavior.update(&mut position, &mut velocity, bounds);
        assert_close(position.x, 14.0);
        assert_close(position.y, 200.0 + 1.0_f32.sin() * 50.0);
        assert_close(velocity.y, 7.0);
    }

    #[test]
    fn sine_wraps_around_display_width() {
        let bounds = Bounds::new(100.0, 100.0).with_display_width(300.0);

        let mut rightward = MovementBehavior::from(SineBehavior::new(0.0));
        let mut position = Position::new(309.0, 0.0);
        let mut velocity = Velocity::new(2.0, 0.0);
        rightward.update(&mut position, &mut velocity, bounds);
        assert_close(position.x, -BODY_SIZE);

        let mut leftward = MovementBehavior::from(SineBehavior::new(0.0));
        let mut position = Position::new(-9.0, 0.0);
        let mut velocity = Velocity::new(-2.0, 0.0);
        leftward.update(&mut position, &mut velocity, bounds);
        assert_close(position.x, 300.0 + BODY_SIZE);
    }

    #[test]
    fn gravity_accelerates_in_free_fall() {
        let mut behavior = MovementBehavior::from(GravityBehavior::new(0.5, 0.7));
        let mut position = Position::new(100.0, 20.0);
        let mut velocity = Velocity::new(0.0, 0.0);

        behavior.update(&mut position, &mut velocity, Bounds::new(500.0, 500.0));

        assert_close(velocity.y, 0.5);
        assert_close(position.y, 20.5);
        assert_close(position.x, 100.0);
    }

    #[test]
    fn gravity_clamps_to_floor_and_damps() {
        let mut behavior = MovementBehavior::from(GravityBehavior::new(0.5, 0.7));
        let mut position = Position::new(100.0, 488.0);
        let mut velocity = Velocity::new(0.0, 4.0);

        behavior.update(&mut position, &mut velocity, Bounds::new(500.0, 500.0));

        assert_close(position.y, 500.0 - BODY_SIZE);
        assert_close(velocity.y, -(4.0 + 0.5) * 0.7);
    }

    #[test]
    fn gravity_damps_walls_with_same_coefficient() {
        let mut behavior = MovementBehavior::from(GravityBehavior::new(0.0, 0.5));
        let mut position = Position::new(489.0, 100.0);
        let mut velocity = Velocity::new(4.0, 0.0);

        behavior.update(&mut position, &mut velocity, Bounds::new(500.0, 500.0));

        assert_close(position.x, 493.0);
        assert_close(velocity.x, -2.0);

        let mut position = Position::new(1.0, 100.0);
        let mut velocity = Velocity::new(-4.0, 0.0);
        behavior.update(&mut position, &mut velocity, Bounds::new(500.0, 500.0));
        assert_close(velocity.x, 2.0);
    }

    #[test]
    fn degenerate_bounds_do_not_panic() {
        let bounds = Bounds::new(0.0, -5.0);
        let mut behaviors = [
            MovementBehavior::from(BounceBehavior::new(1.0)),
            MovementBehavior::from(GravityBehavior::default()),
            MovementBehavior::from(SineBehavior::new(0.0)),
            MovementBehavior::from(CircularBehavior::new(0.0, 0.0, -3.0)),
        ];

        for behavior in &mut behaviors {
            let mut position = Position::new(1.0, 1.0);
            let mut velocity = Velocity::new(1.0, 1.0);
            for _ in 0..10 {
                behavior.update(&mut position, &mut velocity, bounds);
            }
            assert!(position.x.is_finite() && position.y.is_finite());
            assert!(velocity.x.is_finite() && velocity.y.is_finite());
        }
    }

    #[test]
    fn kinds_name_their_variant() {
        assert_eq!(
            MovementBehavior::from(GravityBehavior::default()).kind(),
            BehaviorKind::Gravity
        );
        assert_eq!(BehaviorKind::Circular.to_string(), "circular");
    }
}
