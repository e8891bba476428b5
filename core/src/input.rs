use std::{collections::BTreeMap, fmt};

use crate::Velocity;

/// Cardinal directions a controller can push an entity in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Toward decreasing `y`.
    Up,
    /// Toward increasing `y`.
    Down,
    /// Toward decreasing `x`.
    Left,
    /// Toward increasing `x`.
    Right,
}

impl Direction {
    /// Every direction in a stable order.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Applies a signed velocity delta of the given magnitude along this direction.
    ///
    /// Up and left subtract, down and right add.
    pub fn nudge(self, velocity: &mut Velocity, magnitude: f32) {
        match self {
            Self::Up => velocity.y -= magnitude,
            Self::Down => velocity.y += magnitude,
            Self::Left => velocity.x -= magnitude,
            Self::Right => velocity.x += magnitude,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// Lifecycle phase of a key that a controller modifier can react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyPhase {
    /// The tick on which a key went down.
    Press,
    /// Every tick while a key stays down.
    Hold,
    /// The tick on which a key came back up.
    Release,
}

/// Discrete keyboard event delivered by the host, identified by key name.
///
/// Key names follow the browser `KeyboardEvent.key` spelling (`"ArrowUp"`, `"w"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// A key went down (or auto-repeated while down).
    KeyDown(String),
    /// A key came back up.
    KeyUp(String),
}

impl InputEvent {
    /// Name of the key the event refers to.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::KeyDown(key) | Self::KeyUp(key) => key,
        }
    }
}

/// Mapping from key phase to per-direction velocity magnitudes.
///
/// Phases and directions are optional: a missing entry means the controller does
/// nothing for that combination, which is different from a zero magnitude.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControllerModifiers {
    phases: BTreeMap<KeyPhase, BTreeMap<Direction, f32>>,
}

impl ControllerModifiers {
    /// Creates an empty modifier map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the map with an added (or replaced) magnitude for the phase and direction.
    #[must_use]
    pub fn with(mut self, phase: KeyPhase, direction: Direction, magnitude: f32) -> Self {
        self.set(phase, direction, magnitude);
        self
    }

    /// Returns the map with the same magnitude configured for all four directions.
    #[must_use]
    pub fn with_all_directions(mut self, phase: KeyPhase, magnitude: f32) -> Self {
        for direction in Direction::ALL {
            self.set(phase, direction, magnitude);
        }
        self
    }

    /// Sets the magnitude applied for the phase and direction.
    pub fn set(&mut self, phase: KeyPhase, direction: Direction, magnitude: f32) {
        let _ = self
            .phases
            .entry(phase)
            .or_default()
            .insert(direction, magnitude);
    }

    /// Magnitude configured for the phase and direction, if any.
    #[must_use]
    pub fn magnitude(&self, phase: KeyPhase, direction: Direction) -> Option<f32> {
        self.phases
            .get(&phase)
            .and_then(|directions| directions.get(&direction))
            .copied()
    }

    /// Iterates over every configured `(phase, direction, magnitude)` triple.
    pub fn iter(&self) -> impl Iterator<Item = (KeyPhase, Direction, f32)> + '_ {
        self.phases.iter().flat_map(|(phase, directions)| {
            directions
                .iter()
                .map(move |(direction, magnitude)| (*phase, *direction, *magnitude))
        })
    }

    /// Reports whether no phase configures any direction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.values().all(BTreeMap::is_empty)
    }
}
