#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Keyboard controller system that turns key state into velocity changes.
//!
//! The system owns a [`KeyStateTable`] fed exclusively through
//! [`System::handle_input`]. Key-down and key-up events arriving between ticks are
//! coalesced into the table; the edge flags they raise (`pressed`, `released`)
//! stay visible for exactly one update and are cleared by the end-of-tick
//! cleanup.

use std::collections::HashMap;

use cube_garden_core::{Direction, InputEvent, KeyPhase, System, SystemContext};
use serde::{Deserialize, Serialize};

/// Level and edge flags tracked for a single key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    /// The key is currently down.
    pub held: bool,
    /// The key went down since the last cleanup.
    pub pressed: bool,
    /// The key came up since the last cleanup.
    pub released: bool,
}

impl KeyState {
    /// State of a key that is up with no pending edges.
    pub const IDLE: KeyState = KeyState {
        held: false,
        pressed: false,
        released: false,
    };

    /// Reports whether the flag matching the phase is set.
    #[must_use]
    pub const fn in_phase(&self, phase: KeyPhase) -> bool {
        match phase {
            KeyPhase::Press => self.pressed,
            KeyPhase::Hold => self.held,
            KeyPhase::Release => self.released,
        }
    }
}

/// Per-key state machine: `idle → held+pressed → held → idle+released → idle`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyStateTable {
    keys: HashMap<String, KeyState>,
}

impl KeyStateTable {
    /// Creates an empty table; untracked keys read as idle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table tracking every provided key in the idle state.
    #[must_use]
    pub fn tracking<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let keys = keys
            .into_iter()
            .map(|key| (key.to_owned(), KeyState::IDLE))
            .collect();
        Self { keys }
    }

    /// Records a key-down event.
    ///
    /// `pressed` is raised only when the key was not already held, so
    /// auto-repeat does not retrigger press edges.
    pub fn key_down(&mut self, key: &str) {
        let state = self.keys.entry(key.to_owned()).or_default();
        if !state.held {
            state.pressed = true;
            log::trace!("key {key} pressed");
        }
        state.held = true;
    }

    /// Records a key-up event.
    ///
    /// `released` is raised only when the key was held. A pending `pressed`
    /// edge stays raised so a tap shorter than a tick is still observed.
    pub fn key_up(&mut self, key: &str) {
        let state = self.keys.entry(key.to_owned()).or_default();
        if state.held {
            state.released = true;
            log::trace!("key {key} released");
        }
        state.held = false;
    }

    /// Applies an input event to the table.
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => self.key_down(key),
            InputEvent::KeyUp(key) => self.key_up(key),
        }
    }

    /// Clears every `pressed` and `released` edge.
    pub fn reset_edges(&mut self) {
        for state in self.keys.values_mut() {
            state.pressed = false;
            state.released = false;
        }
    }

    /// Current state of the key; untracked keys are idle.
    #[must_use]
    pub fn state(&self, key: &str) -> KeyState {
        self.keys.get(key).copied().unwrap_or(KeyState::IDLE)
    }

    /// Reports whether any of the keys is in the phase.
    #[must_use]
    pub fn any_in_phase(&self, keys: &[String], phase: KeyPhase) -> bool {
        keys.iter().any(|key| self.state(key).in_phase(phase))
    }

    /// Number of keys that have been tracked or observed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Reports whether no key has been tracked or observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Key names bound to each direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyMap {
    /// Keys steering up.
    pub up: Vec<String>,
    /// Keys steering down.
    pub down: Vec<String>,
    /// Keys steering left.
    pub left: Vec<String>,
    /// Keys steering right.
    pub right: Vec<String>,
}

impl KeyMap {
    /// Keys bound to the direction.
    #[must_use]
    pub fn keys(&self, direction: Direction) -> &[String] {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    /// Every bound key across all directions.
    pub fn all_keys(&self) -> impl Iterator<Item = &str> + '_ {
        Direction::ALL
            .into_iter()
            .flat_map(move |direction| self.keys(direction).iter().map(String::as_str))
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let keys = |names: [&str; 2]| -> Vec<String> {
            names.iter().map(|name| (*name).to_owned()).collect()
        };
        Self {
            up: keys(["ArrowUp", "w"]),
            down: keys(["ArrowDown", "s"]),
            left: keys(["ArrowLeft", "a"]),
            right: keys(["ArrowRight", "d"]),
        }
    }
}

/// System applying controller modifiers to entities with Velocity and Controller.
#[derive(Clone, Debug)]
pub struct KeyboardControllerSystem {
    keymap: KeyMap,
    table: KeyStateTable,
}

impl KeyboardControllerSystem {
    /// Creates a controller system using the provided key bindings.
    #[must_use]
    pub fn new(keymap: KeyMap) -> Self {
        let table = KeyStateTable::tracking(keymap.all_keys());
        Self { keymap, table }
    }

    /// Current state of the key as seen by the system.
    #[must_use]
    pub fn key_state(&self, key: &str) -> KeyState {
        self.table.state(key)
    }
}

impl Default for KeyboardControllerSystem {
    fn default() -> Self {
        Self::new(KeyMap::default())
    }
}

impl System for KeyboardControllerSystem {
    fn name(&self) -> &'static str {
        "keyboard-controller"
    }

    fn init(&mut self) {
        self.table = KeyStateTable::tracking(self.keymap.all_keys());
        log::debug!("keyboard controller tracking {} key(s)", self.table.len());
    }

    fn handle_input(&mut self, event: &InputEvent) {
        self.table.apply(event);
    }

    fn update(&mut self, context: &mut SystemContext<'_>) {
        for entity in context.entities.iter_mut() {
            let Some((velocity, controller)) = entity.control_parts_mut() else {
                continue;
            };

            for (phase, direction, magnitude) in controller.modifiers.iter() {
                if self.table.any_in_phase(self.keymap.keys(direction), phase) {
                    direction.nudge(velocity, magnitude);
                }
            }
        }
    }

    fn cleanup(&mut self) {
        self.table.reset_edges();
    }
}
