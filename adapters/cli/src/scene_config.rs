//! TOML scene files describing a garden.
//!
//! ```toml
//! clear_color = "white"
//!
//! [keymap]
//! up = ["ArrowUp", "k"]
//!
//! [[entity]]
//! name = "bouncer"
//! position = [0.0, 0.0]
//! velocity = [2.0, 2.0]
//! renderable = { color = "green", size = 10.0 }
//! movement = { kind = "bounce", decay = 0.5 }
//!
//! [entity.controller.hold]
//! left = 0.3
//! right = 0.3
//! ```

use std::{fs, path::Path, path::PathBuf};

use cube_garden_core::{
    Age, BounceBehavior, CircularBehavior, Color, Controller, ControllerModifiers, Direction,
    Entity, EntityBuilder, GravityBehavior, KeyPhase, Movement, MovementBehavior, Position,
    Renderable, SineBehavior, Velocity, BODY_SIZE,
};
use cube_garden_system_controller::KeyMap;
use serde::Deserialize;
use thiserror::Error;

use crate::garden::Garden;

/// Reasons a scene file could not be turned into a garden.
#[derive(Debug, Error)]
pub(crate) enum SceneConfigError {
    /// The file could not be read.
    #[error("failed to read scene file {}", path.display())]
    Io {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a valid scene description.
    #[error("invalid scene file: {0}")]
    Parse(#[from] toml::de::Error),
    /// A renderable or behavior body has a size that cannot be drawn.
    #[error("entity #{index} has non-positive size {size}")]
    NonPositiveSize {
        /// Zero-based position of the entity in the file.
        index: usize,
        /// Offending size.
        size: f32,
    },
}

/// Parsed contents of a scene file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SceneConfig {
    #[serde(default = "default_clear_color")]
    clear_color: Color,
    #[serde(default)]
    keymap: KeyMap,
    #[serde(default, rename = "entity")]
    entities: Vec<EntityConfig>,
}

fn default_clear_color() -> Color {
    Color::from_rgb(0xff, 0xff, 0xff)
}

fn default_size() -> f32 {
    BODY_SIZE
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntityConfig {
    name: Option<String>,
    position: Option<[f32; 2]>,
    velocity: Option<[f32; 2]>,
    renderable: Option<RenderableConfig>,
    #[serde(default)]
    age: bool,
    movement: Option<MovementConfig>,
    controller: Option<ControllerConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RenderableConfig {
    color: Color,
    #[serde(default = "default_size")]
    size: f32,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", deny_unknown_fields)]
enum MovementConfig {
    Bounce {
        #[serde(default)]
        decay: f32,
        body_size: Option<f32>,
    },
    Circular {
        center: [f32; 2],
        radius: f32,
        speed: Option<f32>,
    },
    Sine {
        start_y: f32,
        amplitude: Option<f32>,
        frequency: Option<f32>,
        body_size: Option<f32>,
    },
    Gravity {
        gravity: Option<f32>,
        bounce: Option<f32>,
        body_size: Option<f32>,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ControllerConfig {
    press: Option<PhaseConfig>,
    hold: Option<PhaseConfig>,
    release: Option<PhaseConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PhaseConfig {
    up: Option<f32>,
    down: Option<f32>,
    left: Option<f32>,
    right: Option<f32>,
}

impl SceneConfig {
    /// Reads and parses a scene file.
    pub(crate) fn load(path: &Path) -> Result<Self, SceneConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| SceneConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parses scene TOML.
    pub(crate) fn parse(contents: &str) -> Result<Self, SceneConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the scene and converts it into entity descriptions.
    pub(crate) fn into_garden(self) -> Result<Garden, SceneConfigError> {
        let entities = self
            .entities
            .into_iter()
            .enumerate()
            .map(|(index, entity)| entity.into_builder(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Garden {
            clear_color: self.clear_color,
            keymap: self.keymap,
            entities,
        })
    }
}

impl EntityConfig {
    fn into_builder(self, index: usize) -> Result<EntityBuilder, SceneConfigError> {
        let mut builder = Entity::builder();
        if let Some([x, y]) = self.position {
            builder = builder.with(Position::new(x, y));
        }
        if let Some([x, y]) = self.velocity {
            builder = builder.with(Velocity::new(x, y));
        }
        if let Some(renderable) = self.renderable {
            ensure_positive(index, renderable.size)?;
            builder = builder.with(Renderable::new(renderable.color, renderable.size));
        }
        if self.age {
            builder = builder.with(Age::default());
        }
        if let Some(movement) = self.movement {
            builder = builder.with(Movement::new(movement.into_behavior(index)?));
        }
        if let Some(controller) = self.controller {
            builder = builder.with(Controller::new(controller.into_modifiers()));
        }

        log::debug!(
            "scene entity #{index} ({})",
            self.name.as_deref().unwrap_or("unnamed")
        );
        Ok(builder)
    }
}

impl MovementConfig {
    fn into_behavior(self, index: usize) -> Result<MovementBehavior, SceneConfigError> {
        let body_size = |size: Option<f32>| {
            let size = size.unwrap_or(BODY_SIZE);
            ensure_positive(index, size).map(|()| size)
        };

        let behavior: MovementBehavior = match self {
            Self::Bounce { decay, body_size: size } => {
                BounceBehavior::new(decay).with_body_size(body_size(size)?).into()
            }
            Self::Circular {
                center: [x, y],
                radius,
                speed,
            } => {
                let behavior = CircularBehavior::new(x, y, radius);
                let behavior = match speed {
                    Some(speed) => behavior.with_speed(speed),
                    None => behavior,
                };
                behavior.into()
            }
            Self::Sine {
                start_y,
                amplitude,
                frequency,
                body_size: size,
            } => {
                let mut behavior = SineBehavior::new(start_y).with_body_size(body_size(size)?);
                if let Some(amplitude) = amplitude {
                    behavior = behavior.with_amplitude(amplitude);
                }
                if let Some(frequency) = frequency {
                    behavior = behavior.with_frequency(frequency);
                }
                behavior.into()
            }
            Self::Gravity {
                gravity,
                bounce,
                body_size: size,
            } => {
                let defaults = GravityBehavior::default();
                GravityBehavior::new(
                    gravity.unwrap_or(defaults.gravity()),
                    bounce.unwrap_or(defaults.bounce()),
                )
                .with_body_size(body_size(size)?)
                .into()
            }
        };
        Ok(behavior)
    }
}

impl ControllerConfig {
    fn into_modifiers(self) -> ControllerModifiers {
        let mut modifiers = ControllerModifiers::new();
        let phases = [
            (KeyPhase::Press, self.press),
            (KeyPhase::Hold, self.hold),
            (KeyPhase::Release, self.release),
        ];
        for (phase, config) in phases {
            let Some(config) = config else {
                continue;
            };
            let directions = [
                (Direction::Up, config.up),
                (Direction::Down, config.down),
                (Direction::Left, config.left),
                (Direction::Right, config.right),
            ];
            for (direction, magnitude) in directions {
                if let Some(magnitude) = magnitude {
                    modifiers.set(phase, direction, magnitude);
                }
            }
        }
        modifiers
    }
}

fn ensure_positive(index: usize, size: f32) -> Result<(), SceneConfigError> {
    if size > 0.0 {
        Ok(())
    } else {
        Err(SceneConfigError::NonPositiveSize { index, size })
    }
}
