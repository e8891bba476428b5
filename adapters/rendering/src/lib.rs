#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Cube Garden adapters.

use anyhow::Result as AnyResult;
use cube_garden_core::{Bounds, InputEvent, PaintSurface};
use glam::Vec2;
use std::{error::Error, fmt, time::Duration};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }
}

impl From<cube_garden_core::Color> for Color {
    fn from(color: cube_garden_core::Color) -> Self {
        Self::from_rgb_u8(color.red(), color.green(), color.blue())
    }
}

/// Input snapshot gathered by adapters before updating the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameInput {
    /// Surface dimensions observed for this frame.
    pub bounds: Bounds,
    /// Key events observed since the previous frame, in arrival order.
    pub events: Vec<InputEvent>,
}

impl FrameInput {
    /// Creates a frame input snapshot.
    #[must_use]
    pub fn new(bounds: Bounds, events: Vec<InputEvent>) -> Self {
        Self { bounds, events }
    }
}

/// Axis-aligned filled square painted by the simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneSquare {
    /// Top-left corner in screen pixels.
    pub origin: Vec2,
    /// Edge length in pixels.
    pub size: f32,
    /// Fill color.
    pub color: Color,
}

impl SceneSquare {
    /// Creates a new square descriptor.
    #[must_use]
    pub const fn new(origin: Vec2, size: f32, color: Color) -> Self {
        Self {
            origin,
            size,
            color,
        }
    }
}

/// Paint commands collected for a single frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    squares: Vec<SceneSquare>,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every square so the next frame starts blank.
    pub fn clear(&mut self) {
        self.squares.clear();
    }

    /// Squares in paint order.
    #[must_use]
    pub fn squares(&self) -> &[SceneSquare] {
        &self.squares
    }

    /// Number of squares queued for the frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Reports whether nothing was painted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

impl PaintSurface for Scene {
    fn fill_square(&mut self, x: f32, y: f32, size: f32, color: cube_garden_core::Color) {
        self.squares
            .push(SceneSquare::new(Vec2::new(x, y), size, color.into()));
    }
}

/// Describes the window and the scene shown inside it.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window.
    pub window_title: String,
    /// Solid color used to clear each frame.
    pub clear_color: Color,
    /// Requested window width in pixels.
    pub window_width: u32,
    /// Requested window height in pixels.
    pub window_height: u32,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`RenderingError::InvalidWindowSize`] when either dimension is zero.
    pub fn new<T>(
        window_title: T,
        clear_color: Color,
        window_width: u32,
        window_height: u32,
        scene: Scene,
    ) -> Result<Self, RenderingError>
    where
        T: Into<String>,
    {
        if window_width == 0 || window_height == 0 {
            return Err(RenderingError::InvalidWindowSize {
                width: window_width,
                height: window_height,
            });
        }

        Ok(Self {
            window_title: window_title.into(),
            clear_color,
            window_width,
            window_height,
            scene,
        })
    }

    /// Bounds matching the requested window size.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.window_width as f32, self.window_height as f32)
    }
}

/// Rendering backend capable of presenting Cube Garden scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until it is requested to exit.
    ///
    /// The provided `update_scene` closure receives the frame delta, the input
    /// captured by the adapter since the previous frame, and repaints the scene
    /// before it is drawn.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) + 'static;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, PartialEq, Eq)]
pub enum RenderingError {
    /// Window dimensions must be positive.
    InvalidWindowSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWindowSize { width, height } => {
                write!(
                    f,
                    "window size must be positive (received {width}x{height})"
                )
            }
        }
    }
}

impl Error for RenderingError {}
