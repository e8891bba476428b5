#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad window loop for the Cube Garden.
//!
//! Each frame polls the keyboard into [`cube_garden_core::InputEvent`]s, hands them
//! to the driver closure together with the window size, then paints the squares
//! the driver left in the [`Scene`]. Built without macroquad's `audio` feature.

mod keys;

use std::{
    fmt,
    time::{Duration, Instant},
};

use anyhow::Result;
use cube_garden_core::Bounds;
use cube_garden_rendering::{Color, FrameInput, Presentation, RenderingBackend, Scene};
use macroquad::input::{is_key_pressed, KeyCode};

/// Window backend drawing the garden with macroquad.
#[derive(Clone, Copy, Debug)]
pub struct MacroquadBackend {
    vsync: bool,
    show_fps: bool,
}

impl Default for MacroquadBackend {
    fn default() -> Self {
        Self {
            vsync: true,
            show_fps: false,
        }
    }
}

impl MacroquadBackend {
    /// Backend with vsync on and no frame-rate log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for the display refresh between frames when `enabled`.
    #[must_use]
    pub const fn with_vsync(mut self, enabled: bool) -> Self {
        self.vsync = enabled;
        self
    }

    /// Logs a [`FrameReport`] line once per second of frame time when `show`.
    #[must_use]
    pub const fn with_show_fps(mut self, show: bool) -> Self {
        self.show_fps = show;
        self
    }
}

/// What one frame contributed to the frame-rate log.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct FrameSample {
    frame_time: Duration,
    step_time: Duration,
    squares: usize,
}

/// Summary of the frames seen since the previous report.
#[derive(Clone, Copy, Debug, PartialEq)]
struct FrameReport {
    fps: f32,
    mean_squares: f32,
    slowest_step: Duration,
}

impl fmt::Display for FrameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1} fps, {:.1} squares/frame, slowest step {:.2}ms",
            self.fps,
            self.mean_squares,
            self.slowest_step.as_secs_f64() * 1_000.0
        )
    }
}

/// Accumulates frame samples and closes a report after each second of frame time.
#[derive(Debug, Default)]
struct FrameLog {
    window: Duration,
    frames: u32,
    squares: usize,
    slowest_step: Duration,
}

impl FrameLog {
    const REPORT_EVERY: Duration = Duration::from_secs(1);

    fn record(&mut self, sample: FrameSample) -> Option<FrameReport> {
        self.window += sample.frame_time;
        self.frames += 1;
        self.squares += sample.squares;
        self.slowest_step = self.slowest_step.max(sample.step_time);

        if self.window < Self::REPORT_EVERY {
            return None;
        }

        let finished = std::mem::take(self);
        let frames = finished.frames as f32;
        Some(FrameReport {
            fps: frames / finished.window.as_secs_f32(),
            mean_squares: finished.squares as f32 / frames,
            slowest_step: finished.slowest_step,
        })
    }
}

impl RenderingBackend for MacroquadBackend {
    fn run<F>(self, presentation: Presentation, mut update_scene: F) -> Result<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) + 'static,
    {
        let Presentation {
            window_title,
            clear_color,
            window_width,
            window_height,
            scene,
        } = presentation;

        log::info!(
            "opening {window_width}x{window_height} window \"{window_title}\" (vsync {})",
            if self.vsync { "on" } else { "off" }
        );
        let mut config = macroquad::window::Conf {
            window_title,
            window_width: i32::try_from(window_width)?,
            window_height: i32::try_from(window_height)?,
            ..macroquad::window::Conf::default()
        };
        config.platform.swap_interval = Some(i32::from(self.vsync));

        let show_fps = self.show_fps;
        macroquad::Window::from_config(config, async move {
            let mut scene = scene;
            let background = to_macroquad_color(clear_color);
            let mut frame_log = FrameLog::default();

            while !is_key_pressed(KeyCode::Escape) {
                let bounds = Bounds::new(
                    macroquad::window::screen_width(),
                    macroquad::window::screen_height(),
                );
                let frame_time =
                    Duration::from_secs_f32(macroquad::time::get_frame_time().max(0.0));

                let step_started = Instant::now();
                update_scene(
                    frame_time,
                    FrameInput::new(bounds, keys::poll_events()),
                    &mut scene,
                );
                let step_time = step_started.elapsed();

                macroquad::window::clear_background(background);
                draw_scene(&scene);

                let report = frame_log.record(FrameSample {
                    frame_time,
                    step_time,
                    squares: scene.len(),
                });
                if let Some(report) = report.filter(|_| show_fps) {
                    log::info!("{report}");
                }

                macroquad::window::next_frame().await;
            }
            log::info!("escape pressed, closing window");
        });

        Ok(())
    }
}

fn draw_scene(scene: &Scene) {
    for square in scene.squares() {
        macroquad::shapes::draw_rectangle(
            square.origin.x,
            square.origin.y,
            square.size,
            square.size,
            to_macroquad_color(square.color),
        );
    }
}

fn to_macroquad_color(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.red, color.green, color.blue, color.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(millis: u64, squares: usize) -> FrameSample {
        FrameSample {
            frame_time: Duration::from_millis(millis),
            squares,
            ..FrameSample::default()
        }
    }

    #[test]
    fn report_waits_for_a_full_second() {
        let mut frame_log = FrameLog::default();
        for _ in 0..9 {
            assert_eq!(frame_log.record(sample(100, 6)), None);
        }

        let report = frame_log.record(sample(100, 6)).expect("one second elapsed");
        assert!((report.fps - 10.0).abs() <= 1e-3);
        assert!((report.mean_squares - 6.0).abs() <= 1e-3);
    }

    #[test]
    fn each_report_starts_from_an_empty_window() {
        let mut frame_log = FrameLog::default();
        let _ = frame_log.record(sample(1_000, 4)).expect("first window closes");

        assert_eq!(frame_log.record(sample(500, 2)), None);
        let report = frame_log.record(sample(500, 4)).expect("second window closes");
        assert!((report.fps - 2.0).abs() <= 1e-3);
        assert!((report.mean_squares - 3.0).abs() <= 1e-3);
    }

    #[test]
    fn slowest_step_is_kept_across_the_window() {
        let mut frame_log = FrameLog::default();
        let step = |millis| FrameSample {
            frame_time: Duration::from_millis(400),
            step_time: Duration::from_millis(millis),
            squares: 1,
        };

        assert_eq!(frame_log.record(step(3)), None);
        assert_eq!(frame_log.record(step(9)), None);
        let report = frame_log.record(step(1)).expect("window closes");

        assert_eq!(report.slowest_step, Duration::from_millis(9));
        assert_eq!(
            report.to_string(),
            "2.5 fps, 1.0 squares/frame, slowest step 9.00ms"
        );
    }

    #[test]
    fn vsync_defaults_on() {
        let backend = MacroquadBackend::new();
        assert!(backend.vsync);
        assert!(!backend.show_fps);
        assert!(!backend.with_vsync(false).vsync);
    }

    #[test]
    fn macroquad_color_preserves_channels() {
        let color = to_macroquad_color(Color::new(0.25, 0.5, 0.75, 1.0));
        assert_eq!(
            (color.r, color.g, color.b, color.a),
            (0.25, 0.5, 0.75, 1.0)
        );
    }
}
