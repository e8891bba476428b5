#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Cube Garden.

mod demo;
mod garden;
mod scene_config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use cube_garden_core::Bounds;
use cube_garden_rendering::{Color, Presentation, RenderingBackend, Scene};
use cube_garden_rendering_macroquad::MacroquadBackend;
use cube_garden_world::query;

use crate::{garden::GardenDriver, scene_config::SceneConfig};

/// Command-line arguments accepted by the garden.
#[derive(Debug, Parser)]
#[command(name = "cube-garden", about = "Watch cubes bounce, orbit and fall.")]
struct CliArgs {
    /// TOML scene file to load instead of the built-in demo.
    #[arg(long, value_name = "PATH")]
    scene: Option<PathBuf>,
    /// Window width in pixels.
    #[arg(long, default_value_t = 960)]
    width: u32,
    /// Window height in pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,
    /// Synchronise presentation with the display refresh rate (default).
    #[arg(long, overrides_with = "no_vsync")]
    vsync: bool,
    /// Render as fast as possible.
    #[arg(long = "no-vsync", overrides_with = "vsync")]
    no_vsync: bool,
    /// Log frame timing once per second.
    #[arg(long)]
    show_fps: bool,
    /// Window title.
    #[arg(long, default_value = "Cube Garden")]
    title: String,
}

/// Entry point for the Cube Garden command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = CliArgs::parse();

    let bounds = Bounds::new(args.width as f32, args.height as f32);
    let garden = match &args.scene {
        Some(path) => SceneConfig::load(path)
            .and_then(SceneConfig::into_garden)
            .with_context(|| format!("failed to load scene {}", path.display()))?,
        None => demo::garden(bounds),
    };
    log::info!(
        "planting {} entit(ies) in a {}x{} garden",
        garden.entities.len(),
        args.width,
        args.height
    );

    let clear_color = Color::from(garden.clear_color);
    let world = garden.into_world();
    log::info!("{}", query::welcome_banner(&world));

    let presentation = Presentation::new(
        args.title,
        clear_color,
        args.width,
        args.height,
        Scene::new(),
    )?;
    let mut driver = GardenDriver::new(world);

    MacroquadBackend::new()
        .with_vsync(args.vsync || !args.no_vsync)
        .with_show_fps(args.show_fps)
        .run(presentation, move |dt, input, scene| {
            driver.frame(dt, input, scene);
        })
        .context("rendering backend failed")
}
