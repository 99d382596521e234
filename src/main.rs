use anyhow::{Context, Result};
use clap::Parser;
use log::info;

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use spherecast::output::save_image;
use spherecast::{Camera, SceneConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    info!("spherecast - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    let mut scene = match &args.config {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("loading scene from {}", path.display()))?,
        None => {
            info!("No scene file given, using the default scene");
            SceneConfig::default()
        }
    };
    if let Some(width) = args.width {
        scene.camera.image_width = width;
    }

    let world = scene.build_world();
    let camera = Camera::new(&scene.camera);
    info!(
        "Image resolution: {}x{}, {} objects",
        camera.image_width,
        camera.image_height,
        world.len()
    );

    let image = camera.render(&world, &scene.sky);

    save_image(&image, &args.output)
        .with_context(|| format!("writing image to {}", args.output))?;

    Ok(())
}
