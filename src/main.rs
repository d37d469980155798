mod config;
mod world;

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use raytrace::Renderer;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = config::Options::parse();
    let render_config = opts.render_config();
    info!(
        "Image {}x{}, fov {}, aperture {}, {}",
        opts.width,
        opts.height,
        opts.fov,
        opts.aperture,
        if opts.flat { "flat list" } else { "BVH" }
    );

    let scene = world::build_scene(&opts)?;
    let renderer = Renderer::new(render_config).context("setting up renderer")?;

    let progress = ProgressBar::new(opts.width as u64 * opts.height as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} px ({eta})",
        )
        .context("progress bar template")?,
    );
    let image = renderer.render(&scene, &progress)?;
    progress.finish_and_clear();

    image
        .save(&opts.output)
        .with_context(|| format!("writing {}", opts.output.display()))?;
    Ok(())
}
