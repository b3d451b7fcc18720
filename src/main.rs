mod config;       // brings `config.rs` in as `crate::config`
mod graphics;     // brings `graphics.rs` in as `crate::graphics`
mod input;        // brings `input.rs` in as `crate::input`

use anyhow::Context;
use macroquad::Window;
use tracing::{error, info};
use tracing_subscriber::{self, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let settings = config::load_settings().context("loading editor settings")?;
    let geometry = settings.geometry().context("invalid grid settings")?;

    info!(
        canvas_px = geometry.extent(),
        "Wall editor started. Opening {}x{} grid window...",
        geometry.grid_size(),
        geometry.grid_size()
    );

    Window::from_config(graphics::window_conf(&settings, &geometry), async move {
        if let Err(e) = graphics::run_editor_loop(geometry).await {
            error!("Editor loop failed: {:?}", e);
        }
    });

    Ok(())
}
