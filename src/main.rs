use std::time::Duration;

use anyhow::Context;
use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;
use trash_hiker::config::GameConfig;
use trash_hiker::game::{Runtime, Transition};
use trash_hiker::host::MacroquadHost;

/// Frames per second the animation and movement rates are tuned for.
const REFERENCE_FPS: f32 = 60.0;

/// Window settings from the config file. A broken file falls back to the
/// defaults here and is reported once logging is up.
fn window_conf() -> Conf {
    GameConfig::discover().unwrap_or_default().window.to_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run().await {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = GameConfig::discover().context("loading config")?;
    let mut host = MacroquadHost::new();
    let mut runtime = Runtime::new(config);

    runtime
        .start(&mut host)
        .await
        .context("starting the title screen")?;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            tracing::info!("exit requested");
            break;
        }

        let now = Duration::from_secs_f64(get_time());
        for event in host.poll_events() {
            runtime.handle_event(event, now);
        }

        let dt = get_frame_time() * REFERENCE_FPS;
        if let Some(Transition::EnterLevel) = runtime.tick(&mut host, dt) {
            if let Err(err) = runtime.enter_level(&mut host).await {
                tracing::debug!(%err, "staying on title");
            }
        }

        next_frame().await;
    }

    runtime.stop();
    Ok(())
}
