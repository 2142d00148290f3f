//! Drive a sandbox session without a window.
//!
//! Generates a seeded world, locks control, walks forward for two seconds,
//! looks down, digs out the block underfoot and places a stone block on
//! the surface ahead.
//!
//! Run with `RUST_LOG=debug cargo run --example headless_walk [config.toml]`.

use anyhow::{Context, Result};
use hearth_sandbox::input::{accumulate_look, press_key, release_key};
use hearth_sandbox::renderer::{refresh_instances, InstanceCache};
use hearth_sandbox::{InputState, MouseButton, SandboxConfig, SandboxSession};

const FRAME: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => SandboxConfig::load(&path).with_context(|| format!("loading {}", path))?,
        None => {
            let mut config = SandboxConfig::default();
            config.world.seed = Some(7);
            config
        }
    };

    let mut session = SandboxSession::new(config).context("starting session")?;
    let mut input = InputState::default();
    let mut instances = InstanceCache::default();

    // First click only takes control
    session.click(MouseButton::Primary, &mut input);

    for _ in 0..60 {
        session.frame(&mut input, FRAME);
    }
    log::info!("[Demo] Landed at {:?}", session.player().position);

    press_key(&mut input, "KeyW");
    for _ in 0..120 {
        session.frame(&mut input, FRAME);
    }
    release_key(&mut input, "KeyW");
    log::info!("[Demo] Walked to {:?}", session.player().position);

    refresh_instances(&mut instances, &session.world().read());
    log::info!("[Demo] {} blocks to draw", instances.instances.len());

    accumulate_look(&mut input, 0.0, 400.0);
    session.frame(&mut input, FRAME);
    if let Some(removed) = session.click(MouseButton::Primary, &mut input) {
        log::info!("[Demo] Removed {:?} at {}", removed.old_block, removed.position);
    }

    press_key(&mut input, "Digit3");
    session.frame(&mut input, FRAME);
    release_key(&mut input, "Digit3");
    if let Some(placed) = session.click(MouseButton::Secondary, &mut input) {
        log::info!("[Demo] Placed {:?} at {}", placed.new_block, placed.position);
    }

    for event in session.drain_events() {
        log::info!("[Demo] Event: {:?}", event);
    }
    let hud = session.hud();
    log::info!("[Demo] HUD shows {} ({} legend lines)", hud.active_block, hud.legend.len());

    if refresh_instances(&mut instances, &session.world().read()) {
        log::info!("[Demo] Re-meshed: {} blocks to draw", instances.instances.len());
    }
    Ok(())
}
