//! Headless driver: turns [`WorldSettings`] into a running [`World`] and
//! streams [`WorldSnapshot`]s as JSON lines.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use boidworld_core::{Bounds, EdgePolicy, Flock, FlockParams, UpdateOrder, World};
use boidworld_shared::{
    BoidState, EdgeMode, FlockSettings, FlockSnapshot, UpdateMode, Vec2, WorldSettings,
    WorldSnapshot,
};
use rand::Rng;

pub fn load_settings(path: &Path) -> Result<WorldSettings> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;
    WorldSettings::from_json(&json)
        .with_context(|| format!("Invalid settings in {}", path.display()))
}

pub fn parse_edge_mode(value: &str) -> Result<EdgeMode, String> {
    match value {
        "wrap" => Ok(EdgeMode::Wrap),
        "bounce" => Ok(EdgeMode::Bounce),
        other => Err(format!("unknown edge mode '{}', expected wrap or bounce", other)),
    }
}

pub fn parse_update_mode(value: &str) -> Result<UpdateMode, String> {
    match value {
        "sequential" => Ok(UpdateMode::Sequential),
        "simultaneous" => Ok(UpdateMode::Simultaneous),
        other => Err(format!(
            "unknown update order '{}', expected sequential or simultaneous",
            other
        )),
    }
}

pub fn edge_policy(mode: EdgeMode) -> EdgePolicy {
    match mode {
        EdgeMode::Wrap => EdgePolicy::Wrap,
        EdgeMode::Bounce => EdgePolicy::Bounce,
    }
}

pub fn flock_params(settings: &FlockSettings) -> FlockParams {
    FlockParams {
        perception_radius: settings.perception_radius,
        perception_angle: settings.perception_angle,
        cohesion_weight: settings.cohesion_weight,
        alignment_weight: settings.alignment_weight,
        separation_weight: settings.separation_weight,
        update_order: match settings.update_mode {
            UpdateMode::Sequential => UpdateOrder::Sequential,
            UpdateMode::Simultaneous => UpdateOrder::Simultaneous,
        },
    }
}

/// Rejects world sizes the driver cannot place boids in. The simulation core
/// itself accepts any size.
pub fn validate(settings: &WorldSettings) -> Result<()> {
    if !(settings.width > 0.0 && settings.height > 0.0) {
        bail!(
            "World size must be positive, got {}x{}",
            settings.width,
            settings.height
        );
    }
    Ok(())
}

/// Builds a world and populates every configured flock from `rng`.
pub fn build_world<R: Rng + ?Sized>(settings: &WorldSettings, rng: &mut R) -> World {
    let bounds = Bounds::new(settings.width, settings.height)
        .with_edge_policy(edge_policy(settings.edge_mode));
    let mut world = World::with_bounds(bounds);

    for flock_settings in &settings.flocks {
        let mut flock = Flock::with_params(flock_settings.boid_count, flock_params(flock_settings));
        flock.populate_with(world.bounds(), rng);
        world.add_flock(flock);
    }

    log::info!(
        "Built {}x{} world with {} flocks, {} boids",
        settings.width,
        settings.height,
        world.flock_count(),
        world.boid_count()
    );
    world
}

pub fn snapshot(world: &World) -> WorldSnapshot {
    WorldSnapshot {
        tick: world.ticks(),
        width: world.width(),
        height: world.height(),
        flocks: world
            .flocks()
            .iter()
            .map(|flock| FlockSnapshot {
                boids: flock
                    .boids()
                    .iter()
                    .map(|boid| BoidState {
                        index: boid.index,
                        position: Vec2::new(boid.position.x, boid.position.y),
                        velocity: Vec2::new(boid.velocity.x, boid.velocity.y),
                    })
                    .collect(),
            })
            .collect(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub snapshots: usize,
}

/// Advances `world` by `ticks` ticks, writing a snapshot line every `every`
/// ticks (`0` disables the periodic ones) and always one for the final state.
pub fn run<W: Write>(world: &mut World, ticks: u64, every: u64, out: &mut W) -> Result<RunSummary> {
    let mut snapshots = 0;

    for _ in 0..ticks {
        world.update();
        if every > 0 && world.ticks() % every == 0 && world.ticks() != ticks {
            write_snapshot(world, out)?;
            snapshots += 1;
        }
        if world.ticks() % 100 == 0 {
            log::debug!("tick {}", world.ticks());
        }
    }

    write_snapshot(world, out)?;
    snapshots += 1;
    out.flush().context("Failed to flush snapshot output")?;

    log::info!("Ran {} ticks, wrote {} snapshots", ticks, snapshots);
    Ok(RunSummary { ticks, snapshots })
}

fn write_snapshot<W: Write>(world: &World, out: &mut W) -> Result<()> {
    let line = snapshot(world)
        .to_json()
        .context("Failed to serialize snapshot")?;
    writeln!(out, "{}", line).context("Failed to write snapshot")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        assert_eq!(parse_edge_mode("bounce"), Ok(EdgeMode::Bounce));
        assert!(parse_edge_mode("Bounce").is_err());
        assert_eq!(parse_update_mode("simultaneous"), Ok(UpdateMode::Simultaneous));
        assert!(parse_update_mode("parallel").is_err());
    }

    #[test]
    fn test_flock_params_mapping() {
        let settings = FlockSettings {
            perception_radius: 50.0,
            separation_weight: 0.9,
            update_mode: UpdateMode::Simultaneous,
            ..FlockSettings::default()
        };
        let params = flock_params(&settings);
        assert_eq!(params.perception_radius, 50.0);
        assert_eq!(params.separation_weight, 0.9);
        assert_eq!(params.update_order, UpdateOrder::Simultaneous);
        assert_eq!(params.cohesion_weight, FlockParams::default().cohesion_weight);
    }

    #[test]
    fn test_validate_rejects_empty_world() {
        let mut settings = WorldSettings::default();
        assert!(validate(&settings).is_ok());
        settings.height = 0.0;
        assert!(validate(&settings).is_err());
        settings.height = f32::NAN;
        assert!(validate(&settings).is_err());
    }
}
