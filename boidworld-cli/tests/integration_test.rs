use anyhow::Result;
use boidworld_cli::{build_world, run, snapshot};
use boidworld_shared::{EdgeMode, WorldSettings, WorldSnapshot};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SETTINGS: &str = r#"{
    "width": 400,
    "height": 300,
    "seed": 9,
    "flocks": [
        { "boid_count": 12 },
        { "boid_count": 5, "cohesion_weight": 0.5, "update_mode": "simultaneous" }
    ]
}"#;

fn settings() -> WorldSettings {
    WorldSettings::from_json(SETTINGS).unwrap()
}

fn parse_lines(output: &[u8]) -> Vec<WorldSnapshot> {
    String::from_utf8(output.to_vec())
        .unwrap()
        .lines()
        .map(|line| WorldSnapshot::from_json(line).unwrap())
        .collect()
}

#[test]
fn builds_every_configured_flock() {
    let settings = settings();
    let mut rng = StdRng::seed_from_u64(settings.seed.unwrap());
    let world = build_world(&settings, &mut rng);

    assert_eq!(world.flock_count(), 2);
    assert_eq!(world.boid_count(), 17);
    assert_eq!(world.bounds().width, 400.0);
    assert_eq!(world.flock(1).map(|f| f.params.cohesion_weight), Some(0.5));

    let snap = snapshot(&world);
    assert_eq!(snap.tick, 0);
    assert_eq!(snap.boid_count(), 17);
    assert_eq!(snap.flocks[1].boids[4].index, 4);
}

#[test]
fn run_writes_periodic_and_final_snapshots() -> Result<()> {
    let settings = settings();
    let mut rng = StdRng::seed_from_u64(1);
    let mut world = build_world(&settings, &mut rng);
    let mut output = Vec::new();

    let summary = run(&mut world, 25, 10, &mut output)?;

    let snapshots = parse_lines(&output);
    assert_eq!(summary.ticks, 25);
    assert_eq!(summary.snapshots, 3);
    let ticks: Vec<u64> = snapshots.iter().map(|s| s.tick).collect();
    assert_eq!(ticks, [10, 20, 25]);

    for snap in &snapshots {
        for flock in &snap.flocks {
            for boid in &flock.boids {
                assert!(boid.position.x >= 0.0 && boid.position.x <= 400.0);
                assert!(boid.position.y >= 0.0 && boid.position.y <= 300.0);
            }
        }
    }
    Ok(())
}

#[test]
fn final_snapshot_only_when_every_is_zero() -> Result<()> {
    let settings = settings();
    let mut rng = StdRng::seed_from_u64(1);
    let mut world = build_world(&settings, &mut rng);
    let mut output = Vec::new();

    run(&mut world, 30, 0, &mut output)?;

    let snapshots = parse_lines(&output);
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].tick, 30);
    Ok(())
}

#[test]
fn same_seed_same_output() -> Result<()> {
    let settings = settings();
    let mut outputs = Vec::new();

    for _ in 0..2 {
        let mut rng = StdRng::seed_from_u64(42);
        let mut world = build_world(&settings, &mut rng);
        let mut output = Vec::new();
        run(&mut world, 40, 20, &mut output)?;
        outputs.push(output);
    }

    assert_eq!(outputs[0], outputs[1]);
    Ok(())
}

#[test]
fn bounce_settings_reach_the_world() {
    let mut settings = settings();
    settings.edge_mode = EdgeMode::Bounce;
    let mut rng = StdRng::seed_from_u64(3);
    let world = build_world(&settings, &mut rng);

    assert_eq!(
        world.bounds().edge_policy,
        boidworld_core::EdgePolicy::Bounce
    );
}
