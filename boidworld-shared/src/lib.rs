#![cfg_attr(not(feature = "std"), no_std)]

//! Settings and snapshot types exchanged between a boidworld simulation and
//! its host, serialized as JSON.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// Plain `x`/`y` pair used for both positions and velocities on the wire
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Edge behavior of the world rectangle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMode {
    #[default]
    Wrap,
    Bounce,
}

/// Whether boids in a flock move one after another or all at once
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMode {
    #[default]
    Sequential,
    Simultaneous,
}

/// Configuration of one flock. Missing fields take the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlockSettings {
    pub boid_count: usize,
    pub perception_radius: f32,
    /// Kept for compatibility, has no effect on the simulation
    pub perception_angle: f32,
    pub cohesion_weight: f32,
    pub alignment_weight: f32,
    pub separation_weight: f32,
    pub update_mode: UpdateMode,
}

impl Default for FlockSettings {
    fn default() -> Self {
        Self {
            boid_count: 50,
            perception_radius: 465.0,
            perception_angle: 2.8,
            cohesion_weight: 0.18,
            alignment_weight: 0.01,
            separation_weight: 0.13,
            update_mode: UpdateMode::Sequential,
        }
    }
}

/// Configuration of a whole world: its size, edges and flocks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldSettings {
    pub width: f32,
    pub height: f32,
    pub edge_mode: EdgeMode,
    /// Seed for boid placement; `None` draws from the thread RNG
    pub seed: Option<u64>,
    pub flocks: Vec<FlockSettings>,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            edge_mode: EdgeMode::Wrap,
            seed: None,
            flocks: vec![FlockSettings::default()],
        }
    }
}

#[cfg(feature = "std")]
impl WorldSettings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Observable state of a single boid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoidState {
    pub index: usize,
    pub position: Vec2,
    pub velocity: Vec2,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlockSnapshot {
    pub boids: Vec<BoidState>,
}

/// State of every boid in the world after `tick` updates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub width: f32,
    pub height: f32,
    pub flocks: Vec<FlockSnapshot>,
}

impl WorldSnapshot {
    pub fn boid_count(&self) -> usize {
        self.flocks.iter().map(|f| f.boids.len()).sum()
    }
}

#[cfg(feature = "std")]
impl WorldSnapshot {
    /// Single-line JSON, suitable for one snapshot per line output
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
