use alloc::vec::Vec;

use crate::{Bounds, EdgePolicy, Flock};

/// The rectangle the flocks live in, and the flocks themselves.
#[derive(Debug, Clone)]
pub struct World {
    bounds: Bounds,
    flocks: Vec<Flock>,
    ticks: u64,
}

impl World {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_bounds(Bounds::new(width, height))
    }

    pub fn with_bounds(bounds: Bounds) -> Self {
        Self {
            bounds,
            flocks: Vec::new(),
            ticks: 0,
        }
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn width(&self) -> f32 {
        self.bounds.width
    }

    pub fn height(&self) -> f32 {
        self.bounds.height
    }

    pub fn set_edge_policy(&mut self, edge_policy: EdgePolicy) {
        self.bounds.edge_policy = edge_policy;
    }

    /// Changes the world size. Boids outside the new rectangle are brought
    /// back by the edge policy on their next tick.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds.width = width;
        self.bounds.height = height;
    }

    /// Adds a flock and returns its index.
    pub fn add_flock(&mut self, flock: Flock) -> usize {
        self.flocks.push(flock);
        let index = self.flocks.len() - 1;
        log::debug!("added flock {} ({} boids)", index, self.flocks[index].len());
        index
    }

    /// Removes the flock at `index`, shifting later flocks down by one.
    pub fn remove_flock(&mut self, index: usize) -> Option<Flock> {
        if index >= self.flocks.len() {
            return None;
        }
        let flock = self.flocks.remove(index);
        log::debug!("removed flock {} ({} boids)", index, flock.len());
        Some(flock)
    }

    pub fn flock(&self, index: usize) -> Option<&Flock> {
        self.flocks.get(index)
    }

    pub fn flock_mut(&mut self, index: usize) -> Option<&mut Flock> {
        self.flocks.get_mut(index)
    }

    pub fn flocks(&self) -> &[Flock] {
        &self.flocks
    }

    pub fn flock_count(&self) -> usize {
        self.flocks.len()
    }

    pub fn boid_count(&self) -> usize {
        self.flocks.iter().map(Flock::len).sum()
    }

    /// Number of completed [`World::update`] calls.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advances every flock by exactly one tick, in flock order.
    pub fn update(&mut self) {
        let bounds = self.bounds;
        for flock in self.flocks.iter_mut() {
            flock.update(&bounds);
        }
        self.ticks += 1;
    }
}
