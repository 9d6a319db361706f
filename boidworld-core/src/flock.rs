use alloc::vec::Vec;

use rand::Rng;

use crate::{Boid, Bounds, Steering};

/// How the boids of one flock see each other within a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateOrder {
    /// Boids move one after another, in collection order, in place. Boid `i`
    /// sees boids `< i` at their new positions and boids `> i` at their old
    /// ones, so the result depends on the order of the collection.
    #[default]
    Sequential,
    /// Every boid steers from the state at the start of the tick, then all of
    /// them move. Produces different trajectories from `Sequential`.
    Simultaneous,
}

/// Tunables shared by every boid of a flock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlockParams {
    pub perception_radius: f32,
    /// Stored but never consulted: neighbors are not filtered by field of view.
    pub perception_angle: f32,
    pub cohesion_weight: f32,
    pub alignment_weight: f32,
    pub separation_weight: f32,
    pub update_order: UpdateOrder,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            perception_radius: 465.0,
            perception_angle: 2.8,
            cohesion_weight: 0.18,
            alignment_weight: 0.01,
            separation_weight: 0.13,
            update_order: UpdateOrder::default(),
        }
    }
}

/// A fixed-capacity group of boids that only perceive each other.
#[derive(Debug, Clone)]
pub struct Flock {
    boids: Vec<Boid>,
    capacity: usize,
    pub params: FlockParams,
}

impl Flock {
    pub fn new(capacity: usize) -> Self {
        Self::with_params(capacity, FlockParams::default())
    }

    pub fn with_params(capacity: usize, params: FlockParams) -> Self {
        Self {
            boids: Vec::with_capacity(capacity),
            capacity,
            params,
        }
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn boid(&self, index: usize) -> Option<&Boid> {
        self.boids.get(index)
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    /// Maximum number of boids this flock holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.boids.len() >= self.capacity
    }

    /// Appends a boid, assigning its index. Hands the boid back when the
    /// flock is already full.
    pub fn add_boid(&mut self, mut boid: Boid) -> Result<(), Boid> {
        if self.is_full() {
            return Err(boid);
        }
        boid.index = self.boids.len();
        self.boids.push(boid);
        Ok(())
    }

    /// Fills the flock up to its capacity with randomly placed boids.
    pub fn populate_with<R: Rng + ?Sized>(&mut self, bounds: &Bounds, rng: &mut R) {
        let before = self.boids.len();
        while !self.is_full() {
            let mut boid = Boid::random_with(bounds, rng);
            boid.index = self.boids.len();
            self.boids.push(boid);
        }
        log::debug!(
            "populated flock with {} boids ({} total) in {}x{}",
            self.boids.len() - before,
            self.boids.len(),
            bounds.width,
            bounds.height
        );
    }

    #[cfg(feature = "std")]
    pub fn populate(&mut self, bounds: &Bounds) {
        self.populate_with(bounds, &mut rand::thread_rng());
    }

    /// Advances every boid by one tick.
    pub fn update(&mut self, bounds: &Bounds) {
        match self.params.update_order {
            UpdateOrder::Sequential => {
                for i in 0..self.boids.len() {
                    let steering = self.boids[i].steer(&self.boids, &self.params);
                    self.boids[i].advance(&steering, bounds);
                }
            }
            UpdateOrder::Simultaneous => {
                let steering: Vec<Steering> = self
                    .boids
                    .iter()
                    .map(|boid| boid.steer(&self.boids, &self.params))
                    .collect();

                for (boid, steering) in self.boids.iter_mut().zip(steering.iter()) {
                    boid.advance(steering, bounds);
                }
            }
        }
        log::trace!("flock of {} boids advanced", self.boids.len());
    }
}
