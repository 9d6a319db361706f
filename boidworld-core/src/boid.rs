use rand::Rng;

use crate::{Bounds, FlockParams, Steering, Vector2D};

/// Speed a boid with neighbors is clamped down to before steering is applied.
pub const SPEED_CEILING: f32 = 4.0;
/// Boids with neighbors slower than this are bumped up to unit speed.
pub const SPEED_FLOOR: f32 = 1.0;

/// A single boid entity.
///
/// A boid does not point back at its flock or world: the flock's parameters
/// and the world's bounds are handed in on every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Boid {
    /// Position in the owning flock, for identification only.
    pub index: usize,
    pub position: Vector2D,
    pub velocity: Vector2D,
    /// Recomputed every tick, never carried over.
    pub acceleration: Vector2D,
}

impl Boid {
    pub fn new(position: Vector2D, velocity: Vector2D) -> Self {
        Self {
            index: 0,
            position,
            velocity,
            acceleration: Vector2D::zero(),
        }
    }

    /// A boid placed uniformly in `[0, width) x [0, height)` with velocity
    /// components in `[-1, 2)`.
    pub fn random_with<R: Rng + ?Sized>(bounds: &Bounds, rng: &mut R) -> Self {
        let position = Vector2D::new(
            rng.gen::<f32>() * bounds.width,
            rng.gen::<f32>() * bounds.height,
        );
        let velocity = Vector2D::new(rng.gen::<f32>() * 3.0 - 1.0, rng.gen::<f32>() * 3.0 - 1.0);
        Self::new(position, velocity)
    }

    #[cfg(feature = "std")]
    pub fn random(bounds: &Bounds) -> Self {
        Self::random_with(bounds, &mut rand::thread_rng())
    }

    pub fn steer(&self, flock: &[Boid], params: &FlockParams) -> Steering {
        Steering::compute(self, flock, params)
    }

    /// `p += v += a`, with the speed ceiling and floor applied to the
    /// incoming velocity only when the boid had neighbors this tick. An
    /// isolated boid coasts at whatever speed it already has.
    pub fn integrate(&mut self, steering: &Steering) {
        self.acceleration = steering.acceleration();

        if steering.has_neighbors() {
            self.velocity = self.velocity.limit(SPEED_CEILING);
            if self.velocity.magnitude() < SPEED_FLOOR {
                self.velocity = self.velocity.normalize();
            }
        }

        self.velocity += self.acceleration;
        self.position += self.velocity;
    }

    /// Integrates and then applies the world's edge policy.
    pub fn advance(&mut self, steering: &Steering, bounds: &Bounds) {
        self.integrate(steering);
        bounds.apply(self);
    }
}
