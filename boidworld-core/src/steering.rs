//! Neighbor discovery and the three Reynolds steering rules.
//!
//! Neighbors are found by scanning the whole flock. A boid B is a neighbor of
//! A when `0 < distance(A, B) < perception_radius`; the strict lower bound is
//! what keeps A out of its own neighbor set (and also drops any boid sitting
//! exactly on top of A).

use crate::{Boid, FlockParams, Vector2D};

/// A boid within perception range, with its distance to the querying boid.
#[derive(Debug, Clone, Copy)]
pub struct Neighbor<'a> {
    pub boid: &'a Boid,
    pub distance: f32,
}

/// Iterates the neighbors of `boid` among `others`, in collection order.
pub fn neighbors<'a>(
    boid: &'a Boid,
    others: &'a [Boid],
    perception_radius: f32,
) -> impl Iterator<Item = Neighbor<'a>> + 'a {
    others.iter().filter_map(move |other| {
        let distance = boid.position.distance(&other.position);
        if distance > 0.0 && distance < perception_radius {
            Some(Neighbor {
                boid: other,
                distance,
            })
        } else {
            None
        }
    })
}

/// Weighted steering vectors for one boid and one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Steering {
    pub alignment: Vector2D,
    pub cohesion: Vector2D,
    pub separation: Vector2D,
    /// Number of neighbors the rules were computed over.
    pub neighbors: usize,
}

impl Steering {
    /// Runs the neighbor query for `boid` over `others` and combines the
    /// alignment, cohesion and separation rules with the flock's weights.
    ///
    /// With no neighbors every component is zero.
    pub fn compute(boid: &Boid, others: &[Boid], params: &FlockParams) -> Self {
        let mut align_sum = Vector2D::zero();
        let mut cohesion_sum = Vector2D::zero();
        let mut separation_sum = Vector2D::zero();
        let mut total = 0usize;

        for neighbor in neighbors(boid, others, params.perception_radius) {
            align_sum += neighbor.boid.velocity;
            cohesion_sum += neighbor.boid.position;
            separation_sum += (boid.position - neighbor.boid.position) / neighbor.distance;
            total += 1;
        }

        if total == 0 {
            return Self::default();
        }

        let count = total as f32;
        Self {
            alignment: (align_sum / count).normalize() * params.alignment_weight,
            // steer toward the neighbors' centre, not toward the centre itself
            cohesion: (cohesion_sum / count - boid.position).normalize() * params.cohesion_weight,
            separation: (separation_sum / count).normalize() * params.separation_weight,
            neighbors: total,
        }
    }

    pub fn has_neighbors(&self) -> bool {
        self.neighbors > 0
    }

    /// Sum of the three rules, added alignment first, then cohesion, then
    /// separation.
    pub fn acceleration(&self) -> Vector2D {
        let mut acceleration = Vector2D::zero();
        acceleration += self.alignment;
        acceleration += self.cohesion;
        acceleration += self.separation;
        acceleration
    }
}
