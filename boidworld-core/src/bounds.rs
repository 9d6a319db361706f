use crate::{Boid, Vector2D};

/// What happens to a boid that leaves the world rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Toroidal wrap: leaving one edge re-enters at the opposite edge.
    #[default]
    Wrap,
    /// Flip the offending velocity component. The position is left untouched,
    /// so the boid travels back in on the following ticks.
    Bounce,
}

/// World rectangle `(0, width] x (0, height]` plus the edge policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
    pub edge_policy: EdgePolicy,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            edge_policy: EdgePolicy::default(),
        }
    }

    pub fn with_edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }

    pub fn contains(&self, position: &Vector2D) -> bool {
        position.x > 0.0
            && position.x <= self.width
            && position.y > 0.0
            && position.y <= self.height
    }

    /// Applies the edge policy to a boid after integration.
    pub fn apply(&self, boid: &mut Boid) {
        match self.edge_policy {
            EdgePolicy::Wrap => boid.position = self.wrap(boid.position),
            EdgePolicy::Bounce => boid.velocity = self.bounce(boid.position, boid.velocity),
        }
    }

    /// Per axis: `<= 0` jumps to the far edge, `> extent` jumps to `0`.
    pub fn wrap(&self, position: Vector2D) -> Vector2D {
        Vector2D::new(
            wrap_axis(position.x, self.width),
            wrap_axis(position.y, self.height),
        )
    }

    pub fn bounce(&self, position: Vector2D, velocity: Vector2D) -> Vector2D {
        Vector2D::new(
            bounce_axis(position.x, velocity.x, self.width),
            bounce_axis(position.y, velocity.y, self.height),
        )
    }
}

fn wrap_axis(value: f32, extent: f32) -> f32 {
    if value <= 0.0 {
        extent
    } else if value > extent {
        0.0
    } else {
        value
    }
}

fn bounce_axis(value: f32, velocity: f32, extent: f32) -> f32 {
    if value < 0.0 || value > extent {
        -velocity
    } else {
        velocity
    }
}
