#![cfg_attr(not(feature = "std"), no_std)]

//! Reynolds flocking for 2D boids.
//!
//! A [`World`] owns [`Flock`]s, a flock owns its [`Boid`]s. One call to
//! [`World::update`] is one tick: every flock advances in order, and inside a
//! flock every boid runs neighbor query, steering, integration and the edge
//! policy before the next boid runs (see [`UpdateOrder`]).
//!
//! ```
//! use boidworld_core::{Flock, World};
//!
//! let mut world = World::new(800.0, 600.0);
//! let mut flock = Flock::new(50);
//! flock.populate(world.bounds());
//! world.add_flock(flock);
//!
//! world.update();
//! assert_eq!(world.boid_count(), 50);
//! ```

extern crate alloc;

mod boid;
mod bounds;
mod flock;
pub mod steering;
mod vector;
mod world;

pub use boid::{Boid, SPEED_CEILING, SPEED_FLOOR};
pub use bounds::{Bounds, EdgePolicy};
pub use flock::{Flock, FlockParams, UpdateOrder};
pub use steering::Steering;
pub use vector::Vector2D;
pub use world::World;
