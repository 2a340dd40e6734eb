use glam::DVec2;
use quadtree::Boundary;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A single simulated driver wandering the world.
#[derive(Debug)]
pub struct Driver {
    /// Driver ID, used as the index payload.
    id: u32,
    /// Current position.
    position: DVec2,
    rng: StdRng,
}

impl Driver {
    /// Create a driver at a uniformly random position inside `world`.
    pub fn new(id: u32, world: &Boundary) -> Self {
        let mut rng = StdRng::from_os_rng();
        let position = DVec2::new(
            rng.random_range(world.min_x()..world.max_x()),
            rng.random_range(world.min_y()..world.max_y()),
        );
        Self { id, position, rng }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Advance one relocation: a uniform jitter of at most half `step_range`
    /// per axis, wrapped into the world box.
    pub fn step(&mut self, world: &Boundary, step_range: f64) -> DVec2 {
        let jitter = DVec2::new(
            (self.rng.random::<f64>() - 0.5) * step_range,
            (self.rng.random::<f64>() - 0.5) * step_range,
        );
        let moved = self.position + jitter;
        self.position = DVec2::new(
            wrap(moved.x, world.min_x(), world.max_x()),
            wrap(moved.y, world.min_y(), world.max_y()),
        );
        self.position
    }
}

/// Wrap a coordinate into the half-open interval `[min, max)`.
fn wrap(value: f64, min: f64, max: f64) -> f64 {
    let wrapped = min + (value - min).rem_euclid(max - min);
    // rem_euclid can round up to the excluded edge.
    if wrapped >= max {
        min
    } else {
        wrapped
    }
}
