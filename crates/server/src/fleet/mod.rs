//! Simulated driver fleet.
//!
//! One task per driver: enter the index at a random position, then relocate
//! on a fixed interval as a remove-then-insert pair against the shared tree.

mod driver;

pub use driver::Driver;

use crate::config::Config;
use quadtree::{Boundary, Point, QuadTree};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Spawn every driver task. Starts are staggered so thousands of initial
/// inserts do not land on the same tick; tasks then run until the process
/// exits.
pub fn spawn(tree: Arc<QuadTree<u32>>, config: &Config) {
    let world = config.world.boundary();
    let interval = Duration::from_millis(config.fleet.move_interval_ms);
    let max_delay = config.fleet.max_spawn_delay_ms;
    let step_range = config.fleet.step_range;

    for id in 0..config.fleet.drivers as u32 {
        let tree = Arc::clone(&tree);
        let delay = Duration::from_millis(rand::rng().random_range(0..=max_delay));
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let driver = Driver::new(id, &world);
            run_driver(driver, tree, world, interval, step_range).await;
        });
    }

    info!("Spawned {} driver tasks", config.fleet.drivers);
}

async fn run_driver(
    mut driver: Driver,
    tree: Arc<QuadTree<u32>>,
    world: Boundary,
    interval: Duration,
    step_range: f64,
) {
    let mut current = Point::new(driver.position().x, driver.position().y, driver.id());
    tree.insert(current.clone());
    debug!(
        "Driver {} entered at ({:.3}, {:.3})",
        driver.id(),
        current.x,
        current.y
    );

    loop {
        tokio::time::sleep(interval).await;

        // A move is remove-then-insert; the stored point never mutates.
        tree.remove(&current);
        let next = driver.step(&world, step_range);
        current = Point::new(next.x, next.y, driver.id());
        tree.insert(current.clone());
    }
}
