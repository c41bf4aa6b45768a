//! Neighbor discovery.
//!
//! A neighbor of boid `i` is any other boid (by index, not by position)
//! strictly closer than the visual range. Every `NeighborQuery` reports
//! neighbors in ascending population order, so strategies are
//! interchangeable without changing trajectories.

use std::collections::HashMap;

use glam::DVec2;

use boids_core::enums::NeighborStrategy;
use boids_core::Boid;

/// Common behaviour of neighbor search strategies.
pub trait NeighborQuery {
    /// Rebuild internal structures from the whole population.
    fn rebuild(&mut self, boids: &[Boid]);

    /// Record that boid `index` moved from `from` to `to`.
    fn relocate(&mut self, index: usize, from: DVec2, to: DVec2);

    /// Write the indices of `index`'s neighbors into `out`, ascending.
    fn find(&self, index: usize, boids: &[Boid], visual_range: f64, out: &mut Vec<usize>);
}

/// Build the query for a configured strategy.
pub fn for_strategy(
    strategy: NeighborStrategy,
    visual_range: f64,
) -> Box<dyn NeighborQuery + Send> {
    match strategy {
        NeighborStrategy::BruteForce => Box::new(BruteForce),
        NeighborStrategy::UniformGrid => Box::new(UniformGrid::new(visual_range)),
    }
}

/// Indices of every boid other than `index` within `visual_range` of it.
pub fn find_neighbors(index: usize, boids: &[Boid], visual_range: f64) -> Vec<usize> {
    let mut out = Vec::new();
    BruteForce.find(index, boids, visual_range, &mut out);
    out
}

/// Linear scan over the whole population.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl NeighborQuery for BruteForce {
    fn rebuild(&mut self, _boids: &[Boid]) {}

    fn relocate(&mut self, _index: usize, _from: DVec2, _to: DVec2) {}

    fn find(&self, index: usize, boids: &[Boid], visual_range: f64, out: &mut Vec<usize>) {
        out.clear();
        let me = &boids[index];
        out.extend(
            boids
                .iter()
                .enumerate()
                .filter(|&(other, boid)| other != index && me.distance_to(boid) < visual_range)
                .map(|(other, _)| other),
        );
    }
}

type Cell = (i64, i64);

/// Uniform grid bucketing boids by cell.
///
/// A query scans every cell that could hold a point within range, then
/// filters by exact distance.
#[derive(Debug, Clone)]
pub struct UniformGrid {
    cell_size: f64,
    buckets: HashMap<Cell, Vec<usize>>,
}

impl UniformGrid {
    /// Create an empty grid. Non-positive sizes fall back to one unit.
    pub fn new(cell_size: f64) -> Self {
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            1.0
        };
        Self {
            cell_size,
            buckets: HashMap::new(),
        }
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of cells currently holding at least one boid.
    pub fn occupied_cells(&self) -> usize {
        self.buckets.len()
    }

    fn cell_of(&self, position: DVec2) -> Cell {
        (
            (position.x / self.cell_size).floor() as i64,
            (position.y / self.cell_size).floor() as i64,
        )
    }
}

impl NeighborQuery for UniformGrid {
    fn rebuild(&mut self, boids: &[Boid]) {
        self.buckets.clear();
        for (index, boid) in boids.iter().enumerate() {
            let cell = self.cell_of(boid.position);
            self.buckets.entry(cell).or_default().push(index);
        }
    }

    fn relocate(&mut self, index: usize, from: DVec2, to: DVec2) {
        let old_cell = self.cell_of(from);
        let new_cell = self.cell_of(to);
        if old_cell == new_cell {
            return;
        }
        if let Some(bucket) = self.buckets.get_mut(&old_cell) {
            if let Some(slot) = bucket.iter().position(|&i| i == index) {
                bucket.swap_remove(slot);
            }
            if bucket.is_empty() {
                self.buckets.remove(&old_cell);
            }
        }
        self.buckets.entry(new_cell).or_default().push(index);
    }

    fn find(&self, index: usize, boids: &[Boid], visual_range: f64, out: &mut Vec<usize>) {
        out.clear();
        if visual_range <= 0.0 {
            return;
        }
        let me = &boids[index];
        let (cx, cy) = self.cell_of(me.position);
        let reach = (visual_range / self.cell_size).ceil() as i64;

        for gx in cx.saturating_sub(reach)..=cx.saturating_add(reach) {
            for gy in cy.saturating_sub(reach)..=cy.saturating_add(reach) {
                let Some(bucket) = self.buckets.get(&(gx, gy)) else {
                    continue;
                };
                out.extend(bucket.iter().copied().filter(|&other| {
                    other != index && me.distance_to(&boids[other]) < visual_range
                }));
            }
        }
        out.sort_unstable();
    }
}
