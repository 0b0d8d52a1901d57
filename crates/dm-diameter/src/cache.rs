use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use dm_core::{Point2i, points_in_disk};
use log::{debug, trace};
use parking_lot::RwLock;

use crate::octant::{Octant, to_upper_half_plane};

/// Radius of the disk whose diameters are generated up front.
pub const DEFAULT_SEED_RADIUS: u32 = 5;

/// Lattice points on the segment between an endpoint and its reflection
/// through the origin.
///
/// The half-diameter from the origin to the upper-half-plane endpoint comes
/// first, followed by the negations of its non-origin points. Shared between
/// the two antipodal cache keys.
pub type Diameter = Arc<[Point2i]>;

/// Memoized diameters keyed by endpoint.
///
/// The cache only grows. Both `t` and `-t` resolve to the same [`Diameter`]
/// allocation.
#[derive(Debug)]
pub struct DiameterCache {
    diameters: RwLock<HashMap<Point2i, Diameter>>,
}

impl Default for DiameterCache {
    fn default() -> Self {
        Self::new()
    }
}

impl DiameterCache {
    /// Cache holding only the zero diameter.
    pub fn new() -> Self {
        let mut diameters = HashMap::new();
        diameters.insert(Point2i::ORIGIN, Diameter::from([Point2i::ORIGIN]));
        Self {
            diameters: RwLock::new(diameters),
        }
    }

    /// Cache seeded with every diameter whose endpoint lies within `radius`.
    pub fn with_radius(radius: u32) -> Self {
        let cache = Self::new();
        cache.build(radius);
        cache
    }

    /// Process-wide cache, seeded with [`DEFAULT_SEED_RADIUS`] on first use.
    pub fn shared() -> Arc<DiameterCache> {
        static SHARED: OnceLock<Arc<DiameterCache>> = OnceLock::new();
        SHARED
            .get_or_init(|| Arc::new(DiameterCache::with_radius(DEFAULT_SEED_RADIUS)))
            .clone()
    }

    /// Generates diameters for every lattice point within `radius`.
    pub fn build(&self, radius: u32) {
        let disk = points_in_disk(radius);
        for &t in &disk {
            self.get(t);
        }
        debug!(
            "diameter cache seeded to radius {radius}: {} disk points, {} keys",
            disk.len(),
            self.len()
        );
    }

    /// Returns the diameter through `endpoint`, generating it on a miss.
    pub fn get(&self, endpoint: Point2i) -> Diameter {
        if let Some(d) = self.diameters.read().get(&endpoint) {
            return d.clone();
        }
        self.generate(endpoint)
    }

    pub fn contains(&self, endpoint: Point2i) -> bool {
        self.diameters.read().contains_key(&endpoint)
    }

    /// Number of keys, counting antipodal aliases separately.
    pub fn len(&self) -> usize {
        self.diameters.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diameters.read().is_empty()
    }

    fn generate(&self, endpoint: Point2i) -> Diameter {
        if endpoint.is_origin() {
            return Diameter::from([Point2i::ORIGIN]);
        }

        let canonical = to_upper_half_plane(endpoint);
        let fresh: Diameter = rasterize_diameter(canonical).into();

        // Generation runs unlocked. A racing thread may have installed the
        // same pair meanwhile; its copy wins and ours is dropped.
        let mut diameters = self.diameters.write();
        let winner = diameters.entry(canonical).or_insert(fresh).clone();
        diameters.entry(-canonical).or_insert_with(|| winner.clone());
        trace!(
            "generated diameter through ({}, {}): {} points",
            canonical.x,
            canonical.y,
            winner.len()
        );
        winner
    }
}

/// Full diameter through a nonzero upper-half-plane endpoint.
fn rasterize_diameter(canonical: Point2i) -> Vec<Point2i> {
    let octant = Octant::classify(canonical);
    let reduced = octant.to_first(canonical);

    let half = half_diameter_first_octant(reduced.x, reduced.y);
    let mut points = Vec::with_capacity(2 * half.len() - 1);
    points.extend(half.iter().map(|&p| octant.from_first(p)));
    for i in 1..half.len() {
        points.push(-points[i]);
    }
    points
}

/// Bresenham stepping from the origin to `(x1, y1)` with `0 <= y1 <= x1`,
/// `x1 > 0`. Yields exactly `x1 + 1` points.
///
/// `err` tracks `2 * x1 * (accumulated slope error)`; y advances once the
/// error strictly exceeds one half, so exact half ties stay on the row.
fn half_diameter_first_octant(x1: i32, y1: i32) -> Vec<Point2i> {
    debug_assert!(x1 > 0 && (0..=x1).contains(&y1));

    let (dx, dy) = (x1 as i64, y1 as i64);
    let mut points = Vec::with_capacity(x1 as usize + 1);
    let mut y = 0;
    let mut err = 0i64;
    points.push(Point2i::ORIGIN);
    for x in 1..=x1 {
        err += 2 * dy;
        if err > dx {
            y += 1;
            err -= 2 * dx;
        }
        points.push(Point2i::new(x, y));
    }
    points
}
