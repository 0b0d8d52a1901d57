//! Lattice diameters through the origin and the scores summed along them.
//!
//! A diameter is the rasterized segment from an endpoint `t` to `-t`. Only
//! first-octant slopes are rasterized: every endpoint is first reflected into
//! the upper half-plane, then mapped into `0 <= y <= x` by one of four
//! [`Octant`] transforms, stepped with Bresenham, mapped back and mirrored.
//!
//! Diameters are memoized in a [`DiameterCache`]. The cache is safe to share
//! across threads: hits take a read lock, misses generate without any lock
//! and install with insert-if-absent, so racing generators agree on one
//! allocation per antipodal pair.

mod cache;
mod octant;
mod score;

pub use cache::{DEFAULT_SEED_RADIUS, Diameter, DiameterCache};
pub use octant::{Octant, to_upper_half_plane};
pub use score::diameter_score;
