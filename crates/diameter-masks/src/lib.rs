//! Umbrella crate for the `diameter-masks` workspace.
//!
//! Re-exports the lattice primitives, the diameter cache and the diameter
//! feature set.

pub use dm_core::*;
pub use dm_diameter::*;
pub use dm_features::*;
