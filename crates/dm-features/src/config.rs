use serde::{Deserialize, Serialize};

/// Run-wide settings for diameter features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiameterFeatureConfig {
    /// Ring radius whose lattice points define the diameter directions.
    pub radius: u32,
    /// Disk radius whose diameters are generated before the first record.
    pub cache_seed_radius: u32,
}

impl Default for DiameterFeatureConfig {
    fn default() -> Self {
        Self {
            radius: 5,
            cache_seed_radius: dm_diameter::DEFAULT_SEED_RADIUS,
        }
    }
}
