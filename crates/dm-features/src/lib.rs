//! Diameter score features for per-pixel classification.
//!
//! For every sampled pixel, [`DiameterFeatureSet`] emits one value per
//! (channel, direction) pair: the sum of that channel's scores along the
//! diameter through the pixel in that direction. Values are laid out
//! channel-major, and the metadata accessors of [`FeatureSet`] enumerate
//! names, types and colors in the same order.
//!
//! Collaborators are reached through small traits:
//! - [`ImageSet`] supplies channel names and display colors per run.
//! - [`ScoreBank`] supplies per-image [`ChannelScores`]; [`MemoryScoreBank`]
//!   is an in-memory implementation with an optional loader.
//!
//! With the default `parallel` feature, records for many centers can be
//! built on the rayon pool; the diameter cache is shared across workers.

mod config;
mod diameter_set;
mod error;
mod feature_set;
mod provider;

pub use config::DiameterFeatureConfig;
pub use diameter_set::{DiameterFeatureSet, UNKNOWN_CHANNEL_COLOR, direction_endpoints};
pub use error::FeatureError;
pub use feature_set::{FeatureSet, FeatureType};
pub use provider::{
    ChannelScores, ChannelSet, DisplayColor, ImageSet, MemoryScoreBank, ScoreBank,
};
