use std::sync::Arc;

use dm_core::{Point2i, ScoreMatrix, points_on_ring};
use dm_diameter::{DiameterCache, diameter_score};
use log::debug;

use crate::config::DiameterFeatureConfig;
use crate::error::FeatureError;
use crate::feature_set::{FeatureSet, FeatureType};
use crate::provider::{DisplayColor, ImageSet, ScoreBank};

/// Color reported for channels the image set has no color for.
pub const UNKNOWN_CHANNEL_COLOR: DisplayColor = [128, 128, 128];

/// One diameter score per (channel, direction) for each sampled pixel.
///
/// Directions are the ring points at the configured radius that lie in the
/// upper half-plane, so each diameter is scored once. Features are laid out
/// channel-major: all directions of the first channel, then the next.
#[derive(Debug, Clone)]
pub struct DiameterFeatureSet {
    cache: Arc<DiameterCache>,
    radius: u32,
    endpoints: Vec<Point2i>,
    channels: Vec<String>,
    colors: Vec<DisplayColor>,
    image: Option<ImageScores>,
}

#[derive(Debug, Clone)]
struct ImageScores {
    image_id: String,
    // Parallel to `channels`.
    matrices: Vec<Arc<ScoreMatrix>>,
}

impl DiameterFeatureSet {
    /// Feature set backed by the process-wide diameter cache.
    pub fn new(config: &DiameterFeatureConfig) -> Self {
        let cache = DiameterCache::shared();
        if config.cache_seed_radius > dm_diameter::DEFAULT_SEED_RADIUS {
            cache.build(config.cache_seed_radius);
        }
        Self::with_cache(config, cache)
    }

    /// Feature set backed by a caller-owned cache.
    pub fn with_cache(config: &DiameterFeatureConfig, cache: Arc<DiameterCache>) -> Self {
        Self {
            cache,
            radius: config.radius,
            endpoints: direction_endpoints(config.radius),
            channels: Vec::new(),
            colors: Vec::new(),
            image: None,
        }
    }

    /// Feature set over an explicit direction list instead of a ring.
    ///
    /// Directions are used in the given order; callers are responsible for
    /// not listing a direction together with its antipode.
    pub fn with_directions(endpoints: Vec<Point2i>, cache: Arc<DiameterCache>) -> Self {
        let radius = endpoints
            .iter()
            .map(|t| (t.norm_sq() as f64).sqrt().round() as u32)
            .max()
            .unwrap_or(0);
        Self {
            cache,
            radius,
            endpoints,
            channels: Vec::new(),
            colors: Vec::new(),
            image: None,
        }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn endpoints(&self) -> &[Point2i] {
        &self.endpoints
    }

    pub fn channels(&self) -> &[String] {
        &self.channels
    }

    pub fn cache(&self) -> &Arc<DiameterCache> {
        &self.cache
    }

    /// Identifier of the image whose scores are currently loaded.
    pub fn image_id(&self) -> Option<&str> {
        self.image.as_ref().map(|s| s.image_id.as_str())
    }

    /// Builds a fresh record holding only this block's features.
    pub fn build_record(&self, center: Point2i) -> Result<Vec<f64>, FeatureError> {
        let mut record = vec![0.0; self.num_features()];
        self.build_features_into_record(center, &mut record, 0)?;
        Ok(record)
    }

    /// Builds one record per center, spreading centers over the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn build_records(&self, centers: &[Point2i]) -> Result<Vec<Vec<f64>>, FeatureError> {
        use rayon::prelude::*;

        centers
            .par_iter()
            .map(|&center| self.build_record(center))
            .collect()
    }

    fn split_index(&self, index: usize) -> (usize, usize) {
        assert!(
            index < self.num_features(),
            "feature index {index} out of range for {} features",
            self.num_features()
        );
        (index / self.endpoints.len(), index % self.endpoints.len())
    }
}

/// Ring points at `radius` restricted to the upper half-plane, in ring order.
pub fn direction_endpoints(radius: u32) -> Vec<Point2i> {
    points_on_ring(radius)
        .into_iter()
        .filter(|t| t.in_upper_half_plane())
        .collect()
}

impl FeatureSet for DiameterFeatureSet {
    fn initialize_for_run(&mut self, image_set: &dyn ImageSet) {
        self.channels = image_set.channel_names();
        self.colors = self
            .channels
            .iter()
            .map(|c| image_set.channel_color(c).unwrap_or(UNKNOWN_CHANNEL_COLOR))
            .collect();
        self.image = None;
        debug!(
            "diameter features: {} channels x {} directions at radius {}",
            self.channels.len(),
            self.endpoints.len(),
            self.radius
        );
    }

    fn initialize_for_image(
        &mut self,
        bank: &dyn ScoreBank,
        image_id: &str,
    ) -> Result<(), FeatureError> {
        let scores = bank.get_or_add_scores(image_id)?;
        let matrices = self
            .channels
            .iter()
            .map(|channel| {
                scores
                    .get(channel)
                    .cloned()
                    .ok_or_else(|| FeatureError::MissingChannel {
                        image: image_id.to_owned(),
                        channel: channel.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!("diameter features ready for image '{image_id}'");
        self.image = Some(ImageScores {
            image_id: image_id.to_owned(),
            matrices,
        });
        Ok(())
    }

    fn num_features(&self) -> usize {
        self.channels.len() * self.endpoints.len()
    }

    fn build_features_into_record(
        &self,
        center: Point2i,
        record: &mut [f64],
        offset: usize,
    ) -> Result<(), FeatureError> {
        let image = self.image.as_ref().ok_or(FeatureError::NotInitialized)?;
        let required = offset + self.num_features();
        let actual = record.len();
        let out = record
            .get_mut(offset..required)
            .ok_or(FeatureError::RecordTooShort { required, actual })?;

        let pairs = image
            .matrices
            .iter()
            .flat_map(|m| self.endpoints.iter().map(move |&t| (m, t)));
        for (slot, (matrix, endpoint)) in out.iter_mut().zip(pairs) {
            *slot = diameter_score(&self.cache, matrix.as_ref(), center, endpoint) as f64;
        }
        Ok(())
    }

    fn feature_type(&self, index: usize) -> FeatureType {
        self.split_index(index);
        FeatureType::Number
    }

    fn feature_name(&self, index: usize) -> String {
        let (channel, direction) = self.split_index(index);
        format!("{}_diameter_{direction}", self.channels[channel])
    }

    fn feature_color(&self, index: usize) -> DisplayColor {
        let (channel, _) = self.split_index(index);
        self.colors[channel]
    }
}
