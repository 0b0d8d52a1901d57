use dm_core::Point2i;
use serde::{Deserialize, Serialize};

use crate::error::FeatureError;
use crate::provider::{DisplayColor, ImageSet, ScoreBank};

/// Value kind of one feature, as reported to the consuming classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FeatureType {
    Number,
}

/// A block of contiguous features inside a per-pixel record.
///
/// Position `i` of the block is written to `record[offset + i]` by
/// [`FeatureSet::build_features_into_record`], and the metadata accessors
/// describe the same position `i`.
pub trait FeatureSet {
    /// Captures run-wide state such as channel names and colors.
    fn initialize_for_run(&mut self, image_set: &dyn ImageSet);

    /// Fetches the per-image data needed to build records for `image_id`.
    fn initialize_for_image(
        &mut self,
        bank: &dyn ScoreBank,
        image_id: &str,
    ) -> Result<(), FeatureError>;

    fn num_features(&self) -> usize;

    /// Writes this block's features for the pixel at `center` into
    /// `record[offset..offset + self.num_features()]`.
    fn build_features_into_record(
        &self,
        center: Point2i,
        record: &mut [f64],
        offset: usize,
    ) -> Result<(), FeatureError>;

    /// # Panics
    /// Panics if `index >= self.num_features()`.
    fn feature_type(&self, index: usize) -> FeatureType;

    /// # Panics
    /// Panics if `index >= self.num_features()`.
    fn feature_name(&self, index: usize) -> String;

    /// # Panics
    /// Panics if `index >= self.num_features()`.
    fn feature_color(&self, index: usize) -> DisplayColor;

    /// Inserts this block's types into `types` starting at `offset`.
    ///
    /// # Panics
    /// Panics if `offset > types.len()`.
    fn update_feature_types(&self, types: &mut Vec<FeatureType>, offset: usize) {
        let block: Vec<_> = (0..self.num_features())
            .map(|i| self.feature_type(i))
            .collect();
        types.splice(offset..offset, block);
    }

    /// Inserts this block's names into `names` starting at `offset`.
    ///
    /// # Panics
    /// Panics if `offset > names.len()`.
    fn update_feature_names(&self, names: &mut Vec<String>, offset: usize) {
        let block: Vec<_> = (0..self.num_features())
            .map(|i| self.feature_name(i))
            .collect();
        names.splice(offset..offset, block);
    }

    /// Inserts this block's colors into `colors` starting at `offset`.
    ///
    /// # Panics
    /// Panics if `offset > colors.len()`.
    fn update_feature_colors(&self, colors: &mut Vec<DisplayColor>, offset: usize) {
        let block: Vec<_> = (0..self.num_features())
            .map(|i| self.feature_color(i))
            .collect();
        colors.splice(offset..offset, block);
    }
}
