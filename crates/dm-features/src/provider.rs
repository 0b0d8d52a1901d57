use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use dm_core::ScoreMatrix;
use log::debug;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::FeatureError;

/// RGB display color used by feature browsers.
pub type DisplayColor = [u8; 3];

/// Score matrices of one image, keyed by channel name.
pub type ChannelScores = HashMap<String, Arc<ScoreMatrix>>;

/// Source of channel names and their display colors for a run.
pub trait ImageSet {
    /// Channel names in the order features are emitted.
    fn channel_names(&self) -> Vec<String>;

    fn channel_color(&self, name: &str) -> Option<DisplayColor>;
}

/// Per-image score storage.
///
/// Implementations own any memoization: repeated requests for one image
/// should not rebuild its matrices.
pub trait ScoreBank {
    fn get_or_add_scores(&self, image_id: &str) -> Result<Arc<ChannelScores>, FeatureError>;
}

/// Ordered channel list with one color per channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSet {
    channels: Vec<(String, DisplayColor)>,
}

impl ChannelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Red, green and blue channels in that order.
    pub fn rgb() -> Self {
        Self::new()
            .with_channel("red", [255, 0, 0])
            .with_channel("green", [0, 255, 0])
            .with_channel("blue", [0, 0, 255])
    }

    /// Appends a channel; a repeated name replaces the earlier color in place.
    pub fn with_channel(mut self, name: impl Into<String>, color: DisplayColor) -> Self {
        let name = name.into();
        match self.channels.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = color,
            None => self.channels.push((name, color)),
        }
        self
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl ImageSet for ChannelSet {
    fn channel_names(&self) -> Vec<String> {
        self.channels.iter().map(|(n, _)| n.clone()).collect()
    }

    fn channel_color(&self, name: &str) -> Option<DisplayColor> {
        self.channels
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, c)| c)
    }
}

type ScoreLoader = dyn Fn(&str) -> Result<ChannelScores, FeatureError> + Send + Sync;

/// In-memory score bank.
///
/// Scores are either inserted up front or produced on first request by an
/// optional loader; either way each image is built at most once.
pub struct MemoryScoreBank {
    scores: Mutex<HashMap<String, Arc<ChannelScores>>>,
    loader: Option<Box<ScoreLoader>>,
}

impl Default for MemoryScoreBank {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryScoreBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryScoreBank")
            .field("images", &self.len())
            .field("has_loader", &self.loader.is_some())
            .finish()
    }
}

impl MemoryScoreBank {
    pub fn new() -> Self {
        Self {
            scores: Mutex::new(HashMap::new()),
            loader: None,
        }
    }

    pub fn with_loader<F>(loader: F) -> Self
    where
        F: Fn(&str) -> Result<ChannelScores, FeatureError> + Send + Sync + 'static,
    {
        Self {
            scores: Mutex::new(HashMap::new()),
            loader: Some(Box::new(loader)),
        }
    }

    pub fn insert(&self, image_id: impl Into<String>, scores: ChannelScores) {
        self.scores.lock().insert(image_id.into(), Arc::new(scores));
    }

    /// Number of images currently held.
    pub fn len(&self) -> usize {
        self.scores.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ScoreBank for MemoryScoreBank {
    fn get_or_add_scores(&self, image_id: &str) -> Result<Arc<ChannelScores>, FeatureError> {
        // The lock is held across loading so one image is never built twice.
        let mut scores = self.scores.lock();
        if let Some(found) = scores.get(image_id) {
            return Ok(found.clone());
        }

        let loader = self
            .loader
            .as_ref()
            .ok_or_else(|| FeatureError::UnknownImage(image_id.to_owned()))?;
        let loaded = Arc::new(loader(image_id)?);
        debug!(
            "score bank loaded image '{image_id}' with {} channels",
            loaded.len()
        );
        scores.insert(image_id.to_owned(), loaded.clone());
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use dm_core::ScoreMatrix;

    use super::{ChannelScores, ChannelSet, ImageSet, MemoryScoreBank, ScoreBank};
    use crate::error::FeatureError;

    fn one_channel(value: i32) -> ChannelScores {
        let m = ScoreMatrix::filled(2, 2, value).expect("valid matrix");
        ChannelScores::from([("gray".to_owned(), Arc::new(m))])
    }

    #[test]
    fn channel_set_keeps_insertion_order() {
        let set = ChannelSet::new()
            .with_channel("dapi", [0, 0, 255])
            .with_channel("cd3", [0, 255, 0])
            .with_channel("dapi", [10, 10, 10]);

        assert_eq!(set.channel_names(), vec!["dapi", "cd3"]);
        assert_eq!(set.channel_color("dapi"), Some([10, 10, 10]));
        assert_eq!(set.channel_color("ki67"), None);
        assert_eq!(ChannelSet::rgb().len(), 3);
    }

    #[test]
    fn bank_without_loader_reports_unknown_images() {
        let bank = MemoryScoreBank::new();
        bank.insert("a.png", one_channel(3));

        let scores = bank.get_or_add_scores("a.png").expect("inserted image");
        assert!(scores.contains_key("gray"));
        assert_eq!(
            bank.get_or_add_scores("b.png").unwrap_err(),
            FeatureError::UnknownImage("b.png".to_owned())
        );
    }

    #[test]
    fn loader_runs_once_per_image() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let bank = MemoryScoreBank::with_loader(move |_id| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(one_channel(1))
        });

        let first = bank.get_or_add_scores("x").expect("loaded");
        let second = bank.get_or_add_scores("x").expect("cached");
        bank.get_or_add_scores("y").expect("loaded");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn loader_errors_are_not_cached() {
        let bank = MemoryScoreBank::with_loader(|id| {
            Err(FeatureError::Load {
                image: id.to_owned(),
                reason: "unreadable".to_owned(),
            })
        });

        assert!(matches!(
            bank.get_or_add_scores("bad"),
            Err(FeatureError::Load { .. })
        ));
        assert!(bank.is_empty());
    }
}
