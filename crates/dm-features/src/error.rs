use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    /// The score bank has no scores for, and cannot load, this image.
    UnknownImage(String),
    MissingChannel { image: String, channel: String },
    /// Records were requested before any image was initialized.
    NotInitialized,
    RecordTooShort { required: usize, actual: usize },
    /// A score loader failed; carries its message.
    Load { image: String, reason: String },
}

impl fmt::Display for FeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownImage(image) => write!(f, "no scores available for image '{image}'"),
            Self::MissingChannel { image, channel } => {
                write!(f, "image '{image}' has no scores for channel '{channel}'")
            }
            Self::NotInitialized => write!(f, "feature set has no image initialized"),
            Self::RecordTooShort { required, actual } => {
                write!(f, "record too short: need {required} values, got {actual}")
            }
            Self::Load { image, reason } => {
                write!(f, "loading scores for image '{image}' failed: {reason}")
            }
        }
    }
}

impl std::error::Error for FeatureError {}
