use crate::Error;
use crate::border::BorderMode;
use crate::geom::Point2i;
use crate::image::{Image, ImageView, to_i32};
use crate::sample::sample_at;

/// Read-only per-channel intensity lookup over image-absolute coordinates.
///
/// Implementations must return a defined value for every coordinate,
/// including ones outside the image.
pub trait ScoreSource {
    fn score_at(&self, x: i32, y: i32) -> i32;

    fn score_at_point(&self, p: Point2i) -> i32 {
        self.score_at(p.x, p.y)
    }
}

impl<S: ScoreSource + ?Sized> ScoreSource for &S {
    fn score_at(&self, x: i32, y: i32) -> i32 {
        (**self).score_at(x, y)
    }
}

/// Integer score matrix for one channel of one image.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    scores: Image<i32>,
    border: BorderMode<i32>,
}

impl ScoreMatrix {
    pub fn new(scores: Image<i32>, border: BorderMode<i32>) -> Result<Self, Error> {
        if i32::try_from(scores.width()).is_err() || i32::try_from(scores.height()).is_err() {
            return Err(Error::DimensionOverflow {
                width: scores.width(),
                height: scores.height(),
            });
        }
        Ok(Self { scores, border })
    }

    pub fn from_vec(width: usize, height: usize, data: Vec<i32>) -> Result<Self, Error> {
        Self::new(Image::from_vec(width, height, data)?, BorderMode::default())
    }

    pub fn from_u8(view: &ImageView<'_, u8>) -> Result<Self, Error> {
        Self::new(to_i32(view), BorderMode::default())
    }

    pub fn filled(width: usize, height: usize, value: i32) -> Result<Self, Error> {
        Self::new(Image::new_fill(width, height, value)?, BorderMode::default())
    }

    pub fn with_border(mut self, border: BorderMode<i32>) -> Self {
        self.border = border;
        self
    }

    pub fn width(&self) -> usize {
        self.scores.width()
    }

    pub fn height(&self) -> usize {
        self.scores.height()
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn border(&self) -> &BorderMode<i32> {
        &self.border
    }

    pub fn as_image(&self) -> &Image<i32> {
        &self.scores
    }
}

impl ScoreSource for ScoreMatrix {
    fn score_at(&self, x: i32, y: i32) -> i32 {
        if self.is_empty() {
            // Nothing to clamp or reflect onto.
            return match self.border {
                BorderMode::Constant(v) => v,
                _ => 0,
            };
        }
        sample_at(&self.scores.as_view(), x, y, &self.border)
    }
}

#[cfg(test)]
mod tests {
    use super::{ScoreMatrix, ScoreSource};
    use crate::border::BorderMode;
    use crate::geom::Point2i;
    use crate::image::Image;

    #[test]
    fn reads_inside_and_clips_outside_by_default() {
        let m = ScoreMatrix::from_vec(2, 2, vec![1, 2, 3, 4]).expect("valid matrix");

        assert_eq!(m.score_at(1, 0), 2);
        assert_eq!(m.score_at_point(Point2i::new(0, 1)), 3);
        assert_eq!(m.score_at(-1, 0), 0);
        assert_eq!(m.score_at(2, 2), 0);
    }

    #[test]
    fn border_policy_is_configurable() {
        let m = ScoreMatrix::from_vec(2, 2, vec![1, 2, 3, 4])
            .expect("valid matrix")
            .with_border(BorderMode::Clamp);

        assert_eq!(m.score_at(-4, -4), 1);
        assert_eq!(m.score_at(7, 7), 4);
        assert_eq!(m.border(), &BorderMode::Clamp);
    }

    #[test]
    fn empty_matrix_reads_zero_under_every_border() {
        for border in [BorderMode::Clamp, BorderMode::Reflect101] {
            let m = ScoreMatrix::from_vec(0, 0, vec![])
                .expect("empty matrix")
                .with_border(border);
            assert!(m.is_empty());
            assert_eq!(m.score_at(0, 0), 0);
            assert_eq!(m.score_at(-3, 8), 0);
        }

        let fill = ScoreMatrix::from_vec(0, 3, vec![])
            .expect("empty matrix")
            .with_border(BorderMode::Constant(9));
        assert_eq!(fill.score_at(1, 1), 9);
    }

    #[test]
    fn filled_reports_size_overflow() {
        assert!(ScoreMatrix::filled(usize::MAX, 2, 1).is_err());

        let m = ScoreMatrix::filled(3, 2, 5).expect("valid matrix");
        assert_eq!(m.score_at(2, 1), 5);
        assert_eq!(m.score_at(3, 1), 0);
    }

    #[test]
    fn from_u8_widens_values() {
        let img = Image::from_vec(2, 1, vec![200u8, 255]).expect("valid image");
        let m = ScoreMatrix::from_u8(&img.as_view()).expect("valid matrix");

        assert_eq!(m.score_at(0, 0), 200);
        assert_eq!(m.score_at(1, 0), 255);
        assert_eq!(m.as_image().data(), &[200, 255]);
    }
}
