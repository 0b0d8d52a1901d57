use dm_core::{Point2i, ScoreSource};

use crate::cache::DiameterCache;

/// Sums `scores` along the diameter through `endpoint`, translated so the
/// diameter's origin sits on `center` (image-absolute).
///
/// Out-of-image reads are resolved by the score source itself.
pub fn diameter_score<S: ScoreSource + ?Sized>(
    cache: &DiameterCache,
    scores: &S,
    center: Point2i,
    endpoint: Point2i,
) -> i64 {
    cache
        .get(endpoint)
        .iter()
        .map(|&d| scores.score_at_point(center + d) as i64)
        .sum()
}

#[cfg(test)]
mod tests {
    use dm_core::{BorderMode, Point2i, ScoreMatrix, ScoreSource};

    use super::diameter_score;
    use crate::cache::DiameterCache;

    struct Constant(i32);

    impl ScoreSource for Constant {
        fn score_at(&self, _x: i32, _y: i32) -> i32 {
            self.0
        }
    }

    #[test]
    fn constant_sources() {
        let cache = DiameterCache::new();
        let origin = Point2i::ORIGIN;

        assert_eq!(
            diameter_score(&cache, &Constant(1), origin, Point2i::new(2, 1)),
            5
        );
        for endpoint in [Point2i::new(2, 1), Point2i::new(-7, 3), origin] {
            let center = Point2i::new(40, -12);
            assert_eq!(diameter_score(&cache, &Constant(0), center, endpoint), 0);
        }
    }

    #[test]
    fn sums_along_translated_diameter() {
        // 5x5 matrix whose value at (x, y) is 10 * y + x.
        let data = (0..5).flat_map(|y| (0..5).map(move |x| 10 * y + x)).collect();
        let m = ScoreMatrix::from_vec(5, 5, data).expect("valid matrix");
        let cache = DiameterCache::new();

        // Horizontal diameter of radius 2 through the center row.
        let row = diameter_score(&cache, &m, Point2i::new(2, 2), Point2i::new(2, 0));
        assert_eq!(row, 20 + 21 + 22 + 23 + 24);

        // (2, 1) diameter at center (2, 2): (2,2) (3,2) (4,3) (1,2) (0,1).
        let sloped = diameter_score(&cache, &m, Point2i::new(2, 2), Point2i::new(2, 1));
        assert_eq!(sloped, 22 + 23 + 34 + 21 + 10);
    }

    #[test]
    fn edge_reads_follow_matrix_border_policy() {
        let cache = DiameterCache::new();
        let corner = Point2i::ORIGIN;
        let endpoint = Point2i::new(1, 1);

        let zero_fill = ScoreMatrix::filled(3, 3, 2).expect("valid matrix");
        assert_eq!(diameter_score(&cache, &zero_fill, corner, endpoint), 4);

        let clamped = zero_fill.with_border(BorderMode::Clamp);
        assert_eq!(diameter_score(&cache, &clamped, corner, endpoint), 6);
    }

    #[test]
    fn empty_matrix_scores_zero_for_any_border() {
        let cache = DiameterCache::new();
        let empty = ScoreMatrix::from_vec(0, 0, vec![])
            .expect("empty matrix")
            .with_border(BorderMode::Reflect101);

        for endpoint in [Point2i::new(3, -4), Point2i::new(5, 0)] {
            assert_eq!(diameter_score(&cache, &empty, Point2i::new(1, 1), endpoint), 0);
        }
    }

    #[test]
    fn antipodal_endpoints_score_identically() {
        let data = (0..49).map(|i| (i * 37) % 11).collect();
        let m = ScoreMatrix::from_vec(7, 7, data).expect("valid matrix");
        let cache = DiameterCache::with_radius(3);
        let center = Point2i::new(3, 3);

        for t in dm_core::points_on_ring(3) {
            assert_eq!(
                diameter_score(&cache, &m, center, t),
                diameter_score(&cache, &m, center, -t)
            );
        }
    }
}
