use core::ops::{Add, Neg, Sub};

/// Integer lattice coordinate.
///
/// Used both for image-absolute pixel positions and for offsets relative to
/// a mask center; the two meet through `Add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point2i {
    pub x: i32,
    pub y: i32,
}

impl Point2i {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_origin(self) -> bool {
        self.x == 0 && self.y == 0
    }

    pub fn norm_sq(self) -> i64 {
        let x = self.x as i64;
        let y = self.y as i64;
        x * x + y * y
    }

    /// True for points in the half-plane `(y >= 0, x > 0) ∪ (y > 0, x <= 0)`.
    ///
    /// Exactly one of `p` and `-p` satisfies this for every nonzero `p`.
    pub fn in_upper_half_plane(self) -> bool {
        (self.y >= 0 && self.x > 0) || (self.y > 0 && self.x <= 0)
    }
}

impl From<(i32, i32)> for Point2i {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl Neg for Point2i {
    type Output = Point2i;

    fn neg(self) -> Self::Output {
        Point2i {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Add for Point2i {
    type Output = Point2i;

    fn add(self, rhs: Point2i) -> Self::Output {
        Point2i {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Point2i {
    type Output = Point2i;

    fn sub(self, rhs: Point2i) -> Self::Output {
        Point2i {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Point2i;

    #[test]
    fn point_ops() {
        let a = Point2i::new(3, -4);
        let b = Point2i::from((1, 2));

        assert_eq!(-a, Point2i::new(-3, 4));
        assert_eq!(a + b, Point2i::new(4, -2));
        assert_eq!(a - b, Point2i::new(2, -6));
        assert_eq!(a.norm_sq(), 25);
        assert!(Point2i::ORIGIN.is_origin());
        assert!(!a.is_origin());
    }

    #[test]
    fn half_plane_picks_one_of_each_antipodal_pair() {
        for y in -4..=4 {
            for x in -4..=4 {
                let p = Point2i::new(x, y);
                if p.is_origin() {
                    assert!(!p.in_upper_half_plane());
                    continue;
                }
                assert_ne!(p.in_upper_half_plane(), (-p).in_upper_half_plane(), "{p:?}");
            }
        }

        assert!(Point2i::new(3, 0).in_upper_half_plane());
        assert!(Point2i::new(0, 3).in_upper_half_plane());
        assert!(!Point2i::new(-3, 0).in_upper_half_plane());
    }
}
