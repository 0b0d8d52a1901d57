use dm_core::Point2i;

/// One of the four octants of the upper half-plane.
///
/// Boundaries are half-open so that every nonzero upper-half-plane point
/// lands in exactly one octant: the first includes `y = 0` but not `y = x`,
/// the second includes `y = x` but not `x = 0`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Octant {
    First,
    Second,
    Third,
    Fourth,
}

impl Octant {
    /// Classifies a point already reflected into the upper half-plane.
    pub fn classify(p: Point2i) -> Self {
        let Point2i { x, y } = p;
        if x > 0 && y > 0 && x <= y {
            Self::Second
        } else if x <= 0 && y > 0 && x.abs() < y {
            Self::Third
        } else if x < 0 && y > 0 && x.abs() >= y {
            Self::Fourth
        } else {
            Self::First
        }
    }

    /// Maps a point of this octant into the first octant (`0 <= y <= x`).
    pub fn to_first(self, p: Point2i) -> Point2i {
        let Point2i { x, y } = p;
        match self {
            Self::First => p,
            Self::Second => Point2i::new(y, x),
            Self::Third => Point2i::new(y, x.abs()),
            Self::Fourth => Point2i::new(x.abs(), y),
        }
    }

    /// Inverse of [`Octant::to_first`].
    pub fn from_first(self, p: Point2i) -> Point2i {
        let Point2i { x, y } = p;
        match self {
            Self::First => p,
            Self::Second => Point2i::new(y, x),
            Self::Third => Point2i::new(-y, x),
            Self::Fourth => Point2i::new(-x, y),
        }
    }
}

/// Reflects `p` through the origin unless it already lies in the upper
/// half-plane (`y > 0`, or `y == 0` with `x > 0`).
pub fn to_upper_half_plane(p: Point2i) -> Point2i {
    if (p.y < 0 && p.x >= 0) || (p.y <= 0 && p.x < 0) {
        -p
    } else {
        p
    }
}
