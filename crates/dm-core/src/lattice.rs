//! Lattice point enumerators for disks and rings centered on the origin.

use crate::geom::Point2i;

/// All lattice points `p` with `|p|² <= radius²`, in raster order (row by
/// row from the top, left to right).
pub fn points_in_disk(radius: u32) -> Vec<Point2i> {
    let r = radius as i32;
    let r_sq = (radius as i64) * (radius as i64);
    let mut out = Vec::new();
    for y in -r..=r {
        for x in -r..=r {
            let p = Point2i::new(x, y);
            if p.norm_sq() <= r_sq {
                out.push(p);
            }
        }
    }
    out
}

/// Lattice points whose Euclidean norm rounds to `radius`.
///
/// Points come back in counter-clockwise angular order starting at the
/// positive x-axis. Radius zero yields only the origin.
pub fn points_on_ring(radius: u32) -> Vec<Point2i> {
    if radius == 0 {
        return vec![Point2i::ORIGIN];
    }

    // round(sqrt(n)) == r  <=>  (2r - 1)² <= 4n < (2r + 1)²
    let lo = (2 * radius as i64 - 1).pow(2);
    let hi = (2 * radius as i64 + 1).pow(2);
    let r = radius as i32 + 1;

    let mut out = Vec::new();
    for y in -r..=r {
        for x in -r..=r {
            let p = Point2i::new(x, y);
            let n4 = 4 * p.norm_sq();
            if n4 >= lo && n4 < hi {
                out.push(p);
            }
        }
    }

    out.sort_by(|a, b| {
        polar_angle(*a)
            .total_cmp(&polar_angle(*b))
            .then(a.norm_sq().cmp(&b.norm_sq()))
    });
    out
}

fn polar_angle(p: Point2i) -> f64 {
    let a = (p.y as f64).atan2(p.x as f64);
    if a < 0.0 { a + std::f64::consts::TAU } else { a }
}
