/// Policy for reads that fall outside an image.
///
/// Diameters centered near an image edge routinely extend past it, so every
/// score read goes through one of these policies. The default is
/// `Constant(T::default())`, which for intensity scores means "clip to zero".
#[derive(Debug, Clone, PartialEq)]
pub enum BorderMode<T> {
    Clamp,
    Constant(T),
    Reflect101,
}

impl<T: Default> Default for BorderMode<T> {
    fn default() -> Self {
        Self::Constant(T::default())
    }
}

/// Maps a possibly out-of-range lattice index onto `[0, len)`.
///
/// Returns `None` when the read must be served by the constant fill value
/// (constant mode out of range, or an empty axis).
pub fn resolve_index<T>(i: i32, len: usize, mode: &BorderMode<T>) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if i >= 0 && (i as usize) < len {
        return Some(i as usize);
    }

    match mode {
        BorderMode::Constant(_) => None,
        BorderMode::Clamp => {
            if i < 0 {
                Some(0)
            } else {
                Some(len - 1)
            }
        }
        BorderMode::Reflect101 => {
            if len == 1 {
                return Some(0);
            }

            let period = (2 * len - 2) as i64;
            let r = (i as i64).rem_euclid(period) as usize;
            if r < len {
                Some(r)
            } else {
                Some((2 * len - 2) - r)
            }
        }
    }
}
