use crate::border::{BorderMode, resolve_index};
use crate::image::ImageView;

/// Reads the pixel at an integer lattice position, applying `border` when the
/// position lies outside the view.
///
/// Empty views can only be sampled in constant mode; every read then returns
/// the fill value.
///
/// # Panics
/// Panics when the view is empty and `border` is not `Constant`.
pub fn sample_at<T: Copy>(img: &ImageView<'_, T>, x: i32, y: i32, border: &BorderMode<T>) -> T {
    if img.width() == 0 || img.height() == 0 {
        if let BorderMode::Constant(v) = border {
            return *v;
        }
        panic!("cannot sample an empty image with non-constant border");
    }

    match (
        resolve_index(x, img.width(), border),
        resolve_index(y, img.height(), border),
    ) {
        // SAFETY: `resolve_index` only returns indices in `[0, len)`.
        (Some(mx), Some(my)) => unsafe { *img.get_unchecked(mx, my) },
        _ => match border {
            BorderMode::Constant(v) => *v,
            _ => unreachable!("clamp and reflect always resolve on non-empty axes"),
        },
    }
}
