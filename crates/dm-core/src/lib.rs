//! Foundational primitives for diameter-mask features.
//!
//! ## Coordinates
//! [`Point2i`] is a signed lattice coordinate. Mask offsets are relative to
//! the origin; adding an image-absolute center moves them onto the image.
//!
//! ## Score Matrices
//! A [`ScoreMatrix`] holds one integer intensity per pixel for one channel.
//! Reads outside the image go through an explicit [`BorderMode`]; the
//! default is constant zero fill, since masks centered near an edge
//! routinely reach past it.
//!
//! ## Lattice Enumerators
//! [`points_in_disk`] and [`points_on_ring`] enumerate origin-centered disks
//! and rings in a stable order.

mod border;
mod error;
mod geom;
mod image;
mod lattice;
mod sample;
mod score;

pub use border::{BorderMode, resolve_index};
pub use error::Error;
pub use geom::Point2i;
pub use image::{Image, ImageView, to_i32};
pub use lattice::{points_in_disk, points_on_ring};
pub use sample::sample_at;
pub use score::{ScoreMatrix, ScoreSource};
