//! This crate computes the signed
//! distance field of a binary image.
//! The algorithm used is the eight-point sequential
//! signed euclidean distance transform (8SSEDT),
//! which propagates distance vectors in two sweeps over the image.
//!
//! Every cell of the result holds the vector to a cell of the opposite class.
//! The canvas border counts as outside, so inside cells never
//! measure further than the nearest edge of the image.
//!
//! Vectors only travel between direct neighbours, so the result is not exact
//! for every mask: with several sparse seeds, the nearest one can be hidden
//! behind a seed whose region it crosses, and a cell then reports a slightly
//! longer vector to a neighbouring seed. The vector is never shorter than
//! the true distance and always points at a cell of the opposite class.
//! Solid shapes like rectangles and circles come out exact.

pub mod binary_image;
pub mod distance_field;
pub mod distance_vector;
pub mod encode;
pub mod error;

mod work_grid;

pub mod prelude {
    pub use crate::{
        compute_signed_distance_field,
        compute_f16_distances,
        compute_f32_distances
    };

    pub use crate::binary_image::{
        BinaryImage, BinaryByteImage, BinaryBoolImage, BinaryMask, Inverted
    };

    pub use crate::distance_field::{
        SignedDistanceField, DistanceStorage,
        F16DistanceStorage, F32DistanceStorage
    };

    pub use crate::distance_vector::DistanceVector;
    pub use crate::encode::DistanceLayer;
    pub use crate::error::{ MaskError, EncodeError };

    #[cfg(feature = "piston_image")]
    pub use crate::binary_image::piston_image as binary_piston_image;

    #[cfg(feature = "piston_image")]
    pub use crate::encode::piston_image as distance_piston_image;
}


use prelude::*;

/// Compute the signed distance field of the specified binary image.
pub fn compute_signed_distance_field(image: &impl BinaryImage) -> SignedDistanceField {
    SignedDistanceField::compute(image)
}

/// Compute the signed distances of the specified binary image, stored as `f16`.
/// Inside distances are positive.
pub fn compute_f16_distances(image: &impl BinaryImage) -> F16DistanceStorage {
    compute_signed_distance_field(image).to_distance_storage()
}

/// Compute the signed distances of the specified binary image, stored as `f32`.
/// Inside distances are positive.
pub fn compute_f32_distances(image: &impl BinaryImage) -> F32DistanceStorage {
    compute_signed_distance_field(image).to_distance_storage()
}
