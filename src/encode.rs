//! Converts distance fields into 8-bit and 16-bit channels for textures and images,
//! or into raw vector bytes.

use crate::distance_field::SignedDistanceField;
use crate::distance_vector::DistanceVector;
use crate::error::EncodeError;


/// Which cells of a field carry their distance when encoded into a single channel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DistanceLayer {
    /// Only inside cells, outside cells are zero.
    Inside,

    /// Only outside cells, inside cells are zero.
    Outside,

    /// Every cell, regardless of its class.
    Combined,
}

impl DistanceLayer {
    #[inline]
    fn contains(self, is_inside: bool) -> bool {
        match self {
            DistanceLayer::Inside => is_inside,
            DistanceLayer::Outside => !is_inside,
            DistanceLayer::Combined => true,
        }
    }
}


/// The euclidean length of the vector, truncated and clamped to `0..=255`.
#[inline]
pub fn clamped_magnitude(vector: &DistanceVector) -> u8 {
    vector.length().min(255.0) as u8
}

/// One byte per cell, holding the clamped magnitude of every cell in the layer.
pub fn to_magnitude_gray(field: &SignedDistanceField, layer: DistanceLayer) -> Vec<u8> {
    field.vectors.iter()
        .map(|vector| {
            if layer.contains(vector.is_inside) { clamped_magnitude(vector) }
            else { 0 }
        })
        .collect()
}

/// The euclidean length of the vector, rounded and clamped to `0..=65535`.
#[inline]
pub fn clamped_magnitude_16(vector: &DistanceVector) -> u16 {
    vector.length().round().min(65535.0) as u16
}

/// Two big-endian bytes per cell, holding the 16-bit magnitude of every cell in the layer.
/// This is the sample layout of 16-bit grey-scale PNG rows.
pub fn to_magnitude_gray_16(field: &SignedDistanceField, layer: DistanceLayer) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(field.vectors.len() * 2);

    for vector in &field.vectors {
        let magnitude = if layer.contains(vector.is_inside) { clamped_magnitude_16(vector) } else { 0 };
        bytes.extend_from_slice(&magnitude.to_be_bytes());
    }

    bytes
}

/// Eight bytes per cell: `dx` and then `dy`, each as a little-endian `i32`.
/// The class of a cell is not part of the bytes, it is the mask value.
pub fn to_vector_bytes(field: &SignedDistanceField) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(field.vectors.len() * 8);

    for vector in &field.vectors {
        bytes.extend_from_slice(&vector.dx.to_le_bytes());
        bytes.extend_from_slice(&vector.dy.to_le_bytes());
    }

    bytes
}

/// Three bytes per cell. Inside magnitudes go to the green channel,
/// outside magnitudes to the blue channel. Red is always zero.
pub fn to_dual_channel_rgb(field: &SignedDistanceField) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(field.vectors.len() * 3);

    for vector in &field.vectors {
        bytes.extend_from_slice(&dual_channel_pixel(vector));
    }

    bytes
}

#[inline]
fn dual_channel_pixel(vector: &DistanceVector) -> [u8; 3] {
    let magnitude = clamped_magnitude(vector);
    if vector.is_inside { [0, magnitude, 0] } else { [0, 0, magnitude] }
}

/// One byte per cell, mapping the signed distance range `min..=max` to `0..=255`.
/// Distances outside of the range are clamped.
pub fn normalize_clamped_distances(field: &SignedDistanceField, min: f32, max: f32)
    -> Result<Vec<u8>, EncodeError>
{
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(EncodeError::InvalidRange { min, max });
    }

    let range = max - min;

    Ok(field.vectors.iter()
        .map(|vector| {
            let distance = if vector.is_inside { vector.length() } else { - vector.length() };
            let normalized = ((distance - min) / range).max(0.0).min(1.0);
            (normalized * 255.0).round() as u8
        })
        .collect())
}


/// Create piston images from distance fields.
#[cfg(feature = "piston_image")]
pub mod piston_image {
    use image::*;
    use super::*;

    /// Inside magnitudes in green, outside magnitudes in blue.
    pub fn to_rgb_u8_image(field: &SignedDistanceField) -> RgbImage {
        ImageBuffer::from_fn(field.width as u32, field.height as u32, |x, y| {
            Rgb { data: dual_channel_pixel(&field.get_vector(x as u16, y as u16)) }
        })
    }

    /// The clamped magnitudes of all cells in the layer.
    pub fn to_gray_u8_image(field: &SignedDistanceField, layer: DistanceLayer) -> GrayImage {
        gray_image(field, to_magnitude_gray(field, layer))
    }

    /// The 16-bit magnitudes of all cells in the layer.
    pub fn to_gray_u16_image(field: &SignedDistanceField, layer: DistanceLayer)
        -> ImageBuffer<Luma<u16>, Vec<u16>>
    {
        ImageBuffer::from_fn(field.width as u32, field.height as u32, |x, y| {
            let vector = field.get_vector(x as u16, y as u16);
            let magnitude = if layer.contains(vector.is_inside) { clamped_magnitude_16(&vector) } else { 0 };
            Luma { data: [magnitude] }
        })
    }

    /// The signed distances, with `min..=max` mapped to black to white.
    pub fn to_normalized_gray_u8_image(field: &SignedDistanceField, min: f32, max: f32)
        -> Result<GrayImage, EncodeError>
    {
        Ok(gray_image(field, normalize_clamped_distances(field, min, max)?))
    }

    fn gray_image(field: &SignedDistanceField, bytes: Vec<u8>) -> GrayImage {
        ImageBuffer::from_fn(field.width as u32, field.height as u32, |x, y| {
            Luma { data: [bytes[field.flatten_index(x as u16, y as u16)]] }
        })
    }
}
