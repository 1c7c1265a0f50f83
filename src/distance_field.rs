use crate::binary_image::BinaryImage;
use crate::distance_vector::DistanceVector;
use crate::work_grid::WorkGrid;



/// For every cell of a mask, the offset to the nearest cell of the opposite class,
/// as far as two sweeps over direct neighbours can find it.
/// Inside cells measure towards the nearest outside cell, where the canvas
/// border counts as outside. Outside cells measure towards the nearest inside cell.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SignedDistanceField {
    pub width: u16,
    pub height: u16,

    /// Row-major, one vector per mask cell.
    pub vectors: Vec<DistanceVector>,
}

/// Needs less storage with sufficient precision, but takes about
/// twice as long because of conversions between f16 and f32.
pub type F16DistanceStorage = Vec<half::f16>;

/// Needs more storage with high precision, but takes about
/// half as long because no conversions between f16 and f32 must be made.
pub type F32DistanceStorage = Vec<f32>;

/// A flat buffer of signed float distances.
pub trait DistanceStorage {
    fn new(length: usize) -> Self;

    fn get(&self, index: usize) -> f32;

    fn set(&mut self, index: usize, distance: f32);
}



impl SignedDistanceField {

    /// Computes the signed distance field of the specified image,
    /// using the eight-point sequential euclidean distance transform (8SSEDT).
    /// A vector may be slightly longer than the true distance
    /// where sparse seeds compete, but never shorter.
    pub fn compute(binary_image: &impl BinaryImage) -> Self {
        let width = binary_image.width();
        let height = binary_image.height();
        let max_distance = max_distance(width, height);

        log::debug!("computing {}x{} distance field with sentinel {}", width, height, max_distance);

        // distances of inside cells, towards the nearest outside cell
        let mut from_outside = WorkGrid::seeded_from_outside(binary_image, max_distance);
        from_outside.sweep();
        log::trace!("swept outside-seeded grid");

        // distances of outside cells, towards the nearest inside cell
        let mut from_inside = WorkGrid::seeded_from_inside(binary_image, max_distance);
        from_inside.sweep();
        log::trace!("swept inside-seeded grid");

        let mut vectors = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let is_inside = binary_image.is_inside(x, y);
                let grid = if is_inside { &from_outside } else { &from_inside };
                vectors.push(grid.get(x as i32, y as i32).with_inside(is_inside));
            }
        }

        SignedDistanceField { width, height, vectors }
    }

    /// The sentinel distance of this field, `2 * max(width, height)`.
    /// Outside cells of a mask without any inside cell have a vector of
    /// this value on both axes.
    #[inline]
    pub fn max_distance(&self) -> i32 {
        max_distance(self.width, self.height)
    }

    #[inline(always)]
    pub fn get_vector(&self, x: u16, y: u16) -> DistanceVector {
        self.vectors[self.flatten_index(x, y)]
    }

    #[inline(always)]
    pub fn is_inside(&self, x: u16, y: u16) -> bool {
        self.get_vector(x, y).is_inside
    }

    #[inline]
    pub fn get_squared_distance(&self, x: u16, y: u16) -> i64 {
        self.get_vector(x, y).squared_length()
    }

    /// The euclidean distance to the nearest cell of the opposite class,
    /// positive for inside cells and negative for outside cells.
    #[inline]
    pub fn get_distance(&self, x: u16, y: u16) -> f32 {
        let vector = self.get_vector(x, y);
        if vector.is_inside { vector.length() } else { - vector.length() }
    }

    /// The position of the nearest cell of the opposite class.
    /// For inside cells, this may be a border position
    /// at `-1`, `width` or `height`.
    #[inline]
    pub fn nearest_source(&self, x: u16, y: u16) -> (i32, i32) {
        let vector = self.get_vector(x, y);
        (x as i32 - vector.dx, y as i32 - vector.dy)
    }

    /// Converts all vectors into signed float distances.
    pub fn to_distance_storage<D: DistanceStorage>(&self) -> D {
        let mut distances = D::new(self.vectors.len());

        for y in 0..self.height {
            for x in 0..self.width {
                distances.set(self.flatten_index(x, y), self.get_distance(x, y));
            }
        }

        distances
    }

    #[inline]
    pub fn flatten_index(&self, x: u16, y: u16) -> usize {
        self.width as usize * y as usize + x as usize
    }
}

#[inline]
fn max_distance(width: u16, height: u16) -> i32 {
    2 * width.max(height) as i32
}


impl DistanceStorage for F16DistanceStorage {
    fn new(length: usize) -> Self {
        vec![half::f16::INFINITY; length]
    }

    #[inline]
    fn get(&self, index: usize) -> f32 {
        self[index].to_f32()
    }

    #[inline]
    fn set(&mut self, index: usize, distance: f32) {
        self[index] = half::f16::from_f32(distance)
    }
}

impl DistanceStorage for F32DistanceStorage {
    fn new(length: usize) -> Self {
        vec![std::f32::INFINITY; length]
    }

    #[inline]
    fn get(&self, index: usize) -> f32 {
        self[index]
    }

    #[inline]
    fn set(&mut self, index: usize, distance: f32) {
        self[index] = distance
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary_image::{BinaryBoolImage, BinaryMask};

    #[test]
    fn single_seed_neighbours() {
        let mask = BinaryMask::from_fn(5, 5, |x, y| x == 2 && y == 2);
        let field = SignedDistanceField::compute(&mask);

        // the seed itself is one step away from the outside
        assert_eq!(field.get_squared_distance(2, 2), 1);
        assert!(field.is_inside(2, 2));

        assert_eq!(field.get_squared_distance(1, 2), 1);
        assert_eq!(field.get_squared_distance(1, 1), 2);
        assert_eq!(field.get_squared_distance(0, 1), 5);
        assert_eq!(field.get_squared_distance(0, 0), 8);
        assert!(!field.is_inside(1, 1));

        assert_eq!(field.nearest_source(0, 0), (2, 2));
        assert_eq!(field.nearest_source(4, 1), (2, 2));
    }

    #[test]
    fn signs_follow_mask() {
        let mask = BinaryMask::from_fn(6, 4, |x, y| (x + y) % 3 == 0);
        let field = SignedDistanceField::compute(&mask);

        for y in 0..4 {
            for x in 0..6 {
                assert_eq!(field.is_inside(x, y), mask.is_inside(x, y));

                if mask.is_inside(x, y) {
                    assert!(field.get_distance(x, y) > 0.0);
                }
                else {
                    assert!(field.get_distance(x, y) < 0.0);
                }
            }
        }
    }

    #[test]
    fn filled_mask_measures_towards_border() {
        let mask = BinaryMask::from_fn(5, 3, |_, _| true);
        let field = SignedDistanceField::compute(&mask);

        let distances: Vec<i64> = field.vectors.iter().map(DistanceVector::squared_length).collect();
        assert_eq!(distances, vec![
            1, 1, 1, 1, 1,
            1, 4, 4, 4, 1,
            1, 1, 1, 1, 1,
        ]);

        assert_eq!(field.nearest_source(0, 1), (-1, 1));
        assert_eq!(field.nearest_source(2, 2), (2, 3));
    }

    #[test]
    fn empty_mask_keeps_sentinel() {
        let mask = BinaryMask::from_fn(3, 7, |_, _| false);
        let field = SignedDistanceField::compute(&mask);

        assert_eq!(field.max_distance(), 14);
        for vector in &field.vectors {
            assert_eq!(*vector, DistanceVector::new(14, 14, false));
            assert_eq!(vector.squared_length(), 2 * 14 * 14);
        }
    }

    #[test]
    fn zero_area_mask_has_no_vectors() {
        let buffer: [bool; 0] = [];
        let field = SignedDistanceField::compute(&BinaryBoolImage::from_slice(0, 4, &buffer));

        assert_eq!((field.width, field.height), (0, 4));
        assert!(field.vectors.is_empty());
    }

    #[test]
    fn isolated_pixels_in_a_row() {
        let buffer = [true, false, false, false, true];
        let field = SignedDistanceField::compute(&BinaryBoolImage::from_slice(5, 1, &buffer));

        let vectors: Vec<(i32, i32)> = field.vectors.iter().map(|v| (v.dx, v.dy)).collect();

        // the middle cell is as far from both pixels and keeps the left one, found first
        assert_eq!(vectors, vec![(1, 0), (1, 0), (2, 0), (-1, 0), (1, 0)]);
    }

    #[test]
    fn storages_hold_signed_distances() {
        let mask = BinaryMask::from_fn(4, 1, |x, _| x == 0);
        let field = SignedDistanceField::compute(&mask);

        let distances_32: F32DistanceStorage = field.to_distance_storage();
        let distances_16: F16DistanceStorage = field.to_distance_storage();

        assert_eq!(distances_32, vec![1.0, -1.0, -2.0, -3.0]);
        for (index, expected) in distances_32.iter().enumerate() {
            assert_eq!(DistanceStorage::get(&distances_16, index), *expected);
        }
    }
}
