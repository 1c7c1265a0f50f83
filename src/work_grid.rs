//! The padded grid on which a single class of distances is propagated.

use crate::binary_image::BinaryImage;
use crate::distance_vector::DistanceVector;


/// A `(width + 2) * (height + 2)` grid of distance vectors,
/// with a one-cell border around the mask.
/// Coordinates are mask coordinates, so the border lives at `-1`, `width` and `height`.
pub(crate) struct WorkGrid {
    width: u16,
    height: u16,
    cells: Vec<DistanceVector>,

    /// Neighbours with this tag never donate their distance.
    /// These are the cells which are not yet connected to a seed.
    discarded: bool,
}

impl WorkGrid {

    /// Seeds every outside cell and the whole border with a zero distance.
    /// After sweeping, inside cells hold the offset to the nearest outside cell.
    pub fn seeded_from_outside(image: &impl BinaryImage, max_distance: i32) -> Self {
        let border = DistanceVector::new(0, 0, false);
        let seed = DistanceVector::new(0, 0, false);
        let unknown = DistanceVector::new(max_distance, max_distance, true);

        Self::seeded(image, border, |is_inside| if is_inside { unknown } else { seed }, true)
    }

    /// Seeds every inside cell with a zero distance.
    /// The border is not a source, so it gets the sentinel distance.
    /// After sweeping, outside cells hold the offset to the nearest inside cell.
    pub fn seeded_from_inside(image: &impl BinaryImage, max_distance: i32) -> Self {
        let border = DistanceVector::new(max_distance, max_distance, false);
        let seed = DistanceVector::new(0, 0, true);
        let unknown = DistanceVector::new(max_distance, max_distance, false);

        Self::seeded(image, border, |is_inside| if is_inside { seed } else { unknown }, false)
    }

    fn seeded(
        image: &impl BinaryImage, border: DistanceVector,
        cell: impl Fn(bool) -> DistanceVector, discarded: bool
    ) -> Self {
        let width = image.width();
        let height = image.height();

        let mut grid = WorkGrid {
            width, height, discarded,
            cells: vec![border; (width as usize + 2) * (height as usize + 2)],
        };

        for y in 0..height {
            for x in 0..width {
                let index = grid.index(x as i32, y as i32);
                grid.cells[index] = cell(image.is_inside(x, y));
            }
        }

        grid
    }

    /// Propagates the seeds into every other cell, in two passes over all rows.
    /// The visiting order is load-bearing: each comparison reads neighbours
    /// which have already been updated earlier in the same pass.
    pub fn sweep(&mut self) {
        let width = self.width as i32;
        let height = self.height as i32;

        // perform forwards iteration
        for y in 0..height {

            // ***
            // *O.
            // ...
            for x in 0..width {
                self.compare(x, y, -1,  0);
                self.compare(x, y,  0, -1);
                self.compare(x, y, -1, -1);
                self.compare(x, y,  1, -1);
            }

            // ...
            // .O*
            // ...
            for x in (0..width).rev() {
                self.compare(x, y, 1, 0);
            }
        }

        // perform backwards iteration
        for y in (0..height).rev() {

            // ...
            // .O*
            // ***
            for x in (0..width).rev() {
                self.compare(x, y,  1, 0);
                self.compare(x, y,  0, 1);
                self.compare(x, y, -1, 1);
                self.compare(x, y,  1, 1);
            }

            // ...
            // *O.
            // ...
            for x in 0..width {
                self.compare(x, y, -1, 0);
            }
        }
    }

    /// Replaces the cell with the path through its neighbour,
    /// if that path is strictly shorter. Ties keep the current vector.
    #[inline(always)]
    fn compare(&mut self, x: i32, y: i32, offset_x: i32, offset_y: i32) {
        let own_index = self.index(x, y);
        let neighbour = self.cells[self.index(x + offset_x, y + offset_y)];

        if neighbour.is_inside == self.discarded {
            return;
        }

        // the whole cell is replaced, so the tag of the donor moves along,
        // which allows this cell to donate in later comparisons
        let candidate = DistanceVector::new(
            neighbour.dx - offset_x,
            neighbour.dy - offset_y,
            neighbour.is_inside
        );

        if candidate.squared_length() < self.cells[own_index].squared_length() {
            self.cells[own_index] = candidate;
        }
    }

    /// The vector at mask coordinates, which may address the border.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> DistanceVector {
        self.cells[self.index(x, y)]
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        debug_assert!(x >= -1 && y >= -1 && x <= self.width as i32 && y <= self.height as i32);
        (y + 1) as usize * (self.width as usize + 2) + (x + 1) as usize
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary_image::BinaryMask;

    fn single_seed() -> BinaryMask {
        BinaryMask::from_fn(5, 5, |x, y| x == 2 && y == 2)
    }

    fn squared_lengths(grid: &WorkGrid) -> Vec<Vec<i64>> {
        (0..grid.height as i32)
            .map(|y| (0..grid.width as i32).map(|x| grid.get(x, y).squared_length()).collect())
            .collect()
    }

    #[test]
    fn outside_seeding_treats_border_as_source() {
        let grid = WorkGrid::seeded_from_outside(&single_seed(), 10);

        assert_eq!(grid.cells.len(), 7 * 7);
        assert_eq!(grid.get(-1, -1), DistanceVector::new(0, 0, false));
        assert_eq!(grid.get(5, 2), DistanceVector::new(0, 0, false));
        assert_eq!(grid.get(0, 0), DistanceVector::new(0, 0, false));
        assert_eq!(grid.get(2, 2), DistanceVector::new(10, 10, true));
    }

    #[test]
    fn inside_seeding_pushes_border_to_sentinel() {
        let grid = WorkGrid::seeded_from_inside(&single_seed(), 10);

        assert_eq!(grid.get(-1, 3), DistanceVector::new(10, 10, false));
        assert_eq!(grid.get(2, 5), DistanceVector::new(10, 10, false));
        assert_eq!(grid.get(0, 0), DistanceVector::new(10, 10, false));
        assert_eq!(grid.get(2, 2), DistanceVector::new(0, 0, true));
    }

    #[test]
    fn single_seed_spreads_euclidean_distances() {
        let mut grid = WorkGrid::seeded_from_inside(&single_seed(), 10);
        grid.sweep();

        assert_eq!(squared_lengths(&grid), vec![
            vec![8, 5, 4, 5, 8],
            vec![5, 2, 1, 2, 5],
            vec![4, 1, 0, 1, 4],
            vec![5, 2, 1, 2, 5],
            vec![8, 5, 4, 5, 8],
        ]);

        // vectors point back at the seed
        assert_eq!(grid.get(0, 0), DistanceVector::new(-2, -2, true));
        assert_eq!(grid.get(4, 3), DistanceVector::new(2, 1, true));
    }

    #[test]
    fn solved_cells_donate_further() {
        let mask = BinaryMask::from_fn(7, 7, |_, _| true);
        let mut grid = WorkGrid::seeded_from_outside(&mask, 14);
        grid.sweep();

        assert_eq!(squared_lengths(&grid), vec![
            vec![1, 1, 1, 1, 1, 1, 1],
            vec![1, 4, 4, 4, 4, 4, 1],
            vec![1, 4, 9, 9, 9, 4, 1],
            vec![1, 4, 9, 16, 9, 4, 1],
            vec![1, 4, 9, 9, 9, 4, 1],
            vec![1, 4, 4, 4, 4, 4, 1],
            vec![1, 1, 1, 1, 1, 1, 1],
        ]);
    }

    #[test]
    fn sentinels_never_donate() {
        let mask = BinaryMask::from_fn(4, 3, |_, _| false);
        let mut grid = WorkGrid::seeded_from_inside(&mask, 8);
        grid.sweep();

        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(grid.get(x, y), DistanceVector::new(8, 8, false));
            }
        }
    }

    #[test]
    fn border_is_never_updated() {
        let mut grid = WorkGrid::seeded_from_inside(&single_seed(), 10);
        grid.sweep();

        for i in -1..=5 {
            assert_eq!(grid.get(i, -1), DistanceVector::new(10, 10, false));
            assert_eq!(grid.get(-1, i), DistanceVector::new(10, 10, false));
            assert_eq!(grid.get(i, 5), DistanceVector::new(10, 10, false));
            assert_eq!(grid.get(5, i), DistanceVector::new(10, 10, false));
        }
    }
}
