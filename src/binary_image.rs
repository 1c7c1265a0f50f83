use crate::error::MaskError;
use std::convert::TryFrom;

/// Represents a mask with each cell being either true or false,
/// corresponding to inside-the-shape and outside-of-the-shape respectively.
/// Binary images can be created from byte slices, boolean slices, nested rows,
/// or piston images if the feature `piston_image` is activated.
pub trait BinaryImage {
    fn width(&self) -> u16;

    fn height(&self) -> u16;

    /// Coordinates must be inside `width` and `height`.
    fn is_inside(&self, x: u16, y: u16) -> bool;
}

/// An image which is described by a slice of bytes with one byte per pixel.
/// To determine if a byte is inside or outside,
/// it is compared to a threshold. The default threshold is 127.
pub struct BinaryByteImage<'b> {
    width: u16,
    height: u16,

    /// A row-major image vector with one byte per pixel.
    buffer: &'b [u8],

    /// A pixel must be brighter than this value
    /// in order to be inside the shape.
    threshold: u8,
}

impl<'b> BinaryByteImage<'b> {
    /// Create a binary byte image with a threshold of 127,
    /// so that every pixel brighter than 50% is inside.
    pub fn from_slice(width: u16, height: u16, buffer: &'b [u8]) -> Self {
        Self::from_slice_with_threshold(width, height, buffer, 127)
    }

    /// Create a binary byte image from the buffer
    /// with all pixels brighter than the threshold being inside-the-shape.
    pub fn from_slice_with_threshold(width: u16, height: u16, buffer: &'b [u8], threshold: u8) -> Self {
        assert_eq!(buffer.len(), width as usize * height as usize, "Buffer dimension mismatch");
        BinaryByteImage { width, height, buffer, threshold }
    }
}

impl BinaryImage for BinaryByteImage<'_> {
    #[inline]
    fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn is_inside(&self, x: u16, y: u16) -> bool {
        self.buffer[self.width as usize * y as usize + x as usize] > self.threshold
    }
}


/// A mask borrowed from a row-major slice of booleans.
pub struct BinaryBoolImage<'b> {
    width: u16,
    height: u16,
    buffer: &'b [bool],
}

impl<'b> BinaryBoolImage<'b> {
    pub fn from_slice(width: u16, height: u16, buffer: &'b [bool]) -> Self {
        assert_eq!(buffer.len(), width as usize * height as usize, "Buffer dimension mismatch");
        BinaryBoolImage { width, height, buffer }
    }
}

impl BinaryImage for BinaryBoolImage<'_> {
    #[inline]
    fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn is_inside(&self, x: u16, y: u16) -> bool {
        self.buffer[self.width as usize * y as usize + x as usize]
    }
}


/// An owned row-major mask.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BinaryMask {
    width: u16,
    height: u16,
    cells: Vec<bool>,
}

impl BinaryMask {
    /// Evaluate the function once for every cell, row by row.
    pub fn from_fn(width: u16, height: u16, is_inside: impl Fn(u16, u16) -> bool) -> Self {
        let mut cells = Vec::with_capacity(width as usize * height as usize);

        for y in 0..height {
            for x in 0..width {
                cells.push(is_inside(x, y));
            }
        }

        BinaryMask { width, height, cells }
    }

    /// Build a mask from nested rows, where `rows[y][x]` is the cell at `(x, y)`.
    /// Fails if the rows are not all of the same length.
    pub fn try_from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, MaskError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());

        if let Some((row, found)) = rows.iter()
            .map(|row| row.as_ref().len())
            .enumerate()
            .find(|&(_, length)| length != width)
        {
            return Err(MaskError::JaggedRows { row, expected: width, found });
        }

        let too_large = || MaskError::TooLarge { width, height };
        let width_u16 = u16::try_from(width).map_err(|_| too_large())?;
        let height_u16 = u16::try_from(height).map_err(|_| too_large())?;

        let cells = rows.iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();

        Ok(BinaryMask { width: width_u16, height: height_u16, cells })
    }

    /// The row-major cells of this mask.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Swap inside and outside of every cell.
    pub fn invert(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = !*cell);
    }
}

impl BinaryImage for BinaryMask {
    #[inline]
    fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn is_inside(&self, x: u16, y: u16) -> bool {
        self.cells[self.width as usize * y as usize + x as usize]
    }
}


/// Views another binary image with inside and outside swapped.
pub struct Inverted<I>(pub I);

impl<I: BinaryImage> BinaryImage for Inverted<I> {
    #[inline]
    fn width(&self) -> u16 {
        self.0.width()
    }

    #[inline]
    fn height(&self) -> u16 {
        self.0.height()
    }

    #[inline]
    fn is_inside(&self, x: u16, y: u16) -> bool {
        !self.0.is_inside(x, y)
    }
}

impl<I: BinaryImage + ?Sized> BinaryImage for &I {
    #[inline]
    fn width(&self) -> u16 {
        (**self).width()
    }

    #[inline]
    fn height(&self) -> u16 {
        (**self).height()
    }

    #[inline]
    fn is_inside(&self, x: u16, y: u16) -> bool {
        (**self).is_inside(x, y)
    }
}


/// Create binary images from piston images.
#[cfg(feature = "piston_image")]
pub mod piston_image {
    use image::*;
    use super::BinaryImage;
    use crate::error::MaskError;

    /// Create a binary image from a grey-scale piston image
    /// with all pixels brighter than 127 being inside-the-shape.
    pub fn of_gray_u8_image(image: &GrayImage) -> Result<WithThreshold<u8, Vec<u8>>, MaskError> {
        of_gray_u8_image_with_threshold(image, 127)
    }

    /// Create a binary image from a grey-scale piston image
    /// with all pixels brighter than the threshold being inside-the-shape.
    pub fn of_gray_u8_image_with_threshold(image: &GrayImage, threshold: u8)
        -> Result<WithThreshold<u8, Vec<u8>>, MaskError>
    {
        WithThreshold::of(image, threshold)
    }


    /// A binary image constructed from a grey-scale piston image.
    pub struct WithThreshold<'i, P: 'static + Primitive, Container> {
        image: &'i ImageBuffer<Luma<P>, Container>,
        threshold: P,
        width: u16,
        height: u16,
    }

    impl<'i, P, C> WithThreshold<'i, P, C> where P: 'static + Primitive, C: std::ops::Deref<Target = [P]> {
        /// Fails with `MaskError::TooLarge` if either dimension exceeds `u16::MAX`.
        pub fn of(image: &'i ImageBuffer<Luma<P>, C>, threshold: P) -> Result<Self, MaskError> {
            let (width, height) = image.dimensions();
            if width > u16::MAX as u32 || height > u16::MAX as u32 {
                return Err(MaskError::TooLarge { width: width as usize, height: height as usize });
            }

            Ok(WithThreshold { image, threshold, width: width as u16, height: height as u16 })
        }
    }

    impl<'i, P, C> BinaryImage for WithThreshold<'i, P, C>
        where P: 'static + Primitive, C: std::ops::Deref<Target = [P]>
    {
        fn width(&self) -> u16 {
            self.width
        }

        fn height(&self) -> u16 {
            self.height
        }

        fn is_inside(&self, x: u16, y: u16) -> bool {
            self.image.get_pixel(x as u32, y as u32).data[0] > self.threshold
        }
    }
}
