/// The offset from a cell to the nearest cell of the opposite class.
/// The nearest cell is found at `(x - dx, y - dy)`.
///
/// Within a finished distance field, `is_inside` is the mask value of the cell itself.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct DistanceVector {
    pub dx: i32,
    pub dy: i32,
    pub is_inside: bool,
}

impl DistanceVector {
    #[inline]
    pub const fn new(dx: i32, dy: i32, is_inside: bool) -> Self {
        DistanceVector { dx, dy, is_inside }
    }

    /// The same offset with a different class tag.
    #[inline]
    pub const fn with_inside(self, is_inside: bool) -> Self {
        DistanceVector { is_inside, .. self }
    }

    /// The comparison key of the sweep. Components are bounded by
    /// `2 * u16::MAX`, so the square cannot overflow an `i64`.
    #[inline]
    pub fn squared_length(&self) -> i64 {
        let dx = self.dx as i64;
        let dy = self.dy as i64;
        dx * dx + dy * dy
    }

    /// The euclidean length.
    #[inline]
    pub fn length(&self) -> f32 {
        (self.squared_length() as f64).sqrt() as f32
    }

    /// The chessboard length, which is the larger of both axis distances.
    #[inline]
    pub fn chebyshev_length(&self) -> u32 {
        self.dx.unsigned_abs().max(self.dy.unsigned_abs())
    }

    /// The manhattan length, which is the sum of both axis distances.
    #[inline]
    pub fn rectilinear_length(&self) -> u32 {
        self.dx.unsigned_abs() + self.dy.unsigned_abs()
    }
}
