use core::ops::{AddAssign, MulAssign, SubAssign};

/// A binary fixed-point number: a real value scaled by 2<sup>`SHIFT`</sup>
/// and rounded to the nearest 32-bit integer.
///
/// The binary point is part of the type, so only values of the same
/// scale combine; mixing two scales is a compile error rather than a
/// silent misinterpretation. Arithmetic operates directly on the raw
/// word and wraps silently on overflow.
///
/// # Examples
///
/// ```rust
/// use fixedfloat::FixedPoint;
///
/// let mut a = FixedPoint::<8>::new(2.0);
/// let b = FixedPoint::<8>::new(3.0);
/// a *= b;
/// assert_eq!(a.bits(), 1536);
/// assert_eq!(a.to_f32(), 6.0);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FixedPoint<const SHIFT: u32> {
    bits: u32,
}

impl<const SHIFT: u32> FixedPoint<SHIFT> {
    /// Create the fixed-point representation of `value`, rounding half
    /// away from zero. Negative values are stored as the two's
    /// complement of their scaled magnitude.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixedfloat::FixedPoint;
    ///
    /// assert_eq!(FixedPoint::<8>::new(1.0).bits(), 256);
    /// assert_eq!(FixedPoint::<8>::new(1.5).bits(), 384);
    /// ```
    #[inline]
    pub fn new(value: f32) -> FixedPoint<SHIFT> {
        let scaled = value * (1u32 << SHIFT) as f32;
        // core has no round(); bias towards the sign and truncate
        let rounded = if scaled < 0.0 { scaled - 0.5 } else { scaled + 0.5 };
        FixedPoint { bits: rounded as i32 as u32 }
    }

    /// View the raw scaled word.
    #[inline]
    pub fn bits(self) -> u32 {
        self.bits
    }

    /// Recover the approximated real value, reading the word as signed.
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.bits as i32 as f32 / (1u32 << SHIFT) as f32
    }
}

impl<const SHIFT: u32> From<f32> for FixedPoint<SHIFT> {
    #[inline]
    fn from(value: f32) -> FixedPoint<SHIFT> {
        FixedPoint::new(value)
    }
}

impl<const SHIFT: u32> AddAssign<i32> for FixedPoint<SHIFT> {
    /// Add the integer `rhs`, i.e. `rhs << SHIFT` in this scale.
    #[inline]
    fn add_assign(&mut self, rhs: i32) {
        self.bits = self.bits.wrapping_add((rhs as u32).wrapping_shl(SHIFT));
    }
}

impl<const SHIFT: u32> SubAssign<i32> for FixedPoint<SHIFT> {
    #[inline]
    fn sub_assign(&mut self, rhs: i32) {
        self.bits = self.bits.wrapping_sub((rhs as u32).wrapping_shl(SHIFT));
    }
}

impl<const SHIFT: u32> AddAssign for FixedPoint<SHIFT> {
    /// Same-scale addition is plain word addition.
    #[inline]
    fn add_assign(&mut self, rhs: FixedPoint<SHIFT>) {
        self.bits = self.bits.wrapping_add(rhs.bits);
    }
}

impl<const SHIFT: u32> SubAssign for FixedPoint<SHIFT> {
    #[inline]
    fn sub_assign(&mut self, rhs: FixedPoint<SHIFT>) {
        self.bits = self.bits.wrapping_sub(rhs.bits);
    }
}

impl<const SHIFT: u32> MulAssign<i32> for FixedPoint<SHIFT> {
    /// Multiplying by an integer preserves the scale, so the word is
    /// multiplied directly.
    #[inline]
    fn mul_assign(&mut self, rhs: i32) {
        self.bits = self.bits.wrapping_mul(rhs as u32);
    }
}

impl<const SHIFT: u32> MulAssign for FixedPoint<SHIFT> {
    /// Same-scale multiplication doubles the scale, so the product is
    /// shifted back down. The multiply stays in 32 bits; large
    /// magnitudes wrap before the shift.
    #[inline]
    fn mul_assign(&mut self, rhs: FixedPoint<SHIFT>) {
        self.bits = self.bits.wrapping_mul(rhs.bits) >> SHIFT;
    }
}
