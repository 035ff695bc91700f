use bits::top_set_bit;

const SIGN_MASK: u32 = 0x8000_0000;
const EXPN_MASK: u32 = 0x7F80_0000;
const SIGNIF_MASK: u32 = 0x007F_FFFF;
const EXPN_BIAS: i32 = 127;
const SIGNIF_BITS: i32 = 23;

/// A single-precision bit pattern assembled from discrete parts.
///
/// Holds one 32-bit word laid out as
/// sign(1) | exponent(8, biased by 127) | significand(23), readable
/// either as the raw word or as the `f32` it encodes. Default
/// construction gives the pattern for 0.0.
///
/// # Examples
///
/// ```rust
/// use fixedfloat::FloatBits;
///
/// let mut f = FloatBits::new();
/// f.set_bits(false, 0, 1);
/// assert_eq!(f.bits(), 0x3F80_0000);
/// assert_eq!(f.value(), 1.0);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct FloatBits {
    bits: u32,
}

impl FloatBits {
    /// Create the bit pattern for 0.0.
    #[inline]
    pub fn new() -> FloatBits {
        FloatBits { bits: 0 }
    }

    /// Overwrite the stored pattern with the float
    /// (-1)<sup>`sign`</sup> × `mantissa` × 2<sup>-`point`</sup>,
    /// where `point` is the number of low mantissa bits treated as
    /// fractional.
    ///
    /// The mantissa need not be normalized: its highest set bit is
    /// aligned to the top of the significand field, which drops the
    /// implicit leading one, and the exponent absorbs the alignment
    /// shift.
    ///
    /// A zero mantissa always produces the positive-zero pattern; the
    /// sign is discarded in that case.
    ///
    /// No range checking is done. A mantissa wider than 24 bits, or a
    /// `point` pushing the exponent outside the 8-bit biased range,
    /// silently produces a garbage pattern.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixedfloat::FloatBits;
    ///
    /// let mut f = FloatBits::new();
    ///
    /// f.set_bits(true, 0, 1);
    /// assert_eq!(f.value(), -1.0);
    ///
    /// f.set_bits(false, 2, 5);
    /// assert_eq!(f.value(), 1.25);
    /// ```
    pub fn set_bits(&mut self, sign: bool, point: i32, mantissa: u32) {
        if mantissa == 0 {
            self.bits = 0;
            return;
        }

        let mut bits = if sign { SIGN_MASK } else { 0 };

        // left shift aligning the mantissa's highest set bit to bit 23
        let n = SIGNIF_BITS - top_set_bit(mantissa) as i32;
        bits |= mantissa.wrapping_shl(n as u32) & SIGNIF_MASK;

        let expn = SIGNIF_BITS - n - point;
        bits |= (((expn + EXPN_BIAS) as u32) << SIGNIF_BITS) & EXPN_MASK;

        self.bits = bits;
    }

    /// View the pattern as raw bits.
    #[inline]
    pub fn bits(self) -> u32 {
        self.bits
    }

    /// View the pattern as the float it encodes.
    #[inline]
    pub fn value(self) -> f32 {
        f32::from_bits(self.bits)
    }
}
