/// Count the set bits of `word`.
///
/// Sums adjacent bit groups in place, at widths 1, 2, 4, 8 and 16, so
/// that after the last pass the whole word holds the total. Branch-free.
///
/// # Examples
///
/// ```rust
/// use fixedfloat::bit_count;
///
/// assert_eq!(bit_count(0), 0);
/// assert_eq!(bit_count(0b1011), 3);
/// assert_eq!(bit_count(0xFFFF_FFFF), 32);
/// ```
#[inline]
pub fn bit_count(word: u32) -> u8 {
    let mut x = word;
    x = (x & 0x5555_5555) + ((x >> 1) & 0x5555_5555);
    x = (x & 0x3333_3333) + ((x >> 2) & 0x3333_3333);
    x = (x & 0x0F0F_0F0F) + ((x >> 4) & 0x0F0F_0F0F);
    x = (x & 0x00FF_00FF) + ((x >> 8) & 0x00FF_00FF);
    x = (x & 0x0000_FFFF) + ((x >> 16) & 0x0000_FFFF);
    x as u8
}

/// Return the zero-based index of the highest set bit of `word`,
/// i.e. `31 - word.leading_zeros()`.
///
/// Binary search by masking: each mask isolates the upper half of the
/// surviving bit groups, and is kept only when something survives it.
/// After all five masks exactly one bit is left, the highest originally
/// set; counting the bits below it gives its index.
///
/// `word` must be nonzero. This is checked with a debug assertion; in
/// release builds a zero input produces a meaningless result.
///
/// # Examples
///
/// ```rust
/// use fixedfloat::top_set_bit;
///
/// assert_eq!(top_set_bit(1), 0);
/// assert_eq!(top_set_bit(0b1000), 3);
/// assert_eq!(top_set_bit(0b1010), 3);
/// assert_eq!(top_set_bit(0x8000_0000), 31);
/// ```
#[inline]
pub fn top_set_bit(word: u32) -> u32 {
    debug_assert!(word != 0);

    let mut x = word;
    x = if x & 0xFFFF_0000 != 0 { x & 0xFFFF_0000 } else { x };
    x = if x & 0xFF00_FF00 != 0 { x & 0xFF00_FF00 } else { x };
    x = if x & 0xF0F0_F0F0 != 0 { x & 0xF0F0_F0F0 } else { x };
    x = if x & 0xCCCC_CCCC != 0 { x & 0xCCCC_CCCC } else { x };
    x = if x & 0xAAAA_AAAA != 0 { x & 0xAAAA_AAAA } else { x };

    // x now has a single bit set; a mask of everything below it has
    // exactly `index` bits set.
    bit_count((x & x.wrapping_neg()).wrapping_sub(1)) as u32
}

#[cfg(test)]
mod tests {
    use super::{bit_count, top_set_bit};

    #[test]
    fn bit_count_limits() {
        assert_eq!(bit_count(0), 0);
        assert_eq!(bit_count(0xFFFF_FFFF), 32);
    }

    #[test]
    fn bit_count_patterns() {
        assert_eq!(bit_count(0b1011), 3);
        assert_eq!(bit_count(0x8000_0001), 2);
        assert_eq!(bit_count(0x5555_5555), 16);
        assert_eq!(bit_count(0xAAAA_AAAA), 16);
        assert_eq!(bit_count(0x00FF_FF00), 16);
    }

    #[test]
    fn bit_count_matches_count_ones() {
        let cases = [1, 2, 3, 100, 0x1234_5678, 0xDEAD_BEEF, 0xFFFF_FFFE];
        for &w in &cases {
            assert_eq!(bit_count(w) as u32, w.count_ones(), "word {:#x}", w);
        }
    }

    #[test]
    fn top_set_bit_single() {
        for i in 0..32u32 {
            assert_eq!(top_set_bit(1u32 << i), i);
        }
    }

    #[test]
    fn top_set_bit_mixed() {
        assert_eq!(top_set_bit(0b1010), 3);
        assert_eq!(top_set_bit(0b0111), 2);
        assert_eq!(top_set_bit(0xFFFF_FFFF), 31);
        assert_eq!(top_set_bit(0x0001_8000), 16);
    }

    #[test]
    fn top_set_bit_matches_leading_zeros() {
        let cases = [1, 5, 6, 255, 256, 0x1234_5678, 0xDEAD_BEEF, 0xFFFF_FFFF];
        for &w in &cases {
            assert_eq!(top_set_bit(w), 31 - w.leading_zeros(), "word {:#x}", w);
        }
    }
}
