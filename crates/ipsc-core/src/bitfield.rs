//! Sub-byte field access. A field is described by its mask; the shift is
//! implied by the lowest set bit of the mask.

/// Extract the field selected by `mask` from `byte`, shifted down to bit 0.
#[inline]
pub fn extract(byte: u8, mask: u8) -> u8 {
    if mask == 0 {
        return 0;
    }
    (byte & mask) >> mask.trailing_zeros()
}

/// True if any bit selected by `mask` is set
#[inline]
pub fn flag(byte: u8, mask: u8) -> bool {
    byte & mask != 0
}

/// Place `value` into the field selected by `mask`, leaving other bits of `byte` untouched.
/// Bits of `value` that do not fit the field are discarded.
#[inline]
pub fn insert(byte: u8, mask: u8, value: u8) -> u8 {
    if mask == 0 {
        return byte;
    }
    let shifted = ((value as u16) << mask.trailing_zeros()) as u8;
    (byte & !mask) | (shifted & mask)
}

/// Set or clear the bits selected by `mask`
#[inline]
pub fn set_flag(byte: u8, mask: u8, value: bool) -> u8 {
    if value { byte | mask } else { byte & !mask }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_linking_byte() {
        let b = 0xC3;
        assert_eq!(extract(b, 0xC0), 0x3);
        assert_eq!(extract(b, 0x30), 0x0);
        assert_eq!(extract(b, 0x0C), 0x0);
        assert_eq!(extract(b, 0x03), 0x3);
    }

    #[test]
    fn test_extract_unaligned_masks() {
        assert_eq!(extract(0b1010_1111, 0x70), 0b010);
        assert_eq!(extract(0xff, 0x7f), 0x7f);
        assert_eq!(extract(0xff, 0x1f), 0x1f);
        assert_eq!(extract(0xff, 0x00), 0);
    }

    #[test]
    fn test_flag() {
        assert!(flag(0x40, 0x40));
        assert!(!flag(0xbf, 0x40));
    }

    #[test]
    fn test_insert() {
        assert_eq!(insert(0x00, 0xC0, 0x3), 0xC0);
        assert_eq!(insert(0xff, 0x30, 0x0), 0xcf);
        // Excess bits are masked off
        assert_eq!(insert(0x00, 0x0c, 0xff), 0x0c);
        assert_eq!(insert(0x00, 0x80, 1), 0x80);

        let mut b = 0u8;
        for (mask, v) in [(0xc0, 1), (0x30, 2), (0x0c, 3), (0x03, 0)] {
            b = insert(b, mask, v);
        }
        assert_eq!(b, 0b01_10_11_00);
        assert_eq!(extract(b, 0x30), 2);
    }

    #[test]
    fn test_set_flag() {
        assert_eq!(set_flag(0x00, 0x10, true), 0x10);
        assert_eq!(set_flag(0xff, 0x10, false), 0xef);
    }
}
