//! Bit accumulator shared by the bit-packing codecs.
//!
//! Groups of one width go in, groups of another width come out. Base32
//! pushes 8-bit bytes and drains 5-bit digits when encoding (and the reverse
//! when decoding); binary text pushes single bits and drains bytes.

/// Buffers bits pushed in one group width and drains them in another.
#[derive(Debug, Default, Clone)]
pub struct BitAccumulator {
    buffer: u64,
    bits: u32,
}

impl BitAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `width` bits of `value`.
    pub fn push(&mut self, value: u32, width: u32) {
        debug_assert!(width <= 32 && self.bits + width <= 64);
        self.buffer = (self.buffer << width) | (u64::from(value) & mask(width));
        self.bits += width;
    }

    /// Drain the oldest `width` bits, if that many are buffered.
    pub fn pop(&mut self, width: u32) -> Option<u32> {
        if self.bits < width {
            return None;
        }
        self.bits -= width;
        let group = (self.buffer >> self.bits) & mask(width);
        self.buffer &= mask(self.bits);
        Some(group as u32)
    }

    /// Drain whatever is left as one `width`-bit group, left-aligned and
    /// zero-filled below. Returns `None` when nothing is buffered.
    pub fn flush(&mut self, width: u32) -> Option<u32> {
        if self.bits == 0 {
            return None;
        }
        debug_assert!(self.bits < width);
        let group = (self.buffer << (width - self.bits)) & mask(width);
        self.buffer = 0;
        self.bits = 0;
        Some(group as u32)
    }

    /// Number of bits waiting to be drained.
    pub fn pending(&self) -> u32 {
        self.bits
    }
}

fn mask(width: u32) -> u64 {
    if width >= 64 { u64::MAX } else { (1u64 << width) - 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_five_bit_groups() {
        let mut acc = BitAccumulator::new();
        acc.push(0b1010_1010, 8);

        assert_eq!(acc.pop(5), Some(0b10101));
        assert_eq!(acc.pop(5), None);
        assert_eq!(acc.pending(), 3);
        // remaining 010 left-aligned in five bits
        assert_eq!(acc.flush(5), Some(0b01000));
        assert_eq!(acc.pending(), 0);
        assert_eq!(acc.flush(5), None);
    }

    #[test]
    fn test_single_bits_to_bytes() {
        let mut acc = BitAccumulator::new();
        for bit in [0, 1, 0, 0, 0, 0, 0, 1, 1] {
            acc.push(bit, 1);
        }
        assert_eq!(acc.pop(8), Some(0x41));
        assert_eq!(acc.pop(8), None);
        assert_eq!(acc.pending(), 1);
    }

    #[test]
    fn test_push_masks_high_bits() {
        let mut acc = BitAccumulator::new();
        acc.push(0xFF, 5);
        assert_eq!(acc.pop(5), Some(0b11111));
    }
}
