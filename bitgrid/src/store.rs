/// A single bit value, stored as 0 or 1.
pub type Bit = u8;

/// Flat, canonically ordered bit sequence.
///
/// Canonical indices are fixed at creation and never reordered; the store
/// only changes by toggling (or setting) individual bits in place, or by a
/// full [`reset`](BitStore::reset) to zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitStore {
    bits: Vec<Bit>,
}

impl BitStore {
    /// Create a store of `n` zero bits.
    pub fn new(n: usize) -> Self {
        Self { bits: vec![0; n] }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Get the bit at canonical index `i`.
    ///
    /// Panics if `i` is out of range.
    #[inline]
    pub fn get(&self, i: usize) -> Bit {
        assert!(i < self.bits.len(), "bit index {i} out of range for {} bits", self.bits.len());
        self.bits[i]
    }

    /// Set the bit at canonical index `i`. Any non-zero `bit` stores 1.
    #[inline]
    pub fn set(&mut self, i: usize, bit: Bit) {
        assert!(i < self.bits.len(), "bit index {i} out of range for {} bits", self.bits.len());
        self.bits[i] = (bit != 0) as Bit;
    }

    /// Flip the bit at canonical index `i`.
    #[inline]
    pub fn toggle(&mut self, i: usize) {
        assert!(i < self.bits.len(), "bit index {i} out of range for {} bits", self.bits.len());
        self.bits[i] ^= 1;
    }

    /// Reinitialize to `n` zero bits, discarding the previous pattern.
    pub fn reset(&mut self, n: usize) {
        self.bits.clear();
        self.bits.resize(n, 0);
    }

    /// Zero every bit, keeping the current length.
    pub fn clear(&mut self) {
        self.bits.fill(0);
    }

    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b != 0).count()
    }

    /// Bits in canonical order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Bit> + ExactSizeIterator + '_ {
        self.bits.iter().copied()
    }

    pub fn as_slice(&self) -> &[Bit] {
        &self.bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn new_store_is_all_zero() {
        let s = BitStore::new(16);
        assert_eq!(s.len(), 16);
        assert_eq!(s.count_ones(), 0);
    }

    #[test]
    fn toggle_flips_single_bit() {
        let mut s = BitStore::new(8);
        s.toggle(3);
        assert_eq!(s.get(3), 1);
        assert_eq!(s.count_ones(), 1);
        s.toggle(3);
        assert_eq!(s.get(3), 0);
    }

    #[test]
    fn set_normalizes_to_one() {
        let mut s = BitStore::new(8);
        s.set(0, 7);
        assert_eq!(s.get(0), 1);
        s.set(0, 0);
        assert_eq!(s.get(0), 0);
    }

    #[test]
    fn reset_discards_pattern() {
        let mut s = BitStore::new(8);
        s.toggle(0);
        s.toggle(7);
        s.reset(32);
        assert_eq!(s.len(), 32);
        assert!(s.iter().all(|b| b == 0));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn get_out_of_range_panics() {
        BitStore::new(8).get(8);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn toggle_out_of_range_panics() {
        BitStore::new(8).toggle(100);
    }

    #[quickcheck]
    fn double_toggle_restores_store(indices: Vec<u8>) -> bool {
        let mut s = BitStore::new(128);
        for &i in &indices {
            s.toggle(i as usize % 128);
        }
        let snapshot = s.clone();
        for &i in &indices {
            s.toggle(i as usize % 128);
            s.toggle(i as usize % 128);
        }
        s == snapshot
    }
}
