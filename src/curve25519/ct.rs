/// Constant-time comparison utilities.
///
/// Implementations must ensure that execution time does not depend on the
/// compared values: every byte is visited and differences are accumulated
/// with OR, never with an early exit.
pub(crate) trait ConstantTimeEq {
    /// Returns `true` if `self == other`, in constant time.
    fn ct_eq(&self, other: &Self) -> bool;
}

impl ConstantTimeEq for [u8] {
    /// Slices of different lengths compare unequal; the length itself is
    /// treated as public.
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let diff = self
            .iter()
            .zip(other)
            .map(|(a, b)| a ^ b)
            .fold(0u8, |acc, v| acc | v);

        // 1 when diff == 0, without a data-dependent branch
        ((u32::from(diff).wrapping_sub(1) >> 8) & 1) == 1
    }
}

impl ConstantTimeEq for [u8; 32] {
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> bool {
        self[..].ct_eq(&other[..])
    }
}

#[cfg(test)]
mod tests {
    use super::ConstantTimeEq;

    #[test]
    fn detects_difference_in_any_position() {
        let base = [0x5au8; 32];
        assert!(base.ct_eq(&base));

        for i in 0..32 {
            let mut other = base;
            other[i] ^= 0x01;
            assert!(!base.ct_eq(&other), "byte {i}");
        }
    }

    #[test]
    fn slices_of_different_length_differ() {
        assert!(!b"abc"[..].ct_eq(&b"abcd"[..]));
        assert!(b""[..].ct_eq(&b""[..]));
    }
}
