pub mod domain;

/// Reverses the lowest `bits` bits of `n`.
const fn reverse_bits(n: u32, bits: u32) -> u32 {
    if bits == 0 {
        return 0;
    }
    n.reverse_bits() >> (u32::BITS - bits)
}

/// Applies the bit-reversal permutation to `a` in place.
///
/// The permutation is an involution, so the same call converts in both
/// directions between natural and bit-reversed order.
///
/// Panics if the length is not a power of two.
pub fn bitreverse_slice<T>(a: &mut [T]) {
    if a.is_empty() {
        return;
    }

    let n = a.len();
    assert!(n.is_power_of_two(), "length {n} is not a power of two");
    let log_n = n.ilog2();

    for k in 0..n {
        let rk = reverse_bits(k as u32, log_n) as usize;
        if k < rk {
            a.swap(k, rk);
        }
    }
}
