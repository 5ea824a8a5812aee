//! SHA-512 round functions.
//!
//! All helpers operate on native `u64` words; no word splitting is needed
//! on any supported target.

pub use super::K512;

#[inline(always)]
pub fn small_sigma0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

#[inline(always)]
pub fn small_sigma1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

#[inline(always)]
pub fn big_sigma0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

#[inline(always)]
pub fn big_sigma1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

#[inline(always)]
pub fn ch(e: u64, f: u64, g: u64) -> u64 {
    (e & f) ^ ((!e) & g)
}

#[inline(always)]
pub fn maj(a: u64, b: u64, c: u64) -> u64 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Extends the rolling 16-word message schedule in place for round `i`
/// (`i >= 16`) and returns the new word.
#[inline(always)]
fn schedule(w: &mut [u64; 16], i: usize) -> u64 {
    let w16 = w[(i - 16) & 15];
    let w15 = w[(i - 15) & 15];
    let w7 = w[(i - 7) & 15];
    let w2 = w[(i - 2) & 15];

    let next = w16
        .wrapping_add(small_sigma0(w15))
        .wrapping_add(w7)
        .wrapping_add(small_sigma1(w2));

    w[i & 15] = next;
    next
}

/// Runs the 80 SHA-512 rounds over one block and folds the result into
/// `state`.
///
/// `w` holds the first sixteen big-endian message words; the remaining
/// sixty-four are derived on the fly in a rolling window.
#[cfg(not(feature = "speed"))]
pub fn all_rounds(state: &mut [u64; 8], mut w: [u64; 16]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    for (i, &ki) in K512.iter().enumerate() {
        let wi = if i < 16 { w[i] } else { schedule(&mut w, i) };

        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(ki)
            .wrapping_add(wi);

        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (slot, value) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *slot = slot.wrapping_add(value);
    }
}

/// Unrolled variant of the round loop.
///
/// Eight rounds are expanded per iteration with the working variables
/// renamed instead of shifted, so no register shuffling happens between
/// rounds.
#[cfg(feature = "speed")]
pub fn all_rounds(state: &mut [u64; 8], w: &mut [u64; 16]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    macro_rules! R {
        ($a:ident, $b:ident, $c:ident, $d:ident, $e:ident, $f:ident, $g:ident, $h:ident, $i:expr) => {{
            let i = $i;
            let wi = if i < 16 { w[i] } else { schedule(w, i) };

            let t1 = $h
                .wrapping_add(big_sigma1($e))
                .wrapping_add(ch($e, $f, $g))
                .wrapping_add(K512[i])
                .wrapping_add(wi);

            let t2 = big_sigma0($a).wrapping_add(maj($a, $b, $c));

            $d = $d.wrapping_add(t1);
            $h = t1.wrapping_add(t2);
        }};
    }

    for base in (0..80).step_by(8) {
        R!(a, b, c, d, e, f, g, h, base);
        R!(h, a, b, c, d, e, f, g, base + 1);
        R!(g, h, a, b, c, d, e, f, base + 2);
        R!(f, g, h, a, b, c, d, e, base + 3);
        R!(e, f, g, h, a, b, c, d, base + 4);
        R!(d, e, f, g, h, a, b, c, base + 5);
        R!(c, d, e, f, g, h, a, b, base + 6);
        R!(b, c, d, e, f, g, h, a, base + 7);
    }

    for (slot, value) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *slot = slot.wrapping_add(value);
    }
}
