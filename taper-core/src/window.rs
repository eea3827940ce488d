//! Full-length Hann (raised-cosine) window.
//!
//! ```text
//! w[i] = 0.5 * (1 - cos(2π·i / (N - 1)))     i = 0 .. N-1
//! ```
//!
//! The window is symmetric: zero at both ends, 1.0 at the centre for odd
//! `N`. Only the first half is evaluated; the second half is its mirror image,
//! so `w[i] == w[N-1-i]` holds exactly rather than to within rounding error.
//!
//! `N == 0` yields an empty window. `N == 1` would divide by zero in the
//! formula above; it yields `[1.0]` so a single frame passes through unchanged.

use std::f64::consts::TAU;

/// Generate a symmetric Hann window of `len` weights in `[0, 1]`.
pub fn hann_window(len: usize) -> Vec<f64> {
    match len {
        0 => return Vec::new(),
        1 => return vec![1.0],
        _ => {}
    }

    let step = TAU / (len - 1) as f64;
    let mut window = vec![0.0; len];
    for i in 0..len.div_ceil(2) {
        let w = 0.5 * (1.0 - (i as f64 * step).cos());
        window[i] = w;
        window[len - 1 - i] = w;
    }
    window
}
