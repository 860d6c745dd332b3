//! Vectorization support shared by the SIMD and combined strategies: the
//! platform lane width and the chunked multiply kernel.

/// Number of 32-bit lanes a single vector operation covers on this machine.
/// Detected at startup rather than hard-coded so the chunked kernels match
/// the registers actually available.
#[cfg(target_arch = "x86_64")]
pub fn lane_width() -> usize {
    if is_x86_feature_detected!("avx2") {
        // 256-bit registers, eight i32 lanes
        8
    } else {
        // SSE2 is baseline on x86_64
        4
    }
}

/// NEON: 128-bit vectors, four i32 lanes.
#[cfg(target_arch = "aarch64")]
pub fn lane_width() -> usize {
    4
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub fn lane_width() -> usize {
    4
}

/// Multiply every element of `src` by 2 into `dst`: full `width`-lane chunks
/// first (fixed trip count per chunk, which the compiler lowers to vector
/// multiplies), then a scalar loop over the `len % width` tail.
///
/// `src` and `dst` must have the same length; `width` must be non-zero.
pub fn double_chunked(src: &[i32], dst: &mut [i32], width: usize) {
    assert_eq!(src.len(), dst.len());
    assert!(width > 0);

    let full = src.len() - src.len() % width;
    let chunks = src[..full]
        .chunks_exact(width)
        .zip(dst[..full].chunks_exact_mut(width));
    for (s, d) in chunks {
        for lane in 0..width {
            d[lane] = s[lane] * 2;
        }
    }

    for i in full..src.len() {
        dst[i] = src[i] * 2;
    }
}
