/// The highest degree [`bernstein`] is evaluated for. Beyond it the `f64` binomial coefficient
/// is no longer finite, so curves of higher degree are evaluated by subdivision instead.
pub const MAX_BERNSTEIN_DEGREE: u32 = 1000;

/// The binomial coefficient `C(n, k)`, computed exactly with integer arithmetic.
///
/// Uses the multiplicative formula so no factorial is ever formed. Returns `Some(0)` when
/// `k > n` and `None` if an intermediate product does not fit in a `u128` (from around
/// `n = 139`).
pub fn binomial(n: u32, k: u32) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    (0..k).try_fold(1u128, |c, i| Some(c.checked_mul((n - i) as u128)? / (i + 1) as u128))
}

/// `C(n, k)` as a float, using the same multiplicative formula. Finite up to
/// `n = MAX_BERNSTEIN_DEGREE`, though no longer exact once it leaves the range of [`binomial`].
pub fn binomial_f64(n: u32, k: u32) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (0..k).fold(1.0, |c, i| c * (n - i) as f64 / (i + 1) as f64)
}

/// The Bernstein basis polynomial `B_{i,n}(t) = C(n, i) * t^i * (1 - t)^(n - i)`.
///
/// Defined for every `t`, not just `[0, 1]`. The product is formed in `f64` so that the large
/// coefficient and the tiny powers of a high-degree term cancel before narrowing.
#[inline]
pub fn bernstein(t: f32, i: u32, n: u32) -> f32 {
    let c = binomial(n, i).map_or_else(|| binomial_f64(n, i), |c| c as f64);
    let t = t as f64;
    (c * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32)) as f32
}
