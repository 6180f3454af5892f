/// Interpolation contract for box field types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with already-eased factor `t`.
    ///
    /// `t` may leave `[0, 1]` for overshooting curves; implementations must extrapolate rather
    /// than clamp.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        // Exactly `a` at t=0; `a + (b - a)` can miss `b` by an ulp, so t=1 is pinned.
        if t == 1.0 { *b } else { a + (b - a) * t }
    }
}
