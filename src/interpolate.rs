/// A trait for points that can be blended together by the curve evaluators.
///
/// Both Bezier evaluators only ever need weighted sums of control points, so anything that
/// supports scaling and addition (scalars, `vek` vectors, colours) can be used as a control point.
pub trait Interpolate: Sized {
    /// Scale an item by a weight.
    fn scale(a: Self, x: f32) -> Self;

    /// Linearly scale two items of this type and sum them.
    #[inline(always)]
    fn lerp2(a: Self, b: Self, x: f32, y: f32) -> Self {
        Self::sum(Self::scale(a, x), Self::scale(b, y))
    }

    /// Add two items together.
    fn sum(a: Self, b: Self) -> Self;
}

// Default impls for certain types
macro_rules! impl_interpolate_for {
    ($t:ty) => {
        impl Interpolate for $t {
            #[inline(always)]
            fn scale(a: Self, x: f32) -> Self {
                a * x
            }
            #[inline(always)]
            fn sum(a: Self, b: Self) -> Self {
                a + b
            }
        }
    };
}
impl_interpolate_for!(f32);
impl_interpolate_for!(vek::Vec2<f32>);
impl_interpolate_for!(vek::Vec3<f32>);
impl_interpolate_for!(vek::Vec4<f32>);
impl_interpolate_for!(vek::Rgb<f32>);
impl_interpolate_for!(vek::Rgba<f32>);

impl<T: Interpolate, U: Interpolate> Interpolate for (T, U) {
    #[inline(always)]
    fn scale(a: Self, x: f32) -> Self {
        (T::scale(a.0, x), U::scale(a.1, x))
    }

    #[inline(always)]
    fn sum(a: Self, b: Self) -> Self {
        (T::sum(a.0, b.0), U::sum(a.1, b.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vek::Vec2;

    #[test]
    fn lerp2_is_weighted_sum() {
        let p = Vec2::<f32>::lerp2(Vec2::new(0.0, 2.0), Vec2::new(4.0, 6.0), 0.75, 0.25);
        assert_eq!(p, Vec2::new(1.0, 3.0));
    }

    #[test]
    fn tuples_interpolate_componentwise() {
        let (a, b) = <(f32, Vec2<f32>)>::lerp2((1.0, Vec2::one()), (3.0, Vec2::zero()), 0.5, 0.5);
        assert_eq!(a, 2.0);
        assert_eq!(b, Vec2::broadcast(0.5));
    }
}
