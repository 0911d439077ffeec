pub trait FloatType {
    fn sqrt(x: Self) -> Self;
    fn is_finite(x: Self) -> bool;
}

macro_rules! impl_float_type {
    ($($t:ty),*) => {
        $(
            impl FloatType for $t {
                #[inline]
                fn sqrt(x: Self) -> Self {
                    <$t>::sqrt(x)
                }
                #[inline]
                fn is_finite(x: Self) -> bool {
                    <$t>::is_finite(x)
                }
            }
        )*
    };
}

impl_float_type!(f32, f64);
