//! `f32` and `f64` lanes: IEEE-754 arithmetic, ordered compares, rounding
//! and the single-precision approximations.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use super::{Abs, Compare, HorizontalAdd, MinMax, Rounding};
use crate::vector::Vector128;

macro_rules! float_ops {
    ($t:ty, $reg:ty {
        add: $add:ident, sub: $sub:ident, mul: $mul:ident, div: $div:ident,
        eq: $eq:ident, ne: $ne:ident, gt: $gt:ident, lt: $lt:ident, ge: $ge:ident, le: $le:ident,
        min: $min:ident, max: $max:ident, andnot: $andnot:ident, set1: $set1:ident,
        sqrt: $sqrt:ident, ceil: $ceil:ident, floor: $floor:ident $(,)?
    }) => {
        impl From<$reg> for Vector128<$t> {
            #[inline(always)]
            fn from(reg: $reg) -> Self {
                Self::from_register(reg)
            }
        }

        binary_op!($t, Add, add, $add);
        binary_op!($t, Sub, sub, $sub);
        binary_op!($t, Mul, mul, $mul);
        binary_op!($t, Div, div, $div);

        // Ordered predicates: any compare involving NaN is false, except `ne`.
        impl Compare for Vector128<$t> {
            #[inline(always)]
            fn cmp_eq(self, rhs: Self) -> Self {
                Self::from_register(unsafe { $eq(self.reg, rhs.reg) })
            }

            #[inline(always)]
            fn cmp_gt(self, rhs: Self) -> Self {
                Self::from_register(unsafe { $gt(self.reg, rhs.reg) })
            }

            #[inline(always)]
            fn cmp_lt(self, rhs: Self) -> Self {
                Self::from_register(unsafe { $lt(self.reg, rhs.reg) })
            }

            #[inline(always)]
            fn cmp_ne(self, rhs: Self) -> Self {
                Self::from_register(unsafe { $ne(self.reg, rhs.reg) })
            }

            #[inline(always)]
            fn cmp_ge(self, rhs: Self) -> Self {
                Self::from_register(unsafe { $ge(self.reg, rhs.reg) })
            }

            #[inline(always)]
            fn cmp_le(self, rhs: Self) -> Self {
                Self::from_register(unsafe { $le(self.reg, rhs.reg) })
            }
        }

        impl MinMax for Vector128<$t> {
            #[inline(always)]
            fn min(self, rhs: Self) -> Self {
                Self::from_register(unsafe { $min(self.reg, rhs.reg) })
            }

            #[inline(always)]
            fn max(self, rhs: Self) -> Self {
                Self::from_register(unsafe { $max(self.reg, rhs.reg) })
            }
        }

        impl Abs for Vector128<$t> {
            /// Clears the sign bit.
            #[inline(always)]
            fn abs(self) -> Self {
                Self::from_register(unsafe { $andnot($set1(-0.0), self.reg) })
            }
        }

        impl Rounding for Vector128<$t> {
            #[inline(always)]
            fn sqrt(self) -> Self {
                Self::from_register(unsafe { $sqrt(self.reg) })
            }

            #[inline(always)]
            fn ceil(self) -> Self {
                Self::from_register(unsafe { $ceil(self.reg) })
            }

            #[inline(always)]
            fn floor(self) -> Self {
                Self::from_register(unsafe { $floor(self.reg) })
            }
        }
    };
}

float_ops!(f32, __m128 {
    add: _mm_add_ps, sub: _mm_sub_ps, mul: _mm_mul_ps, div: _mm_div_ps,
    eq: _mm_cmpeq_ps, ne: _mm_cmpneq_ps, gt: _mm_cmpgt_ps, lt: _mm_cmplt_ps,
    ge: _mm_cmpge_ps, le: _mm_cmple_ps,
    min: _mm_min_ps, max: _mm_max_ps, andnot: _mm_andnot_ps, set1: _mm_set1_ps,
    sqrt: _mm_sqrt_ps, ceil: _mm_ceil_ps, floor: _mm_floor_ps,
});

float_ops!(f64, __m128d {
    add: _mm_add_pd, sub: _mm_sub_pd, mul: _mm_mul_pd, div: _mm_div_pd,
    eq: _mm_cmpeq_pd, ne: _mm_cmpneq_pd, gt: _mm_cmpgt_pd, lt: _mm_cmplt_pd,
    ge: _mm_cmpge_pd, le: _mm_cmple_pd,
    min: _mm_min_pd, max: _mm_max_pd, andnot: _mm_andnot_pd, set1: _mm_set1_pd,
    sqrt: _mm_sqrt_pd, ceil: _mm_ceil_pd, floor: _mm_floor_pd,
});

impl HorizontalAdd for Vector128<f32> {
    #[inline(always)]
    fn hadd(self, rhs: Self) -> Self {
        unsafe {
            // [a01, a23, b01, b23] -> [a01, b01, a23, b23]
            let sums = _mm_hadd_ps(self.reg, rhs.reg);
            Self::from_register(_mm_shuffle_ps(sums, sums, 0b11_01_10_00))
        }
    }
}

impl HorizontalAdd for Vector128<f64> {
    #[inline(always)]
    fn hadd(self, rhs: Self) -> Self {
        Self::from_register(unsafe { _mm_hadd_pd(self.reg, rhs.reg) })
    }
}

impl Vector128<f32> {
    /// Approximate reciprocal, relative error at most `1.5 * 2^-12`.
    #[inline(always)]
    pub fn rcp(self) -> Self {
        Self::from_register(unsafe { _mm_rcp_ps(self.reg) })
    }

    /// Approximate `1 / sqrt(x)`, relative error at most `1.5 * 2^-12`.
    #[inline(always)]
    pub fn rsqrt(self) -> Self {
        Self::from_register(unsafe { _mm_rsqrt_ps(self.reg) })
    }

    /// `self * rhs.rcp()`: faster and less precise than `/`.
    #[inline(always)]
    pub fn fast_div(self, rhs: Self) -> Self {
        self * rhs.rcp()
    }
}
