//! The per-lane-type operation matrix.
//!
//! Each operation is implemented only for the lane types that have a
//! hardware mapping. Using an operation on any other lane type is a missing
//! impl, i.e. a build error naming the operation and the vector type.
//!
//! | op | f32 | f64 | i8/u8 | i16/u16 | i32/u32 | i64/u64 |
//! |---|---|---|---|---|---|---|
//! | `+ -` | yes | yes | yes | yes | yes | yes |
//! | `*` | yes | yes | | | widening to 64-bit | |
//! | `/` | yes | yes | | | | |
//! | compare | yes | yes | yes | yes | yes | yes |
//! | `<< >>` scalar count | | | | yes | yes | yes |
//! | `<< >>` per-lane count | | | | | yes | yes |
//! | `min max` | yes | yes | yes | yes | yes | yes |
//! | `abs` | yes | yes | i8 | i16 | i32 | i64 |
//! | `hadd` | yes | yes | | i16 | i32 | |
//! | `sqrt ceil floor` | yes | yes | | | | |
//! | `rcp rsqrt fast_div` | yes | | | | | |
//!
//! Empty cells do not build:
//!
//! ```compile_fail
//! # use simd128::prelude::*;
//! let a = I8x16::splat(2);
//! let _ = a * a;
//! ```
//!
//! ```compile_fail
//! # use simd128::prelude::*;
//! let a = U16x8::splat(2);
//! let _ = a * a;
//! ```
//!
//! ```compile_fail
//! # use simd128::prelude::*;
//! let a = I64x2::splat(2);
//! let _ = a * a;
//! ```
//!
//! ```compile_fail
//! # use simd128::prelude::*;
//! let a = I32x4::splat(8);
//! let _ = a / a;
//! ```
//!
//! ```compile_fail
//! # use simd128::prelude::*;
//! let _ = U8x16::splat(1) << 1u32;
//! ```
//!
//! ```compile_fail
//! # use simd128::prelude::*;
//! let _ = I8x16::splat(-8) >> 1u32;
//! ```
//!
//! ```compile_fail
//! # use simd128::prelude::*;
//! let a = I16x8::splat(1);
//! let _ = a << a;
//! ```
//!
//! ```compile_fail
//! # use simd128::prelude::*;
//! let _ = I32x4::splat(4).sqrt();
//! ```
//!
//! ```compile_fail
//! # use simd128::prelude::*;
//! let _ = U64x2::splat(4).floor();
//! ```
//!
//! ```compile_fail
//! # use simd128::prelude::*;
//! let _ = F64x2::splat(4.0).rcp();
//! ```
//!
//! ```compile_fail
//! # use simd128::prelude::*;
//! let _ = I32x4::splat(4).rsqrt();
//! ```
//!
//! ```compile_fail
//! # use simd128::prelude::*;
//! let _ = U32x4::splat(4).abs();
//! ```
//!
//! ```compile_fail
//! # use simd128::prelude::*;
//! let _ = U8x16::splat(4).abs();
//! ```
//!
//! ```compile_fail
//! # use simd128::prelude::*;
//! let a = I64x2::splat(1);
//! let _ = a.hadd(a);
//! ```
//!
//! ```compile_fail
//! # use simd128::prelude::*;
//! let a = U64x2::splat(1);
//! let _ = hadd(a, a);
//! ```
//!
//! ```compile_fail
//! # use simd128::prelude::*;
//! let a = I8x16::splat(1);
//! let _ = a.hadd(a);
//! ```
//!
//! Value conversion exists only between `f32` and `i32` lanes; every other
//! pair goes through `reinterpret`:
//!
//! ```
//! # use simd128::prelude::*;
//! let i: I32x4 = F32x4::splat(2.0).into();
//! let _: F32x4 = i.into();
//! ```
//!
//! ```compile_fail
//! # use simd128::prelude::*;
//! let _: F64x2 = I32x4::splat(1).into();
//! ```
//!
//! ```compile_fail
//! # use simd128::prelude::*;
//! let _: I64x2 = F64x2::splat(1.0).into();
//! ```
//!
//! ```compile_fail
//! # use simd128::prelude::*;
//! let _: U32x4 = F32x4::splat(1.0).into();
//! ```

/// `impl $trait for Vector128<$t>` through a two-operand intrinsic.
macro_rules! binary_op {
    ($t:ty, $trait:ident, $method:ident, $intrinsic:ident) => {
        impl core::ops::$trait for Vector128<$t> {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                Self::from_register(unsafe { $intrinsic(self.reg, rhs.reg) })
            }
        }
    };
}

mod convert;
mod float;
mod int;

use core::ops::Not;

/// Lane-wise comparisons producing a lane mask (all-ones for true,
/// all-zeros for false, in every lane).
#[diagnostic::on_unimplemented(message = "lane comparison is not defined for `{Self}`")]
pub trait Compare: Sized + Not<Output = Self> {
    fn cmp_eq(self, rhs: Self) -> Self;

    fn cmp_gt(self, rhs: Self) -> Self;

    fn cmp_lt(self, rhs: Self) -> Self;

    fn cmp_ne(self, rhs: Self) -> Self {
        !self.cmp_eq(rhs)
    }

    fn cmp_ge(self, rhs: Self) -> Self {
        !self.cmp_lt(rhs)
    }

    fn cmp_le(self, rhs: Self) -> Self {
        !self.cmp_gt(rhs)
    }
}

/// Lane-wise minimum and maximum.
#[diagnostic::on_unimplemented(message = "`min`/`max` is not defined for `{Self}`")]
pub trait MinMax: Sized {
    fn min(self, rhs: Self) -> Self;

    fn max(self, rhs: Self) -> Self;
}

/// Lane-wise absolute value.
#[diagnostic::on_unimplemented(message = "`abs` is not defined for `{Self}`")]
pub trait Abs: Sized {
    fn abs(self) -> Self;
}

/// Horizontal pairwise add.
///
/// Result lane `2k` is `self[2k] + self[2k + 1]`, lane `2k + 1` is
/// `rhs[2k] + rhs[2k + 1]`. For four lanes:
/// `[a0 + a1, b0 + b1, a2 + a3, b2 + b3]`.
#[diagnostic::on_unimplemented(message = "`hadd` is not defined for `{Self}`")]
pub trait HorizontalAdd: Sized {
    fn hadd(self, rhs: Self) -> Self;
}

/// Exact float rounding and square root.
#[diagnostic::on_unimplemented(message = "`sqrt`/`ceil`/`floor` is not defined for `{Self}`")]
pub trait Rounding: Sized {
    fn sqrt(self) -> Self;

    fn ceil(self) -> Self;

    fn floor(self) -> Self;
}
