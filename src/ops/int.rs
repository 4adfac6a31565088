//! Integer lanes: wrapping add/sub, mask compares, logical shifts, min/max,
//! abs, horizontal add and the widening 32-bit multiply.
//!
//! Unsigned ordering goes through the sign-bit bias; 64-bit min/max and abs
//! have no native instruction and are built from compare + select.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;
use core::ops::{Mul, Shl, Shr};

use super::{Abs, Compare, HorizontalAdd, MinMax};
use crate::bias::biased;
use crate::vector::Vector128;

macro_rules! int_common {
    ($($t:ty => $add:ident, $sub:ident;)+) => {$(
        impl From<__m128i> for Vector128<$t> {
            #[inline(always)]
            fn from(reg: __m128i) -> Self {
                Self::from_register(reg)
            }
        }

        binary_op!($t, Add, add, $add);
        binary_op!($t, Sub, sub, $sub);
    )+};
}

int_common! {
    i8 => _mm_add_epi8, _mm_sub_epi8;
    u8 => _mm_add_epi8, _mm_sub_epi8;
    i16 => _mm_add_epi16, _mm_sub_epi16;
    u16 => _mm_add_epi16, _mm_sub_epi16;
    i32 => _mm_add_epi32, _mm_sub_epi32;
    u32 => _mm_add_epi32, _mm_sub_epi32;
    i64 => _mm_add_epi64, _mm_sub_epi64;
    u64 => _mm_add_epi64, _mm_sub_epi64;
}

macro_rules! signed_compare {
    ($($t:ty => $eq:ident, $gt:ident;)+) => {$(
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
                Self::from_register(unsafe { $gt(rhs.reg, self.reg) })
            }
        }
    )+};
}

macro_rules! unsigned_compare {
    ($($t:ty => $eq:ident, $gt:ident;)+) => {$(
        impl Compare for Vector128<$t> {
            #[inline(always)]
            fn cmp_eq(self, rhs: Self) -> Self {
                Self::from_register(unsafe { $eq(self.reg, rhs.reg) })
            }

            #[inline(always)]
            fn cmp_gt(self, rhs: Self) -> Self {
                let (a, b) = (biased::<$t>(self.reg), biased::<$t>(rhs.reg));
                Self::from_register(unsafe { $gt(a, b) })
            }

            #[inline(always)]
            fn cmp_lt(self, rhs: Self) -> Self {
                let (a, b) = (biased::<$t>(self.reg), biased::<$t>(rhs.reg));
                Self::from_register(unsafe { $gt(b, a) })
            }
        }
    )+};
}

signed_compare! {
    i8 => _mm_cmpeq_epi8, _mm_cmpgt_epi8;
    i16 => _mm_cmpeq_epi16, _mm_cmpgt_epi16;
    i32 => _mm_cmpeq_epi32, _mm_cmpgt_epi32;
    i64 => _mm_cmpeq_epi64, _mm_cmpgt_epi64;
}

unsigned_compare! {
    u8 => _mm_cmpeq_epi8, _mm_cmpgt_epi8;
    u16 => _mm_cmpeq_epi16, _mm_cmpgt_epi16;
    u32 => _mm_cmpeq_epi32, _mm_cmpgt_epi32;
    u64 => _mm_cmpeq_epi64, _mm_cmpgt_epi64;
}

macro_rules! native_min_max {
    ($($t:ty => $min:ident, $max:ident;)+) => {$(
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
    )+};
}

native_min_max! {
    i8 => _mm_min_epi8, _mm_max_epi8;
    u8 => _mm_min_epu8, _mm_max_epu8;
    i16 => _mm_min_epi16, _mm_max_epi16;
    u16 => _mm_min_epu16, _mm_max_epu16;
    i32 => _mm_min_epi32, _mm_max_epi32;
    u32 => _mm_min_epu32, _mm_max_epu32;
}

// 64-bit lanes: select by the (biased, for u64) greater-than mask.
macro_rules! select_min_max {
    ($($t:ty),+) => {$(
        impl MinMax for Vector128<$t> {
            #[inline(always)]
            fn min(self, rhs: Self) -> Self {
                let gt = self.cmp_gt(rhs);
                Self::from_register(unsafe { _mm_blendv_epi8(self.reg, rhs.reg, gt.reg) })
            }

            #[inline(always)]
            fn max(self, rhs: Self) -> Self {
                let gt = self.cmp_gt(rhs);
                Self::from_register(unsafe { _mm_blendv_epi8(rhs.reg, self.reg, gt.reg) })
            }
        }
    )+};
}

select_min_max!(i64, u64);

macro_rules! native_abs {
    ($($t:ty => $abs:ident;)+) => {$(
        impl Abs for Vector128<$t> {
            /// `MIN` maps to itself.
            #[inline(always)]
            fn abs(self) -> Self {
                Self::from_register(unsafe { $abs(self.reg) })
            }
        }
    )+};
}

native_abs! {
    i8 => _mm_abs_epi8;
    i16 => _mm_abs_epi16;
    i32 => _mm_abs_epi32;
}

impl Abs for Vector128<i64> {
    /// `mask = lane < 0 ? !0 : 0; (lane ^ mask) - mask`. `i64::MIN` maps to
    /// itself.
    #[inline(always)]
    fn abs(self) -> Self {
        unsafe {
            let mask = _mm_cmpgt_epi64(_mm_setzero_si128(), self.reg);
            Self::from_register(_mm_sub_epi64(_mm_xor_si128(self.reg, mask), mask))
        }
    }
}

// Logical shifts by one count for every lane. Counts >= lane width give 0.
macro_rules! scalar_shift {
    ($($t:ty => $sll:ident, $srl:ident;)+) => {$(
        impl Shl<u32> for Vector128<$t> {
            type Output = Self;

            #[inline(always)]
            fn shl(self, count: u32) -> Self {
                unsafe {
                    let count = _mm_cvtsi32_si128(count as i32);
                    Self::from_register($sll(self.reg, count))
                }
            }
        }

        impl Shr<u32> for Vector128<$t> {
            type Output = Self;

            #[inline(always)]
            fn shr(self, count: u32) -> Self {
                unsafe {
                    let count = _mm_cvtsi32_si128(count as i32);
                    Self::from_register($srl(self.reg, count))
                }
            }
        }
    )+};
}

scalar_shift! {
    i16 => _mm_sll_epi16, _mm_srl_epi16;
    u16 => _mm_sll_epi16, _mm_srl_epi16;
    i32 => _mm_sll_epi32, _mm_srl_epi32;
    u32 => _mm_sll_epi32, _mm_srl_epi32;
    i64 => _mm_sll_epi64, _mm_srl_epi64;
    u64 => _mm_sll_epi64, _mm_srl_epi64;
}

// Per-lane counts (AVX2). Counts are read as unsigned; >= lane width gives 0.
macro_rules! vector_shift {
    ($($t:ty => $sllv:ident, $srlv:ident;)+) => {$(
        binary_op!($t, Shl, shl, $sllv);
        binary_op!($t, Shr, shr, $srlv);
    )+};
}

vector_shift! {
    i32 => _mm_sllv_epi32, _mm_srlv_epi32;
    u32 => _mm_sllv_epi32, _mm_srlv_epi32;
    i64 => _mm_sllv_epi64, _mm_srlv_epi64;
    u64 => _mm_sllv_epi64, _mm_srlv_epi64;
}

/// Widening half-multiply: lanes 0 and 2 of each operand, sign-extended,
/// give the two `i64` lanes of the product.
impl Mul for Vector128<i32> {
    type Output = Vector128<i64>;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Vector128<i64> {
        Vector128::from_register(unsafe { _mm_mul_epi32(self.reg, rhs.reg) })
    }
}

/// Widening half-multiply: lanes 0 and 2 of each operand, zero-extended,
/// give the two `u64` lanes of the product.
impl Mul for Vector128<u32> {
    type Output = Vector128<u64>;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Vector128<u64> {
        Vector128::from_register(unsafe { _mm_mul_epu32(self.reg, rhs.reg) })
    }
}

impl HorizontalAdd for Vector128<i16> {
    #[inline(always)]
    fn hadd(self, rhs: Self) -> Self {
        unsafe {
            // [a01, a23, a45, a67, b01, b23, b45, b67] -> [a01, b01, a23, b23, ...]
            let sums = _mm_hadd_epi16(self.reg, rhs.reg);
            Self::from_register(_mm_unpacklo_epi16(sums, _mm_unpackhi_epi64(sums, sums)))
        }
    }
}

impl HorizontalAdd for Vector128<i32> {
    #[inline(always)]
    fn hadd(self, rhs: Self) -> Self {
        unsafe {
            // [a01, a23, b01, b23] -> [a01, b01, a23, b23]
            let sums = _mm_hadd_epi32(self.reg, rhs.reg);
            Self::from_register(_mm_unpacklo_epi32(sums, _mm_unpackhi_epi64(sums, sums)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_bits<S: crate::Lane>(v: Vector128<S>) -> Vec<bool> {
        let bytes = v.reinterpret::<u8>().to_array();
        bytes
            .chunks(16 / S::LANES)
            .map(|lane| {
                assert!(lane.iter().all(|b| *b == lane[0]), "not a lane mask: {:?}", bytes);
                lane[0] == 0xFF
            })
            .collect()
    }

    #[test]
    fn add_sub_wrap() {
        let a = Vector128::<u8>::splat(250);
        let b = Vector128::<u8>::splat(10);
        assert_eq!((a + b).to_array(), [4; 16]);
        assert_eq!((b - a).to_array(), [16; 16]);

        let c = Vector128::<i64>::new(i64::MAX, i64::MIN);
        let one = Vector128::<i64>::splat(1);
        assert_eq!((c + one).to_array(), [i64::MIN, i64::MIN + 1]);
        assert_eq!((c - one).to_array(), [i64::MAX - 1, i64::MAX]);

        let d = Vector128::<i16>::splat(i16::MAX) + Vector128::splat(1);
        assert_eq!(d.to_array(), [i16::MIN; 8]);
    }

    #[test]
    fn unsigned_compare_at_sign_bit_boundary() {
        let a = Vector128::<u32>::new(0, 0x8000_0000, 5, 5);
        let b = Vector128::<u32>::new(0xFFFF_FFFF, 0x7FFF_FFFF, 5, 6);
        assert_eq!(mask_bits(a.cmp_lt(b)), [true, false, false, true]);
        assert_eq!(mask_bits(a.cmp_gt(b)), [false, true, false, false]);
        assert_eq!(mask_bits(a.cmp_eq(b)), [false, false, true, false]);
        assert_eq!(mask_bits(a.cmp_ge(b)), [false, true, true, false]);
        assert_eq!(mask_bits(a.cmp_le(b)), [true, false, true, true]);
        assert_eq!(mask_bits(a.cmp_ne(b)), [true, true, false, true]);
    }

    #[test]
    fn unsigned_compare_every_width() {
        let a8 = Vector128::<u8>::splat(0x80);
        let b8 = Vector128::<u8>::splat(0x7F);
        assert!(a8.cmp_gt(b8).is_all_one());
        assert!(b8.cmp_lt(a8).is_all_one());

        let a16 = Vector128::<u16>::splat(0xFFFF);
        let b16 = Vector128::<u16>::splat(1);
        assert!(a16.cmp_gt(b16).is_all_one());

        let a64 = Vector128::<u64>::new(u64::MAX, 0);
        let b64 = Vector128::<u64>::new(1, 1 << 63);
        assert_eq!(mask_bits(a64.cmp_gt(b64)), [true, false]);
        assert_eq!(mask_bits(a64.cmp_lt(b64)), [false, true]);
    }

    #[test]
    fn signed_compare_every_width() {
        let a = Vector128::<i8>::splat(-1);
        let b = Vector128::<i8>::splat(1);
        assert!(a.cmp_lt(b).is_all_one());
        assert!(a.cmp_gt(b).is_all_zero());

        let c = Vector128::<i64>::new(-5, 7);
        let d = Vector128::<i64>::new(3, 7);
        assert_eq!(mask_bits(c.cmp_lt(d)), [true, false]);
        assert_eq!(mask_bits(c.cmp_eq(d)), [false, true]);

        let e = Vector128::<i16>::new(0, 1, -1, i16::MIN, i16::MAX, 3, 3, 3);
        let f = Vector128::<i16>::splat(0);
        assert_eq!(
            mask_bits(e.cmp_gt(f)),
            [false, true, false, false, true, true, true, true]
        );
    }

    #[test]
    fn min_max_every_width() {
        let a = Vector128::<u64>::new(u64::MAX, 3);
        let b = Vector128::<u64>::new(1, 1 << 63);
        assert_eq!(a.min(b).to_array(), [1, 3]);
        assert_eq!(a.max(b).to_array(), [u64::MAX, 1 << 63]);

        let c = Vector128::<i64>::new(i64::MIN, 10);
        let d = Vector128::<i64>::new(-1, -10);
        assert_eq!(c.min(d).to_array(), [i64::MIN, -10]);
        assert_eq!(c.max(d).to_array(), [-1, 10]);

        let e = Vector128::<u32>::new(0x8000_0000, 1, 2, 3);
        let f = Vector128::<u32>::new(1, 0x8000_0000, 2, 0);
        assert_eq!(e.min(f).to_array(), [1, 1, 2, 0]);
        assert_eq!(e.max(f).to_array(), [0x8000_0000, 0x8000_0000, 2, 3]);

        let g = Vector128::<i8>::splat(-100);
        let h = Vector128::<i8>::splat(100);
        assert_eq!(g.min(h).to_array(), [-100; 16]);
        let u = Vector128::<u16>::splat(40000);
        let w = Vector128::<u16>::splat(2);
        assert_eq!(u.max(w).to_array(), [40000; 8]);
    }

    #[test]
    fn abs_signed_lanes() {
        assert_eq!(Vector128::<i8>::splat(-7).abs().to_array(), [7; 16]);
        assert_eq!(Vector128::<i16>::splat(i16::MIN).abs().to_array(), [i16::MIN; 8]);
        assert_eq!(Vector128::<i32>::new(-1, 2, -3, 0).abs().to_array(), [1, 2, 3, 0]);
        let v = Vector128::<i64>::new(-9_000_000_000, 42);
        assert_eq!(v.abs().to_array(), [9_000_000_000, 42]);
        assert_eq!(Vector128::<i64>::splat(i64::MIN).abs().to_array(), [i64::MIN; 2]);
    }

    #[test]
    fn scalar_shifts_are_logical() {
        let v = Vector128::<i16>::splat(-2);
        assert_eq!((v >> 1).to_array(), [0x7FFF; 8]);
        assert_eq!((v << 1).to_array(), [-4; 8]);
        assert_eq!((v >> 16).to_array(), [0; 8]);

        let w = Vector128::<u32>::new(1, 2, 0x8000_0000, 0xFFFF_FFFF);
        assert_eq!((w << 4).to_array(), [16, 32, 0, 0xFFFF_FFF0]);
        assert_eq!((w >> 31).to_array(), [0, 0, 1, 1]);

        let x = Vector128::<i64>::new(-1, 1);
        assert_eq!((x >> 60).to_array(), [15, 0]);
        assert_eq!((x << 64).to_array(), [0, 0]);
    }

    #[test]
    fn per_lane_shifts() {
        if !is_x86_feature_detected!("avx2") {
            return;
        }
        let v = Vector128::<u32>::splat(0x100);
        let counts = Vector128::<u32>::new(0, 4, 8, 40);
        assert_eq!((v << counts).to_array(), [0x100, 0x1000, 0x10000, 0]);
        assert_eq!((v >> counts).to_array(), [0x100, 0x10, 0x1, 0]);

        let s = Vector128::<i64>::splat(-1);
        let c = Vector128::<i64>::new(63, 1);
        assert_eq!((s >> c).to_array(), [1, i64::MAX]);
    }

    #[test]
    fn widening_multiply_uses_even_lanes() {
        let a = Vector128::<i32>::new(-3, 99, 7, 99);
        let b = Vector128::<i32>::new(5, 99, -2, 99);
        let p: Vector128<i64> = a * b;
        assert_eq!(p.to_array(), [-15, -14]);

        let c = Vector128::<u32>::new(u32::MAX, 0, 2, 0);
        let d = Vector128::<u32>::new(2, 0, 3, 0);
        let q: Vector128<u64> = c * d;
        assert_eq!(q.to_array(), [0x1_FFFF_FFFE, 6]);
    }

    #[test]
    fn hadd_interleaves_pair_sums() {
        let a = Vector128::<i32>::new(1, 2, 3, 4);
        let b = Vector128::<i32>::new(5, 6, 7, 8);
        assert_eq!(a.hadd(b).to_array(), [3, 11, 7, 15]);

        let c = Vector128::<i16>::new(1, 2, 3, 4, 5, 6, 7, 8);
        let d = Vector128::<i16>::new(10, 20, 30, 40, 50, 60, 70, 80);
        assert_eq!(c.hadd(d).to_array(), [3, 30, 7, 70, 11, 110, 15, 150]);

        let e = Vector128::<i16>::splat(i16::MAX);
        assert_eq!(e.hadd(e).to_array(), [-2; 8]);
    }
}
