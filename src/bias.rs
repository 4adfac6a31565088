//! Sign-bit bias.
//!
//! SSE only has signed ordering predicates. XOR-ing the most significant bit
//! of every lane maps unsigned order onto signed order:
//! `a <u b  <=>  (a ^ MSB) <s (b ^ MSB)`.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use crate::lane::Lane;

/// Unsigned integer lanes that need the bias before a signed compare.
pub(crate) trait SignBias: Lane<Register = __m128i> {
    /// A register with only the top bit of every lane set.
    fn sign_bits() -> __m128i;
}

impl SignBias for u8 {
    #[inline(always)]
    fn sign_bits() -> __m128i {
        unsafe { _mm_set1_epi8(i8::MIN) }
    }
}

impl SignBias for u16 {
    #[inline(always)]
    fn sign_bits() -> __m128i {
        unsafe { _mm_set1_epi16(i16::MIN) }
    }
}

impl SignBias for u32 {
    #[inline(always)]
    fn sign_bits() -> __m128i {
        unsafe { _mm_set1_epi32(i32::MIN) }
    }
}

impl SignBias for u64 {
    #[inline(always)]
    fn sign_bits() -> __m128i {
        unsafe { _mm_set1_epi64x(i64::MIN) }
    }
}

/// `v ^ (1 << (BITS - 1))` in every lane.
#[inline(always)]
pub(crate) fn biased<S: SignBias>(v: __m128i) -> __m128i {
    unsafe { _mm_xor_si128(v, S::sign_bits()) }
}
