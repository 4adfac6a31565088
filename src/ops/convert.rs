//! Value conversions between `f32` and `i32` lanes, the only pair with a
//! hardware mapping. Everything else goes through `reinterpret`.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use crate::vector::Vector128;

/// Rounds with the current MXCSR mode (nearest-even unless changed).
/// Out-of-range lanes and NaN become `i32::MIN`.
impl From<Vector128<f32>> for Vector128<i32> {
    #[inline(always)]
    fn from(v: Vector128<f32>) -> Self {
        Self::from_register(unsafe { _mm_cvtps_epi32(v.reg) })
    }
}

/// Rounds with the current MXCSR mode for magnitudes above 2^24.
impl From<Vector128<i32>> for Vector128<f32> {
    #[inline(always)]
    fn from(v: Vector128<i32>) -> Self {
        Self::from_register(unsafe { _mm_cvtepi32_ps(v.reg) })
    }
}

impl Vector128<f32> {
    /// Converts to `i32` lanes, rounding toward zero.
    #[inline(always)]
    pub fn to_i32_truncated(self) -> Vector128<i32> {
        Vector128::from_register(unsafe { _mm_cvttps_epi32(self.reg) })
    }
}
