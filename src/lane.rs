//! Lane types and the registers that carry them.
//!
//! Every supported scalar is mapped at compile time to one of the three SSE
//! register interpretations (packed double, packed single, packed integer)
//! and to a lane count of `16 / size_of::<S>()`. Scalars outside the
//! supported set have no [`Lane`] impl, so naming them is a build error.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;
use core::fmt::{Debug, Display};
use core::ops::{Deref, DerefMut};

mod sealed {
    pub trait Sealed {}
}

/// How the 128 register bits are interpreted by the hardware.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RegisterKind {
    /// `__m128d`, two `f64` lanes.
    PackedDouble,
    /// `__m128`, four `f32` lanes.
    PackedSingle,
    /// `__m128i`, any integer lane width.
    PackedInteger,
}

/// One of the three raw SSE register types.
///
/// Bitwise operations and memory access live here so that float lanes go
/// through the float-domain instructions while sharing integer semantics.
pub trait Register: sealed::Sealed + Copy + Send + Sync + 'static {
    const KIND: RegisterKind;

    fn zero() -> Self;

    /// Reinterprets the register as integer bits. Never changes the bits.
    fn to_bits(self) -> __m128i;

    /// Reinterprets integer bits as this register type.
    fn from_bits(bits: __m128i) -> Self;

    /// # Safety
    /// `ptr` must be valid for a 16-byte read.
    unsafe fn load_unaligned(ptr: *const u8) -> Self;

    /// # Safety
    /// `ptr` must be valid for a 16-byte read and 16-byte aligned.
    unsafe fn load_aligned(ptr: *const u8) -> Self;

    /// # Safety
    /// `ptr` must be valid for a 16-byte write.
    unsafe fn store_unaligned(self, ptr: *mut u8);

    /// # Safety
    /// `ptr` must be valid for a 16-byte write and 16-byte aligned.
    unsafe fn store_aligned(self, ptr: *mut u8);

    fn and(self, rhs: Self) -> Self;

    /// `(!self) & rhs`
    fn andnot(self, rhs: Self) -> Self;

    fn or(self, rhs: Self) -> Self;

    fn xor(self, rhs: Self) -> Self;

    /// Picks `if_true` where the decision bit of `mask` is set, `if_false`
    /// elsewhere. The decision bit is the top bit of each 32-bit lane for
    /// `__m128`, of each 64-bit lane for `__m128d`, and of each byte for
    /// `__m128i`.
    fn blendv(if_false: Self, if_true: Self, mask: __m128i) -> Self;
}

impl sealed::Sealed for __m128 {}
impl sealed::Sealed for __m128d {}
impl sealed::Sealed for __m128i {}

impl Register for __m128 {
    const KIND: RegisterKind = RegisterKind::PackedSingle;

    #[inline(always)]
    fn zero() -> Self {
        unsafe { _mm_setzero_ps() }
    }

    #[inline(always)]
    fn to_bits(self) -> __m128i {
        unsafe { _mm_castps_si128(self) }
    }

    #[inline(always)]
    fn from_bits(bits: __m128i) -> Self {
        unsafe { _mm_castsi128_ps(bits) }
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const u8) -> Self {
        unsafe { _mm_loadu_ps(ptr as *const f32) }
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const u8) -> Self {
        unsafe { _mm_load_ps(ptr as *const f32) }
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut u8) {
        unsafe { _mm_storeu_ps(ptr as *mut f32, self) }
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut u8) {
        unsafe { _mm_store_ps(ptr as *mut f32, self) }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { _mm_and_ps(self, rhs) }
    }

    #[inline(always)]
    fn andnot(self, rhs: Self) -> Self {
        unsafe { _mm_andnot_ps(self, rhs) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { _mm_or_ps(self, rhs) }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        unsafe { _mm_xor_ps(self, rhs) }
    }

    #[inline(always)]
    fn blendv(if_false: Self, if_true: Self, mask: __m128i) -> Self {
        unsafe { _mm_blendv_ps(if_false, if_true, _mm_castsi128_ps(mask)) }
    }
}

impl Register for __m128d {
    const KIND: RegisterKind = RegisterKind::PackedDouble;

    #[inline(always)]
    fn zero() -> Self {
        unsafe { _mm_setzero_pd() }
    }

    #[inline(always)]
    fn to_bits(self) -> __m128i {
        unsafe { _mm_castpd_si128(self) }
    }

    #[inline(always)]
    fn from_bits(bits: __m128i) -> Self {
        unsafe { _mm_castsi128_pd(bits) }
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const u8) -> Self {
        unsafe { _mm_loadu_pd(ptr as *const f64) }
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const u8) -> Self {
        unsafe { _mm_load_pd(ptr as *const f64) }
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut u8) {
        unsafe { _mm_storeu_pd(ptr as *mut f64, self) }
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut u8) {
        unsafe { _mm_store_pd(ptr as *mut f64, self) }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { _mm_and_pd(self, rhs) }
    }

    #[inline(always)]
    fn andnot(self, rhs: Self) -> Self {
        unsafe { _mm_andnot_pd(self, rhs) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { _mm_or_pd(self, rhs) }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        unsafe { _mm_xor_pd(self, rhs) }
    }

    #[inline(always)]
    fn blendv(if_false: Self, if_true: Self, mask: __m128i) -> Self {
        unsafe { _mm_blendv_pd(if_false, if_true, _mm_castsi128_pd(mask)) }
    }
}

impl Register for __m128i {
    const KIND: RegisterKind = RegisterKind::PackedInteger;

    #[inline(always)]
    fn zero() -> Self {
        unsafe { _mm_setzero_si128() }
    }

    #[inline(always)]
    fn to_bits(self) -> __m128i {
        self
    }

    #[inline(always)]
    fn from_bits(bits: __m128i) -> Self {
        bits
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const u8) -> Self {
        unsafe { _mm_loadu_si128(ptr as *const __m128i) }
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const u8) -> Self {
        unsafe { _mm_load_si128(ptr as *const __m128i) }
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut u8) {
        unsafe { _mm_storeu_si128(ptr as *mut __m128i, self) }
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut u8) {
        unsafe { _mm_store_si128(ptr as *mut __m128i, self) }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { _mm_and_si128(self, rhs) }
    }

    #[inline(always)]
    fn andnot(self, rhs: Self) -> Self {
        unsafe { _mm_andnot_si128(self, rhs) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { _mm_or_si128(self, rhs) }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        unsafe { _mm_xor_si128(self, rhs) }
    }

    #[inline(always)]
    fn blendv(if_false: Self, if_true: Self, mask: __m128i) -> Self {
        unsafe { _mm_blendv_epi8(if_false, if_true, mask) }
    }
}

/// A scalar type that can fill the lanes of a 128-bit vector.
///
/// Implemented for the ten primitive numeric types of width 8 to 64 bits.
/// The trait is sealed. Any other scalar type is a build error:
///
/// ```compile_fail
/// let _ = simd128::Vector128::<u128>::zero();
/// ```
///
/// ```compile_fail
/// let _ = simd128::Vector128::<bool>::splat(true);
/// ```
///
/// ```compile_fail
/// let _ = simd128::Vector128::<usize>::default();
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a supported 128-bit vector lane type",
    label = "no 128-bit register mapping for `{Self}`",
    note = "supported lane types are i8, i16, i32, i64, u8, u16, u32, u64, f32 and f64"
)]
pub trait Lane:
    sealed::Sealed + Copy + Default + PartialEq + Debug + Display + Send + Sync + 'static
{
    /// The register interpretation used for this lane type.
    type Register: Register;

    /// `[Self; LANES]`
    type Array: Copy + Default + Debug + PartialEq + AsRef<[Self]> + AsMut<[Self]> + Send + Sync;

    /// Number of lanes in one register, `16 / size_of::<Self>()`.
    const LANES: usize;

    /// Lane width in bits.
    const BITS: u32;

    const SIGNED: bool;

    const FLOAT: bool;

    /// Broadcasts `value` to every lane.
    fn splat(value: Self) -> Self::Register;

    /// Spreads the top bit of every lane across the whole lane, so that the
    /// register's `blendv` decides once per lane of this width.
    fn select_mask(bits: __m128i) -> __m128i;
}

macro_rules! impl_lane {
    (
        $t:ty, $reg:ty, $lanes:expr, signed: $signed:expr, float: $float:expr,
        splat: |$v:ident| $splat:expr,
        select: |$m:ident| $select:expr
    ) => {
        impl sealed::Sealed for $t {}

        impl Lane for $t {
            type Register = $reg;
            type Array = [$t; $lanes];
            const LANES: usize = $lanes;
            const BITS: u32 = (core::mem::size_of::<$t>() * 8) as u32;
            const SIGNED: bool = $signed;
            const FLOAT: bool = $float;

            #[inline(always)]
            #[allow(unused_unsafe)]
            fn splat($v: $t) -> $reg {
                unsafe { $splat }
            }

            #[inline(always)]
            #[allow(unused_unsafe)]
            fn select_mask($m: __m128i) -> __m128i {
                unsafe { $select }
            }
        }

        const _: () = assert!(core::mem::size_of::<[$t; $lanes]>() == 16);
    };
}

impl_lane!(f64, __m128d, 2, signed: true, float: true,
    splat: |v| _mm_set1_pd(v),
    select: |m| m);
impl_lane!(f32, __m128, 4, signed: true, float: true,
    splat: |v| _mm_set1_ps(v),
    select: |m| m);

impl_lane!(i8, __m128i, 16, signed: true, float: false,
    splat: |v| _mm_set1_epi8(v),
    select: |m| m);
impl_lane!(i16, __m128i, 8, signed: true, float: false,
    splat: |v| _mm_set1_epi16(v),
    select: |m| _mm_srai_epi16(m, 15));
impl_lane!(i32, __m128i, 4, signed: true, float: false,
    splat: |v| _mm_set1_epi32(v),
    select: |m| _mm_srai_epi32(m, 31));
impl_lane!(i64, __m128i, 2, signed: true, float: false,
    splat: |v| _mm_set1_epi64x(v),
    select: |m| _mm_cmpgt_epi64(_mm_setzero_si128(), m));

impl_lane!(u8, __m128i, 16, signed: false, float: false,
    splat: |v| _mm_set1_epi8(v as i8),
    select: |m| m);
impl_lane!(u16, __m128i, 8, signed: false, float: false,
    splat: |v| _mm_set1_epi16(v as i16),
    select: |m| _mm_srai_epi16(m, 15));
impl_lane!(u32, __m128i, 4, signed: false, float: false,
    splat: |v| _mm_set1_epi32(v as i32),
    select: |m| _mm_srai_epi32(m, 31));
impl_lane!(u64, __m128i, 2, signed: false, float: false,
    splat: |v| _mm_set1_epi64x(v as i64),
    select: |m| _mm_cmpgt_epi64(_mm_setzero_si128(), m));

/// A value forced onto a 16-byte boundary, suitable for the aligned
/// load/store paths.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C, align(16))]
pub struct Aligned<T>(pub T);

impl<T> Deref for Aligned<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Aligned<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}
