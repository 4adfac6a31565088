//! The 128-bit vector value type.
//!
//! `Vector128<S>` wraps exactly one SSE register. Everything here is generic
//! over the lane type; the per-type operation matrix lives in [`crate::ops`].

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;
use core::marker::PhantomData;
use core::ops::{BitAnd, BitOr, BitXor, Index, Not};

use crate::iter::Lanes;
use crate::lane::{Aligned, Lane, Register};

/// A 128-bit SIMD vector of `16 / size_of::<S>()` lanes of type `S`.
///
/// Plain value semantics: copying a vector copies the register, nothing is
/// ever aliased.
///
/// The lane-list constructor takes exactly one argument per lane:
///
/// ```
/// let v = simd128::Vector128::<i32>::new(1, 2, 3, 4);
/// assert_eq!(v[3], 4);
/// ```
///
/// ```compile_fail
/// let _ = simd128::Vector128::<i32>::new(1, 2, 3);
/// ```
///
/// ```compile_fail
/// let _ = simd128::Vector128::<f64>::new(1.0, 2.0, 3.0);
/// ```
///
/// ```compile_fail
/// let _ = simd128::Vector128::<u8>::from_array([0u8; 8]);
/// ```
#[repr(transparent)]
pub struct Vector128<S: Lane> {
    pub(crate) reg: S::Register,
    _lane: PhantomData<S>,
}

const _: () = assert!(core::mem::size_of::<Vector128<u8>>() == 16);
const _: () = assert!(core::mem::size_of::<Vector128<f64>>() == 16);

impl<S: Lane> Clone for Vector128<S> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Lane> Copy for Vector128<S> {}

impl<S: Lane> Default for Vector128<S> {
    #[inline(always)]
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: Lane> Vector128<S> {
    /// Number of lanes.
    pub const LANES: usize = S::LANES;

    /// All bits zero.
    #[inline(always)]
    pub fn zero() -> Self {
        Self::from_register(S::Register::zero())
    }

    /// Every lane set to `value`.
    #[inline(always)]
    pub fn splat(value: S) -> Self {
        Self::from_register(S::splat(value))
    }

    /// Wraps a raw register value.
    #[inline(always)]
    pub const fn from_register(reg: S::Register) -> Self {
        Self {
            reg,
            _lane: PhantomData,
        }
    }

    /// The raw register value.
    #[inline(always)]
    pub fn into_register(self) -> S::Register {
        self.reg
    }

    /// Lane `i` of the result is `lanes[i]`.
    #[inline(always)]
    pub fn from_array(lanes: S::Array) -> Self {
        unsafe { Self::load_unaligned(lanes.as_ref().as_ptr()) }
    }

    /// Copies the lanes out into an array.
    #[inline(always)]
    pub fn to_array(self) -> S::Array {
        let mut out = Aligned(S::Array::default());
        self.write_aligned(&mut out);
        out.0
    }

    /// Views the lanes in place.
    #[inline(always)]
    pub fn as_array(&self) -> &S::Array {
        // `S::Array` is 16 bytes with alignment <= 16, same as the register.
        unsafe { &*(self as *const Self as *const S::Array) }
    }

    /// Reads lane `index`.
    ///
    /// # Panics
    /// If `index >= LANES`.
    #[inline(always)]
    pub fn lane(&self, index: usize) -> S {
        self.as_array().as_ref()[index]
    }

    /// Reads lane `index` without a bounds check.
    ///
    /// # Safety
    /// `index` must be less than `LANES`.
    #[inline(always)]
    pub unsafe fn lane_unchecked(&self, index: usize) -> S {
        debug_assert!(index < S::LANES);
        unsafe { *self.as_array().as_ref().get_unchecked(index) }
    }

    /// Loads 16 bytes from any address.
    ///
    /// # Safety
    /// `ptr` must be valid for reading `LANES` values of `S`.
    #[inline(always)]
    pub unsafe fn load_unaligned(ptr: *const S) -> Self {
        unsafe { Self::from_register(S::Register::load_unaligned(ptr as *const u8)) }
    }

    /// Loads 16 bytes from a 16-byte aligned address.
    ///
    /// # Safety
    /// `ptr` must be valid for reading `LANES` values of `S` and aligned to
    /// 16 bytes. A misaligned address faults.
    #[inline(always)]
    pub unsafe fn load_aligned(ptr: *const S) -> Self {
        debug_assert_eq!(ptr as usize % 16, 0, "misaligned aligned load");
        unsafe { Self::from_register(S::Register::load_aligned(ptr as *const u8)) }
    }

    /// Stores 16 bytes to any address.
    ///
    /// # Safety
    /// `ptr` must be valid for writing `LANES` values of `S`.
    #[inline(always)]
    pub unsafe fn store_unaligned(self, ptr: *mut S) {
        unsafe { self.reg.store_unaligned(ptr as *mut u8) }
    }

    /// Stores 16 bytes to a 16-byte aligned address.
    ///
    /// # Safety
    /// `ptr` must be valid for writing `LANES` values of `S` and aligned to
    /// 16 bytes. A misaligned address faults.
    #[inline(always)]
    pub unsafe fn store_aligned(self, ptr: *mut S) {
        debug_assert_eq!(ptr as usize % 16, 0, "misaligned aligned store");
        unsafe { self.reg.store_aligned(ptr as *mut u8) }
    }

    /// Loads the first `LANES` values of `slice`.
    ///
    /// # Panics
    /// If `slice` is shorter than `LANES`.
    #[inline(always)]
    pub fn from_slice(slice: &[S]) -> Self {
        assert!(slice.len() >= S::LANES);
        unsafe { Self::load_unaligned(slice.as_ptr()) }
    }

    /// Writes the lanes to the first `LANES` slots of `out`.
    ///
    /// # Panics
    /// If `out` is shorter than `LANES`.
    #[inline(always)]
    pub fn store(&self, out: &mut [S]) {
        assert!(out.len() >= S::LANES);
        unsafe { self.store_unaligned(out.as_mut_ptr()) }
    }

    /// Aligned load from a buffer whose alignment is guaranteed by its type.
    #[inline(always)]
    pub fn from_aligned(lanes: &Aligned<S::Array>) -> Self {
        unsafe { Self::load_aligned(lanes.0.as_ref().as_ptr()) }
    }

    /// Aligned store into a buffer whose alignment is guaranteed by its type.
    #[inline(always)]
    pub fn write_aligned(&self, out: &mut Aligned<S::Array>) {
        unsafe { self.store_aligned(out.0.as_mut().as_mut_ptr()) }
    }

    /// True iff all 128 bits are 0.
    #[inline(always)]
    pub fn is_all_zero(&self) -> bool {
        let bits = self.reg.to_bits();
        unsafe { _mm_testz_si128(bits, bits) == 1 }
    }

    /// True iff all 128 bits are 1.
    #[inline(always)]
    pub fn is_all_one(&self) -> bool {
        let bits = self.reg.to_bits();
        unsafe { _mm_testc_si128(bits, _mm_cmpeq_epi32(bits, bits)) == 1 }
    }

    /// `(!self) & rhs`
    #[inline(always)]
    pub fn nand(self, rhs: Self) -> Self {
        Self::from_register(self.reg.andnot(rhs.reg))
    }

    /// Per-lane select: lane `i` is `self[i]` where the top bit of mask lane
    /// `i` is set, `other[i]` elsewhere.
    ///
    /// The mask may have any lane type; its bits are reinterpreted at the
    /// width of `S` first.
    #[inline(always)]
    pub fn cmp_blend<M: Lane>(self, other: Self, mask: Vector128<M>) -> Self {
        let decision = S::select_mask(mask.reg.to_bits());
        Self::from_register(S::Register::blendv(other.reg, self.reg, decision))
    }

    /// Same bits, viewed as lanes of `T`.
    #[inline(always)]
    pub fn reinterpret<T: Lane>(self) -> Vector128<T> {
        Vector128::from_register(T::Register::from_bits(self.reg.to_bits()))
    }

    /// A snapshot iterator over the lanes.
    #[inline]
    pub fn iter(&self) -> Lanes<S> {
        Lanes::new(self)
    }
}

macro_rules! lane_list_constructor {
    ($t:ty; $($v:ident),+) => {
        impl Vector128<$t> {
            /// Lane `i` of the result is the `i`-th argument. Exactly
            /// `LANES` arguments are accepted.
            #[inline(always)]
            #[allow(clippy::too_many_arguments)]
            pub fn new($($v: $t),+) -> Self {
                Self::from_array([$($v),+])
            }
        }
    };
}

lane_list_constructor!(f64; v0, v1);
lane_list_constructor!(f32; v0, v1, v2, v3);
lane_list_constructor!(i64; v0, v1);
lane_list_constructor!(u64; v0, v1);
lane_list_constructor!(i32; v0, v1, v2, v3);
lane_list_constructor!(u32; v0, v1, v2, v3);
lane_list_constructor!(i16; v0, v1, v2, v3, v4, v5, v6, v7);
lane_list_constructor!(u16; v0, v1, v2, v3, v4, v5, v6, v7);
lane_list_constructor!(i8; v0, v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15);
lane_list_constructor!(u8; v0, v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15);

impl<S: Lane> From<S> for Vector128<S> {
    #[inline(always)]
    fn from(value: S) -> Self {
        Self::splat(value)
    }
}

impl<S: Lane> Index<usize> for Vector128<S> {
    type Output = S;

    #[inline(always)]
    fn index(&self, index: usize) -> &S {
        &self.as_array().as_ref()[index]
    }
}

/// Bit-exact equality of the whole register. Use `cmp_eq` for a lane mask.
impl<S: Lane> PartialEq for Vector128<S> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (self.reg.to_bits(), other.reg.to_bits());
        unsafe { _mm_movemask_epi8(_mm_cmpeq_epi8(a, b)) == 0xFFFF }
    }
}

impl<S: Lane> Eq for Vector128<S> {}

impl<S: Lane> BitAnd for Vector128<S> {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_register(self.reg.and(rhs.reg))
    }
}

impl<S: Lane> BitOr for Vector128<S> {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_register(self.reg.or(rhs.reg))
    }
}

impl<S: Lane> BitXor for Vector128<S> {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self::from_register(self.reg.xor(rhs.reg))
    }
}

impl<S: Lane> Not for Vector128<S> {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        let ones = unsafe {
            let z = _mm_setzero_si128();
            _mm_cmpeq_epi32(z, z)
        };
        Self::from_register(self.reg.xor(S::Register::from_bits(ones)))
    }
}
