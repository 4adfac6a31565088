//! # simd128
//!
//! Typed 128-bit SIMD vectors for x86.
//!
//! **The lane type picks the instructions.**
//!
//! - `Vector128<f32>`: 4 lanes, `__m128`
//! - `Vector128<f64>`: 2 lanes, `__m128d`
//! - `Vector128<i8 | u8 | i16 | u16 | i32 | u32 | i64 | u64>`: 16 to 2 lanes,
//!   `__m128i`
//!
//! Operations a lane type has no hardware mapping for (integer division,
//! 8-bit shifts, `sqrt` on integers, ...) are missing trait impls, so they
//! fail at build time instead of at run time.
//!
//! ```
//! use simd128::prelude::*;
//!
//! let a = Vector128::<u32>::new(1, 2, 3, 0x8000_0000);
//! let b = Vector128::splat(2);
//! let mask = a.cmp_gt(b);
//! assert_eq!(a.cmp_blend(b, mask).to_array(), [2, 2, 3, 0x8000_0000]);
//! ```
//!
//! Instructions from SSE4.1 and SSE4.2 are used unconditionally; per-lane
//! shifts need AVX2. The [`probe`] module reports what the running
//! processor supports but does not gate anything.

#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
compile_error!("simd128 only supports x86 and x86_64 targets");

mod bias;
pub mod error;
pub mod format;
pub mod functions;
pub mod iter;
pub mod lane;
pub mod ops;
pub mod probe;
pub mod types;
pub mod vector;

pub use error::ProbeError;
pub use format::{Brackets, Delimiter, FormatStyle};
pub use iter::Lanes;
pub use lane::{Aligned, Lane, Register, RegisterKind};
pub use ops::{Abs, Compare, HorizontalAdd, MinMax, Rounding};
pub use probe::{Feature, Features};
pub use types::*;
pub use vector::Vector128;

/// Glob-import this to get the vector type and every operation trait.
pub mod prelude {
    pub use crate::functions::{cmp_blend, hadd, max, min, reinterpret};
    pub use crate::lane::{Aligned, Lane};
    pub use crate::ops::{Abs, Compare, HorizontalAdd, MinMax, Rounding};
    pub use crate::types::*;
    pub use crate::vector::Vector128;
}
