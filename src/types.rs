//! Named aliases, `<lane><bits>x<lanes>`.

use crate::vector::Vector128;

pub type I8x16 = Vector128<i8>;
pub type I16x8 = Vector128<i16>;
pub type I32x4 = Vector128<i32>;
pub type I64x2 = Vector128<i64>;
pub type U8x16 = Vector128<u8>;
pub type U16x8 = Vector128<u16>;
pub type U32x4 = Vector128<u32>;
pub type U64x2 = Vector128<u64>;
pub type F32x4 = Vector128<f32>;
pub type F64x2 = Vector128<f64>;
