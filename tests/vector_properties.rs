#![cfg(any(target_arch = "x86", target_arch = "x86_64"))]

use simd128::prelude::*;

macro_rules! for_every_lane_type {
    ($body:ident) => {
        $body!(i8, [1, -2, 3, -4, 5, -6, 7, -8, 9, -10, 11, -12, 13, -14, 127, -128]);
        $body!(u8, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 254, 255]);
        $body!(i16, [1, -2, 300, -400, 5000, -6000, i16::MAX, i16::MIN]);
        $body!(u16, [0, 1, 300, 400, 5000, 60000, u16::MAX, 7]);
        $body!(i32, [1, -70_000, i32::MAX, i32::MIN]);
        $body!(u32, [0, 70_000, u32::MAX, 0x8000_0000]);
        $body!(i64, [i64::MIN, 5_000_000_000]);
        $body!(u64, [u64::MAX, 0x8000_0000_0000_0000]);
        $body!(f32, [1.5, -2.25, 1.0e30, 0.0]);
        $body!(f64, [-1.0e300, 0.125]);
    };
}

#[test]
fn from_array_and_index_agree() {
    macro_rules! check {
        ($t:ty, $lanes:expr) => {{
            let lanes: <$t as Lane>::Array = $lanes;
            let v = Vector128::<$t>::from_array(lanes);
            for (i, expected) in lanes.iter().enumerate() {
                assert_eq!(v[i], *expected, "{} lane {}", stringify!($t), i);
                assert_eq!(v.lane(i), *expected);
            }
            assert_eq!(v.to_array(), lanes);
            assert_eq!(v.iter().collect::<Vec<_>>(), lanes.to_vec());
        }};
    }
    for_every_lane_type!(check);
}

#[test]
fn add_then_sub_restores_value() {
    macro_rules! check {
        ($t:ty, $lanes:expr) => {{
            let lanes: <$t as Lane>::Array = $lanes;
            let a = Vector128::<$t>::from_array(lanes);
            let one = Vector128::<$t>::splat(1 as $t);
            assert_eq!((a + one) - one, a, "{} + 1", stringify!($t));

            // Doubling is exact for floats and wraps both ways for integers.
            assert_eq!((a + a) - a, a, "{} + self", stringify!($t));

            // Mixed-magnitude float sums round, so only integers take this one.
            if !<$t as Lane>::FLOAT {
                let mut rev = lanes;
                rev.reverse();
                let b = Vector128::<$t>::from_array(rev);
                assert_eq!((a + b) - b, a, "{} + reversed", stringify!($t));
                assert_eq!((a - b) + b, a, "{} - reversed", stringify!($t));
            }
        }};
    }
    for_every_lane_type!(check);
}

#[test]
fn reinterpret_round_trip_preserves_bits() {
    macro_rules! check {
        ($t:ty, $lanes:expr) => {{
            let v = Vector128::<$t>::from_array($lanes);
            assert_eq!(v.reinterpret::<u8>().reinterpret::<$t>(), v);
            assert_eq!(v.reinterpret::<f64>().reinterpret::<$t>(), v);
            assert_eq!(reinterpret::<i32, _>(v).reinterpret::<$t>(), v);
        }};
    }
    for_every_lane_type!(check);
}

#[test]
fn unaligned_and_aligned_memory_round_trip() {
    macro_rules! check {
        ($t:ty, $lanes:expr) => {{
            let lanes: <$t as Lane>::Array = $lanes;

            // One extra lane so the load can start at an odd offset.
            let mut buf = vec![<$t>::default(); lanes.len() + 1];
            buf[1..].copy_from_slice(&lanes);
            let v = unsafe { Vector128::<$t>::load_unaligned(buf.as_ptr().add(1)) };
            assert_eq!(v.to_array(), lanes);

            let mut out = vec![<$t>::default(); lanes.len() + 1];
            unsafe { v.store_unaligned(out.as_mut_ptr().add(1)) };
            assert_eq!(&out[1..], &lanes[..]);

            let src = Aligned(lanes);
            let w = unsafe { Vector128::<$t>::load_aligned(src.as_ptr()) };
            let mut dst = Aligned(<<$t as Lane>::Array as Default>::default());
            unsafe { w.store_aligned(dst.as_mut_ptr()) };
            assert_eq!(dst.0, lanes);
            assert_eq!(Vector128::<$t>::from_aligned(&dst), v);
        }};
    }
    for_every_lane_type!(check);
}

#[test]
fn min_max_are_ordered() {
    macro_rules! check {
        ($t:ty, $lanes:expr) => {{
            let lanes: <$t as Lane>::Array = $lanes;
            let a = Vector128::<$t>::from_array(lanes);
            let mut rev = lanes;
            rev.reverse();
            let b = Vector128::<$t>::from_array(rev);
            let lo = min(a, b).to_array();
            let hi = max(a, b).to_array();
            for i in 0..Vector128::<$t>::LANES {
                assert!(lo[i] <= hi[i], "{} lane {}", stringify!($t), i);
                assert!(lo[i] == a[i] || lo[i] == b[i]);
                assert!(hi[i] == a[i] || hi[i] == b[i]);
            }
        }};
    }
    for_every_lane_type!(check);
}

#[test]
fn whole_register_tests() {
    macro_rules! check {
        ($t:ty, $lanes:expr) => {{
            assert!(Vector128::<$t>::zero().is_all_zero());
            assert!(!Vector128::<$t>::zero().is_all_one());
            let ones = !Vector128::<$t>::zero();
            assert!(ones.is_all_one(), "{}", stringify!($t));
            assert!(!ones.is_all_zero());
            let v = Vector128::<$t>::from_array($lanes);
            assert!((v ^ v).is_all_zero());
            assert!((v | !v).is_all_one());
        }};
    }
    for_every_lane_type!(check);
}

#[test]
fn compare_masks_are_complete_lanes() {
    macro_rules! check {
        ($t:ty, $lanes:expr) => {{
            let a = Vector128::<$t>::from_array($lanes);
            let b = Vector128::<$t>::splat(3 as $t);
            let gt = a.cmp_gt(b);
            for (i, bits) in gt.iter().enumerate() {
                let mask_lane = Vector128::<$t>::splat(bits).reinterpret::<u8>();
                assert!(
                    mask_lane.is_all_zero() || mask_lane.is_all_one(),
                    "{} lane {}",
                    stringify!($t),
                    i
                );
                assert_eq!(!mask_lane.is_all_zero(), a[i] > b[i]);
            }
            assert!(a.cmp_eq(a).is_all_one());
            assert!(a.cmp_lt(a).is_all_zero());
        }};
    }
    for_every_lane_type!(check);
}

#[test]
fn unsigned_compare_respects_unsigned_order() {
    let a = U32x4::new(0, 0x8000_0000, 1, u32::MAX);
    let b = U32x4::new(0xFFFF_FFFF, 0x7FFF_FFFF, 1, 0);
    assert_eq!(a.cmp_lt(b).to_array(), [u32::MAX, 0, 0, 0]);
    assert_eq!(a.cmp_gt(b).to_array(), [0, u32::MAX, 0, u32::MAX]);

    let c = U8x16::splat(0x80);
    let d = U8x16::splat(0x7F);
    assert!(c.cmp_gt(d).is_all_one());

    let e = U64x2::new(u64::MAX, 1);
    let f = U64x2::new(0, 2);
    assert_eq!(e.cmp_gt(f).to_array(), [u64::MAX, 0]);
    assert_eq!(max(e, f).to_array(), [u64::MAX, 2]);
}

#[test]
fn hadd_layout() {
    let a = I32x4::new(1, 2, 3, 4);
    let b = I32x4::new(10, 20, 30, 40);
    assert_eq!(hadd(a, b).to_array(), [3, 30, 7, 70]);

    let c = I16x8::new(1, 1, 2, 2, 3, 3, 4, 4);
    let d = I16x8::new(10, 10, 20, 20, 30, 30, i16::MAX, 1);
    assert_eq!(hadd(c, d).to_array(), [2, 20, 4, 40, 6, 60, 8, i16::MIN]);
}

#[test]
fn blend_with_foreign_mask_width() {
    let a = F64x2::new(1.0, 2.0);
    let b = F64x2::new(-1.0, -2.0);
    // Upper 64 bits true, as a 32-bit mask.
    let mask = I32x4::new(0, 0, -1, -1);
    assert_eq!(cmp_blend(mask, a, b).to_array(), [-1.0, 2.0]);
}

#[test]
fn display_uses_style() {
    let v = I16x8::new(1, 2, 3, 4, 5, 6, 7, 8);
    assert_eq!(v.to_string(), "[1 2 3 4 5 6 7 8]");
    let style = simd128::FormatStyle::new(simd128::Delimiter::CommaSpace, simd128::Brackets::Curly);
    assert_eq!(F64x2::new(0.5, 2.0).to_string_with(&style), "{0.5, 2}");
}
