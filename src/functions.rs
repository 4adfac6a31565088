//! Free-function forms of the common operations. Pure delegation.

use crate::lane::Lane;
use crate::ops::{HorizontalAdd, MinMax};
use crate::vector::Vector128;

#[inline(always)]
pub fn max<S: Lane>(a: Vector128<S>, b: Vector128<S>) -> Vector128<S>
where
    Vector128<S>: MinMax,
{
    MinMax::max(a, b)
}

#[inline(always)]
pub fn min<S: Lane>(a: Vector128<S>, b: Vector128<S>) -> Vector128<S>
where
    Vector128<S>: MinMax,
{
    MinMax::min(a, b)
}

/// `mask ? if_true : if_false`, per lane.
#[inline(always)]
pub fn cmp_blend<M: Lane, S: Lane>(
    mask: Vector128<M>,
    if_true: Vector128<S>,
    if_false: Vector128<S>,
) -> Vector128<S> {
    if_true.cmp_blend(if_false, mask)
}

#[inline(always)]
pub fn hadd<S: Lane>(a: Vector128<S>, b: Vector128<S>) -> Vector128<S>
where
    Vector128<S>: HorizontalAdd,
{
    a.hadd(b)
}

/// `reinterpret::<u32, _>(v)` reads as a cast at the call site.
#[inline(always)]
pub fn reinterpret<T: Lane, S: Lane>(v: Vector128<S>) -> Vector128<T> {
    v.reinterpret()
}
