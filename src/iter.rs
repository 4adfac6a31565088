//! Snapshot iteration over the lanes of a vector.

use core::iter::FusedIterator;

use crate::lane::{Aligned, Lane};
use crate::vector::Vector128;

/// Read-only iterator over a private copy of a vector's lanes.
///
/// The lanes are stored into an aligned buffer when the iterator is created,
/// so later changes to the source binding are never observed. Equality is
/// positional: two iterators are equal when they sit at the same position,
/// whatever the lane values.
#[derive(Clone, Debug)]
pub struct Lanes<S: Lane> {
    snapshot: Aligned<S::Array>,
    front: usize,
    back: usize,
}

impl<S: Lane> Lanes<S> {
    pub(crate) fn new(source: &Vector128<S>) -> Self {
        let mut snapshot = Aligned(S::Array::default());
        source.write_aligned(&mut snapshot);
        Self {
            snapshot,
            front: 0,
            back: S::LANES,
        }
    }

    /// Index of the next lane `next()` would yield.
    pub fn position(&self) -> usize {
        self.front
    }

    /// The lanes not yet yielded from either end.
    pub fn as_slice(&self) -> &[S] {
        &self.snapshot.0.as_ref()[self.front..self.back]
    }
}

impl<S: Lane> Iterator for Lanes<S> {
    type Item = S;

    #[inline]
    fn next(&mut self) -> Option<S> {
        if self.front == self.back {
            return None;
        }
        let lane = self.snapshot.0.as_ref()[self.front];
        self.front += 1;
        Some(lane)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<S: Lane> DoubleEndedIterator for Lanes<S> {
    #[inline]
    fn next_back(&mut self) -> Option<S> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.snapshot.0.as_ref()[self.back])
    }
}

impl<S: Lane> ExactSizeIterator for Lanes<S> {}

impl<S: Lane> FusedIterator for Lanes<S> {}

impl<S: Lane> PartialEq for Lanes<S> {
    fn eq(&self, other: &Self) -> bool {
        self.front == other.front && self.back == other.back
    }
}

impl<S: Lane> Eq for Lanes<S> {}

impl<S: Lane> IntoIterator for Vector128<S> {
    type Item = S;
    type IntoIter = Lanes<S>;

    fn into_iter(self) -> Lanes<S> {
        Lanes::new(&self)
    }
}

impl<S: Lane> IntoIterator for &Vector128<S> {
    type Item = S;
    type IntoIter = Lanes<S>;

    fn into_iter(self) -> Lanes<S> {
        Lanes::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_every_lane_in_order() {
        let v = Vector128::<i8>::new(0, -1, 2, -3, 4, -5, 6, -7, 8, -9, 10, -11, 12, -13, 14, -15);
        let lanes: Vec<i8> = v.iter().collect();
        assert_eq!(lanes.as_slice(), v.to_array().as_slice());
        assert_eq!(v.iter().len(), 16);
    }

    #[test]
    fn snapshot_ignores_later_reassignment() {
        let mut v = Vector128::<u32>::new(1, 2, 3, 4);
        let it = v.iter();
        v = Vector128::splat(9);
        assert_eq!(it.collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(v.iter().collect::<Vec<_>>(), vec![9, 9, 9, 9]);
    }

    #[test]
    fn restartable_and_clonable() {
        let v = Vector128::<f64>::new(0.5, 1.5);
        let first: Vec<f64> = v.iter().collect();
        let second: Vec<f64> = (&v).into_iter().collect();
        assert_eq!(first, second);

        let mut it = v.iter();
        it.next();
        let rest = it.clone();
        assert_eq!(rest.position(), 1);
        assert_eq!(rest.as_slice(), &[1.5]);
    }

    #[test]
    fn equality_is_positional() {
        let a = Vector128::<i32>::splat(1).iter();
        let mut b = Vector128::<i32>::splat(2).iter();
        assert_eq!(a, b);
        b.next();
        assert_ne!(a, b);
    }

    #[test]
    fn double_ended_and_fused() {
        let v = Vector128::<u16>::new(1, 2, 3, 4, 5, 6, 7, 8);
        let rev: Vec<u16> = v.into_iter().rev().collect();
        assert_eq!(rev, vec![8, 7, 6, 5, 4, 3, 2, 1]);

        let mut it = Vector128::<i64>::new(1, 2).iter();
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
