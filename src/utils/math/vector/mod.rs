pub mod math;

use std::fmt::Debug;

use num::Num;
use serde::{Deserialize, Serialize};

/// ZeroSpVec is a sparse vector that stores only non-zero elements.
///
/// `inds` holds the logical index of every stored element and `vals` its value.
/// Indices are kept sorted in ascending order; `len` is the logical dimension.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroSpVec<N>
where
    N: Num,
{
    inds: Vec<usize>,
    vals: Vec<N>,
    len: usize,
}

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    #[inline]
    pub fn new() -> Self {
        ZeroSpVec {
            inds: Vec::new(),
            vals: Vec::new(),
            len: 0,
        }
    }

    /// Capacity is reserved for stored (non-zero) elements only.
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        ZeroSpVec {
            inds: Vec::with_capacity(cap),
            vals: Vec::with_capacity(cap),
            len: 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of stored non-zero elements.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    /// Append one dimension. Zeros only extend the logical length.
    #[inline]
    pub fn push(&mut self, elem: N) {
        if elem != N::zero() {
            self.inds.push(self.len);
            self.vals.push(elem);
        }
        self.len += 1;
    }

    /// Value at a logical index, `None` when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<N> {
        if index >= self.len {
            return None;
        }
        match self.inds.binary_search(&index) {
            Ok(pos) => Some(self.vals[pos]),
            Err(_) => Some(N::zero()),
        }
    }

    /// Iterate stored `(index, value)` pairs in index order.
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, &N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter())
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.inds.shrink_to_fit();
        self.vals.shrink_to_fit();
    }
}

impl<N> Default for ZeroSpVec<N>
where
    N: Num + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> From<Vec<N>> for ZeroSpVec<N>
where
    N: Num + Copy,
{
    fn from(dense: Vec<N>) -> Self {
        let mut vec = ZeroSpVec::with_capacity(dense.len());
        for elem in dense {
            vec.push(elem);
        }
        vec.shrink_to_fit();
        vec
    }
}

impl<N> Debug for ZeroSpVec<N>
where
    N: Num + Copy + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            writeln!(f, "ZeroSpVec(len: {}, nnz: {}) [", self.len, self.nnz())?;
            for (idx, val) in self.raw_iter() {
                writeln!(f, "    {}: {:?}", idx, val)?;
            }
            write!(f, "]")
        } else {
            f.debug_map().entries(self.raw_iter()).finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_skips_zeros_but_counts_dimension() {
        let vec = ZeroSpVec::from(vec![0.0_f64, 1.5, 0.0, 2.0]);
        assert_eq!(vec.len(), 4);
        assert_eq!(vec.nnz(), 2);
        assert_eq!(vec.get(0), Some(0.0));
        assert_eq!(vec.get(1), Some(1.5));
        assert_eq!(vec.get(3), Some(2.0));
        assert_eq!(vec.get(4), None);
    }

    #[test]
    fn raw_iter_is_index_ordered() {
        let vec = ZeroSpVec::from(vec![3_u32, 0, 0, 7]);
        let pairs: Vec<(usize, u32)> = vec.raw_iter().map(|(i, v)| (i, *v)).collect();
        assert_eq!(pairs, vec![(0, 3), (3, 7)]);
    }
}
