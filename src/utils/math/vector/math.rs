use std::{cmp::Ordering, ops::AddAssign};

use num::Num;

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    /// Dot product, merge-joined over the stored indices.
    #[inline]
    pub fn dot<R>(&self, other: &Self) -> R
    where
        R: Num + AddAssign,
        N: Into<R>,
    {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );

        let mut result = R::zero();
        let (mut i, mut j) = (0, 0);
        while i < self.inds.len() && j < other.inds.len() {
            match self.inds[i].cmp(&other.inds[j]) {
                Ordering::Equal => {
                    result += self.vals[i].into() * other.vals[j].into();
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }
        result
    }

    #[inline]
    pub fn norm_sq<R>(&self) -> R
    where
        R: Num + AddAssign + Copy,
        N: Into<R>,
    {
        let mut result = R::zero();
        for &val in &self.vals {
            let val: R = val.into();
            result += val * val;
        }
        result
    }

    /// Cosine similarity.
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    ///
    /// Returns 0.0 when either vector has zero norm.
    #[inline]
    pub fn cosine_similarity(&self, other: &Self) -> f64
    where
        N: Into<f64>,
    {
        let norm = (self.norm_sq::<f64>() * other.norm_sq::<f64>()).sqrt();
        if norm == 0.0 || !norm.is_finite() {
            return 0.0;
        }
        self.dot::<f64>(other) / norm
    }
}
