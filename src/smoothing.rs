//! Smoothing turns a table of raw event counts into a normalized probability table.

use crate::counts::Table;
use crate::util::{MorelError, Result};


/// A `Smoother` estimates a probability table from a table of counts.
///
/// Any `Fn(&Table) -> Result<Table>` is a `Smoother`.
pub trait Smoother {

    /// Produce a table of the same shape as `counts` whose cells sum to 1.
    fn smooth(&self, counts: &Table) -> Result<Table>;

}

impl<F> Smoother for F
where
    F: Fn(&Table) -> Result<Table>,
{
    fn smooth(&self, counts: &Table) -> Result<Table> {
        self(counts)
    }
}


/// Additive (Laplace) smoothing: add `k` to every count, then normalize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AddK {
    k: f64
}

impl AddK {

    /// Construct an add-`k` smoother.
    ///
    /// # Errors
    /// * `MorelError::InvalidSmoothing`, if `k` is negative or not finite
    pub fn new(k: f64) -> Result<Self> {
        if !k.is_finite() || k < 0.0 {
            return Err(MorelError::InvalidSmoothing(k));
        }
        Ok(AddK { k })
    }

    /// Add-one smoothing
    pub fn laplace() -> Self {
        AddK { k: 1.0 }
    }

    pub fn k(&self) -> f64 {
        self.k
    }
}

impl Default for AddK {
    fn default() -> Self {
        AddK::laplace()
    }
}

impl Smoother for AddK {

    fn smooth(&self, counts: &Table) -> Result<Table> {
        add_k_smoothing(counts, self.k)
    }

}


/// Add `k` to every cell of `counts` and divide every cell by the sum of the augmented counts.
///
/// # Errors
/// * `MorelError::EmptyDistribution`, if `counts` has no cells
/// * `MorelError::DivideByZero`, if the augmented counts sum to zero
pub fn add_k_smoothing(counts: &Table, k: f64) -> Result<Table> {
    if counts.is_empty() {
        return Err(MorelError::EmptyDistribution);
    }

    let augmented = counts.mapv(|c| c + k);
    let normalizer = augmented.sum();
    if normalizer == 0.0 {
        return Err(MorelError::DivideByZero);
    }

    Ok(augmented.mapv(|c| c / normalizer))
}
