//! Defines an `Estimator`, which is used to estimate the parameters of a model from a dataset.

use crate::cpt::ConditionalProbabilityTable;
use crate::dataset::Dataset;
use crate::model::NaiveBayesModel;
use crate::smoothing::AddK;
use crate::util::Result;

mod smoothed;
pub use self::smoothed::{LocalSmoothedEstimator, NaiveBayesEstimator};

/// A trait that represents the ability to estimate the parameters of some model (be it a whole
/// model or just a local CPD).
pub trait Estimator<T> {

    /// Estimate the value of the parameters from the given dataset
    fn estimate(&self, data: &Dataset) -> Result<T>;

}


/// Train ```P(child | parents)``` from `data` with add-one smoothing.
pub fn train_cpt(data: &Dataset, child: &str, parents: &[&str]) -> Result<ConditionalProbabilityTable> {
    LocalSmoothedEstimator::new(child, parents, AddK::laplace()).estimate(data)
}

/// Train a `NaiveBayesModel` with class variable `parent` from `data` with add-one smoothing.
pub fn train_naive_bayes(data: &Dataset, parent: &str) -> Result<NaiveBayesModel> {
    NaiveBayesEstimator::new(parent, AddK::laplace()).estimate(data)
}
