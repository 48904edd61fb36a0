//! Defines a `Classifier`, a model that answers posterior queries over a single class variable,
//! and the `NaiveBayesModel` that implements it.

use crate::dataset::Dataset;
use crate::util::{MorelError, Result};
use crate::variable::{Assignment, Variable};

use tracing::debug;

mod naive_bayes;
mod posterior;

pub use self::naive_bayes::{NaiveBayesModel, NaiveBayesModelBuilder};
pub use self::posterior::Posterior;


/// The `Classifier` trait represents a model of a class variable given evidence on the other
/// variables.
pub trait Classifier {

    /// The class `Variable`
    fn class_variable(&self) -> &Variable;


    /// Compute the posterior ```P(C | evidence)``` over every value of the class variable.
    ///
    /// # Args
    /// * `evidence`: a partial `Assignment` of the non-class variables. May be empty.
    fn posterior(&self, evidence: &Assignment) -> Result<Posterior>;


    /// The maximum a-posteriori class value given the evidence
    fn predict(&self, evidence: &Assignment) -> Result<String> {
        let posterior = self.posterior(evidence)?;
        posterior.map_value()
                 .map(|(value, _)| String::from(value))
                 .ok_or(MorelError::EmptyDistribution)
    }


    /// The fraction of rows of `data` whose class value is the one predicted from the rest of
    /// the row.
    ///
    /// # Errors
    /// * `MorelError::NotEnoughData`, if `data` has no rows
    /// * `MorelError::UnknownVariable`, if `data` has no column for the class variable
    fn evaluate(&self, data: &Dataset) -> Result<f64> {
        if data.is_empty() {
            return Err(MorelError::NotEnoughData);
        }

        let class = self.class_variable().name();
        let idx = data.column_index(class)?;

        let mut correct = 0usize;
        for row in data.rows() {
            let evidence = data.assignment(row, &[class]);
            if self.predict(&evidence)? == row[idx] {
                correct += 1;
            }
        }

        let accuracy = correct as f64 / data.len() as f64;
        debug!(rows = data.len(), correct, accuracy, "evaluated classifier");
        Ok(accuracy)
    }
}
