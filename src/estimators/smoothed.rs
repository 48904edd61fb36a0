//! Defines `Estimator`s that count events in a dataset and smooth the counts into probabilities.

use crate::counts::EventCounts;
use crate::cpt::ConditionalProbabilityTable;
use crate::dataset::Dataset;
use crate::distribution::JointDistribution;
use crate::model::{NaiveBayesModel, NaiveBayesModelBuilder};
use crate::signature::Signature;
use crate::smoothing::Smoother;
use crate::util::{MorelError, Result};
use crate::variable::Variable;
use super::Estimator;

use tracing::{debug, info};

use std::iter::once;


/// Estimates the Conditional Probability Distribution ```P(X | Pa(X))``` of a single variable.
pub struct LocalSmoothedEstimator<S> {

    /// The name of ```X```
    child: String,

    /// The names of ```Pa(X)```, in the order parent values are given to the trained CPT
    parents: Vec<String>,

    smoother: S

}

impl<S: Smoother> LocalSmoothedEstimator<S> {

    /// Construct an estimator for ```P(child | parents)```
    pub fn new(child: &str, parents: &[&str], smoother: S) -> Self {
        LocalSmoothedEstimator {
            child: String::from(child),
            parents: parents.iter().map(|&p| String::from(p)).collect(),
            smoother
        }
    }

    /// Estimate the CPT from `data`, reusing a `Signature` already extracted from it
    pub fn estimate_with_signature(&self, data: &Dataset, signature: &Signature) -> Result<ConditionalProbabilityTable> {
        estimate_cpt(data, signature, &self.child, &self.parents, &self.smoother)
    }
}

impl<S: Smoother> Estimator<ConditionalProbabilityTable> for LocalSmoothedEstimator<S> {

    fn estimate(&self, data: &Dataset) -> Result<ConditionalProbabilityTable> {
        let signature = Signature::extract(data);
        self.estimate_with_signature(data, &signature)
    }

}


/// Estimates a `NaiveBayesModel`.
///
/// Based on the decomposability of the likelihood function, each CPT can be estimated separately,
/// so this is just one `LocalSmoothedEstimator` per variable sharing a single `Signature`.
pub struct NaiveBayesEstimator<S> {

    /// The name of the class variable
    parent: String,

    smoother: S

}

impl<S: Smoother> NaiveBayesEstimator<S> {

    pub fn new(parent: &str, smoother: S) -> Self {
        NaiveBayesEstimator { parent: String::from(parent), smoother }
    }

    /// Estimate the model from `data` over the domains of `signature`, which may have been
    /// extracted from a larger dataset than the one trained on.
    pub fn estimate_with_signature(&self, data: &Dataset, signature: Signature) -> Result<NaiveBayesModel> {
        signature.variable(&self.parent)?;

        let parents = [self.parent.clone()];
        let prior = estimate_cpt(data, &signature, &self.parent, &[], &self.smoother)?;

        let cpts = signature.variables()
                            .filter(|v| v.name() != self.parent)
                            .map(|v| estimate_cpt(data, &signature, v.name(), &parents, &self.smoother))
                            .collect::<Result<Vec<_>>>()?;

        let num_children = cpts.len();
        let model = cpts.into_iter()
                        .fold(
                            NaiveBayesModelBuilder::new(signature, &self.parent).with_prior(prior),
                            |builder, cpt| builder.with_child(cpt)
                        )
                        .build()?;

        info!(
            class = %model.parent(),
            children = num_children,
            rows = data.len(),
            "trained naive bayes model"
        );

        Ok(model)
    }

}

impl<S: Smoother> Estimator<NaiveBayesModel> for NaiveBayesEstimator<S> {

    fn estimate(&self, data: &Dataset) -> Result<NaiveBayesModel> {
        self.estimate_with_signature(data, Signature::extract(data))
    }

}


/// Count every ```(x, pa_1, ..., pa_n)``` combination in `data` and smooth the counts into
/// ```P(X, Pa(X))``` and ```P(Pa(X))```.
fn estimate_cpt<S: Smoother + ?Sized>(
    data: &Dataset,
    signature: &Signature,
    child: &str,
    parents: &[String],
    smoother: &S,
) -> Result<ConditionalProbabilityTable> {
    ///////////////////////////////////////////////////////////////////////
    // 1) Check for error conditions
    for (i, p) in parents.iter().enumerate() {
        if p == child || parents[..i].contains(p) {
            return Err(MorelError::DuplicateVariable(p.clone()));
        }
    }

    let names: Vec<&str> = once(child).chain(parents.iter().map(|p| p.as_str())).collect();
    let scope: Vec<Variable> = names.iter()
                                    .map(|n| signature.variable(n).map(|v| v.clone()))
                                    .collect::<Result<_>>()?;
    let columns: Vec<usize> = names.iter()
                                   .map(|n| data.column_index(n))
                                   .collect::<Result<_>>()?;

    ///////////////////////////////////////////////////////////////////////
    // 2) Count every event, joint and parents alone
    let mut joint_counts = EventCounts::new(scope.clone());
    let mut parent_counts = EventCounts::new(scope[1..].to_vec());

    for row in data.rows() {
        let instance: Vec<&str> = columns.iter().map(|&c| row[c].as_str()).collect();
        joint_counts.increment(&instance)?;
        parent_counts.increment(&instance[1..])?;
    }

    ///////////////////////////////////////////////////////////////////////
    // 3) Smooth the counts
    let joint = JointDistribution::new(&joint_counts, smoother)?;
    let parent_dist = JointDistribution::new(&parent_counts, smoother)?;

    debug!(
        child = child,
        parents = ?parents,
        events = joint.num_events(),
        "estimated cpt"
    );

    ConditionalProbabilityTable::new(joint, parent_dist)
}
