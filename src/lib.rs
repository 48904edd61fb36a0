pub mod util;
pub mod variable;
pub mod dataset;
pub mod signature;
pub mod counts;
pub mod smoothing;
pub mod distribution;
pub mod cpt;
pub mod estimators;
pub mod model;
pub mod glossary;
pub mod interview;

pub use crate::util::{Result, MorelError};
pub use crate::variable::{Assignment, Domain, Variable};
pub use crate::dataset::Dataset;
pub use crate::signature::Signature;
pub use crate::counts::{EventCounts, Table};
pub use crate::smoothing::{add_k_smoothing, AddK, Smoother};
pub use crate::distribution::JointDistribution;
pub use crate::cpt::ConditionalProbabilityTable;
pub use crate::estimators::{train_cpt, train_naive_bayes, Estimator, LocalSmoothedEstimator, NaiveBayesEstimator};
pub use crate::model::{Classifier, NaiveBayesModel, NaiveBayesModelBuilder, Posterior};
pub use crate::glossary::Glossary;
