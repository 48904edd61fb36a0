//! Defines a `NaiveBayesModel`: a class variable with a prior, and every other variable
//! conditionally independent of the rest given the class.

use crate::cpt::ConditionalProbabilityTable;
use crate::signature::Signature;
use crate::util::{MorelError, Result};
use crate::variable::{Assignment, Variable};
use super::{Classifier, Posterior};

use indexmap::IndexMap;
use tracing::trace;


/// Represents a Naive Bayes model - a Bayesian Network with a star topology.
///
/// # Representation
/// The class (parent) variable ```C``` has a prior ```P(C)```, held as a CPT with no parents.
/// Every child variable ```X``` has a CPT ```P(X | C)``` with ```C``` as its only parent. The
/// joint distribution factorizes as ```P(C) * prod_X P(X | C)```.
#[derive(Clone, Debug)]
pub struct NaiveBayesModel {

    /// The domains of every variable the model was trained on
    signature: Signature,

    /// The class variable
    parent: Variable,

    /// ```P(C)```
    prior: ConditionalProbabilityTable,

    /// ```P(X | C)``` for every child ```X```, keyed by the child's name
    cpts: IndexMap<String, ConditionalProbabilityTable>

}

impl NaiveBayesModel {

    /// The domains of the variables the model was trained on
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// The class variable
    pub fn parent(&self) -> &Variable {
        &self.parent
    }

    /// The names of the child variables
    pub fn children(&self) -> impl Iterator<Item = &str> {
        self.cpts.keys().map(|s| s.as_str())
    }

    /// The CPT of the class variable, with no parents
    pub fn prior_cpt(&self) -> &ConditionalProbabilityTable {
        &self.prior
    }

    /// The CPT ```P(child | C)```.
    ///
    /// # Errors
    /// * `MorelError::UnknownVariable`, if `child` is not a child of the model
    pub fn cpt(&self, child: &str) -> Result<&ConditionalProbabilityTable> {
        self.cpts.get(child).ok_or_else(|| MorelError::UnknownVariable(String::from(child)))
    }

    /// The prior ```P(C)``` over every class value
    pub fn prior(&self) -> Result<Posterior> {
        let values = self.prior.distribution(&NO_PARENTS)?;
        Ok(Posterior::new(self.parent.name(), values))
    }
}

const NO_PARENTS: [&str; 0] = [];

impl Classifier for NaiveBayesModel {

    fn class_variable(&self) -> &Variable {
        &self.parent
    }

    /// ```P(C | evidence)```, computed as ```P(C) * prod_{X in evidence} P(X = x | C)```,
    /// normalized over the class domain.
    ///
    /// # Errors
    /// * `MorelError::UnknownVariable`, if an observed variable is not a child of the model
    /// * `MorelError::UnknownValue`, if an observed value is outside its variable's domain
    fn posterior(&self, evidence: &Assignment) -> Result<Posterior> {
        let observed: Vec<(&ConditionalProbabilityTable, &str)> =
            evidence.iter()
                    .map(|(child, value)| self.cpt(child).map(|cpt| (cpt, value)))
                    .collect::<Result<_>>()?;

        // the prior is already normalized
        if observed.is_empty() {
            return self.prior();
        }

        let mut joints = IndexMap::new();
        for parent_value in self.parent.domain().iter() {
            let mut joint = self.prior.prob(parent_value, &NO_PARENTS)?;
            for &(cpt, value) in observed.iter() {
                joint *= cpt.prob(value, &[parent_value])?;
            }
            joints.insert(String::from(parent_value), joint);
        }

        let posterior = Posterior::normalize(self.parent.name(), joints)?;
        trace!(%evidence, %posterior, "computed posterior");
        Ok(posterior)
    }
}


/// An implementation of the [builder pattern] for creating a `NaiveBayesModel`.
///
/// The builder verifies the star topology: the prior must be over the class variable with no
/// parents, and every child CPT must have the class variable as its one and only parent.
///
/// [builder pattern]: https://en.wikipedia.org/wiki/Builder_pattern
pub struct NaiveBayesModelBuilder {

    signature: Signature,

    /// The class variable, once it has been found in the signature
    parent: Option<Variable>,

    prior: Option<ConditionalProbabilityTable>,

    cpts: IndexMap<String, ConditionalProbabilityTable>,

    /// The error state of the builder
    err: Option<MorelError>

}

impl NaiveBayesModelBuilder {

    /// Construct a new `NaiveBayesModelBuilder` for a model over `signature` with class variable
    /// `parent`.
    pub fn new(signature: Signature, parent: &str) -> Self {
        let (parent, err) = match signature.variable(parent) {
            Ok(var) => (Some(var.clone()), None),
            Err(e) => (None, Some(e))
        };

        NaiveBayesModelBuilder { signature, parent, prior: None, cpts: IndexMap::new(), err }
    }

    /// Set the prior ```P(C)```
    pub fn with_prior(mut self, cpt: ConditionalProbabilityTable) -> Self {
        if self.err.is_some() {
            return self;
        }

        if let Some(ref parent) = self.parent {
            if cpt.child() != parent || ! cpt.parents().is_empty() {
                self.err = Some(MorelError::InvalidTopology(format!(
                    "the prior must be over {} alone", parent.name()
                )));
                return self;
            }
        }

        self.prior = Some(cpt);
        self
    }

    /// Add the CPT ```P(X | C)``` of a child ```X```
    pub fn with_child(mut self, cpt: ConditionalProbabilityTable) -> Self {
        ///////////////////////////////////////////////////////////////////////
        // 1) if we are in an error state, do nothing
        if self.err.is_some() {
            return self;
        }

        ///////////////////////////////////////////////////////////////////////
        // 2) Check for error conditions
        let name = String::from(cpt.child().name());
        if let Some(ref parent) = self.parent {
            if cpt.parents().len() != 1 || cpt.parents()[0] != *parent {
                self.err = Some(MorelError::InvalidTopology(format!(
                    "{} must have {} as its only parent", name, parent.name()
                )));
                return self;
            }

            if name == parent.name() {
                self.err = Some(MorelError::InvalidTopology(format!(
                    "{} cannot be its own parent", name
                )));
                return self;
            }
        }

        if self.cpts.contains_key(&name) {
            self.err = Some(MorelError::DuplicateVariable(name));
            return self;
        }

        match self.signature.variable(&name) {
            Ok(var) if var == cpt.child() => (),
            Ok(_) => {
                self.err = Some(MorelError::InvalidTopology(format!(
                    "the domain of {} does not match the signature", name
                )));
                return self;
            },
            Err(e) => {
                self.err = Some(e);
                return self;
            }
        }

        ///////////////////////////////////////////////////////////////////////
        // 3) Add to current model
        self.cpts.insert(name, cpt);
        self
    }

    /// Complete building the model.
    ///
    /// # Returns
    /// the `NaiveBayesModel`, or an error if one was generated during the building process
    pub fn build(self) -> Result<NaiveBayesModel> {
        if let Some(e) = self.err {
            return Err(e);
        }

        match (self.parent, self.prior) {
            (Some(parent), Some(prior)) => Ok(NaiveBayesModel {
                signature: self.signature,
                parent,
                prior,
                cpts: self.cpts
            }),
            _ => Err(MorelError::InvalidTopology(String::from("the model has no prior")))
        }
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::dataset::Dataset;
    use crate::estimators::train_cpt;

    fn data() -> Dataset {
        let csv = "poisonous,cap-color,odor\n\
                   p,n,f\n\
                   p,n,f\n\
                   p,w,p\n\
                   e,w,n\n\
                   e,w,a\n\
                   e,n,n\n\
                   e,r,l\n";
        Dataset::from_reader(csv.as_bytes()).unwrap()
    }

    fn model() -> NaiveBayesModel {
        let data = data();
        NaiveBayesModelBuilder::new(Signature::extract(&data), "poisonous")
            .with_prior(train_cpt(&data, "poisonous", &[]).unwrap())
            .with_child(train_cpt(&data, "cap-color", &["poisonous"]).unwrap())
            .with_child(train_cpt(&data, "odor", &["poisonous"]).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn build() {
        let model = model();
        assert_eq!("poisonous", model.parent().name());
        assert_eq!(vec!["cap-color", "odor"], model.children().collect::<Vec<_>>());
        assert_eq!("odor", model.cpt("odor").unwrap().child().name());
        assert!(model.cpt("habitat").is_err());
    }

    #[test]
    fn prior() {
        let model = model();
        let prior = model.prior().unwrap();
        // e: (4 + 1) / (7 + 2), p: (3 + 1) / (7 + 2)
        assert_eq!(Some(5.0 / 9.0), prior.get("e"));
        assert_eq!(Some(4.0 / 9.0), prior.get("p"));
    }

    #[test]
    fn empty_evidence_is_prior() {
        let model = model();
        let posterior = model.posterior(&Assignment::new()).unwrap();
        assert_eq!(model.prior().unwrap(), posterior);
    }

    #[test]
    fn posterior_by_hand() {
        let model = model();
        let evidence: Assignment = vec![("odor", "f")].into_iter().collect();
        let posterior = model.posterior(&evidence).unwrap();

        // P(odor = f | C) from counts with 5 odor values x 2 classes
        //   joint (f, p) = 3 / 17, (f, e) = 1 / 17;  parent p = 4 / 9, e = 5 / 9
        let pe = (5.0 / 9.0) * ((1.0 / 17.0) / (5.0 / 9.0));
        let pp = (4.0 / 9.0) * ((3.0 / 17.0) / (4.0 / 9.0));
        assert!((posterior.prob("e").unwrap() - pe / (pe + pp)).abs() < 1e-12);
        assert!((posterior.prob("p").unwrap() - pp / (pe + pp)).abs() < 1e-12);
        assert_eq!("p", model.predict(&evidence).unwrap());
    }

    #[test]
    fn unknown_observations() {
        let model = model();

        let evidence: Assignment = vec![("habitat", "d")].into_iter().collect();
        match model.posterior(&evidence) {
            Err(MorelError::UnknownVariable(name)) => assert_eq!("habitat", name),
            other => panic!("wrong result: {:?}", other)
        }

        let evidence: Assignment = vec![("poisonous", "p")].into_iter().collect();
        assert!(model.posterior(&evidence).is_err());

        let evidence: Assignment = vec![("odor", "y")].into_iter().collect();
        match model.posterior(&evidence) {
            Err(MorelError::UnknownValue { variable, value }) => {
                assert_eq!("odor", variable);
                assert_eq!("y", value);
            },
            other => panic!("wrong result: {:?}", other)
        }
    }

    #[test]
    fn builder_errors() {
        let data = data();
        let signature = Signature::extract(&data);

        // unknown parent
        let res = NaiveBayesModelBuilder::new(signature.clone(), "edible").build();
        assert!(match res { Err(MorelError::UnknownVariable(_)) => true, _ => false });

        // no prior
        let res = NaiveBayesModelBuilder::new(signature.clone(), "poisonous").build();
        assert!(match res { Err(MorelError::InvalidTopology(_)) => true, _ => false });

        // prior with a parent
        let res = NaiveBayesModelBuilder::new(signature.clone(), "poisonous")
            .with_prior(train_cpt(&data, "poisonous", &["odor"]).unwrap())
            .build();
        assert!(match res { Err(MorelError::InvalidTopology(_)) => true, _ => false });

        // child conditioned on the wrong parent
        let res = NaiveBayesModelBuilder::new(signature.clone(), "poisonous")
            .with_prior(train_cpt(&data, "poisonous", &[]).unwrap())
            .with_child(train_cpt(&data, "cap-color", &["odor"]).unwrap())
            .build();
        assert!(match res { Err(MorelError::InvalidTopology(_)) => true, _ => false });

        // the same child twice
        let res = NaiveBayesModelBuilder::new(signature, "poisonous")
            .with_prior(train_cpt(&data, "poisonous", &[]).unwrap())
            .with_child(train_cpt(&data, "odor", &["poisonous"]).unwrap())
            .with_child(train_cpt(&data, "odor", &["poisonous"]).unwrap())
            .build();
        assert!(match res { Err(MorelError::DuplicateVariable(_)) => true, _ => false });
    }
}
