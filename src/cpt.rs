//! Defines the `ConditionalProbabilityTable`, ```P(X | Pa(X))```, derived from two joint
//! distributions.

use crate::distribution::JointDistribution;
use crate::util::{MorelError, Result};
use crate::variable::Variable;

use indexmap::IndexMap;


/// The Conditional Probability Distribution of a child `Variable` given its parents.
///
/// # Representation
/// Held as the quotient ```P(X, Pa(X)) / P(Pa(X))``` of two smoothed `JointDistribution`s. The
/// joint distribution has scope ```[X] ++ Pa(X)```, the parent distribution has scope
/// ```Pa(X)```. When ```Pa(X)``` is empty the parent distribution holds the single empty event
/// with probability 1, and the CPT is just the smoothed marginal of ```X```.
#[derive(Clone, Debug)]
pub struct ConditionalProbabilityTable {

    /// ```P(X, Pa(X))```
    joint: JointDistribution,

    /// ```P(Pa(X))```
    parents: JointDistribution

}

impl ConditionalProbabilityTable {

    /// Construct a CPT from the joint distribution of the child and its parents and the
    /// distribution of the parents alone.
    ///
    /// # Errors
    /// * `MorelError::InvalidTopology`, if `joint`'s scope is not ```[child] ++ parents.scope()```
    pub fn new(joint: JointDistribution, parents: JointDistribution) -> Result<Self> {
        let js = joint.scope();
        if js.is_empty() || js[1..] != *parents.scope() {
            return Err(MorelError::InvalidTopology(String::from(
                "the joint distribution must be over the child followed by the parents"
            )));
        }

        Ok(ConditionalProbabilityTable { joint, parents })
    }

    /// The child `Variable`
    pub fn child(&self) -> &Variable {
        &self.joint.scope()[0]
    }

    /// The parent `Variable`s, in the order parent values are expected by `prob`
    pub fn parents(&self) -> &[Variable] {
        self.parents.scope()
    }

    /// ```P(X = child_value | Pa(X) = parent_values)```
    ///
    /// # Errors
    /// * `MorelError::InvalidEvent`, if there is not exactly one value per parent
    /// * `MorelError::UnknownValue`, if any value is outside its variable's domain
    /// * `MorelError::DivideByZero`, if the parent values have probability zero
    pub fn prob<S: AsRef<str>>(&self, child_value: &str, parent_values: &[S]) -> Result<f64> {
        let mut event: Vec<&str> = Vec::with_capacity(parent_values.len() + 1);
        event.push(child_value);
        event.extend(parent_values.iter().map(|v| v.as_ref()));

        let numerator = self.joint.prob(&event)?;
        let denominator = self.parents.prob(parent_values)?;
        if denominator == 0.0 {
            return Err(MorelError::DivideByZero);
        }

        Ok(numerator / denominator)
    }

    /// The distribution ```P(X | Pa(X) = parent_values)``` over the whole domain of the child,
    /// in domain order.
    pub fn distribution<S: AsRef<str>>(&self, parent_values: &[S]) -> Result<IndexMap<String, f64>> {
        self.child()
            .domain()
            .iter()
            .map(|value| self.prob(value, parent_values).map(|p| (String::from(value), p)))
            .collect()
    }

    /// The joint distribution ```P(X, Pa(X))```
    pub fn joint(&self) -> &JointDistribution {
        &self.joint
    }

    /// The parent distribution ```P(Pa(X))```
    pub fn parent_distribution(&self) -> &JointDistribution {
        &self.parents
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::counts::EventCounts;
    use crate::smoothing::AddK;
    use crate::variable::Domain;

    fn color() -> Variable {
        Variable::new("cap-color", Domain::new(vec!["n", "r", "w"]))
    }

    fn class() -> Variable {
        Variable::new("poisonous", Domain::new(vec!["e", "p"]))
    }

    /// cap-color given poisonous, from six rows:
    ///   (w, e) x2, (n, e) x1, (n, p) x2, (r, p) x1
    fn color_given_class() -> ConditionalProbabilityTable {
        let rows = vec![("w", "e"), ("w", "e"), ("n", "e"), ("n", "p"), ("n", "p"), ("r", "p")];

        let mut joint = EventCounts::new(vec![color(), class()]);
        let mut parents = EventCounts::new(vec![class()]);
        for (c, p) in rows {
            joint.increment(&[c, p]).unwrap();
            parents.increment(&[p]).unwrap();
        }

        let smoother = AddK::laplace();
        ConditionalProbabilityTable::new(
            JointDistribution::new(&joint, &smoother).unwrap(),
            JointDistribution::new(&parents, &smoother).unwrap()
        ).unwrap()
    }

    #[test]
    fn quotient() {
        let cpt = color_given_class();
        assert_eq!("cap-color", cpt.child().name());
        assert_eq!(vec!["poisonous"], cpt.parents().iter().map(|v| v.name()).collect::<Vec<_>>());

        // joint: (w, e) = 3 / 12, parent: e = 4 / 8
        let expected = (3.0 / 12.0) / (4.0 / 8.0);
        assert_eq!(expected, cpt.prob("w", &["e"]).unwrap());

        // an unseen combination keeps some mass
        assert!(cpt.prob("r", &["e"]).unwrap() > 0.0);
    }

    #[test]
    fn consistency() {
        let cpt = color_given_class();
        for parent in class().domain().iter() {
            let total: f64 = cpt.distribution(&[parent]).unwrap().values().sum();
            assert!((total - 1.0).abs() < 1e-9, "sum for {} was {}", parent, total);
        }
    }

    #[test]
    fn no_parents() {
        let mut joint = EventCounts::new(vec![class()]);
        let mut parents = EventCounts::new(vec![]);
        let empty: [&str; 0] = [];
        for p in vec!["e", "e", "e", "p"] {
            joint.increment(&[p]).unwrap();
            parents.increment(&empty).unwrap();
        }

        let smoother = AddK::laplace();
        let marginal = JointDistribution::new(&joint, &smoother).unwrap();
        let cpt = ConditionalProbabilityTable::new(
            marginal.clone(),
            JointDistribution::new(&parents, &smoother).unwrap()
        ).unwrap();

        assert!(cpt.parents().is_empty());
        for value in class().domain().iter() {
            assert_eq!(marginal.prob(&[value]).unwrap(), cpt.prob(value, &empty).unwrap());
        }
        assert_eq!(4.0 / 6.0, cpt.prob("e", &empty).unwrap());
    }

    #[test]
    fn lookup_errors() {
        let cpt = color_given_class();

        match cpt.prob("y", &["e"]) {
            Err(MorelError::UnknownValue { variable, .. }) => assert_eq!("cap-color", variable),
            other => panic!("wrong result: {:?}", other)
        }

        match cpt.prob("w", &["x"]) {
            Err(MorelError::UnknownValue { variable, .. }) => assert_eq!("poisonous", variable),
            other => panic!("wrong result: {:?}", other)
        }

        let empty: [&str; 0] = [];
        match cpt.prob("w", &empty) {
            Err(MorelError::InvalidEvent { expected: 2, found: 1 }) => (),
            other => panic!("wrong result: {:?}", other)
        }
    }

    #[test]
    fn parent_value_without_mass() {
        let mut joint = EventCounts::new(vec![color(), class()]);
        let mut parents = EventCounts::new(vec![class()]);
        for c in vec!["w", "n"] {
            joint.increment(&[c, "e"]).unwrap();
            parents.increment(&["e"]).unwrap();
        }

        let mle = AddK::new(0.0).unwrap();
        let cpt = ConditionalProbabilityTable::new(
            JointDistribution::new(&joint, &mle).unwrap(),
            JointDistribution::new(&parents, &mle).unwrap()
        ).unwrap();

        assert_eq!(0.5, cpt.prob("w", &["e"]).unwrap());
        match cpt.prob("w", &["p"]) {
            Err(MorelError::DivideByZero) => (),
            other => panic!("wrong result: {:?}", other)
        }
        assert!(cpt.distribution(&["p"]).is_err());
    }

    #[test]
    fn mismatched_scopes() {
        let smoother = AddK::laplace();
        let joint = JointDistribution::new(&EventCounts::new(vec![color(), class()]), &smoother).unwrap();
        let wrong = JointDistribution::new(&EventCounts::new(vec![color()]), &smoother).unwrap();

        match ConditionalProbabilityTable::new(joint, wrong) {
            Err(MorelError::InvalidTopology(_)) => (),
            other => panic!("wrong result: {:?}", other)
        }
    }
}
