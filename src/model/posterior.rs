//! A `Posterior` is the normalized distribution over the values of the class variable after
//! conditioning on evidence.

use crate::util::{MorelError, Result};

use indexmap::IndexMap;
use itertools::Itertools;

use std::fmt;


#[derive(Clone, Debug, PartialEq)]
pub struct Posterior {

    /// The name of the class variable
    variable: String,

    /// The probability of every class value, in domain order
    values: IndexMap<String, f64>

}

impl Posterior {

    /// Construct a `Posterior` from probabilities that are already normalized
    pub(crate) fn new(variable: &str, values: IndexMap<String, f64>) -> Self {
        Posterior { variable: String::from(variable), values }
    }

    /// Normalize unnormalized scores into a `Posterior`.
    ///
    /// # Errors
    /// * `MorelError::EmptyDistribution`, if there are no scores
    /// * `MorelError::DivideByZero`, if the scores sum to zero or to something not finite
    pub(crate) fn normalize(variable: &str, scores: IndexMap<String, f64>) -> Result<Self> {
        if scores.is_empty() {
            return Err(MorelError::EmptyDistribution);
        }

        let normalizer: f64 = scores.values().sum();
        if normalizer == 0.0 || ! normalizer.is_finite() {
            return Err(MorelError::DivideByZero);
        }

        let values = scores.into_iter().map(|(v, s)| (v, s / normalizer)).collect();
        Ok(Posterior::new(variable, values))
    }

    /// The name of the class variable
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// The probability of a class value, if it is part of the domain
    pub fn get(&self, value: &str) -> Option<f64> {
        self.values.get(value).cloned()
    }

    /// The probability of a class value.
    ///
    /// # Errors
    /// * `MorelError::UnknownValue`, if `value` is not part of the class domain
    pub fn prob(&self, value: &str) -> Result<f64> {
        self.get(value).ok_or_else(|| MorelError::UnknownValue {
            variable: self.variable.clone(),
            value: String::from(value)
        })
    }

    /// The most probable class value. Ties go to the value first in domain order.
    pub fn map_value(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (value, &p) in self.values.iter() {
            if best.map_or(true, |(_, q)| p > q) {
                best = Some((value.as_str(), p));
            }
        }
        best
    }

    /// Iterate `(value, probability)` pairs in domain order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(v, &p)| (v.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for Posterior {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "P({}) = {{{}}}",
            self.variable,
            self.iter().map(|(v, p)| format!("{}: {:.4}", v, p)).join(", ")
        )
    }

}
