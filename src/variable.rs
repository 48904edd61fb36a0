//! Definition of the variable module
//!
//! A `Variable` represents a categorical random variable - a named column of the training data -
//! together with its `Domain`, the sorted set of values it was observed to take.

use crate::util::{MorelError, Result};

use indexmap::map;
use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;

use std::fmt;


/// The `Domain` of a categorical `Variable`: the distinct values it takes, in sorted order.
///
/// The position of a value in the `Domain` is the index of that value along the axis of any
/// table built over the `Variable`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain {
    values: IndexSet<String>
}

impl Domain {

    /// Construct a `Domain` from any collection of values. Values are sorted and deduplicated.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter()
                           .map(|s| s.into())
                           .sorted()
                           .dedup()
                           .collect();

        Domain { values }
    }

    /// The number of values in the `Domain`
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the `Domain` holds no values at all
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The position of `value` in the `Domain`, if present
    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.values.get_index_of(value)
    }

    /// The value at position `idx`
    pub fn value(&self, idx: usize) -> Option<&str> {
        self.values.get_index(idx).map(|s| s.as_str())
    }

    /// Check if `value` is in the `Domain`
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    /// Iterate the values of the `Domain` in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|s| s.as_str())
    }
}


/// A named categorical random variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    /// The name of the `Variable`
    name: String,
    domain: Domain
}

impl Variable {

    /// Construct a new `Variable` over the given `Domain`
    pub fn new(name: &str, domain: Domain) -> Self {
        Variable { name: String::from(name), domain }
    }

    /// Get the name of the `Variable`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the `Domain` of the `Variable`
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// The number of values the `Variable` can take
    pub fn cardinality(&self) -> usize {
        self.domain.len()
    }

    /// The position of `value` in this `Variable`'s domain.
    ///
    /// # Errors
    /// * `MorelError::UnknownValue`, if `value` was never observed for this `Variable`
    pub fn index_of(&self, value: &str) -> Result<usize> {
        self.domain.index_of(value).ok_or_else(|| {
            MorelError::UnknownValue {
                variable: self.name.clone(),
                value: String::from(value)
            }
        })
    }
}

impl fmt::Display for Variable {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {{{}}}", self.name, self.domain.iter().join(", "))
    }

}


/// An `Assignment` of values to (some of) the `Variable`s of a model, keyed by name.
///
/// The order in which values are set is preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment {
    values: IndexMap<String, String>
}

impl Assignment {

    /// Construct an empty `Assignment`
    pub fn new() -> Self {
        Assignment { values: IndexMap::new() }
    }

    /// Assign `value` to the variable `name`, replacing any earlier assignment
    pub fn set(&mut self, name: &str, value: &str) {
        self.values.insert(String::from(name), String::from(value));
    }

    /// Get the value assigned to the variable `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|s| s.as_str())
    }

    /// Check if the variable `name` has been assigned
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate the `(name, value)` pairs in the order they were assigned
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.values.iter() }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Assignment {

    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut assignment = Assignment::new();
        for (name, value) in iter {
            assignment.set(name, value);
        }
        assignment
    }

}

impl fmt::Display for Assignment {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self.iter().map(|(n, v)| format!("{}={}", n, v)).join(", "))
    }

}

/// Iterator over the `(name, value)` pairs of an `Assignment`
pub struct Iter<'a> {
    inner: map::Iter<'a, String, String>
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}


// Unit Tests for the variable module
#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn domain_sorted_and_unique() {
        let domain = Domain::new(vec!["w", "n", "w", "e", "n"]);
        assert_eq!(3, domain.len());
        assert_eq!(vec!["e", "n", "w"], domain.iter().collect::<Vec<_>>());
        assert_eq!(Some(1), domain.index_of("n"));
        assert_eq!(Some("w"), domain.value(2));
        assert_eq!(None, domain.index_of("r"));
        assert!(domain.contains("e"));
    }

    #[test]
    fn empty_domain() {
        let domain = Domain::new(Vec::<String>::new());
        assert!(domain.is_empty());
        assert_eq!(None, domain.value(0));
    }

    #[test]
    fn enumerated() {
        let var = Variable::new("cap-color", Domain::new(vec!["n", "w", "r"]));
        assert_eq!(var.name(), "cap-color");
        assert_eq!(3, var.cardinality());
        assert_eq!(0, var.index_of("n").unwrap());
        assert_eq!(1, var.index_of("r").unwrap());
        assert_eq!("cap-color {n, r, w}", var.to_string());
    }

    #[test]
    fn enumerated_unknown_value() {
        let var = Variable::new("cap-color", Domain::new(vec!["n", "w"]));
        match var.index_of("y") {
            Err(MorelError::UnknownValue { variable, value }) => {
                assert_eq!("cap-color", variable);
                assert_eq!("y", value);
            },
            other => panic!("wrong result: {:?}", other)
        }
    }

    #[test]
    fn assignment() {
        let mut a = Assignment::new();
        assert!(a.is_empty());

        a.set("odor", "n");
        a.set("cap-color", "w");
        a.set("odor", "a");

        assert_eq!(2, a.len());
        assert_eq!(Some("a"), a.get("odor"));
        assert!(a.contains("cap-color"));
        assert!(! a.contains("habitat"));

        let pairs: Vec<(&str, &str)> = a.iter().collect();
        assert_eq!(vec![("odor", "a"), ("cap-color", "w")], pairs);
        assert_eq!("{odor=a, cap-color=w}", a.to_string());
    }

    #[test]
    fn assignment_from_iter() {
        let a: Assignment = vec![("bruises", "t"), ("habitat", "d")].into_iter().collect();
        assert_eq!(Some("t"), a.get("bruises"));
        assert_eq!(Some("d"), a.get("habitat"));
    }
}
