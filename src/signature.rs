//! The `Signature` of a dataset: the `Domain` of every column, discovered from the data.

use crate::dataset::Dataset;
use crate::util::{MorelError, Result};
use crate::variable::{Domain, Variable};

use indexmap::{IndexMap, IndexSet};
use tracing::trace;


/// Maps every variable (column) name to its `Variable`, in header order.
#[derive(Clone, Debug, PartialEq)]
pub struct Signature {
    variables: IndexMap<String, Variable>
}

impl Signature {

    /// Scan every cell of `data` once, collecting the distinct values of each column.
    pub fn extract(data: &Dataset) -> Self {
        let mut seen: Vec<IndexSet<&str>> = data.columns().map(|_| IndexSet::new()).collect();

        for row in data.rows() {
            for (values, cell) in seen.iter_mut().zip(row.iter()) {
                values.insert(cell.as_str());
            }
        }

        let variables = data.columns()
                            .zip(seen.into_iter())
                            .map(|(name, values)| {
                                let var = Variable::new(name, Domain::new(values));
                                trace!(variable = %var, "extracted domain");
                                (String::from(name), var)
                            })
                            .collect();

        Signature { variables }
    }

    /// Look up a `Variable` by name.
    ///
    /// # Errors
    /// * `MorelError::UnknownVariable`, if there is no such variable
    pub fn variable(&self, name: &str) -> Result<&Variable> {
        self.variables.get(name).ok_or_else(|| MorelError::UnknownVariable(String::from(name)))
    }

    /// Look up the `Domain` of a variable by name
    pub fn domain(&self, name: &str) -> Result<&Domain> {
        self.variable(name).map(|v| v.domain())
    }

    /// Check if the variable `name` is part of the `Signature`
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Iterate the `Variable`s in header order
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }

    /// The number of variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}


#[cfg(test)]
mod tests {

    use super::*;

    fn mushrooms() -> Dataset {
        let csv = "poisonous,cap-color,veil-color\n\
                   p,n,w\n\
                   e,y,w\n\
                   e,w,o\n\
                   p,w,y\n\
                   e,n,n\n";
        Dataset::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn extract() {
        let signature = Signature::extract(&mushrooms());
        assert_eq!(3, signature.len());

        let poisonous: Vec<&str> = signature.domain("poisonous").unwrap().iter().collect();
        assert_eq!(vec!["e", "p"], poisonous);

        let veil: Vec<&str> = signature.domain("veil-color").unwrap().iter().collect();
        assert_eq!(vec!["n", "o", "w", "y"], veil);

        let names: Vec<&str> = signature.variables().map(|v| v.name()).collect();
        assert_eq!(vec!["poisonous", "cap-color", "veil-color"], names);
    }

    #[test]
    fn deterministic() {
        let a = Signature::extract(&mushrooms());
        let b = Signature::extract(&mushrooms());
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_variable() {
        let signature = Signature::extract(&mushrooms());
        assert!(! signature.contains("odor"));
        match signature.variable("odor") {
            Err(MorelError::UnknownVariable(name)) => assert_eq!("odor", name),
            other => panic!("wrong result: {:?}", other)
        }
    }

    #[test]
    fn no_rows() {
        let data = Dataset::from_reader("poisonous,odor\n".as_bytes()).unwrap();
        let signature = Signature::extract(&data);
        assert_eq!(2, signature.len());
        assert!(signature.domain("odor").unwrap().is_empty());
    }
}
