//! Event-count tables: how often each combination of values of some `Variable`s occurs in the
//! training data.

use crate::util::{MorelError, Result};
use crate::variable::{Assignment, Variable};

use ndarray::{ArrayD, Dimension, IxDyn};

/// Alias f64 ndarray::ArrayD as Table
pub type Table = ArrayD<f64>;


/// Translate an event (one value per scope variable, in scope order) into its index in a table
/// over `scope`.
///
/// # Errors
/// * `MorelError::InvalidEvent`, if the event does not have one value per scope variable
/// * `MorelError::UnknownValue`, if a value is not in its variable's domain
pub fn event_index<S: AsRef<str>>(scope: &[Variable], event: &[S]) -> Result<Vec<usize>> {
    if scope.len() != event.len() {
        return Err(MorelError::InvalidEvent { expected: scope.len(), found: event.len() });
    }

    scope.iter()
         .zip(event.iter())
         .map(|(var, value)| var.index_of(value.as_ref()))
         .collect()
}

/// Pick the values of the scope variables out of an `Assignment`, in scope order.
///
/// # Errors
/// * `MorelError::IncompleteAssignment`, if a scope variable is not assigned
pub fn event_from_assignment<'a>(scope: &[Variable], assignment: &'a Assignment) -> Result<Vec<&'a str>> {
    let missing: Vec<String> = scope.iter()
                                    .filter(|v| ! assignment.contains(v.name()))
                                    .map(|v| String::from(v.name()))
                                    .collect();

    if ! missing.is_empty() {
        return Err(MorelError::IncompleteAssignment(missing));
    }

    Ok(scope.iter().filter_map(|v| assignment.get(v.name())).collect())
}

/// Iterate every event of a table over `scope` with its cell, in row-major order.
pub fn events<'a>(scope: &'a [Variable], table: &'a Table) -> impl Iterator<Item = (Vec<&'a str>, f64)> + 'a {
    table.indexed_iter().map(move |(idx, &val)| {
        let event = scope.iter()
                         .zip(idx.slice().iter())
                         .filter_map(|(var, &i)| var.domain().value(i))
                         .collect();
        (event, val)
    })
}


/// A table of counts over the full Cartesian product of the domains of its scope.
///
/// Every combination is present from construction on, initialized to zero. A scope of zero
/// `Variable`s has exactly one cell: the empty event.
#[derive(Clone, Debug)]
pub struct EventCounts {

    /// The `Variable`s of the table, in axis order
    scope: Vec<Variable>,

    /// The count of every event
    table: Table

}

impl EventCounts {

    /// Construct a zeroed table over `scope`
    pub fn new(scope: Vec<Variable>) -> Self {
        let shape: Vec<usize> = scope.iter().map(|v| v.cardinality()).collect();
        let table = Table::zeros(shape);

        EventCounts { scope, table }
    }

    /// Count one more occurrence of `event`
    pub fn increment<S: AsRef<str>>(&mut self, event: &[S]) -> Result<()> {
        let idx = event_index(&self.scope, event)?;
        self.table[IxDyn(&idx)] += 1.0;
        Ok(())
    }

    /// The number of times `event` was counted
    pub fn count<S: AsRef<str>>(&self, event: &[S]) -> Result<f64> {
        let idx = event_index(&self.scope, event)?;
        Ok(self.table[IxDyn(&idx)])
    }

    /// The sum of all counts
    pub fn total(&self) -> f64 {
        self.table.sum()
    }

    /// The number of events in the table, counted or not
    pub fn num_events(&self) -> usize {
        self.table.len()
    }

    pub fn scope(&self) -> &[Variable] {
        &self.scope
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Iterate every `(event, count)` pair in row-major order
    pub fn events(&self) -> impl Iterator<Item = (Vec<&str>, f64)> {
        events(&self.scope, &self.table)
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::variable::Domain;
    use itertools::iproduct;

    fn color() -> Variable {
        Variable::new("cap-color", Domain::new(vec!["n", "w", "r"]))
    }

    fn class() -> Variable {
        Variable::new("poisonous", Domain::new(vec!["e", "p"]))
    }

    #[test]
    fn zero_initialized() {
        let counts = EventCounts::new(vec![color(), class()]);
        assert_eq!(6, counts.num_events());
        assert_eq!(0.0, counts.total());
        assert!(counts.events().all(|(_, c)| c == 0.0));
    }

    #[test]
    fn increment() {
        let mut counts = EventCounts::new(vec![color(), class()]);
        counts.increment(&["w", "e"]).unwrap();
        counts.increment(&["w", "e"]).unwrap();
        counts.increment(&["r", "p"]).unwrap();

        assert_eq!(2.0, counts.count(&["w", "e"]).unwrap());
        assert_eq!(1.0, counts.count(&["r", "p"]).unwrap());
        assert_eq!(0.0, counts.count(&["n", "e"]).unwrap());
        assert_eq!(3.0, counts.total());
    }

    #[test]
    fn events_row_major() {
        let counts = EventCounts::new(vec![color(), class()]);
        let events: Vec<Vec<&str>> = counts.events().map(|(e, _)| e).collect();
        let mut expected = Vec::new();
        for (c, p) in iproduct!(vec!["n", "r", "w"], vec!["e", "p"]) {
            expected.push(vec![c, p]);
        }
        assert_eq!(expected, events);
    }

    #[test]
    fn empty_scope() {
        let mut counts = EventCounts::new(vec![]);
        assert_eq!(1, counts.num_events());

        let empty: [&str; 0] = [];
        counts.increment(&empty).unwrap();
        counts.increment(&empty).unwrap();
        assert_eq!(2.0, counts.count(&empty).unwrap());

        let events: Vec<(Vec<&str>, f64)> = counts.events().collect();
        assert_eq!(vec![(Vec::<&str>::new(), 2.0)], events);
    }

    #[test]
    fn bad_events() {
        let mut counts = EventCounts::new(vec![color(), class()]);

        match counts.increment(&["w"]) {
            Err(MorelError::InvalidEvent { expected: 2, found: 1 }) => (),
            other => panic!("wrong result: {:?}", other)
        }

        match counts.count(&["w", "x"]) {
            Err(MorelError::UnknownValue { ref variable, .. }) if variable == "poisonous" => (),
            other => panic!("wrong result: {:?}", other)
        }
    }

    #[test]
    fn assignment_event() {
        let scope = vec![color(), class()];
        let a: Assignment = vec![("poisonous", "p"), ("odor", "f"), ("cap-color", "n")].into_iter().collect();
        assert_eq!(vec!["n", "p"], event_from_assignment(&scope, &a).unwrap());

        let partial: Assignment = vec![("odor", "f"), ("cap-color", "n")].into_iter().collect();
        match event_from_assignment(&scope, &partial) {
            Err(MorelError::IncompleteAssignment(missing)) => assert_eq!(vec!["poisonous"], missing),
            other => panic!("wrong result: {:?}", other)
        }
    }
}
