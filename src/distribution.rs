//! Defines a `JointDistribution`, a smoothed probability table over the Cartesian product of the
//! domains of one or more `Variable`s.

use crate::counts::{self, EventCounts, Table};
use crate::smoothing::Smoother;
use crate::util::Result;
use crate::variable::{Assignment, Variable};

use itertools::Itertools;
use ndarray::IxDyn;

use std::fmt;


/// A joint probability distribution ```P(X_1, ..., X_n)``` held as a dense table.
///
/// # Representation
/// The table has one axis per `Variable` of the scope, in scope order, and the index along an
/// axis is the position of the value in that `Variable`'s domain. The scope order is the order
/// in which values must be given in an event passed to `prob`.
#[derive(Clone, Debug)]
pub struct JointDistribution {

    /// The `Variable`s of the distribution, in axis order
    scope: Vec<Variable>,

    /// The smoothed probability of every event
    table: Table

}

impl JointDistribution {

    /// Build a `JointDistribution` from a fully enumerated table of event counts.
    ///
    /// # Errors
    /// Whatever `smoother` returns; for the add-k smoother, an error if the count table is empty.
    pub fn new<S: Smoother + ?Sized>(counts: &EventCounts, smoother: &S) -> Result<Self> {
        let table = smoother.smooth(counts.table())?;

        Ok(JointDistribution { scope: counts.scope().to_vec(), table })
    }

    /// The `Variable`s of the distribution, in the order values are expected in an event
    pub fn scope(&self) -> &[Variable] {
        &self.scope
    }

    /// The probability of an exact event, given as one value per scope variable in scope order.
    ///
    /// # Errors
    /// * `MorelError::InvalidEvent`, if the event does not have one value per scope variable
    /// * `MorelError::UnknownValue`, if a value is outside its variable's domain
    pub fn prob<S: AsRef<str>>(&self, event: &[S]) -> Result<f64> {
        let idx = counts::event_index(&self.scope, event)?;
        Ok(self.table[IxDyn(&idx)])
    }

    /// The probability of the event given by name. Assigned variables outside the scope are
    /// ignored.
    ///
    /// # Errors
    /// * `MorelError::IncompleteAssignment`, if a scope variable is not assigned
    /// * `MorelError::UnknownValue`, if a value is outside its variable's domain
    pub fn prob_assignment(&self, assignment: &Assignment) -> Result<f64> {
        let event = counts::event_from_assignment(&self.scope, assignment)?;
        self.prob(&event)
    }

    /// Iterate every `(event, probability)` pair in row-major order
    pub fn events(&self) -> impl Iterator<Item = (Vec<&str>, f64)> {
        counts::events(&self.scope, &self.table)
    }

    /// The number of events in the distribution
    pub fn num_events(&self) -> usize {
        self.table.len()
    }
}

impl fmt::Display for JointDistribution {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names = self.scope.iter().map(|v| v.name()).join(", ");
        writeln!(f, "P({})", names)?;
        for (event, p) in self.events() {
            writeln!(f, "  ({}) = {:.6}", event.iter().join(", "), p)?;
        }
        Ok(())
    }

}
