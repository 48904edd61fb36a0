//! Defines the `Error` type for the morel library

use std::io;
use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, MorelError>;

#[derive(Debug, Error)]
pub enum MorelError {

    /// A named variable (column, child, feature) that does not exist where it was looked up
    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    /// A value outside the domain of a `Variable`, as established at training time
    #[error("Unknown value ({value}) for variable {variable}")]
    UnknownValue { variable: String, value: String },

    /// An event whose arity does not match the scope of the distribution it was looked up in
    #[error("Event has {found} values, but the scope has {expected} variables")]
    InvalidEvent { expected: usize, found: usize },

    /// Represents an incomplete assignment where a complete assignment was required.
    /// The value is the names of the variables that were missing from the assignment.
    #[error("Missing assignments to the following required variables: {0:?}")]
    IncompleteAssignment(Vec<String>),

    /// Represents a variable that was present multiple times in a situation where it should only
    /// have been present once
    #[error("A variable was encountered twice: {0}")]
    DuplicateVariable(String),

    /// A distribution over zero events
    #[error("Cannot build a distribution over an empty event space")]
    EmptyDistribution,

    /// Exactly what it sounds like
    #[error("Encountered division by zero")]
    DivideByZero,

    /// A smoothing constant that is negative or not finite
    #[error("Invalid smoothing constant: {0}")]
    InvalidSmoothing(f64),

    /// The CPTs handed to a model do not form the expected star topology
    #[error("Invalid model topology: {0}")]
    InvalidTopology(String),

    /// There is not enough data provided
    #[error("Not enough data has been provided")]
    NotEnoughData,

    /// The training data is not a complete, rectangular table
    #[error("Malformed data: {0}")]
    MalformedData(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    /// A general error with the given description
    #[error("{0}")]
    General(String),

}
