//! Error handling for FretCAD
//!
//! The viewport engine itself is total (every operation is a pure state
//! transition on numbers), so errors only arise at the edges:
//! - Unit errors (unknown unit labels, unparsable measurement systems)
//! - Layer errors (operations addressed to an id that is not in the tree)
//! - Parameter errors (operations addressed to an unknown parameter)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Unit conversion error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// The unit label is not part of the conversion table
    #[error("Unknown unit: {unit}")]
    UnknownUnit {
        /// The unit label that was not recognised.
        unit: String,
    },

    /// The measurement system name could not be parsed
    #[error("Unknown measurement system: {name}")]
    UnknownSystem {
        /// The name that failed to parse.
        name: String,
    },
}

/// Layer tree error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayerError {
    /// No node with this id exists in the tree
    #[error("Unknown layer: {id}")]
    UnknownLayer {
        /// The id that was looked up.
        id: String,
    },

    /// The operation only applies to leaf layers
    #[error("{id} is a group, not a layer")]
    NotALayer {
        /// The id of the group node.
        id: String,
    },
}

/// Parameter error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// No parameter with this id exists
    #[error("Unknown parameter: {id}")]
    UnknownParameter {
        /// The id that was looked up.
        id: String,
    },
}

/// Main error type for FretCAD
///
/// A unified error type that can represent any error from the core crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Unit error
    #[error(transparent)]
    Unit(#[from] UnitError),

    /// Layer error
    #[error(transparent)]
    Layer(#[from] LayerError),

    /// Parameter error
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a layer error
    pub fn is_layer_error(&self) -> bool {
        matches!(self, Error::Layer(_))
    }

    /// Check if this is a parameter error
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, Error::Parameter(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
