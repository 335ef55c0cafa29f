//! Error types for registry operations.

use thiserror::Error;
use xlpricer_models::analytical::AnalyticalError;

/// Registry dispatch errors.
///
/// # Examples
/// ```
/// use xlpricer_registry::RegistryError;
///
/// let err = RegistryError::UnknownFunction { name: "xlpricer.Nope".to_string() };
/// assert!(format!("{}", err).contains("xlpricer.Nope"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    /// No function registered under the requested name.
    #[error("Unknown function: {name}")]
    UnknownFunction {
        /// The requested external name
        name: String,
    },

    /// Argument count does not match the registered arity.
    #[error("{name} expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        /// The external name invoked
        name: String,
        /// Registered arity
        expected: usize,
        /// Number of arguments supplied
        actual: usize,
    },

    /// A function is already registered under this name.
    #[error("Duplicate registration: {name}")]
    DuplicateName {
        /// The already-registered external name
        name: String,
    },

    /// The dispatched pricing function rejected its inputs.
    #[error(transparent)]
    Pricing(#[from] AnalyticalError),
}
