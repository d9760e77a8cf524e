use thiserror::Error;

use super::value_objects::NameField;

/// Reasons a registration is refused
///
/// Both are expected boundary conditions: the roster is left untouched
/// and the caller decides how to surface them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("The board is full ({capacity}/{capacity} players)")]
    CapacityExceeded { capacity: usize },

    #[error("The {field} cannot be empty")]
    InvalidName { field: NameField },
}

pub type RegistrationResult<T> = Result<T, RegistrationError>;
