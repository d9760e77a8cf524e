use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Person name value object (first or last name of a participant)
///
/// # Invariants
/// - Surrounding whitespace is trimmed on construction
/// - Never empty after trimming
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    /// Creates a new PersonName value object
    ///
    /// # Returns
    /// * `Some(PersonName)` - The trimmed name
    /// * `None` - If the input is empty or whitespace only
    ///
    /// # Example
    /// ```
    /// use futsal_board_api::domain::roster::PersonName;
    ///
    /// let name = PersonName::new("  Alice ").expect("valid name");
    /// assert_eq!(name.as_str(), "Alice");
    /// assert!(PersonName::new("   ").is_none());
    /// ```
    pub fn new(name: impl AsRef<str>) -> Option<Self> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PersonName(trimmed.to_string()))
        }
    }

    /// Returns the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of the two name fields a validation failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameField {
    FirstName,
    LastName,
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameField::FirstName => write!(f, "first name"),
            NameField::LastName => write!(f, "last name"),
        }
    }
}

/// Session-unique participant identifier
///
/// Random v4 UUIDs; uniqueness only matters for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(Uuid);

impl ParticipantId {
    /// Generates a fresh identifier
    pub fn generate() -> Self {
        ParticipantId(Uuid::new_v4())
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name() {
        assert_eq!(PersonName::new("Alice").unwrap().as_str(), "Alice");
    }

    #[test]
    fn name_is_trimmed() {
        assert_eq!(PersonName::new("\t Bob \n").unwrap().as_str(), "Bob");
    }

    #[test]
    fn inner_whitespace_kept() {
        assert_eq!(
            PersonName::new(" Jean Pierre ").unwrap().as_str(),
            "Jean Pierre"
        );
    }

    #[test]
    fn empty_name_refused() {
        assert!(PersonName::new("").is_none());
    }

    #[test]
    fn whitespace_only_name_refused() {
        assert!(PersonName::new("   ").is_none());
    }

    #[test]
    fn name_display() {
        let name = PersonName::new("Durand").unwrap();
        assert_eq!(format!("{}", name), "Durand");
    }

    #[test]
    fn name_field_display() {
        assert_eq!(NameField::FirstName.to_string(), "first name");
        assert_eq!(NameField::LastName.to_string(), "last name");
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(ParticipantId::generate(), ParticipantId::generate());
    }
}
