use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque person identifier. The name itself is the identity; there is
/// no surrogate id behind it, so two `Person`s are the same person exactly
/// when their names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Person(String);

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Person {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Person {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_is_same_person() {
        assert_eq!(Person::from("Alice"), Person::new("Alice".to_string()));
    }

    #[test]
    fn different_names_differ() {
        assert_ne!(Person::from("Alice"), Person::from("alice"));
    }

    #[test]
    fn displays_as_bare_name() {
        assert_eq!(Person::from("Bob").to_string(), "Bob");
    }

    #[test]
    fn serde_roundtrip() {
        let person = Person::from("Janice");
        let json = serde_json::to_string(&person).unwrap();
        assert_eq!(json, "\"Janice\"");
        let back: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(back, person);
    }
}
