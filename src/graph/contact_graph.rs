use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::model::Person;

/// The in-memory social network: each person maps to their set of direct
/// contacts. The relation is kept symmetric by always inserting both
/// directions together, and a person appears as a key only once some
/// friendship touches them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactGraph {
    network: HashMap<Person, HashSet<Person>>,
}

impl ContactGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a bidirectional friendship. Re-adding an existing friendship
    /// is a no-op. `a == b` is allowed and puts the person in their own
    /// contact set.
    pub fn add_friendship(&mut self, a: Person, b: Person) {
        self.network.entry(a.clone()).or_default().insert(b.clone());
        self.network.entry(b).or_default().insert(a);
    }

    /// The direct contacts of `person`. Unknown people get an empty set;
    /// the lookup never inserts a key.
    pub fn friends_of(&self, person: &Person) -> HashSet<Person> {
        self.network.get(person).cloned().unwrap_or_default()
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.network.contains_key(person)
    }

    /// Borrowing neighbor iterator for traversals. Empty for unknown keys.
    pub fn neighbors<'g>(&'g self, person: &Person) -> impl Iterator<Item = &'g Person> + 'g {
        self.network.get(person).into_iter().flatten()
    }

    /// Everyone a friendship has ever touched, in no particular order.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.network.keys()
    }

    pub fn person_count(&self) -> usize {
        self.network.len()
    }

    pub fn is_empty(&self) -> bool {
        self.network.is_empty()
    }

    /// Number of distinct friendships. Each ordinary friendship appears in
    /// two contact sets; a self-friendship appears in one.
    pub fn friendship_count(&self) -> usize {
        let directed: usize = self.network.values().map(HashSet::len).sum();
        let self_loops = self
            .network
            .iter()
            .filter(|(person, friends)| friends.contains(*person))
            .count();
        (directed + self_loops) / 2
    }
}
