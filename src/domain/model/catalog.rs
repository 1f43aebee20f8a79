//! Catalog - ordered entity list with uniqueness-checked id lookup.

use std::collections::HashMap;

use super::Entity;
use crate::domain::foundation::ModelError;

/// An ordered list of entities whose ids are guaranteed unique.
///
/// Order is the order of appearance in the source document and is the order
/// every downstream table and output document follows.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Entity> Catalog<T> {
    /// Builds a catalog, rejecting the first repeated id.
    pub fn new(entries: Vec<T>) -> Result<Self, ModelError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.id_str().to_string(), position).is_some() {
                return Err(ModelError::duplicate(T::KIND, entry.id_str()));
            }
        }
        Ok(Self { entries, index })
    }

    /// Returns the position of the entity with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Like [`position`](Self::position) but reports an unknown id as an error.
    pub fn resolve(&self, id: &str) -> Result<usize, ModelError> {
        self.position(id)
            .ok_or_else(|| ModelError::unknown(T::KIND, id))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
