use std::collections::HashMap;

use crate::board::tools::model::{CardRecord, ChecklistRecord, ListRecord};

/// Implemented by input records that carry a unique identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for ListRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for CardRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for ChecklistRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// An id-keyed view over a slice of records with O(1) resolution and
/// iteration in insertion order of first occurrence. A duplicate id
/// overwrites the stored record in place without moving its position,
/// matching standard key-based map semantics.
#[derive(Debug)]
pub struct IdMap<'a, T> {
    entries: Vec<(&'a str, &'a T)>,
    index: HashMap<&'a str, usize>,
}

impl<'a, T: Identified> IdMap<'a, T> {
    /// Builds the map from an ordered sequence of records. An empty slice
    /// produces an empty map.
    pub fn from_records(records: &'a [T]) -> Self {
        let mut entries: Vec<(&str, &T)> = Vec::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());
        for record in records {
            match index.get(record.id()) {
                Some(&slot) => entries[slot] = (record.id(), record),
                None => {
                    index.insert(record.id(), entries.len());
                    entries.push((record.id(), record));
                }
            }
        }
        Self { entries, index }
    }

    /// Resolves a record by id.
    pub fn get(&self, id: &str) -> Option<&'a T> {
        self.index.get(id).map(|&slot| self.entries[slot].1)
    }

    /// Iterates `(id, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a T)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
