use std::collections::HashMap;

/// A bidirectional, insertion-ordered map between strings and dense indices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringMap {
    /// Map from string to index
    str_to_id: HashMap<String, usize>,
    /// Map from index to string
    id_to_str: Vec<String>,
}

impl StringMap {
    /// Create a new empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map holding `values` in iteration order, duplicates collapsed
    pub fn with_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for value in values {
            map.add(value.as_ref());
        }
        map
    }

    /// Get the number of entries in the map
    pub fn len(&self) -> usize {
        self.id_to_str.len()
    }

    /// Returns `true` if the map contains no entries
    pub fn is_empty(&self) -> bool {
        self.id_to_str.is_empty()
    }

    /// Append `s` unless it is already present
    ///
    /// Re-adding an existing string keeps its original index.
    pub fn add(&mut self, s: &str) {
        if !self.str_to_id.contains_key(s) {
            let id = self.id_to_str.len();
            self.str_to_id.insert(s.to_string(), id);
            self.id_to_str.push(s.to_string());
        }
    }

    /// Index of `s`, if present
    pub fn get_int(&self, s: &str) -> Option<usize> {
        self.str_to_id.get(s).copied()
    }

    /// String stored at index `i`
    pub fn get_string(&self, i: usize) -> Option<&str> {
        self.id_to_str.get(i).map(String::as_str)
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.str_to_id.clear();
        self.id_to_str.clear();
    }

    /// Iterate over all (string, index) pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.id_to_str
            .iter()
            .enumerate()
            .map(|(id, s)| (s.as_str(), id))
    }
}
