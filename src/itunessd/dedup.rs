//! Artist/album deduplication tables

use std::collections::HashMap;

/// Append-only label → ID table
///
/// IDs are zero-based and follow first-seen order, so the table must be fed
/// tracks in the final database order.
#[derive(Debug, Default, Clone)]
pub struct DedupTable {
    labels: Vec<String>,
    ids: HashMap<String, u32>,
}

impl DedupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a label, appending it if it has not been seen yet
    pub fn resolve(&mut self, label: &str) -> u32 {
        if let Some(id) = self.ids.get(label) {
            return *id;
        }
        let id = self.labels.len() as u32;
        self.labels.push(label.to_string());
        self.ids.insert(label.to_string(), id);
        id
    }

    /// Labels in ID order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
