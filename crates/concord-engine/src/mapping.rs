//! Type mapping table shared with the column phase.
//!
//! Holds the seed mappings plus everything synthesized during the run. Only
//! mappings the column phase actually touched end up in the report, in the
//! order they were first touched.

use std::collections::HashSet;

use concord_core::mapping::Mapping;

#[derive(Debug, Default)]
pub struct MappingTable {
    entries: Vec<Mapping>,
    touched: Vec<usize>,
    seen: HashSet<usize>,
}

impl MappingTable {
    /// Build a table from seed mappings. The first seed wins when two seeds
    /// refer to the same `(table, column)`.
    #[must_use]
    pub fn from_seeds(seeds: Vec<Mapping>) -> Self {
        let mut table = Self::default();
        for seed in seeds {
            if table.position(&seed.table, &seed.column).is_some() {
                tracing::debug!(
                    table = %seed.table,
                    column = %seed.column,
                    "ignoring duplicate seed mapping"
                );
                continue;
            }
            table.entries.push(seed);
        }
        table
    }

    fn position(&self, table: &str, column: &str) -> Option<usize> {
        self.entries.iter().position(|m| m.refers_to(table, column))
    }

    #[must_use]
    pub fn find(&self, table: &str, column: &str) -> Option<&Mapping> {
        self.position(table, column).map(|idx| &self.entries[idx])
    }

    /// Insert `mapping`, replacing any entry for the same column in place.
    pub fn upsert(&mut self, mapping: Mapping) {
        if let Some(idx) = self.position(&mapping.table, &mapping.column) {
            self.entries[idx] = mapping;
        } else {
            self.entries.push(mapping);
        }
    }

    /// Mark the mapping for `(table, column)` as used by this run. Returns
    /// `false` if no such mapping exists.
    pub fn record(&mut self, table: &str, column: &str) -> bool {
        let Some(idx) = self.position(table, column) else {
            return false;
        };
        if self.seen.insert(idx) {
            self.touched.push(idx);
        }
        true
    }

    /// The mappings touched by this run, in first-touch order.
    #[must_use]
    pub fn into_touched(self) -> Vec<Mapping> {
        let mut entries: Vec<Option<Mapping>> = self.entries.into_iter().map(Some).collect();
        self.touched
            .into_iter()
            .filter_map(|idx| entries[idx].take())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
