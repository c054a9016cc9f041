//! Grid adjacencies that must not be joined during coloring.

use std::collections::{BTreeSet, HashSet};

use crate::hierarchy::LevelId;

/// Level-2 tile pairs that separate North and South America.
///
/// The only land connection runs through the Darien Gap, which has no
/// passable roads and no ferries, so these neighboring tiles are kept apart.
pub const DARIEN_GAP_EXCLUSIONS: [(u32, u32); 5] = [
    (563_449, 563_450),
    (563_450, 563_451),
    (563_451, 564_891),
    (564_891, 564_892),
    (566_331, 566_332),
];

/// Unordered pairs of tile indices that are never treated as adjacent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionTable {
    pairs: HashSet<(u32, u32)>,
}

impl ExclusionTable {
    /// An empty table: every grid adjacency is honoured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a list of pairs. Order within a pair is irrelevant.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u32, u32)>) -> Self {
        let mut table = Self::new();
        for (a, b) in pairs {
            table.insert(a, b);
        }
        table
    }

    /// The built-in table for the standard hierarchy.
    pub fn darien_gap() -> Self {
        Self::from_pairs(DARIEN_GAP_EXCLUSIONS)
    }

    /// Add a pair. Returns `false` if it was already present.
    pub fn insert(&mut self, a: u32, b: u32) -> bool {
        self.pairs.insert(ordered(a, b))
    }

    /// Whether the adjacency between `a` and `b` is excluded.
    #[inline]
    pub fn excludes(&self, a: u32, b: u32) -> bool {
        !self.pairs.is_empty() && self.pairs.contains(&ordered(a, b))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in ascending order, smaller index first.
    pub fn pairs(&self) -> Vec<(u32, u32)> {
        let mut pairs: Vec<(u32, u32)> = self.pairs.iter().copied().collect();
        pairs.sort_unstable();
        pairs
    }
}

#[inline]
fn ordered(a: u32, b: u32) -> (u32, u32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Which exclusion table applies to which level.
///
/// Levels not listed get an empty table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionPolicy {
    table: ExclusionTable,
    levels: BTreeSet<LevelId>,
    unrestricted: ExclusionTable,
}

impl ExclusionPolicy {
    /// Apply `table` to each of `levels`.
    pub fn new(table: ExclusionTable, levels: impl IntoIterator<Item = LevelId>) -> Self {
        Self {
            table,
            levels: levels.into_iter().collect(),
            unrestricted: ExclusionTable::new(),
        }
    }

    /// No exclusions on any level.
    pub fn none() -> Self {
        Self::new(ExclusionTable::new(), [])
    }

    /// The table that applies to `level`.
    pub fn table_for(&self, level: LevelId) -> &ExclusionTable {
        if self.levels.contains(&level) {
            &self.table
        } else {
            &self.unrestricted
        }
    }

    /// Levels the table applies to.
    pub fn levels(&self) -> impl Iterator<Item = LevelId> + '_ {
        self.levels.iter().copied()
    }

    /// The table itself, regardless of level.
    pub fn table(&self) -> &ExclusionTable {
        &self.table
    }
}

impl Default for ExclusionPolicy {
    /// Darien Gap table on the local road level and the transit level.
    fn default() -> Self {
        Self::new(
            ExclusionTable::darien_gap(),
            [LevelId::Numbered(2), LevelId::Transit],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_are_unordered() {
        let table = ExclusionTable::from_pairs([(2, 1)]);
        assert!(table.excludes(1, 2));
        assert!(table.excludes(2, 1));
        assert!(!table.excludes(2, 3));
    }

    #[test]
    fn test_insert_deduplicates_reversed_pairs() {
        let mut table = ExclusionTable::new();
        assert!(table.insert(5, 9));
        assert!(!table.insert(9, 5));
        assert_eq!(table.len(), 1);
        assert_eq!(table.pairs(), vec![(5, 9)]);
    }

    #[test]
    fn test_darien_gap_table() {
        let table = ExclusionTable::darien_gap();
        assert_eq!(table.len(), 5);
        assert!(table.excludes(563_450, 563_449));
        assert!(table.excludes(564_891, 563_451));
    }

    #[test]
    fn test_default_policy_levels() {
        let policy = ExclusionPolicy::default();
        assert_eq!(policy.table_for(LevelId::Numbered(2)).len(), 5);
        assert_eq!(policy.table_for(LevelId::Transit).len(), 5);
        assert!(policy.table_for(LevelId::Numbered(0)).is_empty());
        assert!(policy.table_for(LevelId::Numbered(1)).is_empty());
    }

    #[test]
    fn test_none_policy() {
        let policy = ExclusionPolicy::none();
        assert!(policy.table_for(LevelId::Numbered(2)).is_empty());
        assert_eq!(policy.levels().count(), 0);
    }
}
