//! The layout: every slot assignment across all fixtures and shelf levels.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::SlotAssignment;

/// Identifies one (fixture, shelf level) pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LevelKey {
    /// Fixture identifier.
    pub fixture_id: String,
    /// Shelf-level identifier within the fixture.
    pub level_id: String,
}

/// The complete assignment of products to ordinal positions.
///
/// Assignments are normalized to (fixture, level, position) order on
/// construction, so two layouts with the same content compare equal
/// regardless of the row order they were built from. The normalization is
/// stable: rows sharing a position keep their relative input order.
///
/// A `Layout` is a value. Candidates are produced by cloning and
/// reconstructing, never by mutating in place, so the previous layout stays
/// valid until the caller replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<SlotAssignment>", into = "Vec<SlotAssignment>")
)]
pub struct Layout {
    assignments: Vec<SlotAssignment>,
}

impl Layout {
    /// Builds a layout from ingested slot-assignment rows.
    pub fn new(mut assignments: Vec<SlotAssignment>) -> Self {
        assignments.sort_by(|a, b| {
            (&a.fixture_id, &a.level_id, a.position).cmp(&(
                &b.fixture_id,
                &b.level_id,
                b.position,
            ))
        });
        Self { assignments }
    }

    /// All assignments in normalized order.
    pub fn assignments(&self) -> &[SlotAssignment] {
        &self.assignments
    }

    /// Number of slot assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the layout holds no assignments at all.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Assignments grouped per (fixture, shelf level), ordered by position
    /// within each group.
    ///
    /// Group iteration order is deterministic (sorted by key), which keeps
    /// seeded perturbation reproducible.
    pub fn grouped(&self) -> BTreeMap<LevelKey, Vec<&SlotAssignment>> {
        let mut groups: BTreeMap<LevelKey, Vec<&SlotAssignment>> = BTreeMap::new();
        for assignment in &self.assignments {
            groups
                .entry(LevelKey {
                    fixture_id: assignment.fixture_id.clone(),
                    level_id: assignment.level_id.clone(),
                })
                .or_default()
                .push(assignment);
        }
        groups
    }

    /// Same grouping as [`Layout::grouped`], but as indices into
    /// [`Layout::assignments`]. Lets the perturbation operator address slots
    /// in a mutable copy of the assignment vector.
    pub(crate) fn grouped_indices(&self) -> BTreeMap<LevelKey, Vec<usize>> {
        let mut groups: BTreeMap<LevelKey, Vec<usize>> = BTreeMap::new();
        for (index, assignment) in self.assignments.iter().enumerate() {
            groups
                .entry(LevelKey {
                    fixture_id: assignment.fixture_id.clone(),
                    level_id: assignment.level_id.clone(),
                })
                .or_default()
                .push(index);
        }
        groups
    }
}

impl From<Vec<SlotAssignment>> for Layout {
    fn from(assignments: Vec<SlotAssignment>) -> Self {
        Self::new(assignments)
    }
}

impl From<Layout> for Vec<SlotAssignment> {
    fn from(layout: Layout) -> Self {
        layout.assignments
    }
}
