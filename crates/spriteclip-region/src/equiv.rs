//! Label equivalence table
//!
//! A union-find over [`Label`]s. Each class is represented by the smallest
//! label id ever placed in it: a merge always hangs the larger
//! representative under the smaller one, so the outcome depends only on
//! which labels were merged, never on the order of the calls.
//!
//! Parents live in a dense vector indexed by label id, relative to the
//! lowest id the table was restarted at. A slot holding 0 has not been
//! registered.
//!
//! ```
//! use spriteclip_region::{EquivalenceTable, Label};
//!
//! let l = |id| Label::new(id).unwrap();
//! let mut table = EquivalenceTable::new();
//! for id in 1..=6 {
//!     table.register(l(id));
//! }
//! table.merge(l(2), l(4)).unwrap();
//! table.merge(l(4), l(5)).unwrap();
//! table.merge(l(1), l(6)).unwrap();
//!
//! assert_eq!(table.representative(l(5)).unwrap(), l(2));
//! assert_eq!(table.representative(l(6)).unwrap(), l(1));
//! ```

use crate::error::{RegionError, RegionResult};
use crate::label::Label;

const UNREGISTERED: u32 = 0;

/// Union-find over labels with minimum-id representatives.
#[derive(Debug, Clone, Default)]
pub struct EquivalenceTable {
    /// `parent[id - 1 - offset]` is the parent id of label `id`
    parent: Vec<u32>,
    /// Ids up to and including `offset` have no slot
    offset: u32,
    /// Number of registered labels
    registered: usize,
}

impl EquivalenceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with room for `capacity` label ids.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parent: Vec::with_capacity(capacity),
            offset: 0,
            registered: 0,
        }
    }

    /// Insert `label` as its own class.
    ///
    /// Idempotent: returns `false` and changes nothing if the label is
    /// already present.
    pub fn register(&mut self, label: Label) -> bool {
        if label.id() <= self.offset {
            let new_offset = label.id() - 1;
            let shift = (self.offset - new_offset) as usize;
            self.parent
                .splice(0..0, std::iter::repeat_n(UNREGISTERED, shift));
            self.offset = new_offset;
        }
        let idx = self.slot(label.id());
        if idx >= self.parent.len() {
            self.parent.resize(idx + 1, UNREGISTERED);
        }
        if self.parent[idx] != UNREGISTERED {
            return false;
        }
        self.parent[idx] = label.id();
        self.registered += 1;
        true
    }

    /// Check whether `label` has been registered.
    pub fn contains(&self, label: Label) -> bool {
        label.id() > self.offset
            && self
                .parent
                .get(self.slot(label.id()))
                .is_some_and(|&p| p != UNREGISTERED)
    }

    /// Slot of a label id; only meaningful for ids above `offset`.
    #[inline]
    fn slot(&self, id: u32) -> usize {
        (id - 1 - self.offset) as usize
    }

    /// Number of registered labels.
    pub fn len(&self) -> usize {
        self.registered
    }

    /// Check whether no label has been registered.
    pub fn is_empty(&self) -> bool {
        self.registered == 0
    }

    /// Find the representative of `label`'s class.
    ///
    /// Resolution is iterative. Every label visited on the way is then
    /// pointed straight at the representative, so long chains built by
    /// many merges flatten after the first lookup.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::UnregisteredLabel`] if `label` was never
    /// registered.
    pub fn representative(&mut self, label: Label) -> RegionResult<Label> {
        let root = self.find_root(label)?;

        let mut current = label.id();
        while current != root {
            let slot = self.slot(current);
            let next = self.parent[slot];
            self.parent[slot] = root;
            current = next;
        }

        Label::new(root).ok_or(RegionError::UnregisteredLabel(label.id()))
    }

    /// Find the representative without compressing the path.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::UnregisteredLabel`] if `label` was never
    /// registered.
    pub fn peek_representative(&self, label: Label) -> RegionResult<Label> {
        let root = self.find_root(label)?;
        Label::new(root).ok_or(RegionError::UnregisteredLabel(label.id()))
    }

    fn find_root(&self, label: Label) -> RegionResult<u32> {
        if !self.contains(label) {
            return Err(RegionError::UnregisteredLabel(label.id()));
        }
        let mut root = label.id();
        loop {
            let parent = self.parent[self.slot(root)];
            if parent == root {
                return Ok(root);
            }
            root = parent;
        }
    }

    /// Declare `a` and `b` equivalent.
    ///
    /// Both are resolved to their representatives first; if those differ,
    /// the larger one is re-parented under the smaller one. Returns
    /// whether two classes were actually joined.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::UnregisteredLabel`] if either label was never
    /// registered.
    pub fn merge(&mut self, a: Label, b: Label) -> RegionResult<bool> {
        let ra = self.representative(a)?;
        let rb = self.representative(b)?;
        if ra == rb {
            return Ok(false);
        }
        let (min, max) = if ra < rb { (ra, rb) } else { (rb, ra) };
        let slot = self.slot(max.id());
        self.parent[slot] = min.id();
        tracing::trace!("merged {} into {}", max.id(), min.id());
        Ok(true)
    }

    /// Number of distinct classes among the registered labels.
    pub fn class_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(idx, &p)| p as usize == idx + 1 + self.offset as usize)
            .count()
    }

    /// Forget every label.
    pub fn clear(&mut self) {
        self.restart_at(1);
    }

    /// Forget every label and index new ones from `first_id`.
    ///
    /// Ids below `first_id` take no space, so a table that follows a
    /// label counter across runs stays sized to the current run.
    pub fn restart_at(&mut self, first_id: u32) {
        self.parent.clear();
        self.offset = first_id.saturating_sub(1);
        self.registered = 0;
    }

    /// Number of parent slots currently allocated.
    pub fn slot_count(&self) -> usize {
        self.parent.len()
    }
}
