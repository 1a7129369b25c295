//! Second pass: blob assembly
//!
//! Re-walks a [`LabelGrid`] once all merges are recorded, resolves each
//! labeled cell to its representative and folds the pixel into that
//! representative's [`Blob`].
//!
//! Blobs come out in order of first encounter, which is the row-major
//! order of their anchors.

use crate::blob::Blob;
use crate::equiv::EquivalenceTable;
use crate::error::RegionResult;
use crate::label::Label;
use crate::scan::LabelGrid;
use std::collections::HashMap;

/// Builds blobs from a fully scanned label grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionAssembler {
    retain_points: bool,
}

impl RegionAssembler {
    /// Create an assembler that tracks geometry only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also keep every member pixel in each blob.
    pub fn with_retained_points(mut self, retain: bool) -> Self {
        self.retain_points = retain;
        self
    }

    /// Group the grid's labeled cells into blobs.
    ///
    /// Coordinates in the result are image coordinates (the grid origin
    /// is added back). Must run after scanning has finished: resolving
    /// while merges are still being recorded would split classes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RegionError::UnregisteredLabel`] if the grid holds
    /// a label the table never saw.
    pub fn assemble(
        &self,
        grid: &LabelGrid,
        table: &mut EquivalenceTable,
    ) -> RegionResult<Vec<Blob>> {
        let (ox, oy) = grid.origin();
        let mut blobs: Vec<Blob> = Vec::new();
        let mut registry: HashMap<Label, usize> = HashMap::new();

        for (col, row, label) in grid.iter_labeled() {
            let rep = table.representative(label)?;
            let (x, y) = (ox + col, oy + row);

            match registry.get(&rep) {
                Some(&idx) => blobs[idx].extend(x, y),
                None => {
                    let blob = if self.retain_points {
                        Blob::with_points(rep, x, y)
                    } else {
                        Blob::new(rep, x, y)
                    };
                    registry.insert(rep, blobs.len());
                    blobs.push(blob);
                }
            }
        }

        Ok(blobs)
    }
}
