//! First pass: provisional labeling
//!
//! The scanner walks a rectangular region in row-major order and gives
//! every foreground pixel a label taken from the already-visited pixels
//! around it. Conflicting labels seen around one pixel are recorded in the
//! [`EquivalenceTable`] and resolved later by the assembler.
//!
//! # Neighbourhood window
//!
//! The window is a square of radius `k` centred on the pixel and clipped
//! to the region. Only cells scanned before the current pixel can carry a
//! label, so the cells actually inspected are, in this order:
//!
//! ```text
//!   row - k .. row - 1 :  col - k ..= col + k
//!   row               :  col - k ..  col
//! ```
//!
//! Two foreground pixels therefore end up in the same class whenever a
//! chain of pixels links them with steps no longer than `k` on either
//! axis. `k = 1` is plain 8-connectivity; larger radii bridge gaps in
//! sparse or anti-aliased artwork.

use crate::equiv::EquivalenceTable;
use crate::error::{RegionError, RegionResult};
use crate::label::{Label, LabelGenerator};
use spriteclip_core::{Box, PixelSource};

/// Per-pixel labels for one scanned region.
///
/// Cells are addressed in region-local coordinates; [`origin`](Self::origin)
/// gives the image position of cell (0, 0).
#[derive(Debug, Clone)]
pub struct LabelGrid {
    origin_x: u32,
    origin_y: u32,
    width: u32,
    height: u32,
    cells: Vec<Option<Label>>,
}

impl LabelGrid {
    /// Create an unlabeled grid covering `width x height` cells whose first
    /// cell sits at image position (`origin_x`, `origin_y`).
    pub fn new(origin_x: u32, origin_y: u32, width: u32, height: u32) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Image position of cell (0, 0).
    pub fn origin(&self) -> (u32, u32) {
        (self.origin_x, self.origin_y)
    }

    #[inline]
    fn index(&self, col: u32, row: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    /// Label of a cell; `None` for background or out-of-grid cells.
    #[inline]
    pub fn get(&self, col: u32, row: u32) -> Option<Label> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells[self.index(col, row)]
    }

    /// Assign a label to a cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the grid.
    #[inline]
    pub fn set(&mut self, col: u32, row: u32, label: Label) {
        let idx = self.index(col, row);
        self.cells[idx] = Some(label);
    }

    /// Number of labeled cells.
    pub fn labeled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Check whether the grid has no labeled cell.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Labeled cells as `(col, row, label)` in row-major order.
    pub fn iter_labeled(&self) -> impl Iterator<Item = (u32, u32, Label)> + '_ {
        let width = self.width.max(1) as usize;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|label| ((i % width) as u32, (i / width) as u32, label))
        })
    }
}

/// Validate `region` against `source` and return it as unsigned
/// `(x, y, w, h)`.
///
/// # Errors
///
/// Returns [`RegionError::RegionOutOfBounds`] if any part of the region
/// lies outside the source. Nothing is clipped.
pub fn validate_region<S: PixelSource + ?Sized>(
    source: &S,
    region: &Box,
) -> RegionResult<(u32, u32, u32, u32)> {
    if !region.fits_within(source.width(), source.height()) {
        return Err(RegionError::RegionOutOfBounds {
            x: region.x,
            y: region.y,
            w: region.w,
            h: region.h,
            width: source.width(),
            height: source.height(),
        });
    }
    Ok((
        region.x as u32,
        region.y as u32,
        region.w as u32,
        region.h as u32,
    ))
}

/// First-pass labeler.
///
/// Borrows the label generator and equivalence table of the detector it
/// runs for; both keep whatever the scan added.
#[derive(Debug)]
pub struct RegionScanner<'a> {
    labels: &'a mut LabelGenerator,
    table: &'a mut EquivalenceTable,
    window_radius: u32,
    merges: usize,
}

impl<'a> RegionScanner<'a> {
    /// Create a scanner with the given neighbourhood radius.
    pub fn new(
        labels: &'a mut LabelGenerator,
        table: &'a mut EquivalenceTable,
        window_radius: u32,
    ) -> Self {
        Self {
            labels,
            table,
            window_radius,
            merges: 0,
        }
    }

    /// Number of class joins recorded so far.
    pub fn merge_count(&self) -> usize {
        self.merges
    }

    /// Label every foreground pixel of `region`.
    ///
    /// A pixel is foreground when it differs from `background`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::RegionOutOfBounds`] for a region outside the
    /// source and [`RegionError::LabelOverflow`] if label ids run out.
    pub fn scan<S: PixelSource + ?Sized>(
        &mut self,
        source: &S,
        region: &Box,
        background: u32,
    ) -> RegionResult<LabelGrid> {
        let (x0, y0, w, h) = validate_region(source, region)?;
        let mut grid = LabelGrid::new(x0, y0, w, h);

        for row in 0..h {
            for col in 0..w {
                if source.pixel_at(x0 + col, y0 + row) == background {
                    continue;
                }
                let label = self.label_from_neighborhood(&grid, col, row)?;
                grid.set(col, row, label);
            }
        }

        Ok(grid)
    }

    /// Pick the label for the foreground cell (`col`, `row`).
    ///
    /// The first labeled neighbour in window order wins; every other
    /// distinct neighbour label is merged with it. With no labeled
    /// neighbour a fresh label is minted and registered.
    fn label_from_neighborhood(
        &mut self,
        grid: &LabelGrid,
        col: u32,
        row: u32,
    ) -> RegionResult<Label> {
        let k = self.window_radius;
        let col_start = col.saturating_sub(k);
        let col_end = col.saturating_add(k).min(grid.width() - 1);
        let row_start = row.saturating_sub(k);

        let mut assigned: Option<Label> = None;

        for r in row_start..=row {
            let cols = if r == row {
                col_start..col
            } else {
                col_start..col_end + 1
            };
            for c in cols {
                let Some(neighbor) = grid.get(c, r) else {
                    continue;
                };
                match assigned {
                    None => assigned = Some(neighbor),
                    Some(current) if current != neighbor => {
                        if self.table.merge(current, neighbor)? {
                            self.merges += 1;
                        }
                    }
                    Some(_) => {}
                }
            }
        }

        match assigned {
            Some(label) => Ok(label),
            None => {
                let label = self.labels.next_label()?;
                self.table.register(label);
                Ok(label)
            }
        }
    }
}
