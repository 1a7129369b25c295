//! Provisional labels
//!
//! Every foreground pixel receives a `Label` during scanning. Labels are
//! minted in increasing order by a [`LabelGenerator`] scoped to one
//! detector, so ids are totally ordered by creation time.

use crate::error::{RegionError, RegionResult};
use std::fmt;
use std::num::NonZeroU32;

/// An opaque, totally ordered label id.
///
/// Backed by `NonZeroU32` so that `Option<Label>` stays one word wide in
/// the label grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(NonZeroU32);

impl Label {
    /// Create a label from its numeric id.
    ///
    /// Returns `None` for 0, which is never a valid label.
    pub fn new(id: u32) -> Option<Self> {
        NonZeroU32::new(id).map(Self)
    }

    /// Numeric id.
    #[inline]
    pub fn id(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sprite_{}", self.0)
    }
}

/// Monotonic label source, starting at 1.
#[derive(Debug, Clone)]
pub struct LabelGenerator {
    next: u32,
}

impl Default for LabelGenerator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl LabelGenerator {
    /// Create a generator whose first label is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next label.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::LabelOverflow`] once every `u32` id is used.
    pub fn next_label(&mut self) -> RegionResult<Label> {
        let label = Label::new(self.next).ok_or(RegionError::LabelOverflow)?;
        // 0 marks exhaustion: Label::new(0) fails on the following call
        self.next = self.next.wrapping_add(1);
        Ok(label)
    }

    /// The id the next call to [`next_label`](Self::next_label) will mint.
    pub fn peek(&self) -> u32 {
        self.next
    }

    /// Restart numbering at 1.
    pub fn reset(&mut self) {
        self.next = 1;
    }
}
