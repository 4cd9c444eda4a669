//! Edit operation representation

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of step in an edit script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditKind {
    /// Symbol is present in both sequences
    Keep,
    /// Symbol is only in the old sequence
    Delete,
    /// Symbol is only in the new sequence
    Insert,
}

impl EditKind {
    /// Single-character marker used in unified-style output
    pub fn marker(self) -> char {
        match self {
            EditKind::Keep => ' ',
            EditKind::Delete => '-',
            EditKind::Insert => '+',
        }
    }

    /// Check if this is an actual change (not a kept symbol)
    pub fn is_change(self) -> bool {
        self != EditKind::Keep
    }

    /// The same step seen from the other side of the comparison
    pub fn inverse(self) -> Self {
        match self {
            EditKind::Keep => EditKind::Keep,
            EditKind::Delete => EditKind::Insert,
            EditKind::Insert => EditKind::Delete,
        }
    }
}

/// One step of an edit script together with the symbol it concerns
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edit<T> {
    pub kind: EditKind,
    pub symbol: T,
}

impl<T> Edit<T> {
    pub fn new(kind: EditKind, symbol: T) -> Self {
        Self { kind, symbol }
    }

    pub fn is_change(&self) -> bool {
        self.kind.is_change()
    }
}

impl<T: fmt::Display> fmt::Display for Edit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.marker(), self.symbol)
    }
}

/// Record type produced by the backtracker.
///
/// Implement this to have a comparator emit records in a caller-defined
/// shape instead of [`Edit`].
pub trait EditRecord<T> {
    fn keep(symbol: T) -> Self;
    fn delete(symbol: T) -> Self;
    fn insert(symbol: T) -> Self;
}

impl<T> EditRecord<T> for Edit<T> {
    fn keep(symbol: T) -> Self {
        Edit::new(EditKind::Keep, symbol)
    }

    fn delete(symbol: T) -> Self {
        Edit::new(EditKind::Delete, symbol)
    }

    fn insert(symbol: T) -> Self {
        Edit::new(EditKind::Insert, symbol)
    }
}

impl<T> EditRecord<T> for (EditKind, T) {
    fn keep(symbol: T) -> Self {
        (EditKind::Keep, symbol)
    }

    fn delete(symbol: T) -> Self {
        (EditKind::Delete, symbol)
    }

    fn insert(symbol: T) -> Self {
        (EditKind::Insert, symbol)
    }
}
