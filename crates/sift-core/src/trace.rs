//! Compact record of branch decisions, one bit group per depth

use crate::backtrack::Decisions;
use crate::wavefront::{Branch, Wavefront};
use bitvec::vec::BitVec;

/// Append-only stack of bit groups.
///
/// Group `d` holds one bit per diagonal visited at depth `d`, skipping the
/// first diagonal `-d` whose predecessor is forced. A set bit means the
/// insert branch was taken.
#[derive(Debug, Clone, Default)]
pub struct StepTrace {
    groups: Vec<BitVec>,
}

impl StepTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the group for the next depth and return its size in bytes.
    pub fn open(&mut self, depth: usize) -> usize {
        debug_assert_eq!(depth, self.groups.len(), "depths must be opened in order");
        self.groups.push(BitVec::with_capacity(depth));
        depth.div_ceil(8)
    }

    /// Record a decision in the most recently opened group
    pub fn push(&mut self, branch: Branch) {
        if let Some(group) = self.groups.last_mut() {
            group.push(branch == Branch::Insert);
        }
    }

    /// Number of depths opened so far
    pub fn depths(&self) -> usize {
        self.groups.len()
    }

    /// Total bits recorded across all depths
    pub fn bits(&self) -> usize {
        self.groups.iter().map(|group| group.len()).sum()
    }

    /// Bits recorded at one depth
    pub fn bits_at(&self, depth: usize) -> usize {
        self.groups.get(depth).map_or(0, |group| group.len())
    }
}

impl Decisions for StepTrace {
    fn decide(&self, depth: usize, k: isize) -> Branch {
        if k == -(depth as isize) {
            return Branch::Insert;
        }
        let bit = Wavefront::<usize>::slot(depth, k) - 1;
        if self.groups[depth][bit] {
            Branch::Insert
        } else {
            Branch::Delete
        }
    }
}
