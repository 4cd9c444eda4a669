//! Full-history comparator
//!
//! Keeps every wavefront of the search and re-derives each branch decision
//! from the predecessor wavefront while backtracking. Scripts are identical
//! to [`Comparator`](crate::Comparator); memory grows with `D²` positions
//! instead of `D²` bits.

use crate::backtrack::{backtrack, Decisions};
use crate::comparator::{CompareError, Diff};
use crate::edit::EditRecord;
use crate::index::{check_capacity, IndexWidth};
use crate::profile::{MemoryTracker, Noop};
use crate::view::SequenceView;
use crate::wavefront::{choose, expand, Branch, Frontier, Wavefront};
use std::marker::PhantomData;

#[derive(Debug, Clone)]
pub struct HistoryComparator<M = Noop, I = u32> {
    tracker: M,
    width: PhantomData<I>,
}

impl HistoryComparator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: MemoryTracker + Default, I: IndexWidth> Default for HistoryComparator<M, I> {
    fn default() -> Self {
        Self {
            tracker: M::default(),
            width: PhantomData,
        }
    }
}

impl<M: MemoryTracker> HistoryComparator<M> {
    pub fn with_tracker(tracker: M) -> Self {
        Self {
            tracker,
            width: PhantomData,
        }
    }
}

impl<M: MemoryTracker, I: IndexWidth> HistoryComparator<M, I> {
    pub fn with_width<J: IndexWidth>(self) -> HistoryComparator<M, J> {
        HistoryComparator {
            tracker: self.tracker,
            width: PhantomData,
        }
    }

    pub fn tracker(&self) -> &M {
        &self.tracker
    }
}

impl<M: MemoryTracker, I: IndexWidth> Diff for HistoryComparator<M, I> {
    fn compare_with<R, A, B>(&mut self, a: &A, b: &B) -> Result<Vec<R>, CompareError>
    where
        A: SequenceView + ?Sized,
        B: SequenceView<Symbol = A::Symbol> + ?Sized,
        A::Symbol: Clone,
        R: EditRecord<A::Symbol>,
    {
        check_capacity::<I>(a.len(), b.len())?;

        let mut history = History::<I>::default();
        let distance = expand(a, b, &mut history, &mut self.tracker);
        log::debug!(
            "compared {} x {} symbols: distance {}, {} wavefronts kept",
            a.len(),
            b.len(),
            distance,
            history.wavefronts.len()
        );
        Ok(backtrack(a, b, distance, &history))
    }

    fn memory(&self) -> usize {
        self.tracker.total()
    }
}

#[derive(Debug, Default)]
struct History<I> {
    wavefronts: Vec<Wavefront<I>>,
}

impl<I: IndexWidth> Frontier for History<I> {
    type Index = I;

    fn advance<M: MemoryTracker>(&mut self, depth: usize, tracker: &mut M) {
        let wavefront = Wavefront::with_depth(depth);
        tracker.record(wavefront.bytes());
        self.wavefronts.push(wavefront);
    }

    fn previous(&self) -> &Wavefront<I> {
        &self.wavefronts[self.wavefronts.len() - 2]
    }

    fn current_mut(&mut self) -> &mut Wavefront<I> {
        let last = self.wavefronts.len() - 1;
        &mut self.wavefronts[last]
    }

    fn branch(&mut self, _branch: Branch) {}
}

impl<I: IndexWidth> Decisions for History<I> {
    fn decide(&self, depth: usize, k: isize) -> Branch {
        choose(&self.wavefronts[depth - 1], k).0
    }
}
