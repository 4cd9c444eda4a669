//! Comparator facade: expand, record, backtrack

use crate::backtrack::backtrack;
use crate::edit::{Edit, EditRecord};
use crate::index::{check_capacity, IndexWidth};
use crate::profile::{MemoryTracker, Noop};
use crate::trace::StepTrace;
use crate::view::SequenceView;
use crate::wavefront::{expand, Branch, Frontier, Wavefront};
use std::marker::PhantomData;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("combined length {old_len} + {new_len} does not fit the {width} index width")]
    IndexOverflow {
        old_len: usize,
        new_len: usize,
        width: &'static str,
    },
}

/// A shortest-edit-script strategy
pub trait Diff {
    /// Compare `a` against `b`, emitting records of type `R`
    fn compare_with<R, A, B>(&mut self, a: &A, b: &B) -> Result<Vec<R>, CompareError>
    where
        A: SequenceView + ?Sized,
        B: SequenceView<Symbol = A::Symbol> + ?Sized,
        A::Symbol: Clone,
        R: EditRecord<A::Symbol>;

    /// Cumulative bytes of wavefront and trace storage allocated so far
    fn memory(&self) -> usize;

    /// Compare `a` against `b` and return the script as [`Edit`]s
    fn compare<A, B>(&mut self, a: &A, b: &B) -> Result<Vec<Edit<A::Symbol>>, CompareError>
    where
        A: SequenceView + ?Sized,
        B: SequenceView<Symbol = A::Symbol> + ?Sized,
        A::Symbol: Clone,
    {
        self.compare_with(a, b)
    }
}

/// The bit-traced Myers comparator.
///
/// Only the live wavefront and its predecessor are kept during the search;
/// each branch decision is recorded as a single bit. `M` selects memory
/// accounting and `I` the width of stored positions, which caps the
/// combined length of the inputs.
#[derive(Debug, Clone)]
pub struct Comparator<M = Noop, I = u32> {
    tracker: M,
    width: PhantomData<I>,
}

impl Comparator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: MemoryTracker + Default, I: IndexWidth> Default for Comparator<M, I> {
    fn default() -> Self {
        Self {
            tracker: M::default(),
            width: PhantomData,
        }
    }
}

impl<M: MemoryTracker> Comparator<M> {
    pub fn with_tracker(tracker: M) -> Self {
        Self {
            tracker,
            width: PhantomData,
        }
    }
}

impl<M: MemoryTracker, I: IndexWidth> Comparator<M, I> {
    /// Switch the index width used for stored positions
    pub fn with_width<J: IndexWidth>(self) -> Comparator<M, J> {
        Comparator {
            tracker: self.tracker,
            width: PhantomData,
        }
    }

    pub fn tracker(&self) -> &M {
        &self.tracker
    }

    /// Run the forward search and return the distance with its trace
    pub fn trace<A, B>(&mut self, a: &A, b: &B) -> Result<(usize, StepTrace), CompareError>
    where
        A: SequenceView + ?Sized,
        B: SequenceView<Symbol = A::Symbol> + ?Sized,
    {
        check_capacity::<I>(a.len(), b.len())?;

        let mut frontier = TraceFrontier::<I>::default();
        let distance = expand(a, b, &mut frontier, &mut self.tracker);
        Ok((distance, frontier.trace))
    }
}

impl<M: MemoryTracker, I: IndexWidth> Diff for Comparator<M, I> {
    fn compare_with<R, A, B>(&mut self, a: &A, b: &B) -> Result<Vec<R>, CompareError>
    where
        A: SequenceView + ?Sized,
        B: SequenceView<Symbol = A::Symbol> + ?Sized,
        A::Symbol: Clone,
        R: EditRecord<A::Symbol>,
    {
        let (distance, trace) = self.trace(a, b)?;
        log::debug!(
            "compared {} x {} symbols: distance {}, {} trace bits over {} depths",
            a.len(),
            b.len(),
            distance,
            trace.bits(),
            trace.depths()
        );
        Ok(backtrack(a, b, distance, &trace))
    }

    fn memory(&self) -> usize {
        self.tracker.total()
    }
}

/// Compare two sequences with the default comparator
pub fn diff<A, B>(a: &A, b: &B) -> Result<Vec<Edit<A::Symbol>>, CompareError>
where
    A: SequenceView + ?Sized,
    B: SequenceView<Symbol = A::Symbol> + ?Sized,
    A::Symbol: Clone,
{
    Comparator::new().compare(a, b)
}

/// Two ping-pong wavefront buffers plus the bit trace
#[derive(Debug, Default)]
struct TraceFrontier<I> {
    previous: Wavefront<I>,
    current: Wavefront<I>,
    trace: StepTrace,
}

impl<I: IndexWidth> Frontier for TraceFrontier<I> {
    type Index = I;

    fn advance<M: MemoryTracker>(&mut self, depth: usize, tracker: &mut M) {
        std::mem::swap(&mut self.previous, &mut self.current);
        tracker.record(self.current.reset(depth));
        tracker.record(self.trace.open(depth));
    }

    fn previous(&self) -> &Wavefront<I> {
        &self.previous
    }

    fn current_mut(&mut self) -> &mut Wavefront<I> {
        &mut self.current
    }

    fn branch(&mut self, branch: Branch) {
        self.trace.push(branch);
    }
}
