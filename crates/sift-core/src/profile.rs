//! Memory accounting for wavefront and trace storage
//!
//! Comparators report every allocation of a wavefront or bit group to a
//! [`MemoryTracker`]. [`Noop`] discards the numbers, [`Counting`] keeps a
//! per-comparator total and [`Shared`] adds into a counter that several
//! comparators, possibly on different threads, can hold at once.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub trait MemoryTracker {
    /// Attribute `bytes` of newly allocated storage
    fn record(&mut self, bytes: usize);

    /// Cumulative bytes recorded since construction
    fn total(&self) -> usize;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Noop;

impl MemoryTracker for Noop {
    fn record(&mut self, _bytes: usize) {}

    fn total(&self) -> usize {
        0
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Counting {
    bytes: usize,
}

impl Counting {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MemoryTracker for Counting {
    fn record(&mut self, bytes: usize) {
        self.bytes = self.bytes.saturating_add(bytes);
    }

    fn total(&self) -> usize {
        self.bytes
    }
}

/// Counter shared between clones, for aggregate reporting
#[derive(Debug, Default, Clone)]
pub struct Shared {
    bytes: Arc<AtomicUsize>,
}

impl Shared {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MemoryTracker for Shared {
    fn record(&mut self, bytes: usize) {
        self.bytes.fetch_add(bytes, Ordering::Relaxed);
    }

    fn total(&self) -> usize {
        self.bytes.load(Ordering::Relaxed)
    }
}
