//! Forward Myers search over the edit graph
//!
//! At depth `d` the reachable diagonals are `k = -d, -d + 2, ..., d`, where
//! `k = x - y`. A [`Wavefront`] stores the furthest `x` reached on each of
//! them. [`expand`] grows one wavefront per depth until the end of both
//! sequences is reached and hands every branch decision to a [`Frontier`],
//! which decides what to keep for backtracking.

use crate::index::IndexWidth;
use crate::profile::MemoryTracker;
use crate::view::SequenceView;

/// Which predecessor diagonal a step came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// From diagonal `k + 1`: one symbol of the new sequence consumed
    Insert,
    /// From diagonal `k - 1`: one symbol of the old sequence consumed
    Delete,
}

/// Furthest reach per diagonal at a single depth
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wavefront<I> {
    depth: usize,
    reach: Vec<I>,
}

impl<I: IndexWidth> Wavefront<I> {
    /// Zeroed wavefront for `depth`, with one slot per diagonal
    pub fn with_depth(depth: usize) -> Self {
        Self {
            depth,
            reach: vec![I::default(); depth + 1],
        }
    }

    /// Storage slot of diagonal `k` at `depth`.
    ///
    /// Diagonal `-depth` lands in slot 0 and diagonal `depth` in slot
    /// `depth`. Every diagonal lookup goes through here.
    pub fn slot(depth: usize, k: isize) -> usize {
        let shifted = k + depth as isize;
        debug_assert!(
            shifted >= 0 && shifted <= 2 * depth as isize,
            "diagonal {k} outside depth {depth}"
        );
        debug_assert!(shifted % 2 == 0, "diagonal {k} has wrong parity for depth {depth}");
        (shifted / 2) as usize
    }

    /// Diagonals visited at `depth`, in visiting order
    pub fn diagonals(depth: usize) -> impl Iterator<Item = isize> {
        let depth = depth as isize;
        (-depth..=depth).step_by(2)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Furthest `x` on diagonal `k`
    pub fn reach(&self, k: isize) -> usize {
        self.reach[Self::slot(self.depth, k)].widen()
    }

    pub fn set_reach(&mut self, k: isize, x: usize) {
        let slot = Self::slot(self.depth, k);
        self.reach[slot] = I::narrow(x);
    }

    /// Reuse this buffer for `depth`, returning the bytes newly allocated
    /// to make room for it.
    pub fn reset(&mut self, depth: usize) -> usize {
        let before = self.reach.capacity();
        self.depth = depth;
        self.reach.clear();
        self.reach.resize(depth + 1, I::default());
        self.reach.capacity().saturating_sub(before) * I::bytes()
    }

    /// Bytes held by this wavefront
    pub fn bytes(&self) -> usize {
        self.reach.capacity() * I::bytes()
    }
}

/// Pick the predecessor of diagonal `k` at depth `previous.depth() + 1`.
///
/// Returns the branch taken and the starting `x` before the snake. Ties go
/// to the delete branch: the insert branch wins only at `k == -depth` or
/// when the left neighbour reaches strictly less far than the upper one.
pub fn choose<I: IndexWidth>(previous: &Wavefront<I>, k: isize) -> (Branch, usize) {
    let depth = previous.depth() as isize + 1;
    if k == -depth || (k != depth && previous.reach(k - 1) < previous.reach(k + 1)) {
        (Branch::Insert, previous.reach(k + 1))
    } else {
        (Branch::Delete, previous.reach(k - 1) + 1)
    }
}

/// Wavefront storage driven by [`expand`].
///
/// Implementations decide how much of the search history survives: just
/// the branch bits, or every wavefront.
pub trait Frontier {
    type Index: IndexWidth;

    /// Prepare the wavefront for `depth`; the one completed last becomes
    /// the predecessor.
    fn advance<M: MemoryTracker>(&mut self, depth: usize, tracker: &mut M);

    /// Completed wavefront of the previous depth. Never called at depth 0.
    fn previous(&self) -> &Wavefront<Self::Index>;

    fn current_mut(&mut self) -> &mut Wavefront<Self::Index>;

    /// Called once per visited diagonal except the first of each depth
    fn branch(&mut self, branch: Branch);
}

/// Run the forward search and return the edit distance `D`.
///
/// Expansion stops on the first diagonal that reaches `(m, n)`; the rest of
/// that depth is never visited. Callers must have checked the combined
/// length against the index width.
pub fn expand<A, B, F, M>(a: &A, b: &B, frontier: &mut F, tracker: &mut M) -> usize
where
    A: SequenceView + ?Sized,
    B: SequenceView<Symbol = A::Symbol> + ?Sized,
    F: Frontier,
    M: MemoryTracker,
{
    let (m, n) = (a.len(), b.len());

    for depth in 0..=m + n {
        frontier.advance(depth, tracker);

        for k in Wavefront::<F::Index>::diagonals(depth) {
            let mut x = if depth == 0 {
                0
            } else {
                let (branch, x) = choose(frontier.previous(), k);
                if k != -(depth as isize) {
                    frontier.branch(branch);
                }
                x
            };

            debug_assert!(x as isize >= k, "negative y on diagonal {k}");
            let mut y = (x as isize - k) as usize;

            while x < m && y < n && a.symbol(x) == b.symbol(y) {
                x += 1;
                y += 1;
            }

            frontier.current_mut().set_reach(k, x);

            if x >= m && y >= n {
                log::trace!("reached ({m}, {n}) on diagonal {k} at depth {depth}");
                return depth;
            }
        }
    }

    unreachable!("every edit graph is crossed within m + n steps")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Counting;

    #[test]
    fn test_slot_offsets() {
        assert_eq!(Wavefront::<u32>::slot(0, 0), 0);
        assert_eq!(Wavefront::<u32>::slot(1, -1), 0);
        assert_eq!(Wavefront::<u32>::slot(1, 1), 1);
        assert_eq!(Wavefront::<u32>::slot(3, -3), 0);
        assert_eq!(Wavefront::<u32>::slot(3, -1), 1);
        assert_eq!(Wavefront::<u32>::slot(3, 1), 2);
        assert_eq!(Wavefront::<u32>::slot(3, 3), 3);
        assert_eq!(Wavefront::<u32>::slot(6, 0), 3);
    }

    #[test]
    fn test_diagonals_order() {
        let ks: Vec<isize> = Wavefront::<u16>::diagonals(3).collect();
        assert_eq!(ks, vec![-3, -1, 1, 3]);
        let ks: Vec<isize> = Wavefront::<u16>::diagonals(0).collect();
        assert_eq!(ks, vec![0]);
    }

    #[test]
    fn test_reach_round_trip() {
        let mut wavefront = Wavefront::<u16>::with_depth(2);
        wavefront.set_reach(-2, 0);
        wavefront.set_reach(0, 5);
        wavefront.set_reach(2, 7);
        assert_eq!(wavefront.reach(-2), 0);
        assert_eq!(wavefront.reach(0), 5);
        assert_eq!(wavefront.reach(2), 7);
    }

    #[test]
    fn test_reset_counts_only_growth() {
        let mut wavefront = Wavefront::<u32>::default();
        let grown = wavefront.reset(3);
        assert!(grown >= 4 * 4);
        assert_eq!(wavefront.reset(1), 0);
        assert_eq!(wavefront.depth(), 1);
        assert_eq!(wavefront.reach(1), 0);
    }

    #[test]
    fn test_choose_tie_break() {
        let mut previous = Wavefront::<u32>::with_depth(1);
        previous.set_reach(-1, 2);
        previous.set_reach(1, 2);

        // Edges are forced
        assert_eq!(choose(&previous, -2), (Branch::Insert, 2));
        assert_eq!(choose(&previous, 2), (Branch::Delete, 3));
        // Equal reaches take the delete branch
        assert_eq!(choose(&previous, 0), (Branch::Delete, 3));

        previous.set_reach(1, 4);
        assert_eq!(choose(&previous, 0), (Branch::Insert, 4));
    }

    struct Bits {
        previous: Wavefront<u32>,
        current: Wavefront<u32>,
        branches: Vec<Vec<Branch>>,
    }

    impl Frontier for Bits {
        type Index = u32;

        fn advance<M: MemoryTracker>(&mut self, depth: usize, tracker: &mut M) {
            std::mem::swap(&mut self.previous, &mut self.current);
            tracker.record(self.current.reset(depth));
            self.branches.push(Vec::new());
        }

        fn previous(&self) -> &Wavefront<u32> {
            &self.previous
        }

        fn current_mut(&mut self) -> &mut Wavefront<u32> {
            &mut self.current
        }

        fn branch(&mut self, branch: Branch) {
            self.branches.last_mut().unwrap().push(branch);
        }
    }

    fn run(a: &str, b: &str) -> (usize, Vec<Vec<Branch>>) {
        let mut frontier = Bits {
            previous: Wavefront::default(),
            current: Wavefront::default(),
            branches: Vec::new(),
        };
        let distance = expand(a, b, &mut frontier, &mut Counting::new());
        (distance, frontier.branches)
    }

    #[test]
    fn test_identical_stops_at_depth_zero() {
        let (distance, branches) = run("ABC", "ABC");
        assert_eq!(distance, 0);
        assert_eq!(branches, vec![Vec::<Branch>::new()]);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(run("", "").0, 0);
        assert_eq!(run("", "ABC").0, 3);
        assert_eq!(run("ABC", "").0, 3);
    }

    #[test]
    fn test_classic_distance() {
        let (distance, branches) = run("ABCABBA", "CBABAC");
        assert_eq!(distance, 5);
        // One bit per diagonal after the first, per depth
        for (depth, bits) in branches.iter().enumerate().take(distance) {
            assert_eq!(bits.len(), depth);
        }
        // The last depth stops early
        assert!(branches[distance].len() <= distance);
    }
}
