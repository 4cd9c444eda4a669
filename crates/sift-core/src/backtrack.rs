//! Backward reconstruction of the edit script

use crate::edit::EditRecord;
use crate::view::SequenceView;
use crate::wavefront::Branch;

/// Source of the branch decisions made during the forward search
pub trait Decisions {
    /// Branch taken into diagonal `k` at `depth` (`depth >= 1`)
    fn decide(&self, depth: usize, k: isize) -> Branch;
}

/// Walk from `(m, n)` back to the origin and return the script in
/// start-to-end order.
///
/// Matching symbols are kept without consulting `decisions`. Every other
/// interior step consumes the decision of the current depth and retires
/// it, so at most `distance` decisions are read.
pub fn backtrack<A, B, R, D>(a: &A, b: &B, distance: usize, decisions: &D) -> Vec<R>
where
    A: SequenceView + ?Sized,
    B: SequenceView<Symbol = A::Symbol> + ?Sized,
    A::Symbol: Clone,
    R: EditRecord<A::Symbol>,
    D: Decisions + ?Sized,
{
    let (mut x, mut y) = (a.len(), b.len());
    let mut k = x as isize - y as isize;
    let mut depth = distance;
    let mut records = Vec::with_capacity(x + y);

    while x > 0 || y > 0 {
        if x == 0 {
            records.push(R::insert(b.symbol(y - 1).clone()));
            y -= 1;
        } else if y == 0 {
            records.push(R::delete(a.symbol(x - 1).clone()));
            x -= 1;
        } else if a.symbol(x - 1) == b.symbol(y - 1) {
            records.push(R::keep(a.symbol(x - 1).clone()));
            x -= 1;
            y -= 1;
        } else {
            debug_assert!(depth > 0, "ran out of decisions at ({x}, {y})");
            match decisions.decide(depth, k) {
                Branch::Insert => {
                    records.push(R::insert(b.symbol(y - 1).clone()));
                    y -= 1;
                    k += 1;
                }
                Branch::Delete => {
                    records.push(R::delete(a.symbol(x - 1).clone()));
                    x -= 1;
                    k -= 1;
                }
            }
            depth -= 1;
        }
    }

    records.reverse();
    records
}
