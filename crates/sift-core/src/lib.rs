//! Sift Core - Myers diff engine with bit-traced backtracking
//!
//! This library computes minimal edit scripts between two sequences. The
//! forward search keeps only the live wavefront and records one bit per
//! branch decision, which is enough to replay the shortest path backwards.

pub mod backtrack;
pub mod comparator;
pub mod edit;
pub mod history;
pub mod index;
pub mod profile;
pub mod script;
pub mod text;
pub mod trace;
pub mod view;
pub mod wavefront;

pub use comparator::{diff, CompareError, Comparator, Diff};
pub use edit::{Edit, EditKind, EditRecord};
pub use history::HistoryComparator;
pub use index::IndexWidth;
pub use profile::{Counting, MemoryTracker, Noop, Shared};
pub use script::ScriptStats;
pub use trace::StepTrace;
pub use view::SequenceView;
pub use wavefront::{Branch, Wavefront};
