//! Helpers over finished edit scripts

use crate::edit::{Edit, EditKind};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Operation counts of an edit script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptStats {
    pub keeps: usize,
    pub inserts: usize,
    pub deletes: usize,
}

impl ScriptStats {
    pub fn of<T>(script: &[Edit<T>]) -> Self {
        script.iter().fold(Self::default(), |mut stats, edit| {
            match edit.kind {
                EditKind::Keep => stats.keeps += 1,
                EditKind::Insert => stats.inserts += 1,
                EditKind::Delete => stats.deletes += 1,
            }
            stats
        })
    }

    /// Edit distance: inserts plus deletes
    pub fn distance(&self) -> usize {
        self.inserts + self.deletes
    }

    /// Length of the common subsequence the script keeps
    pub fn common(&self) -> usize {
        self.keeps
    }
}

/// Rebuild the old sequence from the kept and deleted symbols
pub fn old_side<T: Clone>(script: &[Edit<T>]) -> Vec<T> {
    script
        .iter()
        .filter(|edit| edit.kind != EditKind::Insert)
        .map(|edit| edit.symbol.clone())
        .collect()
}

/// Rebuild the new sequence from the kept and inserted symbols
pub fn new_side<T: Clone>(script: &[Edit<T>]) -> Vec<T> {
    script
        .iter()
        .filter(|edit| edit.kind != EditKind::Delete)
        .map(|edit| edit.symbol.clone())
        .collect()
}

/// The script that turns the new sequence back into the old one
pub fn invert<T: Clone>(script: &[Edit<T>]) -> Vec<Edit<T>> {
    script
        .iter()
        .map(|edit| Edit::new(edit.kind.inverse(), edit.symbol.clone()))
        .collect()
}

/// One marker-prefixed entry per edit, joined by `separator`
pub fn render<T: Display>(script: &[Edit<T>], separator: &str) -> String {
    script
        .iter()
        .map(|edit| edit.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::diff;
    use crate::text::chars;

    #[test]
    fn test_stats() {
        let script = diff(&chars("ABCABBA"), &chars("CBABAC")).unwrap();
        let stats = ScriptStats::of(&script);
        assert_eq!(
            stats,
            ScriptStats {
                keeps: 4,
                inserts: 2,
                deletes: 3,
            }
        );
        assert_eq!(stats.distance(), 5);
        assert_eq!(stats.common(), 4);
    }

    #[test]
    fn test_sides_rebuild_inputs() {
        let old = chars("kitten");
        let new = chars("sitting");
        let script = diff(&old, &new).unwrap();
        assert_eq!(old_side(&script), old);
        assert_eq!(new_side(&script), new);

        let inverted = invert(&script);
        assert_eq!(old_side(&inverted), new);
        assert_eq!(new_side(&inverted), old);
    }

    #[test]
    fn test_render() {
        let script = diff(&chars("ABCABBA"), &chars("CAB")).unwrap();
        assert_eq!(render(&script, ", "), "-A, -B,  C,  A, -B,  B, -A");
    }
}
