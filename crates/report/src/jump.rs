//! Jump index: report ranges back to source ranges.

use linefind_core::TextRange;

/// Which part of the report an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpTarget {
    /// The stat line; jumps back to where the search was started
    Header,
    /// A body line (0-based index into the report body)
    Body { line: usize },
}

/// One row of the jump index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpEntry {
    /// Covered report range
    pub report: TextRange,
    /// Source range to select
    pub source: TextRange,
    pub target: JumpTarget,
}

/// Result of resolving a report offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jump {
    pub source: TextRange,
    pub target: JumpTarget,
}

/// Entries sorted by report offset, never overlapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumpIndex {
    entries: Vec<JumpEntry>,
}

impl JumpIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from entries, rejecting unsorted or overlapping ones.
    #[cfg(test)]
    pub(crate) fn from_entries(entries: Vec<JumpEntry>) -> anyhow::Result<Self> {
        for pair in entries.windows(2) {
            if pair[0].report.end > pair[1].report.start {
                anyhow::bail!(
                    "Jump entries overlap or are unsorted: {:?} then {:?}",
                    pair[0].report,
                    pair[1].report
                );
            }
        }
        Ok(Self { entries })
    }

    pub(crate) fn push(&mut self, entry: JumpEntry) {
        debug_assert!(
            self.entries
                .last()
                .map_or(true, |last| last.report.end <= entry.report.start),
            "jump entries must stay sorted"
        );
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[JumpEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the entry covering `offset`.
    ///
    /// Binary search over half-open report ranges: an entry's start
    /// resolves to it, its end resolves to whatever follows. Offsets in
    /// gaps (line breaks, a header without origin) resolve to nothing.
    pub fn resolve(&self, offset: usize) -> Option<Jump> {
        let (mut lo, mut hi) = (0, self.entries.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let entry = &self.entries[mid];
            if offset >= entry.report.end {
                lo = mid + 1;
            } else if offset < entry.report.start {
                hi = mid;
            } else {
                return Some(Jump {
                    source: entry.source,
                    target: entry.target,
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(start: usize, end: usize, source: usize, line: usize) -> JumpEntry {
        JumpEntry {
            report: TextRange::new(start, end),
            source: TextRange::new(source, source + 1),
            target: JumpTarget::Body { line },
        }
    }

    fn sample() -> JumpIndex {
        JumpIndex::from_entries(vec![
            entry(0, 5, 100, 0),
            entry(5, 10, 200, 1),
            entry(12, 20, 300, 2),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_inside() {
        let index = sample();
        assert_eq!(index.resolve(3).unwrap().source.start, 100);
        assert_eq!(index.resolve(7).unwrap().source.start, 200);
        assert_eq!(index.resolve(15).unwrap().source.start, 300);
    }

    #[test]
    fn test_resolve_boundaries() {
        let index = sample();
        // Inclusive start
        assert_eq!(index.resolve(0).unwrap().source.start, 100);
        assert_eq!(index.resolve(12).unwrap().source.start, 300);
        // Exclusive end belongs to the next entry
        assert_eq!(index.resolve(5).unwrap().source.start, 200);
        assert_eq!(
            index.resolve(5).unwrap().target,
            JumpTarget::Body { line: 1 }
        );
    }

    #[test]
    fn test_resolve_gaps() {
        let index = sample();
        assert_eq!(index.resolve(10), None);
        assert_eq!(index.resolve(11), None);
        assert_eq!(index.resolve(20), None);
        assert_eq!(index.resolve(usize::MAX), None);
        assert_eq!(JumpIndex::new().resolve(0), None);
    }

    #[test]
    fn test_zero_length_entries_never_match() {
        let index = JumpIndex::from_entries(vec![
            entry(0, 4, 1, 0),
            entry(4, 4, 2, 0),
            entry(4, 9, 3, 0),
        ])
        .unwrap();
        assert_eq!(index.resolve(4).unwrap().source.start, 3);
    }

    #[test]
    fn test_from_entries_rejects_overlap() {
        assert!(JumpIndex::from_entries(vec![entry(0, 6, 1, 0), entry(5, 9, 2, 1)]).is_err());
        assert!(JumpIndex::from_entries(vec![entry(10, 12, 1, 0), entry(0, 5, 2, 1)]).is_err());
    }

    #[test]
    fn test_resolve_large_index() {
        let entries: Vec<_> = (0..10_000)
            .map(|i| entry(i * 10, i * 10 + 9, i, i))
            .collect();
        let index = JumpIndex::from_entries(entries).unwrap();

        for i in (0..10_000).step_by(97) {
            assert_eq!(index.resolve(i * 10 + 4).unwrap().source.start, i);
            assert_eq!(index.resolve(i * 10 + 9), None);
        }
    }
}
