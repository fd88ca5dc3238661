// src/blame.rs

use crate::error::ParseWarning;
use crate::model::ChangeRecord;

/// The parsed blame of one file: one record per revision, in the order the
/// revisions were first seen, plus whatever the parser had to skip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    records: Vec<ChangeRecord>,
    warnings: Vec<ParseWarning>,
}

impl History {
    pub(crate) fn new(records: Vec<ChangeRecord>, warnings: Vec<ParseWarning>) -> Self {
        Self { records, warnings }
    }

    pub fn parse(raw: &str) -> Self {
        crate::parser::parse(raw)
    }

    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }

    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The committed revision with the newest timestamp. On a tie the first
    /// seen revision wins.
    pub fn latest_commit(&self) -> Option<&ChangeRecord> {
        self.records
            .iter()
            .filter(|r| !r.is_uncommitted())
            .fold(None, |latest: Option<&ChangeRecord>, record| match latest {
                Some(latest) if latest.timestamp >= record.timestamp => Some(latest),
                _ => Some(record),
            })
    }

    /// The record a 1-based line is attributed to, if any.
    pub fn record_for_line(&self, line: usize) -> Option<&ChangeRecord> {
        self.records.iter().find(|r| r.contains_line(line))
    }

    /// Longest author name in characters, for aligning the annotation column
    pub fn max_author_len(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.author.chars().count())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UNCOMMITTED_AUTHOR;
    use pretty_assertions::assert_eq;

    fn record(id: &str, author: &str, timestamp: i64, lines: &[usize]) -> ChangeRecord {
        ChangeRecord {
            author: author.to_string(),
            timestamp,
            lines: lines.to_vec(),
            ..ChangeRecord::new(id)
        }
    }

    #[test]
    fn latest_commit_skips_uncommitted() {
        let history = History::new(
            vec![
                record("old", "Alice", 1_000, &[1]),
                record("wip", UNCOMMITTED_AUTHOR, 9_000, &[2]),
                record("new", "Bob", 5_000, &[3]),
            ],
            vec![],
        );

        assert_eq!(history.latest_commit().map(|r| r.revision_id.as_str()), Some("new"));
    }

    #[test]
    fn latest_commit_ignores_zero_timestamp_placeholder() {
        let history = History::new(
            vec![
                record("wip", UNCOMMITTED_AUTHOR, 0, &[1]),
                record("only", "Alice", 0, &[2]),
            ],
            vec![],
        );

        assert_eq!(history.latest_commit().map(|r| r.revision_id.as_str()), Some("only"));
    }

    #[test]
    fn latest_commit_tie_keeps_first_seen() {
        let history = History::new(
            vec![record("first", "Alice", 7, &[1]), record("second", "Bob", 7, &[2])],
            vec![],
        );

        assert_eq!(history.latest_commit().map(|r| r.revision_id.as_str()), Some("first"));
    }

    #[test]
    fn nothing_committed_means_no_latest() {
        let history = History::new(vec![record("wip", UNCOMMITTED_AUTHOR, 3, &[1])], vec![]);

        assert_eq!(history.latest_commit(), None);
    }

    #[test]
    fn line_lookup_prefers_first_seen() {
        let history = History::new(
            vec![
                record("a", "Alice", 1, &[1, 3]),
                record("b", "Bob", 2, &[2, 3]),
            ],
            vec![],
        );

        assert_eq!(history.record_for_line(3).map(|r| r.revision_id.as_str()), Some("a"));
        assert_eq!(history.record_for_line(2).map(|r| r.revision_id.as_str()), Some("b"));
        assert_eq!(history.record_for_line(4), None);
    }

    #[test]
    fn max_author_len() {
        assert_eq!(History::default().max_author_len(), 0);

        let history = History::new(
            vec![record("a", "Zoë", 1, &[1]), record("b", "Bob Dylan", 2, &[2])],
            vec![],
        );
        assert_eq!(history.max_author_len(), 9);
    }
}
