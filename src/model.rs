// src/model.rs

/// Author name `git blame` reports for lines that are not committed yet
pub const UNCOMMITTED_AUTHOR: &str = "Not Committed Yet";

/// Color used for revisions older than the last color in the scale
pub const NO_COLOR: &str = "#fff0";

/// A color from the configured scale, e.g. `#ffb454`
pub type ColorToken = String;

/// Revision time in milliseconds since the epoch
pub type Timestamp = i64;

/// Everything known about one revision touching the blamed file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeRecord {
    /// 40 character hex revision id
    pub revision_id: String,
    /// 1-based line numbers in the current file attributed to this revision
    pub lines: Vec<usize>,
    pub author: String,
    /// Without the enclosing `<` and `>`
    pub email: String,
    pub timestamp: Timestamp,
    /// Passed through as given, e.g. `+0200`
    pub time_zone_offset: String,
    /// First line of the commit message
    pub summary: String,
}

impl ChangeRecord {
    /// An empty record as created on first reference to a revision
    pub fn new(revision_id: impl Into<String>) -> Self {
        Self {
            revision_id: revision_id.into(),
            ..Default::default()
        }
    }

    pub fn is_uncommitted(&self) -> bool {
        self.author == UNCOMMITTED_AUTHOR
    }

    pub fn contains_line(&self, line: usize) -> bool {
        self.lines.contains(&line)
    }
}
