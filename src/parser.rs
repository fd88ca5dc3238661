// src/parser.rs

//! Parser for `git blame --porcelain` output.
//!
//! Every entry starts with a header line
//! `<40-hex sha1> <source line> <result line> [<lines in group>]`, followed
//! by an optional block of `<key> <value>` metadata lines (only the first
//! time a revision shows up, in practice) and exactly one content line
//! starting with a TAB.
//!
//! See <https://git-scm.com/docs/git-blame#_the_porcelain_format>.

use crate::blame::History;
use crate::error::ParseWarning;
use crate::model::ChangeRecord;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    // Example: 49790775624c422f67057f7bb936f35df920e391 94 120 3
    static ref HEADER: Regex =
        Regex::new(r"^([0-9a-f]{40})\s(\d+)\s(\d+)\s?(\d+)?$").unwrap();
    // `boundary` carries no value
    static ref METADATA: Regex = Regex::new(r"^([a-z]+(?:-[a-z]+)*)(?:\s(.*))?$").unwrap();
}

/// Parses raw porcelain text into a [`History`].
pub fn parse(raw: &str) -> History {
    HistoryParser::parse(raw)
}

/// The entry whose header was read last and whose content line is pending.
#[derive(Debug)]
struct Entry {
    record: usize,
    result_line: usize,
    /// Whether metadata lines of this block may set record fields
    fill: bool,
    metadata_lines: usize,
}

#[derive(Debug)]
enum State {
    ExpectHeader,
    InMetadataBlock(Entry),
}

#[derive(Debug)]
pub struct HistoryParser {
    state: State,
    records: Vec<ChangeRecord>,
    by_revision: HashMap<String, usize>,
    /// Records that already received a metadata block
    described: Vec<bool>,
    warnings: Vec<ParseWarning>,
}

impl Default for HistoryParser {
    fn default() -> Self {
        Self {
            state: State::ExpectHeader,
            records: Vec::new(),
            by_revision: HashMap::new(),
            described: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl HistoryParser {
    /// Never fails: anomalies are logged and collected as warnings on the
    /// returned history, next to whatever could be parsed.
    pub fn parse(raw: &str) -> History {
        let mut parser = Self::default();
        for (index, line) in raw.trim().lines().enumerate() {
            parser.feed(index + 1, line);
        }
        parser.finish()
    }

    fn feed(&mut self, line_no: usize, line: &str) {
        match std::mem::replace(&mut self.state, State::ExpectHeader) {
            State::ExpectHeader => self.expect_header(line_no, line),
            State::InMetadataBlock(entry) => self.in_metadata_block(entry, line_no, line),
        }
    }

    fn expect_header(&mut self, line_no: usize, line: &str) {
        let Some(caps) = HEADER.captures(line) else {
            self.warn(ParseWarning::MalformedHeaderLine {
                line: line_no,
                text: line.to_string(),
            });
            return;
        };

        let revision_id = &caps[1];
        let result_line = match caps[3].parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                self.warn(ParseWarning::UnparsableLineNumber {
                    line: line_no,
                    value: caps[3].to_string(),
                });
                return;
            }
        };

        let record = self.get_or_create(revision_id);
        self.state = State::InMetadataBlock(Entry {
            record,
            result_line,
            fill: !self.described[record],
            metadata_lines: 0,
        });
    }

    fn in_metadata_block(&mut self, mut entry: Entry, line_no: usize, line: &str) {
        if line.starts_with('\t') {
            self.close(entry);
            return;
        }

        if HEADER.is_match(line) {
            self.warn(ParseWarning::MissingContentLine {
                line: line_no,
                revision_id: self.records[entry.record].revision_id.clone(),
            });
            self.close(entry);
            self.expect_header(line_no, line);
            return;
        }

        match METADATA.captures(line) {
            Some(caps) => {
                let key = caps.get(1).map_or("", |m| m.as_str());
                let value = caps.get(2).map_or("", |m| m.as_str());
                self.apply_metadata(&mut entry, line_no, key, value);
                self.state = State::InMetadataBlock(entry);
            }
            // Whatever ends the block is the content line
            None => self.close(entry),
        }
    }

    fn apply_metadata(&mut self, entry: &mut Entry, line_no: usize, key: &str, value: &str) {
        entry.metadata_lines += 1;
        if !entry.fill {
            return;
        }

        let record = &mut self.records[entry.record];
        match key {
            "author" => record.author = value.to_string(),
            "author-mail" => record.email = strip_delimiters(value).to_string(),
            "author-time" => match value.parse::<i64>().ok().and_then(|s| s.checked_mul(1000)) {
                Some(millis) => record.timestamp = millis,
                None => self.warn(ParseWarning::InvalidTimestamp {
                    line: line_no,
                    value: value.to_string(),
                }),
            },
            "author-tz" => record.time_zone_offset = value.to_string(),
            "summary" => record.summary = value.to_string(),
            _ => {}
        }
    }

    /// Finishes an entry: its content line has been consumed (or is missing).
    fn close(&mut self, entry: Entry) {
        if entry.metadata_lines > 0 {
            if entry.fill {
                self.described[entry.record] = true;
            } else {
                log::debug!(
                    "Ignoring repeated metadata block for {}",
                    self.records[entry.record].revision_id
                );
            }
        }
        self.records[entry.record].lines.push(entry.result_line);
    }

    fn get_or_create(&mut self, revision_id: &str) -> usize {
        if let Some(&index) = self.by_revision.get(revision_id) {
            return index;
        }
        let index = self.records.len();
        self.records.push(ChangeRecord::new(revision_id));
        self.described.push(false);
        self.by_revision.insert(revision_id.to_string(), index);
        index
    }

    fn warn(&mut self, warning: ParseWarning) {
        log::warn!("Skip parsing: {}", warning);
        self.warnings.push(warning);
    }

    fn finish(mut self) -> History {
        // Trimming the input can swallow the content line of the last entry
        if let State::InMetadataBlock(entry) = std::mem::replace(&mut self.state, State::ExpectHeader) {
            self.close(entry);
        }
        History::new(self.records, self.warnings)
    }
}

/// `<alice@example.com>` -> `alice@example.com`
fn strip_delimiters(value: &str) -> &str {
    let mut chars = value.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
