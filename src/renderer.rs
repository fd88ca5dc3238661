// src/renderer.rs

use crate::colors::parse_token;
use crate::model::{ChangeRecord, Timestamp};
use crate::session::BlameSession;
use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

/// Non-breaking space: keeps its width when padding the author column
const NBSP: char = '\u{00A0}';
/// Narrower space around the annotation
const THIN_SPACE: char = '\u{2009}';

/// Label shown instead of the author for uncommitted lines
pub const UNCOMMITTED_LABEL: &str = "Not committed";

/// Parses `+0200` / `-0530` style offsets.
pub fn parse_offset(tz: &str) -> Option<FixedOffset> {
    let (sign, digits) = match tz.as_bytes().first()? {
        b'+' => (1, &tz[1..]),
        b'-' => (-1, &tz[1..]),
        _ => return None,
    };
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// The revision time in its own offset, UTC when the offset is unreadable.
fn revision_time(timestamp: Timestamp, tz: &str) -> DateTime<FixedOffset> {
    let offset = parse_offset(tz).unwrap_or_else(|| Utc.fix());
    Utc.timestamp_millis_opt(timestamp)
        .single()
        .unwrap_or_default()
        .with_timezone(&offset)
}

/// 30.05.99
pub fn format_date_short(timestamp: Timestamp, tz: &str) -> String {
    revision_time(timestamp, tz).format("%d.%m.%y").to_string()
}

/// Monday, 17 June 2024 at 14:04:31 +0200
pub fn format_date_long(timestamp: Timestamp, tz: &str) -> String {
    revision_time(timestamp, tz)
        .format("%A, %-d %B %Y at %H:%M:%S %z")
        .to_string()
}

pub fn annotation_text(label: &str, timestamp: Timestamp, tz: &str, max_author_len: usize) -> String {
    let padding = max_author_len.saturating_sub(label.chars().count());
    let mut text = String::new();
    text.push(THIN_SPACE);
    text.push_str(&format_date_short(timestamp, tz));
    text.push(' ');
    text.push_str(label);
    text.extend(std::iter::repeat(NBSP).take(padding));
    text.push(THIN_SPACE);
    text
}

/// Same width as an annotation, for lines without a revision
pub fn blank_annotation(max_author_len: usize) -> String {
    let width = annotation_text("", 0, "", max_author_len).chars().count();
    " ".repeat(width)
}

/// Commit, author, date and summary of a revision, linked to the repository
/// when its URL is known.
pub fn detail_text(record: &ChangeRecord, repo_url: Option<&str>) -> String {
    let id = &record.revision_id;
    let commit = match repo_url {
        Some(url) => format!("{} ({}/commit/{})", id, url, id),
        None => id.clone(),
    };
    format!(
        "Commit: {}\nAuthor: {} <{}>\nDate: {}\n\n{}\n",
        commit,
        record.author,
        record.email,
        format_date_long(record.timestamp, &record.time_zone_offset),
        record.summary
    )
}

fn styled_annotation(
    session: &BlameSession,
    record: &ChangeRecord,
    latest: Option<&str>,
    max_author_len: usize,
) -> ColoredString {
    let uncommitted = record.is_uncommitted();
    let label = if uncommitted { UNCOMMITTED_LABEL } else { record.author.as_str() };

    let text = annotation_text(label, record.timestamp, &record.time_zone_offset, max_author_len);
    let mut text = text.as_str().normal();
    if let Some(color) = parse_token(session.color_for(record)) {
        text = text.on_truecolor(color.red, color.green, color.blue);
    }
    if uncommitted {
        text.italic()
    } else if latest == Some(record.revision_id.as_str()) {
        text.bold()
    } else {
        text
    }
}

/// Writes the file with every line prefixed by its annotation.
pub fn render<W: Write>(session: &BlameSession, out: &mut W) -> io::Result<()> {
    if session.is_empty() {
        for line in session.contents.lines() {
            writeln!(out, "{}", line)?;
        }
        return Ok(());
    }

    let history = &session.history;
    let max_author_len = history.max_author_len();
    let latest = history.latest_commit().map(|r| r.revision_id.as_str());
    let blank = blank_annotation(max_author_len);

    for (index, line) in session.contents.lines().enumerate() {
        match session.record_for_line(index + 1) {
            Some(record) => {
                let annotation = styled_annotation(session, record, latest, max_author_len);
                writeln!(out, "{} {}", annotation, line)?;
            }
            None => writeln!(out, "{} {}", blank, line)?,
        }
    }

    Ok(())
}

/// Detail text for one line; nothing for unattributed or uncommitted lines.
pub fn line_details(session: &BlameSession, line: usize) -> Option<String> {
    let record = session.record_for_line(line)?;
    if record.is_uncommitted() {
        return None;
    }
    Some(detail_text(record, session.repo_url.as_deref()))
}
