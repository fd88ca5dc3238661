#![allow(dead_code)]

use std::fmt::Write;

/// A distinct 40 digit revision id for `n`
pub fn revision(n: usize) -> String {
    format!("{:040x}", n + 1)
}

/// One long-form entry attributing `line` to a fresh revision
pub fn long_entry(out: &mut String, id: &str, line: usize, author: &str, seconds: i64) {
    writeln!(out, "{} {} {} 1", id, line, line).unwrap();
    writeln!(out, "author {}", author).unwrap();
    writeln!(out, "author-mail <{}@example.com>", author.to_lowercase()).unwrap();
    writeln!(out, "author-time {}", seconds).unwrap();
    writeln!(out, "author-tz +0000").unwrap();
    writeln!(out, "committer {}", author).unwrap();
    writeln!(out, "summary Change by {}", author).unwrap();
    writeln!(out, "filename src/lib.rs").unwrap();
    writeln!(out, "\tline {}", line).unwrap();
}

/// One short-form entry for a revision already described
pub fn short_entry(out: &mut String, id: &str, line: usize) {
    writeln!(out, "{} {} {}", id, line, line).unwrap();
    writeln!(out, "\tline {}", line).unwrap();
}

/// `n` revisions, one line each, with timestamps given in `order`
pub fn synthetic(order: &[i64]) -> String {
    let mut out = String::new();
    for (i, &seconds) in order.iter().enumerate() {
        long_entry(&mut out, &revision(i), i + 1, &format!("Author{}", i), seconds);
    }
    out
}
