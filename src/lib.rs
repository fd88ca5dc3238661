// src/lib.rs

//! Line-by-line authorship for a single file, built from
//! `git blame --porcelain` output, plus a ranking of its revisions by
//! recency that is used to tint each line by age.

pub mod analyzer;
pub mod blame;
pub mod colors;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod renderer;
pub mod session;

pub use blame::History;
pub use colors::ColorIndex;
pub use error::{BlameError, ParseWarning, Result};
pub use model::{ChangeRecord, ColorToken, Timestamp, NO_COLOR, UNCOMMITTED_AUTHOR};
pub use parser::{parse, HistoryParser};
pub use session::{BlameSession, SessionRegistry};
