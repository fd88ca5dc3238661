// src/session.rs

use crate::blame::History;
use crate::colors::ColorIndex;
use crate::model::ChangeRecord;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Everything needed to annotate one file. Immutable once built; a refresh
/// builds a new one.
#[derive(Debug, Clone)]
pub struct BlameSession {
    pub path: PathBuf,
    /// File contents at the time of blaming
    pub contents: String,
    pub history: History,
    pub colors: ColorIndex,
    pub repo_url: Option<String>,
}

impl BlameSession {
    pub fn new(
        path: PathBuf,
        contents: String,
        history: History,
        colors: ColorIndex,
        repo_url: Option<String>,
    ) -> Self {
        Self {
            path,
            contents,
            history,
            colors,
            repo_url,
        }
    }

    /// No revision was found, so there is nothing to display
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn record_for_line(&self, line: usize) -> Option<&ChangeRecord> {
        self.history.record_for_line(line)
    }

    pub fn color_for(&self, record: &ChangeRecord) -> &str {
        self.colors.color_for(record.timestamp)
    }
}

/// Open sessions keyed by file path.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<PathBuf, Arc<BlameSession>>,
}

impl SessionRegistry {
    /// Stores a session under its path, replacing an older session for the
    /// same file.
    pub fn open(&mut self, session: BlameSession) -> Arc<BlameSession> {
        let session = Arc::new(session);
        if self
            .sessions
            .insert(session.path.clone(), Arc::clone(&session))
            .is_some()
        {
            log::debug!("Refreshed blame for {}", session.path.display());
        }
        session
    }

    pub fn get(&self, path: &Path) -> Option<Arc<BlameSession>> {
        self.sessions.get(path).cloned()
    }

    pub fn close(&mut self, path: &Path) -> Option<Arc<BlameSession>> {
        self.sessions.remove(path)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
