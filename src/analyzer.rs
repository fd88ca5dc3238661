// src/analyzer.rs

use crate::blame::History;
use crate::colors::ColorIndex;
use crate::error::{BlameError, Result};
use crate::model::ColorToken;
use crate::session::BlameSession;
use git2::{ErrorCode, Repository};
use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A file inside a git working tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Canonical path of the file
    pub path: PathBuf,
    /// Working directory of the repository containing it
    pub root: PathBuf,
    /// `path` relative to `root`
    pub relative: PathBuf,
}

pub fn locate(file: &Path) -> Result<Target> {
    let path = file.canonicalize().map_err(|source| BlameError::Read {
        path: file.to_path_buf(),
        source,
    })?;
    let start = path.parent().unwrap_or(&path);

    let repo = Repository::discover(start).map_err(|e| match e.code() {
        ErrorCode::NotFound => BlameError::NotInRepository(path.clone()),
        _ => BlameError::Repository(e),
    })?;
    let root = repo
        .workdir()
        .ok_or_else(|| BlameError::NotInRepository(path.clone()))?
        .canonicalize()?;
    let relative = path
        .strip_prefix(&root)
        .map_err(|_| BlameError::NotInRepository(path.clone()))?
        .to_path_buf();

    Ok(Target { path, root, relative })
}

/// Runs `git blame --porcelain` on a file and returns its raw output.
pub fn run_blame(root: &Path, relative: &Path) -> Result<String> {
    log::debug!(
        "Running git blame: git --no-pager blame --porcelain -- {} (in {})",
        relative.display(),
        root.display()
    );

    let output = Command::new("git")
        .args(["--no-pager", "blame", "--porcelain", "--"])
        .arg(relative)
        .current_dir(root)
        .output()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => BlameError::GitNotFound,
            _ => BlameError::Io(e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        log::debug!("Blame returned an error: {}", stderr);
        return Err(BlameError::CommandFailed {
            status: output.status.to_string(),
            stderr,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// The web URL of the `origin` remote, if there is one.
pub fn repository_url(root: &Path) -> Option<String> {
    let repo = Repository::open(root).ok()?;
    let remote = repo.find_remote("origin").ok()?;
    remote.url().map(normalize_remote_url)
}

/// Turns GitHub remotes into browsable URLs, leaves any other remote as is.
pub fn normalize_remote_url(remote: &str) -> String {
    if let Some(rest) = remote.strip_prefix("https://github.com/") {
        return format!("https://github.com/{}", rest.trim_end_matches(".git"));
    }
    if let Some(rest) = remote.strip_prefix("git@github.com:") {
        return format!("https://github.com/{}", rest.trim_end_matches(".git"));
    }
    remote.to_string()
}

/// Blames one file and indexes its colors.
pub fn analyze(file: &Path, scale: &[ColorToken]) -> Result<BlameSession> {
    let target = locate(file)?;
    log::debug!("Workspace root: {}", target.root.display());
    log::debug!("Relative path: {}", target.relative.display());

    let contents = std::fs::read(&target.path).map_err(|source| BlameError::Read {
        path: target.path.clone(),
        source,
    })?;
    let contents = String::from_utf8_lossy(&contents).into_owned();

    let raw = run_blame(&target.root, &target.relative)?;
    let history = History::parse(&raw);
    if history.is_empty() {
        log::info!("Empty blame for {}", target.relative.display());
    } else if !history.warnings().is_empty() {
        log::warn!(
            "{} line(s) of blame output for {} could not be parsed",
            history.warnings().len(),
            target.relative.display()
        );
    }

    let colors = ColorIndex::build(history.records(), scale);
    let repo_url = repository_url(&target.root);
    log::debug!("Repository URL: {:?}", repo_url);

    Ok(BlameSession::new(target.path, contents, history, colors, repo_url))
}

/// Blames every file independently, in parallel. Results keep the order of
/// `files`.
pub fn analyze_all(files: &[PathBuf], scale: &[ColorToken]) -> Vec<(PathBuf, Result<BlameSession>)> {
    let bar = if files.len() > 1 {
        ProgressBar::new(files.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    bar.set_message("Blaming files");

    let results = files
        .par_iter()
        .progress_with(bar.clone())
        .map(|file| (file.clone(), analyze(file, scale)))
        .collect();

    bar.finish_and_clear();
    results
}
