use just_blame::analyzer::{analyze, analyze_all, locate, run_blame};
use just_blame::colors::default_scale;
use just_blame::config::Theme;
use just_blame::{BlameError, NO_COLOR, UNCOMMITTED_AUTHOR};
use pretty_assertions::assert_eq;
use std::path::Path;
use std::process::Command;

fn git(dir: &Path, args: &[&str], date: &str) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_AUTHOR_NAME", "Alice")
        .env("GIT_AUTHOR_EMAIL", "alice@example.com")
        .env("GIT_COMMITTER_NAME", "Alice")
        .env("GIT_COMMITTER_EMAIL", "alice@example.com")
        .env("GIT_AUTHOR_DATE", date)
        .env("GIT_COMMITTER_DATE", date)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("HOME", dir)
        .status()
        .expect("able to run git");
    assert!(status.success(), "git {:?} failed", args);
}

fn have_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

/// Two commits touching `file.txt`, plus one uncommitted line
fn repository() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path();
    git(path, &["init", "-q"], "2020-01-01T00:00:00+0000");

    std::fs::write(path.join("file.txt"), "one\ntwo\n").unwrap();
    git(path, &["add", "file.txt"], "2020-01-01T00:00:00+0000");
    git(path, &["commit", "-q", "-m", "First"], "2020-01-01T00:00:00+0000");

    std::fs::write(path.join("file.txt"), "one\ntwo\nthree\n").unwrap();
    git(path, &["commit", "-q", "-a", "-m", "Second"], "2021-06-01T12:00:00+0200");

    std::fs::write(path.join("file.txt"), "one\ntwo\nthree\nfour\n").unwrap();
    dir
}

#[test]
fn blames_a_real_file() {
    if !have_git() {
        return;
    }
    let dir = repository();
    git(
        dir.path(),
        &["remote", "add", "origin", "git@github.com:o/r.git"],
        "2021-06-01T12:00:00+0200",
    );

    let session = analyze(&dir.path().join("file.txt"), &default_scale(Theme::Dark)).unwrap();
    let history = &session.history;

    assert_eq!(history.warnings(), &[]);
    assert_eq!(history.records().len(), 3);

    let first = history.record_for_line(1).unwrap();
    assert_eq!(first.summary, "First");
    assert_eq!(first.email, "alice@example.com");
    assert_eq!(first.timestamp, 1_577_836_800_000);
    assert_eq!(first.lines, vec![1, 2]);

    let second = history.record_for_line(3).unwrap();
    assert_eq!(second.summary, "Second");
    assert_eq!(second.time_zone_offset, "+0200");
    assert_eq!(history.latest_commit().map(|r| &r.revision_id), Some(&second.revision_id));

    let uncommitted = history.record_for_line(4).unwrap();
    assert_eq!(uncommitted.author, UNCOMMITTED_AUTHOR);
    assert_ne!(session.color_for(uncommitted), NO_COLOR);
    assert_eq!(session.repo_url.as_deref(), Some("https://github.com/o/r"));
}

#[test]
fn failing_command_is_a_caller_error() {
    if !have_git() {
        return;
    }
    let dir = repository();
    let target = locate(&dir.path().join("file.txt")).unwrap();

    let result = run_blame(&target.root, Path::new("does-not-exist.txt"));

    assert!(matches!(result, Err(BlameError::CommandFailed { .. })));
}

#[test]
fn files_are_blamed_independently() {
    if !have_git() {
        return;
    }
    let dir = repository();
    let files = vec![dir.path().join("file.txt"), dir.path().join("missing.txt")];

    let results = analyze_all(&files, &default_scale(Theme::Light));

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].0, files[0]);
    assert!(results[0].1.is_ok());
    assert!(matches!(results[1].1, Err(BlameError::Read { .. })));
}
