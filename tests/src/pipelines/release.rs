use std::path::Path;
use std::process::Command;

use pretty_assertions::assert_eq;
use tablegen_core::release::{self, GitCommitLog, ReleaseError};
use tempfile::tempdir;

use crate::util;

const BANNER: &str = "package core\n\nconst (\n\tName    = \"bettercap\"\n\tVersion = \"2.32.0\"\n\tAuthor  = \"Simone 'evilsocket' Margaritelli\"\n\tWebsite = \"https://bettercap.org/\"\n)\n";

#[test]
fn release_rewrites_only_the_version() {
    let dir = tempdir().unwrap();
    let file = util::write(dir.path(), "banner.go", BANNER);

    let (source, current) = release::read_version(&file).unwrap();
    assert_eq!(current.value, "2.32.0");

    release::write_version(&file, &source, "2.33.0").unwrap();
    assert_eq!(util::read(&file), BANNER.replace("2.32.0", "2.33.0"));
}

#[test]
fn release_refuses_ambiguous_version() {
    let dir = tempdir().unwrap();
    let contents = format!("{BANNER}\nconst Version = \"0.0.1\"\n");
    let file = util::write(dir.path(), "banner.go", &contents);

    let err = release::read_version(&file).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ReleaseError>(),
        Some(&ReleaseError::VersionCount(2))
    );

    assert!(release::write_version(&file, &contents, "0.0.2").is_err());
    assert_eq!(util::read(&file), contents);
}

#[test]
fn release_refuses_missing_version() {
    let dir = tempdir().unwrap();
    let file = util::write(dir.path(), "banner.go", "package core\n");

    let err = release::read_version(&file).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ReleaseError>(),
        Some(&ReleaseError::VersionCount(0))
    );
}

fn git(repo: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args([
            "-c",
            "user.name=tablegen",
            "-c",
            "user.email=tablegen@example.com",
            "-c",
            "commit.gpgsign=false",
            "-c",
            "tag.gpgsign=false",
        ])
        .args(args)
        .current_dir(repo)
        .status()
        .unwrap();
    assert!(status.success(), "git {args:?} failed");
}

fn commit(repo: &Path, subject: &str) {
    git(repo, &["commit", "--allow-empty", "-q", "-m", subject]);
}

#[test]
fn changelog_starts_at_last_annotated_tag() {
    if Command::new("git").arg("--version").output().is_err() {
        return;
    }

    let dir = tempdir().unwrap();
    let repo = dir.path();
    git(repo, &["init", "-q"]);
    commit(repo, "first");
    git(repo, &["tag", "-a", "v1.0.0", "-m", "Release v1.0.0"]);
    commit(repo, "second");
    git(repo, &["tag", "wip-lightweight"]);
    commit(repo, "third");

    let log = release::changelog(&GitCommitLog::new(repo)).unwrap();
    assert_eq!(log.since.as_deref(), Some("v1.0.0"));

    let subjects: Vec<&str> = log
        .entries
        .iter()
        .filter_map(|line| line.split_once(' ').map(|(_, subject)| subject))
        .collect();
    assert_eq!(subjects, vec!["third", "second"]);
}

#[test]
fn changelog_with_only_lightweight_tags_covers_full_history() {
    if Command::new("git").arg("--version").output().is_err() {
        return;
    }

    let dir = tempdir().unwrap();
    let repo = dir.path();
    git(repo, &["init", "-q"]);
    commit(repo, "first");
    git(repo, &["tag", "snapshot"]);
    commit(repo, "second");

    let log = release::changelog(&GitCommitLog::new(repo)).unwrap();
    assert_eq!(log.since, None);
    assert_eq!(log.entries.len(), 2);
}
