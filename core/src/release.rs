//! # Release Helper
//!
//! Bumps the `Version = "..."` declaration of a source file and prepares the
//! git commands a maintainer runs to publish the release. The commands are
//! only returned for printing; nothing here pushes or tags.

use std::fmt;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;

use anyhow::Context;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::output;

static VERSION_RE: OnceLock<Regex> = OnceLock::new();

fn version_re() -> &'static Regex {
    VERSION_RE.get_or_init(|| {
        Regex::new(r#"Version\s*=\s*"([^"\n]*)""#).expect("version pattern is valid")
    })
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReleaseError {
    #[error("expected exactly one `Version = \"...\"` declaration, found {0}")]
    VersionCount(usize),
    #[error("new version must not be empty")]
    EmptyVersion,
    #[error("invalid version {0:?}: quotes and line breaks are not allowed")]
    InvalidVersion(String),
}

/// The single version declaration found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMatch {
    pub value: String,
    /// Byte range of the value (between the quotes) inside the source.
    pub range: Range<usize>,
}

pub fn find_version(source: &str) -> Result<VersionMatch, ReleaseError> {
    let matches: Vec<regex::Match<'_>> = version_re()
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .collect();

    match matches.as_slice() {
        [value] => Ok(VersionMatch {
            value: value.as_str().to_string(),
            range: value.range(),
        }),
        other => Err(ReleaseError::VersionCount(other.len())),
    }
}

fn validate_version(version: &str) -> Result<&str, ReleaseError> {
    let version: &str = version.trim();
    if version.is_empty() {
        return Err(ReleaseError::EmptyVersion);
    }
    if version.contains(['"', '\n', '\r']) {
        return Err(ReleaseError::InvalidVersion(version.to_string()));
    }
    Ok(version)
}

/// Returns `source` with the version value replaced and every other byte
/// unchanged.
pub fn bump(source: &str, new_version: &str) -> Result<String, ReleaseError> {
    let new_version: &str = validate_version(new_version)?;
    let current: VersionMatch = find_version(source)?;

    let mut bumped = String::with_capacity(source.len() + new_version.len());
    bumped.push_str(&source[..current.range.start]);
    bumped.push_str(new_version);
    bumped.push_str(&source[current.range.end..]);
    Ok(bumped)
}

/// Reads `path` and returns its contents with the current version.
pub fn read_version(path: &Path) -> anyhow::Result<(String, VersionMatch)> {
    let source: String = output::read_input(path)?;
    let current: VersionMatch =
        find_version(&source).with_context(|| format!("reading version from {}", path.display()))?;
    Ok((source, current))
}

/// Rewrites `path` with the bumped version. Nothing is written on error.
pub fn write_version(path: &Path, source: &str, new_version: &str) -> anyhow::Result<()> {
    let bumped: String = bump(source, new_version)?;
    std::fs::write(path, bumped).with_context(|| format!("writing {}", path.display()))?;
    debug!("updated version in {}", path.display());
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlan {
    pub file: PathBuf,
    pub version: String,
}

impl ReleasePlan {
    pub fn new(file: impl Into<PathBuf>, version: &str) -> Self {
        Self {
            file: file.into(),
            version: version.trim().to_string(),
        }
    }

    pub fn tag(&self) -> String {
        format!("v{}", self.version)
    }

    /// The commands to run, in order.
    pub fn commands(&self) -> Vec<String> {
        let tag: String = self.tag();
        vec![
            format!("git add {}", self.file.display()),
            format!("git commit -m \"Releasing {tag}\""),
            "git push".to_string(),
            format!("git tag -a {tag} -m \"Release {tag}\""),
            format!("git push origin {tag}"),
        ]
    }
}

/// Source of commit history for the changelog.
pub trait CommitLog {
    /// Most recent annotated tag reachable from HEAD, if any.
    fn last_tag(&self) -> anyhow::Result<Option<String>>;

    /// `git log --oneline` lines, restricted to `since..HEAD` when given.
    fn oneline(&self, since: Option<&str>) -> anyhow::Result<Vec<String>>;
}

/// [`CommitLog`] backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitCommitLog {
    repo: PathBuf,
}

impl GitCommitLog {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self { repo: repo.into() }
    }

    fn git(&self, args: &[&str]) -> anyhow::Result<std::process::Output> {
        Command::new("git")
            .args(args)
            .current_dir(&self.repo)
            .output()
            .with_context(|| format!("running git {}", args.join(" ")))
    }
}

impl CommitLog for GitCommitLog {
    fn last_tag(&self) -> anyhow::Result<Option<String>> {
        let out = self.git(&["describe", "--abbrev=0"])?;
        if !out.status.success() {
            return Ok(None);
        }
        let tag: String = String::from_utf8_lossy(&out.stdout).trim().to_string();
        Ok((!tag.is_empty()).then_some(tag))
    }

    fn oneline(&self, since: Option<&str>) -> anyhow::Result<Vec<String>> {
        let range: String;
        let mut args: Vec<&str> = vec!["log", "--oneline"];
        if let Some(tag) = since {
            range = format!("{tag}..HEAD");
            args.push(&range);
        }

        let out = self.git(&args)?;
        if !out.status.success() {
            anyhow::bail!(
                "git log failed: {}",
                String::from_utf8_lossy(&out.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&out.stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changelog {
    /// Tag the log starts from; `None` means the full history.
    pub since: Option<String>,
    pub entries: Vec<String>,
}

impl fmt::Display for Changelog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "* {entry}")?;
        }
        Ok(())
    }
}

pub fn changelog(log: &dyn CommitLog) -> anyhow::Result<Changelog> {
    let since: Option<String> = log.last_tag()?;
    let entries: Vec<String> = log.oneline(since.as_deref())?;
    Ok(Changelog { since, entries })
}
