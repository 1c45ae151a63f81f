use std::path::Path;

use anyhow::Context;
use colored::*;
use console::Term;
use tablegen_common::config::Config;
use tablegen_common::success;
use tablegen_core::release::{self, Changelog, GitCommitLog, ReleasePlan, VersionMatch};
use tracing::warn;

use crate::terminal::{colors, print};
use crate::tprint;

pub fn release(file: &Path, dry_run: bool, cfg: &Config) -> anyhow::Result<()> {
    let (source, current): (String, VersionMatch) = release::read_version(file)?;

    print::set_key_width(["File", "Current"]);
    print::aligned_line("File", file.display().to_string().color(colors::PATH));
    print::aligned_line("Current", current.value.as_str().color(colors::ACCENT));

    let new_version: String = prompt_version()?;

    if dry_run {
        // validates without touching the file
        release::bump(&source, &new_version)?;
        warn!("Dry run, {} left unchanged", file.display());
    } else {
        release::write_version(file, &source, &new_version)?;
        success!("{} updated to {}", file.display(), new_version.trim());
    }

    let plan: ReleasePlan = ReleasePlan::new(file, &new_version);
    print::header("release commands", cfg.quiet);
    for command in plan.commands() {
        print::print(&command.color(colors::COMMAND).to_string());
    }

    tprint!();
    print_changelog(file, cfg);
    Ok(())
}

fn prompt_version() -> anyhow::Result<String> {
    let term: Term = Term::stdout();
    term.write_str("New version: ")
        .context("writing prompt")?;
    let answer: String = term.read_line().context("reading new version")?;
    Ok(answer.trim().to_string())
}

fn print_changelog(file: &Path, cfg: &Config) {
    let repo = file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    match release::changelog(&GitCommitLog::new(repo)) {
        Ok(changelog) => show_changelog(&changelog, cfg),
        Err(e) => warn!("Changelog unavailable: {e:#}"),
    }
}

fn show_changelog(changelog: &Changelog, cfg: &Config) {
    let title: String = match &changelog.since {
        Some(tag) => format!("changelog since {tag}"),
        None => "changelog".to_string(),
    };
    print::header(&title, cfg.quiet);

    if changelog.entries.is_empty() {
        warn!("No commits found");
        return;
    }
    for line in changelog.to_string().lines() {
        print::print(line);
    }
}
