use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use colored::*;
use tablegen_common::config::Config;
use tablegen_common::success;
use tablegen_core::ble::{self, BleSources};
use tablegen_core::output::Summary;
use tablegen_core::{manuf, manuf_csv, oui};

use crate::commands::OutputArgs;
use crate::terminal::spinner::Spinner;
use crate::terminal::{colors, print};

pub fn ble(
    companies: &Path,
    services: &Path,
    characteristics: &Path,
    out: &OutputArgs,
    cfg: &Config,
) -> anyhow::Result<()> {
    let sources = BleSources {
        companies,
        services,
        characteristics,
    };
    run("Bluetooth tables", cfg, || {
        ble::generate(&sources, &out.output, out.template.as_deref(), cfg)
    })
}

pub fn manuf_csv(inputs: &[PathBuf], out: &OutputArgs, cfg: &Config) -> anyhow::Result<()> {
    run("manufacturer table", cfg, || {
        manuf_csv::generate(inputs, &out.output, out.template.as_deref(), cfg)
    })
}

pub fn manuf(input: &Path, out: &OutputArgs, cfg: &Config) -> anyhow::Result<()> {
    run("manufacturer table", cfg, || {
        manuf::generate(input, &out.output, out.template.as_deref(), cfg)
    })
}

pub fn oui(input: &Path, out: &OutputArgs, cfg: &Config) -> anyhow::Result<()> {
    run("OUI table", cfg, || {
        oui::generate(input, &out.output, out.template.as_deref(), cfg)
    })
}

fn run<F>(label: &str, cfg: &Config, generate: F) -> anyhow::Result<()>
where
    F: FnOnce() -> anyhow::Result<Summary>,
{
    let start_time: Instant = Instant::now();
    let spinner = Spinner::start(format!("Generating {label}..."), cfg.quiet);
    let result: anyhow::Result<Summary> = generate();
    drop(spinner);

    let summary: Summary = result?;
    generation_ends(&summary, start_time.elapsed(), cfg);
    Ok(())
}

fn generation_ends(summary: &Summary, total_time: Duration, cfg: &Config) {
    print::header("generated", cfg.quiet);

    if cfg.quiet == 0 {
        print::set_key_width(["Output", "Size"]);
        print::aligned_line(
            "Output",
            summary.output.display().to_string().color(colors::PATH),
        );
        print::aligned_line("Size", format!("{} bytes", summary.bytes));

        let tables: Vec<(String, ColoredString)> = summary
            .tables
            .iter()
            .map(|(name, count)| (name.to_string(), count.to_string().color(colors::ACCENT)))
            .collect();
        print::as_tree_one_level(tables);
    }

    print_summary(summary.total_entries(), total_time, cfg);
}

fn print_summary(entries: usize, total_time: Duration, cfg: &Config) {
    let entries: ColoredString = format!("{entries} entries").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!("Generation complete: {entries} written in {total_time}");

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => success!("{}", output),
    }
}
