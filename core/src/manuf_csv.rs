//! # IEEE Registry Generator
//!
//! Builds the manufacturer table from the IEEE public listings (`oui.csv`,
//! `mam.csv`, `oui36.csv`). Every file shares the header
//! `Registry,Assignment,Organization Name,Organization Address`.
//!
//! Assignments are 6 (MA-L), 7 (MA-M) or 9 (MA-S) hex digits, so the
//! generated lookup tries the longest prefix of the queried address first.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use pnet::util::MacAddr;
use rayon::prelude::*;
use serde::Deserialize;
use tablegen_common::config::{Config, MalformedPolicy, Order};
use tablegen_common::error::{TableError, TemplateError};
use tablegen_common::network::mac::mac_to_hex;
use tablegen_common::render;
use tablegen_common::table::Table;
use tablegen_common::template::Template;
use tablegen_common::vendors::VendorRepository;
use tracing::{info, warn};

use crate::output::{self, Summary};
use crate::templates::{MANUF_CSV_TEMPLATE, MAP_PLACEHOLDER};

/// MA-S, MA-M and MA-L assignment lengths, longest first.
const ASSIGNMENT_SIZES: [usize; 3] = [9, 7, 6];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Assignment {
    #[serde(rename = "Registry")]
    pub registry: String,
    #[serde(rename = "Assignment")]
    pub assignment: String,
    #[serde(rename = "Organization Name")]
    pub organization_name: String,
    #[serde(rename = "Organization Address", default)]
    pub organization_address: String,
}

impl Assignment {
    /// Upper-case hex key, or `None` when the assignment is not hex.
    pub fn key(&self) -> Option<String> {
        let key: String = self.assignment.trim().to_ascii_uppercase();
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        Some(key)
    }

    /// Organization name as listed; CSV fields carry no comments, so a `#`
    /// is part of the name. Empty names fall back to the upper-case key.
    pub fn display_name(&self) -> String {
        let name: &str = self.organization_name.trim();
        if name.is_empty() {
            return self.key().unwrap_or_default();
        }
        name.to_string()
    }
}

/// Reads every record of one registry file.
///
/// Line numbers in errors are 1-based and count the header.
pub fn read_assignments<R: Read>(
    reader: R,
    policy: MalformedPolicy,
) -> Result<Vec<Assignment>, TableError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: csv::StringRecord = csv_reader
        .headers()
        .map_err(|e| TableError::malformed(1, "", e.to_string()))?
        .clone();

    let mut assignments: Vec<Assignment> = Vec::new();
    let mut skipped: usize = 0;

    for result in csv_reader.records() {
        let outcome: Result<Assignment, TableError> = result
            .map_err(|e| {
                let line_no: usize = e
                    .position()
                    .map(|pos| pos.line() as usize)
                    .unwrap_or_default();
                TableError::malformed(line_no, "", e.to_string())
            })
            .and_then(|row| parse_row(&row, &headers));

        match (outcome, policy) {
            (Ok(record), _) => assignments.push(record),
            (Err(e), MalformedPolicy::Abort) => return Err(e),
            (Err(e), MalformedPolicy::Skip) => {
                warn!("skipping {e}");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!("{skipped} malformed record(s) skipped");
    }

    Ok(assignments)
}

fn parse_row(row: &csv::StringRecord, headers: &csv::StringRecord) -> Result<Assignment, TableError> {
    let line_no: usize = row
        .position()
        .map(|pos| pos.line() as usize)
        .unwrap_or_default();
    let line: String = row.iter().collect::<Vec<&str>>().join(",");

    let record: Assignment = row
        .deserialize(Some(headers))
        .map_err(|e| TableError::malformed(line_no, &line, e.to_string()))?;

    if record.key().is_none() {
        return Err(TableError::malformed(line_no, &line, "assignment is not hex"));
    }
    Ok(record)
}

#[derive(Debug, Clone, Default)]
pub struct RegistryIndex {
    table: Table<String>,
}

impl RegistryIndex {
    /// Builds the table from already parsed registries, in the given order.
    pub fn from_assignments<I>(assignments: I) -> Self
    where
        I: IntoIterator<Item = Assignment>,
    {
        let table: Table<String> = assignments
            .into_iter()
            .filter_map(|record| record.key().map(|key| (key, record.display_name())))
            .collect();
        Self { table }
    }

    /// Parses all files in parallel and merges them in argument order, so a
    /// later file overrides the name of a repeated assignment.
    pub fn load(paths: &[PathBuf], policy: MalformedPolicy) -> anyhow::Result<Self> {
        let per_file: Vec<Vec<Assignment>> = paths
            .par_iter()
            .map(|path| -> anyhow::Result<Vec<Assignment>> {
                let file = std::fs::File::open(path)
                    .with_context(|| format!("opening {}", path.display()))?;
                let records: Vec<Assignment> = read_assignments(file, policy)
                    .with_context(|| format!("parsing {}", path.display()))?;
                info!("Loaded {} assignments from {}", records.len(), path.display());
                Ok(records)
            })
            .collect::<anyhow::Result<Vec<Vec<Assignment>>>>()?;

        Ok(Self::from_assignments(per_file.into_iter().flatten()))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn lookup(&self, mac_addr: MacAddr) -> Option<&str> {
        let hex: String = mac_to_hex(mac_addr);
        ASSIGNMENT_SIZES
            .iter()
            .find_map(|&size| self.table.get(&hex[..size].to_string()))
    }

    pub fn render(&self, template: &Template, order: Order) -> Result<String, TemplateError> {
        let body: String = render::render_entries(&self.table, order);
        template.render(&[(MAP_PLACEHOLDER, &body)])
    }
}

impl VendorRepository for RegistryIndex {
    fn get_vendor(&self, mac_addr: MacAddr) -> Option<String> {
        self.lookup(mac_addr).map(str::to_string)
    }
}

pub fn generate(
    inputs: &[PathBuf],
    output_path: &Path,
    template: Option<&Path>,
    cfg: &Config,
) -> anyhow::Result<Summary> {
    if inputs.is_empty() {
        anyhow::bail!("at least one registry CSV file is required");
    }

    let template: Template = Template::load_or(template, MANUF_CSV_TEMPLATE)?;
    let index: RegistryIndex = RegistryIndex::load(inputs, cfg.on_malformed)?;
    let source: String = index.render(&template, cfg.order)?;
    output::write_output(output_path, &source)?;

    Ok(Summary {
        output: output_path.to_path_buf(),
        tables: vec![("manuf", index.len())],
        bytes: source.len(),
    })
}
