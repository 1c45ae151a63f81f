//! `oui.dat` generator: one `<prefix> <vendor>` pair per line.

use std::path::Path;

use pnet::util::MacAddr;
use tablegen_common::config::{Config, MalformedPolicy, Order};
use tablegen_common::error::{TableError, TemplateError};
use tablegen_common::network::mac::mac_to_hex;
use tablegen_common::render;
use tablegen_common::table::Table;
use tablegen_common::template::Template;
use tablegen_common::vendors::VendorRepository;
use tracing::info;

use crate::flatfile;
use crate::names;
use crate::output::{self, Summary};
use crate::templates::{MAP_PLACEHOLDER, OUI_TEMPLATE};

const OUI_HEX_DIGITS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OuiEntry {
    /// Lower-case hex, separators removed.
    pub prefix: String,
    pub vendor: String,
}

/// Lower-cases the prefix and drops `:`/`-` separators.
pub fn normalize_prefix(prefix: &str) -> String {
    prefix
        .chars()
        .filter(|c| !matches!(c, ':' | '-'))
        .collect::<String>()
        .to_ascii_lowercase()
}

pub fn parse_line(line_no: usize, line: &str) -> Result<OuiEntry, TableError> {
    let Some((prefix, vendor)) = line.split_once(char::is_whitespace) else {
        return Err(TableError::malformed(line_no, line, "missing vendor"));
    };

    let prefix: String = normalize_prefix(prefix);
    if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(TableError::malformed(line_no, line, "prefix is not hex"));
    }

    let vendor: String = names::display_name(vendor, "");
    if vendor.is_empty() {
        return Err(TableError::malformed(line_no, line, "missing vendor"));
    }

    Ok(OuiEntry { prefix, vendor })
}

#[derive(Debug, Clone, Default)]
pub struct OuiIndex {
    table: Table<String>,
}

impl OuiIndex {
    pub fn parse(text: &str, policy: MalformedPolicy) -> Result<Self, TableError> {
        let entries: Vec<OuiEntry> = flatfile::parse_lines(text, policy, parse_line)?;
        let table: Table<String> = entries
            .into_iter()
            .map(|entry| (entry.prefix, entry.vendor))
            .collect();
        Ok(Self { table })
    }

    pub fn load(path: &Path, policy: MalformedPolicy) -> anyhow::Result<Self> {
        let text: String = output::read_input(path)?;
        let index: OuiIndex = Self::parse(&text, policy)?;
        info!("Loaded {} OUIs from {}", index.len(), path.display());
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn lookup(&self, mac_addr: MacAddr) -> Option<&str> {
        let prefix: String = mac_to_hex(mac_addr)[..OUI_HEX_DIGITS].to_ascii_lowercase();
        self.table.get(&prefix)
    }

    pub fn render(&self, template: &Template, order: Order) -> Result<String, TemplateError> {
        let body: String = render::render_entries(&self.table, order);
        template.render(&[(MAP_PLACEHOLDER, &body)])
    }
}

impl VendorRepository for OuiIndex {
    fn get_vendor(&self, mac_addr: MacAddr) -> Option<String> {
        self.lookup(mac_addr).map(str::to_string)
    }
}

pub fn generate(
    input: &Path,
    output_path: &Path,
    template: Option<&Path>,
    cfg: &Config,
) -> anyhow::Result<Summary> {
    let template: Template = Template::load_or(template, OUI_TEMPLATE)?;
    let index: OuiIndex = OuiIndex::load(input, cfg.on_malformed)?;
    let source: String = index.render(&template, cfg.order)?;
    output::write_output(output_path, &source)?;

    Ok(Summary {
        output: output_path.to_path_buf(),
        tables: vec![("oui", index.len())],
        bytes: source.len(),
    })
}
