//! # Wireshark `manuf` Generator
//!
//! Reads the flat `manuf` file shipped with Wireshark and flattens its
//! variable-length prefixes into `"<mask>.<value>"` keys.
//!
//! A line looks like one of:
//! * `00:00:0C<TAB>Cisco<TAB>Cisco Systems, Inc`
//! * `00:1B:C5:00:00:00/36<TAB>Convergi<TAB>Converging Systems Inc.`
//! * `00:00:01<TAB>Xerox  # XEROX CORPORATION`
//!
//! The generated Go lookup walks masks from 0 to 47 and shifts the queried
//! address by each, so a `/36` sub-allocation is found before the `/24` OUI
//! that contains it.

use std::fmt;
use std::path::Path;

use pnet::util::MacAddr;
use tablegen_common::config::{Config, MalformedPolicy, Order};
use tablegen_common::error::{TableError, TemplateError};
use tablegen_common::network::mac::mac_to_u64;
use tablegen_common::render::{self, GoLiteral};
use tablegen_common::table::Table;
use tablegen_common::template::Template;
use tablegen_common::vendors::VendorRepository;
use tracing::info;

use crate::flatfile;
use crate::names;
use crate::output::{self, Summary};
use crate::templates::{MANUF_TEMPLATE, MAP_PLACEHOLDER};

const ADDRESS_BITS: u32 = 48;
const MAX_HEX_DIGITS: usize = 12;

/// A prefix of `48 - mask` bits, stored as the address shifted right by `mask`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaskKey {
    pub mask: u32,
    pub value: u64,
}

impl MaskKey {
    /// The key a full 48-bit address produces for a given mask.
    pub fn for_address(address: u64, mask: u32) -> Self {
        Self {
            mask,
            value: address >> mask,
        }
    }

    /// Parses a `manuf` prefix token.
    ///
    /// Without a `/bits` suffix the prefix length is four bits per hex digit.
    /// With it, the explicit length wins and the address part is taken as a
    /// (left-aligned) 48-bit address.
    pub fn parse(token: &str) -> Result<Self, TableError> {
        let invalid = |reason: String| TableError::InvalidPrefix {
            token: token.to_string(),
            reason,
        };

        let (address_part, bits_part) = match token.split_once('/') {
            Some((address, bits)) => (address, Some(bits)),
            None => (token, None),
        };

        let hex: String = address_part
            .chars()
            .filter(|c| !matches!(c, ':' | '-' | '.'))
            .collect();

        if hex.is_empty() {
            return Err(invalid("no hex digits".to_string()));
        }
        if hex.len() > MAX_HEX_DIGITS {
            return Err(invalid(format!("more than {MAX_HEX_DIGITS} hex digits")));
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("not a hex address".to_string()));
        }

        let raw: u64 =
            u64::from_str_radix(&hex, 16).map_err(|e| invalid(e.to_string()))?;
        let implied_mask: u32 = ADDRESS_BITS - 4 * hex.len() as u32;
        let address: u64 = raw << implied_mask;

        let mask: u32 = match bits_part {
            None => implied_mask,
            Some(bits) => {
                let bits: u32 = bits
                    .trim()
                    .parse::<u32>()
                    .map_err(|e| invalid(format!("bad prefix length: {e}")))?;
                if bits > ADDRESS_BITS {
                    return Err(invalid(format!("prefix length {bits} > {ADDRESS_BITS}")));
                }
                ADDRESS_BITS - bits
            }
        };

        Ok(Self::for_address(address, mask))
    }
}

impl fmt::Display for MaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.mask, self.value)
    }
}

impl GoLiteral for MaskKey {
    fn go_literal(&self) -> String {
        render::go_string(&self.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManufEntry {
    pub key: MaskKey,
    pub short: String,
    pub name: String,
}

/// Splits off the first whitespace-delimited token.
fn next_token(s: &str) -> (&str, &str) {
    let s: &str = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(idx) => (&s[..idx], &s[idx..]),
        None => (s, ""),
    }
}

pub fn parse_line(line_no: usize, line: &str) -> Result<ManufEntry, TableError> {
    let (prefix, rest) = next_token(line);
    let (short, rest) = next_token(rest);

    if short.is_empty() || short.starts_with('#') {
        return Err(TableError::malformed(line_no, line, "missing short name"));
    }

    let key: MaskKey =
        MaskKey::parse(prefix).map_err(|e| TableError::malformed(line_no, line, e.to_string()))?;

    Ok(ManufEntry {
        key,
        short: short.to_string(),
        name: names::display_name(rest, short),
    })
}

/// Mask-keyed vendor table built from a `manuf` file.
#[derive(Debug, Clone, Default)]
pub struct ManufIndex {
    table: Table<MaskKey>,
}

impl ManufIndex {
    pub fn parse(text: &str, policy: MalformedPolicy) -> Result<Self, TableError> {
        let entries: Vec<ManufEntry> = flatfile::parse_lines(text, policy, parse_line)?;
        let table: Table<MaskKey> = entries
            .into_iter()
            .map(|entry| (entry.key, entry.name))
            .collect();
        Ok(Self { table })
    }

    pub fn load(path: &Path, policy: MalformedPolicy) -> anyhow::Result<Self> {
        let text: String = output::read_input(path)?;
        let index: ManufIndex = Self::parse(&text, policy)?;
        info!("Loaded {} prefixes from {}", index.len(), path.display());
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Longest matching prefix first, mirroring the generated `ManufLookup`.
    pub fn lookup(&self, mac_addr: MacAddr) -> Option<&str> {
        let address: u64 = mac_to_u64(mac_addr);
        (0..ADDRESS_BITS)
            .map(|mask| MaskKey::for_address(address, mask))
            .find_map(|key| self.table.get(&key))
    }

    pub fn render(&self, template: &Template, order: Order) -> Result<String, TemplateError> {
        let body: String = render::render_entries(&self.table, order);
        template.render(&[(MAP_PLACEHOLDER, &body)])
    }
}

impl VendorRepository for ManufIndex {
    fn get_vendor(&self, mac_addr: MacAddr) -> Option<String> {
        self.lookup(mac_addr).map(str::to_string)
    }
}

/// Reads `input`, renders it through `template` (or the built-in one) and
/// writes `output`. Nothing is written if any step fails.
pub fn generate(
    input: &Path,
    output_path: &Path,
    template: Option<&Path>,
    cfg: &Config,
) -> anyhow::Result<Summary> {
    let template: Template = Template::load_or(template, MANUF_TEMPLATE)?;
    let index: ManufIndex = ManufIndex::load(input, cfg.on_malformed)?;
    let source: String = index.render(&template, cfg.order)?;
    output::write_output(output_path, &source)?;

    Ok(Summary {
        output: output_path.to_path_buf(),
        tables: vec![("manuf", index.len())],
        bytes: source.len(),
    })
}
