//! # Bluetooth Assigned Numbers Generator
//!
//! Turns the JSON exports of the Bluetooth numbers database into three Go
//! maps: company identifiers, GATT services and GATT characteristics.
//!
//! * `company_ids.json`: `[{ "code": 76, "name": "Apple, Inc." }, ...]`
//! * `service_uuids.json`, `characteristic_uuids.json`:
//!   `[{ "name": "Battery", "identifier": "org.bluetooth.service.battery_service", "uuid": "180F", "source": "gss" }, ...]`
//!
//! 16 and 32-bit UUIDs are expanded against the Bluetooth base UUID so that
//! every key in the service and characteristic maps is a full 128-bit UUID.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tablegen_common::config::{Config, Order};
use tablegen_common::error::TemplateError;
use tablegen_common::render;
use tablegen_common::table::Table;
use tablegen_common::template::Template;
use tracing::info;

use crate::output::{self, Summary};
use crate::templates::{
    BLE_TEMPLATE, CHARACTERISTICS_PLACEHOLDER, COMPANIES_PLACEHOLDER, SERVICES_PLACEHOLDER,
};

/// Everything after the first eight hex digits of the Bluetooth base UUID.
const BASE_UUID_SUFFIX: &str = "-0000-1000-8000-00805f9b34fb";
const SHORT_UUID_WIDTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompanyRecord {
    pub code: u16,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UuidRecord {
    pub name: String,
    #[serde(default)]
    pub identifier: String,
    pub uuid: String,
    #[serde(default)]
    pub source: String,
}

/// Expands a short Bluetooth UUID to its 128-bit form.
///
/// Anything containing a hyphen is taken to be a full UUID already and is
/// returned untouched. Otherwise the code is zero-padded to eight digits and
/// spliced into the base UUID, lower-cased. Lengths are not validated.
pub fn normalize_uuid(uuid: &str) -> String {
    if uuid.contains('-') {
        return uuid.to_string();
    }
    format!("{:0>width$}{}", uuid, BASE_UUID_SUFFIX, width = SHORT_UUID_WIDTH).to_lowercase()
}

#[derive(Debug, Clone, Default)]
pub struct BleTables {
    pub companies: Table<u16>,
    pub services: Table<String>,
    pub characteristics: Table<String>,
}

fn uuid_table(records: Vec<UuidRecord>) -> Table<String> {
    records
        .into_iter()
        .map(|record| (normalize_uuid(record.uuid.trim()), record.name))
        .collect()
}

impl BleTables {
    pub fn from_records(
        companies: Vec<CompanyRecord>,
        services: Vec<UuidRecord>,
        characteristics: Vec<UuidRecord>,
    ) -> Self {
        Self {
            companies: companies
                .into_iter()
                .map(|record| (record.code, record.name))
                .collect(),
            services: uuid_table(services),
            characteristics: uuid_table(characteristics),
        }
    }

    pub fn load(companies: &Path, services: &Path, characteristics: &Path) -> anyhow::Result<Self> {
        let tables: BleTables = Self::from_records(
            read_json(companies)?,
            read_json(services)?,
            read_json(characteristics)?,
        );
        info!(
            "Loaded {} companies, {} services and {} characteristics",
            tables.companies.len(),
            tables.services.len(),
            tables.characteristics.len()
        );
        Ok(tables)
    }

    pub fn render(&self, template: &Template, order: Order) -> Result<String, TemplateError> {
        let companies: String = render::render_entries(&self.companies, order);
        let services: String = render::render_entries(&self.services, order);
        let characteristics: String = render::render_entries(&self.characteristics, order);

        template.render(&[
            (COMPANIES_PLACEHOLDER, &companies),
            (SERVICES_PLACEHOLDER, &services),
            (CHARACTERISTICS_PLACEHOLDER, &characteristics),
        ])
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text: String = output::read_input(path)?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Input locations for [`generate`].
#[derive(Debug, Clone)]
pub struct BleSources<'a> {
    pub companies: &'a Path,
    pub services: &'a Path,
    pub characteristics: &'a Path,
}

pub fn generate(
    sources: &BleSources<'_>,
    output_path: &Path,
    template: Option<&Path>,
    cfg: &Config,
) -> anyhow::Result<Summary> {
    let template: Template = Template::load_or(template, BLE_TEMPLATE)?;
    let tables: BleTables =
        BleTables::load(sources.companies, sources.services, sources.characteristics)?;
    let source: String = tables.render(&template, cfg.order)?;
    output::write_output(output_path, &source)?;

    Ok(Summary {
        output: output_path.to_path_buf(),
        tables: vec![
            ("BLE_Companies", tables.companies.len()),
            ("BLE_Services", tables.services.len()),
            ("BLE_Characteristics", tables.characteristics.len()),
        ],
        bytes: source.len(),
    })
}
