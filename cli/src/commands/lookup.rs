use colored::*;
use pnet::util::MacAddr;
use tablegen_common::config::Config;
use tablegen_common::network::mac;
use tablegen_common::vendors::VendorRepository;
use tablegen_core::manuf::ManufIndex;
use tablegen_core::manuf_csv::RegistryIndex;
use tablegen_core::oui::OuiIndex;
use tracing::warn;

use crate::commands::LookupSource;
use crate::terminal::{colors, print};

fn load_repository(source: &LookupSource, cfg: &Config) -> anyhow::Result<Box<dyn VendorRepository>> {
    if let Some(path) = &source.manuf {
        return Ok(Box::new(ManufIndex::load(path, cfg.on_malformed)?));
    }
    if let Some(paths) = &source.csv {
        return Ok(Box::new(RegistryIndex::load(paths, cfg.on_malformed)?));
    }
    if let Some(path) = &source.oui {
        return Ok(Box::new(OuiIndex::load(path, cfg.on_malformed)?));
    }
    anyhow::bail!("no vendor dataset given (use --manuf, --csv or --oui)");
}

pub fn lookup(mac_str: &str, source: &LookupSource, cfg: &Config) -> anyhow::Result<()> {
    let mac_addr: MacAddr = mac::parse_mac(mac_str)?;
    let repository: Box<dyn VendorRepository> = load_repository(source, cfg)?;

    print::header("vendor lookup", cfg.quiet);
    print::set_key_width(["MAC", "Vendor"]);
    print::aligned_line("MAC", mac_addr.to_string().color(colors::ACCENT));

    match repository.get_vendor(mac_addr) {
        Some(vendor) => print::aligned_line("Vendor", vendor.color(colors::VENDOR)),
        None => {
            print::aligned_line("Vendor", "unknown".red());
            warn!("No prefix of {mac_addr} is known to the dataset");
        }
    }
    Ok(())
}
