//! # tablegen core
//!
//! One module per pipeline. Each reads a reference dataset, builds a
//! [`Table`](tablegen_common::table::Table) and renders it into Go source:
//!
//! * [`ble`]: Bluetooth company, service and characteristic registries (JSON).
//! * [`manuf_csv`]: IEEE MA-L / MA-M / MA-S registries (CSV).
//! * [`manuf`]: Wireshark `manuf` file, flattened to mask keys.
//! * [`oui`]: `oui.dat` prefix list.
//!
//! [`release`] is the odd one out: it bumps a version string and prepares the
//! git commands for a release.

pub mod ble;
pub mod flatfile;
pub mod manuf;
pub mod manuf_csv;
pub mod names;
pub mod output;
pub mod oui;
pub mod release;
pub mod templates;
