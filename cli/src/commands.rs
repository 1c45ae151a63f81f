pub mod generate;
pub mod lookup;
pub mod release;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tablegen_common::config::{Config, MalformedPolicy, Order};

#[derive(Parser)]
#[command(name = "tablegen")]
#[command(about = "Generates Go lookup tables from Bluetooth and IEEE vendor registries.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less output, repeat for even less (-qq keeps only results and errors)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Emit entries in input order instead of sorting them by key
    #[arg(long, global = true)]
    pub unsorted: bool,

    /// Log and skip malformed input lines instead of aborting
    #[arg(long, global = true)]
    pub skip_malformed: bool,
}

#[derive(Args)]
pub struct OutputArgs {
    /// Generated Go file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Template to use instead of the built-in one
    #[arg(short, long)]
    pub template: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Bluetooth company, service and characteristic tables from JSON
    #[command(alias = "b")]
    Ble {
        #[arg(long, default_value = "company_ids.json")]
        companies: PathBuf,
        #[arg(long, default_value = "service_uuids.json")]
        services: PathBuf,
        #[arg(long, default_value = "characteristic_uuids.json")]
        characteristics: PathBuf,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Manufacturer table from IEEE registry CSV files
    #[command(name = "manuf-csv", alias = "c")]
    ManufCsv {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Manufacturer table from a Wireshark `manuf` file
    #[command(alias = "m")]
    Manuf {
        input: PathBuf,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// OUI table from an `oui.dat` file
    #[command(alias = "o")]
    Oui {
        input: PathBuf,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Resolve the vendor of a MAC address against one of the datasets
    #[command(alias = "l")]
    Lookup {
        mac: String,
        #[command(flatten)]
        source: LookupSource,
    },
    /// Bump the version string and print the release commands
    #[command(alias = "r")]
    Release {
        #[arg(default_value = "core/banner.go")]
        file: PathBuf,
        /// Print the plan without rewriting the file
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct LookupSource {
    /// Wireshark `manuf` file
    #[arg(long)]
    pub manuf: Option<PathBuf>,
    /// IEEE registry CSV files
    #[arg(long, num_args = 1..)]
    pub csv: Option<Vec<PathBuf>>,
    /// `oui.dat` file
    #[arg(long)]
    pub oui: Option<PathBuf>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            no_banner: self.no_banner,
            order: if self.unsorted {
                Order::Insertion
            } else {
                Order::Sorted
            },
            on_malformed: if self.skip_malformed {
                MalformedPolicy::Skip
            } else {
                MalformedPolicy::Abort
            },
        }
    }
}
