mod commands;
mod terminal;

use commands::{CommandLine, Commands, generate, lookup, release};
use tablegen_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.config();

    logging::init_logging(&cfg);
    print::banner(cfg.no_banner, cfg.quiet);

    let result: anyhow::Result<()> = match &commands.command {
        Commands::Ble {
            companies,
            services,
            characteristics,
            out,
        } => {
            print::header("bluetooth registries", cfg.quiet);
            generate::ble(companies, services, characteristics, out, &cfg)
        }
        Commands::ManufCsv { inputs, out } => {
            print::header("ieee registries", cfg.quiet);
            generate::manuf_csv(inputs, out, &cfg)
        }
        Commands::Manuf { input, out } => {
            print::header("wireshark manuf", cfg.quiet);
            generate::manuf(input, out, &cfg)
        }
        Commands::Oui { input, out } => {
            print::header("oui list", cfg.quiet);
            generate::oui(input, out, &cfg)
        }
        Commands::Lookup { mac, source } => lookup::lookup(mac, source, &cfg),
        Commands::Release { file, dry_run } => {
            print::header("preparing release", cfg.quiet);
            release::release(file, *dry_run, &cfg)
        }
    };

    print::end_of_program(cfg.quiet);
    result
}
