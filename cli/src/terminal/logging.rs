use colored::*;
use tablegen_common::config::Config;
use tablegen_common::log::SUCCESS_TARGET;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::print::PRINT_TARGET;
use crate::terminal::spinner::SpinnerWriter;

pub struct TablegenFormatter;

/// Pulls the `raw_msg` field out of events emitted by `print::print`.
#[derive(Default)]
struct RawMessage(Option<String>);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}
}

impl<S, N> FormatEvent<S, N> for TablegenFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0.unwrap_or_default());
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO if meta.target() == SUCCESS_TARGET => ("[+]", |s| s.green().bold()),
            Level::INFO => ("[*]", |s| s.cyan()),
            Level::WARN => ("[!]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the level derived
/// from `-q`; the print target stays enabled either way.
pub fn init_logging(cfg: &Config) {
    let env: Option<String> = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter: EnvFilter = build_filter(cfg.quiet, env.as_deref());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(TablegenFormatter)
        .with_writer(|| SpinnerWriter)
        .try_init();
}

fn build_filter(quiet: u8, env: Option<&str>) -> EnvFilter {
    let default_filter: &str = match quiet {
        0 | 1 => "info",
        _ => "warn,tablegen::success=info",
    };

    let filter: EnvFilter = env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter));

    match format!("{PRINT_TARGET}=info").parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}
