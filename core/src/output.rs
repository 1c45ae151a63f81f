use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

/// What a generator produced, for the CLI to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output: PathBuf,
    /// `(table name, entry count)` in template order.
    pub tables: Vec<(&'static str, usize)>,
    pub bytes: usize,
}

impl Summary {
    pub fn total_entries(&self) -> usize {
        self.tables.iter().map(|(_, count)| count).sum()
    }
}

/// Writes the generated source, replacing whatever was there.
pub fn write_output(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
    debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

pub fn read_input(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
