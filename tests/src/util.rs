use std::path::{Path, PathBuf};

use tablegen_common::config::{Config, MalformedPolicy, Order};

pub fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path: PathBuf = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

pub fn cfg(order: Order, on_malformed: MalformedPolicy) -> Config {
    Config {
        quiet: 2,
        no_banner: true,
        order,
        on_malformed,
    }
}

pub fn default_cfg() -> Config {
    cfg(Order::Sorted, MalformedPolicy::Abort)
}
