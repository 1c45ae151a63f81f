/// Order in which table entries are written to the generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Sorted by key. Output is byte-identical across runs.
    #[default]
    Sorted,
    /// The order in which keys were first seen in the input.
    Insertion,
}

/// What a line parser does when it meets a line it cannot understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Stop the whole run. Nothing is written.
    #[default]
    Abort,
    /// Log the line at warn level and keep going.
    Skip,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Reduces terminal output, `1` drops decoration, `2` drops everything but errors.
    pub quiet: u8,
    pub no_banner: bool,
    pub order: Order,
    pub on_malformed: MalformedPolicy,
}
