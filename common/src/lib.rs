//! Shared building blocks for the `tablegen` generators: configuration, the
//! table model, Go source rendering, templates and logging helpers.

pub mod config;
pub mod error;
pub mod log;
pub mod network;
pub mod render;
pub mod table;
pub mod template;
pub mod vendors;

#[doc(hidden)]
pub use tracing as __tracing;
