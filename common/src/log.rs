//! Logging helpers shared by every crate in the workspace.
//!
//! Plain levels go straight through `tracing`. `success!` logs at info level
//! under its own target so the terminal formatter can give it a distinct
//! symbol.

pub const SUCCESS_TARGET: &str = "tablegen::success";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "tablegen::success", $($arg)*)
    };
}
