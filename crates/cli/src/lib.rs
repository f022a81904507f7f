//! Command-line surface: argument parsing, the interactive shell, and reports.

pub mod args;
pub mod command;
pub mod render;
pub mod report;
pub mod shell;

pub use args::{Cli, Commands};
pub use command::ShellCommand;
pub use shell::{SessionOutcome, Shell};
