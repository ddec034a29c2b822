//! Command surface for vfsh.
//!
//! This crate turns text commands into calls on a [`vfsh_core::Engine`] and
//! renders the results. It can be driven interactively through a line
//! editor or fed a script file.
//!
//! # Usage
//!
//! ```rust
//! use vfsh_shell::{Reply, Shell};
//!
//! let mut shell = Shell::default();
//! shell.execute_line("mkdir docs");
//! assert_eq!(
//!     shell.execute_line("find docs"),
//!     Reply::Output(vec!["Found at: /docs".to_string()])
//! );
//! ```

mod command;
mod help;
mod runner;
mod session;

pub use command::{Command, CommandName, ShellError, parse_command};
pub use help::{HelpEntry, HelpSection, get_help_sections, render_help};
pub use runner::{run_interactive, run_lines, run_script};
pub use session::{Reply, Shell};
