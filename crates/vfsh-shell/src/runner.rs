//! Interactive and scripted front ends.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use color_eyre::eyre::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::info;
use vfsh_core::EngineConfig;

use crate::session::{Reply, Shell};

/// Run the line-editing REPL until `exit`, Ctrl-C or Ctrl-D.
pub fn run_interactive(config: EngineConfig) -> Result<()> {
    let mut shell = Shell::new(config);
    let mut editor = DefaultEditor::new().context("Failed to initialise line editor")?;
    let mut stdout = io::stdout();

    writeln!(
        stdout,
        "vfsh {} - type 'help' for a list of commands",
        env!("CARGO_PKG_VERSION")
    )?;

    loop {
        match editor.readline(&shell.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                if !emit(shell.execute_line(&line), &mut stdout)? {
                    break;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("Failed to read input"),
        }
    }

    info!(target: "vfsh::shell", "session ended");
    Ok(())
}

/// Execute every line of a script file in order.
pub fn run_script(path: &Path, config: EngineConfig) -> Result<()> {
    let script = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    info!(target: "vfsh::shell", script = %path.display(), "running script");

    let mut shell = Shell::new(config);
    let mut stdout = io::stdout().lock();
    run_lines(&mut shell, script.lines(), &mut stdout)?;
    Ok(())
}

/// Feed lines to a shell, writing replies to `out`. Stops at `exit`.
///
/// Returns the number of lines executed.
pub fn run_lines<'a, W: Write>(
    shell: &mut Shell,
    lines: impl IntoIterator<Item = &'a str>,
    out: &mut W,
) -> io::Result<usize> {
    let mut executed = 0;
    for line in lines {
        executed += 1;
        if !emit(shell.execute_line(line), out)? {
            break;
        }
    }
    Ok(executed)
}

/// Write a reply, returning false when the session should stop.
fn emit<W: Write>(reply: Reply, out: &mut W) -> io::Result<bool> {
    match reply {
        Reply::Output(lines) => {
            for line in lines {
                writeln!(out, "{line}")?;
            }
            Ok(true)
        }
        Reply::Exit => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_lines_stops_at_exit() {
        let mut shell = Shell::default();
        let mut out = Vec::new();
        let executed = run_lines(&mut shell, ["mkdir a", "exit", "mkdir b"], &mut out).unwrap();

        assert_eq!(executed, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "Folder 'a' created.\n");
        assert!(shell.engine().tree().resolve("/b").is_err());
    }
}
