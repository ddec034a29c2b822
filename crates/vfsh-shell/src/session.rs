//! Command dispatch against a live engine.

use tracing::debug;
use vfsh_core::{Engine, EngineConfig, Navigation, NodeKind, Recovery};

use crate::command::{Command, ShellError, parse_command};
use crate::help::render_help;

/// What the caller should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print these lines and keep going.
    Output(Vec<String>),
    /// End the session.
    Exit,
}

impl Reply {
    fn line(text: impl Into<String>) -> Self {
        Reply::Output(vec![text.into()])
    }

    fn nothing() -> Self {
        Reply::Output(Vec::new())
    }
}

/// Interactive session owning one namespace.
#[derive(Debug, Default)]
pub struct Shell {
    engine: Engine,
}

impl Shell {
    /// Create a session with a fresh namespace.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: Engine::new(config),
        }
    }

    /// Read access to the underlying engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Prompt shown before each line.
    pub fn prompt(&self) -> String {
        format!("vfsh:{}$ ", self.engine.pwd())
    }

    /// Parse and run one line. Errors come back as an `error:` line.
    pub fn execute_line(&mut self, line: &str) -> Reply {
        match parse_command(line).and_then(|cmd| self.execute(cmd)) {
            Ok(reply) => reply,
            Err(e) => {
                debug!(target: "vfsh::shell", line, error = %e, "command failed");
                Reply::line(format!("error: {e}"))
            }
        }
    }

    /// Run a parsed command.
    pub fn execute(&mut self, command: Command) -> Result<Reply, ShellError> {
        debug!(target: "vfsh::shell", ?command, "executing");

        let reply = match command {
            Command::Empty => Reply::nothing(),
            Command::Exit => Reply::Exit,
            Command::Help => Reply::Output(render_help()),
            Command::Pwd => Reply::line(self.engine.pwd()),
            Command::Ls => Reply::Output(
                self.engine
                    .ls()?
                    .iter()
                    .map(|node| {
                        format!(
                            "{} {} {} {} bytes",
                            node.kind.label(),
                            node.name,
                            node.created_display(),
                            node.size
                        )
                    })
                    .collect(),
            ),
            Command::Mkdir(name) => {
                self.engine.mkdir(&name)?;
                Reply::line(format!("Folder '{name}' created."))
            }
            Command::Touch { name, size } => {
                self.engine.touch(&name, size)?;
                Reply::line(format!("File '{name}' created."))
            }
            Command::Cd(target) => match self.engine.cd(&target)? {
                Navigation::Changed { .. } => Reply::nothing(),
                Navigation::AlreadyAtRoot => Reply::line("Already at root directory."),
                Navigation::NoPrevious => Reply::line("No previous working directory."),
            },
            Command::Rm(name) => {
                let removal = self.engine.rm(&name)?;
                let mut lines = Vec::new();
                if let Some(evicted) = removal.evicted {
                    lines.push(format!(
                        "Bin full: '{}' permanently deleted.",
                        evicted.path
                    ));
                }
                lines.push(format!("'{name}' removed and added to bin."));
                Reply::Output(lines)
            }
            Command::Size(path) => {
                let report = self.engine.size(&path)?;
                match report.kind {
                    NodeKind::Folder => Reply::line(format!(
                        "Size of {} and its contents: {} bytes",
                        report.name, report.size
                    )),
                    NodeKind::File => {
                        Reply::line(format!("Size of {}: {} bytes", report.name, report.size))
                    }
                }
            }
            Command::ShowBin => {
                let items = self.engine.showbin();
                if items.is_empty() {
                    Reply::line("Bin is empty.")
                } else {
                    let mut lines = vec!["Items in the bin:".to_string()];
                    lines.extend(items.into_iter().map(|item| {
                        format!(
                            "  {} ({}, {} bytes, removed {})",
                            item.path,
                            item.kind.label(),
                            item.size,
                            item.removed_at
                        )
                    }));
                    Reply::Output(lines)
                }
            }
            Command::EmptyBin => {
                let purged = self.engine.emptybin();
                Reply::line(format!("Bin emptied ({purged} item(s) deleted)."))
            }
            Command::Find(name) => {
                let found = self.engine.find(&name);
                if found.is_empty() {
                    Reply::line(format!("'{name}' not found."))
                } else {
                    Reply::Output(found.into_iter().map(|p| format!("Found at: {p}")).collect())
                }
            }
            Command::Mv { source, target } => {
                let path = self.engine.mv(&source, &target)?;
                Reply::line(format!("'{source}' moved to '{path}'."))
            }
            Command::Recover => match self.engine.recover()? {
                Recovery::Restored { path } => Reply::line(format!("Recovered '{path}'.")),
                Recovery::Discarded { path, reason } => Reply::line(format!(
                    "Could not restore '{path}' to its original position ({reason}); it was deleted."
                )),
            },
            Command::Tree => {
                let mut lines = vec!["/".to_string()];
                lines.extend(self.engine.listing().into_iter().map(|(depth, node)| {
                    let marker = if node.is_folder() { "/" } else { "" };
                    format!(
                        "{}{}{} ({} bytes)",
                        "  ".repeat(depth),
                        node.name,
                        marker,
                        node.size
                    )
                }));
                Reply::Output(lines)
            }
            Command::Export => {
                let json = self.engine.export_json()?;
                Reply::Output(json.lines().map(str::to_string).collect())
            }
        };
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(reply: Reply) -> Vec<String> {
        match reply {
            Reply::Output(lines) => lines,
            Reply::Exit => panic!("unexpected exit"),
        }
    }

    #[test]
    fn test_prompt_tracks_pwd() {
        let mut shell = Shell::default();
        assert_eq!(shell.prompt(), "vfsh:/$ ");
        shell.execute_line("mkdir docs");
        shell.execute_line("cd docs");
        assert_eq!(shell.prompt(), "vfsh:/docs$ ");
    }

    #[test]
    fn test_errors_become_lines() {
        let mut shell = Shell::default();
        let lines = output(shell.execute_line("rm ghost"));
        assert_eq!(lines, vec!["error: Not found: ghost"]);
        let lines = output(shell.execute_line("bogus"));
        assert!(lines[0].starts_with("error: Unknown command 'bogus'"));
    }

    #[test]
    fn test_exit() {
        let mut shell = Shell::default();
        assert_eq!(shell.execute_line("exit"), Reply::Exit);
    }

    #[test]
    fn test_ls_format() {
        let mut shell = Shell::default();
        shell.execute_line("touch a.txt 5");
        let lines = output(shell.execute_line("ls"));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("file a.txt "));
        assert!(lines[0].ends_with(" 5 bytes"));
    }

    #[test]
    fn test_cd_diagnostics() {
        let mut shell = Shell::default();
        assert_eq!(
            output(shell.execute_line("cd ..")),
            vec!["Already at root directory."]
        );
        assert_eq!(
            output(shell.execute_line("cd -")),
            vec!["No previous working directory."]
        );
    }

    #[test]
    fn test_tree_indentation() {
        let mut shell = Shell::default();
        shell.execute_line("mkdir docs");
        shell.execute_line("cd docs");
        shell.execute_line("touch a.txt 5");
        assert_eq!(
            output(shell.execute_line("tree")),
            vec!["/", "  docs/ (5 bytes)", "    a.txt (5 bytes)"]
        );
    }
}
