//! Command line parsing.

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;
use vfsh_core::VfsError;

/// Names accepted as the first word of a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum CommandName {
    Help,
    Pwd,
    Ls,
    Mkdir,
    Touch,
    Cd,
    Rm,
    Size,
    Showbin,
    Emptybin,
    Find,
    Mv,
    Recover,
    Tree,
    Export,
    #[strum(to_string = "exit", serialize = "quit")]
    Exit,
}

/// A parsed command ready to run against an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line.
    Empty,
    Help,
    Pwd,
    Ls,
    Mkdir(String),
    Touch { name: String, size: Option<u64> },
    /// Target may be empty, which means the root.
    Cd(String),
    Rm(String),
    Size(String),
    ShowBin,
    EmptyBin,
    Find(String),
    Mv { source: String, target: String },
    Recover,
    Tree,
    Export,
    Exit,
}

/// Errors from parsing or running a command.
#[derive(Debug, Error)]
pub enum ShellError {
    /// First word is not a known command.
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    UnknownCommand(String),

    /// A required argument was left out.
    #[error("Missing argument for '{command}': expected {expected}")]
    MissingArgument {
        command: CommandName,
        expected: &'static str,
    },

    /// More arguments than the command takes.
    #[error("Unexpected argument for '{command}': {arg}")]
    UnexpectedArgument { command: CommandName, arg: String },

    /// `touch` size is not a non-negative integer.
    #[error("Invalid size '{value}': expected a non-negative integer")]
    InvalidSize { value: String },

    /// The engine refused the operation.
    #[error(transparent)]
    Vfs(#[from] VfsError),

    /// Snapshot could not be encoded.
    #[error("Failed to encode snapshot: {0}")]
    Export(#[from] serde_json::Error),
}

/// Split a line into a command and its arguments.
pub fn parse_command(line: &str) -> Result<Command, ShellError> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(Command::Empty);
    };
    let name =
        CommandName::from_str(word).map_err(|_| ShellError::UnknownCommand(word.to_string()))?;
    let args: Vec<&str> = parts.collect();

    let command = match name {
        CommandName::Help => Command::Help,
        CommandName::Pwd => Command::Pwd,
        CommandName::Ls => Command::Ls,
        CommandName::Showbin => Command::ShowBin,
        CommandName::Emptybin => Command::EmptyBin,
        CommandName::Recover => Command::Recover,
        CommandName::Tree => Command::Tree,
        CommandName::Export => Command::Export,
        CommandName::Exit => Command::Exit,
        CommandName::Mkdir => Command::Mkdir(required(name, &args, 0, "a folder name")?),
        CommandName::Rm => Command::Rm(required(name, &args, 0, "a name")?),
        CommandName::Size => Command::Size(required(name, &args, 0, "a path")?),
        CommandName::Find => Command::Find(required(name, &args, 0, "a name")?),
        CommandName::Cd => Command::Cd(args.first().copied().unwrap_or_default().to_string()),
        CommandName::Touch => {
            let file = required(name, &args, 0, "a file name")?;
            let size = args
                .get(1)
                .map(|raw| {
                    raw.parse::<u64>().map_err(|_| ShellError::InvalidSize {
                        value: raw.to_string(),
                    })
                })
                .transpose()?;
            Command::Touch { name: file, size }
        }
        CommandName::Mv => Command::Mv {
            source: required(name, &args, 0, "a file and a folder")?,
            target: required(name, &args, 1, "a destination folder")?,
        },
    };

    let allowed = arity(name);
    if let Some(extra) = args.get(allowed) {
        return Err(ShellError::UnexpectedArgument {
            command: name,
            arg: extra.to_string(),
        });
    }
    Ok(command)
}

fn required(
    command: CommandName,
    args: &[&str],
    index: usize,
    expected: &'static str,
) -> Result<String, ShellError> {
    args.get(index)
        .map(|s| s.to_string())
        .ok_or(ShellError::MissingArgument { command, expected })
}

/// Maximum number of arguments each command takes.
fn arity(name: CommandName) -> usize {
    match name {
        CommandName::Touch | CommandName::Mv => 2,
        CommandName::Mkdir
        | CommandName::Cd
        | CommandName::Rm
        | CommandName::Size
        | CommandName::Find => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_command("").unwrap(), Command::Empty);
        assert_eq!(parse_command("   ").unwrap(), Command::Empty);
    }

    #[test]
    fn test_parse_exit_aliases() {
        assert_eq!(parse_command("exit").unwrap(), Command::Exit);
        assert_eq!(parse_command("quit").unwrap(), Command::Exit);
        assert_eq!(CommandName::Exit.to_string(), "exit");
    }

    #[test]
    fn test_parse_cd() {
        assert_eq!(parse_command("cd").unwrap(), Command::Cd(String::new()));
        assert_eq!(parse_command("cd ..").unwrap(), Command::Cd("..".into()));
        assert_eq!(
            parse_command("cd /some/path").unwrap(),
            Command::Cd("/some/path".into())
        );
    }

    #[test]
    fn test_parse_touch() {
        assert_eq!(
            parse_command("touch a.txt 5").unwrap(),
            Command::Touch {
                name: "a.txt".into(),
                size: Some(5)
            }
        );
        assert_eq!(
            parse_command("touch a.txt").unwrap(),
            Command::Touch {
                name: "a.txt".into(),
                size: None
            }
        );
        assert!(matches!(
            parse_command("touch a.txt big"),
            Err(ShellError::InvalidSize { .. })
        ));
        assert!(matches!(
            parse_command("touch a.txt -3"),
            Err(ShellError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_parse_mv() {
        assert_eq!(
            parse_command("mv a.txt docs").unwrap(),
            Command::Mv {
                source: "a.txt".into(),
                target: "docs".into()
            }
        );
        assert!(matches!(
            parse_command("mv a.txt"),
            Err(ShellError::MissingArgument {
                command: CommandName::Mv,
                ..
            })
        ));
    }

    #[test]
    fn test_parse_missing_and_extra_args() {
        assert!(matches!(
            parse_command("mkdir"),
            Err(ShellError::MissingArgument { .. })
        ));
        assert!(matches!(
            parse_command("rm a b"),
            Err(ShellError::UnexpectedArgument { .. })
        ));
        assert!(matches!(
            parse_command("pwd now"),
            Err(ShellError::UnexpectedArgument { .. })
        ));
    }

    #[test]
    fn test_parse_unknown() {
        match parse_command("format c:") {
            Err(ShellError::UnknownCommand(word)) => assert_eq!(word, "format"),
            other => panic!("Expected UnknownCommand, got {other:?}"),
        }
        // names are case-sensitive
        assert!(parse_command("LS").is_err());
    }
}
