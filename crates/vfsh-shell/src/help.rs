//! Help text.

use crate::command::CommandName;

/// Group of related commands for help display.
pub struct HelpSection {
    pub title: &'static str,
    pub entries: Vec<HelpEntry>,
}

/// One command line in the help listing.
pub struct HelpEntry {
    pub command: CommandName,
    pub usage: &'static str,
    pub description: &'static str,
}

/// Get all commands organized by section for help display.
pub fn get_help_sections() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "Navigation",
            entries: vec![
                HelpEntry { command: CommandName::Pwd, usage: "pwd", description: "Print the path of the current folder" },
                HelpEntry { command: CommandName::Ls, usage: "ls", description: "List the children of the current folder" },
                HelpEntry { command: CommandName::Cd, usage: "cd <name|/path|..|->", description: "Change folder; bare 'cd' goes to the root" },
                HelpEntry { command: CommandName::Find, usage: "find <name>", description: "Print every path whose last segment is <name>" },
                HelpEntry { command: CommandName::Size, usage: "size <path>", description: "Total size of a folder and its contents, or of a file" },
                HelpEntry { command: CommandName::Tree, usage: "tree", description: "Show the whole namespace as an indented tree" },
            ],
        },
        HelpSection {
            title: "Changes",
            entries: vec![
                HelpEntry { command: CommandName::Mkdir, usage: "mkdir <name>", description: "Create a folder in the current folder" },
                HelpEntry { command: CommandName::Touch, usage: "touch <name> [size]", description: "Create a file; names use letters, digits and '.'" },
                HelpEntry { command: CommandName::Mv, usage: "mv <name> <folder>", description: "Move a child of the current folder into a sibling folder" },
                HelpEntry { command: CommandName::Rm, usage: "rm <name>", description: "Move a child of the current folder to the bin" },
            ],
        },
        HelpSection {
            title: "Bin",
            entries: vec![
                HelpEntry { command: CommandName::Showbin, usage: "showbin", description: "List bin entries, oldest first" },
                HelpEntry { command: CommandName::Recover, usage: "recover", description: "Restore the oldest bin entry to its original folder" },
                HelpEntry { command: CommandName::Emptybin, usage: "emptybin", description: "Permanently delete everything in the bin" },
            ],
        },
        HelpSection {
            title: "Session",
            entries: vec![
                HelpEntry { command: CommandName::Export, usage: "export", description: "Print the namespace as JSON" },
                HelpEntry { command: CommandName::Help, usage: "help", description: "Show this help" },
                HelpEntry { command: CommandName::Exit, usage: "exit | quit", description: "Leave the shell (nothing is saved)" },
            ],
        },
    ]
}

/// Help listing as printable lines.
pub fn render_help() -> Vec<String> {
    let mut lines = vec!["Available commands:".to_string()];
    for section in get_help_sections() {
        lines.push(String::new());
        lines.push(format!("{}:", section.title));
        for entry in section.entries {
            lines.push(format!("  {:<22} {}", entry.usage, entry.description));
        }
    }
    lines
}
