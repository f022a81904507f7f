/// Commands understood by the interactive shell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add,
    Remove,
    Total,
    Change,
    List,
    Help,
    Exit,
}

impl ShellCommand {
    /// Parse a menu answer (trimmed, case-insensitive). `None` for anything unknown.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "add" => Some(Self::Add),
            "remove" => Some(Self::Remove),
            "total" => Some(Self::Total),
            "change" => Some(Self::Change),
            "list" => Some(Self::List),
            "help" => Some(Self::Help),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}
