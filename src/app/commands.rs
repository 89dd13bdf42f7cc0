//! Interactive command parsing.

/// Help shown by `:help`.
pub const HELP_TEXT: &str = "\
Type a URL and press Enter to scan it.
  :tab <id>   switch to a tab (scanner, how-it-works)
  :help       show this help
  :quit       stop reading input and wait for pending scans";

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Anything that is not a command is submitted as-is, blank lines included.
    Submit(String),
    SwitchTab(String),
    Help,
    Quit,
    /// A `:`-prefixed line that is not a known command.
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix(':') else {
            return Command::Submit(line.to_string());
        };

        let mut parts = rest.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("tab"), Some(tab), None) => Command::SwitchTab(tab.to_string()),
            (Some("help"), None, None) => Command::Help,
            (Some("quit") | Some("q"), None, None) => Command::Quit,
            _ => Command::Unknown(trimmed.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines_are_submissions() {
        assert_eq!(
            Command::parse("example.com"),
            Command::Submit("example.com".to_string())
        );
        // Trimming is the controller's job
        assert_eq!(Command::parse("  a.org "), Command::Submit("  a.org ".to_string()));
        assert_eq!(Command::parse(""), Command::Submit(String::new()));
    }

    #[test]
    fn test_commands() {
        assert_eq!(
            Command::parse(":tab how-it-works"),
            Command::SwitchTab("how-it-works".to_string())
        );
        assert_eq!(Command::parse(":help"), Command::Help);
        assert_eq!(Command::parse(" :quit "), Command::Quit);
        assert_eq!(Command::parse(":q"), Command::Quit);
    }

    #[test]
    fn test_malformed_commands_are_unknown() {
        assert_eq!(Command::parse(":tab"), Command::Unknown(":tab".to_string()));
        assert_eq!(
            Command::parse(":tab a b"),
            Command::Unknown(":tab a b".to_string())
        );
        assert_eq!(Command::parse(":scan"), Command::Unknown(":scan".to_string()));
    }
}
