//! Line input processing for the terminal client.
//!
//! Owns the text-to-command mapping so the app loop stays agnostic about the
//! concrete words a player types. A number picks from whatever menu is open:
//! the skill list, or the target list once a targeted skill is chosen.

/// High-level outcome of parsing one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Zero-based entry of the open menu.
    Pick(usize),
    /// Back out of target selection.
    Cancel,
    /// Print the roster again.
    Status,
    Help,
    Quit,
    /// Nothing meaningful was typed.
    None,
}

pub fn parse_line(line: &str) -> InputCommand {
    let line = line.trim().to_ascii_lowercase();
    if let Ok(n) = line.parse::<usize>() {
        return match n {
            0 => InputCommand::None,
            n => InputCommand::Pick(n - 1),
        };
    }

    match line.as_str() {
        "c" | "cancel" | "b" | "back" => InputCommand::Cancel,
        "s" | "status" => InputCommand::Status,
        "h" | "?" | "help" => InputCommand::Help,
        "q" | "quit" | "exit" => InputCommand::Quit,
        _ => InputCommand::None,
    }
}

pub const HELP: &str = "\
Commands:
  <n>       pick entry n from the open menu (skill, then target)
  c, back   cancel target selection
  s         show the roster
  h, ?      show this help
  q         quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_pick_zero_based_entries() {
        assert_eq!(parse_line("1"), InputCommand::Pick(0));
        assert_eq!(parse_line(" 3 \n"), InputCommand::Pick(2));
        assert_eq!(parse_line("0"), InputCommand::None);
    }

    #[test]
    fn words_map_to_commands() {
        assert_eq!(parse_line("cancel"), InputCommand::Cancel);
        assert_eq!(parse_line("B"), InputCommand::Cancel);
        assert_eq!(parse_line("q"), InputCommand::Quit);
        assert_eq!(parse_line("?"), InputCommand::Help);
        assert_eq!(parse_line("status"), InputCommand::Status);
    }

    #[test]
    fn unknown_input_is_ignored() {
        assert_eq!(parse_line(""), InputCommand::None);
        assert_eq!(parse_line("fireball"), InputCommand::None);
        assert_eq!(parse_line("-1"), InputCommand::None);
    }
}
