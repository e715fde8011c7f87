//! Terminal command parsing.

/// User command read from the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Fetch the next page.
    LoadMore,
    /// Reload from the remote catalog.
    Reload,
    /// Show details of the game at the given 1-based position.
    Details(usize),
    /// Redraw the list.
    List,
    /// Print available commands.
    Help,
    /// Exit.
    Quit,
}

impl Command {
    /// Parses a prompt line. Returns `None` for unknown input.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();

        if let Ok(position) = input.parse::<usize>() {
            return (position > 0).then_some(Self::Details(position));
        }

        match input.to_ascii_lowercase().as_str() {
            "m" | "more" => Some(Self::LoadMore),
            "r" | "reload" | "retry" => Some(Self::Reload),
            "l" | "list" | "" => Some(Self::List),
            "h" | "help" | "?" => Some(Self::Help),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Help text listing the commands.
pub const HELP: &str = "\
Commands:
  m, more      load more games
  r, reload    reload from IGDB
  <number>     show game details
  l, list      show the list again
  q, quit      exit";
