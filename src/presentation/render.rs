//! Plain-text rendering of the list state.

use std::fmt::Write;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::list_view_model::ListState;
use crate::domain::entities::{DEFAULT_COVER_SIZE, Game};

const DEFAULT_WIDTH: usize = 60;
const ELLIPSIS: char = '…';

/// Renders list and detail screens as text.
#[derive(Debug, Clone, Copy)]
pub struct ListRenderer {
    width: usize,
}

impl Default for ListRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl ListRenderer {
    /// Creates renderer truncating names to `width` columns.
    #[must_use]
    pub const fn new(width: usize) -> Self {
        Self { width }
    }

    /// Renders the list screen for `state`.
    #[must_use]
    pub fn render(&self, state: &ListState) -> String {
        match state {
            ListState::Loading => "Loading games…\n".to_string(),
            ListState::Error => {
                "Couldn't load games. Check your connection and try again.\n[r] retry  [q] quit\n"
                    .to_string()
            }
            ListState::Loaded(games) => {
                let mut out = String::new();
                let digits = games.items().len().max(1).to_string().len();

                for (index, game) in games.items().iter().enumerate() {
                    let _ = write!(out, "{:>digits$}. {}", index + 1, self.truncate(game.name()));
                    if let Some(rating) = game.rating() {
                        let _ = write!(out, "  ({rating:.1})");
                    }
                    out.push('\n');
                }

                if games.items().is_empty() {
                    out.push_str("No games found.\n");
                }

                if games.load_more().is_some() {
                    out.push_str("[m] load more  [r] reload  [q] quit\n");
                } else {
                    out.push_str("[r] reload  [q] quit\n");
                }
                out
            }
        }
    }

    /// Renders the detail screen for `game`.
    #[must_use]
    pub fn render_details(&self, game: &Game) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", game.name());
        let _ = writeln!(out, "{}", "=".repeat(game.name().width().min(self.width)));

        match game.rating() {
            Some(rating) => {
                let _ = writeln!(out, "Rating: {rating:.1} / 100");
            }
            None => out.push_str("Rating: n/a\n"),
        }

        if let Some(url) = game.cover_url(DEFAULT_COVER_SIZE) {
            let _ = writeln!(out, "Cover:  {url}");
        }

        if let Some(description) = game.description() {
            let _ = writeln!(out, "\n{description}");
        }
        out
    }

    fn truncate(&self, text: &str) -> String {
        if text.width() <= self.width {
            return text.to_string();
        }

        let budget = self.width.saturating_sub(1);
        let mut used = 0;
        let mut out = String::new();
        for ch in text.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if used + ch_width > budget {
                break;
            }
            used += ch_width;
            out.push(ch);
        }
        out.push(ELLIPSIS);
        out
    }
}
