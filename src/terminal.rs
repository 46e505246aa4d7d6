//! Plain-text rendering and command parsing for the terminal front end.

use std::fmt::Write;

use crate::view::{PageState, ViewStatus};

/// A command typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Prev,
    Next,
    Reload,
    Quit,
}

impl Command {
    /// Parse one input line. Returns `None` for anything unrecognised.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "p" | "prev" => Some(Self::Prev),
            "n" | "next" => Some(Self::Next),
            "r" | "reload" => Some(Self::Reload),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

pub const HELP: &str = "Commands: [p]rev, [n]ext, [r]eload, [q]uit";

/// Render the view as text.
#[must_use]
pub fn render_text(state: &PageState) -> String {
    let mut out = String::new();

    match state.status() {
        ViewStatus::Loading => out.push_str("Loading posts...\n"),
        ViewStatus::Ready { empty } => {
            if let Some(error) = &state.last_error {
                let _ = writeln!(out, "! Could not load posts. {error}");
                out.push_str("! Type r to try again.\n\n");
            }
            if empty {
                out.push_str("No posts found.\n");
                return out;
            }

            out.push_str("WordPress Posts\n===============\n\n");
            for record in state.records() {
                let _ = writeln!(out, "{}", record.title);
                let _ = writeln!(out, "  {}", record.link);
                if let Some(image) = &record.image_url {
                    let _ = writeln!(out, "  Image: {image}");
                }
                let _ = writeln!(out, "  Published on: {}", record.published);
                let _ = writeln!(out, "  Categories: {}", record.categories);
                out.push('\n');
            }
            out.push_str(&pagination_line(state));
            out.push('\n');
        }
    }

    out
}

/// `[Prev]  Page X of Y  [Next]`, with a disabled control shown as `-Prev-`.
#[must_use]
pub fn pagination_line(state: &PageState) -> String {
    let prev = if state.can_go_prev() { "[Prev]" } else { "-Prev-" };
    let next = if state.can_go_next() { "[Next]" } else { "-Next-" };
    format!(
        "{prev}  Page {} of {}  {next}",
        state.current_page, state.total_pages
    )
}
