use ratatui::style::{Color, Modifier, Style};

use crate::gallery::LoadStatus;

/// Consistent theme for the TUI
pub struct Theme {
    pub title: Style,
    pub focused: Style,
    pub error: Style,
    pub success: Style,
    pub muted: Style,
    pub highlight: Style,
    pub author: Style,
    pub help_bar: Style,
    pub cursor: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            focused: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            error: Style::default()
                .fg(Color::Red),
            success: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            muted: Style::default()
                .fg(Color::DarkGray),
            highlight: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            author: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            help_bar: Style::default()
                .bg(Color::DarkGray),
            cursor: Style::default()
                .add_modifier(Modifier::REVERSED),
        }
    }
}

impl Theme {
    /// Style for a button label; disabled buttons are muted
    pub fn button(&self, enabled: bool) -> Style {
        if enabled {
            self.highlight
        } else {
            self.muted
        }
    }

    /// Status line text for the gallery
    pub fn load_status_text(status: LoadStatus, count: usize) -> &'static str {
        match status {
            LoadStatus::Idle | LoadStatus::Loading => "Loading posts...",
            LoadStatus::Loaded | LoadStatus::Failed if count == 0 => "No posts to show",
            LoadStatus::Loaded | LoadStatus::Failed => "",
        }
    }
}
