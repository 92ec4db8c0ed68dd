//! Posts gallery screen

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::cli::tui::state::GalleryScreen;
use crate::cli::tui::theme::Theme;
use crate::gallery::PostRecord;

pub fn render(frame: &mut Frame, state: &GalleryScreen, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Posts
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    render_header(frame, chunks[0], state, theme);
    render_posts(frame, chunks[1], state, theme);
    render_help(frame, chunks[2], theme);
}

fn render_header(frame: &mut Frame, area: Rect, state: &GalleryScreen, theme: &Theme) {
    let posts = state.gallery.posts();
    let status = Theme::load_status_text(state.status(), posts.len());

    let header = Line::from(vec![
        Span::styled(" Posts", theme.title),
        Span::raw(format!("  {} ", posts.len())),
        Span::styled(status, theme.muted),
    ]);
    frame.render_widget(
        Paragraph::new(header).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

/// Lines for one post card
pub fn card_lines<'a>(post: &'a PostRecord, theme: &Theme) -> Vec<Line<'a>> {
    vec![
        Line::from(vec![
            Span::styled(format!("#{} ", post.id), theme.muted),
            Span::styled(post.author(), theme.author),
        ]),
        Line::from(Span::raw(post.writeup.as_str())),
        Line::from(vec![
            Span::styled("image:  ", theme.muted),
            Span::raw(post.image.as_str()),
        ]),
        Line::from(vec![
            Span::styled("avatar: ", theme.muted),
            Span::raw(post.avatar.as_str()),
        ]),
        Line::from("─".repeat(40)),
    ]
}

fn render_posts(frame: &mut Frame, area: Rect, state: &GalleryScreen, theme: &Theme) {
    let lines: Vec<Line> = state
        .gallery
        .posts()
        .iter()
        .flat_map(|post| card_lines(post, theme))
        .collect();

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let help = Paragraph::new(" ↑↓ scroll • r reload • q quit")
        .alignment(Alignment::Center)
        .style(theme.help_bar);
    frame.render_widget(help, area);
}
