//! Registration form screen

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::cli::tui::state::WizardScreen;
use crate::cli::tui::theme::Theme;
use crate::form::{Field, Step};

pub fn render(frame: &mut Frame, state: &WizardScreen, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Step tabs
            Constraint::Min(0),    // Fields
            Constraint::Length(3), // Buttons and status
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    let title = Paragraph::new(Span::styled("User Information", theme.title))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    render_tabs(frame, chunks[1], state, theme);
    render_fields(frame, chunks[2], state, theme);
    render_buttons(frame, chunks[3], state, theme);
    render_help(frame, chunks[4], theme);
}

fn render_tabs(frame: &mut Frame, area: Rect, state: &WizardScreen, theme: &Theme) {
    let titles = Step::ALL
        .iter()
        .enumerate()
        .map(|(i, step)| format!("F{} {}", i + 1, step.title()));
    let tabs = Tabs::new(titles)
        .select(state.step().index())
        .highlight_style(theme.highlight)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(tabs, area);
}

fn render_fields(frame: &mut Frame, area: Rect, state: &WizardScreen, theme: &Theme) {
    let step = state.step();
    let focused = state.focused_field();
    let mut lines = Vec::new();

    for field in step.fields() {
        let is_focused = *field == focused;
        let marker = if is_focused { "▶ " } else { "  " };
        let label_style = if is_focused { theme.focused } else { Style::default() };
        let required = if field_is_required(*field) { " *" } else { "" };

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{}{}", field.label(), required), label_style),
        ]));
        lines.push(value_line(state, *field, is_focused, theme));

        match state.wizard.error(*field) {
            Some(message) => lines.push(Line::from(Span::styled(
                format!("    {}", message),
                theme.error,
            ))),
            None => lines.push(Line::from("")),
        }
    }

    let body = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", step.title()))
            .borders(Borders::ALL),
    );
    frame.render_widget(body, area);
}

fn field_is_required(field: Field) -> bool {
    crate::form::rule_for(field).is_required()
}

fn value_line<'a>(state: &'a WizardScreen, field: Field, focused: bool, theme: &Theme) -> Line<'a> {
    let record = state.wizard.record();
    match field {
        Field::CountryCode => {
            let label = record
                .country_code
                .map(|c| c.label())
                .unwrap_or("Select Country Code");
            let style = if record.country_code.is_some() { Style::default() } else { theme.muted };
            Line::from(vec![
                Span::raw("    ◀ "),
                Span::styled(label, style),
                Span::raw(" ▶"),
            ])
        }
        Field::AcceptTermsAndCondition => {
            let checkbox = if record.accept_terms_and_condition { "[x]" } else { "[ ]" };
            Line::from(format!("    {} I accept the terms and conditions", checkbox))
        }
        Field::Password => {
            let masked = "*".repeat(record.password.chars().count());
            text_line(masked, focused.then(|| state.editor.cursor()), theme)
        }
        other => text_line(
            record.text(other).to_string(),
            focused.then(|| state.editor.cursor()),
            theme,
        ),
    }
}

/// Render a text value with the editor cursor at a char index
fn text_line(value: String, cursor: Option<usize>, theme: &Theme) -> Line<'static> {
    let Some(cursor) = cursor else {
        return Line::from(vec![Span::raw("    "), Span::raw(value)]);
    };

    let mut chars = value.chars();
    let before: String = chars.by_ref().take(cursor).collect();
    let mut spans = vec![Span::raw("    "), Span::raw(before)];
    match chars.next() {
        Some(under) => {
            spans.push(Span::styled(under.to_string(), theme.cursor));
            spans.push(Span::raw(chars.collect::<String>()));
        }
        None => spans.push(Span::raw("█")),
    }
    Line::from(spans)
}

fn render_buttons(frame: &mut Frame, area: Rect, state: &WizardScreen, theme: &Theme) {
    let step = state.step();
    let next_label = if step.is_last() { "Submit" } else { "Save and Next" };

    let buttons = Line::from(vec![
        Span::styled("[Ctrl+B] Back", theme.button(step.index() > 0)),
        Span::raw("    "),
        Span::styled("[Ctrl+S] Save", theme.button(!state.submitting)),
        Span::raw("    "),
        Span::styled(format!("[Enter] {}", next_label), theme.button(!state.submitting)),
    ]);

    let status = if state.submitting {
        Line::from(Span::styled("Submitting...", theme.muted))
    } else if let Some(notice) = &state.notice {
        Line::from(Span::styled(notice.message.clone(), theme.success))
    } else {
        Line::from("")
    };

    let paragraph = Paragraph::new(vec![buttons, status])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(paragraph, area);
}

fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let help_text = Line::from(vec![
        Span::raw(" Tab/↑↓ move • ←→/Space choose • "),
        Span::styled("Enter", theme.success),
        Span::raw(" next • Esc quit"),
    ]);

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(theme.help_bar);
    frame.render_widget(help, area);
}
