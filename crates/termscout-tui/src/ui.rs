// UI rendering logic
use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use termscout_core::models::SearchResult;
use termscout_core::theme::{self, ThemeColors};

const PLACEHOLDER: &str = "Type diagnosis or code... e.g. fever, diabetes, I10";

pub fn render(frame: &mut Frame, app: &mut App) {
    let colors = app.theme.colors.clone();

    // Page background first; every widget draws over it.
    frame.render_widget(
        Block::default().style(Style::default().bg(to_color(colors.background))),
        frame.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input + theme toggle
            Constraint::Length(1), // Status line
            Constraint::Min(5),    // Results list
            Constraint::Length(3), // Copy button
        ])
        .split(frame.area());

    render_search_bar(frame, app, &colors, chunks[0]);
    render_status_line(frame, app, &colors, chunks[1]);
    render_results_list(frame, app, &colors, chunks[2]);
    render_copy_button(frame, &colors, chunks[3]);
}

fn render_search_bar(frame: &mut Frame, app: &App, colors: &ThemeColors, area: Rect) {
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(area);

    let input = if app.input.is_empty() {
        Paragraph::new(PLACEHOLDER).style(
            Style::default()
                .fg(to_color(colors.muted))
                .bg(to_color(colors.input_bg)),
        )
    } else {
        Paragraph::new(app.input.as_str()).style(
            Style::default()
                .fg(to_color(colors.text))
                .bg(to_color(colors.input_bg)),
        )
    };
    let input = input.block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(to_color(colors.muted)))
            .title(" Search "),
    );
    frame.render_widget(input, row[0]);

    // Cursor sits at the end of the typed text
    frame.set_cursor_position((row[0].x + app.input.len() as u16 + 1, row[0].y + 1));

    // The toggle control reflects the active mode
    let toggle = Paragraph::new(if app.dark { "Dark" } else { "Light" })
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(to_color(colors.button_text))
                .bg(to_color(colors.button_bg)),
        )
        .block(Block::default().borders(Borders::ALL).title(" Theme "));
    frame.render_widget(toggle, row[1]);
}

fn render_status_line(frame: &mut Frame, app: &App, colors: &ThemeColors, area: Rect) {
    let status = Paragraph::new(app.status.to_string()).style(
        Style::default()
            .fg(to_color(colors.muted))
            .bg(to_color(colors.background)),
    );
    frame.render_widget(status, area);
}

fn render_results_list(frame: &mut Frame, app: &mut App, colors: &ThemeColors, area: Rect) {
    let items: Vec<ListItem> = app
        .results
        .iter()
        .map(|result| {
            ListItem::new(result_lines(result, colors))
                .style(Style::default().bg(to_color(colors.card_bg)))
        })
        .collect();

    let count = items.len();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(to_color(colors.muted)))
                .title(format!(" Results [{}] ", count)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_copy_button(frame: &mut Frame, colors: &ThemeColors, area: Rect) {
    let button = Paragraph::new("Copy Selected (Ctrl+Y)")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(to_color(colors.button_text))
                .bg(to_color(colors.button_bg)),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

/// Build the two display lines for one result row: code on top in the
/// primary text color, description below in the muted color
pub(crate) fn result_lines(result: &SearchResult, colors: &ThemeColors) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            result.code.clone(),
            Style::default()
                .fg(to_color(colors.text))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            result.description.clone(),
            Style::default().fg(to_color(colors.muted)),
        )),
    ]
}

/// Convert our Color to ratatui Color
fn to_color(color: theme::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use termscout_core::theme::Theme;

    fn sample() -> SearchResult {
        SearchResult {
            code: "I10".to_string(),
            description: "Essential (primary) hypertension".to_string(),
        }
    }

    #[test]
    fn rows_derive_their_colors_from_the_active_palette() {
        let result = sample();
        let dark = Theme::dark();
        let light = Theme::light();

        let dark_lines = result_lines(&result, &dark.colors);
        let light_lines = result_lines(&result, &light.colors);

        assert_eq!(
            dark_lines[0].spans[0].style.fg,
            Some(to_color(dark.colors.text))
        );
        assert_eq!(
            light_lines[0].spans[0].style.fg,
            Some(to_color(light.colors.text))
        );
        // Swapping the palette really changes what the row builder emits.
        assert_ne!(dark_lines[0].spans[0].style.fg, light_lines[0].spans[0].style.fg);
    }

    #[test]
    fn code_is_bold_and_description_is_muted() {
        let theme = Theme::dark();
        let lines = result_lines(&sample(), &theme.colors);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[0].content, "I10");
        assert!(lines[0].spans[0]
            .style
            .add_modifier
            .contains(Modifier::BOLD));
        assert_eq!(
            lines[1].spans[0].style.fg,
            Some(to_color(theme.colors.muted))
        );
    }
}
