//! TUI rendering with ratatui
//!
//! The screen is a pure projection of [`App`]: form on the left, results on
//! the right.

use super::app::App;
use super::focus::{Focus, KEYS_PER_LINE};
use crate::form::{FormState, LetterRow, keyboard, misplaced_placeholder};
use crate::query::ResultsView;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Form
            Constraint::Percentage(40), // Results
        ])
        .split(chunks[1]);

    render_form(f, app, main_chunks[0]);
    render_results(f, app.controller.results(), main_chunks[1]);
    render_status(f, app, chunks[2]);

    if let Some(ref alert) = app.alert {
        render_alert(f, alert);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("FILTRO DE PALAVRAS")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let state = app.controller.state();
    let found_height = u16::try_from(state.found_rows().len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Word length
            Constraint::Length(3),                // Positioned letters
            Constraint::Length(3),                // Misplaced letters
            Constraint::Min(found_height.min(8)), // Found rows
            Constraint::Length(4),                // Required keyboard
            Constraint::Length(4),                // Excluded keyboard
        ])
        .split(area);

    render_length(f, state, app.focus, chunks[0]);

    let cursor = match app.focus {
        Focus::Positioned(i) => Some(i),
        _ => None,
    };
    render_row(
        f,
        " Letras na posição certa ",
        state.positioned(),
        cursor,
        |_| String::from(" "),
        chunks[1],
    );

    let cursor = match app.focus {
        Focus::Misplaced(i) => Some(i),
        _ => None,
    };
    render_row(
        f,
        " Letras na posição errada ",
        state.misplaced(),
        cursor,
        misplaced_placeholder,
        chunks[2],
    );

    render_found(f, state, app.focus, chunks[3]);

    let cursor = match app.focus {
        Focus::Required(i) => Some(i),
        _ => None,
    };
    render_keyboard(
        f,
        " Letras extras ",
        &keyboard::keys(&state.required()).collect::<Vec<_>>(),
        cursor,
        Color::Green,
        chunks[4],
    );

    let cursor = match app.focus {
        Focus::Excluded(i) => Some(i),
        _ => None,
    };
    render_keyboard(
        f,
        " Letras excluídas ",
        &keyboard::keys(&state.excluded()).collect::<Vec<_>>(),
        cursor,
        Color::Red,
        chunks[5],
    );
}

fn focused(style: Style, on: bool) -> Style {
    if on {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

fn render_length(f: &mut Frame, state: &FormState, focus: Focus, area: Rect) {
    let on = focus == Focus::Length;
    let style = if state.word_length().is_ok() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Red)
    };

    let content = Line::from(vec![
        Span::raw("Tamanho: "),
        Span::styled(
            format!(" {:<3}", state.length_input()),
            focused(style.add_modifier(Modifier::BOLD), on),
        ),
        Span::styled("  [+/-]", Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Tamanho da palavra ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn row_spans(
    row: &LetterRow,
    cursor: Option<usize>,
    placeholder: impl Fn(usize) -> String,
) -> Vec<Span<'static>> {
    row.slots()
        .iter()
        .enumerate()
        .flat_map(|(i, slot)| {
            let (text, style) = match slot {
                Some(letter) => (
                    letter.label().to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                None => (placeholder(i), Style::default().fg(Color::DarkGray)),
            };
            [
                Span::styled(format!("[{text}]"), focused(style, cursor == Some(i))),
                Span::raw(" "),
            ]
        })
        .collect()
}

fn render_row(
    f: &mut Frame,
    title: &str,
    row: &LetterRow,
    cursor: Option<usize>,
    placeholder: impl Fn(usize) -> String,
    area: Rect,
) {
    let line = if row.is_empty() {
        Line::from(Span::styled("-", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(row_spans(row, cursor, placeholder))
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_found(f: &mut Frame, state: &FormState, focus: Focus, area: Rect) {
    let lines: Vec<Line> = if state.found_rows().is_empty() {
        vec![Line::from(Span::styled(
            "Ctrl-N adiciona uma linha",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        state
            .found_rows()
            .iter()
            .enumerate()
            .map(|(r, found)| {
                let cursor = match focus {
                    Focus::Found { row, col } if row == r => Some(col),
                    _ => None,
                };
                Line::from(row_spans(found.cells(), cursor, |_| String::from(" ")))
            })
            .collect()
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Letras encontradas ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_keyboard(
    f: &mut Frame,
    title: &str,
    keys: &[keyboard::Key],
    cursor: Option<usize>,
    selected_color: Color,
    area: Rect,
) {
    let lines: Vec<Line> = keys
        .chunks(KEYS_PER_LINE)
        .map(|line| {
            let spans: Vec<Span> = line
                .iter()
                .flat_map(|key| {
                    let style = if key.selected {
                        Style::default()
                            .fg(Color::Black)
                            .bg(selected_color)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    let on = cursor == Some(key.letter.index());
                    [
                        Span::styled(format!(" {} ", key.letter.label()), focused(style, on)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_results(f: &mut Frame, results: &ResultsView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let total = Paragraph::new(results.total_line())
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(total, chunks[0]);

    let style = if results.is_error() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    };
    let items: Vec<ListItem> = results
        .items()
        .into_iter()
        .map(|item| ListItem::new(item).style(style))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Palavras ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, chunks[1]);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(15),
            Constraint::Percentage(50),
        ])
        .split(inner);

    let server = Paragraph::new(app.server.as_str()).alignment(Alignment::Center);
    f.render_widget(server, chunks[0]);

    let pending = match app.controller.in_flight() {
        0 if app.controller.is_waiting() => String::from("aguardando..."),
        0 => String::from("pronto"),
        n => format!("{n} pendente(s)"),
    };
    let pending = Paragraph::new(pending)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    f.render_widget(pending, chunks[1]);

    let help = Paragraph::new("Tab: seção | Ctrl-N: linha | Esc: sair")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[2]);
}

/// Rectangle of `width` x `height` centered in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_alert(f: &mut Frame, alert: &str) {
    let area = centered(f.area(), 60, 5);
    let popup = Paragraph::new(alert.to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Aviso ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}
