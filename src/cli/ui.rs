use super::app::App;
use animal_tables::TableView;
use animal_tables::render::column_widths;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table, TableState, Tabs},
};
use tui_textarea::TextArea;

const HELP: &str =
    "Tab: next table | a: add | e: edit | d: delete | n/l/s: sort by name/location/size | q: quit";

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3), // Tabs
                Constraint::Min(5),    // Table grows
                Constraint::Length(8), // Message log
                Constraint::Length(1), // Help
            ]
            .as_ref(),
        )
        .split(f.area());

    let titles: Vec<Line> = app
        .views
        .iter()
        .map(|v| Line::from(format!(" {} ", v.label)))
        .collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Animal Tables "))
        .select(app.selected_tab)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, chunks[0]);

    if let Some(view) = app.views.get(app.selected_tab) {
        let mut state = TableState::default().with_selected(if view.rows.is_empty() {
            None
        } else {
            Some(app.selected_row)
        });
        draw_table(f, chunks[1], view, &mut state);
    }

    // Only the most recent messages that fit
    let inner_height = chunks[2].height.saturating_sub(2) as usize;
    let skip_count = app.messages.len().saturating_sub(inner_height);
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .skip(skip_count)
        .map(|line| ListItem::new(line.clone()))
        .collect();
    let messages_panel = List::new(messages)
        .block(Block::default().borders(Borders::ALL).title(" Messages "))
        .style(Style::default().fg(Color::White));
    f.render_widget(messages_panel, chunks[2]);

    f.render_widget(
        Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );
}

fn draw_table(f: &mut Frame, area: Rect, view: &TableView, state: &mut TableState) {
    let widths = column_widths(view);
    let header = Row::new(["Name", "Image", "Location", "Size"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = view
        .rows
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(r.name.clone()),
                Cell::from(r.image.clone()),
                Cell::from(r.location.clone()),
                Cell::from(r.size_label.clone()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        widths.iter().map(|w| Constraint::Length(column_length(*w))),
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ({} rows) ", view.label, view.row_count())),
    )
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, state);
}

/// Column width plus one cell of padding, clamped to what a terminal holds.
fn column_length(width: usize) -> u16 {
    u16::try_from(width).unwrap_or(u16::MAX).saturating_add(1)
}

/// Table in the background, the field being edited in a popup on top.
pub fn draw_prompt(
    f: &mut Frame,
    background: &TableView,
    title: &str,
    labels: &[String],
    field_index: usize,
    textarea: &TextArea,
) {
    let mut state = TableState::default();
    draw_table(f, f.area(), background, &mut state);

    let width = 60.min(f.area().width);
    let height = 7.min(f.area().height);
    let area = Rect::new(
        (f.area().width - width) / 2,
        (f.area().height - height) / 2,
        width,
        height,
    );
    f.render_widget(Clear, area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .style(Style::default().fg(Color::Yellow));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3)].as_ref())
        .split(inner);

    let step = format!(
        "Field {} of {}: {} (Enter to confirm, Esc to cancel)",
        field_index + 1,
        labels.len(),
        labels[field_index]
    );
    f.render_widget(Paragraph::new(step), rows[0]);
    f.render_widget(textarea, rows[1]);
}
