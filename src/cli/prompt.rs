use super::ui;
use animal_tables::facade::{FieldPrompt, RawFields, UserInteraction};
use animal_tables::{TableError, TableView};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use tui_textarea::{CursorMove, TextArea};

/// Collects fields with a modal form drawn over the current table.
///
/// One field is edited at a time: `Enter` moves on, `Esc` cancels the
/// whole prompt, which the session then reports as missing input.
pub struct TerminalPrompt<'t, B: Backend> {
    terminal: &'t mut Terminal<B>,
    background: TableView,
    pub reports: Vec<String>,
}

impl<'t, B: Backend> TerminalPrompt<'t, B> {
    pub fn new(terminal: &'t mut Terminal<B>, background: TableView) -> Self {
        Self {
            terminal,
            background,
            reports: Vec::new(),
        }
    }

    fn read_field(&mut self, title: &str, labels: &[String], index: usize, default: &str) -> Option<String> {
        let mut textarea = field_textarea(&labels[index], default);
        loop {
            self.terminal
                .draw(|f| ui::draw_prompt(f, &self.background, title, labels, index, &textarea))
                .ok()?;

            if let Event::Key(key) = event::read().ok()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Enter => return Some(textarea.lines().join("")),
                    KeyCode::Esc => return None,
                    _ => {
                        textarea.input(key);
                    }
                }
            }
        }
    }
}

fn field_textarea(label: &str, default: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![default.to_string()]);
    textarea.move_cursor(CursorMove::End);
    textarea.set_block(
        ratatui::widgets::Block::default()
            .borders(ratatui::widgets::Borders::ALL)
            .title(format!(" {} ", label)),
    );
    textarea
}

impl<B: Backend> UserInteraction for TerminalPrompt<'_, B> {
    fn collect_fields(&mut self, prompt: &FieldPrompt) -> Option<RawFields> {
        let defaults = &prompt.defaults;
        let labels = prompt.labels();
        let name = self.read_field(&prompt.title, &labels, 0, &defaults.name)?;
        let location = self.read_field(&prompt.title, &labels, 1, &defaults.location)?;
        let size = self.read_field(&prompt.title, &labels, 2, &defaults.size)?;
        let image = self.read_field(&prompt.title, &labels, 3, &defaults.image)?;
        Some(RawFields::new(name, location, size, image))
    }

    fn report_rejection(&mut self, error: &TableError) {
        self.reports.push(error.to_string());
    }
}
