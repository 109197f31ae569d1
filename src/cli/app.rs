use super::prompt::TerminalPrompt;
use super::ui;
use animal_tables::{Action, Session, SortKey, TableId, TableView};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::{error::Error, io};
use tracing::debug;

pub struct App {
    pub session: Session,
    pub views: Vec<TableView>,
    pub messages: Vec<Line<'static>>,
    pub selected_tab: usize,
    pub selected_row: usize,
    pub exit: bool,
}

impl App {
    pub fn new(session: Session, startup_reports: Vec<String>) -> Self {
        let views = session.render_all();
        let mut app = Self {
            session,
            views,
            messages: vec![
                Line::from(vec![Span::styled(
                    "Welcome to Animal Tables!",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )]),
                Line::from("Pick a table with Tab, then add, edit, delete or sort its rows."),
            ],
            selected_tab: 0,
            selected_row: 0,
            exit: false,
        };
        for report in startup_reports {
            app.push_error(report);
        }
        app
    }

    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        if let Err(err) = res {
            println!("{:?}", err);
        }

        Ok(())
    }

    fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| ui::draw(f, self))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => self.exit = true,
                    KeyCode::Tab => self.select_tab(1),
                    KeyCode::BackTab => self.select_tab(self.views.len().saturating_sub(1)),
                    KeyCode::Down => self.move_row(1),
                    KeyCode::Up => self.move_row(-1),
                    code => {
                        if let Some(action) = self.action_for(code) {
                            self.apply(action, terminal);
                        }
                    }
                }
            }
            if self.exit {
                return Ok(());
            }
        }
    }

    fn current_table(&self) -> Option<&TableView> {
        self.views.get(self.selected_tab)
    }

    fn select_tab(&mut self, step: usize) {
        if self.views.is_empty() {
            return;
        }
        self.selected_tab = (self.selected_tab + step) % self.views.len();
        self.selected_row = 0;
    }

    fn move_row(&mut self, step: isize) {
        let len = self.current_table().map(|v| v.row_count()).unwrap_or(0);
        if len == 0 {
            return;
        }
        self.selected_row = (self.selected_row as isize + step).rem_euclid(len as isize) as usize;
    }

    /// Maps a key to an action on the current table or the selected row.
    pub fn action_for(&self, code: KeyCode) -> Option<Action> {
        let view = self.current_table()?;
        let table: TableId = view.id.clone();
        let selected = view.rows.get(self.selected_row).map(|r| r.name.clone());

        match code {
            KeyCode::Char('a') => Some(Action::Add { table }),
            KeyCode::Char('e') => selected.map(|name| Action::Edit { table, name }),
            KeyCode::Char('d') => selected.map(|name| Action::Delete { table, name }),
            KeyCode::Char('n') => Some(Action::Sort {
                table,
                key: SortKey::Name,
            }),
            KeyCode::Char('l') => Some(Action::Sort {
                table,
                key: SortKey::Location,
            }),
            KeyCode::Char('s') => Some(Action::Sort {
                table,
                key: SortKey::Size,
            }),
            _ => None,
        }
    }

    fn apply<B: Backend>(&mut self, action: Action, terminal: &mut Terminal<B>) {
        let Some(background) = self.current_table().cloned() else {
            return;
        };
        debug!(?action, "key action");
        let summary = describe(&action, &background.label);

        let mut prompt = TerminalPrompt::new(terminal, background);
        let result = self.session.dispatch(action, &mut prompt);
        let reports = std::mem::take(&mut prompt.reports);

        match result {
            Ok(view) => {
                let len = view.row_count();
                self.views[self.selected_tab] = view;
                self.selected_row = self.selected_row.min(len.saturating_sub(1));
                if reports.is_empty() {
                    self.push_info(summary);
                }
            }
            Err(err) => self.push_error(err.to_string()),
        }
        for report in reports {
            self.push_error(report);
        }
    }

    fn push_info(&mut self, message: String) {
        self.messages.push(Line::from(Span::styled(
            message,
            Style::default().fg(Color::Green),
        )));
    }

    fn push_error(&mut self, message: String) {
        self.messages.push(Line::from(Span::styled(
            format!("Error: {}", message),
            Style::default().fg(Color::Red),
        )));
    }
}

fn describe(action: &Action, label: &str) -> String {
    match action {
        Action::Add { .. } => format!("Add on {}", label),
        Action::Edit { name, .. } => format!("Edit {} in {}", name, label),
        Action::Delete { name, .. } => format!("Deleted {} from {}", name, label),
        Action::Sort { key, .. } => format!("Sorted {} by {}", label, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use animal_tables::{RecordingInteraction, SeedSet};

    fn app() -> App {
        let mut ui = RecordingInteraction::default();
        let session = Session::seeded(&SeedSet::builtin(), &mut ui).unwrap();
        App::new(session, Vec::new())
    }

    #[test]
    fn test_keys_map_to_actions() {
        let app = app();
        assert_eq!(
            app.action_for(KeyCode::Char('s')),
            Some(Action::Sort {
                table: "big-cats".into(),
                key: SortKey::Size
            })
        );
        assert_eq!(
            app.action_for(KeyCode::Char('d')),
            Some(Action::Delete {
                table: "big-cats".into(),
                name: "Tiger".into()
            })
        );
        assert_eq!(app.action_for(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_tab_and_row_navigation_wrap() {
        let mut app = app();
        app.select_tab(1);
        assert_eq!(app.current_table().unwrap().label, "Dogs");
        app.move_row(-1);
        assert_eq!(app.selected_row, 3);
        app.select_tab(2);
        assert_eq!(app.selected_tab, 0);
        assert_eq!(app.selected_row, 0);
    }
}
