use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{self, stdout, Stdout, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::warn;

use crate::answer::{paragraphs, Language};
use crate::record::ConversationRecord;
use crate::samples::language_label;
use crate::validate::detect_language;

// Which panel has focus
#[derive(Clone, Copy, PartialEq, Debug)]
enum Focus {
    Records,
    Answer,
}

// Browser state
struct App {
    focus: Focus,
    records: Vec<ConversationRecord>,
    cursor: usize,
    answer_scroll: usize,
    should_quit: bool,
    last_ctrl_c: Option<Instant>,
    status_message: Option<String>,
    source: PathBuf,
}

impl App {
    fn new(records: Vec<ConversationRecord>, source: &Path) -> Self {
        Self {
            focus: Focus::Records,
            records,
            cursor: 0,
            answer_scroll: 0,
            should_quit: false,
            last_ctrl_c: None,
            status_message: None,
            source: source.to_path_buf(),
        }
    }

    fn current(&self) -> Option<&ConversationRecord> {
        self.records.get(self.cursor)
    }

    fn select(&mut self, index: usize) {
        let last = self.records.len().saturating_sub(1);
        let index = index.min(last);
        if index != self.cursor {
            self.cursor = index;
            self.answer_scroll = 0;
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // Clear status message on any key
        self.status_message = None;

        // Handle Ctrl+C
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last) = self.last_ctrl_c {
                if last.elapsed().as_secs() < 2 {
                    self.should_quit = true;
                    return;
                }
            }
            self.last_ctrl_c = Some(Instant::now());
            self.status_message = Some("Press Ctrl+C again to quit".into());
            return;
        }

        match code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,

            KeyCode::Left => self.focus = Focus::Records,
            KeyCode::Right | KeyCode::Enter => self.focus = Focus::Answer,
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Records => Focus::Answer,
                    Focus::Answer => Focus::Records,
                };
            }

            KeyCode::Up => match self.focus {
                Focus::Records => self.select(self.cursor.saturating_sub(1)),
                Focus::Answer => self.answer_scroll = self.answer_scroll.saturating_sub(1),
            },
            KeyCode::Down => match self.focus {
                Focus::Records => self.select(self.cursor + 1),
                Focus::Answer => self.answer_scroll = self.answer_scroll.saturating_add(1),
            },
            KeyCode::PageUp => self.select(self.cursor.saturating_sub(10)),
            KeyCode::PageDown => self.select(self.cursor + 10),
            KeyCode::Home => self.select(0),
            KeyCode::End => self.select(usize::MAX),

            _ => {}
        }
    }

    fn stats_line(&self) -> String {
        match self.current() {
            Some(record) => {
                let answer = record.answer().unwrap_or_default();
                format!(
                    " {}/{} | {} | {} characters, {} paragraphs ",
                    self.cursor + 1,
                    self.records.len(),
                    language_label(record),
                    answer.chars().count(),
                    paragraphs(answer).len()
                )
            }
            None => " empty dataset ".to_string(),
        }
    }
}

/// Raw mode and the alternate screen for as long as the guard lives.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(mut out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = out.execute(EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        Ok(Self { out })
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!("failed to leave raw mode: {e}");
        }
        if let Err(e) = self.out.execute(LeaveAlternateScreen) {
            warn!("failed to leave alternate screen: {e}");
        }
    }
}

/// Opens an interactive browser over `records`.
pub fn run(records: Vec<ConversationRecord>, source: &Path) -> io::Result<()> {
    let _guard = TerminalGuard::enter(stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(records, source);
    event_loop(&mut terminal, &mut app)
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui(frame, app))?;
        handle_events(app)?;
    }
    Ok(())
}

fn ui(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);
    let layout = Layout::horizontal([
        Constraint::Percentage(35),
        Constraint::Percentage(65),
    ])
    .split(rows[0]);

    render_records(frame, layout[0], app);
    render_answer(frame, layout[1], app);
    render_status(frame, rows[1], app);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_records(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Records;

    let items: Vec<ListItem> = app
        .records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let tag = match record.answer().and_then(detect_language) {
                Some(Language::Indonesian) => Span::styled("[ID] ", Style::default().fg(Color::Green)),
                Some(Language::Indramayu) => Span::styled("[IM] ", Style::default().fg(Color::Magenta)),
                None => Span::styled("[??] ", Style::default().fg(Color::Red)),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>4} ", i + 1), Style::default().dim()),
                tag,
                Span::raw(record.question().unwrap_or_default().to_string()),
            ]))
        })
        .collect();

    let title = if focused {
        " Records (↑↓ move, Tab switch) "
    } else {
        " Records "
    };

    let list = List::new(items)
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .block(Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style(focused)));

    let mut state = ListState::default().with_selected(Some(app.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_answer(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Answer;

    let markdown = match app.current() {
        Some(record) => {
            let mut md = format!("## {}\n\n", record.question().unwrap_or_default());
            for (i, paragraph) in paragraphs(record.answer().unwrap_or_default()).iter().enumerate() {
                md.push_str(&format!("### Paragraph {}\n\n{}\n\n", i + 1, paragraph));
            }
            md
        }
        None => format!("_No records in {}_", app.source.display()),
    };

    let parsed = tui_markdown::from_str(&markdown);
    let lines: Vec<Line> = parsed.lines.into_iter().collect();

    // Wrapping adds rows we cannot count here; clamp to the last source line
    let scroll = app.answer_scroll.min(lines.len().saturating_sub(1));

    let title = if focused {
        " Answer (↑↓ scroll, Tab switch) "
    } else {
        " Answer "
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0))
        .block(Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style(focused)));

    frame.render_widget(paragraph, area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = match &app.status_message {
        Some(msg) => Paragraph::new(msg.as_str()).style(Style::default().fg(Color::Yellow).bold()),
        None => Paragraph::new(app.stats_line()).style(Style::default().dim()),
    };
    frame.render_widget(status, area);
}

fn handle_events(app: &mut App) -> io::Result<()> {
    if event::poll(Duration::from_millis(16))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code, key.modifiers);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::Generator;
    use crate::question::QuestionStyle;

    fn app() -> App {
        let topics = vec!["Pulau Biawak".to_string(), "Waduk Bojongsari".to_string()];
        let records = Generator::new(QuestionStyle::Categorized).generate(&topics).records;
        App::new(records, Path::new("data/dataset.json"))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(code, KeyModifiers::NONE);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.cursor, 3);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.cursor, 0);
        press(&mut app, KeyCode::End);
        assert_eq!(app.cursor, 3);
    }

    #[test]
    fn arrows_scroll_answer_when_focused() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Answer);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.answer_scroll, 2);
        assert_eq!(app.cursor, 0);

        // Moving to another record resets the scroll.
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, 1);
        assert_eq!(app.answer_scroll, 0);
    }

    #[test]
    fn ctrl_c_needs_a_second_press() {
        let mut app = app();
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!app.should_quit);
        assert!(app.status_message.is_some());
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn esc_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn stats_line_describes_current_record() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        let line = app.stats_line();
        assert!(line.contains("2/4"));
        assert!(line.contains("Bahasa Indramayu"));
        assert!(line.contains("3 paragraphs"));
    }

    #[test]
    fn empty_dataset_is_browsable() {
        let mut app = App::new(Vec::new(), Path::new("empty.json"));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::End);
        assert_eq!(app.cursor, 0);
        assert_eq!(app.stats_line(), " empty dataset ");
    }

    #[test]
    fn dropping_the_guard_leaves_the_alternate_screen() {
        let mut out = Vec::new();
        drop(TerminalGuard { out: &mut out });
        assert_eq!(out, b"\x1b[?1049l");
    }
}
