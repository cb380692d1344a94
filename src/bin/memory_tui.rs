//! Terminal front-end: draws the card grid and feeds key presses back into
//! the session.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use memory_match::{Card, CardId, GameConfig, Session, Snapshot, TokenSet};

/// Longest we block on input when no revert is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Memory card game in the terminal
#[derive(Parser, Debug)]
#[command(name = "memory-match")]
#[command(about = "Flip cards two at a time and find every pair")]
#[command(version)]
struct Args {
    /// Number of pairs to deal
    #[arg(short, long, default_value_t = TokenSet::STOCK_SIZE)]
    pairs: usize,

    /// Fixed seed for reproducible deals
    #[arg(short, long)]
    seed: Option<u64>,

    /// Milliseconds a mismatched pair stays face-up
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,

    /// Cards per grid row
    #[arg(short, long, default_value_t = 6, value_parser = clap::value_parser!(u16).range(1..))]
    columns: u16,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        let config = GameConfig::new(TokenSet::numbered(self.pairs))
            .with_mismatch_delay(Duration::from_millis(self.delay_ms));
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

/// The terminal owns stdout, so logs only go to a file when one is given.
fn init_logging(args: &Args) -> io::Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();

    Ok(())
}

struct App {
    session: Session,
    cursor: usize,
    columns: usize,
}

impl App {
    fn new(session: Session, columns: usize) -> Self {
        Self {
            session,
            cursor: 0,
            columns,
        }
    }

    fn move_cursor(&mut self, dx: isize, dy: isize) {
        let len = self.session.state().deck().len();
        if len == 0 {
            return;
        }

        let cols = self.columns as isize;
        let max_row = ((len - 1) / self.columns) as isize;
        let row = ((self.cursor / self.columns) as isize + dy).clamp(0, max_row);
        let col = ((self.cursor % self.columns) as isize + dx).clamp(0, cols - 1);

        self.cursor = ((row * cols + col) as usize).min(len - 1);
    }

    /// Returns false when the player quits.
    fn handle_key(&mut self, code: KeyCode, now: Instant) -> bool {
        if matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
            return false;
        }

        if self.session.is_celebrating() {
            self.session.dismiss();
            return true;
        }

        match code {
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(1, 0),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(0, -1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.session.click(CardId::from(self.cursor), now);
            }
            KeyCode::Char('r') => self.session.reset(),
            _ => {}
        }
        true
    }
}

fn card_widget<'a>(card: &Card, tokens: &'a TokenSet, under_cursor: bool) -> Paragraph<'a> {
    let face = tokens.label(card.token).unwrap_or("?");
    let (text, color) = if card.matched {
        (face, Color::Green)
    } else if card.face_up {
        (face, Color::Yellow)
    } else {
        ("?", Color::Blue)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    if under_cursor {
        block = block
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    }

    Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(block)
}

fn draw_grid(frame: &mut Frame, area: Rect, app: &App, snapshot: &Snapshot) {
    let columns = app.columns;
    let row_count = snapshot.cards.len().div_ceil(columns);
    if row_count == 0 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, row_count as u32); row_count])
        .split(area);
    let tokens = &app.session.state().config().tokens;

    for (row, chunk) in snapshot.cards.chunks(columns).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(rows[row]);

        for (col, card) in chunk.iter().enumerate() {
            let widget = card_widget(card, tokens, card.id.index() == app.cursor);
            frame.render_widget(widget, cells[col]);
        }
    }
}

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

fn draw(frame: &mut Frame, app: &App) {
    let snapshot = app.session.snapshot();
    let area = frame.size();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Paragraph::new(format!(
        "Pairs found: {}/{}",
        snapshot.matched_pairs, snapshot.total_pairs
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(" memory-match "));
    frame.render_widget(header, layout[0]);

    draw_grid(frame, layout[1], app, &snapshot);

    let help = Paragraph::new("arrows/hjkl move   space flip   r reset   q quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout[2]);

    if app.session.is_celebrating() {
        let popup = centered(area, 40, 5);
        let banner = Paragraph::new(vec![
            Line::from("You found every pair!"),
            Line::from(""),
            Line::from("Press any key to continue"),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

        frame.render_widget(Clear, popup);
        frame.render_widget(banner, popup);
    }
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        app.session.tick(Instant::now());
        terminal.draw(|frame| draw(frame, app))?;

        let timeout = app
            .session
            .next_deadline()
            .map_or(IDLE_POLL, |deadline| {
                deadline.saturating_duration_since(Instant::now()).min(IDLE_POLL)
            });

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && !app.handle_key(key.code, Instant::now()) {
                    return Ok(());
                }
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    let session = Session::new(args.game_config())?;
    tracing::info!(
        pairs = args.pairs,
        seed = ?args.seed,
        delay_ms = args.delay_ms,
        "session started"
    );
    let mut app = App::new(session, usize::from(args.columns));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    Ok(())
}
