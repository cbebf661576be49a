mod input;

use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use ratatui::{
    crossterm::{
        event::{self, Event},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
    widgets::*,
};
use twenty48::{Board, GameConfig, RareTileValue};

use crate::input::{command_for_key, Command};

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a JSON game config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board size, overrides the config file
    #[arg(long)]
    size: Option<usize>,

    /// Value of the rare spawned tile, overrides the config file (default: the board size)
    #[arg(long)]
    rare_tile: Option<u32>,
}

fn load_config(args: &Args) -> anyhow::Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(value) = args.rare_tile {
        config.spawn.rare_value = RareTileValue::Fixed(value);
    }
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut board = Board::from_seed(config, seed)?;

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let result = run(&mut board);
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    result
}

fn run(board: &mut Board) -> anyhow::Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    loop {
        terminal.draw(|frame| ui(frame, board))?;
        match handle_events()? {
            Some(Command::Move(direction)) => {
                board.apply_move(direction);
            }
            Some(Command::Restart) => board.init(),
            Some(Command::Quit) => return Ok(()),
            None => {}
        }
    }
}

fn handle_events() -> std::io::Result<Option<Command>> {
    if event::poll(std::time::Duration::from_millis(16))? {
        if let Event::Key(key) = event::read()? {
            return Ok(command_for_key(key));
        }
    }
    Ok(None)
}

fn ui(frame: &mut Frame, board: &Board) {
    let main_layout = Layout::new(
        Direction::Vertical,
        [Constraint::Min(0), Constraint::Length(2)],
    )
    .split(frame.size());
    frame.render_widget(BoardWidget { board }, main_layout[0]);
    frame.render_widget(StatusWidget { board }, main_layout[1]);
}

const CELL_WIDTH: u16 = 8;
const CELL_HEIGHT: u16 = 3;

struct BoardWidget<'a> {
    board: &'a Board,
}

fn tile_color(value: u32) -> Color {
    if value == 0 {
        return Color::DarkGray;
    }
    match value.trailing_zeros() {
        1 => Color::White,
        2 => Color::LightYellow,
        3 => Color::Yellow,
        4 => Color::LightRed,
        5 => Color::Red,
        6 => Color::LightMagenta,
        7 => Color::Magenta,
        8 => Color::LightCyan,
        9 => Color::Cyan,
        10 => Color::LightGreen,
        _ => Color::Green,
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area)[1];
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area)[1]
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let size = u16::try_from(self.board.size()).unwrap_or(u16::MAX);
        let area = centered(
            area,
            size.saturating_mul(CELL_WIDTH),
            size.saturating_mul(CELL_HEIGHT),
        );
        for slot in self.board.snapshot() {
            let (Ok(row), Ok(col)) = (
                u16::try_from(slot.position.row),
                u16::try_from(slot.position.col),
            ) else {
                continue;
            };
            let cell = Rect {
                x: area.x.saturating_add(col.saturating_mul(CELL_WIDTH)),
                y: area.y.saturating_add(row.saturating_mul(CELL_HEIGHT)),
                width: CELL_WIDTH,
                height: CELL_HEIGHT,
            };
            // Skip cells that don't fit on the screen
            if cell.intersection(area) != cell {
                continue;
            }
            let style = Style::new().fg(tile_color(slot.value));
            Block::new()
                .border_type(BorderType::Rounded)
                .borders(Borders::all())
                .style(style)
                .render(cell, buf);
            if !slot.is_empty() {
                let label = slot.value.to_string();
                let label_width = u16::try_from(label.len()).unwrap_or(u16::MAX);
                let x = cell.x + CELL_WIDTH.saturating_sub(label_width) / 2;
                buf.set_stringn(
                    x.max(cell.x + 1),
                    cell.y + 1,
                    &label,
                    usize::from(CELL_WIDTH - 2),
                    style.bold(),
                );
            }
        }
    }
}

struct StatusWidget<'a> {
    board: &'a Board,
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (headline, style) = if self.board.is_game_over() {
            (
                format!("Game over! Highest tile: {}", self.board.max_tile()),
                Style::new().fg(Color::Red).bold(),
            )
        } else {
            (
                format!("Highest tile: {}", self.board.max_tile()),
                Style::new(),
            )
        };
        Paragraph::new(vec![
            Line::styled(headline, style),
            Line::raw("arrows/hjkl/wasd: move   r: restart   q: quit"),
        ])
        .alignment(Alignment::Center)
        .render(area, buf);
    }
}
