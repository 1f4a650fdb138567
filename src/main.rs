use std::io;
use std::panic;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use retro_snake::config::{BOARD, THEME_RETRO, TICK_INTERVAL_MS};
use retro_snake::game::{GameState, GameStatus};
use retro_snake::input::{GameInput, poll_input};
use retro_snake::renderer;
use retro_snake::score::HighScoreStore;

/// Input poll timeout per loop iteration; keeps the UI responsive without
/// busy-waiting between simulation ticks.
const INPUT_POLL_MS: u64 = 15;

#[derive(Debug, Parser)]
#[command(name = "retro-snake", about = "Retro terminal Snake")]
struct Cli {
    /// Seed for food placement, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    install_panic_hook();

    let result = run(cli);
    cleanup_terminal()?;
    result
}

fn run(cli: Cli) -> io::Result<()> {
    let mut terminal = setup_terminal()?;

    let mut store = HighScoreStore::open();
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(BOARD, seed),
        None => GameState::new(BOARD),
    };
    state.high_score = store.high_score();

    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| renderer::render(frame, &state, &THEME_RETRO))?;

        if let Some(input) = poll_input(Duration::from_millis(INPUT_POLL_MS))? {
            if matches!(input, GameInput::Quit) {
                break;
            }

            let was_running = state.status == GameStatus::Running;
            state.apply_input(input);

            // A fresh game gets a fresh tick clock, so the old stream never
            // carries over into the new session.
            if !was_running && state.status == GameStatus::Running {
                last_tick = Instant::now();
            }
        }

        if state.status == GameStatus::Running && last_tick.elapsed() >= tick_interval {
            state.advance();
            last_tick = Instant::now();

            if let Err(error) = store.record(state.high_score) {
                eprintln!("Failed to save high score: {error}");
            }
        }
    }

    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_after_panic();
        default_hook(panic_info);
    }));
}

fn restore_terminal_after_panic() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
