use crossterm::{
    event::{self, Event},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use std::{
    io::{stdout, Stdout},
    time::{Duration, Instant},
};

use anyhow::Context;
use clap::Parser;
use log::{error, info};

mod config;
mod constants;
mod error;
mod game;
mod input;
mod logging;
mod storage;
mod ui;

use config::Args;
use constants::INPUT_POLL_MS;
use game::Game;
use input::{handle_input, Action};
use storage::{FileStore, HighScoreStore, MemoryStore};
use ui::ui;

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_log(args.log_level, &args.log_file)
        .with_context(|| format!("cannot open log file {}", args.log_file.display()))?;

    let store: Box<dyn HighScoreStore> = if args.no_save {
        Box::new(MemoryStore::new())
    } else {
        let path = args.high_score_file.clone().unwrap_or_else(FileStore::default_path);
        info!("high score file: {}", path.display());
        Box::new(FileStore::new(path))
    };

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!("starting: tick {} ms, seed {:?}", args.tick_ms, args.seed);

    let mut game = Game::new(store, rng, args.tick_interval());

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut game);

    // Cleanup, even when the loop failed
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        error!("game loop failed: {:#}", e);
    }
    info!("exiting with best score {}", game.score.best());
    result
}

fn run(terminal: &mut Tui, game: &mut Game) -> anyhow::Result<()> {
    let mut dirty = true;

    loop {
        if dirty {
            terminal.draw(|f| ui(f, game))?;
            dirty = false;
        }

        if event::poll(Duration::from_millis(INPUT_POLL_MS).min(game.tick_interval()))? {
            match event::read()? {
                Event::Key(key) => match Action::from_key(key) {
                    Some(Action::Quit) => break,
                    Some(action) => dirty |= handle_input(game, action, Instant::now()),
                    None => {}
                },
                Event::Resize(_, _) => dirty = true,
                _ => {}
            }
        }

        dirty |= game.update(Instant::now());
    }

    Ok(())
}
