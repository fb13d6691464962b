use std::fs::File;
use std::io::{self, Stdout};
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pacman_diet::input::{command_for, Command};
use pacman_diet::render::{render, Renderer};
use pacman_diet::{Game, Settings};

fn main() -> Result<()> {
    let settings = Settings::from_env();
    init_logging(&settings)?;
    let mut game = Game::with_default_maze().context("failed to build the game session")?;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout, &mut game, &settings);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result?;

    info!(score = game.score(), ticks = game.ticks(), "quit");
    println!("Final score: {}", game.score());
    Ok(())
}

/// Logs go to `PACMAN_LOG_FILE` only; the game owns the terminal.
fn init_logging(settings: &Settings) -> Result<()> {
    let Some(path) = &settings.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_env("PACMAN_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(stdout: &mut Stdout, game: &mut Game, settings: &Settings) -> Result<()> {
    let tick_every = Duration::from_millis(settings.tick_ms);
    let frame_time = Duration::from_micros(1_000_000 / settings.render_fps.max(1));
    let mut renderer = Renderer::new(game.grid().columns(), game.grid().rows());
    let mut last_tick = Instant::now();
    info!(
        tick_ms = settings.tick_ms,
        fps = settings.render_fps,
        "game loop started"
    );

    loop {
        let frame_start = Instant::now();
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) => match command_for(key) {
                    Some(Command::Quit) => return Ok(()),
                    Some(Command::Restart) => {
                        game.reset();
                        renderer.invalidate();
                    }
                    Some(Command::Steer(dir)) => game.request_direction(dir),
                    None => {}
                },
                Event::Resize(_, _) => renderer.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_every {
            last_tick = Instant::now();
            game.tick();
        }
        render(stdout, game, &mut renderer, terminal::size()?)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}
