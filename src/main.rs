//! Terminal Snake runner (default binary).
//!
//! Crossterm input, the framebuffer renderer and one game step per frame.
//! Logs go to a file because the terminal belongs to the renderer.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_snake::engine::{Game, GameConfig};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use tui_snake::types::{Control, Position, FRAME_MS};

#[derive(Parser, Debug)]
#[command(name = "tui-snake", version, about = "Terminal snake")]
struct Cli {
    /// JSON game config; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for food placement.
    #[arg(long)]
    seed: Option<u32>,

    /// Milliseconds between moves.
    #[arg(long)]
    tick_ms: Option<u32>,

    #[arg(long)]
    width: Option<i32>,

    #[arg(long)]
    height: Option<i32>,

    /// End the game when the snake runs into itself.
    #[arg(long)]
    self_collision: bool,

    #[arg(long, default_value = "tui-snake.log")]
    log_file: PathBuf,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }
        config.bounds = Position::new(
            self.width.unwrap_or(config.bounds.x),
            self.height.unwrap_or(config.bounds.y),
        );
        if self.self_collision {
            config.self_collision_ends_game = true;
        }
        config.validate()?;
        Ok(config)
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let log_file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let config = cli.game_config()?;
    info!(?config, "starting");
    let mut game = Game::new(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    let closed = game.tear_down();
    result?;
    closed?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    game.start()?;

    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(u64::from(FRAME_MS));
    let mut last_frame = Instant::now();
    let mut exit_requested = false;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot()?, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if game.is_finished() {
            // Leave the final board up until a key is pressed, unless the player quit.
            if !exit_requested {
                wait_for_key()?;
            }
            return Ok(());
        }

        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(control) = handle_key_event(key) {
                        exit_requested |= control == Control::Exit;
                        game.push_control(control);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            let delta_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            game.step(delta_ms)?;
        }
    }
}

fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
