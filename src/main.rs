mod board;
mod config;
mod draw;
mod fruit;
mod game;
mod game_loop;
mod input;
mod pos;
mod snake;

use anyhow::{Context, Result};
use board::Board;
use clap::Parser;
use config::Settings;
use draw::{Canvas, Rgba};
use game::{Game, GameEvent};
use game_loop::{GameLoop, Stage};
use input::{Command, Input};
use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use std::path::PathBuf;
use std::time::Instant;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

const TITLE: &str = "Snake";

#[derive(Parser, Debug)]
#[command(name = "grid-snake", version, about = "Snake on a wrapping grid")]
struct Cli {
    /// JSON settings file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width in cells
    #[arg(long)]
    columns: Option<u32>,

    /// Board height in cells
    #[arg(long)]
    rows: Option<u32>,

    /// Cell size in pixels
    #[arg(long)]
    cell_size: Option<u32>,

    /// Gameplay ticks per second
    #[arg(long)]
    fps: Option<f64>,

    /// Seed for start and fruit placement
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut s = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(v) = self.columns { s.columns = v; }
        if let Some(v) = self.rows { s.rows = v; }
        if let Some(v) = self.cell_size { s.cell_size = v; }
        if let Some(v) = self.fps { s.fps = v; }
        if self.seed.is_some() { s.seed = self.seed; }
        s.validate().context("invalid settings")?;
        Ok(s)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Cli::parse().settings()?;
    info!(
        "board {}x{} cells of {} px at {} ticks/s",
        settings.columns, settings.rows, settings.cell_size, settings.fps
    );

    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();

    let mut board = settings.board();
    let (width, height) = board.pixel_size();
    let window = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(LogicalSize::new(width, height))
        .with_min_inner_size(LogicalSize::new(board.cell, board.cell))
        .build(&event_loop)
        .context("creating window")?;

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(width, height, surface_texture).context("creating pixel surface")?
    };

    let mut canvas = Canvas::new(width, height);
    let mut game = Game::new(&settings, board);
    let mut keys = Input::default();
    let mut game_loop = GameLoop::new(settings.fps)?;
    let mut commands = Vec::new();
    // board the next round will use, refit whenever the window is resized
    let mut next_board = board;

    game.render(&mut commands);
    canvas.paint(pixels.frame_mut(), &commands);
    game_loop.start(Instant::now());

    event_loop.run(move |event, _, control_flow| {
        // Keys are handled in arrival order so the last direction pressed wins.
        if let Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                },
            ..
        } = &event
        {
            match Command::from_key(*key) {
                Some(Command::Steer(dir)) => keys.steer(dir),
                Some(Command::Start) if game.is_alive() && !game_loop.is_running() => {
                    info!("started");
                    game_loop.start(Instant::now());
                }
                Some(Command::Stop) if game_loop.is_running() => {
                    info!("paused at score {}", game.score());
                    game_loop.stop();
                    canvas.notice(pixels.frame_mut(), &["PAUSED", "PRESS SPACE"], Rgba::WHITE);
                    window.request_redraw();
                }
                Some(Command::Restart) if !game.is_alive() => {
                    if next_board != board {
                        let (w, h) = next_board.pixel_size();
                        if let Err(err) = pixels.resize_buffer(w, h) {
                            error!("resizing pixel buffer to {w}x{h}: {err}");
                            *control_flow = ControlFlow::Exit;
                            return;
                        }
                        board = next_board;
                        canvas = Canvas::new(w, h);
                    }
                    info!("restarting on a {}x{} board", board.columns, board.rows);
                    game = Game::new(&settings, board);
                    keys = Input::default();
                    commands.clear();
                    game.render(&mut commands);
                    canvas.paint(pixels.frame_mut(), &commands);
                    window.set_title(TITLE);
                    game_loop.start(Instant::now());
                    window.request_redraw();
                }
                Some(Command::Dump) => info!(
                    "snake {:?} growing={} fruit={:?} board={:?}",
                    game.snake().pieces(),
                    game.snake().is_growing(),
                    game.fruit().map(|f| f.pos),
                    game.board()
                ),
                Some(Command::Quit) => {
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                _ => {}
            }
        }

        if let Event::RedrawRequested(_) = event {
            if let Some(tick) = game_loop.advance(Instant::now(), &mut game, &keys, &mut commands) {
                debug!("tick {:?} late", tick.elapsed.saturating_sub(game_loop.delay()));
                let frame = pixels.frame_mut();
                canvas.paint(frame, &commands);
                match tick.event {
                    Some(GameEvent::Collision { score, length }) => {
                        game_loop.stop();
                        info!("game over: score {score}, length {length}");
                        let score_line = format!("SCORE: {score}");
                        canvas.notice(frame, &["GAME OVER", score_line.as_str(), "PRESS R TO RESTART"], Rgba::WHITE);
                        window.set_title(&format!("{TITLE} - game over"));
                    }
                    Some(GameEvent::FruitEaten { score }) => window.set_title(&format!("{TITLE} - {score}")),
                    None => {}
                }
            }

            if let Err(err) = pixels.render() {
                error!("pixels.render failed: {err}");
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        if input.update(&event) {
            if input.close_requested() || input.destroyed() {
                *control_flow = ControlFlow::Exit;
                return;
            }

            if let Some(size) = input.window_resized() {
                if let Err(err) = pixels.resize_surface(size.width, size.height) {
                    error!("resizing surface to {}x{}: {err}", size.width, size.height);
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                next_board = Board::fit_window(size.width, size.height, board.cell);
                debug!("window {}x{}, next board {}x{}", size.width, size.height, next_board.columns, next_board.rows);
                window.request_redraw();
            }

            // The loop reschedules itself only while it runs.
            if game_loop.is_running() {
                *control_flow = ControlFlow::Poll;
                window.request_redraw();
            } else {
                *control_flow = ControlFlow::Wait;
            }
        }
    });
}
