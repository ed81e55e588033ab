use crate::draw::Draw;
use crate::input::Input;
use anyhow::{Result, bail};
use std::time::{Duration, Instant};

/// What the loop drives each tick.
pub trait Stage {
    type Event;

    fn update(&mut self, input: &Input, elapsed: Duration) -> Option<Self::Event>;
    fn render(&self, out: &mut Vec<Draw>);
}

#[derive(Debug, PartialEq, Eq)]
pub struct Tick<E> {
    pub elapsed: Duration,
    pub event: Option<E>,
}

/// Fixed-rate ticker gated on elapsed time. It runs at most one
/// update + render per redraw opportunity and never catches up.
#[derive(Debug)]
pub struct GameLoop {
    delay: Duration,
    last: Option<Instant>,
    running: bool,
}

impl GameLoop {
    pub fn new(fps: f64) -> Result<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            bail!("tick rate must be a positive number, got {fps}");
        }
        Ok(Self { delay: Duration::from_secs_f64(1.0 / fps), last: None, running: false })
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// No-op when already running. The first start sets the time reference;
    /// a restart after `stop` keeps the old one.
    pub fn start(&mut self, now: Instant) {
        if self.running {
            return;
        }
        self.running = true;
        self.last.get_or_insert(now);
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Called once per redraw opportunity. Returns the tick when one fired;
    /// `out` then holds the freshly rendered commands.
    pub fn advance<S: Stage>(
        &mut self,
        now: Instant,
        stage: &mut S,
        input: &Input,
        out: &mut Vec<Draw>,
    ) -> Option<Tick<S::Event>> {
        if !self.running {
            return None;
        }
        let last = *self.last.get_or_insert(now);
        let elapsed = now.saturating_duration_since(last);
        if elapsed < self.delay {
            return None;
        }

        let event = stage.update(input, elapsed);
        out.clear();
        stage.render(out);
        self.last = Some(now);
        Some(Tick { elapsed, event })
    }
}
