//! Frame driver and game session
//!
//! [`FrameDriver`] turns wall-clock time into a whole number of fixed
//! ticks. [`Game`] owns the state, drains input events sent from any thread
//! between ticks, and hands out one [`Snapshot`] per frame.

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::sim::{GameEvent, GameState, InputEvent, Snapshot, apply_input, tick};

/// Fixed-interval tick source with a catch-up cap
#[derive(Debug, Clone)]
pub struct FrameDriver {
    interval: Duration,
    max_substeps: u32,
    accumulator: Duration,
    running: bool,
}

impl FrameDriver {
    /// A stopped driver
    pub fn new(interval: Duration, max_substeps: u32) -> Self {
        Self {
            interval,
            max_substeps,
            accumulator: Duration::ZERO,
            running: false,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.tick_interval(), config.max_substeps)
    }

    pub fn start(&mut self) {
        self.running = true;
        self.accumulator = Duration::ZERO;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = Duration::ZERO;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Accumulate `elapsed` and return how many ticks are due now
    ///
    /// At most `max_substeps` ticks are released per call; any backlog
    /// beyond that is dropped to prevent a spiral of death.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.running {
            return 0;
        }

        self.accumulator += elapsed;
        let mut due = 0;
        while self.accumulator >= self.interval && due < self.max_substeps {
            self.accumulator -= self.interval;
            due += 1;
        }

        if self.accumulator >= self.interval {
            log::warn!(
                "Frame driver fell behind, dropping {:?} of backlog",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }
        due
    }
}

/// A running game: state, driver and input queue
pub struct Game {
    state: GameState,
    driver: FrameDriver,
    inputs: Receiver<InputEvent>,
    /// Events since the last snapshot
    pending_events: Vec<GameEvent>,
}

impl Game {
    /// Set up a round and start the driver
    ///
    /// The returned sender may be cloned and moved to input threads.
    pub fn new(config: GameConfig, seed: u64) -> Result<(Self, Sender<InputEvent>), ConfigError> {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut driver = FrameDriver::from_config(&config);
        let state = GameState::new(config, seed)?;
        driver.start();

        let game = Self {
            state,
            driver,
            inputs: rx,
            pending_events: Vec::new(),
        };
        Ok((game, tx))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted scenarios and tests
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn driver(&self) -> &FrameDriver {
        &self.driver
    }

    /// Apply one input event right away (between ticks)
    pub fn handle_input(&mut self, event: InputEvent) {
        if apply_input(&mut self.state, event) {
            self.pending_events.extend_from_slice(&self.state.events);
        }
        if self.state.is_playing() && !self.driver.is_running() {
            self.driver.start();
            log::info!("Frame driver resumed");
        }
    }

    /// Drain every queued input event; returns how many were handled
    pub fn pump_inputs(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.inputs.try_recv() {
            self.handle_input(event);
            handled += 1;
        }
        handled
    }

    /// Run exactly one tick if the driver is running, then snapshot
    pub fn step(&mut self) -> Snapshot {
        self.pump_inputs();
        if self.driver.is_running() {
            self.run_tick();
        }
        self.take_snapshot()
    }

    /// Advance by `elapsed` wall-clock time, then snapshot
    pub fn frame(&mut self, elapsed: Duration) -> Snapshot {
        self.pump_inputs();
        let due = self.driver.advance(elapsed);
        for _ in 0..due {
            self.pump_inputs();
            if !self.driver.is_running() {
                break;
            }
            self.run_tick();
        }
        self.take_snapshot()
    }

    /// Drive frames in real time until `render` returns false
    ///
    /// `render` sees every frame's snapshot on this thread; inputs arrive
    /// through the channel returned by [`Game::new`].
    pub fn run<F>(&mut self, mut render: F)
    where
        F: FnMut(&Snapshot) -> bool,
    {
        let interval = self.driver.interval();
        let mut last = Instant::now();
        loop {
            let now = Instant::now();
            let snapshot = self.frame(now - last);
            last = now;

            if !render(&snapshot) {
                break;
            }
            thread::sleep(interval.saturating_sub(now.elapsed()));
        }
    }

    fn run_tick(&mut self) {
        tick(&mut self.state);
        self.pending_events.extend_from_slice(&self.state.events);

        if !self.state.is_playing() {
            self.driver.stop();
            log::info!("Frame driver stopped at tick {}", self.state.time_ticks);
        }
    }

    fn take_snapshot(&mut self) -> Snapshot {
        let mut snapshot = Snapshot::capture(&self.state);
        snapshot.events = std::mem::take(&mut self.pending_events);
        snapshot
    }
}
