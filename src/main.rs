//! Brick Breaker entry point
//!
//! Headless demo: runs the real-time frame driver while an autopilot thread
//! plays from snapshots and feeds input events back over a channel.
//!
//! Usage: `brick-breaker [config.json]`

use std::error::Error;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use brick_breaker::sim::{GameEvent, Snapshot};
use brick_breaker::{Autopilot, Game, GameConfig};
use crossbeam_channel::{Sender, TrySendError};

/// Give up after five minutes of simulated play at the default rate
const MAX_DEMO_TICKS: u64 = 100 * 60 * 5;

/// Hand the latest frame to the autopilot. Returns `false` once the pilot
/// thread has gone away and the demo should stop.
fn forward_snapshot(tx: &Sender<Snapshot>, snapshot: &Snapshot) -> bool {
    match tx.try_send(snapshot.clone()) {
        // A full slot means the pilot is still busy with the previous frame
        Ok(()) | Err(TrySendError::Full(_)) => true,
        Err(TrySendError::Disconnected(_)) => {
            log::error!("Autopilot thread exited, stopping the demo");
            false
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    log::info!("Brick Breaker (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(&path)?,
        None => GameConfig::default(),
    };
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();

    let (mut game, input_tx) = Game::new(config, seed)?;
    log::info!("Game initialized with seed: {}", seed);

    // Latest snapshot only; the autopilot never needs a backlog
    let (snap_tx, snap_rx) = crossbeam_channel::bounded::<Snapshot>(1);
    let pilot = thread::spawn(move || {
        let mut autopilot = Autopilot::new();
        for snapshot in snap_rx {
            for event in autopilot.steer(&snapshot) {
                if input_tx.send(event).is_err() {
                    return;
                }
            }
        }
    });

    let mut last_score = 0;
    let mut total_ticks = 0;
    let mut final_snapshot = None;
    game.run(|snapshot| {
        total_ticks = snapshot.time_ticks;
        for event in &snapshot.events {
            match event {
                GameEvent::LifeLost { remaining } => {
                    log::info!("Ball lost, {} lives left", remaining)
                }
                GameEvent::BrickDestroyed { .. } if snapshot.score / 500 != last_score / 500 => {
                    log::info!(
                        "Score {} ({} bricks left)",
                        snapshot.score,
                        snapshot.visible_bricks().count()
                    )
                }
                _ => {}
            }
        }
        last_score = snapshot.score;

        if snapshot.is_round_over() || total_ticks >= MAX_DEMO_TICKS {
            final_snapshot = Some(snapshot.clone());
            return false;
        }
        if forward_snapshot(&snap_tx, snapshot) {
            return true;
        }
        final_snapshot = Some(snapshot.clone());
        false
    });
    drop(snap_tx);
    if pilot.join().is_err() {
        log::error!("Autopilot thread panicked");
    }

    if let Some(snapshot) = final_snapshot {
        let outcome = if snapshot.won {
            "won"
        } else if snapshot.is_round_over() {
            "lost"
        } else {
            "stopped"
        };
        println!(
            "Round {} after {} ticks: score {}, lives {}, {} bricks left",
            outcome,
            snapshot.time_ticks,
            snapshot.score,
            snapshot.lives,
            snapshot.visible_bricks().count()
        );
    }
    Ok(())
}
