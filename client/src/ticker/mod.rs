use std::{
    sync::{
        Arc, RwLock,
        mpsc::{self, Receiver, Sender, TryRecvError},
    },
    thread,
    time::{Duration, Instant},
};

use sleeper::Sleeper;
use tracing::{debug, error, info};

use crate::State;

pub mod sleeper;

/// Handle to a background thread stepping the shared game at a fixed interval.
pub struct TickerHost {
    stop_sender: Sender<()>,
    rate_sender: Sender<Duration>,
}

impl TickerHost {
    pub fn start(state_arc: Arc<RwLock<State>>, interval: Duration) -> Self {
        let (stop_sender, stop_receiver) = mpsc::channel();
        let (rate_sender, rate_receiver) = mpsc::channel();

        thread::spawn(move || {
            let mut sleeper = Sleeper::new(interval);
            // Wait a full interval before the first generation.
            sleeper.last_instant = Some(Instant::now());

            while !stop_requested(&stop_receiver) {
                if let Ok(interval) = rate_receiver.try_recv() {
                    sleeper.target_delta_time = interval;
                }

                sleeper.sleep();

                let Ok(mut state) = state_arc.write() else {
                    error!("Game state lock poisoned, stopping ticker");
                    break;
                };

                // A stop sent while we slept is already queued once we hold the lock.
                if stop_requested(&stop_receiver) {
                    break;
                }

                state.game.step();
                debug!(
                    step = state.game.step_count(),
                    alive = state.game.alive_count(),
                    "Ticked generation"
                );
            }
        });

        info!(interval_millis = interval.as_millis() as u64, "Ticker started");

        Self {
            stop_sender,
            rate_sender,
        }
    }

    /// Stops the thread before its next generation. Dropping the host does the same.
    pub fn stop(self) {
        // The thread may already be gone if the lock was poisoned.
        let _ = self.stop_sender.send(());
        info!("Ticker stopped");
    }

    pub fn set_rate(&mut self, interval: Duration) {
        let _ = self.rate_sender.send(interval);
        info!(interval_millis = interval.as_millis() as u64, "Ticker rate changed");
    }
}

fn stop_requested(stop_receiver: &Receiver<()>) -> bool {
    !matches!(stop_receiver.try_recv(), Err(TryRecvError::Empty))
}
