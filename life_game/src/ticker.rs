// ticker.rs - Cancellable periodic tick source driving the simulation

use std::sync::Arc;
use std::time::Duration;

use log::{debug, trace};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// Called from the ticker task after each tick so the UI thread wakes up.
pub type Wake = Arc<dyn Fn() + Send + Sync>;

/// A periodic source of ticks that can be started and stopped.
///
/// Ticks are only counted, never acted on, by the implementation; the owner
/// of the grid polls `take_due` and steps once per tick.
pub trait Ticker {
    fn start(&mut self, period: Duration);

    /// Stops ticking. No tick fired before this call is reported afterwards.
    fn stop(&mut self);

    fn is_active(&self) -> bool;

    /// Ticks fired since the last call that belong to the current run.
    fn take_due(&mut self) -> usize;
}

/// Ticker backed by a `tokio::time::interval` task.
///
/// Each run is tagged with an epoch. Stopping aborts the task and bumps the
/// epoch, so a tick that was already queued when the run ended is dropped
/// instead of stepping a grid the user is editing.
pub struct IntervalTicker {
    runtime: Handle,
    wake: Wake,
    sender: UnboundedSender<u64>,
    receiver: UnboundedReceiver<u64>,
    task: Option<JoinHandle<()>>,
    epoch: u64,
}

impl IntervalTicker {
    pub fn new(runtime: Handle, wake: Wake) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            runtime,
            wake,
            sender,
            receiver,
            task: None,
            epoch: 0,
        }
    }
}

impl Ticker for IntervalTicker {
    fn start(&mut self, period: Duration) {
        self.stop();

        let epoch = self.epoch;
        let sender = self.sender.clone();
        let wake = Arc::clone(&self.wake);
        self.task = Some(self.runtime.spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                // The first tick completes immediately.
                interval.tick().await;
                if sender.send(epoch).is_err() {
                    break;
                }
                wake();
            }
        }));
        debug!("ticker started (epoch {epoch}, every {period:?})");
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("ticker stopped (epoch {})", self.epoch);
            self.epoch += 1;
        }
    }

    fn is_active(&self) -> bool {
        self.task.is_some()
    }

    fn take_due(&mut self) -> usize {
        let mut due = 0;
        while let Ok(epoch) = self.receiver.try_recv() {
            if epoch == self.epoch && self.is_active() {
                due += 1;
            } else {
                trace!("dropping stale tick from epoch {epoch}");
            }
        }
        due
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
