use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::debug;

use crate::runtime::GameEvent;

/// Identifies one countdown so late events from a cancelled one can be told apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Periodic countdown timer posting `GameEvent::Countdown` into the event channel.
///
/// The worker thread stops as soon as the handle is cancelled or dropped.
#[derive(Debug)]
pub struct Countdown {
    id: TimerId,
    stop: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl Countdown {
    pub fn start(id: TimerId, period: Duration, events: Sender<GameEvent>) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let worker = thread::spawn(move || loop {
            match stop_rx.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => {
                    if events.send(GameEvent::Countdown(id)).is_err() {
                        break;
                    }
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        debug!(timer = id.0, ?period, "countdown started");

        Self {
            id,
            stop: Some(stop_tx),
            worker: Some(worker),
        }
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(|w| !w.is_finished())
    }

    pub fn cancel(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
            debug!(timer = self.id.0, "countdown cancelled");
        }
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn emits_events_tagged_with_its_id() {
        let (tx, rx) = mpsc::channel();
        let _countdown = Countdown::start(TimerId(7), Duration::from_millis(5), tx);

        match rx.recv_timeout(Duration::from_secs(2)) {
            Ok(GameEvent::Countdown(id)) => assert_eq!(id, TimerId(7)),
            other => panic!("expected countdown event, got {other:?}"),
        }
    }

    #[test]
    fn cancel_stops_the_worker() {
        let (tx, rx) = mpsc::channel();
        let mut countdown = Countdown::start(TimerId(1), Duration::from_millis(5), tx);
        let _ = rx.recv_timeout(Duration::from_secs(2));

        countdown.cancel();
        assert!(!countdown.is_running());

        // drain whatever was in flight, then nothing more arrives
        while rx.try_recv().is_ok() {}
        assert!(rx.recv_timeout(Duration::from_millis(30)).is_err());
    }

    #[test]
    fn drop_cancels_promptly() {
        let (tx, rx) = mpsc::channel();
        let countdown = Countdown::start(TimerId(2), Duration::from_secs(60), tx);

        let before = Instant::now();
        drop(countdown);
        assert!(before.elapsed() < Duration::from_secs(5));

        // the sender went away with the worker
        assert_eq!(
            rx.recv_timeout(Duration::from_millis(50)),
            Err(RecvTimeoutError::Disconnected)
        );
    }

    #[test]
    fn cancel_twice_is_harmless() {
        let (tx, _rx) = mpsc::channel();
        let mut countdown = Countdown::start(TimerId(3), Duration::from_millis(5), tx);
        countdown.cancel();
        countdown.cancel();
        assert!(!countdown.is_running());
    }
}
