use log::trace;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Cancellable one-shot timer backing the spin delay.
///
/// The worker sleeps on a channel instead of `thread::sleep`, so dropping
/// the timer wakes it immediately and the elapsed signal is never delivered
/// after the owner is gone.
pub struct SpinTimer {
    elapsed: Receiver<()>,
    cancel: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl SpinTimer {
    pub fn start(delay: Duration) -> Self {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let (elapsed_tx, elapsed_rx) = mpsc::channel();

        let worker = thread::spawn(move || match cancel_rx.recv_timeout(delay) {
            Err(RecvTimeoutError::Timeout) => {
                // Owner may have stopped listening; that's fine.
                let _ = elapsed_tx.send(());
            }
            _ => trace!("spin timer cancelled"),
        });

        Self {
            elapsed: elapsed_rx,
            cancel: Some(cancel_tx),
            worker: Some(worker),
        }
    }

    /// Non-blocking poll. Once this returns true the timer stays elapsed.
    pub fn is_elapsed(&self) -> bool {
        match self.elapsed.try_recv() {
            Ok(()) | Err(TryRecvError::Disconnected) => true,
            Err(TryRecvError::Empty) => false,
        }
    }

    /// Block until the delay elapses.
    pub fn wait(&self) {
        let _ = self.elapsed.recv();
    }
}

impl Drop for SpinTimer {
    fn drop(&mut self) {
        // Dropping the cancel sender wakes the worker out of recv_timeout.
        drop(self.cancel.take());

        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
