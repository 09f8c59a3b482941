//! Trailing-edge debouncing.
//!
//! A [`Debouncer`] holds a committed value that readers watch. Pushing a new
//! value starts a timer; pushing again before it fires cancels that timer and
//! starts a fresh one. Only a value that survives a full quiet period is
//! committed.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

pub struct Debouncer<T> {
    delay: Duration,
    committed: Arc<watch::Sender<T>>,
    /// Token of the timer that may still commit. Commits happen under this
    /// lock, so a cancelled timer can never commit.
    pending: Arc<Mutex<Option<CancellationToken>>>,
}

fn lock(pending: &Mutex<Option<CancellationToken>>) -> MutexGuard<'_, Option<CancellationToken>> {
    pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<T: Send + Sync + 'static> Debouncer<T> {
    pub fn new(initial: T, delay: Duration) -> Self {
        let (committed, _) = watch::channel(initial);
        Self {
            delay,
            committed: Arc::new(committed),
            pending: Arc::new(Mutex::new(None)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `value` to be committed after the quiet period, replacing
    /// whatever was scheduled before.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn push(&self, value: T) {
        let token = CancellationToken::new();
        if let Some(previous) = lock(&self.pending).replace(token.clone()) {
            previous.cancel();
        }
        let delay = self.delay;
        let committed = Arc::clone(&self.committed);
        let pending = Arc::clone(&self.pending);
        tokio::spawn(async move {
            tokio::select! {
                () = token.cancelled() => {
                    tracing::trace!("debounced value superseded");
                },
                () = tokio::time::sleep(delay) => {
                    let mut guard = lock(&pending);
                    if !token.is_cancelled() {
                        committed.send_replace(value);
                        *guard = None;
                    }
                },
            }
        });
    }

    /// Cancels anything scheduled and commits `value` straight away.
    pub fn commit_now(&self, value: T) {
        let mut guard = lock(&self.pending);
        if let Some(previous) = guard.take() {
            previous.cancel();
        }
        self.committed.send_replace(value);
    }

    /// Drops whatever is scheduled without committing it.
    pub fn cancel(&self) {
        if let Some(previous) = lock(&self.pending).take() {
            previous.cancel();
        }
    }

    /// `true` while a pushed value is waiting out its quiet period.
    pub fn is_pending(&self) -> bool {
        lock(&self.pending).is_some()
    }

    /// Receiver that is notified on every commit.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.committed.subscribe()
    }
}

impl<T: Clone> Debouncer<T> {
    /// The most recently committed value.
    pub fn current(&self) -> T {
        self.committed.borrow().clone()
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(previous) = lock(&self.pending).take() {
            previous.cancel();
        }
    }
}
