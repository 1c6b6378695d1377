use super::Shutdown;
use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// How long a blocked caller sleeps before checking the shutdown flag again. Cancelling through
/// [`BoundedQueue::cancel`] wakes everyone at once; this only bounds the delay when the shared
/// [`Shutdown`] is set by someone else.
const POLL: Duration = Duration::from_millis(50);

#[derive(Debug, PartialEq, Eq, Clone, Copy, derive_more::Display)]
pub enum QueueError {
    #[display(fmt = "queue is closed")]
    Closed,
    #[display(fmt = "run was cancelled")]
    Cancelled,
}

impl std::error::Error for QueueError {}

#[derive(Debug)]
struct State<T> {
    items: VecDeque<T>,
    closed: bool,
}

/// A FIFO with a hard capacity. `push` blocks while full and `pop` blocks while empty.
///
/// Closing lets consumers drain what is left and then see `None`. Cancelling (directly or via
/// the shared [`Shutdown`]) makes both sides give up right away, leaving items behind.
#[derive(Debug)]
pub struct BoundedQueue<T> {
    state: Mutex<State<T>>,
    not_full: Condvar,
    not_empty: Condvar,
    capacity: usize,
    shutdown: Shutdown,
}

impl<T> BoundedQueue<T> {
    pub fn new(capacity: usize, shutdown: Shutdown) -> Self {
        Self {
            state: Mutex::new(State {
                items: VecDeque::with_capacity(capacity),
                closed: false,
            }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            capacity,
            shutdown,
        }
    }

    fn lock(&self) -> MutexGuard<'_, State<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push(&self, item: T) -> Result<(), QueueError> {
        let mut state = self.lock();
        loop {
            if self.shutdown.is_cancelled() {
                return Err(QueueError::Cancelled);
            }
            if state.closed {
                return Err(QueueError::Closed);
            }
            if state.items.len() < self.capacity {
                state.items.push_back(item);
                self.not_empty.notify_one();
                return Ok(());
            }
            state = self
                .not_full
                .wait_timeout(state, POLL)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
    }

    /// The oldest item, or None once the queue is closed and drained or the run is cancelled.
    pub fn pop(&self) -> Option<T> {
        let mut state = self.lock();
        loop {
            if self.shutdown.is_cancelled() {
                return None;
            }
            if let Some(item) = state.items.pop_front() {
                self.not_full.notify_one();
                return Some(item);
            }
            if state.closed {
                return None;
            }
            state = self
                .not_empty
                .wait_timeout(state, POLL)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
    }

    /// No more pushes. Items already queued can still be popped.
    pub fn close(&self) {
        self.lock().closed = true;
        self.not_full.notify_all();
        self.not_empty.notify_all();
    }

    /// Cancel the whole run and wake every waiter.
    pub fn cancel(&self) {
        self.shutdown.cancel();
        let _state = self.lock();
        self.not_full.notify_all();
        self.not_empty.notify_all();
    }

    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }
}
