use super::comparer::Comparer;
use super::config::EnumerationConfig;
use super::producer::{Producer, Tuple};
use super::queue::BoundedQueue;
use super::results::ShowdownResults;
use super::{Shutdown, ShowdownError};
use log::{error, info, warn};
use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, Scope, ScopedJoinHandle};
use std::time::{Duration, Instant};

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumerationSummary {
    pub processed: u64,
    pub expected: u64,
    pub completed: bool,
    pub producers: usize,
    pub comparers: usize,
    pub elapsed: Duration,
}

impl fmt::Display for EnumerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Permutations: {} of {}", self.processed, self.expected)?;
        writeln!(
            f,
            "Threads: {} producers, {} comparers",
            self.producers, self.comparers
        )?;
        if !self.completed {
            writeln!(f, "Stopped early")?;
        }
        write!(f, "Total time: {}ms", self.elapsed.as_millis())
    }
}

/// One exhaustive enumeration. Its [`Shutdown`] and results can be handed to other threads
/// before and while [`Enumeration::run`] goes.
#[derive(Debug)]
pub struct Enumeration {
    config: EnumerationConfig,
    results: Arc<ShowdownResults>,
    processed: Arc<AtomicU64>,
    shutdown: Shutdown,
}

impl Enumeration {
    pub fn new(config: EnumerationConfig) -> Result<Self, ShowdownError> {
        config.validate()?;
        Ok(Self {
            config,
            results: Arc::new(ShowdownResults::new()),
            processed: Arc::new(AtomicU64::new(0)),
            shutdown: Shutdown::new(),
        })
    }

    pub fn config(&self) -> &EnumerationConfig {
        &self.config
    }

    /// Cancelling this stops the run as soon as every worker notices.
    pub fn shutdown(&self) -> Shutdown {
        self.shutdown.clone()
    }

    pub fn results(&self) -> Arc<ShowdownResults> {
        Arc::clone(&self.results)
    }

    pub fn processed(&self) -> u64 {
        self.processed.load(Ordering::Relaxed)
    }

    /// Run to completion or cancellation. Returns the first worker error, if any.
    pub fn run(&self) -> Result<EnumerationSummary, ShowdownError> {
        let begin = Instant::now();
        let producers = self.config.producers();
        let comparers = self.config.comparers();
        let expected = self.config.space_size();
        info!(
            "starting {} producer threads and {} comparer threads over {} showdowns",
            producers, comparers, expected
        );
        let queue: BoundedQueue<Tuple> =
            BoundedQueue::new(self.config.queue_capacity(), self.shutdown.clone());
        let (stop, stopped) = mpsc::channel::<()>();

        let outcome = thread::scope(|s| {
            let res = self.spawn_all(s, &queue, stopped, producers, comparers);
            drop(stop);
            res
        });

        let summary = EnumerationSummary {
            processed: self.processed(),
            expected,
            completed: outcome.is_ok() && !self.shutdown.is_cancelled(),
            producers,
            comparers,
            elapsed: begin.elapsed(),
        };
        match outcome {
            Ok(()) => {
                if !summary.completed {
                    warn!("enumeration cancelled after {} showdowns", summary.processed);
                }
                Ok(summary)
            }
            Err(e) => {
                error!("enumeration failed: {}", e);
                Err(e)
            }
        }
    }

    /// Start the workers and the reporter inside `s`, then wait on them in order: producers,
    /// close the queue, comparers. The reporter is left for the scope to join once `stop` drops.
    fn spawn_all<'scope, 'env>(
        &'env self,
        s: &'scope Scope<'scope, 'env>,
        queue: &'env BoundedQueue<Tuple>,
        stopped: Receiver<()>,
        producers: usize,
        comparers: usize,
    ) -> Result<(), ShowdownError> {
        let spawn_failed = |e: std::io::Error| {
            queue.cancel();
            ShowdownError::from(e)
        };
        thread::Builder::new()
            .name("reporter".into())
            .spawn_scoped(s, move || self.report(queue, stopped))
            .map_err(spawn_failed)?;

        let mut comparer_handles: Vec<ScopedJoinHandle<'scope, Result<u64, ShowdownError>>> =
            Vec::with_capacity(comparers);
        for i in 0..comparers {
            let handle = thread::Builder::new()
                .name(format!("comparer-{}", i + 1))
                .spawn_scoped(s, move || {
                    Comparer::new(i, &self.config, queue, &self.results, &self.processed).run()
                })
                .map_err(spawn_failed)?;
            comparer_handles.push(handle);
        }
        let mut producer_handles: Vec<ScopedJoinHandle<'scope, u64>> =
            Vec::with_capacity(producers);
        for i in 0..producers {
            let handle = thread::Builder::new()
                .name(format!("producer-{}", i + 1))
                .spawn_scoped(s, move || Producer::new(i, &self.config, queue).run())
                .map_err(spawn_failed)?;
            producer_handles.push(handle);
        }

        let mut first_err: Option<ShowdownError> = None;
        for h in producer_handles {
            let name = thread_name(h.thread());
            if let Err(panic) = h.join() {
                queue.cancel();
                first_err.get_or_insert(panicked(name, panic));
            }
        }
        queue.close();
        for h in comparer_handles {
            let name = thread_name(h.thread());
            match h.join() {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => {
                    first_err.get_or_insert(e);
                }
                Err(panic) => {
                    queue.cancel();
                    first_err.get_or_insert(panicked(name, panic));
                }
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn report(&self, queue: &BoundedQueue<Tuple>, stopped: Receiver<()>) {
        loop {
            match stopped.recv_timeout(self.config.report_interval()) {
                Err(RecvTimeoutError::Timeout) => info!("{}", self.progress(queue.len())),
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    }

    /// Progress so far and every class with at least one showdown, best win rate first.
    fn progress(&self, queue_depth: usize) -> String {
        let expected = self.config.space_size().max(1);
        let processed = self.processed();
        format!(
            "processed {} of {} showdowns ({:.6}%), queue depth {}\nshowdown results:\n{}",
            processed,
            expected,
            processed as f64 * 100.0 / expected as f64,
            queue_depth,
            self.results
        )
    }
}

fn thread_name(t: &thread::Thread) -> String {
    t.name().unwrap_or("worker").to_string()
}

fn panicked(name: String, panic: Box<dyn Any + Send>) -> ShowdownError {
    let msg = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_default();
    error!("{} panicked: {}", name, msg);
    ShowdownError::WorkerPanicked(name)
}
