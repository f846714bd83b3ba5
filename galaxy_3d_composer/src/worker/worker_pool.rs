/// Worker pool - a resizable set of long-lived helper threads.
///
/// Workers pull boxed jobs from a shared crossbeam channel. Resizing joins
/// every worker then spawns the requested number of fresh ones; dropping
/// the pool joins every worker.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use crossbeam_channel::{Receiver, Sender};
use crate::error::Result;
use crate::{engine_err, engine_error, engine_info, engine_warn};

/// Unit of work run on a worker thread
pub type Job = Box<dyn FnOnce() + Send + 'static>;

struct Worker {
    id: usize,
    handle: Option<thread::JoinHandle<()>>,
}

/// Decrements the live counter when the worker thread exits
struct LiveGuard(Arc<AtomicUsize>);

impl Drop for LiveGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct WorkerPool {
    workers: Vec<Worker>,
    sender: Option<Sender<Job>>,
    live: Arc<AtomicUsize>,
}

impl WorkerPool {
    /// Create a pool without workers
    pub fn new() -> Self {
        Self {
            workers: Vec::new(),
            sender: None,
            live: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Replace every worker with `count` fresh idle workers
    ///
    /// Blocks until the current workers finished their queued jobs and
    /// exited. A count of 0 leaves the pool empty.
    ///
    /// # Errors
    ///
    /// Returns `InitializationFailed` if the OS refuses to spawn a thread.
    /// Workers spawned before the failure are joined again and the pool
    /// is left empty.
    pub fn set_worker_count(&mut self, count: usize) -> Result<()> {
        self.shutdown();

        if count == 0 {
            engine_info!("galaxy3d::WorkerPool", "Worker pool emptied");
            return Ok(());
        }

        let (sender, receiver) = crossbeam_channel::unbounded::<Job>();
        let mut workers = Vec::with_capacity(count);

        for id in 0..count {
            match self.spawn_worker(id, receiver.clone()) {
                Ok(worker) => workers.push(worker),
                Err(e) => {
                    drop(sender);
                    Self::join_all(&mut workers);
                    return Err(e);
                }
            }
        }

        self.workers = workers;
        self.sender = Some(sender);
        engine_info!("galaxy3d::WorkerPool", "Worker pool resized to {} workers", count);
        Ok(())
    }

    fn spawn_worker(&self, id: usize, receiver: Receiver<Job>) -> Result<Worker> {
        let live = self.live.clone();
        live.fetch_add(1, Ordering::SeqCst);
        let guard = LiveGuard(live);

        let handle = thread::Builder::new()
            .name(format!("galaxy3d-worker-{}", id))
            .spawn(move || {
                let _guard = guard;
                while let Ok(job) = receiver.recv() {
                    if panic::catch_unwind(AssertUnwindSafe(job)).is_err() {
                        engine_error!("galaxy3d::WorkerPool", "Job panicked on worker {}", id);
                    }
                }
            })
            .map_err(|e| {
                // The closure (and its guard) is dropped on failure
                engine_err!(InitializationFailed => "galaxy3d::WorkerPool",
                    "failed to spawn worker {}: {}", id, e)
            })?;

        Ok(Worker { id, handle: Some(handle) })
    }

    /// Queue a job for the next idle worker
    ///
    /// # Errors
    ///
    /// `InvalidState` when the pool has no workers.
    pub fn execute<F>(&self, job: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let sender = self.sender.as_ref().ok_or_else(|| {
            engine_err!(InvalidState => "galaxy3d::WorkerPool", "worker pool has no workers")
        })?;
        sender
            .send(Box::new(job))
            .map_err(|_| engine_err!("galaxy3d::WorkerPool", "worker channel closed"))
    }

    /// Number of workers owned by the pool
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Number of worker threads currently running
    pub fn live_workers(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Close the job channel and join every worker
    pub fn shutdown(&mut self) {
        self.sender = None;
        Self::join_all(&mut self.workers);
    }

    fn join_all(workers: &mut Vec<Worker>) {
        for worker in workers.iter_mut() {
            if let Some(handle) = worker.handle.take() {
                if handle.join().is_err() {
                    engine_warn!("galaxy3d::WorkerPool", "Worker {} exited abnormally", worker.id);
                }
            }
        }
        workers.clear();
    }
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
#[path = "worker_pool_tests.rs"]
mod tests;
