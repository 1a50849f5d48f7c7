//! Cross-thread frame-boundary task hand-off.
//!
//! Input-thread code must not mutate engine-owned state directly once the
//! render thread has taken ownership. Instead it wraps the mutation as a
//! one-shot task and submits it here; the render thread drains the queue
//! exactly once per frame, applying every pending task in submission
//! order against the live engine value.
//!
//! A task is not guaranteed to run on any particular frame, only "no
//! later than the next frame boundary after submission, assuming the
//! render loop keeps ticking". If the render loop stops, pending tasks
//! simply never execute; that is an accepted terminal condition, not an
//! error. Tasks submitted before the engine exists sit in the queue
//! until the first drain.

use std::sync::Mutex;

/// One-shot mutation of engine state, run on the consumer thread.
pub type FrameTask<E> = Box<dyn FnOnce(&mut E) + Send>;

/// Thread-safe single-shot task list drained at frame boundaries.
///
/// Producers [`submit`](Self::submit) from any thread; the consumer
/// (render) thread calls [`run`](Self::run) once per frame with the
/// engine it owns. The lock is held only to push and to swap the pending
/// list out; tasks execute outside it, so a task may itself submit
/// follow-up work (which lands on the next frame).
///
/// Typically shared as `Arc<FrameTaskQueue<Engine>>`, with the producer
/// side holding a clone while the render thread owns the engine value.
pub struct FrameTaskQueue<E> {
    pending: Mutex<Vec<FrameTask<E>>>,
}

impl<E> Default for FrameTaskQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> FrameTaskQueue<E> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Append a task to the pending list. Callable from any thread.
    pub fn submit<F>(&self, task: F)
    where
        F: FnOnce(&mut E) + Send + 'static,
    {
        self.lock_pending().push(Box::new(task));
    }

    /// Execute every pending task in FIFO order against `engine`, then
    /// leave the queue empty.
    ///
    /// Called exactly once per frame by the consumer thread. Tasks
    /// submitted concurrently while a drain is in progress are kept for
    /// the next drain, never lost or run twice.
    pub fn run(&self, engine: &mut E) {
        let drained = std::mem::take(&mut *self.lock_pending());
        if drained.is_empty() {
            return;
        }
        log::trace!("draining {} frame task(s)", drained.len());
        for task in drained {
            task(engine);
        }
    }

    /// Number of tasks waiting for the next drain.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.lock_pending().len()
    }

    /// Whether no tasks are waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending_len() == 0
    }

    /// A panicked task leaves the list intact, so recover the guard
    /// rather than poisoning the queue forever.
    fn lock_pending(
        &self,
    ) -> std::sync::MutexGuard<'_, Vec<FrameTask<E>>> {
        match self.pending.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
