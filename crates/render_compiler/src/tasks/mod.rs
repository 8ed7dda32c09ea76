//! Task fan-out and join
//!
//! The compiler fans each render pass out as an independent unit of work
//! and joins once on the whole batch. Rather than reaching for a global
//! scheduler, the submission-and-join capability is injected as a trait so
//! that tests can run the batch serially, or in an adversarial order, and
//! production code can share one worker pool across frames.

use thiserror::Error;

/// One independent unit of work
///
/// Tasks borrow from the frame being compiled, so they carry the scope
/// lifetime of the compilation call.
pub type Task<'scope> = Box<dyn FnOnce() + Send + 'scope>;

/// A work-submission and join capability
///
/// `process_tasks` returns only once every submitted task has run; that
/// single join is the only suspension point in the compiler. There is no
/// cancellation or timeout: per-pass work is bounded and CPU-only, so a
/// stalled task stalling the frame is an accepted tradeoff.
pub trait TaskScheduler {
    /// Run the batch of tasks and block until all of them complete
    fn process_tasks<'scope>(&self, tasks: Vec<Task<'scope>>);
}

/// Error building a worker pool
#[derive(Error, Debug)]
pub enum SchedulerError {
    /// The underlying thread pool could not be constructed
    #[error("Failed to build worker thread pool: {0}")]
    ThreadPoolBuild(#[from] rayon::ThreadPoolBuildError),
}

/// A shared worker pool executing task batches in parallel
///
/// Completion order across tasks is nondeterministic; callers must not
/// depend on it. The compiler's output is ordered by list index, which is
/// assigned before any task starts, so this nondeterminism never leaks.
pub struct WorkerPool {
    pool: rayon::ThreadPool,
}

impl WorkerPool {
    /// Create a pool with one worker per available core
    pub fn new() -> Result<Self, SchedulerError> {
        Self::from_num_threads(None)
    }

    /// Create a pool with an explicit worker count
    ///
    /// `None` defers to the default thread count for the machine.
    pub fn from_num_threads(num_threads: Option<usize>) -> Result<Self, SchedulerError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads.unwrap_or(0))
            .thread_name(|index| format!("render-compile-{index}"))
            .build()?;
        log::info!(
            "Created render compile worker pool with {} threads",
            pool.current_num_threads()
        );
        Ok(Self { pool })
    }

    /// Number of worker threads in the pool
    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl TaskScheduler for WorkerPool {
    fn process_tasks<'scope>(&self, tasks: Vec<Task<'scope>>) {
        self.pool.scope(|scope| {
            for task in tasks {
                scope.spawn(move |_| task());
            }
        });
    }
}

/// Runs every task on the calling thread, in submission order
///
/// Useful for deterministic tests and for platforms where spinning up a
/// pool is not worth it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerialScheduler;

impl TaskScheduler for SerialScheduler {
    fn process_tasks<'scope>(&self, tasks: Vec<Task<'scope>>) {
        for task in tasks {
            task();
        }
    }
}

/// Runs every task on the calling thread, in reverse submission order
///
/// Exists to prove in tests that compiled output is independent of task
/// completion order.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReversedScheduler;

impl TaskScheduler for ReversedScheduler {
    fn process_tasks<'scope>(&self, tasks: Vec<Task<'scope>>) {
        for task in tasks.into_iter().rev() {
            task();
        }
    }
}
