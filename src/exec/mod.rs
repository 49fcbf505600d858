mod reduce;
mod worker;

pub use reduce::reduce_averages;
pub use worker::Worker;

use std::thread;
use std::time::Instant;

use log::{debug, info};

use crate::config::RunConfig;
use crate::data::Partition;
use crate::metrics::RunMetrics;

/// What a finished run leaves behind, besides the updated `Y`.
#[derive(Debug)]
pub struct RunOutcome {
    /// Per-iteration arithmetic mean of `Y`, in iteration order.
    pub averages: Vec<f64>,
    /// Each worker's running grand total, in chunk-id order.
    pub worker_totals: Vec<f64>,
    /// Wall-clock timings of the run.
    pub metrics: RunMetrics,
}

/// Runs the full iterative update over `y` in place.
///
/// Carves `x` and `y` into one disjoint chunk per worker, spawns one OS
/// thread per chunk, joins them all and folds the per-iteration partial sums
/// into the global averages. The join is the only synchronization point
/// between workers; the reduction runs after it, single-threaded. The
/// reported time covers the parallel phase plus the reduction, nothing else.
///
/// A worker panic is not recoverable: the join re-raises it.
///
/// # Arguments
/// * `cfg` - Execution bounds (thread count, iteration count).
/// * `x` - The read-only input vector.
/// * `y` - The updated vector; must have the same length as `x`.
/// * `a` - The scalar coefficient.
pub fn execute(cfg: &RunConfig, x: &[f64], y: &mut [f64], a: f64) -> RunOutcome {
    assert_eq!(x.len(), y.len(), "input vectors must have the same length");

    let partition = Partition::new(y.len(), cfg.n_threads());
    let max_iters = cfg.max_iters();

    info!(
        "spawning {} workers over {} elements for {} iterations",
        partition.n_chunks(),
        y.len(),
        max_iters
    );

    let started = Instant::now();

    let workers: Vec<Worker> = thread::scope(|s| {
        let handles: Vec<_> = partition
            .split(x)
            .into_iter()
            .zip(partition.split_mut(y))
            .enumerate()
            .map(|(id, (x_chunk, y_chunk))| {
                s.spawn(move || Worker::new(id, max_iters).run(x_chunk, y_chunk, a))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    });

    let averages = reduce_averages(&workers, y.len());

    let metrics = RunMetrics {
        compute_time: started.elapsed(),
    };

    let worker_totals: Vec<f64> = workers.iter().map(Worker::total).collect();
    for worker in &workers {
        debug!("worker {} grand total {}", worker.id(), worker.total());
    }

    info!("run finished in {:.3} ms", metrics.compute_millis());

    RunOutcome {
        averages,
        worker_totals,
        metrics,
    }
}
