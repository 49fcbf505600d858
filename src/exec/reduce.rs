use super::Worker;

/// Folds the workers' per-iteration partial sums into global averages.
///
/// Runs strictly after the join, single-threaded. For each iteration the
/// partial sums are added in worker-id order and divided by `vector_len`,
/// giving the arithmetic mean of `Y` as it stood after that iteration.
/// Workers with empty chunks contribute zero.
///
/// # Arguments
/// * `workers` - The joined workers, in chunk-id order.
/// * `vector_len` - Total number of elements across all chunks.
pub fn reduce_averages(workers: &[Worker], vector_len: usize) -> Vec<f64> {
    let max_iters = workers.first().map_or(0, |w| w.local_avgs().len());

    let mut averages = vec![0.0; max_iters];
    for (it, avg) in averages.iter_mut().enumerate() {
        for worker in workers {
            *avg += worker.local_avgs()[it];
        }
        *avg /= vector_len as f64;
    }
    averages
}
