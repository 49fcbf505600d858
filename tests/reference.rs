use std::num::NonZeroUsize;

use saxpy::{RunConfig, execute, seeded_inputs};

fn config(p: usize, seed: u64, n: usize, iters: usize) -> RunConfig {
    RunConfig::new(
        p,
        seed,
        NonZeroUsize::new(n).unwrap(),
        NonZeroUsize::new(iters).unwrap(),
    )
}

/// Sequentially replays the update and returns the per-iteration means,
/// summed left to right over the whole vector.
fn sequential_means(x: &[f64], y: &mut [f64], a: f64, iters: usize) -> Vec<f64> {
    let mut means = Vec::with_capacity(iters);
    for _ in 0..iters {
        for (yi, xi) in y.iter_mut().zip(x) {
            *yi += a * *xi;
        }
        means.push(y.iter().sum::<f64>() / y.len() as f64);
    }
    means
}

#[test]
fn averages_match_independent_recomputation() {
    let cfg = config(512, 11, 3, 16);
    let mut inputs = seeded_inputs(cfg.seed(), cfg.vector_len());
    let a = inputs.a;

    let mut y_ref = inputs.y.clone();
    let means = sequential_means(&inputs.x, &mut y_ref, a, cfg.max_iters());

    let outcome = execute(&cfg, &inputs.x, &mut inputs.y, a);

    assert_eq!(inputs.y, y_ref);
    for (it, (got, want)) in outcome.averages.iter().zip(&means).enumerate() {
        let scale = want.abs().max(1.0);
        assert!(
            (got - want).abs() <= 1e-12 * scale,
            "iteration {it}: {got} vs {want}"
        );
    }
}

#[test]
fn four_elements_two_workers_one_iteration() {
    let cfg = config(4, 42, 2, 1);
    let mut inputs = seeded_inputs(cfg.seed(), cfg.vector_len());
    let (x0, y0, a) = (inputs.x.clone(), inputs.y.clone(), inputs.a);

    let outcome = execute(&cfg, &inputs.x, &mut inputs.y, a);

    for i in 0..4 {
        assert_eq!(inputs.y[i], y0[i] + a * x0[i], "element {i}");
    }

    // The reduction adds the two chunk sums and divides by the length;
    // mirror that grouping exactly.
    let front = inputs.y[0] + inputs.y[1];
    let back = inputs.y[2] + inputs.y[3];
    assert_eq!(outcome.averages, vec![(front + back) / 4.0]);
}

#[test]
fn mid_size_run_matches_single_threaded_reference() {
    let wide = config(10_000, 3, 8, 100);
    let mut wide_inputs = seeded_inputs(wide.seed(), wide.vector_len());
    let a = wide_inputs.a;
    let outcome = execute(&wide, &wide_inputs.x, &mut wide_inputs.y, a);

    assert!(outcome.metrics.compute_millis() >= 0.0);

    let narrow = config(10_000, 3, 1, 100);
    let mut narrow_inputs = seeded_inputs(narrow.seed(), narrow.vector_len());
    let a = narrow_inputs.a;
    execute(&narrow, &narrow_inputs.x, &mut narrow_inputs.y, a);

    // Bit-identical everywhere, the tail included.
    assert_eq!(wide_inputs.y, narrow_inputs.y);
    assert_eq!(wide_inputs.y[10_000 - 3..], narrow_inputs.y[10_000 - 3..]);
}
