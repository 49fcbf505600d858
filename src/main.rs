use std::{env, process};

use log::debug;

use saxpy::{cli, data, exec, report};

fn main() {
    env_logger::init();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "saxpy".to_string());

    let cfg = match cli::parse_args(args) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Usage: {program} {}", cli::USAGE);
            process::exit(1);
        }
    };

    println!(
        "p = {}, seed = {}, n_threads = {}, max_iters = {}",
        cfg.vector_len(),
        cfg.seed(),
        cfg.n_threads(),
        cfg.max_iters()
    );

    let mut inputs = data::seeded_inputs(cfg.seed(), cfg.vector_len());
    report::debug_dump("vector X", &inputs.x);
    report::debug_dump("vector Y", &inputs.y);
    debug!("a = {}", inputs.a);

    let a = inputs.a;
    let outcome = exec::execute(&cfg, &inputs.x, &mut inputs.y, a);

    report::debug_dump("final vector Y", &inputs.y);
    report::debug_dump("vector Y_avgs", &outcome.averages);

    report::print_summary(&inputs.y, &outcome);
}
