//! u-anneal-tsp: parallel simulated annealing for TSP coordinate files.
//!
//! ```text
//! u-anneal-tsp <INPUT> <DEST> [OPTIONS]
//! ```
//!
//! Prints the initial tour cost, the search duration and the best cost
//! found; writes one trajectory file per worker into `<DEST>`.

use std::fs;
use std::time::Instant;

use clap::Parser;
use tracing::warn;
use u_anneal_tsp::cli::Cli;
use u_anneal_tsp::io::{load_cost_matrix, FileSink, ResultSink};
use u_anneal_tsp::logging::init_tracing;
use u_anneal_tsp::parallel::ParallelCoordinator;
use u_anneal_tsp::random::rng_from;
use u_anneal_tsp::tour::random_permutation;
use u_anneal_tsp::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.into())?;

    let config = cli.parallel_config();
    config.validate()?;
    let matrix = load_cost_matrix(&cli.input)?;

    if let Err(err) = fs::create_dir_all(&cli.dest) {
        warn!(dest = %cli.dest.display(), error = %err, "cannot create output directory");
    }
    let sink = FileSink::new(&cli.dest);

    let start = random_permutation(matrix.len(), &mut rng_from(cli.seed));
    println!();
    println!("Initial cost: {}", start.cost(&matrix));

    let timer = Instant::now();
    let result = ParallelCoordinator::new(config).run(&matrix, start, &sink)?;
    println!("Duration: {}ms", timer.elapsed().as_millis());
    println!("Best cost: {}", result.best_cost);

    if cli.save_best {
        let title = cli.input.display().to_string();
        if let Err(err) = sink.record_best(&title, &result.best, result.best_cost) {
            warn!(error = %err, "failed to save best tour");
        }
    }
    Ok(())
}
