//! Integration tests for u-anneal-tsp.

use std::fs;
use std::io::Write;

use u_anneal_tsp::cost::{CostMatrix, Point};
use u_anneal_tsp::io::{load_cost_matrix, FileSink, MemorySink, ResultSink};
use u_anneal_tsp::parallel::{ParallelConfig, ParallelCoordinator};
use u_anneal_tsp::random::create_rng;
use u_anneal_tsp::tour::{random_permutation, Tour};
use u_anneal_tsp::Error;

fn write_instance(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn quick_config() -> ParallelConfig {
    ParallelConfig::default()
        .with_cooling_factors(vec![0.995, 0.996, 0.997, 0.998])
        .with_seed(2024)
}

mod end_to_end {
    use super::*;

    const SQUARE: &str = "NAME: square\n\
        TYPE: TSP\n\
        DIMENSION: 4\n\
        NODE_COORD_SECTION\n\
        1 0 0\n\
        2 0 1\n\
        3 1 1\n\
        4 1 0\n\
        EOF\n";

    #[test]
    fn test_square_file_to_trajectory_files() {
        let input = write_instance(SQUARE);
        let out = tempfile::tempdir().unwrap();

        let matrix = load_cost_matrix(input.path()).unwrap();
        let start = Tour::new(vec![0, 2, 1, 3]).unwrap();
        let sink = FileSink::new(out.path());
        let result = ParallelCoordinator::new(quick_config())
            .run(&matrix, start, &sink)
            .unwrap();

        assert_eq!(result.best_cost, 4.0);
        for worker in 0..4 {
            let text = fs::read_to_string(out.path().join(format!("thread{worker}.txt"))).unwrap();
            let lines: Vec<&str> = text.lines().collect();
            assert_eq!(lines.len(), result.workers[worker].iterations);
            for (i, line) in lines.iter().enumerate() {
                let fields: Vec<f64> = line
                    .split(' ')
                    .map(|f| f.parse::<f64>().unwrap())
                    .collect();
                assert_eq!(fields.len(), 2);
                assert_eq!(fields[0], (i + 1) as f64);
                assert!(fields[1] >= 4.0);
            }
        }

        sink.record_best("square", &result.best, result.best_cost).unwrap();
        let best = fs::read_to_string(sink.best_path()).unwrap();
        assert!(best.starts_with("square\n4\n"));
    }

    #[test]
    fn test_empty_section_never_starts_search() {
        let input = write_instance("NAME: empty\nNODE_COORD_SECTION\nEOF\n");
        assert!(matches!(load_cost_matrix(input.path()), Err(Error::EmptyInput)));

        let empty = CostMatrix::default();
        let sink = MemorySink::new();
        let err = ParallelCoordinator::new(quick_config())
            .run(&empty, Tour::identity(0), &sink)
            .unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
        assert!(sink.runs().is_empty());
    }

    #[test]
    fn test_malformed_lines_do_not_abort_loading() {
        let input = write_instance("NODE_COORD_SECTION\n1 0 0\n2 zero one\n3 0 1\n4 1 1\n5 1 0\nEOF\n");
        let matrix = load_cost_matrix(input.path()).unwrap();
        assert_eq!(matrix.len(), 4);
        let result = ParallelCoordinator::new(quick_config())
            .run(&matrix, Tour::identity(4), &MemorySink::new())
            .unwrap();
        assert_eq!(result.best_cost, 4.0);
    }
}

mod search_quality {
    use super::*;

    fn circle(n: usize, radius: f64) -> Vec<Point> {
        (0..n)
            .map(|i| {
                let a = i as f64 * std::f64::consts::TAU / n as f64;
                Point::new(i as i64, radius * a.cos(), radius * a.sin())
            })
            .collect()
    }

    #[test]
    fn test_circle_close_to_optimal() {
        let n = 16;
        let points = circle(n, 100.0);
        let matrix = CostMatrix::from_points(&points).unwrap();
        let optimal = Tour::identity(n).cost(&matrix);
        let start = random_permutation(n, &mut create_rng(77));
        let start_cost = start.cost(&matrix);

        let result = ParallelCoordinator::new(ParallelConfig::default().with_seed(77))
            .run(&matrix, start, &MemorySink::new())
            .unwrap();

        assert!(result.best_cost < start_cost);
        assert!(result.best_cost >= optimal - 1e-9);
        assert!(
            result.best_cost < optimal * 1.5,
            "best {} vs optimal {optimal}",
            result.best_cost
        );
    }

    #[test]
    fn test_uniform_instance_reports_size() {
        let n = 9;
        let rows = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 0.0 } else { 1.0 }).collect())
            .collect();
        let matrix = CostMatrix::from_rows(rows).unwrap();
        let start = random_permutation(n, &mut create_rng(1));
        let result = ParallelCoordinator::new(quick_config())
            .run(&matrix, start, &MemorySink::new())
            .unwrap();
        assert_eq!(result.best_cost, n as f64);
        assert_eq!(result.improvements, vec![n as f64]);
    }
}

mod sinks {
    use super::*;
    use u_anneal_tsp::anneal::RunMetrics;

    struct FailingSink;

    impl ResultSink for FailingSink {
        fn record_run(&self, _worker: usize, _metrics: &RunMetrics) -> u_anneal_tsp::Result<()> {
            Err(Error::invalid_input("sink unavailable"))
        }
    }

    #[test]
    fn test_sink_failure_does_not_abort_search() {
        let points = [
            Point::new(1, 0.0, 0.0),
            Point::new(2, 3.0, 0.0),
            Point::new(3, 3.0, 4.0),
        ];
        let matrix = CostMatrix::from_points(&points).unwrap();
        let result = ParallelCoordinator::new(quick_config())
            .run(&matrix, Tour::identity(3), &FailingSink)
            .unwrap();
        assert!((result.best_cost - 12.0).abs() < 1e-9);
        assert_eq!(result.workers.len(), 4);
    }
}
