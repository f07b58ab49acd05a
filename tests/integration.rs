use std::fs;

use frame_bench::bench::{BenchConfig, dataset_filename, harness, report};
use tempfile::tempdir;

#[test]
fn test_full_run_single_size() {
    let dir = tempdir().unwrap();
    let config = BenchConfig {
        sizes: vec![100],
        output_path: dir.path().join("results.csv"),
        data_dir: dir.path().join("data"),
        ..BenchConfig::default()
    };

    let measurements = harness::run(&config).unwrap();
    let ops: Vec<&str> = measurements.iter().map(|m| m.operation.as_str()).collect();
    assert_eq!(ops, ["read", "sort", "filter", "groupby"]);

    // the dataset stays behind, named from its row count
    assert!(config.data_dir.join(dataset_filename(100)).exists());

    let content = fs::read_to_string(&config.output_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], report::HEADER);

    for (line, op) in lines[1..].iter().zip(ops) {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0], "100");
        assert_eq!(fields[1], op);

        let time: f64 = fields[2].parse().unwrap();
        assert!(time >= 0.0);
        fields[3].parse::<f64>().unwrap();
    }

    // loading 100 rows cannot plausibly add 50 MB of resident memory
    let read_memory = measurements[0].memory_mb;
    assert!(read_memory >= 0.0, "read delta was {read_memory}");
    assert!(read_memory < 50.0, "read delta was {read_memory}");
}

#[test]
fn test_report_keeps_configured_size_order() {
    let dir = tempdir().unwrap();
    let config = BenchConfig {
        sizes: vec![120, 80],
        output_path: dir.path().join("results.csv"),
        data_dir: dir.path().join("data"),
        ..BenchConfig::default()
    };

    harness::run(&config).unwrap();

    let content = fs::read_to_string(&config.output_path).unwrap();
    assert_eq!(content.lines().count(), 9);
    assert_eq!(content.matches(report::HEADER).count(), 1);

    let sizes: Vec<&str> = content
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap())
        .collect();
    assert_eq!(sizes, ["120", "120", "120", "120", "80", "80", "80", "80"]);
}
