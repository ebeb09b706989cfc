// tests/unit_config.rs
use std::fs;

use citegraph_core::config::{Config, GraphConfig, ReportConfig};
use citegraph_core::CitegraphError;

#[test]
fn test_defaults() {
    let g = GraphConfig::default();
    assert!((g.similarity_threshold - 0.35).abs() < f64::EPSILON);
    assert_eq!(g.max_out_degree, 5);

    let r = ReportConfig::default();
    assert_eq!(r.max_nodes, 15);
    assert_eq!(r.max_neighbors, 8);
    assert_eq!(r.top_components, 3);
}

#[test]
fn test_load_toml() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("citegraph.toml");
    fs::write(
        &path,
        "input = \"data/records.csv\"\n\n[graph]\nsimilarity_threshold = 0.5\n\n[query]\nsource = \"chatgpt\"\n",
    )
    .unwrap();

    let c = Config::load(Some(&path)).unwrap();
    assert!((c.graph.similarity_threshold - 0.5).abs() < f64::EPSILON);
    assert_eq!(c.graph.max_out_degree, 5);
    assert_eq!(c.query.source, "chatgpt");
    assert_eq!(c.query.target, "education");
    if std::env::var("CITEGRAPH_INPUT").is_err() {
        assert_eq!(c.input, std::path::PathBuf::from("data/records.csv"));
    }
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let d = tempfile::tempdir().unwrap();
    let err = Config::load(Some(&d.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, CitegraphError::Config { .. }));
}

#[test]
fn test_malformed_toml_is_an_error() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("citegraph.toml");
    fs::write(&path, "[graph\nmax_out_degree = ").unwrap();
    assert!(Config::load(Some(&path)).is_err());
}

#[test]
fn test_out_of_range_threshold_is_rejected_by_validate() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("citegraph.toml");
    fs::write(&path, "[graph]\nsimilarity_threshold = 2.0\n").unwrap();
    let c = Config::load(Some(&path)).unwrap();
    let err = c.validate().unwrap_err();
    assert!(err.contains("similarity_threshold"));
}

#[test]
fn test_override_after_load_repairs_threshold() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("citegraph.toml");
    fs::write(&path, "[graph]\nsimilarity_threshold = 2.0\n").unwrap();
    let mut c = Config::load(Some(&path)).unwrap();
    c.graph.similarity_threshold = 0.3;
    assert!(c.validate().is_ok());
}
