use graphkit::config::{AlgoConfig, RelaxPriority};
use tempfile::tempdir;

#[test]
fn test_settings_round_trip_through_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graphkit.toml");

    let mut config = AlgoConfig::default();
    config.graph.vertex_capacity = Some(4);
    config.dijkstra.relax_priority = RelaxPriority::Distance;
    config.save(&path).unwrap();

    let loaded = AlgoConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_settings_drive_graph_and_dijkstra() {
    let config = AlgoConfig::from_toml_str(
        r#"
[graph]
vertex_capacity = 4

[dijkstra]
relax_priority = "distance"
"#,
    )
    .unwrap();

    let mut graph = config.new_graph();
    assert_eq!(graph.capacity(), Some(4));
    for (u, v, w) in [(0, 1, 2.0), (0, 3, 3.0), (1, 2, 2.0), (3, 2, 0.5)] {
        graph.add_edge(u, v, w).unwrap();
    }
    assert_eq!(config.dijkstra(&graph, 0).unwrap(), vec![0.0, 2.0, 3.5, 3.0]);
}

#[test]
fn test_missing_settings_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = AlgoConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert_eq!(err.error_type(), "io_error");
    assert_eq!(err.to_json()["error"]["type"], "io_error");
}
