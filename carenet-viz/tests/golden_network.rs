use std::fs;

use carenet_core::NetworkData;
use carenet_viz::GraphSpec;
use serde_json::Value;

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn support_network_matches_golden_graph() {
    let raw = fs::read_to_string(fixture_path("support_network.json"))
        .expect("fixture payload should be readable");
    let network: NetworkData =
        serde_json::from_str(&raw).expect("fixture payload should deserialize");

    let spec = GraphSpec::from_network(&network);
    let actual = serde_json::to_value(&spec).expect("graph spec should serialize");

    let expected = fs::read_to_string(fixture_path("support_network_graph.json"))
        .expect("golden graph should be readable");
    let expected: Value = serde_json::from_str(&expected).expect("golden graph should parse");

    assert_eq!(actual, expected);
}

#[test]
fn edge_with_unknown_endpoint_is_dropped_not_forwarded() {
    let raw = fs::read_to_string(fixture_path("support_network.json"))
        .expect("fixture payload should be readable");
    let network: NetworkData =
        serde_json::from_str(&raw).expect("fixture payload should deserialize");

    let spec = GraphSpec::from_network(&network);

    assert_eq!(spec.dropped_edges, 1);
    assert!(spec
        .links
        .iter()
        .all(|link| link.target != "org_99" && link.source != "org_99"));
}
