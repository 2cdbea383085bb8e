//! Reports written to disk re-hash to the digest the runner returned.

use std::fs;

use gps_harness::runner::{run_named, RunConfig};
use gps_kernel::proof::canon::canonical_json_bytes;
use gps_kernel::proof::hash::{canonical_hash, DOMAIN_SEARCH_REPORT};
use gps_search::policy::Strategy;

#[test]
fn persisted_report_rehashes_to_same_digest() {
    let run = run_named("calcudoku:2x2", &RunConfig::new(Strategy::AStar, 4)).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    fs::write(&path, &run.canonical_json).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(canonical_hash(DOMAIN_SEARCH_REPORT, &bytes), run.digest);

    // Parsing and re-canonicalizing is a fixed point.
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(canonical_json_bytes(&value).unwrap(), bytes);
    assert_eq!(value["problem_id"], "calcudoku:2x2");
    assert_eq!(value["outcome"]["type"], "solved");
    assert_eq!(value["policy"]["ordering"], "lowest_estimate");
}

#[test]
fn reports_for_different_worlds_do_not_collide() {
    let config = RunConfig::new(Strategy::Bfs, 8);
    let a = run_named("eight_puzzle:two_moves", &config).unwrap();
    let b = run_named("eight_puzzle:scrambled", &config).unwrap();
    assert_ne!(a.digest, b.digest);
    assert_eq!(a.policy_digest, b.policy_digest);
}
