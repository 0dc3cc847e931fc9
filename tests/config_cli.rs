use predicates::str::{contains, diff};
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

fn write_temp_config(name: &str, contents: &str, extension: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time should be available")
        .as_nanos();
    path.push(format!("queue-sim-{}-{}.{}", name, nanos, extension));
    fs::write(&path, contents).expect("config write should succeed");
    path
}

const YAML: &str = r#"
duration: 12
seed: 1
queues:
  - id: a
    servers: 1
    capacity: 2
    min_arrival: 1
    max_arrival: 2
    min_service: 2
    max_service: 4
  - id: b
    servers: 1
    capacity: 1
    min_arrival: 1
    max_arrival: 2
    min_service: 3
    max_service: 5
topology:
  - from: a
    to: b
arrivals:
  - queue_id: a
    time: 1
"#;

#[test]
fn yaml_model_runs() {
    let path = write_temp_config("yaml", YAML, "yml");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args([
        "run",
        "--config",
        path.to_str().unwrap(),
        "--format",
        "summary",
    ]);
    cmd.assert()
        .success()
        .stdout(contains("elapsed: 11.2911\n"))
        .stdout(contains("  1: 4.4190 (39.14%)\n  clients lost: 1\n"));
}

#[test]
fn json_model_with_numeric_ids_runs() {
    let config = r#"{
        "duration": 20,
        "seed": 5,
        "queues": [
            { "id": 1, "servers": 2, "capacity": 3, "min_arrival": 1, "max_arrival": 3,
              "min_service": 2, "max_service": 6 }
        ],
        "arrivals": [ { "queue_id": 1, "time": 0 } ]
    }"#;
    let path = write_temp_config("json-model", config, "json");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args(["run", "--config", path.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(contains("0 - 1 arrival 0.0000\n"))
        .stdout(contains("Queue 1 (servers: 2, capacity: 3)\n"));
}

#[test]
fn show_config_prints_merged_configuration() {
    let path = write_temp_config("show", YAML, "yaml");
    let expected = concat!(
        "Duration: 30\n",
        "Seed: 9\n",
        "Queues:\n",
        "- a (servers: 1, capacity: 2, arrival: 1..2, service: 2..4)\n",
        "- b (servers: 1, capacity: 1, arrival: 1..2, service: 3..5)\n",
        "Topology:\n",
        "- a -> b\n",
        "Arrivals:\n",
        "- a at 1\n",
    );

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args([
        "show-config",
        "--config",
        path.to_str().unwrap(),
        "--seed",
        "9",
        "--duration",
        "30",
    ]);
    cmd.assert().success().stdout(diff(expected));
}

#[test]
fn show_config_reports_random_seed_when_absent() {
    let config = YAML.replace("seed: 1\n", "");
    let path = write_temp_config("no-seed", &config, "yaml");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args(["show-config", "--config", path.to_str().unwrap()]);
    cmd.assert().success().stdout(contains("Seed: random\n"));
}

#[test]
fn validate_accepts_good_model() {
    let path = write_temp_config("validate", YAML, "yaml");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args(["validate", "--config", path.to_str().unwrap()]);
    cmd.assert().success().stdout(diff("ok\n"));
}

#[test]
fn duration_override_shortens_run() {
    let path = write_temp_config("override", YAML, "yaml");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args([
        "run",
        "--config",
        path.to_str().unwrap(),
        "--duration",
        "3",
    ]);
    cmd.assert()
        .success()
        .stdout(contains("processed_events: 2\n"))
        .stdout(contains("1 - a arrival 2.8642\n"));
}

#[test]
fn negative_seed_is_accepted() {
    let config = YAML.replace("seed: 1\n", "seed: -3\n");
    let path = write_temp_config("negative-seed", &config, "yaml");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args([
        "run",
        "--config",
        path.to_str().unwrap(),
        "--format",
        "summary",
    ]);
    cmd.assert().success().stdout(contains("seed: -3\n"));

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args(["show-config", "--config", path.to_str().unwrap(), "--seed", "-7"]);
    cmd.assert().success().stdout(contains("Seed: -7\n"));
}
