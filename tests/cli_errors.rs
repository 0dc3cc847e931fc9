use predicates::str::contains;
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

fn model(topology: &str, servers: u32) -> String {
    format!(
        r#"
duration = 10.0
seed = 1
queues = [
  {{ id = "a", servers = {servers}, capacity = 2, min_arrival = 1.0, max_arrival = 2.0, min_service = 1.0, max_service = 2.0 }},
  {{ id = "b", servers = 1, capacity = 1, min_arrival = 1.0, max_arrival = 2.0, min_service = 1.0, max_service = 2.0 }}
]
topology = [ {topology} ]
arrivals = [ {{ queue_id = "a", time = 0.0 }} ]
"#
    )
}

#[test]
fn unknown_topology_queue_fails() {
    let config = model(r#"{ from = "a", to = "c" }"#, 1);
    let path = write_temp_config("unknown-edge", &config, "toml");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args(["run", "--config", path.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stdout("")
        .stderr(contains("Error: topology edge references unknown queue 'c'"));
}

#[test]
fn servers_above_capacity_fails() {
    let path = write_temp_config("servers", &model("", 3), "toml");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args(["validate", "--config", path.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: queue 'a' has 3 servers but capacity 2"));
}

#[test]
fn inverted_range_fails() {
    let config = model("", 1).replacen(
        "min_service = 1.0, max_service = 2.0",
        "min_service = 4.0, max_service = 2.0",
        1,
    );
    let path = write_temp_config("inverted", &config, "toml");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args(["run", "--config", path.to_str().unwrap()]);
    cmd.assert().failure().stderr(contains(
        "Error: queue 'a' has invalid service range [4, 2]: min must not exceed max",
    ));
}

#[test]
fn missing_config_file_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args(["run", "--config", "/nonexistent/model.toml"]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: failed to read config '/nonexistent/model.toml'"));
}

#[test]
fn unsupported_extension_fails() {
    let path = write_temp_config("ext", "duration = 1", "ini");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args(["run", "--config", path.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: unsupported config format 'ini'"));
}

#[test]
fn missing_subcommand_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.assert().failure().stderr(contains("Error:"));
}

#[test]
fn oversized_capacity_fails() {
    let config = model("", 1).replacen("capacity = 2", "capacity = 4294967295", 1);
    let path = write_temp_config("capacity", &config, "toml");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args(["run", "--config", path.to_str().unwrap()]);
    cmd.assert().failure().stdout("").stderr(contains(
        "Error: queue 'a' has capacity 4294967295, above the limit of 1048576",
    ));
}
