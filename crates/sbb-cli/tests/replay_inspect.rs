// crates/sbb-cli/tests/replay_inspect.rs

use std::path::Path;
use std::process::{Command, Output};

fn sbb() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sbb-cli"))
}

fn run_ok(cmd: &mut Command) -> Output {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn stdout_lines(out: &Output) -> Vec<String> {
    String::from_utf8_lossy(&out.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

fn p(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn replay_scenario_then_inspect_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let series = dir.path().join("temp.csv");
    let snap = dir.path().join("temp.sbb");
    std::fs::write(&series, "# t_ms,value\n0,10\n1001,50\n2002,90\n3003,30\n").unwrap();

    let out = run_ok(sbb().args([
        "replay",
        "--in",
        p(&series),
        "--range-min",
        "0",
        "--range-max",
        "100",
        "--interval-ms",
        "1000",
        "--sample-count",
        "4",
        "--fmt",
        "jsonl",
        "--out",
        p(&snap),
    ]));

    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], r#"{"offset":0,"code":76,"value":29.804}"#);
    assert!(lines[1].contains(r#""code":229"#), "{}", lines[1]);
    assert!(lines[2].contains(r#""code":127"#), "{}", lines[2]);
    assert!(lines[3].contains(r#""code":25"#), "{}", lines[3]);

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("committed       = 3"), "{stderr}");

    let out = run_ok(sbb().args(["inspect", "--in", p(&snap), "--raw"]));
    let lines = stdout_lines(&out);
    assert!(lines.contains(&"count        = 4".to_owned()), "{lines:?}");
    assert!(lines.contains(&"max          = 89.804".to_owned()), "{lines:?}");
    assert!(lines.contains(&"min          = 9.804".to_owned()), "{lines:?}");
    assert_eq!(&lines[lines.len() - 4..], &["[0] 76", "[1] 229", "[2] 127", "[3] 25"]);
}

#[test]
fn profile_supplies_defaults_and_flags_override() {
    let dir = tempfile::tempdir().unwrap();
    let series = dir.path().join("plain.txt");
    let profile = dir.path().join("probe.toml");
    std::fs::write(&series, "10\n20\n30\n40\n").unwrap();
    std::fs::write(
        &profile,
        "[buffer]\nrange_min = 0\nrange_max = 255\ninterval_ms = 500\nsample_count = 8\n",
    )
    .unwrap();

    let out = run_ok(sbb().args([
        "replay",
        "--in",
        p(&series),
        "--config",
        p(&profile),
        "--sample-count",
        "3",
    ]));

    let lines = stdout_lines(&out);
    assert_eq!(lines, vec!["   0  40 40.000", "   1  30 30.000", "   2  20 20.000"]);
}

#[test]
fn corrupted_snapshot_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let series = dir.path().join("s.txt");
    let snap = dir.path().join("s.sbb");
    std::fs::write(&series, "1\n2\n3\n").unwrap();

    run_ok(sbb().args([
        "replay",
        "--in",
        p(&series),
        "--range-min",
        "0",
        "--range-max",
        "10",
        "--sample-count",
        "4",
        "--out",
        p(&snap),
    ]));

    let mut bytes = std::fs::read(&snap).unwrap();
    let mid = bytes.len() / 2;
    bytes[mid] ^= 0xFF;
    std::fs::write(&snap, bytes).unwrap();

    let out = sbb().args(["inspect", "--in", p(&snap)]).output().unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("crc32"));
}

#[test]
fn degenerate_range_fails_replay() {
    let dir = tempfile::tempdir().unwrap();
    let series = dir.path().join("s.txt");
    std::fs::write(&series, "1\n").unwrap();

    let out = sbb()
        .args(["replay", "--in", p(&series), "--range-min", "5", "--range-max", "5"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("degenerate quantization range"));
}

#[test]
fn plan_sizes_a_day_over_288_samples() {
    let out = run_ok(sbb().args(["plan", "--window-min", "1440"]));
    let lines = stdout_lines(&out);
    assert!(lines.contains(&"interval_ms  = 300000".to_owned()), "{lines:?}");
}
