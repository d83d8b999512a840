use std::{fs, path::PathBuf, process::Command};

fn cli() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_elemental-defence"));
    let _ = command.env_remove("RUST_LOG");
    command
}

fn balance_file(name: &str, contents: &str) -> PathBuf {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    fs::write(&path, contents).expect("write balance file");
    path
}

#[test]
fn single_starter_wave_prints_a_summary() {
    let output = cli()
        .args(["--waves", "1", "--towers", "starter", "--seed", "11"])
        .output()
        .expect("run elemental-defence");

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("waves completed"), "{stdout}");
    assert!(stdout.contains("lives left"), "{stdout}");
    assert!(stdout.contains("kills"), "{stdout}");
}

#[test]
fn balance_overrides_are_loaded_from_toml() {
    let path = balance_file(
        "cli_run_overrides.toml",
        "[waves]\nbase_count = 1\ncount_per_wave = 0\n",
    );
    let output = cli()
        .args(["--waves", "2", "--towers", "masters", "--balance"])
        .arg(&path)
        .output()
        .expect("run elemental-defence");

    assert!(output.status.success(), "{output:?}");
}

#[test]
fn non_finite_balance_values_abort_the_run() {
    let path = balance_file("cli_run_infinite.toml", "[combat]\nsplit_jitter = inf\n");
    let output = cli()
        .args(["--waves", "1", "--balance"])
        .arg(&path)
        .output()
        .expect("run elemental-defence");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid balance file"), "{stderr}");
    assert!(stderr.contains("combat.split_jitter"), "{stderr}");
}

#[test]
fn unknown_preset_is_rejected_by_the_parser() {
    let output = cli()
        .args(["--towers", "fortress"])
        .output()
        .expect("run elemental-defence");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("fortress"));
}
