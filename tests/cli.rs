use assert_cmd::Command;
use predicates::prelude::*;

fn redstring(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("redstring").unwrap();
    cmd.env("HOME", home);
    cmd
}

fn write_cfb_csv(dir: &std::path::Path, name: &str, rows: &[(&str, &str, &str, &str)]) -> std::path::PathBuf {
    let path = dir.join(name);
    let header: Vec<String> = (0..52).map(|i| format!("COL{i}")).collect();
    let mut content = header.join(",");
    content.push('\n');
    for (refno, recipient, date, amount) in rows {
        let mut fields = vec![String::new(); 52];
        fields[4] = format!("\"{recipient}\"");
        fields[10] = refno.to_string();
        fields[11] = date.to_string();
        fields[13] = "\"DOE, JANE\"".to_string();
        fields[28] = amount.to_string();
        content.push_str(&fields.join(","));
        content.push('\n');
    }
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_help_lists_subcommands() {
    let dir = tempfile::tempdir().unwrap();
    redstring(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("individuals"))
        .stdout(predicate::str::contains("unmatched"));
}

#[test]
fn test_import_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    redstring(dir.path())
        .args(["init", "--data-dir", data_dir.to_str().unwrap()])
        .assert()
        .success();
    redstring(dir.path())
        .args(["import", "no_such_file.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_init_import_report_flow() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    redstring(dir.path())
        .args(["init", "--data-dir", data_dir.to_str().unwrap()])
        .assert()
        .success();
    redstring(dir.path())
        .args(["individuals", "add", "--first", "John", "--last", "Smith"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Smith, John"));

    let csv_path = write_cfb_csv(
        dir.path(),
        "cfb.csv",
        &[
            ("R1", "Smith, John A", "1/2/2020", "500.00"),
            ("R2", "Nobody, Known", "1/3/2020", "25.00"),
        ],
    );
    redstring(dir.path())
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 imported"));

    // Re-import is a no-op.
    redstring(dir.path())
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 imported"))
        .stdout(predicate::str::contains("2 skipped"));

    let report = std::fs::read_to_string(data_dir.join("unmatched_names.txt")).unwrap();
    assert_eq!(report, "Nobody, Known\n");

    redstring(dir.path())
        .arg("unmatched")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nobody, Known"));
}
