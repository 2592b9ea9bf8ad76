use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const CONFIRMATION: &str = "Names have been converted to lowercase in both files.\n";

fn setup(male: Option<&str>, female: Option<&str>) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    fs::create_dir(&data).unwrap();
    if let Some(text) = male {
        fs::write(data.join("male.csv"), text).unwrap();
    }
    if let Some(text) = female {
        fs::write(data.join("female.csv"), text).unwrap();
    }
    dir
}

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lowercase-names"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn rewrites_files_and_confirms() {
    let dir = setup(Some("name,age\nJohn,5\nMARY-ANNE,3\n"), Some("name,age\nAlice,30\n"));

    let out = run_in(dir.path());

    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), CONFIRMATION);
    assert_eq!(
        fs::read_to_string(dir.path().join("data/male.csv")).unwrap(),
        "name,age\njohn,5\nmary-anne,3\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("data/female.csv")).unwrap(),
        "name,age\nalice,30\n"
    );
}

#[test]
fn missing_input_fails_without_confirmation() {
    let male = "name,age\nJohn,5\n";
    let dir = setup(Some(male), None);

    let out = run_in(dir.path());

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("file not found"));
    assert_eq!(fs::read_to_string(dir.path().join("data/male.csv")).unwrap(), male);
}

#[test]
fn header_only_inputs_still_confirm() {
    let dir = setup(Some("name,age\n"), Some("name,age\n"));

    let out = run_in(dir.path());

    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), CONFIRMATION);
    assert_eq!(fs::read_to_string(dir.path().join("data/male.csv")).unwrap(), "name,age\n");
}
