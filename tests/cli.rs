use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("prim_mst_cli_{}_{}", std::process::id(), name))
}

fn run(args: &[&PathBuf]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_prim_mst"))
        .args(args)
        .output()
        .expect("failed to spawn prim_mst")
}

fn run_on(name: &str, input: &str) -> (Output, Option<String>) {
    let input_path = scratch_path(&format!("{}_in.txt", name));
    let output_path = scratch_path(&format!("{}_out.txt", name));
    fs::write(&input_path, input).unwrap();
    let _ = fs::remove_file(&output_path);

    let out = run(&[&input_path, &output_path]);
    let written = fs::read_to_string(&output_path).ok();

    let _ = fs::remove_file(&input_path);
    let _ = fs::remove_file(&output_path);
    (out, written)
}

#[test]
fn test_writes_parent_file() {
    let (out, written) = run_on("basic", "4 3 0\n0 1 1\n1 2 2\n0 3 4\n");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(written.unwrap(), "0\tNIL\n1\t0\n2\t1\n3\t0\n");
}

#[test]
fn test_single_edge_with_tabs() {
    let (out, written) = run_on("single", "2\t1\t0\n0\t1\t5\n");
    assert!(out.status.success());
    assert_eq!(written.unwrap(), "0\tNIL\n1\t0\n");
}

#[test]
fn test_empty_graph_writes_empty_file() {
    let (out, written) = run_on("empty", "0\t0\t0\n");
    assert!(out.status.success());
    assert_eq!(written.unwrap(), "");
}

#[test]
fn test_malformed_header_fails_without_output() {
    let (out, written) = run_on("bad_header", "4 three 0\n");
    assert!(!out.status.success());
    assert!(written.is_none());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("malformed input at line 1"), "stderr: {}", stderr);
}

#[test]
fn test_short_edge_list_fails() {
    let (out, written) = run_on("short", "3 2 0\n0 1 1\n");
    assert!(!out.status.success());
    assert!(written.is_none());
}

#[test]
fn test_extra_field_on_edge_line_fails() {
    let (out, written) = run_on("extra_field", "10 2 0\n0 1 5 7\n1 2 3\n");
    assert!(!out.status.success());
    assert!(written.is_none());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("malformed input at line 2"), "stderr: {}", stderr);
}

#[test]
fn test_huge_vertex_count_is_reported() {
    let (out, written) = run_on("huge", "1152921504606846976 0 0\n");
    assert_eq!(out.status.code(), Some(1));
    assert!(written.is_none());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error:"), "stderr: {}", stderr);
    assert!(stderr.contains("too large"), "stderr: {}", stderr);
}

#[test]
fn test_missing_input_file() {
    let input_path = scratch_path("does_not_exist.txt");
    let output_path = scratch_path("missing_out.txt");
    let out = run(&[&input_path, &output_path]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot access"));
    assert!(!output_path.exists());
}

#[test]
fn test_unwritable_output() {
    let input_path = scratch_path("unwritable_in.txt");
    fs::write(&input_path, "2 1 0\n0 1 5\n").unwrap();
    let output_path = scratch_path("no_such_dir").join("out.txt");

    let out = run(&[&input_path, &output_path]);
    let _ = fs::remove_file(&input_path);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot access"));
}

#[test]
fn test_wrong_argument_count() {
    let only = scratch_path("only_arg.txt");
    let out = run(&[&only]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("usage:"));
}
