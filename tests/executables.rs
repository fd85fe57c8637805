//! Runs the built generators and checks what they print.

use std::process::Command;

use approx::assert_relative_eq;

fn stdout_of(exe: &str) -> String {
    let output = Command::new(exe).env_remove("RUST_LOG").output().expect("failed to run generator");
    assert!(output.status.success(), "generator exited with {:?}", output.status);
    String::from_utf8(output.stdout).expect("generator output is not UTF-8")
}

fn columns(line: &str) -> Vec<f64> {
    line.split_whitespace().map(|token| token.parse::<f64>().unwrap()).collect()
}

#[test]
fn grb_sphere_prints_two_lines() {
    let text = stdout_of(env!("CARGO_BIN_EXE_grb_sphere"));
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(lines, vec!["1D_sphere GRB 1 0.0 -1", "100000.0 10000000000.0 58025000000.0 0.3"]);
    assert_eq!(columns(lines[1]), vec![1.0e5, 1.0e10, 5.0 * 1.1605e10, 0.3]);
}

#[test]
fn shell_profile_prints_header_and_hundred_rows() {
    let text = stdout_of(env!("CARGO_BIN_EXE_shell_profile"));
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 101);
    assert_eq!(lines[0], "1D_sphere 100 900000.0");

    let first = columns(lines[1]);
    assert_eq!(first[0], 901000.0);
    let last = columns(lines[100]);
    assert_eq!(last[0], 1.0e6);
    assert_eq!(last[1], 0.0);

    for (i, line) in lines[1..].iter().enumerate() {
        let row = columns(line);
        assert_eq!(row.len(), 4);
        let r = 9.0e5 + (i + 1) as f64 * 1.0e3;
        assert_relative_eq!(row[1], 2e12 * (1.0 - (r / 1.0e6).powi(2)), max_relative = 1.0e-9, epsilon = 1.0e-3);
        assert_eq!(row[2], 58025000000.0);
        assert_eq!(row[3], 0.2);
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    for exe in [env!("CARGO_BIN_EXE_grb_sphere"), env!("CARGO_BIN_EXE_shell_profile")] {
        assert_eq!(stdout_of(exe), stdout_of(exe));
    }
}
