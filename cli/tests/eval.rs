//! End-to-end tests for the `eval` command.

use assert_cmd::Command;
use predicates::prelude::*;

fn tally() -> Command {
    Command::cargo_bin("tally").unwrap()
}

#[test]
fn eval_prints_formatted_result() {
    tally()
        .args(["eval", "2 + 3 * 4"])
        .assert()
        .success()
        .stdout("14\n");
}

#[test]
fn eval_handles_implicit_multiplication() {
    tally()
        .args(["eval", "2(3+4)"])
        .assert()
        .success()
        .stdout("14\n");
}

#[test]
fn eval_power_is_left_to_right() {
    tally()
        .args(["eval", "2^3^2"])
        .assert()
        .success()
        .stdout("64\n");
}

#[test]
fn eval_suppresses_floating_point_noise() {
    tally()
        .args(["eval", "0.1 + 0.2"])
        .assert()
        .success()
        .stdout("0.3\n");
}

#[test]
fn eval_echoes_the_normalized_expression() {
    tally()
        .args(["eval", "--echo", "2(3+4)"])
        .assert()
        .success()
        .stdout("2 * (3 + 4) = 14\n");
}

#[test]
fn eval_reports_division_by_zero() {
    tally()
        .args(["eval", "--no-color", "1/0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Expression Error: Division by zero is not allowed",
        ));
}

#[test]
fn eval_reports_mismatched_parentheses() {
    tally()
        .args(["eval", "--no-color", "(2+3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Expression Error: Mismatched parentheses",
        ));
}
