use assert_cmd::{cargo_bin, Command};
use predicates::prelude::*;

fn ticket_machine() -> Command {
    let mut cmd = Command::new(cargo_bin!("ticket-machine"));
    cmd.env_remove("TICKET_MACHINE_LANG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_happy_path_from_arguments() {
    ticket_machine()
        .args(["--lang", "en", "select", "pay", "dispense"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Ticket selected.")
                .and(predicate::str::contains("Money inserted."))
                .and(predicate::str::contains("Ticket dispensed.")),
        );
}

#[test]
fn test_default_language_is_russian() {
    ticket_machine()
        .arg("cancel")
        .assert()
        .success()
        .stdout("Нечего отменять.\n");
}

#[test]
fn test_language_from_environment() {
    ticket_machine()
        .env("TICKET_MACHINE_LANG", "en")
        .arg("pay")
        .assert()
        .success()
        .stdout("Select a ticket first.\n");
}

#[test]
fn test_actions_from_stdin() {
    ticket_machine()
        .args(["--lang", "en"])
        .write_stdin("select\n\ncancel\nquit\ndispense\n")
        .assert()
        .success()
        .stdout("Ticket selected. Waiting for money.\nTransaction canceled. Returning to the initial state.\n");
}

#[test]
fn test_unknown_action_is_skipped() {
    ticket_machine()
        .args(["--lang", "en", "refund", "select"])
        .assert()
        .success()
        .stdout("Ticket selected. Waiting for money.\n")
        .stderr(predicate::str::contains("unknown action 'refund'"));
}

#[test]
fn test_initial_state_reaches_canceled() {
    ticket_machine()
        .args(["--lang", "en", "--initial-state", "transaction-canceled", "select"])
        .assert()
        .success()
        .stdout("Transaction was canceled. Select a ticket again.\n");
}

#[test]
fn test_invalid_initial_state_is_usage_error() {
    ticket_machine()
        .args(["--initial-state", "broken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown state 'broken'"));
}

#[test]
fn test_history_is_printed_as_json() {
    let output = ticket_machine()
        .args(["--lang", "en", "--history", "select", "cancel"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json_start = stdout.find('{').unwrap();
    let history: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();

    let transitions = history["transitions"].as_array().unwrap();
    assert_eq!(transitions.len(), 2);
    assert_eq!(transitions[0]["from"], "Idle");
    assert_eq!(transitions[0]["to"], "WaitingForMoney");
    assert_eq!(transitions[1]["trigger"], "cancel_transaction");
}

#[test]
fn test_open_transaction_is_warned_at_exit() {
    ticket_machine()
        .args(["--lang", "en", "select"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "session ended with an open transaction",
        ));
}

#[test]
fn test_completed_purchase_ends_without_warning() {
    ticket_machine()
        .args(["--lang", "en", "select", "pay", "dispense"])
        .assert()
        .success()
        .stderr(predicate::str::contains("open transaction").not());
}

#[test]
fn test_exit_ends_stdin_session() {
    ticket_machine()
        .args(["--lang", "en"])
        .write_stdin("select\nexit\npay\n")
        .assert()
        .success()
        .stdout("Ticket selected. Waiting for money.\n");
}

#[test]
fn test_quit_is_case_insensitive() {
    ticket_machine()
        .args(["--lang", "en"])
        .write_stdin("select\nQUIT\npay\n")
        .assert()
        .success()
        .stdout("Ticket selected. Waiting for money.\n")
        .stderr(predicate::str::contains("unknown action").not());
}

#[test]
fn test_unknown_action_is_reported_once() {
    let output = ticket_machine()
        .args(["--lang", "en", "refund"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("refund").count(), 1, "stderr: {stderr}");
}

#[test]
fn test_invalid_language_is_usage_error() {
    ticket_machine()
        .args(["--lang", "de", "select"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown language 'de'"));
}
