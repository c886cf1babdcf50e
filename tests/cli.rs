//! End-to-end tests driving the compiled binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn herald() -> Command {
    Command::cargo_bin("herald").unwrap()
}

#[test]
fn dispatches_over_the_selected_channel() {
    herald()
        .args([
            "--channel",
            "email",
            "--recipient",
            "user@example.com",
            "--message",
            "Hello",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Sending email to user@example.com: Hello",
        ));
}

#[test]
fn dispatches_over_all_channels_by_default() {
    herald()
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Sending email to")
                .and(predicate::str::contains("Sending SMS to"))
                .and(predicate::str::contains("Sending push notification to device"))
                .and(predicate::str::contains("Sending Slack message to channel"))
                .and(predicate::str::contains("Sending WhatsApp to"))
                .and(predicate::str::contains("Sending Telegram message to")),
        );
}

#[test]
fn holder_demo_reports_a_single_shared_instance() {
    herald()
        .args(["--holder-value", "First instance"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(
                "Holder works, both references point to the same instance.",
            )
            .and(predicate::str::contains("first value: First instance"))
            .and(predicate::str::contains(
                "first value after update: Updated value",
            ))
            .and(predicate::str::contains("Direct construction rejected:"))
            .and(predicate::str::contains(
                "Executing business logic with value: Updated value",
            )),
        );
}

#[test]
fn json_output_emits_records() {
    herald()
        .args(["--json", "--channel", "sms", "--message", "Hello"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"kind\":\"sms\"")
                .and(predicate::str::contains("\"confirmation\":\"Sending SMS to")),
        );
}

#[test]
fn rejects_an_unknown_channel_kind() {
    herald().args(["--channel", "fax"]).assert().failure();
}
