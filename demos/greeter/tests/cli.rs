//! End-to-end runs of the greeter binary.

use anyhow::{Result, ensure};
use assert_cmd::Command;
use rstest::rstest;

fn greeter() -> Result<Command> {
    #[expect(deprecated, reason = "cargo_bin is the standard assert_cmd API")]
    let mut cmd = Command::cargo_bin("greeter")?;
    cmd.env_remove("GREETER_TIMES").env("RUST_BACKTRACE", "0");
    Ok(cmd)
}

#[rstest]
#[case(&["greet"], "Hello, world!\n")]
#[case(&["greet", "-n", "ada", "--loud"], "HELLO, ADA!\n")]
#[case(&["greet", "-s", "Hi,Hey", "--punctuation", ".", "-n", "ada", "bob"], "Hi, ada and bob.\n")]
#[case(&["farewell", "--name", "ada"], "Goodbye, ada!\n")]
fn prints_messages(#[case] args: &[&str], #[case] expected: &str) -> Result<()> {
    let output = greeter()?.args(args).output()?;
    ensure!(output.status.success(), "greeter failed: {output:?}");
    let stdout = String::from_utf8(output.stdout)?;
    ensure!(stdout == expected, "unexpected stdout {stdout:?}");
    Ok(())
}

#[test]
fn env_sets_the_repeat_count() -> Result<()> {
    let output = greeter()?.env("GREETER_TIMES", "2").arg("greet").output()?;
    let stdout = String::from_utf8(output.stdout)?;
    ensure!(stdout == "Hello, world!\nHello, world!\n", "unexpected stdout {stdout:?}");
    Ok(())
}

#[rstest]
#[case(&["farewell"], "missing mandatory value for --name -n (who is leaving)")]
#[case(&["wave"], "wave action not found")]
#[case(&[], "no action was selected")]
fn failures_report_the_error_and_help(#[case] args: &[&str], #[case] message: &str) -> Result<()> {
    let output = greeter()?.args(args).output()?;
    ensure!(!output.status.success(), "greeter should fail");
    let stderr = String::from_utf8(output.stderr)?;
    ensure!(stderr.contains(message), "missing {message:?} in {stderr}");
    ensure!(stderr.contains("\tgreet : greet someone"), "missing help in {stderr}");
    Ok(())
}

#[test]
fn help_route_lists_both_commands() -> Result<()> {
    let output = greeter()?.arg("help").output()?;
    let stdout = String::from_utf8(output.stdout)?;
    ensure!(stdout.starts_with("greeter\nprints greetings and farewells\n\n"), "{stdout}");
    ensure!(stdout.contains("\t\t\t--loud -l bool: shout\n"), "{stdout}");
    Ok(())
}
