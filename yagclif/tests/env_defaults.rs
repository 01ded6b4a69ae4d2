//! `env:` defaults read from the real process environment.
//!
//! These tests mutate process-wide state, so each one holds environment
//! guards from the shared helper crate and runs under `#[serial]`.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use serial_test::serial;
use test_helpers::env;
use yagclif::{App, HandlerError, ParameterSet, Schema, SchemaError, YagclifError};

#[derive(Debug, Default, Schema)]
struct Connect {
    #[yagclif("env:YAGCLIF_IT_HOST;default:localhost")]
    host: String,
    #[yagclif("env:YAGCLIF_IT_PORT")]
    port: u16,
    #[yagclif("env:YAGCLIF_IT_TAGS;delimiter:,")]
    tags: Vec<String>,
}

#[rstest]
#[case::env_wins(Some("db.internal"), "db.internal")]
#[case::empty_falls_back(Some(""), "localhost")]
#[case::unset_falls_back(None, "localhost")]
#[serial]
fn env_value_takes_precedence(#[case] value: Option<&str>, #[case] expected: &str) -> Result<()> {
    let _scope = env::scope(|lock| {
        let host = match value {
            Some(raw) => lock.set_var("YAGCLIF_IT_HOST", raw),
            None => lock.remove_var("YAGCLIF_IT_HOST"),
        };
        vec![
            host,
            lock.remove_var("YAGCLIF_IT_PORT"),
            lock.remove_var("YAGCLIF_IT_TAGS"),
        ]
    });
    let (connect, _) = yagclif::parse_from::<Connect, [&str; 0]>([])?;
    ensure!(connect.host == expected, "unexpected host {}", connect.host);
    ensure!(connect.port == 0, "port should stay unset");
    Ok(())
}

#[test]
#[serial]
fn command_line_beats_env() -> Result<()> {
    let _port = env::set_var("YAGCLIF_IT_PORT", "5432");
    let _tags = env::set_var("YAGCLIF_IT_TAGS", "a,b");
    let (connect, _) = yagclif::parse_from::<Connect, _>(["--port", "6543"])?;
    ensure!(connect.port == 6543, "unexpected port {}", connect.port);
    ensure!(connect.tags == ["a", "b"], "unexpected tags {:?}", connect.tags);
    Ok(())
}

#[test]
#[serial]
fn malformed_env_value_fails_schema_construction() -> Result<()> {
    let _port = env::set_var("YAGCLIF_IT_PORT", "not-a-port");
    let err = ParameterSet::from_schema::<Connect>()
        .err()
        .ok_or_else(|| anyhow!("expected a schema error"))?;
    ensure!(
        matches!(err, SchemaError::InvalidDefault { ref origin, .. } if origin == "env YAGCLIF_IT_PORT"),
        "unexpected error {err}"
    );
    Ok(())
}

#[test]
#[serial]
fn help_shows_the_current_env_value() -> Result<()> {
    let _host = env::set_var("YAGCLIF_IT_HOST", "db.internal");
    let mut app = App::new("client", "connects");
    app.add_schema_route("connect", "open a connection", |_: Connect, _| {
        Ok::<_, HandlerError>(())
    })?;
    let help = app.help();
    ensure!(
        help.contains("--host string (default=localhost;env={key:YAGCLIF_IT_HOST,value:db.internal})"),
        "unexpected help {help}"
    );
    Ok(())
}

#[test]
#[serial]
fn env_changed_after_registration_surfaces_at_dispatch() -> Result<()> {
    let mut app = App::new("client", "connects");
    {
        let _port = env::remove_var("YAGCLIF_IT_PORT");
        app.add_schema_route("connect", "", |_: Connect, _| Ok::<_, HandlerError>(()))?;
    }
    let _port = env::set_var("YAGCLIF_IT_PORT", "99999");
    let err = app
        .run_with_args(["client", "connect"], false)
        .err()
        .ok_or_else(|| anyhow!("expected a parse error"))?;
    ensure!(matches!(err, YagclifError::Parse(_)), "unexpected error {err}");
    Ok(())
}
