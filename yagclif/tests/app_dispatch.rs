//! Route registration and dispatch through [`yagclif::App`].

use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow, ensure};
use rstest::{fixture, rstest};
use yagclif::{
    App, DispatchError, HandlerError, MapEnv, ParseError, Route, RouteError, Schema, YagclifError,
};

#[derive(Debug, Default, Schema)]
struct Echo {
    #[yagclif("shortname:u")]
    upper: bool,
}

type Log = Arc<Mutex<Vec<String>>>;

fn record(log: &Log, line: String) -> Result<(), HandlerError> {
    log.lock().map_err(|err| err.to_string())?.push(line);
    Ok(())
}

#[fixture]
fn log() -> Log {
    Log::default()
}

fn app(log: &Log) -> Result<App> {
    let mut app = App::with_env("demo", "demo application", MapEnv::new());
    let raw = Arc::clone(log);
    app.add_tokens_route("raw", "print raw tokens", move |tokens| {
        record(&raw, tokens.join(","))
    })?;
    let echo = Arc::clone(log);
    app.add_schema_route("echo", "echo tokens", move |options: Echo, tokens| {
        let text = tokens.join(" ");
        record(&echo, if options.upper { text.to_uppercase() } else { text })
    })?;
    app.add_tokens_route("fail", "always fails", |_| Err("nothing to do"))?;
    Ok(app)
}

#[expect(clippy::panic_in_result_fn, reason = "handler bug stand-in")]
fn explode() -> Result<(), HandlerError> {
    panic!("handler bug")
}

fn lines(log: &Log) -> Result<Vec<String>> {
    Ok(log.lock().map_err(|err| anyhow!("{err}"))?.clone())
}

#[rstest]
fn dispatches_to_the_named_route(log: Log) -> Result<()> {
    let app = app(&log)?;
    app.run_with_args(["demo", "echo", "-u", "hello", "world"], false)?;
    app.run_with_args(["demo", "raw", "-u", "x"], false)?;
    let seen = lines(&log)?;
    ensure!(seen == ["HELLO WORLD", "-u,x"], "unexpected calls {seen:?}");
    Ok(())
}

#[rstest]
fn duplicate_registration_keeps_the_first_route(log: Log) -> Result<()> {
    let mut app = app(&log)?;
    let err = app
        .add_route("echo", Route::tokens_only("second echo", |_| Ok::<_, HandlerError>(())))
        .err()
        .ok_or_else(|| anyhow!("expected duplicate error"))?;
    ensure!(
        matches!(err, RouteError::DuplicateName { ref name } if name == "echo"),
        "unexpected error {err}"
    );
    app.run_with_args(["demo", "echo", "kept"], false)?;
    ensure!(lines(&log)? == ["kept"], "first registration replaced");
    Ok(())
}

#[rstest]
#[case(&["demo"], "no action was selected")]
#[case(&["demo", "missing"], "missing action not found")]
#[case(&["demo", "fail"], "handler failed: nothing to do")]
#[case(&["demo", "echo", "-u", "-u"], "-u used multiple times")]
fn failures_are_returned_with_optional_help(
    log: Log,
    #[case] args: &[&str],
    #[case] message: &str,
) -> Result<()> {
    let app = app(&log)?;
    let plain = app
        .run_with_args(args.iter().copied(), false)
        .err()
        .ok_or_else(|| anyhow!("expected failure"))?;
    ensure!(plain.to_string() == message, "unexpected message {plain}");

    let helped = app
        .run_with_args(args.iter().copied(), true)
        .err()
        .ok_or_else(|| anyhow!("expected failure"))?;
    let expected = format!("{message}\n{}", app.help());
    ensure!(helped.to_string() == expected, "unexpected message {helped}");
    ensure!(
        helped.root().to_string() == message,
        "root should drop the help"
    );
    Ok(())
}

#[rstest]
fn root_errors_keep_their_kind(log: Log) -> Result<()> {
    let app = app(&log)?;
    let err = app
        .run_with_args(["demo"], true)
        .err()
        .ok_or_else(|| anyhow!("expected failure"))?;
    ensure!(
        matches!(err.root(), YagclifError::Dispatch(DispatchError::NoActionSelected)),
        "unexpected root {err:?}"
    );
    let parse = app
        .run_with_args(["demo", "echo", "-u", "-u"], false)
        .err()
        .ok_or_else(|| anyhow!("expected failure"))?;
    ensure!(
        matches!(parse, YagclifError::Parse(ParseError::DuplicateUse { .. })),
        "unexpected error {parse:?}"
    );
    Ok(())
}

#[rstest]
fn panicking_handlers_do_not_unwind_through_dispatch(log: Log) -> Result<()> {
    let mut app = app(&log)?;
    app.add_tokens_route("boom", "panics", |_| explode())?;
    let err = app
        .run_with_args(["demo", "boom"], false)
        .err()
        .ok_or_else(|| anyhow!("expected failure"))?;
    ensure!(err.to_string() == "handler panicked: handler bug", "unexpected {err}");
    Ok(())
}

#[rstest]
fn help_renders_routes_in_name_order(log: Log) -> Result<()> {
    let app = app(&log)?;
    let expected = "demo\ndemo application\n\n\
        \techo : echo tokens\n\t\tusage :\n\t\t\t--upper -u bool\n\n\
        \tfail : always fails\n\n\
        \traw : print raw tokens\n\n";
    ensure!(app.help() == expected, "unexpected help {:?}", app.help());
    Ok(())
}
