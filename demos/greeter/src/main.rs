//! Greeter entry point: install reporting, build the app, dispatch.

use std::io;

use greeter::build_app;
use greeter::error::GreeterError;
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    run().map_err(color_eyre::eyre::Report::from)
}

fn run() -> Result<(), GreeterError> {
    let app = build_app()?;
    if std::env::args().nth(1).as_deref() == Some("help") {
        app.write_help(&mut io::stdout().lock())?;
        return Ok(());
    }
    app.run(true)?;
    Ok(())
}
