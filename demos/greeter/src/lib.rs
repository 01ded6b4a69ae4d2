//! A two-route greeting tool built on `yagclif`.
//!
//! `greet` and `farewell` each bind their own schema. Rendering is kept free
//! of I/O so it can be tested directly; the handlers only write the result.

pub mod error;

use std::io::{self, Write};

use yagclif::{App, Schema, YagclifResult};

/// Options for the `greet` route.
#[derive(Debug, Default, Clone, PartialEq, Eq, Schema)]
pub struct Greet {
    /// Who to greet.
    #[yagclif("shortname:n;default:world;description:who to greet")]
    pub name: String,
    /// Greeting words, one per repetition, cycling when `times` exceeds them.
    #[yagclif("shortname:s;delimiter:,;default:Hello;description:comma separated salutations")]
    pub salutations: Vec<String>,
    /// Number of repetitions.
    #[yagclif("shortname:t;env:GREETER_TIMES;default:1")]
    pub times: u8,
    /// Shared output options.
    pub style: Style,
}

/// Options for the `farewell` route.
#[derive(Debug, Default, Clone, PartialEq, Eq, Schema)]
pub struct Farewell {
    /// Who is leaving.
    #[yagclif("mandatory;shortname:n;description:who is leaving")]
    pub name: String,
    /// Shared output options.
    pub style: Style,
}

/// Output options shared by both routes.
#[derive(Debug, Default, Clone, PartialEq, Eq, Schema)]
pub struct Style {
    /// Shout the message.
    #[yagclif("shortname:l;description:shout")]
    pub loud: bool,
    /// Trailing punctuation.
    #[yagclif("default:!")]
    pub punctuation: String,
}

impl Style {
    fn apply(&self, text: &str) -> String {
        let styled = format!("{text}{}", self.punctuation);
        if self.loud { styled.to_uppercase() } else { styled }
    }
}

/// Renders the lines printed by `greet`.
#[must_use]
pub fn greeting(greet: &Greet, extra: &[String]) -> Vec<String> {
    let mut recipients = vec![greet.name.as_str()];
    recipients.extend(extra.iter().map(String::as_str));
    let audience = recipients.join(" and ");
    let salutations: Vec<&str> = if greet.salutations.is_empty() {
        vec!["Hello"]
    } else {
        greet.salutations.iter().map(String::as_str).collect()
    };
    salutations
        .into_iter()
        .cycle()
        .take(usize::from(greet.times))
        .map(|salutation| greet.style.apply(&format!("{salutation}, {audience}")))
        .collect()
}

/// Renders the line printed by `farewell`.
#[must_use]
pub fn farewell(farewell: &Farewell) -> String {
    farewell.style.apply(&format!("Goodbye, {}", farewell.name))
}

fn print_lines(lines: &[String]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

/// Builds the application with both routes registered.
///
/// # Errors
///
/// Returns a schema error if either options struct is rejected.
pub fn build_app() -> YagclifResult<App> {
    let mut app = App::new("greeter", "prints greetings and farewells");
    app.add_schema_route("greet", "greet someone", |greet: Greet, extra| {
        tracing::debug!(?greet, "greeting");
        print_lines(&greeting(&greet, &extra))
    })?;
    app.add_schema_route("farewell", "say goodbye", |leave: Farewell, _| {
        print_lines(&[farewell(&leave)])
    })?;
    Ok(app)
}
