//! Single-pass token scan.

use tracing::trace;

use super::ParameterSet;
use crate::{EnvLookup, ParseError, Parameter, Schema, Value, ValueError};

/// Per-parse record of which parameters have been supplied.
struct Usage {
    used: Vec<bool>,
}

impl Usage {
    fn new(len: usize) -> Self {
        Self {
            used: vec![false; len],
        }
    }

    fn mark(&mut self, position: usize, token: &str) -> Result<(), ParseError> {
        match self.used.get_mut(position) {
            Some(used) if *used => Err(ParseError::DuplicateUse {
                name: token.to_owned(),
            }),
            Some(used) => {
                *used = true;
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn is_used(&self, position: usize) -> bool {
        self.used.get(position).copied().unwrap_or(false)
    }
}

/// A matched value-taking flag waiting for the next token.
struct Pending<'a> {
    parameter: &'a Parameter,
    name: String,
}

impl Pending<'_> {
    fn apply<T: Schema>(self, target: &mut T, token: &str) -> Result<(), ParseError> {
        let invalid = |err: ValueError| ParseError::InvalidValue {
            name: self.name.clone(),
            token: token.to_owned(),
            reason: err.to_string(),
        };
        let value = self.parameter.convert(token).map_err(invalid)?;
        target.assign(self.parameter.path(), value).map_err(invalid)?;
        trace!(name = %self.name, token, "assigned value");
        Ok(())
    }
}

pub(super) fn parse<T, S>(
    set: &ParameterSet,
    target: &mut T,
    tokens: &[S],
    env: &dyn EnvLookup,
) -> Result<Vec<String>, ParseError>
where
    T: Schema,
    S: AsRef<str>,
{
    apply_defaults(set, target, env)?;
    let mut usage = Usage::new(set.len());
    let mut remaining = Vec::new();
    let mut pending: Option<Pending<'_>> = None;

    for token in tokens.iter().map(AsRef::as_ref) {
        if let Some(setter) = pending.take() {
            setter.apply(target, token)?;
            continue;
        }
        let Some((position, parameter)) = set
            .position(token)
            .and_then(|at| set.parameters.get(at).map(|parameter| (at, parameter)))
        else {
            remaining.push(token.to_owned());
            continue;
        };
        usage.mark(position, token)?;
        if parameter.is_flag() {
            target
                .assign(parameter.path(), Value::Bool(true))
                .map_err(|err| ParseError::InvalidValue {
                    name: token.to_owned(),
                    token: token.to_owned(),
                    reason: err.to_string(),
                })?;
            trace!(name = token, "set flag");
        } else {
            pending = Some(Pending {
                parameter,
                name: token.to_owned(),
            });
        }
    }

    if let Some(setter) = pending {
        return Err(ParseError::MissingValue { name: setter.name });
    }
    check_mandatory(set, &usage)?;
    trace!(remaining = remaining.len(), "scan complete");
    Ok(remaining)
}

fn apply_defaults<T: Schema>(
    set: &ParameterSet,
    target: &mut T,
    env: &dyn EnvLookup,
) -> Result<(), ParseError> {
    for parameter in set {
        let Some((origin, value)) = parameter.resolve_default(env) else {
            continue;
        };
        let invalid = |err: ValueError| ParseError::InvalidDefault {
            name: parameter.long_name(),
            value: value.clone(),
            reason: err.to_string(),
        };
        let converted = parameter.convert(&value).map_err(invalid)?;
        target.assign(parameter.path(), converted).map_err(invalid)?;
        trace!(name = parameter.name(), %origin, "applied default");
    }
    Ok(())
}

fn check_mandatory(set: &ParameterSet, usage: &Usage) -> Result<(), ParseError> {
    let missing = set
        .iter()
        .enumerate()
        .find(|(position, parameter)| parameter.is_mandatory() && !usage.is_used(*position));
    match missing {
        Some((_, parameter)) => Err(ParseError::MissingMandatory {
            names: parameter.cli_names().join(" "),
            description: parameter.description().map(str::to_owned),
        }),
        None => Ok(()),
    }
}
