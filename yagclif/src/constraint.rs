//! Parsing of per-field constraint strings.
//!
//! A constraint string is `clause (';' clause)*` where each clause is `key`
//! or `key:value`. The empty string carries no constraints.

use crate::SchemaError;

/// Separator between clauses.
pub(crate) const CLAUSE_DELIMITER: &str = ";";

/// Separator between a clause key and its value.
const VALUE_DELIMITER: char = ':';

/// A single recognised constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Constraint {
    Description(String),
    ShortName(String),
    Mandatory,
    Default(String),
    Env(String),
    Delimiter(String),
    Omit,
}

/// Returns `true` when `tag` contains the `omit` clause.
///
/// Only the bare key is inspected so an otherwise malformed tag can still be
/// omitted, matching what `#[derive(Schema)]` decides at compile time.
pub(crate) fn is_omitted(tag: &str) -> bool {
    tag.split(CLAUSE_DELIMITER).any(|clause| clause == "omit")
}

/// Parse every clause of `tag` for the field named `field`.
pub(crate) fn parse_constraints(field: &str, tag: &str) -> Result<Vec<Constraint>, SchemaError> {
    if tag.is_empty() {
        return Ok(Vec::new());
    }
    tag.split(CLAUSE_DELIMITER)
        .map(|clause| parse_clause(field, clause))
        .collect()
}

fn parse_clause(field: &str, clause: &str) -> Result<Constraint, SchemaError> {
    let (key, value) = split_clause(field, clause)?;
    let owned = || value.unwrap_or_default().to_owned();
    match key {
        "description" => Ok(Constraint::Description(owned())),
        "shortname" => Ok(Constraint::ShortName(owned())),
        "mandatory" => Ok(Constraint::Mandatory),
        "default" => Ok(Constraint::Default(owned())),
        "env" => Ok(Constraint::Env(owned())),
        "delimiter" => Ok(Constraint::Delimiter(owned())),
        "omit" => Ok(Constraint::Omit),
        other => Err(SchemaError::UnknownConstraint {
            field: field.to_owned(),
            clause: clause.to_owned(),
            key: other.to_owned(),
        }),
    }
}

fn split_clause<'a>(field: &str, clause: &'a str) -> Result<(&'a str, Option<&'a str>), SchemaError> {
    let mut parts = clause.splitn(3, VALUE_DELIMITER);
    let key = parts.next().unwrap_or_default();
    let value = parts.next();
    if parts.next().is_some() {
        return Err(SchemaError::ConstraintSyntax {
            field: field.to_owned(),
            clause: clause.to_owned(),
        });
    }
    Ok((key, value))
}
