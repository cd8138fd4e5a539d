//! Parameter block parsing.
//!
//! A call's parameter block is plain text, one parameter per line:
//!
//! ```text
//! SUBID integer Unique identifier for this subscription.
//! label string (optional) This is a text label that will be shown in the control panel.
//! ```
//!
//! Tokens are whitespace-separated: name, type, an optional `(optional)`
//! marker, then the description.

use tracing::warn;

use crate::errors::{GeneratorError, Result};
use crate::layout::{APOSTROPHE_ENTITY, NO_PARAMETERS, OPTIONAL_MARKER};
use crate::model::Parameter;

/// Parses a parameter block into parameters in source order.
///
/// Blank lines and the `No parameters.` sentinel are skipped.
///
/// ## Errors
///
/// Returns `GeneratorError::Structure` for a line without a type token.
///
/// ## Examples
///
/// ```
/// use vultr_gen::params::parse_parameter_block;
///
/// let params = parse_parameter_block("call 'x'", "SUBID Integer Subscription id\n").unwrap();
/// assert_eq!(params[0].name, "SUBID");
/// assert!(!params[0].optional);
/// assert!(parse_parameter_block("call 'x'", "No parameters.").unwrap().is_empty());
/// ```
pub fn parse_parameter_block(context: &str, block: &str) -> Result<Vec<Parameter>> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && *line != NO_PARAMETERS)
        .map(|line| parse_parameter_line(context, line))
        .collect()
}

fn parse_parameter_line(context: &str, line: &str) -> Result<Parameter> {
    let mut tokens = line.split_whitespace().peekable();

    let (Some(name), Some(kind)) = (tokens.next(), tokens.next()) else {
        return Err(GeneratorError::structure(
            context,
            format!("parameter line {line:?} has no type"),
        ));
    };

    if kind.starts_with("(optional") {
        warn_near_miss(context, name, kind);
    }

    let optional = tokens.next_if_eq(&OPTIONAL_MARKER).is_some();
    if !optional && let Some(near_miss) = tokens.peek().filter(|t| is_near_miss_marker(t)) {
        warn_near_miss(context, name, near_miss);
    }

    let description = tokens
        .collect::<Vec<_>>()
        .join(" ")
        .replace(APOSTROPHE_ENTITY, "'");

    Ok(Parameter {
        name: name.to_string(),
        kind: kind.to_string(),
        optional,
        description,
    })
}

/// A token that looks like the optional marker without being exactly it.
fn is_near_miss_marker(token: &str) -> bool {
    token.starts_with("(optional") && token != OPTIONAL_MARKER
}

fn warn_near_miss(context: &str, parameter: &str, token: &str) {
    warn!(
        context,
        parameter,
        token,
        "parameter marker is not exactly (optional); treating it as required"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const CTX: &str = "call 'server_label_set'";

    #[test]
    fn parses_required_and_optional() {
        let block = "SUBID Integer Unique identifier for this subscription.\n\
                     label String (optional) This is a text label.\n";
        let params = parse_parameter_block(CTX, block).unwrap();

        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "SUBID");
        assert_eq!(params[0].kind, "Integer");
        assert!(!params[0].optional);
        assert_eq!(params[0].description, "Unique identifier for this subscription.");

        assert_eq!(params[1].name, "label");
        assert_eq!(params[1].kind, "String");
        assert!(params[1].optional);
        assert_eq!(params[1].description, "This is a text label.");
    }

    #[test]
    fn sentinel_and_blank_lines_yield_nothing() {
        assert!(parse_parameter_block(CTX, "No parameters.").unwrap().is_empty());
        assert!(parse_parameter_block(CTX, "\n  \nNo parameters.\n\n").unwrap().is_empty());
        assert!(parse_parameter_block(CTX, "").unwrap().is_empty());
    }

    #[test]
    fn decodes_apostrophe_entity() {
        let params = parse_parameter_block(
            CTX,
            "SNAPSHOTID string (optional) If you&#039;ve selected the &#039;snapshot&#039; OS",
        )
        .unwrap();
        assert_eq!(params[0].description, "If you've selected the 'snapshot' OS");
    }

    #[test]
    fn description_may_be_empty() {
        let params = parse_parameter_block(CTX, "tag String").unwrap();
        assert_eq!(params[0].description, "");
        assert!(!params[0].optional);
    }

    #[test]
    fn collapses_runs_of_whitespace() {
        let params = parse_parameter_block(CTX, "DCID  integer   Location  to use\r\n").unwrap();
        assert_eq!(params[0].kind, "integer");
        assert_eq!(params[0].description, "Location to use");
    }

    #[test]
    fn marker_must_be_third_token() {
        let params = parse_parameter_block(CTX, "label String text (optional)").unwrap();
        assert!(!params[0].optional);
        assert_eq!(params[0].description, "text (optional)");
    }

    #[test]
    fn line_without_type_is_structural_error() {
        let err = parse_parameter_block(CTX, "SUBID").unwrap_err();
        assert!(matches!(err, GeneratorError::Structure { .. }));
    }

    #[test]
    #[tracing_test::traced_test]
    fn near_miss_marker_is_required_and_logged() {
        let params = parse_parameter_block(
            CTX,
            "notify_activate string (optional, default 'yes') 'yes' or 'no'.",
        )
        .unwrap();

        assert!(!params[0].optional);
        assert_eq!(params[0].description, "(optional, default 'yes') 'yes' or 'no'.");
        assert!(logs_contain("not exactly (optional)"));
    }

    #[test]
    #[tracing_test::traced_test]
    fn marker_in_type_position_is_logged() {
        let params = parse_parameter_block(
            CTX,
            "ddos_protection (optional, default 'no') If yes, DDOS protection will be enabled.",
        )
        .unwrap();

        assert!(!params[0].optional);
        assert_eq!(params[0].kind, "(optional,");
        assert!(logs_contain("not exactly (optional)"));
        assert!(logs_contain("ddos_protection"));
    }
}
