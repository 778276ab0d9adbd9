//! String matchers.

use super::{MatchOutcome, Matcher, Syntax, Tag};
use crate::error::{Error, Result};
use crate::typecheck::TypeChecker;
use crate::value::Value;
use regex::Regex;

fn text_arg(checker: &TypeChecker, value: &Value) -> Result<String> {
    match checker.check(&["string"], value)? {
        Value::Str(s) | Value::Regex(s) => Ok(s),
        other => Err(Error::DataTypeMismatch {
            actual: other.type_name().to_string(),
            accepted: vec!["string".to_string()],
        }),
    }
}

/// `?:string matches regex ?:regex`
#[derive(Debug, Default)]
pub struct MatchesRegex;

impl Matcher for MatchesRegex {
    fn syntaxes(&self) -> Vec<Syntax> {
        vec![Syntax {
            template: "?:string matches regex ?:regex",
            description: "Assert a string matches a regular expression.",
        }]
    }

    fn matches(
        &self,
        _skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome> {
        let subject = text_arg(checker, &args[0])?;
        let pattern = text_arg(checker, &args[1])?;
        let regex = match Regex::new(&pattern) {
            Ok(regex) => regex,
            Err(_) => {
                return Ok(MatchOutcome::failed(format!(
                    "/{}/ is not a valid regular expression.",
                    pattern
                )))
            }
        };
        if regex.is_match(&subject) {
            Ok(MatchOutcome::Matched)
        } else {
            Ok(MatchOutcome::failed(format!(
                "Expected \"{}\" to match /{}/.",
                subject, pattern
            )))
        }
    }

    fn tags(&self) -> &'static [Tag] {
        &[Tag::Strings]
    }
}
