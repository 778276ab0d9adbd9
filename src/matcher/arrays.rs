//! Array matchers.

use super::{MatchOutcome, Matcher, Syntax, Tag};
use crate::error::Result;
use crate::typecheck::TypeChecker;
use crate::value::Value;

fn key_text(key: &Value) -> String {
    match key {
        Value::Int(n) => n.to_string(),
        Value::Str(s) | Value::Regex(s) => s.clone(),
        other => other.render(),
    }
}

fn contains_key(array: &Value, key: &Value) -> bool {
    match array {
        Value::Map(entries) => entries.contains_key(&key_text(key)),
        Value::Array(items) => match key {
            Value::Int(n) => *n >= 0 && (*n as usize) < items.len(),
            _ => false,
        },
        _ => false,
    }
}

/// `?:array has key ?:int,string`
#[derive(Debug, Default)]
pub struct HasKey;

impl Matcher for HasKey {
    fn syntaxes(&self) -> Vec<Syntax> {
        vec![Syntax {
            template: "?:array has key ?:int,string",
            description: "Assert an array has key.",
        }]
    }

    fn matches(
        &self,
        _skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome> {
        let array = checker.check(&["array"], &args[0])?;
        let key = checker.check(&["int", "string"], &args[1])?;
        if contains_key(&array, &key) {
            Ok(MatchOutcome::Matched)
        } else {
            Ok(MatchOutcome::failed(format!(
                "Expected {} to have key {}.",
                array.render(),
                key.render()
            )))
        }
    }

    fn tags(&self) -> &'static [Tag] {
        &[Tag::Arrays]
    }
}

/// `?:array does not have key ?:int,string` — inverts [`HasKey`].
#[derive(Debug, Default)]
pub struct DoesNotHaveKey {
    inner: HasKey,
}

impl Matcher for DoesNotHaveKey {
    fn syntaxes(&self) -> Vec<Syntax> {
        vec![Syntax {
            template: "?:array does not have key ?:int,string",
            description: "Assert an array does not have key.",
        }]
    }

    fn matches(
        &self,
        skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome> {
        match self.inner.matches(skeleton, checker, args)? {
            MatchOutcome::Matched => {
                let array = checker.check(&["array"], &args[0])?;
                let key = checker.check(&["int", "string"], &args[1])?;
                Ok(MatchOutcome::failed(format!(
                    "Expected {} to not have key {}.",
                    array.render(),
                    key.render()
                )))
            }
            MatchOutcome::Failed(_) => Ok(MatchOutcome::Matched),
        }
    }

    fn tags(&self) -> &'static [Tag] {
        &[Tag::Arrays]
    }
}

/// `?:array is associative` — keyed maps are associative, zero-indexed
/// lists are not.
#[derive(Debug, Default)]
pub struct IsAssociative;

impl Matcher for IsAssociative {
    fn syntaxes(&self) -> Vec<Syntax> {
        vec![Syntax {
            template: "?:array is associative",
            description: "Assert an array is associative.",
        }]
    }

    fn matches(
        &self,
        _skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome> {
        let array = checker.check(&["array"], &args[0])?;
        match array {
            Value::Map(_) => Ok(MatchOutcome::Matched),
            other => Ok(MatchOutcome::failed(format!(
                "Expected {} to be an associative array.",
                other.render()
            ))),
        }
    }

    fn tags(&self) -> &'static [Tag] {
        &[Tag::Arrays]
    }
}
